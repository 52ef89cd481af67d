use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        };
        f.write_str(label)
    }
}

/// Symptom checklist offered by the intake form.
///
/// Variant order is the form's presentation order; `Ord` follows it, so a
/// `BTreeSet<Symptom>` iterates in checklist order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Symptom {
    #[serde(rename = "Fever")]
    Fever,
    #[serde(rename = "Cough")]
    Cough,
    #[serde(rename = "Shortness of breath")]
    ShortnessOfBreath,
    #[serde(rename = "Fatigue")]
    Fatigue,
    #[serde(rename = "Headache")]
    Headache,
    #[serde(rename = "Muscle aches")]
    MuscleAches,
    #[serde(rename = "Sore throat")]
    SoreThroat,
    #[serde(rename = "Loss of taste/smell")]
    LossOfTasteOrSmell,
    #[serde(rename = "Nausea")]
    Nausea,
    #[serde(rename = "Diarrhea")]
    Diarrhea,
    #[serde(rename = "Confusion")]
    Confusion,
    #[serde(rename = "Chest pain")]
    ChestPain,
}

impl Symptom {
    pub const ALL: [Symptom; 12] = [
        Symptom::Fever,
        Symptom::Cough,
        Symptom::ShortnessOfBreath,
        Symptom::Fatigue,
        Symptom::Headache,
        Symptom::MuscleAches,
        Symptom::SoreThroat,
        Symptom::LossOfTasteOrSmell,
        Symptom::Nausea,
        Symptom::Diarrhea,
        Symptom::Confusion,
        Symptom::ChestPain,
    ];

    /// Symptoms that carry extra weight, in the order they are reported.
    pub const CRITICAL: [Symptom; 3] = [
        Symptom::ShortnessOfBreath,
        Symptom::Confusion,
        Symptom::ChestPain,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Fever => "Fever",
            Self::Cough => "Cough",
            Self::ShortnessOfBreath => "Shortness of breath",
            Self::Fatigue => "Fatigue",
            Self::Headache => "Headache",
            Self::MuscleAches => "Muscle aches",
            Self::SoreThroat => "Sore throat",
            Self::LossOfTasteOrSmell => "Loss of taste/smell",
            Self::Nausea => "Nausea",
            Self::Diarrhea => "Diarrhea",
            Self::Confusion => "Confusion",
            Self::ChestPain => "Chest pain",
        }
    }

    pub fn is_critical(self) -> bool {
        Self::CRITICAL.contains(&self)
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = label.trim();
        Self::ALL
            .into_iter()
            .find(|symptom| symptom.label().eq_ignore_ascii_case(wanted))
    }
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A fully populated patient record, ready for scoring.
///
/// Values are taken as given; range checks belong to the collector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub age: i32,
    pub gender: Gender,
    pub temperature: f64,
    pub oxygen_saturation: i32,
    pub respiratory_rate: i32,
    pub heart_rate: i32,
    pub blood_pressure_systolic: i32,
    pub blood_pressure_diastolic: i32,
    pub diabetes: bool,
    pub hypertension: bool,
    pub heart_disease: bool,
    pub pulmonary_disease: bool,
    pub kidney_disease: bool,
    pub immunocompromised: bool,
    pub symptoms: BTreeSet<Symptom>,
    pub days_from_onset: i32,
}

impl PatientRecord {
    pub fn has_symptom(&self, symptom: Symptom) -> bool {
        self.symptoms.contains(&symptom)
    }
}

/// Raw intake payload; any field may be left out and filled from defaults.
///
/// Field names are snake_case, with the intake form's camelCase names
/// accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatientInput {
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    pub temperature: Option<f64>,
    #[serde(alias = "oxygenSaturation")]
    pub oxygen_saturation: Option<i32>,
    #[serde(alias = "respiratoryRate")]
    pub respiratory_rate: Option<i32>,
    #[serde(alias = "heartRate")]
    pub heart_rate: Option<i32>,
    #[serde(alias = "bloodPressureSystolic")]
    pub blood_pressure_systolic: Option<i32>,
    #[serde(alias = "bloodPressureDiastolic")]
    pub blood_pressure_diastolic: Option<i32>,
    pub diabetes: Option<bool>,
    pub hypertension: Option<bool>,
    #[serde(alias = "heartDisease")]
    pub heart_disease: Option<bool>,
    #[serde(alias = "pulmonaryDisease")]
    pub pulmonary_disease: Option<bool>,
    #[serde(alias = "kidneyDisease")]
    pub kidney_disease: Option<bool>,
    pub immunocompromised: Option<bool>,
    pub symptoms: Option<Vec<String>>,
    #[serde(alias = "daysFromOnset")]
    pub days_from_onset: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn critical_symptoms_are_a_subset_of_the_vocabulary() {
        for symptom in Symptom::CRITICAL {
            assert!(Symptom::ALL.contains(&symptom));
            assert!(symptom.is_critical());
        }
        assert!(!Symptom::Cough.is_critical());
    }

    #[test]
    fn from_label_matches_display_text() {
        for symptom in Symptom::ALL {
            assert_eq!(Symptom::from_label(symptom.label()), Some(symptom));
        }
        assert_eq!(
            Symptom::from_label("  shortness of breath "),
            Some(Symptom::ShortnessOfBreath)
        );
        assert_eq!(Symptom::from_label("Hiccups"), None);
    }

    #[test]
    fn symptom_set_iterates_in_checklist_order() {
        let symptoms: BTreeSet<Symptom> = [Symptom::ChestPain, Symptom::Fever, Symptom::Confusion]
            .into_iter()
            .collect();
        let ordered: Vec<_> = symptoms.into_iter().collect();
        assert_eq!(
            ordered,
            vec![Symptom::Fever, Symptom::Confusion, Symptom::ChestPain]
        );
    }

    #[test]
    fn patient_input_accepts_camel_case_aliases() {
        let input: PatientInput = serde_json::from_str(
            r#"{"age": 70, "oxygenSaturation": 90, "heart_disease": true, "symptoms": ["Cough"]}"#,
        )
        .expect("input should parse");
        assert_eq!(input.age, Some(70));
        assert_eq!(input.oxygen_saturation, Some(90));
        assert_eq!(input.heart_disease, Some(true));
        assert_eq!(input.symptoms, Some(vec!["Cough".to_string()]));
        assert_eq!(input.temperature, None);
    }

    #[test]
    fn patient_input_rejects_unknown_fields() {
        let result = serde_json::from_str::<PatientInput>(r#"{"age": 70, "weight": 80}"#);
        assert!(result.is_err());
    }

    #[test]
    fn symptom_deserializes_from_label() {
        let symptom: Symptom =
            serde_json::from_str("\"Loss of taste/smell\"").expect("label should parse");
        assert_eq!(symptom, Symptom::LossOfTasteOrSmell);
        assert!(serde_json::from_str::<Symptom>("\"Hiccups\"").is_err());
    }
}
