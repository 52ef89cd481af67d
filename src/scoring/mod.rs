pub mod comorbidities;
pub mod demographics;
pub mod recommendations;
pub mod symptoms;
pub mod vitals;

use crate::types::assessment::{RiskAssessment, RiskLevel};
use crate::types::patient::PatientRecord;

pub const MAX_SCORE: f64 = 100.0;

/// Points and explanation emitted by a single rule that fired.
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    pub points: f64,
    pub factor: String,
}

impl Contribution {
    pub fn new(points: f64, factor: impl Into<String>) -> Self {
        Self {
            points,
            factor: factor.into(),
        }
    }
}

/// Scores a patient record.
///
/// Every rule group is evaluated in a fixed order; contributions are
/// additive and independent, so the order only affects how factors are
/// listed. The sum is capped at [`MAX_SCORE`] and rounded last.
pub fn assess(record: &PatientRecord) -> RiskAssessment {
    let contributions = [
        demographics::age(record),
        demographics::gender(record),
        vitals::temperature(record),
        vitals::oxygen_saturation(record),
        vitals::respiratory_rate(record),
        vitals::heart_rate(record),
        vitals::blood_pressure(record),
    ]
    .into_iter()
    .flatten()
    .chain(comorbidities::comorbidities(record))
    .chain(symptoms::critical_symptoms(record))
    .chain(symptoms::illness_duration(record))
    .collect::<Vec<_>>();

    let total: f64 = contributions.iter().map(|c| c.points).sum();
    let capped = total.min(MAX_SCORE);
    let risk_level = RiskLevel::from_score(capped);

    let risk_factors = contributions
        .into_iter()
        .map(|contribution| contribution.factor)
        .collect();

    RiskAssessment {
        risk_score: capped.round() as u8,
        risk_level,
        risk_factors,
        recommendations: recommendations::recommendations(record, risk_level),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::types::patient::{Gender, PatientRecord, Symptom};
    use std::collections::BTreeSet;

    /// Healthy adult with every vital in the normal range.
    pub fn baseline() -> PatientRecord {
        PatientRecord {
            age: 30,
            gender: Gender::Female,
            temperature: 36.8,
            oxygen_saturation: 98,
            respiratory_rate: 16,
            heart_rate: 70,
            blood_pressure_systolic: 115,
            blood_pressure_diastolic: 75,
            diabetes: false,
            hypertension: false,
            heart_disease: false,
            pulmonary_disease: false,
            kidney_disease: false,
            immunocompromised: false,
            symptoms: BTreeSet::new(),
            days_from_onset: 2,
        }
    }

    pub fn form_defaults() -> PatientRecord {
        crate::collector::form_defaults()
    }

    pub fn severe() -> PatientRecord {
        PatientRecord {
            age: 85,
            gender: Gender::Female,
            oxygen_saturation: 85,
            respiratory_rate: 32,
            heart_rate: 125,
            blood_pressure_systolic: 85,
            pulmonary_disease: true,
            immunocompromised: true,
            symptoms: [Symptom::ShortnessOfBreath, Symptom::Confusion]
                .into_iter()
                .collect(),
            days_from_onset: 20,
            ..baseline()
        }
    }
}
