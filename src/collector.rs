use crate::error::{Result, RiskError};
use crate::types::patient::{Gender, PatientInput, PatientRecord, Symptom};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;
use std::path::Path;

pub const AGE_RANGE: RangeInclusive<i32> = 0..=120;
pub const OXYGEN_SATURATION_RANGE: RangeInclusive<i32> = 70..=100;
pub const RESPIRATORY_RATE_RANGE: RangeInclusive<i32> = 10..=40;
pub const HEART_RATE_RANGE: RangeInclusive<i32> = 40..=200;
pub const SYSTOLIC_RANGE: RangeInclusive<i32> = 80..=200;
pub const DIASTOLIC_RANGE: RangeInclusive<i32> = 40..=120;
pub const DAYS_FROM_ONSET_RANGE: RangeInclusive<i32> = 0..=30;

#[derive(Debug, Clone)]
pub struct CollectorSettings {
    pub clamp: bool,
    pub defaults: PatientRecord,
}

impl Default for CollectorSettings {
    fn default() -> Self {
        Self {
            clamp: true,
            defaults: form_defaults(),
        }
    }
}

/// Values the intake form is pre-filled with.
pub fn form_defaults() -> PatientRecord {
    PatientRecord {
        age: 65,
        gender: Gender::Male,
        temperature: 38.5,
        oxygen_saturation: 95,
        respiratory_rate: 22,
        heart_rate: 100,
        blood_pressure_systolic: 140,
        blood_pressure_diastolic: 90,
        diabetes: false,
        hypertension: false,
        heart_disease: false,
        pulmonary_disease: false,
        kidney_disease: false,
        immunocompromised: false,
        symptoms: BTreeSet::new(),
        days_from_onset: 7,
    }
}

/// Integer fields that have an intake range, paired with that range.
pub fn intake_fields(
    record: &mut PatientRecord,
) -> [(&'static str, &mut i32, RangeInclusive<i32>); 7] {
    [
        ("age", &mut record.age, AGE_RANGE),
        (
            "oxygen_saturation",
            &mut record.oxygen_saturation,
            OXYGEN_SATURATION_RANGE,
        ),
        (
            "respiratory_rate",
            &mut record.respiratory_rate,
            RESPIRATORY_RATE_RANGE,
        ),
        ("heart_rate", &mut record.heart_rate, HEART_RATE_RANGE),
        (
            "blood_pressure_systolic",
            &mut record.blood_pressure_systolic,
            SYSTOLIC_RANGE,
        ),
        (
            "blood_pressure_diastolic",
            &mut record.blood_pressure_diastolic,
            DIASTOLIC_RANGE,
        ),
        (
            "days_from_onset",
            &mut record.days_from_onset,
            DAYS_FROM_ONSET_RANGE,
        ),
    ]
}

pub fn parse_symptoms(labels: &[String]) -> Result<BTreeSet<Symptom>> {
    labels
        .iter()
        .map(|label| {
            Symptom::from_label(label)
                .ok_or_else(|| RiskError::InvalidInput(format!("unknown symptom: {label}")))
        })
        .collect()
}

/// Fills every missing field of `input` from `defaults`.
pub fn fill(input: &PatientInput, defaults: &PatientRecord) -> Result<PatientRecord> {
    let symptoms = match &input.symptoms {
        Some(labels) => parse_symptoms(labels)?,
        None => defaults.symptoms.clone(),
    };

    Ok(PatientRecord {
        age: input.age.unwrap_or(defaults.age),
        gender: input.gender.unwrap_or(defaults.gender),
        temperature: input.temperature.unwrap_or(defaults.temperature),
        oxygen_saturation: input.oxygen_saturation.unwrap_or(defaults.oxygen_saturation),
        respiratory_rate: input.respiratory_rate.unwrap_or(defaults.respiratory_rate),
        heart_rate: input.heart_rate.unwrap_or(defaults.heart_rate),
        blood_pressure_systolic: input
            .blood_pressure_systolic
            .unwrap_or(defaults.blood_pressure_systolic),
        blood_pressure_diastolic: input
            .blood_pressure_diastolic
            .unwrap_or(defaults.blood_pressure_diastolic),
        diabetes: input.diabetes.unwrap_or(defaults.diabetes),
        hypertension: input.hypertension.unwrap_or(defaults.hypertension),
        heart_disease: input.heart_disease.unwrap_or(defaults.heart_disease),
        pulmonary_disease: input.pulmonary_disease.unwrap_or(defaults.pulmonary_disease),
        kidney_disease: input.kidney_disease.unwrap_or(defaults.kidney_disease),
        immunocompromised: input.immunocompromised.unwrap_or(defaults.immunocompromised),
        symptoms,
        days_from_onset: input.days_from_onset.unwrap_or(defaults.days_from_onset),
    })
}

/// Builds the record handed to the scorer: defaults, validation, then clamping.
pub fn collect(input: &PatientInput, settings: &CollectorSettings) -> Result<PatientRecord> {
    let mut record = fill(input, &settings.defaults)?;

    if !record.temperature.is_finite() {
        return Err(RiskError::InvalidInput(format!(
            "temperature must be a finite number (found {})",
            record.temperature
        )));
    }

    if settings.clamp {
        for (field, value, range) in intake_fields(&mut record) {
            *value = clamp_field(field, *value, &range);
        }
    }

    Ok(record)
}

fn clamp_field(field: &str, value: i32, range: &RangeInclusive<i32>) -> i32 {
    let clamped = value.clamp(*range.start(), *range.end());
    if clamped != value {
        tracing::debug!(field, value, clamped, "clamped out-of-range input");
    }
    clamped
}

/// Reads a patient input file: `.toml` as TOML, anything else as JSON.
pub fn load_input(path: &Path) -> Result<PatientInput> {
    if !path.exists() {
        return Err(RiskError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let parsed = if is_toml {
        toml::from_str(&content).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(&content).map_err(|e| e.to_string())
    };
    parsed.map_err(|e| RiskError::InvalidInput(format!("{}: {}", path.display(), e)))
}
