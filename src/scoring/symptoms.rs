use super::Contribution;
use crate::types::patient::{PatientRecord, Symptom};

const POINTS_PER_CRITICAL_SYMPTOM: f64 = 5.0;

/// One combined factor for all critical symptoms present, listed in
/// [`Symptom::CRITICAL`] order.
pub fn critical_symptoms(record: &PatientRecord) -> Option<Contribution> {
    let present: Vec<&str> = Symptom::CRITICAL
        .into_iter()
        .filter(|symptom| record.has_symptom(*symptom))
        .map(Symptom::label)
        .collect();

    if present.is_empty() {
        return None;
    }

    Some(Contribution::new(
        POINTS_PER_CRITICAL_SYMPTOM * present.len() as f64,
        format!("Critical symptoms present: {}", present.join(", ")),
    ))
}

pub fn illness_duration(record: &PatientRecord) -> Option<Contribution> {
    match record.days_from_onset {
        d if d > 14 => Some(Contribution::new(
            8.0,
            "Prolonged illness (>14 days) - Persistent infection",
        )),
        d if d > 7 => Some(Contribution::new(
            4.0,
            "Extended illness (>7 days) - Delayed recovery",
        )),
        _ => None,
    }
}
