use super::Contribution;
use crate::types::patient::PatientRecord;

pub fn temperature(record: &PatientRecord) -> Option<Contribution> {
    if record.temperature > 39.0 {
        Some(Contribution::new(
            8.0,
            "High fever (>39°C) - Indicates severe systemic response",
        ))
    } else if record.temperature > 38.0 {
        Some(Contribution::new(4.0, "Fever (>38°C) - Active infection marker"))
    } else {
        None
    }
}

pub fn oxygen_saturation(record: &PatientRecord) -> Option<Contribution> {
    match record.oxygen_saturation {
        s if s < 88 => Some(Contribution::new(
            25.0,
            "Severe hypoxemia (O2 sat <88%) - Critical respiratory compromise",
        )),
        s if s < 92 => Some(Contribution::new(
            15.0,
            "Moderate hypoxemia (O2 sat <92%) - Significant respiratory impairment",
        )),
        s if s < 95 => Some(Contribution::new(
            8.0,
            "Mild hypoxemia (O2 sat <95%) - Early respiratory compromise",
        )),
        _ => None,
    }
}

pub fn respiratory_rate(record: &PatientRecord) -> Option<Contribution> {
    match record.respiratory_rate {
        r if r > 30 => Some(Contribution::new(
            12.0,
            "Severe tachypnea (>30/min) - Respiratory distress",
        )),
        r if r > 24 => Some(Contribution::new(
            6.0,
            "Tachypnea (>24/min) - Increased respiratory effort",
        )),
        _ => None,
    }
}

pub fn heart_rate(record: &PatientRecord) -> Option<Contribution> {
    match record.heart_rate {
        r if r > 120 => Some(Contribution::new(
            8.0,
            "Severe tachycardia (>120 bpm) - Cardiovascular stress",
        )),
        r if r > 100 => Some(Contribution::new(
            4.0,
            "Tachycardia (>100 bpm) - Mild cardiovascular stress",
        )),
        _ => None,
    }
}

/// Systolic pressure only; the diastolic reading is not scored.
pub fn blood_pressure(record: &PatientRecord) -> Option<Contribution> {
    match record.blood_pressure_systolic {
        p if p < 90 => Some(Contribution::new(
            15.0,
            "Hypotension (SBP <90 mmHg) - Circulatory compromise",
        )),
        p if p > 180 => Some(Contribution::new(
            8.0,
            "Severe hypertension (SBP >180 mmHg) - Cardiovascular strain",
        )),
        _ => None,
    }
}
