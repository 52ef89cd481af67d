use super::Contribution;
use crate::types::patient::{Gender, PatientRecord};

pub fn age(record: &PatientRecord) -> Option<Contribution> {
    match record.age {
        a if a >= 80 => Some(Contribution::new(
            30.0,
            "Advanced age (≥80 years) - Very high risk factor",
        )),
        a if a >= 70 => Some(Contribution::new(
            20.0,
            "Elderly age (70-79 years) - High risk factor",
        )),
        a if a >= 60 => Some(Contribution::new(
            10.0,
            "Older age (60-69 years) - Moderate risk factor",
        )),
        a if a >= 50 => Some(Contribution::new(
            5.0,
            "Middle age (50-59 years) - Mild risk factor",
        )),
        _ => None,
    }
}

pub fn gender(record: &PatientRecord) -> Option<Contribution> {
    matches!(record.gender, Gender::Male).then(|| {
        Contribution::new(5.0, "Male gender - Associated with higher mortality risk")
    })
}
