use super::Contribution;
use crate::types::patient::PatientRecord;

/// Each condition contributes on its own; none excludes another.
pub fn comorbidities(record: &PatientRecord) -> Vec<Contribution> {
    [
        (
            record.diabetes,
            10.0,
            "Diabetes mellitus - Impaired immune response and vascular complications",
        ),
        (
            record.hypertension,
            6.0,
            "Hypertension - Cardiovascular risk factor",
        ),
        (
            record.heart_disease,
            12.0,
            "Cardiovascular disease - Increased cardiac complications risk",
        ),
        (
            record.pulmonary_disease,
            15.0,
            "Pulmonary disease - Compromised respiratory reserve",
        ),
        (
            record.kidney_disease,
            10.0,
            "Kidney disease - Multi-organ dysfunction risk",
        ),
        (
            record.immunocompromised,
            12.0,
            "Immunocompromised state - Reduced ability to fight infection",
        ),
    ]
    .into_iter()
    .filter(|(present, _, _)| *present)
    .map(|(_, points, factor)| Contribution::new(points, factor))
    .collect()
}
