use crate::types::assessment::RiskAssessment;

pub fn to_json(assessment: &RiskAssessment) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(assessment)
}
