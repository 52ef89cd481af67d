use super::{ReportSettings, DISPLAY_CONFIDENCE};
use crate::types::assessment::RiskAssessment;

const DISCLAIMER: [&str; 3] = [
    "This prediction tool is for educational and research purposes only. It should NOT be used for actual medical diagnosis or treatment decisions.",
    "Always consult with qualified healthcare professionals for medical advice, diagnosis, and treatment.",
    "The predictions are based on statistical models and may not account for all individual factors.",
];

pub fn to_markdown(assessment: &RiskAssessment, settings: &ReportSettings) -> String {
    let mut output = String::new();
    output.push_str("# Risk Assessment Results\n\n");
    output.push_str(&format!(
        "Mortality risk score: {}/100\n",
        assessment.risk_score
    ));
    output.push_str(&format!("Risk level: {}\n", assessment.risk_level));
    if settings.show_confidence {
        output.push_str(&format!("Confidence: {DISPLAY_CONFIDENCE}\n"));
    }
    output.push('\n');

    output.push_str("## Contributing Risk Factors\n\n");
    if assessment.risk_factors.is_empty() {
        output.push_str("- none identified\n\n");
    } else {
        for factor in &assessment.risk_factors {
            output.push_str(&format!("- {factor}\n"));
        }
        output.push('\n');
    }

    output.push_str("## Clinical Recommendations\n\n");
    for (index, recommendation) in assessment.recommendations.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", index + 1, recommendation));
    }

    if settings.show_disclaimer {
        output.push_str("\n## Important Medical Disclaimer\n\n");
        for line in DISCLAIMER {
            output.push_str(&format!("{line}\n"));
        }
    }

    output
}
