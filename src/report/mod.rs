pub mod json;
pub mod md;

use crate::error::RiskError;
use crate::types::assessment::RiskAssessment;
use std::str::FromStr;

/// Static display text shown next to every result; not derived from the score.
pub const DISPLAY_CONFIDENCE: &str = "87%";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

impl FromStr for OutputFormat {
    type Err = RiskError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "md" | "markdown" => Ok(Self::Md),
            other => Err(RiskError::UnsupportedFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSettings {
    pub format: OutputFormat,
    pub show_confidence: bool,
    pub show_disclaimer: bool,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Md,
            show_confidence: true,
            show_disclaimer: true,
        }
    }
}

pub fn render(
    assessment: &RiskAssessment,
    format: OutputFormat,
    settings: &ReportSettings,
) -> Result<String, RiskError> {
    match format {
        OutputFormat::Json => json::to_json(assessment).map_err(RiskError::Json),
        OutputFormat::Md => Ok(md::to_markdown(assessment, settings)),
    }
}
