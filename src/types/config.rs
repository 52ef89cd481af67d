use crate::collector::{self, CollectorSettings};
use crate::error::RiskError;
use crate::report::{OutputFormat, ReportSettings};
use crate::types::patient::PatientInput;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RiskConfig {
    pub collector: Option<CollectorConfig>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CollectorConfig {
    #[serde(default = "default_clamp")]
    pub clamp: bool,
    pub defaults: Option<PatientInput>,
}

fn default_clamp() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<String>,
    pub show_confidence: Option<bool>,
    pub show_disclaimer: Option<bool>,
}

impl RiskConfig {
    /// Form defaults overlaid with `[collector.defaults]`, plus the clamp switch.
    pub fn collector_settings(&self) -> Result<CollectorSettings, RiskError> {
        let builtin = CollectorSettings::default();
        match &self.collector {
            Some(collector_cfg) => {
                let defaults = match &collector_cfg.defaults {
                    Some(overrides) => collector::fill(overrides, &builtin.defaults)?,
                    None => builtin.defaults,
                };
                Ok(CollectorSettings {
                    clamp: collector_cfg.clamp,
                    defaults,
                })
            }
            None => Ok(builtin),
        }
    }

    pub fn report_settings(&self) -> Result<ReportSettings, RiskError> {
        let defaults = ReportSettings::default();
        match &self.report {
            Some(report) => Ok(ReportSettings {
                format: match &report.format {
                    Some(format) => format.parse::<OutputFormat>()?,
                    None => defaults.format,
                },
                show_confidence: report.show_confidence.unwrap_or(defaults.show_confidence),
                show_disclaimer: report.show_disclaimer.unwrap_or(defaults.show_disclaimer),
            }),
            None => Ok(defaults),
        }
    }

    pub fn validate(&self) -> Result<(), RiskError> {
        if let Some(format) = self.report.as_ref().and_then(|report| report.format.as_ref()) {
            if format.parse::<OutputFormat>().is_err() {
                return Err(RiskError::ConfigParse(format!(
                    "unsupported report.format: {format}"
                )));
            }
        }

        let settings = self
            .collector_settings()
            .map_err(|e| RiskError::ConfigParse(format!("collector.defaults: {e}")))?;
        let mut defaults = settings.defaults;

        if !defaults.temperature.is_finite() {
            return Err(RiskError::ConfigParse(
                "collector.defaults.temperature must be a finite number".to_string(),
            ));
        }

        for (field, value, range) in collector::intake_fields(&mut defaults) {
            if !range.contains(&*value) {
                return Err(RiskError::ConfigParse(format!(
                    "collector.defaults.{field} must be between {} and {} (found {value})",
                    range.start(),
                    range.end()
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::patient::{Gender, Symptom};

    #[test]
    fn parse_empty_config() {
        let cfg: RiskConfig = toml::from_str("").expect("empty config should parse");
        assert!(cfg.collector.is_none());
        assert!(cfg.validate().is_ok());
        let settings = cfg.collector_settings().expect("settings should resolve");
        assert!(settings.clamp);
        assert_eq!(settings.defaults.age, 65);
        assert_eq!(settings.defaults.gender, Gender::Male);
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[collector]
clamp = false

[collector.defaults]
age = 40
gender = "female"
temperature = 37.2
symptoms = ["Cough", "Fatigue"]

[report]
format = "json"
show_confidence = false
show_disclaimer = false
"#;
        let cfg: RiskConfig = toml::from_str(toml_str).expect("full config should parse");
        assert!(cfg.validate().is_ok());

        let collector = cfg.collector_settings().expect("collector settings");
        assert!(!collector.clamp);
        assert_eq!(collector.defaults.age, 40);
        assert_eq!(collector.defaults.gender, Gender::Female);
        assert_eq!(collector.defaults.temperature, 37.2);
        assert_eq!(collector.defaults.oxygen_saturation, 95);
        assert!(collector.defaults.has_symptom(Symptom::Fatigue));

        let report = cfg.report_settings().expect("report settings");
        assert_eq!(report.format, OutputFormat::Json);
        assert!(!report.show_confidence);
        assert!(!report.show_disclaimer);
    }

    #[test]
    fn clamp_defaults_to_true_when_collector_table_present() {
        let toml_str = r#"
[collector.defaults]
age = 50
"#;
        let cfg: RiskConfig = toml::from_str(toml_str).expect("config should parse");
        assert!(cfg.collector_settings().expect("settings").clamp);
    }

    #[test]
    fn validate_rejects_unknown_report_format() {
        let toml_str = r#"
[report]
format = "sarif"
"#;
        let cfg: RiskConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("unsupported report.format"));
    }

    #[test]
    fn validate_rejects_out_of_range_defaults() {
        let toml_str = r#"
[collector.defaults]
oxygen_saturation = 40
"#;
        let cfg: RiskConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err
            .to_string()
            .contains("collector.defaults.oxygen_saturation must be between 70 and 100"));
    }

    #[test]
    fn validate_rejects_unknown_default_symptom() {
        let toml_str = r#"
[collector.defaults]
symptoms = ["Hiccups"]
"#;
        let cfg: RiskConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("Hiccups"));
    }

    #[test]
    fn validate_accepts_range_boundaries() {
        let toml_str = r#"
[collector.defaults]
age = 120
oxygen_saturation = 70
respiratory_rate = 40
heart_rate = 40
blood_pressure_systolic = 200
blood_pressure_diastolic = 40
days_from_onset = 0
"#;
        let cfg: RiskConfig = toml::from_str(toml_str).expect("config should parse");
        assert!(cfg.validate().is_ok());
    }
}
