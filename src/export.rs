use crate::error::{Result, RiskError};
use crate::types::assessment::RiskAssessment;
use crate::types::patient::PatientRecord;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

/// One-off snapshot of an assessment, written only on request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentExport {
    pub version: String,
    pub generated_at: String,
    pub input_sha256: String,
    pub assessment: RiskAssessment,
}

impl AssessmentExport {
    pub fn new(record: &PatientRecord, assessment: &RiskAssessment) -> Result<Self> {
        Ok(Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now().to_rfc3339(),
            input_sha256: record_digest(record)?,
            assessment: assessment.clone(),
        })
    }
}

/// Hex SHA-256 of the record's canonical JSON form.
pub fn record_digest(record: &PatientRecord) -> Result<String> {
    let bytes = serde_json::to_vec(record)?;
    let digest = Sha256::digest(&bytes);
    Ok(format!("{digest:x}"))
}

pub fn write_export(dir: &Path, export: &AssessmentExport) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(RiskError::Io)?;
    let stamp = Utc::now().format("%Y%m%dT%H%M%S%3fZ");
    let out_path = dir.join(format!("assessment-{stamp}.json"));
    let json = serde_json::to_string_pretty(export)?;
    fs::write(&out_path, json).map_err(RiskError::Io)?;
    tracing::info!(path = %out_path.display(), "wrote assessment export");
    Ok(out_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::form_defaults;
    use crate::scoring;
    use tempfile::TempDir;

    #[test]
    fn digest_is_stable_and_input_sensitive() {
        let record = form_defaults();
        let first = record_digest(&record).expect("digest should compute");
        let second = record_digest(&record).expect("digest should compute");
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);

        let changed = PatientRecord {
            age: 66,
            ..form_defaults()
        };
        assert_ne!(first, record_digest(&changed).expect("digest should compute"));
    }

    #[test]
    fn write_export_creates_json_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let out_dir = dir.path().join("exports");
        let record = form_defaults();
        let assessment = scoring::assess(&record);
        let export = AssessmentExport::new(&record, &assessment).expect("export should build");

        let path = write_export(&out_dir, &export).expect("export should write");
        assert!(path.starts_with(&out_dir));

        let content = fs::read_to_string(&path).expect("export should read");
        let parsed: AssessmentExport = serde_json::from_str(&content).expect("export should parse");
        assert_eq!(parsed.assessment, assessment);
        assert_eq!(parsed.input_sha256, export.input_sha256);
        assert!(content.contains("\"riskScore\": 19"));
    }
}
