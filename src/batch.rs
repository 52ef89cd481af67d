use crate::collector::{self, CollectorSettings};
use crate::error::Result;
use crate::session::Session;
use crate::types::assessment::RiskAssessment;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug)]
pub struct BatchEntry {
    pub path: PathBuf,
    pub outcome: Result<RiskAssessment>,
}

/// Patient input files under `root`, sorted by path.
pub fn discover_inputs(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| matches!(ext.to_ascii_lowercase().as_str(), "toml" | "json"))
        })
        .collect();
    files.sort();
    files
}

/// Scores every discovered file through one session, resetting it between
/// patients so no results carry over.
pub fn assess_dir(root: &Path, settings: &CollectorSettings) -> Vec<BatchEntry> {
    let mut session = Session::new();
    discover_inputs(root)
        .into_iter()
        .map(|path| {
            let outcome = collector::load_input(&path)
                .and_then(|input| collector::collect(&input, settings))
                .map(|record| session.submit(&record).clone());
            if let Some(assessment) = session.assessment() {
                tracing::debug!(
                    path = %path.display(),
                    score = assessment.risk_score,
                    level = %assessment.risk_level,
                    "scored patient file"
                );
            }
            if let Err(e) = &outcome {
                tracing::debug!(path = %path.display(), error = %e, "skipping patient file");
            }
            session.reset();
            BatchEntry { path, outcome }
        })
        .collect()
}
