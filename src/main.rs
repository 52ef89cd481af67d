mod batch;
mod cli;
mod collector;
mod config;
mod error;
mod export;
mod logging;
mod report;
mod scoring;
mod session;
mod types;

use crate::error::{Result, RiskError};
use crate::report::{OutputFormat, ReportSettings};
use crate::session::Session;
use crate::types::assessment::RiskLevel;
use crate::types::patient::{PatientInput, Symptom};
use clap::Parser;
use serde_json::json;

pub mod exit_code {
    pub const LOW: i32 = 0;
    pub const MODERATE: i32 = 1;
    pub const HIGH: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn level_exit_code(level: RiskLevel) -> i32 {
    match level {
        RiskLevel::Low => exit_code::LOW,
        RiskLevel::Moderate => exit_code::MODERATE,
        RiskLevel::High => exit_code::HIGH,
    }
}

fn output_format(flag: Option<cli::ReportFormat>, settings: &ReportSettings) -> OutputFormat {
    match flag {
        Some(cli::ReportFormat::Json) => OutputFormat::Json,
        Some(cli::ReportFormat::Md) => OutputFormat::Md,
        None => settings.format,
    }
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose, cli.quiet);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "mortality-risk starting");

    let root = std::env::current_dir()?;
    let loaded = config::load_config(&root)?;
    if loaded.is_none() {
        tracing::info!("no {} found, using built-in defaults", config::DEFAULT_CONFIG_FILE);
    }
    let cfg = loaded.unwrap_or_default();
    let mut collector_settings = cfg.collector_settings()?;
    let report_settings = cfg.report_settings()?;

    match cli.command {
        cli::Commands::Assess(cmd) => {
            if cmd.no_clamp {
                collector_settings.clamp = false;
            }

            let input = match &cmd.input {
                Some(path) => collector::load_input(path)?,
                None => PatientInput::default(),
            };
            let record = collector::collect(&input, &collector_settings)?;

            let mut session = Session::new();
            let assessment = session.submit(&record);
            tracing::debug!(
                score = assessment.risk_score,
                level = %assessment.risk_level,
                "assessment complete"
            );

            let format = output_format(cmd.format, &report_settings);
            let rendered = report::render(assessment, format, &report_settings)?;
            println!("{rendered}");

            if let Some(dir) = &cmd.export {
                let export = export::AssessmentExport::new(&record, assessment)?;
                let path = export::write_export(dir, &export)?;
                eprintln!("export file: {}", path.display());
            }

            Ok(level_exit_code(assessment.risk_level))
        }
        cli::Commands::Batch(cmd) => {
            if !cmd.dir.is_dir() {
                return Err(RiskError::PathNotFound(cmd.dir.display().to_string()));
            }
            if cmd.no_clamp {
                collector_settings.clamp = false;
            }

            let entries = batch::assess_dir(&cmd.dir, &collector_settings);
            if entries.is_empty() {
                eprintln!("batch: no patient files found in {}", cmd.dir.display());
                return Ok(exit_code::LOW);
            }

            let mut failures = 0usize;
            let mut highest = RiskLevel::Low;
            let mut rows = Vec::new();
            for entry in &entries {
                match &entry.outcome {
                    Ok(assessment) => {
                        highest = highest.max(assessment.risk_level);
                        rows.push((entry.path.display().to_string(), assessment));
                    }
                    Err(e) => {
                        failures += 1;
                        eprintln!("error: {}: {}", entry.path.display(), e);
                    }
                }
            }

            match output_format(cmd.format, &report_settings) {
                OutputFormat::Json => {
                    let items: Vec<_> = rows
                        .iter()
                        .map(|(path, assessment)| json!({ "path": path, "assessment": assessment }))
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&items)?);
                }
                OutputFormat::Md => {
                    for (path, assessment) in &rows {
                        println!(
                            "{}: {} {}",
                            path, assessment.risk_score, assessment.risk_level
                        );
                    }
                }
            }

            if failures > 0 {
                Ok(exit_code::RUNTIME_FAILURE)
            } else {
                Ok(level_exit_code(highest))
            }
        }
        cli::Commands::Defaults => {
            let rendered = toml::to_string_pretty(&collector_settings.defaults)?;
            println!("{rendered}");
            Ok(exit_code::LOW)
        }
        cli::Commands::Symptoms => {
            for symptom in Symptom::ALL {
                if symptom.is_critical() {
                    println!("{} (critical)", symptom.label());
                } else {
                    println!("{}", symptom.label());
                }
            }
            Ok(exit_code::LOW)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
