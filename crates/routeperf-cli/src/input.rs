use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use serde::{Deserialize, Serialize};

use routeperf_core::data_handling::{default_records, PerformanceRecord};
use routeperf_core::observations::ObservationMode;

use crate::util::{validate_csv_extension, validate_html_extension};

pub const DEFAULT_DATA_FILE: &str = "routing_performance.csv";

/// Everything a report run needs. Every field has a default, so an empty
/// JSON object (or no config at all) reproduces the stock RIP/OSPF/EIGRP run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Performance table, created from `seed_records` when absent.
    pub data_file: PathBuf,
    /// Rows written on first creation of `data_file`.
    pub seed_records: Vec<PerformanceRecord>,
    pub observations: ObservationMode,
    /// Open the combined chart in the default browser.
    pub show_figure: bool,
    /// Optional standalone HTML report.
    pub report_file: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            seed_records: default_records(),
            observations: ObservationMode::Static,
            show_figure: true,
            report_file: None,
        }
    }
}

impl RunConfig {
    /// Start from the JSON config when given, then apply CLI overrides.
    pub fn from_arguments(config_path: Option<&PathBuf>, matches: &ArgMatches) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => load_run_config(path)?,
            None => RunConfig::default(),
        };

        if let Some(data_file) = matches.get_one::<PathBuf>("data_file") {
            config.data_file = data_file.clone();
        }
        validate_csv_extension(&config.data_file)?;

        if let Some(report_file) = matches.get_one::<PathBuf>("report_file") {
            config.report_file = Some(report_file.clone());
        }
        if let Some(report_file) = &config.report_file {
            validate_html_extension(report_file)?;
        }

        if let Some(mode) = matches.get_one::<String>("observations") {
            config.observations = mode.parse::<ObservationMode>().map_err(anyhow::Error::msg)?;
        }

        if matches.get_flag("no_show") {
            config.show_figure = false;
        }

        Ok(config)
    }
}

/// Load a run configuration from a JSON file.
pub fn load_run_config<P: AsRef<Path>>(path: P) -> Result<RunConfig> {
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: RunConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}
