use anyhow::Result;
use log::LevelFilter;
use std::path::PathBuf;

use routeperf_cli::cli::build_cli;
use routeperf_cli::input::RunConfig;
use routeperf_cli::pipeline::run_report;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("ROUTEPERF_LOG", "error,routeperf=info"))
        .init();

    let matches = build_cli().get_matches();

    let config_path: Option<&PathBuf> = matches.get_one("config");
    match config_path {
        Some(path) => log::info!("[Routeperf] Using config: {:?}", path),
        None => log::debug!("[Routeperf] No config provided; using defaults."),
    }
    let config = RunConfig::from_arguments(config_path, &matches)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = run_report(&config, &mut out)?;

    log::info!(
        "[Routeperf] Reported {} protocols from {}{}",
        outcome.records.len(),
        config.data_file.display(),
        if outcome.created { " (newly created)" } else { "" }
    );
    Ok(())
}
