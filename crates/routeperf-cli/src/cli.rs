use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, ValueHint};

/// Argument definitions for the `routeperf` binary.
pub fn build_cli() -> Command {
    Command::new("routeperf")
        .version(clap::crate_version!())
        .about("Routing protocol performance report (delay, throughput, packet loss)")
        .arg(
            Arg::new("config")
                .help("Path to run configuration file (JSON)")
                .required(false)
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("data_file")
                .short('d')
                .long("data")
                .help("Performance table to read, created with default rows when absent")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("report_file")
                .short('r')
                .long("report")
                .help("Also write a standalone HTML report to this path")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("observations")
                .long("observations")
                .help("Observation block: fixed commentary or derived from the loaded data")
                .value_parser(["static", "derived"])
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("no_show")
                .long("no-show")
                .help("Do not open the chart figure in a browser")
                .action(ArgAction::SetTrue),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
}
