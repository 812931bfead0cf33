//! Ordered report run: bootstrap, load, summarize, render, observe.
use std::io::Write;

use anyhow::{Context, Result};
use maud::html;

use routeperf_core::data_handling::{Metric, PerformanceRecord, HEADER};
use routeperf_core::io::{ensure_data_exists, load_records};
use routeperf_core::observations::write_observations;
use routeperf_core::report::plots::{plot_metric_bars, FIGURE_TITLE};
use routeperf_core::report::text::{write_summary, write_table};
use routeperf_core::report::{Report, ReportSection};
use routeperf_core::stats::{summarize, Summary};

use crate::input::RunConfig;

/// What a run produced, for callers that want more than the printed text.
#[derive(Debug)]
pub struct RunOutcome {
    pub created: bool,
    pub records: Vec<PerformanceRecord>,
    pub summary: Summary,
}

/// Run the full report, writing the text report to `out`.
pub fn run_report<W: Write>(config: &RunConfig, out: &mut W) -> Result<RunOutcome> {
    let data_file = &config.data_file;

    if !data_file.exists() {
        writeln!(out, "CSV file not found. Creating a new one with default data...\n")?;
    }
    let created = ensure_data_exists(data_file, &config.seed_records)?;

    let records = load_records(data_file)?;
    log::info!("Loaded {} performance records from {}", records.len(), data_file.display());

    writeln!(out, "Routing Protocol Performance Data:\n")?;
    write_table(out, &records)?;
    writeln!(out)?;

    let summary = summarize(&records)
        .with_context(|| format!("Failed to summarize {}", data_file.display()))?;
    write_summary(out, &summary)?;

    let plot = plot_metric_bars(&records);
    if config.show_figure {
        log::info!("Opening chart: {}", FIGURE_TITLE);
        plot.show();
    }

    let mut observations = Vec::new();
    write_observations(&mut observations, config.observations, &records, &summary)?;
    out.write_all(&observations)?;
    out.flush()?;

    if let Some(report_file) = &config.report_file {
        let observations = String::from_utf8_lossy(&observations);
        let report = build_report(config, &records, &summary, &observations, plot)?;
        report
            .save_to_file(report_file)
            .with_context(|| format!("Failed to write report: {}", report_file.display()))?;
        log::info!("Report saved to: {}", report_file.display());
    }

    Ok(RunOutcome {
        created,
        records,
        summary,
    })
}

fn build_report(
    config: &RunConfig,
    records: &[PerformanceRecord],
    summary: &Summary,
    observations: &str,
    plot: plotly::Plot,
) -> Result<Report> {
    let mut report = Report::new(
        "routeperf",
        env!("CARGO_PKG_VERSION"),
        None,
        FIGURE_TITLE,
    );

    /* Section 1: Data */
    {
        let mut data_section = ReportSection::new("Performance Data");
        data_section.add_content(html! {
            p { "Source table: " code { (config.data_file.display().to_string()) } }
            table {
                thead {
                    tr { @for column in HEADER { th { (column) } } }
                }
                tbody {
                    @for record in records {
                        tr {
                            td { (record.protocol) }
                            @for metric in Metric::ALL {
                                td { (metric.format_value(record.value(metric))) }
                            }
                        }
                    }
                }
            }
            ul {
                li { "Highest Throughput: " strong { (summary.highest_throughput) } }
                li { "Lowest Delay: " strong { (summary.lowest_delay) } }
                li { "Minimum Packet Loss: " strong { (summary.lowest_packet_loss) } }
            }
        });
        report.add_section(data_section);
    }

    /* Section 2: Charts */
    {
        let mut chart_section = ReportSection::new("Charts");
        chart_section.add_plot(plot);
        report.add_section(chart_section);
    }

    /* Section 3: Observations */
    {
        let mut observation_section = ReportSection::new("Observations");
        observation_section.add_content(html! {
            pre { (observations) }
        });
        report.add_section(observation_section);
    }

    /* Section 4: Configuration */
    {
        let mut config_section = ReportSection::new("Configuration");
        let json = serde_json::to_string_pretty(config)?;
        config_section.add_content(html! {
            pre { code { (json) } }
        });
        report.add_section(config_section);
    }

    Ok(report)
}
