//! routeperf-core: data model and reporting helpers for comparing routing
//! protocol performance (delay, throughput, packet loss).
//!
//! The crate covers the performance table on disk (bootstrap, load, write),
//! per-metric summaries, the textual report, the observation block and the
//! Plotly bar charts / HTML report used by the `routeperf` binary.
pub mod data_handling;
pub mod error;
pub mod io;
pub mod observations;
pub mod report;
pub mod stats;
