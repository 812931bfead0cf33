//! Reporting and plotting helpers.
//!
//! `text` renders the table and summary lines written to stdout, `plots`
//! turns the records into a `plotly::Plot`, and `report` wraps plots and
//! markup into a standalone HTML page.
pub mod plots;
pub mod report;
pub mod text;

pub use report::{Report, ReportSection};
