use std::error::Error;
use std::fmt;

use crate::data_handling::Metric;

/// Failures when reducing the performance table to per-metric winners.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryError {
    EmptyDataset,
    NoComparableValues(Metric), // every value in the column was NaN
}

impl fmt::Display for SummaryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SummaryError::EmptyDataset => write!(f, "Cannot summarize an empty performance table"),
            SummaryError::NoComparableValues(metric) => {
                write!(f, "No comparable {} values found in the performance table", metric)
            }
        }
    }
}

impl Error for SummaryError {}
