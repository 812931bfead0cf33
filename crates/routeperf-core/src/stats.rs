use crate::data_handling::{Direction, Metric, PerformanceRecord};
use crate::error::SummaryError;

/// Winning protocol per metric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub highest_throughput: String,
    pub lowest_delay: String,
    pub lowest_packet_loss: String,
}

impl Summary {
    pub fn winner(&self, metric: Metric) -> &str {
        match metric {
            Metric::Delay => &self.lowest_delay,
            Metric::Throughput => &self.highest_throughput,
            Metric::PacketLoss => &self.lowest_packet_loss,
        }
    }
}

/// Index of the best record for `metric`.
///
/// Only a strictly better value replaces the current best, so the first
/// occurrence wins ties. NaN values are skipped.
pub fn best_index(records: &[PerformanceRecord], metric: Metric) -> Result<usize, SummaryError> {
    if records.is_empty() {
        return Err(SummaryError::EmptyDataset);
    }

    let mut best: Option<(usize, f64)> = None;
    for (idx, record) in records.iter().enumerate() {
        let value = record.value(metric);
        if value.is_nan() {
            continue;
        }
        let better = match best {
            None => true,
            Some((_, current)) => match metric.direction() {
                Direction::Higher => value > current,
                Direction::Lower => value < current,
            },
        };
        if better {
            best = Some((idx, value));
        }
    }

    best.map(|(idx, _)| idx)
        .ok_or(SummaryError::NoComparableValues(metric))
}

/// Best record for `metric`, see [`best_index`].
pub fn best_by(records: &[PerformanceRecord], metric: Metric) -> Result<&PerformanceRecord, SummaryError> {
    best_index(records, metric).map(|idx| &records[idx])
}

/// Highest throughput, lowest delay and lowest packet loss, as protocol labels.
pub fn summarize(records: &[PerformanceRecord]) -> Result<Summary, SummaryError> {
    let highest_throughput = best_by(records, Metric::Throughput)?.protocol.clone();
    let lowest_delay = best_by(records, Metric::Delay)?.protocol.clone();
    let lowest_packet_loss = best_by(records, Metric::PacketLoss)?.protocol.clone();

    log::debug!(
        "Summary: throughput={}, delay={}, packet loss={}",
        highest_throughput,
        lowest_delay,
        lowest_packet_loss
    );

    Ok(Summary {
        highest_throughput,
        lowest_delay,
        lowest_packet_loss,
    })
}
