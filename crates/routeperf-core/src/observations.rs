//! Closing commentary printed after the charts.
use std::io::{self, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data_handling::{Metric, PerformanceRecord};
use crate::stats::Summary;

pub const HEADING: &str = "Performance Observation Summary";
pub const STATIC_CONCLUSION: &str = "Conclusion: EIGRP provides the best overall performance among the three.";

/// Commentary lines keyed by protocol label.
const PROTOCOL_NOTES: [(&str, &str); 3] = [
    ("RIP", "Simple configuration, slower convergence, higher delay."),
    ("OSPF", "Balanced performance with moderate delay and high stability."),
    ("EIGRP", "Fastest convergence, least delay, and highest throughput."),
];

/// How the observation block is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObservationMode {
    /// Fixed RIP/OSPF/EIGRP commentary and a conclusion naming EIGRP,
    /// regardless of the loaded data.
    #[default]
    Static,
    /// Commentary for the protocols present in the table and a conclusion
    /// naming the protocol that wins the most metrics.
    Derived,
}

impl FromStr for ObservationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "static" => Ok(ObservationMode::Static),
            "derived" => Ok(ObservationMode::Derived),
            other => Err(format!("Unknown observation mode '{}', expected 'static' or 'derived'", other)),
        }
    }
}

pub fn protocol_note(protocol: &str) -> Option<&'static str> {
    PROTOCOL_NOTES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(protocol))
        .map(|(_, note)| *note)
}

/// Write the static block exactly as shipped.
pub fn write_static<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", HEADING)?;
    for (protocol, note) in PROTOCOL_NOTES {
        writeln!(out, "{} : {}", protocol, note)?;
    }
    writeln!(out)?;
    writeln!(out, "{}", STATIC_CONCLUSION)
}

/// Protocol winning the most of the three metrics; earlier rows win ties.
pub fn overall_best<'a>(records: &'a [PerformanceRecord], summary: &Summary) -> Option<&'a str> {
    let mut best: Option<(&str, usize)> = None;
    for record in records {
        let wins = Metric::ALL
            .iter()
            .filter(|m| summary.winner(**m) == record.protocol)
            .count();
        if best.map_or(true, |(_, current)| wins > current) {
            best = Some((record.protocol.as_str(), wins));
        }
    }
    best.map(|(protocol, _)| protocol)
}

/// Write commentary for the loaded protocols and a conclusion computed from `summary`.
pub fn write_derived<W: Write>(out: &mut W, records: &[PerformanceRecord], summary: &Summary) -> io::Result<()> {
    writeln!(out, "{}", HEADING)?;
    for record in records {
        match protocol_note(&record.protocol) {
            Some(note) => writeln!(out, "{} : {}", record.protocol, note)?,
            None => writeln!(out, "{} : No reference notes for this protocol.", record.protocol)?,
        }
    }
    writeln!(out)?;

    if let Some(best) = overall_best(records, summary) {
        let wins: Vec<String> = Metric::ALL
            .iter()
            .filter(|m| summary.winner(**m) == best)
            .map(|m| m.to_string())
            .collect();
        writeln!(
            out,
            "Conclusion: {} provides the best overall performance among the {} protocols (best {}).",
            best,
            records.len(),
            wins.join(", ")
        )?;
    }
    Ok(())
}

pub fn write_observations<W: Write>(
    out: &mut W,
    mode: ObservationMode,
    records: &[PerformanceRecord],
    summary: &Summary,
) -> io::Result<()> {
    match mode {
        ObservationMode::Static => write_static(out),
        ObservationMode::Derived => write_derived(out, records, summary),
    }
}
