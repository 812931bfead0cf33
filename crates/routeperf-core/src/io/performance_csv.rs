//! Comma-delimited performance table: `Protocol,Delay(ms),Throughput(kbps),PacketLoss(%)`.
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use csv::StringRecord;

use crate::data_handling::{Metric, PerformanceRecord, HEADER, PROTOCOL_COLUMN};

/// Create the table at `path` from `seed` unless a file already exists there.
///
/// Returns `true` when the file was created. An existing file is never
/// opened for writing.
pub fn ensure_data_exists<P: AsRef<Path>>(path: P, seed: &[PerformanceRecord]) -> Result<bool> {
    let path = path.as_ref();
    if path.exists() {
        log::debug!("Performance table already present: {}", path.display());
        return Ok(false);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        // Lost a race with another writer; their table wins.
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to create performance table: {}", path.display()))
        }
    };

    write_table(file, seed)
        .with_context(|| format!("Failed to write performance table: {}", path.display()))?;
    log::info!("Created performance table with {} default rows: {}", seed.len(), path.display());
    Ok(true)
}

/// Write `records` to `path`, replacing any existing content.
pub fn write_records<P: AsRef<Path>>(path: P, records: &[PerformanceRecord]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to open output file: {}", path.display()))?;
    write_table(file, records)
        .with_context(|| format!("Failed to write performance table: {}", path.display()))
}

fn write_table<W: Write>(out: W, records: &[PerformanceRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(HEADER)?;
    for record in records {
        writer.write_record([
            record.protocol.clone(),
            Metric::Delay.format_value(record.delay_ms),
            Metric::Throughput.format_value(record.throughput_kbps),
            Metric::PacketLoss.format_value(record.packet_loss_pct),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Read the performance table at `path`, preserving row order.
///
/// Header names must match exactly. Protocol labels are kept verbatim;
/// numeric cells are trimmed and a blank cell loads as NaN.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<PerformanceRecord>> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::None)
        .from_path(path)
        .with_context(|| format!("Failed to open performance table: {}", path.display()))?;

    let headers = reader
        .headers()
        .context("Failed to read performance table header row")?
        .clone();

    let protocol_idx = require_column(&headers, PROTOCOL_COLUMN)?;
    let delay_idx = require_column(&headers, Metric::Delay.column())?;
    let throughput_idx = require_column(&headers, Metric::Throughput.column())?;
    let loss_idx = require_column(&headers, Metric::PacketLoss.column())?;

    let mut records = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;

        let protocol = row
            .get(protocol_idx)
            .ok_or_else(|| anyhow!("Missing protocol value at row {}", row_idx + 1))?
            .to_string();

        records.push(PerformanceRecord {
            protocol,
            delay_ms: parse_metric(&row, delay_idx, Metric::Delay, row_idx)?,
            throughput_kbps: parse_metric(&row, throughput_idx, Metric::Throughput, row_idx)?,
            packet_loss_pct: parse_metric(&row, loss_idx, Metric::PacketLoss, row_idx)?,
        });
    }

    log::debug!("Loaded {} performance records from {}", records.len(), path.display());
    Ok(records)
}

fn require_column(headers: &StringRecord, name: &str) -> Result<usize> {
    find_column(headers, name).ok_or_else(|| anyhow!("Missing column '{}' in performance table header", name))
}

fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header == name)
}

fn parse_metric(row: &StringRecord, idx: usize, metric: Metric, row_idx: usize) -> Result<f64> {
    let value = row
        .get(idx)
        .ok_or_else(|| anyhow!("Missing '{}' value at row {}", metric.column(), row_idx + 1))?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(f64::NAN);
    }
    trimmed
        .parse::<f64>()
        .with_context(|| format!("Invalid '{}' value '{}' at row {}", metric.column(), value, row_idx + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_handling::default_records;

    #[test]
    fn test_default_table_text() {
        let mut buf = Vec::new();
        write_table(&mut buf, &default_records()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "Protocol,Delay(ms),Throughput(kbps),PacketLoss(%)\n\
             RIP,20,180,2.0\n\
             OSPF,12,250,1.0\n\
             EIGRP,10,300,0.5\n"
        );
    }

    #[test]
    fn test_find_column_is_exact() {
        let headers = StringRecord::from(vec!["Protocol", "delay(ms)"]);
        assert_eq!(find_column(&headers, "Protocol"), Some(0));
        assert_eq!(find_column(&headers, "Delay(ms)"), None);
        assert_eq!(find_column(&headers, "PacketLoss(%)"), None);
    }
}
