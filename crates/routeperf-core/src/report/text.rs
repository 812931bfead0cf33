use std::io::{self, Write};

use crate::data_handling::{Metric, PerformanceRecord, HEADER};
use crate::stats::Summary;

/// Write the records as a fixed-width table with a leading row index.
pub fn write_table<W: Write>(out: &mut W, records: &[PerformanceRecord]) -> io::Result<()> {
    let rows: Vec<[String; 4]> = records
        .iter()
        .map(|r| {
            [
                r.protocol.clone(),
                Metric::Delay.format_value(r.delay_ms),
                Metric::Throughput.format_value(r.throughput_kbps),
                Metric::PacketLoss.format_value(r.packet_loss_pct),
            ]
        })
        .collect();

    let index_width = records.len().saturating_sub(1).to_string().len();
    let mut widths = HEADER.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write!(out, "{:>w$}", "", w = index_width)?;
    for (header, width) in HEADER.iter().zip(widths.iter()) {
        write!(out, "  {:>w$}", header, w = width)?;
    }
    writeln!(out)?;

    for (idx, row) in rows.iter().enumerate() {
        write!(out, "{:>w$}", idx, w = index_width)?;
        for (cell, width) in row.iter().zip(widths.iter()) {
            write!(out, "  {:>w$}", cell, w = width)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Write the three winner lines followed by a blank line.
pub fn write_summary<W: Write>(out: &mut W, summary: &Summary) -> io::Result<()> {
    writeln!(out, "Highest Throughput : {}", summary.highest_throughput)?;
    writeln!(out, "Lowest Delay : {}", summary.lowest_delay)?;
    writeln!(out, "Minimum Packet Loss: {}", summary.lowest_packet_loss)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_handling::default_records;
    use crate::stats::summarize;

    #[test]
    fn test_table_layout() {
        let mut buf = Vec::new();
        write_table(&mut buf, &default_records()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "   Protocol  Delay(ms)  Throughput(kbps)  PacketLoss(%)");
        assert_eq!(lines[1], "0       RIP         20               180            2.0");
        assert_eq!(lines[3], "2     EIGRP         10               300            0.5");
    }

    #[test]
    fn test_summary_lines() {
        let summary = summarize(&default_records()).unwrap();
        let mut buf = Vec::new();
        write_summary(&mut buf, &summary).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Highest Throughput : EIGRP\nLowest Delay : EIGRP\nMinimum Packet Loss: EIGRP\n\n"
        );
    }
}
