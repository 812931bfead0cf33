use serde::{Deserialize, Serialize};

/// CSV header, in column order.
pub const HEADER: [&str; 4] = [
    PROTOCOL_COLUMN,
    Metric::Delay.column(),
    Metric::Throughput.column(),
    Metric::PacketLoss.column(),
];

pub const PROTOCOL_COLUMN: &str = "Protocol";

/// One row of the performance table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    pub protocol: String,
    pub delay_ms: f64,
    pub throughput_kbps: f64,
    pub packet_loss_pct: f64,
}

impl PerformanceRecord {
    pub fn new(protocol: &str, delay_ms: f64, throughput_kbps: f64, packet_loss_pct: f64) -> Self {
        Self {
            protocol: protocol.to_string(),
            delay_ms,
            throughput_kbps,
            packet_loss_pct,
        }
    }

    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Delay => self.delay_ms,
            Metric::Throughput => self.throughput_kbps,
            Metric::PacketLoss => self.packet_loss_pct,
        }
    }
}

/// The canonical RIP / OSPF / EIGRP fixture written when no table exists yet.
pub fn default_records() -> Vec<PerformanceRecord> {
    vec![
        PerformanceRecord::new("RIP", 20.0, 180.0, 2.0),
        PerformanceRecord::new("OSPF", 12.0, 250.0, 1.0),
        PerformanceRecord::new("EIGRP", 10.0, 300.0, 0.5),
    ]
}

/// Which way a metric improves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Higher,
    Lower,
}

/// The three measured quantities, with the facts needed to store and plot them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    Delay,
    Throughput,
    PacketLoss,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Delay, Metric::Throughput, Metric::PacketLoss];

    pub const fn column(self) -> &'static str {
        match self {
            Metric::Delay => "Delay(ms)",
            Metric::Throughput => "Throughput(kbps)",
            Metric::PacketLoss => "PacketLoss(%)",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Metric::Delay => "Average Delay (ms)",
            Metric::Throughput => "Throughput (kbps)",
            Metric::PacketLoss => "Packet Loss (%)",
        }
    }

    pub fn axis_label(self) -> &'static str {
        match self {
            Metric::Delay => "Delay (ms)",
            Metric::Throughput => "Throughput (kbps)",
            Metric::PacketLoss => "Packet Loss (%)",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Metric::Delay => "skyblue",
            Metric::Throughput => "lightgreen",
            Metric::PacketLoss => "salmon",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Metric::Throughput => Direction::Higher,
            Metric::Delay | Metric::PacketLoss => Direction::Lower,
        }
    }

    /// Render a value the way it is written to the table.
    ///
    /// Delay and throughput use the shortest form (`20`, `12.5`); packet loss
    /// always keeps a fractional digit (`2.0`, `0.5`).
    pub fn format_value(self, value: f64) -> String {
        match self {
            Metric::Delay | Metric::Throughput => format!("{}", value),
            Metric::PacketLoss => format!("{:?}", value),
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Metric::Delay => "delay",
            Metric::Throughput => "throughput",
            Metric::PacketLoss => "packet loss",
        };
        write!(f, "{}", name)
    }
}
