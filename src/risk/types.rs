//! Port congestion records.

use serde::{Deserialize, Serialize};

/// Congestion severity band derived from the 1-10 congestion level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CongestionBand {
    /// Levels 1-3.
    Low,
    /// Levels 4-6.
    Moderate,
    /// Levels 7-10.
    High,
}

impl CongestionBand {
    pub fn from_level(level: u8) -> CongestionBand {
        match level {
            0..=3 => CongestionBand::Low,
            4..=6 => CongestionBand::Moderate,
            _ => CongestionBand::High,
        }
    }
}

/// Simulated congestion assessment for one port.
///
/// Reports are a pure function of the port name: the same name always
/// yields an identical report, across calls and across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CongestionReport {
    pub port: String,

    /// Congestion level on a 1-10 scale.
    pub congestion_level: u8,

    pub band: CongestionBand,

    /// Expected berthing delay, days, 1 decimal.
    pub estimated_delay_days: f64,

    /// Available berth capacity, percent, 1 decimal.
    pub berth_availability_pct: f64,
}
