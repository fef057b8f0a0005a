//! Transport modes and per-mode metric records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A freight transport mode.
///
/// [`TransportMode::SlowSea`] is slow-steaming sea freight: same lanes
/// as [`TransportMode::Sea`], lower speed, lower fuel burn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    Sea,
    SlowSea,
    Rail,
    Air,
    Road,
}

impl TransportMode {
    /// Base category used for distance lookups.
    ///
    /// Slow-steaming follows the same lanes as standard sea freight and
    /// therefore shares Sea's distance table entry. Every other mode is
    /// its own base.
    pub fn base(self) -> TransportMode {
        match self {
            TransportMode::SlowSea => TransportMode::Sea,
            other => other,
        }
    }

    /// Stable identifier used in serialized output.
    pub fn id(self) -> &'static str {
        match self {
            TransportMode::Sea => "sea",
            TransportMode::SlowSea => "slow_sea",
            TransportMode::Rail => "rail",
            TransportMode::Air => "air",
            TransportMode::Road => "road",
        }
    }

    /// Parses a mode identifier, substituting [`TransportMode::Road`]
    /// for anything unrecognized.
    ///
    /// The substitution is an explicit fallback policy: an unknown mode
    /// is costed as generic road haulage and logged as a configuration
    /// warning rather than failing the request.
    pub fn parse_lossy(s: &str) -> TransportMode {
        s.parse().unwrap_or_else(|_| {
            log::warn!("unknown transport mode {s:?}, treating as road haulage");
            TransportMode::Road
        })
    }
}

impl FromStr for TransportMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sea" => Ok(TransportMode::Sea),
            "slow_sea" | "slow-sea" | "slow_steaming" => Ok(TransportMode::SlowSea),
            "rail" => Ok(TransportMode::Rail),
            "air" => Ok(TransportMode::Air),
            "road" => Ok(TransportMode::Road),
            _ => Err(EngineError::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Static factor triple for one transport mode.
///
/// Loaded once into [`EngineTables`](crate::tables::EngineTables) and
/// never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModeFactors {
    /// kg CO2 emitted per tonne-km.
    pub emission_kg_per_tonne_km: f64,

    /// USD charged per tonne-km, before carbon tax.
    pub cost_usd_per_tonne_km: f64,

    /// Transit days per 1000 km.
    pub days_per_1000_km: f64,
}

/// Computed metrics for one (route, weight, mode) combination.
///
/// Invariants: `total_cost_usd == base_cost_usd + carbon_tax_usd`,
/// `carbon_tax_usd == emissions_tonnes * tax_rate`, and every component
/// is non-negative. Masses and costs carry 2 decimals, durations 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeProfile {
    pub mode: TransportMode,

    /// Route distance in km: the table entry for the mode's base
    /// category, or the fallback constant for unknown pairs.
    pub distance_km: f64,

    /// Tonnes of CO2 for the full shipment.
    pub emissions_tonnes: f64,

    /// Freight cost before carbon tax, USD.
    pub base_cost_usd: f64,

    /// Carbon tax, USD.
    pub carbon_tax_usd: f64,

    /// `base_cost_usd + carbon_tax_usd`, USD.
    pub total_cost_usd: f64,

    /// Door-to-door transit time, days.
    pub transit_days: f64,
}

impl ModeProfile {
    /// Carbon tax share of total cost, in percent.
    ///
    /// Returns 0 for a zero-cost profile rather than dividing by zero.
    pub fn tax_share_pct(&self) -> f64 {
        if self.total_cost_usd <= 0.0 {
            0.0
        } else {
            self.carbon_tax_usd / self.total_cost_usd * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slow_sea_shares_sea_base() {
        assert_eq!(TransportMode::SlowSea.base(), TransportMode::Sea);
        assert_eq!(TransportMode::Rail.base(), TransportMode::Rail);
        assert_eq!(TransportMode::Air.base(), TransportMode::Air);
    }

    #[test]
    fn test_parse_strict() {
        assert_eq!("sea".parse::<TransportMode>().unwrap(), TransportMode::Sea);
        assert_eq!(
            " Slow-Sea ".parse::<TransportMode>().unwrap(),
            TransportMode::SlowSea
        );
        assert!(matches!(
            "teleport".parse::<TransportMode>(),
            Err(EngineError::UnknownMode(_))
        ));
    }

    #[test]
    fn test_parse_lossy_falls_back_to_road() {
        assert_eq!(TransportMode::parse_lossy("rail"), TransportMode::Rail);
        assert_eq!(TransportMode::parse_lossy("drone"), TransportMode::Road);
    }

    #[test]
    fn test_id_display_round_trip() {
        for mode in [
            TransportMode::Sea,
            TransportMode::SlowSea,
            TransportMode::Rail,
            TransportMode::Air,
            TransportMode::Road,
        ] {
            assert_eq!(mode.id().parse::<TransportMode>().unwrap(), mode);
            assert_eq!(mode.to_string(), mode.id());
        }
    }

    #[test]
    fn test_tax_share_guards_zero_cost() {
        let profile = ModeProfile {
            mode: TransportMode::Sea,
            distance_km: 0.0,
            emissions_tonnes: 0.0,
            base_cost_usd: 0.0,
            carbon_tax_usd: 0.0,
            total_cost_usd: 0.0,
            transit_days: 0.0,
        };
        assert_eq!(profile.tax_share_pct(), 0.0);
    }

    #[test]
    fn test_serde_mode_identifiers() {
        let json = serde_json::to_string(&TransportMode::SlowSea).unwrap();
        assert_eq!(json, "\"slow_sea\"");
    }
}
