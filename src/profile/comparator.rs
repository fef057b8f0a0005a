//! Fan-out of the profile calculator across the comparison mode set.

use crate::error::EngineError;
use crate::tables::EngineTables;

use super::calculator::mode_profile;
use super::types::{ModeProfile, TransportMode};

/// Modes included in a standard route comparison, in fixed order.
///
/// The first element is the reference baseline used by the scorer and
/// explainer. Air and road stay out of the default set but remain valid
/// inputs to [`mode_profile`] individually.
pub const COMPARISON_MODES: [TransportMode; 3] = [
    TransportMode::Sea,
    TransportMode::SlowSea,
    TransportMode::Rail,
];

/// Computes one [`ModeProfile`] per comparison mode, in
/// [`COMPARISON_MODES`] order.
///
/// Pure aggregation over [`mode_profile`]; the first profile is always
/// the sea baseline.
pub fn compare_routes(
    tables: &EngineTables,
    origin: &str,
    destination: &str,
    weight_tonnes: f64,
    tax_rate: f64,
) -> Result<Vec<ModeProfile>, EngineError> {
    COMPARISON_MODES
        .iter()
        .map(|&mode| mode_profile(tables, origin, destination, weight_tonnes, mode, tax_rate))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::DEFAULT_TAX_RATE;

    fn reference_comparison() -> Vec<ModeProfile> {
        compare_routes(
            &EngineTables::default(),
            "Shanghai",
            "Rotterdam",
            100.0,
            DEFAULT_TAX_RATE,
        )
        .unwrap()
    }

    #[test]
    fn test_fixed_order_with_sea_baseline_first() {
        let profiles = reference_comparison();
        let modes: Vec<_> = profiles.iter().map(|p| p.mode).collect();
        assert_eq!(
            modes,
            vec![
                TransportMode::Sea,
                TransportMode::SlowSea,
                TransportMode::Rail
            ]
        );
    }

    #[test]
    fn test_rail_is_fastest_slow_sea_is_greenest() {
        let profiles = reference_comparison();
        let fastest = profiles
            .iter()
            .min_by(|a, b| a.transit_days.total_cmp(&b.transit_days))
            .unwrap();
        let greenest = profiles
            .iter()
            .min_by(|a, b| a.emissions_tonnes.total_cmp(&b.emissions_tonnes))
            .unwrap();
        assert_eq!(fastest.mode, TransportMode::Rail);
        assert_eq!(greenest.mode, TransportMode::SlowSea);
    }

    #[test]
    fn test_unknown_destination_yields_three_complete_profiles() {
        let profiles = compare_routes(
            &EngineTables::default(),
            "Shanghai",
            "Port Nowhere",
            100.0,
            DEFAULT_TAX_RATE,
        )
        .unwrap();
        assert_eq!(profiles.len(), 3);
        for p in &profiles {
            assert_eq!(p.distance_km, crate::tables::FALLBACK_DISTANCE_KM);
            assert!(p.total_cost_usd > 0.0);
        }
    }

    #[test]
    fn test_precondition_errors_propagate() {
        let result = compare_routes(&EngineTables::default(), "A", "B", -5.0, DEFAULT_TAX_RATE);
        assert!(result.is_err());
    }
}
