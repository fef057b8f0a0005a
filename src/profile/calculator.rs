//! Per-mode distance, emission, cost, and transit computation.

use crate::error::EngineError;
use crate::tables::EngineTables;
use crate::units::{round1, round2, KG_PER_TONNE, KM_PER_TIME_BLOCK};

use super::types::{ModeProfile, TransportMode};

/// Default carbon tax, USD per tonne of CO2.
pub const DEFAULT_TAX_RATE: f64 = 100.0;

/// Computes the full metric profile for one transport mode.
///
/// Preconditions are checked up front and fail fast: the cargo weight
/// must be finite and strictly positive, the tax rate finite and
/// non-negative, and both endpoints non-blank. Lookup misses do not
/// fail — an unknown city pair resolves to the fallback distance and an
/// unknown mode to the road fallback triple.
///
/// # Examples
///
/// ```
/// use trilemma_engine::profile::{mode_profile, TransportMode, DEFAULT_TAX_RATE};
/// use trilemma_engine::tables::EngineTables;
///
/// let tables = EngineTables::default();
/// let profile = mode_profile(
///     &tables,
///     "Shanghai",
///     "Rotterdam",
///     100.0,
///     TransportMode::Sea,
///     DEFAULT_TAX_RATE,
/// )
/// .unwrap();
///
/// assert_eq!(profile.distance_km, 20_000.0);
/// assert_eq!(profile.emissions_tonnes, 30.0);
/// assert_eq!(profile.total_cost_usd, profile.base_cost_usd + profile.carbon_tax_usd);
/// ```
pub fn mode_profile(
    tables: &EngineTables,
    origin: &str,
    destination: &str,
    weight_tonnes: f64,
    mode: TransportMode,
    tax_rate: f64,
) -> Result<ModeProfile, EngineError> {
    if !weight_tonnes.is_finite() || weight_tonnes <= 0.0 {
        return Err(EngineError::InvalidCargoWeight(weight_tonnes));
    }
    if !tax_rate.is_finite() || tax_rate < 0.0 {
        return Err(EngineError::InvalidTaxRate(tax_rate));
    }
    if origin.trim().is_empty() {
        return Err(EngineError::BlankEndpoint("origin"));
    }
    if destination.trim().is_empty() {
        return Err(EngineError::BlankEndpoint("destination"));
    }

    let distance_km = tables.distance(origin, destination, mode);
    let factors = tables.factors(mode);

    let emissions_tonnes =
        round2(distance_km * weight_tonnes * factors.emission_kg_per_tonne_km / KG_PER_TONNE);
    let base_cost_usd = round2(distance_km * weight_tonnes * factors.cost_usd_per_tonne_km);
    let carbon_tax_usd = round2(emissions_tonnes * tax_rate);
    let total_cost_usd = round2(base_cost_usd + carbon_tax_usd);
    let transit_days = round1(distance_km / KM_PER_TIME_BLOCK * factors.days_per_1000_km);

    Ok(ModeProfile {
        mode,
        distance_km,
        emissions_tonnes,
        base_cost_usd,
        carbon_tax_usd,
        total_cost_usd,
        transit_days,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::FALLBACK_DISTANCE_KM;
    use proptest::prelude::*;

    fn profile(mode: TransportMode) -> ModeProfile {
        mode_profile(
            &EngineTables::default(),
            "Shanghai",
            "Rotterdam",
            100.0,
            mode,
            DEFAULT_TAX_RATE,
        )
        .unwrap()
    }

    #[test]
    fn test_sea_reference_shipment() {
        let p = profile(TransportMode::Sea);
        assert_eq!(p.distance_km, 20_000.0);
        assert_eq!(p.emissions_tonnes, 30.0);
        assert_eq!(p.base_cost_usd, 40_000.0);
        assert_eq!(p.carbon_tax_usd, 3_000.0);
        assert_eq!(p.total_cost_usd, 43_000.0);
        assert_eq!(p.transit_days, 35.0);
    }

    #[test]
    fn test_slow_sea_shares_sea_distance() {
        let slow = profile(TransportMode::SlowSea);
        assert_eq!(slow.distance_km, 20_000.0);
        assert_eq!(slow.emissions_tonnes, 20.0);
    }

    #[test]
    fn test_rail_reference_shipment() {
        let p = profile(TransportMode::Rail);
        assert_eq!(p.distance_km, 11_000.0);
        assert_eq!(p.emissions_tonnes, 33.0);
        assert_eq!(p.transit_days, 15.4);
    }

    #[test]
    fn test_unknown_pair_still_produces_profile() {
        let p = mode_profile(
            &EngineTables::default(),
            "Shanghai",
            "Atlantis",
            100.0,
            TransportMode::Sea,
            DEFAULT_TAX_RATE,
        )
        .unwrap();
        assert_eq!(p.distance_km, FALLBACK_DISTANCE_KM);
    }

    #[test]
    fn test_zero_tax_rate_zeroes_the_tax() {
        let p = mode_profile(
            &EngineTables::default(),
            "Shanghai",
            "Rotterdam",
            100.0,
            TransportMode::Sea,
            0.0,
        )
        .unwrap();
        assert_eq!(p.carbon_tax_usd, 0.0);
        assert_eq!(p.total_cost_usd, p.base_cost_usd);
    }

    #[test]
    fn test_precondition_failures() {
        let tables = EngineTables::default();
        assert_eq!(
            mode_profile(&tables, "A", "B", 0.0, TransportMode::Sea, 100.0),
            Err(EngineError::InvalidCargoWeight(0.0))
        );
        assert_eq!(
            mode_profile(&tables, "A", "B", 10.0, TransportMode::Sea, -1.0),
            Err(EngineError::InvalidTaxRate(-1.0))
        );
        assert_eq!(
            mode_profile(&tables, "  ", "B", 10.0, TransportMode::Sea, 100.0),
            Err(EngineError::BlankEndpoint("origin"))
        );
        assert_eq!(
            mode_profile(&tables, "A", "", 10.0, TransportMode::Sea, 100.0),
            Err(EngineError::BlankEndpoint("destination"))
        );
    }

    proptest! {
        #[test]
        fn prop_cost_identity_and_non_negativity(
            weight in 0.1f64..10_000.0,
            tax in 0.0f64..500.0,
            mode_idx in 0usize..5,
        ) {
            let mode = [
                TransportMode::Sea,
                TransportMode::SlowSea,
                TransportMode::Rail,
                TransportMode::Air,
                TransportMode::Road,
            ][mode_idx];
            let p = mode_profile(
                &EngineTables::default(),
                "Shanghai",
                "Rotterdam",
                weight,
                mode,
                tax,
            )
            .unwrap();

            prop_assert!(p.emissions_tonnes >= 0.0);
            prop_assert!(p.base_cost_usd >= 0.0);
            prop_assert!(p.carbon_tax_usd >= 0.0);
            prop_assert!(p.total_cost_usd >= 0.0);
            prop_assert!(p.transit_days >= 0.0);
            // 2-decimal doubles at ~1e8 USD carry representation error
            // near 1e-7, so the identity holds to well under a cent.
            prop_assert!(
                (p.total_cost_usd - (p.base_cost_usd + p.carbon_tax_usd)).abs() < 1e-6
            );
        }
    }
}
