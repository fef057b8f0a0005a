//! Immutable lookup configuration: route distances and mode factors.
//!
//! The tables are built once at startup and shared read-only into the
//! engine (typically behind an `Arc`), which keeps every operation
//! trivially thread-safe. Lookup misses never fail: an unknown city
//! pair resolves to [`FALLBACK_DISTANCE_KM`] and an unknown mode to
//! [`ROAD_FALLBACK_FACTORS`].
//!
//! Distance lookups are direction-symmetric: the table stores each pair
//! once but `Rotterdam -> Shanghai` resolves to the same entry as
//! `Shanghai -> Rotterdam` (see [`RouteLookupKey`]).

use std::collections::HashMap;

use crate::profile::{ModeFactors, TransportMode};

/// Distance applied when a city pair is absent from the table, km.
pub const FALLBACK_DISTANCE_KM: f64 = 15_000.0;

/// Factor triple applied when a mode has no table entry.
///
/// Generic road haulage: the most conservative common denominator for
/// an unrecognized mode.
pub const ROAD_FALLBACK_FACTORS: ModeFactors = ModeFactors {
    emission_kg_per_tonne_km: 0.10,
    cost_usd_per_tonne_km: 0.08,
    days_per_1000_km: 1.2,
};

/// Normalized unordered city pair used as a distance table key.
///
/// Both names are trimmed and ASCII-lowercased, then stored in
/// lexicographic order, so lookups are case-insensitive and
/// direction-symmetric.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteLookupKey {
    a: String,
    b: String,
}

impl RouteLookupKey {
    pub fn new(origin: &str, destination: &str) -> Self {
        let mut a = origin.trim().to_ascii_lowercase();
        let mut b = destination.trim().to_ascii_lowercase();
        if a > b {
            std::mem::swap(&mut a, &mut b);
        }
        RouteLookupKey { a, b }
    }
}

/// Static lookup tables backing the decision engine.
///
/// # Examples
///
/// ```
/// use trilemma_engine::profile::{ModeFactors, TransportMode};
/// use trilemma_engine::tables::EngineTables;
///
/// let tables = EngineTables::empty()
///     .with_route("Oslo", "Hamburg", &[(TransportMode::Sea, 1100.0)])
///     .with_factors(
///         TransportMode::Sea,
///         ModeFactors {
///             emission_kg_per_tonne_km: 0.015,
///             cost_usd_per_tonne_km: 0.02,
///             days_per_1000_km: 1.75,
///         },
///     );
///
/// assert_eq!(tables.distance("Hamburg", "Oslo", TransportMode::Sea), 1100.0);
/// ```
#[derive(Debug, Clone)]
pub struct EngineTables {
    distances: HashMap<RouteLookupKey, HashMap<TransportMode, f64>>,
    factors: HashMap<TransportMode, ModeFactors>,
    fallback_distance_km: f64,
}

impl Default for EngineTables {
    /// Built-in tables covering the five modes and four reference
    /// trade lanes (stored one direction, looked up symmetrically).
    fn default() -> Self {
        let lanes: &[(&str, &str, [(TransportMode, f64); 4])] = &[
            (
                "Shanghai",
                "Rotterdam",
                [
                    (TransportMode::Sea, 20_000.0),
                    (TransportMode::Rail, 11_000.0),
                    (TransportMode::Air, 8_900.0),
                    (TransportMode::Road, 11_500.0),
                ],
            ),
            (
                "Shanghai",
                "Hamburg",
                [
                    (TransportMode::Sea, 19_800.0),
                    (TransportMode::Rail, 10_700.0),
                    (TransportMode::Air, 8_800.0),
                    (TransportMode::Road, 11_200.0),
                ],
            ),
            (
                "Mumbai",
                "Rotterdam",
                [
                    (TransportMode::Sea, 12_600.0),
                    (TransportMode::Rail, 7_800.0),
                    (TransportMode::Air, 6_600.0),
                    (TransportMode::Road, 8_500.0),
                ],
            ),
            (
                "Busan",
                "Rotterdam",
                [
                    (TransportMode::Sea, 20_600.0),
                    (TransportMode::Rail, 11_600.0),
                    (TransportMode::Air, 9_000.0),
                    (TransportMode::Road, 12_000.0),
                ],
            ),
        ];

        let mut tables = EngineTables::empty();
        for (origin, destination, modes) in lanes {
            tables = tables.with_route(origin, destination, modes);
        }

        tables
            .with_factors(
                TransportMode::Sea,
                ModeFactors {
                    emission_kg_per_tonne_km: 0.015,
                    cost_usd_per_tonne_km: 0.02,
                    days_per_1000_km: 1.75,
                },
            )
            .with_factors(
                TransportMode::SlowSea,
                ModeFactors {
                    emission_kg_per_tonne_km: 0.010,
                    cost_usd_per_tonne_km: 0.015,
                    days_per_1000_km: 2.5,
                },
            )
            .with_factors(
                TransportMode::Rail,
                ModeFactors {
                    emission_kg_per_tonne_km: 0.03,
                    cost_usd_per_tonne_km: 0.05,
                    days_per_1000_km: 1.4,
                },
            )
            .with_factors(
                TransportMode::Air,
                ModeFactors {
                    emission_kg_per_tonne_km: 0.50,
                    cost_usd_per_tonne_km: 1.50,
                    days_per_1000_km: 0.15,
                },
            )
            .with_factors(TransportMode::Road, ROAD_FALLBACK_FACTORS)
    }
}

impl EngineTables {
    /// Creates empty tables with the default fallback distance.
    pub fn empty() -> Self {
        EngineTables {
            distances: HashMap::new(),
            factors: HashMap::new(),
            fallback_distance_km: FALLBACK_DISTANCE_KM,
        }
    }

    /// Adds (or replaces) per-mode distances for one city pair.
    ///
    /// Distances should be keyed by base mode; slow variants resolve
    /// through [`TransportMode::base`] at lookup time.
    pub fn with_route(
        mut self,
        origin: &str,
        destination: &str,
        mode_distances: &[(TransportMode, f64)],
    ) -> Self {
        let entry = self
            .distances
            .entry(RouteLookupKey::new(origin, destination))
            .or_default();
        for &(mode, km) in mode_distances {
            entry.insert(mode.base(), km);
        }
        self
    }

    /// Adds (or replaces) the factor triple for one mode.
    pub fn with_factors(mut self, mode: TransportMode, factors: ModeFactors) -> Self {
        self.factors.insert(mode, factors);
        self
    }

    /// Overrides the distance used when a city pair is unknown.
    pub fn with_fallback_distance(mut self, km: f64) -> Self {
        self.fallback_distance_km = km;
        self
    }

    /// Resolves the distance for a route and mode, km.
    ///
    /// Resolves through the mode's base category, then falls back to
    /// the configured fallback distance on a table miss.
    pub fn distance(&self, origin: &str, destination: &str, mode: TransportMode) -> f64 {
        self.distances
            .get(&RouteLookupKey::new(origin, destination))
            .and_then(|per_mode| per_mode.get(&mode.base()).copied())
            .unwrap_or(self.fallback_distance_km)
    }

    /// Returns whether the city pair has any table entry.
    pub fn route_known(&self, origin: &str, destination: &str) -> bool {
        self.distances
            .contains_key(&RouteLookupKey::new(origin, destination))
    }

    /// Resolves the factor triple for a mode.
    ///
    /// A missing entry is recovered with [`ROAD_FALLBACK_FACTORS`] and
    /// logged as a configuration warning, never an error.
    pub fn factors(&self, mode: TransportMode) -> ModeFactors {
        match self.factors.get(&mode) {
            Some(factors) => *factors,
            None => {
                log::warn!("no factor entry for mode {mode}, using road fallback");
                ROAD_FALLBACK_FACTORS
            }
        }
    }
}
