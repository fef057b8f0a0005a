//! Unit constants and fixed-precision rounding.
//!
//! All published metrics are rounded to a documented precision so that
//! comparisons and golden tests stay stable: masses and costs to 2
//! decimals, durations to 1, composite scores to 4.

/// Kilograms per metric tonne. Emission factors are expressed in
/// kg CO2 per tonne-km; dividing by this yields tonnes of CO2.
pub(crate) const KG_PER_TONNE: f64 = 1000.0;

/// Time factors are expressed in days per this many kilometers.
pub(crate) const KM_PER_TIME_BLOCK: f64 = 1000.0;

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Rounds to 2 decimals (masses, costs).
pub(crate) fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// Rounds to 1 decimal (durations, percentages).
pub(crate) fn round1(value: f64) -> f64 {
    round_to(value, 1)
}

/// Rounds to 4 decimals (composite scores).
pub(crate) fn round4(value: f64) -> f64 {
    round_to(value, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert!((round2(1.005_001) - 1.01).abs() < 1e-10);
        assert!((round2(29.994) - 29.99).abs() < 1e-10);
        assert!((round2(-0.004) - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_round1() {
        assert!((round1(34.96) - 35.0).abs() < 1e-10);
        assert!((round1(15.44) - 15.4).abs() < 1e-10);
    }

    #[test]
    fn test_round4() {
        assert!((round4(0.341_649_9) - 0.3416).abs() < 1e-12);
    }
}
