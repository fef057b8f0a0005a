//! Objective weights for the cost/carbon/time trade-off.

use serde::{Deserialize, Serialize};

/// Non-negative weights over the three trilemma objectives.
///
/// Consumers normalize the triple to sum to 1 before scoring via
/// [`TrilemmaWeights::resolve`]. A malformed triple (all zero, any
/// negative, any non-finite) is invalid input and resolves to the
/// default split instead of failing.
///
/// # Examples
///
/// ```
/// use trilemma_engine::trilemma::TrilemmaWeights;
///
/// let (weights, substituted) = TrilemmaWeights::new(1.0, 0.0, 0.0).resolve();
/// assert!(!substituted);
/// assert_eq!(weights.cost, 1.0);
///
/// let (weights, substituted) = TrilemmaWeights::new(0.0, 0.0, 0.0).resolve();
/// assert!(substituted);
/// assert_eq!(weights, TrilemmaWeights::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrilemmaWeights {
    pub cost: f64,
    pub carbon: f64,
    pub time: f64,
}

impl Default for TrilemmaWeights {
    /// Approximately equal split; sums to exactly 1.
    fn default() -> Self {
        TrilemmaWeights {
            cost: 0.33,
            carbon: 0.33,
            time: 0.34,
        }
    }
}

impl TrilemmaWeights {
    pub fn new(cost: f64, carbon: f64, time: f64) -> Self {
        TrilemmaWeights { cost, carbon, time }
    }

    fn sum(&self) -> f64 {
        self.cost + self.carbon + self.time
    }

    /// Whether the triple can be normalized: all components finite and
    /// non-negative, with a positive sum.
    pub fn is_valid(&self) -> bool {
        let components = [self.cost, self.carbon, self.time];
        components.iter().all(|w| w.is_finite() && *w >= 0.0) && self.sum() > 0.0
    }

    /// Normalizes the triple to sum to 1, substituting the default
    /// split for invalid input.
    ///
    /// Returns the resolved weights and whether the substitution
    /// happened; a substitution is also logged as a warning so callers
    /// see invalid input rather than a silent correction.
    pub fn resolve(&self) -> (TrilemmaWeights, bool) {
        if !self.is_valid() {
            log::warn!("invalid trilemma weights {self:?}, substituting the default split");
            return (TrilemmaWeights::default(), true);
        }
        let sum = self.sum();
        (
            TrilemmaWeights {
                cost: self.cost / sum,
                carbon: self.carbon / sum,
                time: self.time / sum,
            },
            false,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sums_to_one() {
        let w = TrilemmaWeights::default();
        assert!((w.cost + w.carbon + w.time - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_resolve_normalizes() {
        let (w, substituted) = TrilemmaWeights::new(2.0, 1.0, 1.0).resolve();
        assert!(!substituted);
        assert!((w.cost - 0.5).abs() < 1e-12);
        assert!((w.carbon - 0.25).abs() < 1e-12);
        assert!((w.time - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_all_zero_substitutes_default() {
        let (w, substituted) = TrilemmaWeights::new(0.0, 0.0, 0.0).resolve();
        assert!(substituted);
        assert_eq!(w, TrilemmaWeights::default());
    }

    #[test]
    fn test_negative_component_substitutes_default() {
        let (w, substituted) = TrilemmaWeights::new(1.0, -0.5, 0.5).resolve();
        assert!(substituted);
        assert_eq!(w, TrilemmaWeights::default());
    }

    #[test]
    fn test_non_finite_component_substitutes_default() {
        let (_, substituted) = TrilemmaWeights::new(f64::NAN, 0.5, 0.5).resolve();
        assert!(substituted);
    }
}
