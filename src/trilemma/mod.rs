//! Trilemma scoring and mode selection.
//!
//! Collapses each mode's cost/carbon/time triple into a single weighted
//! penalty score (minimization convention: lower is better) and selects
//! the argmin, with ties broken by input order.

mod scorer;
mod types;
mod weights;

pub use scorer::{
    score_profile, score_profiles, select_best, COST_SCALE_USD, EMISSION_SCALE_TONNES,
    TIME_SCALE_DAYS,
};
pub use types::{ModeScore, ScoredDecision, ScoredProfile};
pub use weights::TrilemmaWeights;
