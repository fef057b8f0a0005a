//! Rule-based decision justification.
//!
//! Not free-form prose generation: a fixed ordered table of
//! (predicate, message template) pairs, evaluated in priority order and
//! truncated to three entries, so the output stays auditable and
//! reproducible.

mod explainer;
mod rules;

pub use explainer::{explain, MAX_REASONS, MIN_REASONS};
pub use rules::{
    CONGESTION_HIGH_THRESHOLD, CONGESTION_LOW_THRESHOLD, FAST_TRANSIT_DAYS,
    MIN_EMISSION_REDUCTION_PCT, TAX_SHARE_THRESHOLD_PCT,
};
