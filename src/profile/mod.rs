//! Mode profile computation and route comparison.
//!
//! Turns a (route, weight, mode) combination into the metric triple the
//! trilemma weighs against itself: emissions, total cost (base freight
//! plus carbon tax), and transit time. [`compare_routes`] fans the
//! calculator out over the fixed comparison set with the sea baseline
//! first.

mod calculator;
mod comparator;
mod types;

pub use calculator::{mode_profile, DEFAULT_TAX_RATE};
pub use comparator::{compare_routes, COMPARISON_MODES};
pub use types::{ModeFactors, ModeProfile, TransportMode};
