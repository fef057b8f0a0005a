//! Port risk estimation.
//!
//! A prototype stand-in for a live port-authority feed: congestion is
//! simulated, but deterministically, with each port name acting as its
//! own seed. Re-running a query for the same port returns identical
//! numbers while different ports diverge.

mod estimator;
mod types;

pub use estimator::{port_risk, BERTH_AVAILABILITY_RANGE, DELAY_DAYS_PER_LEVEL};
pub use types::{CongestionBand, CongestionReport};
