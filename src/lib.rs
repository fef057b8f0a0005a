//! Route metrics and trilemma decision engine for multimodal freight.
//!
//! Compares transport modes between an origin and destination under
//! three competing objectives — monetary cost, carbon emissions, and
//! transit time — and picks a single recommended mode with auditable,
//! rule-generated reasoning:
//!
//! - **[`profile`]**: Per-mode distance, emission, cost, and transit
//!   computation, plus the fixed-order route comparison (sea baseline,
//!   slow-steaming sea, rail).
//! - **[`risk`]**: Deterministic port congestion simulation seeded from
//!   the port name — stable per port, across calls and runs.
//! - **[`trilemma`]**: Weighted penalty scoring over the three
//!   objectives and argmin selection with order-stable tie-breaks.
//! - **[`explain`]**: Fixed-priority justification rules producing 2-3
//!   human-readable bullets per decision.
//! - **[`tables`]**: Immutable distance and factor lookup tables,
//!   loaded once and shared read-only.
//! - **[`engine`]**: The facade wiring it all into one `optimize` call.
//!
//! # Architecture
//!
//! The engine is pure computation: no I/O, no mutable state beyond the
//! startup-loaded tables, no retries. Lookup misses recover through
//! documented fallbacks; only boundary precondition violations (bad
//! cargo weight, blank endpoints) surface as [`error::EngineError`].
//! Presentation concerns — dashboards, narration, sliders — live in
//! external collaborators that consume the serialized output.
//!
//! # Example
//!
//! ```
//! use trilemma_engine::engine::{DecisionEngine, ShipmentRequest};
//!
//! let engine = DecisionEngine::new();
//! let outcome = engine
//!     .optimize(&ShipmentRequest::new("Shanghai", "Rotterdam", 100.0))
//!     .unwrap();
//!
//! println!(
//!     "recommended: {} (score {})",
//!     outcome.decision.selected_mode, outcome.decision.score
//! );
//! for reason in &outcome.decision.reasoning {
//!     println!("- {reason}");
//! }
//! ```

pub mod engine;
pub mod error;
pub mod explain;
pub mod profile;
pub mod risk;
pub mod tables;
pub mod trilemma;

mod units;
