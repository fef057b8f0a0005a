//! Engine error taxonomy.
//!
//! Only boundary precondition violations surface as errors. Lookup
//! misses (unknown route, unknown mode factors) and malformed trilemma
//! weights are recovered locally via documented fallbacks and never
//! reach this type.

use thiserror::Error;

/// Errors returned by the decision engine's boundary surface.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Cargo weight must be a finite, strictly positive tonnage.
    #[error("cargo weight must be positive, got {0}")]
    InvalidCargoWeight(f64),

    /// Carbon tax rate must be finite and non-negative.
    #[error("carbon tax rate must be non-negative, got {0}")]
    InvalidTaxRate(f64),

    /// Route endpoints must be non-blank names. The payload names the
    /// offending field (`"origin"` or `"destination"`).
    #[error("route {0} must not be blank")]
    BlankEndpoint(&'static str),

    /// Strict mode parsing rejected an unrecognized identifier.
    ///
    /// Callers that prefer the fallback policy should use
    /// [`TransportMode::parse_lossy`](crate::profile::TransportMode::parse_lossy)
    /// instead.
    #[error("unknown transport mode: {0:?}")]
    UnknownMode(String),
}
