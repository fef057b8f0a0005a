//! Decision engine facade.
//!
//! Wires the profile calculator, port risk estimator, trilemma scorer,
//! and explainer into the single `optimize` pipeline consumed by the
//! presentation layer. The engine owns nothing mutable: its only state
//! is an `Arc` over the immutable lookup tables, so one instance can
//! serve any number of concurrent callers.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::explain::explain;
use crate::profile::{
    compare_routes, mode_profile, ModeProfile, TransportMode, DEFAULT_TAX_RATE,
};
use crate::risk::{port_risk, CongestionReport};
use crate::tables::EngineTables;
use crate::trilemma::{
    score_profiles, select_best, ModeScore, ScoredDecision, TrilemmaWeights,
};

/// One shipment to evaluate.
///
/// # Examples
///
/// ```
/// use trilemma_engine::engine::ShipmentRequest;
/// use trilemma_engine::trilemma::TrilemmaWeights;
///
/// let request = ShipmentRequest::new("Shanghai", "Rotterdam", 100.0)
///     .with_tax_rate(120.0)
///     .with_weights(TrilemmaWeights::new(1.0, 2.0, 1.0));
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentRequest {
    pub origin: String,
    pub destination: String,

    /// Cargo weight in metric tonnes. Must be positive.
    pub weight_tonnes: f64,

    /// Carbon tax, USD per tonne of CO2.
    pub tax_rate: f64,

    /// Objective weights; `None` means the default equal-ish split.
    pub weights: Option<TrilemmaWeights>,
}

impl ShipmentRequest {
    pub fn new(origin: &str, destination: &str, weight_tonnes: f64) -> Self {
        ShipmentRequest {
            origin: origin.to_string(),
            destination: destination.to_string(),
            weight_tonnes,
            tax_rate: DEFAULT_TAX_RATE,
            weights: None,
        }
    }

    pub fn with_tax_rate(mut self, tax_rate: f64) -> Self {
        self.tax_rate = tax_rate;
        self
    }

    pub fn with_weights(mut self, weights: TrilemmaWeights) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Checks the boundary preconditions: positive finite weight,
    /// non-negative finite tax rate, non-blank endpoints.
    ///
    /// Malformed trilemma weights are deliberately not an error here;
    /// they resolve to the default split with a warning.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.weight_tonnes.is_finite() || self.weight_tonnes <= 0.0 {
            return Err(EngineError::InvalidCargoWeight(self.weight_tonnes));
        }
        if !self.tax_rate.is_finite() || self.tax_rate < 0.0 {
            return Err(EngineError::InvalidTaxRate(self.tax_rate));
        }
        if self.origin.trim().is_empty() {
            return Err(EngineError::BlankEndpoint("origin"));
        }
        if self.destination.trim().is_empty() {
            return Err(EngineError::BlankEndpoint("destination"));
        }
        Ok(())
    }
}

/// Full output of one optimization call, shaped for the dashboard
/// collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDecision {
    /// One profile per comparison mode, sea baseline first.
    pub profiles: Vec<ModeProfile>,

    pub origin_status: CongestionReport,
    pub destination_status: CongestionReport,

    pub decision: ScoredDecision,

    /// True when malformed weights were replaced by the default split.
    pub weights_substituted: bool,
}

/// The route metrics and trilemma decision engine.
///
/// # Examples
///
/// ```
/// use trilemma_engine::engine::{DecisionEngine, ShipmentRequest};
///
/// let engine = DecisionEngine::new();
/// let outcome = engine
///     .optimize(&ShipmentRequest::new("Shanghai", "Rotterdam", 100.0))
///     .unwrap();
///
/// assert_eq!(outcome.profiles.len(), 3);
/// assert!((2..=3).contains(&outcome.decision.reasoning.len()));
/// ```
#[derive(Debug, Clone)]
pub struct DecisionEngine {
    tables: Arc<EngineTables>,
}

impl Default for DecisionEngine {
    fn default() -> Self {
        DecisionEngine::new()
    }
}

impl DecisionEngine {
    /// Creates an engine over the built-in lookup tables.
    pub fn new() -> Self {
        DecisionEngine::with_tables(EngineTables::default())
    }

    /// Creates an engine over caller-supplied tables.
    pub fn with_tables(tables: EngineTables) -> Self {
        DecisionEngine {
            tables: Arc::new(tables),
        }
    }

    /// The lookup tables backing this engine.
    pub fn tables(&self) -> &EngineTables {
        &self.tables
    }

    /// Computes the profile for a single mode, including modes outside
    /// the default comparison set.
    pub fn profile(
        &self,
        request: &ShipmentRequest,
        mode: TransportMode,
    ) -> Result<ModeProfile, EngineError> {
        mode_profile(
            &self.tables,
            &request.origin,
            &request.destination,
            request.weight_tonnes,
            mode,
            request.tax_rate,
        )
    }

    /// Computes one profile per comparison mode, sea baseline first.
    pub fn compare(&self, request: &ShipmentRequest) -> Result<Vec<ModeProfile>, EngineError> {
        compare_routes(
            &self.tables,
            &request.origin,
            &request.destination,
            request.weight_tonnes,
            request.tax_rate,
        )
    }

    /// Simulates the congestion assessment for one port.
    pub fn port_risk(&self, port: &str) -> CongestionReport {
        port_risk(port)
    }

    /// Runs the full pipeline: compare modes, assess both ports, score,
    /// select, and justify.
    pub fn optimize(&self, request: &ShipmentRequest) -> Result<RouteDecision, EngineError> {
        request.validate()?;

        let profiles = self.compare(request)?;
        let origin_status = port_risk(&request.origin);
        let destination_status = port_risk(&request.destination);

        let (weights, weights_substituted) =
            request.weights.unwrap_or_default().resolve();
        let scored = score_profiles(&profiles, &weights);
        let selected_idx =
            select_best(&scored).expect("comparison mode set is non-empty");

        let reasoning = explain(&scored, selected_idx, &origin_status, &destination_status);

        let selected = &scored[selected_idx];
        let decision = ScoredDecision {
            selected_mode: selected.profile.mode,
            score: selected.score,
            selected: selected.profile.clone(),
            reasoning,
            scores: scored
                .iter()
                .map(|s| ModeScore {
                    mode: s.profile.mode,
                    score: s.score,
                })
                .collect(),
        };

        Ok(RouteDecision {
            profiles,
            origin_status,
            destination_status,
            decision,
            weights_substituted,
        })
    }
}
