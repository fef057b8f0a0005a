//! Rule evaluation and padding of the justification list.

use crate::risk::CongestionReport;
use crate::trilemma::ScoredProfile;

use super::rules::{
    CongestionRisk, CostWin, DecisionRule, EmissionWin, ExplainContext, ScoreImprovement,
    SpeedWin, TaxMateriality,
};

/// The justification list is truncated to this many entries.
pub const MAX_REASONS: usize = 3;

/// The justification list is padded up to this many entries.
pub const MIN_REASONS: usize = 2;

/// Produces 2 to 3 justification strings for the selected profile.
///
/// The six rules run in fixed priority order (tax materiality,
/// congestion, emission win, cost win, speed win, score improvement)
/// and only those whose predicate holds contribute, capped at
/// [`MAX_REASONS`]. When fewer than [`MIN_REASONS`] fire, neutral
/// statements pad the list so it is never shorter than 2.
///
/// # Panics
///
/// Panics if `scored` is empty or `selected_idx` is out of bounds; the
/// comparator always supplies a non-empty list.
pub fn explain(
    scored: &[ScoredProfile],
    selected_idx: usize,
    origin_risk: &CongestionReport,
    destination_risk: &CongestionReport,
) -> Vec<String> {
    let ctx = ExplainContext {
        scored,
        selected: &scored[selected_idx],
        origin_risk,
        destination_risk,
    };

    let rules: [&dyn DecisionRule; 6] = [
        &TaxMateriality,
        &CongestionRisk,
        &EmissionWin,
        &CostWin,
        &SpeedWin,
        &ScoreImprovement,
    ];

    let mut reasons: Vec<String> = rules
        .iter()
        .filter_map(|rule| rule.apply(&ctx))
        .take(MAX_REASONS)
        .collect();

    if reasons.len() < MIN_REASONS {
        reasons.push(
            "Balanced optimization across cost, carbon, and time constraints".to_string(),
        );
    }
    if reasons.len() < MIN_REASONS {
        reasons.push(format!(
            "Port conditions within normal operating range ({:.1}/10 average congestion)",
            f64::from(origin_risk.congestion_level + destination_risk.congestion_level) / 2.0
        ));
    }

    reasons
}
