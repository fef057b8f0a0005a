//! Weighted penalty scoring and argmin selection.

use crate::profile::ModeProfile;
use crate::units::round4;

use super::types::ScoredProfile;
use super::weights::TrilemmaWeights;

/// Normalization scale for total cost, USD.
pub const COST_SCALE_USD: f64 = 100_000.0;

/// Normalization scale for emissions, tonnes of CO2.
pub const EMISSION_SCALE_TONNES: f64 = 100.0;

/// Normalization scale for transit time, days.
pub const TIME_SCALE_DAYS: f64 = 100.0;

/// Computes the weighted penalty score for one profile.
///
/// Each objective is divided by a fixed scale chosen so realistic
/// magnitudes land in a comparable 0-1-ish range, then combined as a
/// weighted sum. Lower is strictly better. Rounded to 4 decimals.
///
/// The weights are taken as already resolved; pass the triple through
/// [`TrilemmaWeights::resolve`] first.
pub fn score_profile(profile: &ModeProfile, weights: &TrilemmaWeights) -> f64 {
    let cost_penalty = profile.total_cost_usd / COST_SCALE_USD;
    let carbon_penalty = profile.emissions_tonnes / EMISSION_SCALE_TONNES;
    let time_penalty = profile.transit_days / TIME_SCALE_DAYS;

    round4(
        weights.cost * cost_penalty
            + weights.carbon * carbon_penalty
            + weights.time * time_penalty,
    )
}

/// Scores every profile, preserving input order.
pub fn score_profiles(profiles: &[ModeProfile], weights: &TrilemmaWeights) -> Vec<ScoredProfile> {
    profiles
        .iter()
        .map(|profile| ScoredProfile {
            profile: profile.clone(),
            score: score_profile(profile, weights),
        })
        .collect()
}

/// Returns the index of the minimum-score profile.
///
/// Ties keep the first occurrence in input order; there is no secondary
/// tie-break. Returns `None` for an empty slice.
pub fn select_best(scored: &[ScoredProfile]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (idx, candidate) in scored.iter().enumerate() {
        match best {
            None => best = Some(idx),
            Some(current) if candidate.score < scored[current].score => best = Some(idx),
            Some(_) => {}
        }
    }
    best
}
