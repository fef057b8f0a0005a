//! Justification rules and their thresholds.
//!
//! Each rule is a (predicate, message template) pair. The explainer
//! evaluates them in a fixed priority order and keeps the first three
//! that fire; changing the order or the thresholds changes the output
//! contract, so both live here as named items.

use crate::risk::CongestionReport;
use crate::trilemma::ScoredProfile;

/// Carbon tax share of total cost above which the tax is called out.
pub const TAX_SHARE_THRESHOLD_PCT: f64 = 15.0;

/// Average congestion level above which reliability risk is flagged.
pub const CONGESTION_HIGH_THRESHOLD: f64 = 6.0;

/// Average congestion level below which stability is flagged.
pub const CONGESTION_LOW_THRESHOLD: f64 = 4.0;

/// Minimum emission reduction versus the baseline worth mentioning.
pub const MIN_EMISSION_REDUCTION_PCT: f64 = 5.0;

/// Transit durations under this many days count as fast.
pub const FAST_TRANSIT_DAYS: f64 = 50.0;

/// Inputs shared by every justification rule.
pub(super) struct ExplainContext<'a> {
    /// All scored profiles in comparison order; index 0 is the baseline.
    pub scored: &'a [ScoredProfile],
    pub selected: &'a ScoredProfile,
    pub origin_risk: &'a CongestionReport,
    pub destination_risk: &'a CongestionReport,
}

impl ExplainContext<'_> {
    fn baseline(&self) -> &ScoredProfile {
        &self.scored[0]
    }

    fn avg_congestion(&self) -> f64 {
        f64::from(
            self.origin_risk.congestion_level + self.destination_risk.congestion_level,
        ) / 2.0
    }
}

/// A justification predicate paired with its message template.
///
/// Returns `Some(message)` when the condition holds for the selected
/// profile, `None` otherwise.
pub(super) trait DecisionRule: Send + Sync {
    fn name(&self) -> &str;
    fn apply(&self, ctx: &ExplainContext) -> Option<String>;
}

/// Priority 1: the carbon tax is a material share of total cost.
pub(super) struct TaxMateriality;

impl DecisionRule for TaxMateriality {
    fn name(&self) -> &str {
        "TaxMateriality"
    }

    fn apply(&self, ctx: &ExplainContext) -> Option<String> {
        let share = ctx.selected.profile.tax_share_pct();
        (share > TAX_SHARE_THRESHOLD_PCT).then(|| {
            format!("Carbon tax represents {share:.1}% of total cost; green routing is material")
        })
    }
}

/// Priority 2: average port congestion is notably high or notably low.
pub(super) struct CongestionRisk;

impl DecisionRule for CongestionRisk {
    fn name(&self) -> &str {
        "CongestionRisk"
    }

    fn apply(&self, ctx: &ExplainContext) -> Option<String> {
        let avg = ctx.avg_congestion();
        if avg > CONGESTION_HIGH_THRESHOLD {
            Some(format!(
                "High port congestion ({avg:.1}/10); reliability prioritized"
            ))
        } else if avg < CONGESTION_LOW_THRESHOLD {
            Some(format!(
                "Low congestion risk ({avg:.1}/10); stable route conditions"
            ))
        } else {
            None
        }
    }
}

/// Priority 3: the selected mode is the greenest compared mode and
/// beats the baseline by a meaningful margin.
pub(super) struct EmissionWin;

impl DecisionRule for EmissionWin {
    fn name(&self) -> &str {
        "EmissionWin"
    }

    fn apply(&self, ctx: &ExplainContext) -> Option<String> {
        let selected = &ctx.selected.profile;
        let greenest = ctx
            .scored
            .iter()
            .all(|s| selected.emissions_tonnes <= s.profile.emissions_tonnes);
        let baseline = &ctx.baseline().profile;
        if !greenest || baseline.emissions_tonnes <= 0.0 {
            return None;
        }
        let reduction = (baseline.emissions_tonnes - selected.emissions_tonnes)
            / baseline.emissions_tonnes
            * 100.0;
        (reduction > MIN_EMISSION_REDUCTION_PCT)
            .then(|| format!("Cuts emissions {reduction:.1}% versus the sea baseline"))
    }
}

/// Priority 4: the selected mode has the lowest total cost.
pub(super) struct CostWin;

impl DecisionRule for CostWin {
    fn name(&self) -> &str {
        "CostWin"
    }

    fn apply(&self, ctx: &ExplainContext) -> Option<String> {
        let selected = &ctx.selected.profile;
        let cheapest = ctx
            .scored
            .iter()
            .all(|s| selected.total_cost_usd <= s.profile.total_cost_usd);
        cheapest.then(|| {
            format!(
                "Most cost-effective option at {:.0} USD total",
                selected.total_cost_usd
            )
        })
    }
}

/// Priority 5: transit time is below the fast threshold.
pub(super) struct SpeedWin;

impl DecisionRule for SpeedWin {
    fn name(&self) -> &str {
        "SpeedWin"
    }

    fn apply(&self, ctx: &ExplainContext) -> Option<String> {
        let days = ctx.selected.profile.transit_days;
        (days < FAST_TRANSIT_DAYS).then(|| {
            format!("Fast transit ({days:.1} days) keeps the supply chain moving")
        })
    }
}

/// Priority 6: the trilemma score improved over the baseline's.
pub(super) struct ScoreImprovement;

impl DecisionRule for ScoreImprovement {
    fn name(&self) -> &str {
        "ScoreImprovement"
    }

    fn apply(&self, ctx: &ExplainContext) -> Option<String> {
        let baseline = ctx.baseline().score;
        if baseline <= 0.0 || ctx.selected.score >= baseline {
            return None;
        }
        let improvement = (baseline - ctx.selected.score) / baseline * 100.0;
        Some(format!(
            "Trilemma score improved {improvement:.1}% over the sea baseline"
        ))
    }
}
