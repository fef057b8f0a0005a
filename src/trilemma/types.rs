//! Scored profiles and the final decision record.

use serde::{Deserialize, Serialize};

use crate::profile::{ModeProfile, TransportMode};

/// A mode profile with its trilemma penalty score attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredProfile {
    pub profile: ModeProfile,

    /// Weighted penalty score, 4 decimals. Lower is better.
    pub score: f64,
}

/// One entry of the mode-to-score mapping, in comparison order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModeScore {
    pub mode: TransportMode,
    pub score: f64,
}

/// The selected mode with its justification and the full score map.
///
/// Constructed once per optimization call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDecision {
    pub selected_mode: TransportMode,

    /// The winning profile's penalty score.
    pub score: f64,

    /// Full metric profile of the winning mode.
    pub selected: ModeProfile,

    /// 2 to 3 justification strings in rule priority order.
    pub reasoning: Vec<String>,

    /// Every compared mode with its score, in comparison order.
    pub scores: Vec<ModeScore>,
}
