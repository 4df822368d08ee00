// Valuation weight sets: the per-event linear coefficients.

use serde::{Deserialize, Serialize};

/// Per-event coefficients for batter valuation.
///
/// Event weights apply to derived singles plus the raw counting stats; the
/// out weight is a per-out penalty and is normally negative, as is the error
/// penalty. Platoon weights are per balance level and apply only when the
/// batter's balance favors the matching pitching hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatterWeights {
    pub single: f64,
    pub double: f64,
    pub triple: f64,
    pub home_run: f64,
    pub walk: f64,
    pub hit_by_pitch: f64,
    pub stolen_base: f64,
    pub caught_stealing: f64,
    /// Per-out penalty, normally negative.
    pub out: f64,
    /// Platoon bonus per balance level when the balance favors right-handed
    /// pitching.
    pub platoon_vs_right: f64,
    /// Platoon bonus per balance level when the balance favors left-handed
    /// pitching.
    pub platoon_vs_left: f64,
    /// Defensive bonus per step of range superiority (range 1 is best).
    pub range_bonus: f64,
    /// Per-error penalty, normally negative.
    pub error_penalty: f64,
}

/// Per-event coefficients for pitcher valuation.
///
/// Everything but the strikeout weight is normally negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitcherWeights {
    pub strikeout: f64,
    pub walk_allowed: f64,
    pub hit_allowed: f64,
    pub home_run_allowed: f64,
    pub earned_run: f64,
}

/// The full valuation model: one coefficient set per player class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationWeights {
    pub batter: BatterWeights,
    pub pitcher: PitcherWeights,
}
