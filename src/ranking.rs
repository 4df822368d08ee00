// Strategy ranker: blends neutral value with user category preferences.
//
// The scores here are deliberately heuristic weighted sums, not an optimal
// utility. Their coefficients define the observable selection ordering and
// are the compatibility contract with the rest of the system, so they must
// not drift. Scores are raw f64; nothing in the core rounds them.

use serde::{Deserialize, Serialize};

use crate::player::record::{Batter, Pitcher};
use crate::valuation::batter::{value_batter, BatterValue};
use crate::valuation::pitcher::{value_pitcher, PitcherValue};
use crate::valuation::weights::{BatterWeights, PitcherWeights};

// ---------------------------------------------------------------------------
// Strategy preferences
// ---------------------------------------------------------------------------

/// Batter category sliders, each 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatterSliders {
    pub speed: u8,
    pub power: u8,
    pub defense: u8,
    pub on_base: u8,
}

/// Pitcher category sliders, each 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitcherSliders {
    pub starter: u8,
    pub reliever: u8,
    pub closer: u8,
    pub strikeout: u8,
}

/// Target roster shape the selector builds toward.
///
/// `pitchers`/`batters` are total seat counts; the `min_*` fields are the
/// role quotas tracked during pitcher selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterShape {
    pub pitchers: usize,
    pub batters: usize,
    pub min_starters: usize,
    pub min_relievers: usize,
    pub min_pure_relievers: usize,
}

/// The full strategy model: sliders, budget split, and roster shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyPreferences {
    pub batter: BatterSliders,
    pub pitcher: PitcherSliders,
    /// Percentage of the salary cap allocated to batters (0-100); the
    /// pitcher share is the complement.
    pub batter_budget_pct: u8,
    pub shape: RosterShape,
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Strategy score for a batter.
///
/// `0.3 x value` plus per-game speed, power, and on-base terms, a defense
/// term from the primary defensive rating, and a value-per-salary kicker.
/// Zero games skips the per-game terms; an undefined per-salary rate
/// contributes zero.
pub fn rank_batter(batter: &Batter, value: &BatterValue, prefs: &StrategyPreferences) -> f64 {
    let mut score = 0.3 * value.total;

    if batter.games > 0 {
        let games = batter.games as f64;
        let speed_events = (batter.stolen_bases * 3 + batter.triples * 2) as f64;
        score += speed_events / games * (prefs.batter.speed as f64 / 100.0 * 50.0);

        let power_events = (batter.home_runs * 4 + batter.doubles * 2) as f64;
        score += power_events / games * (prefs.batter.power as f64 / 100.0 * 50.0);

        let on_base_events = (batter.walks + batter.hit_by_pitch) as f64;
        score += on_base_events / games * (prefs.batter.on_base as f64 / 100.0 * 30.0);
    }

    if let Some(rating) = batter.primary_defense() {
        let glove = (6.0 - rating.range as f64) * 2.0 - rating.errors as f64 * 0.5;
        score += glove * (prefs.batter.defense as f64 / 100.0 * 10.0);
    }

    score += 2.0 * value.per_salary.unwrap_or(0.0);
    score
}

/// Strategy score for a pitcher.
///
/// `0.3 x value` plus role bonuses for each capability the endurance code
/// carries (a starter bonus with a per-start kicker, a reliever bonus, a
/// closer bonus), a strikeouts-per-inning term, an efficiency term that
/// rewards low walks-plus-hits per inning (capped at 2), and a
/// value-per-salary kicker. Zero innings skips the per-inning terms.
pub fn rank_pitcher(pitcher: &Pitcher, value: &PitcherValue, prefs: &StrategyPreferences) -> f64 {
    let mut score = 0.3 * value.total;

    if pitcher.endurance.can_start {
        score += prefs.pitcher.starter as f64 / 100.0 * 100.0;
        score += 5.0 * value.per_start.unwrap_or(0.0);
    }
    if pitcher.endurance.can_relieve {
        score += prefs.pitcher.reliever as f64 / 100.0 * 80.0;
    }
    if pitcher.endurance.closer {
        score += prefs.pitcher.closer as f64 / 100.0 * 60.0;
    }

    if pitcher.innings > 0.0 {
        let k_rate = pitcher.strikeouts as f64 / pitcher.innings;
        score += k_rate * (prefs.pitcher.strikeout as f64 / 100.0 * 100.0);

        let traffic = (pitcher.walks_allowed + pitcher.hits_allowed) as f64 / pitcher.innings;
        score += (2.0 - traffic.min(2.0)) * 50.0;
    }

    score += 2.0 * value.per_salary.unwrap_or(0.0);
    score
}

// ---------------------------------------------------------------------------
// Ranked pools
// ---------------------------------------------------------------------------

/// A batter with its computed value and strategy score attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedBatter {
    pub batter: Batter,
    pub value: BatterValue,
    pub score: f64,
}

/// A pitcher with its computed value and strategy score attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPitcher {
    pub pitcher: Pitcher,
    pub value: PitcherValue,
    pub score: f64,
}

/// Value and rank the batter pool.
///
/// Steps:
/// 1. Compute each batter's value and rate metrics.
/// 2. Compute each strategy score.
/// 3. Sort descending by score; the sort is stable, so ties keep input
///    order.
pub fn rank_batters(
    batters: &[Batter],
    weights: &BatterWeights,
    prefs: &StrategyPreferences,
) -> Vec<RankedBatter> {
    let mut ranked: Vec<RankedBatter> = batters
        .iter()
        .map(|batter| {
            let value = value_batter(batter, weights);
            let score = rank_batter(batter, &value, prefs);
            RankedBatter { batter: batter.clone(), value, score }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    ranked
}

/// Value and rank the pitcher pool. Same pipeline as [`rank_batters`].
pub fn rank_pitchers(
    pitchers: &[Pitcher],
    weights: &PitcherWeights,
    prefs: &StrategyPreferences,
) -> Vec<RankedPitcher> {
    let mut ranked: Vec<RankedPitcher> = pitchers
        .iter()
        .map(|pitcher| {
            let value = value_pitcher(pitcher, weights);
            let score = rank_pitcher(pitcher, &value, prefs);
            RankedPitcher { pitcher: pitcher.clone(), value, score }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    ranked
}
