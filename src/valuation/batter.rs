// Batter valuation: linear event weights plus platoon and defensive bonuses.

use serde::Serialize;

use crate::player::codes::{PlatoonBalance, PlatoonSide};
use crate::player::record::Batter;
use crate::valuation::weights::BatterWeights;

/// Plate-appearance baseline the normalized rate metric is scaled to.
pub const PA_BASELINE: f64 = 600.0;

/// A batter's computed value and rate metrics.
///
/// Rate metrics are `None` when their denominator is zero, meaning the
/// metric is undefined rather than zero. Consumers treat `None` as minimal:
/// it contributes nothing to strategy scores and sorts behind any defined
/// rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BatterValue {
    pub total: f64,
    /// Value normalized to a 600-PA baseline; `None` when PA is zero.
    pub per_600_pa: Option<f64>,
    /// Value per unit of salary; `None` when salary is zero.
    pub per_salary: Option<f64>,
}

/// Platoon bonus: balance level times the weight for the favored side.
///
/// Neutral balances (including anything that failed to parse) contribute
/// zero.
pub fn platoon_bonus(balance: PlatoonBalance, weights: &BatterWeights) -> f64 {
    match balance.side {
        PlatoonSide::Right => balance.level as f64 * weights.platoon_vs_right,
        PlatoonSide::Left => balance.level as f64 * weights.platoon_vs_left,
        PlatoonSide::Neutral => 0.0,
    }
}

/// Defensive bonus from the primary (first-listed) defensive rating.
///
/// Range runs 1 (best) to 5 (worst), so `6 - range` ascends with quality.
/// Batters with no defensive profile contribute zero.
pub fn defensive_bonus(batter: &Batter, weights: &BatterWeights) -> f64 {
    match batter.primary_defense() {
        Some(rating) => {
            (6.0 - rating.range as f64) * weights.range_bonus
                + rating.errors as f64 * weights.error_penalty
        }
        None => 0.0,
    }
}

/// Compute a batter's value and rate metrics.
///
/// Value is the weighted linear sum of singles, doubles, triples, home runs,
/// walks, hit-by-pitch, stolen bases, and caught-stealing, plus the per-out
/// penalty, the platoon bonus, and the defensive bonus. Pure and
/// deterministic; never fails on any stat line.
pub fn value_batter(batter: &Batter, weights: &BatterWeights) -> BatterValue {
    let events = batter.singles() as f64 * weights.single
        + batter.doubles as f64 * weights.double
        + batter.triples as f64 * weights.triple
        + batter.home_runs as f64 * weights.home_run
        + batter.walks as f64 * weights.walk
        + batter.hit_by_pitch as f64 * weights.hit_by_pitch
        + batter.stolen_bases as f64 * weights.stolen_base
        + batter.caught_stealing as f64 * weights.caught_stealing;
    let total = events
        + batter.outs() as f64 * weights.out
        + platoon_bonus(batter.balance, weights)
        + defensive_bonus(batter, weights);

    let per_600_pa = if batter.plate_appearances > 0 {
        Some(total / batter.plate_appearances as f64 * PA_BASELINE)
    } else {
        None
    };
    let per_salary = if batter.salary > 0 {
        Some(total / batter.salary as f64)
    } else {
        None
    };

    BatterValue { total, per_600_pa, per_salary }
}
