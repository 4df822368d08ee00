// Constrained roster selection: greedy by strategy score under a split
// budget, with bounded relaxation for pitcher role quotas.
//
// Pitchers and batters are selected independently from disjoint sub-budgets.
// Pitcher role quotas are brittle (a roster can be fully built yet illegal
// if one quota is unmet), so the pitcher walk may spend past the soft budget
// for quota-critical picks, never past the relaxed ceiling. Batter
// composition has a single brittle quota (the catcher minimum), handled by a
// dedicated first pass, so batter selection stays strictly budgeted.

use serde::Serialize;
use tracing::debug;

use crate::player::position::{list_covers, Position};
use crate::player::record::{Batter, Pitcher};
use crate::ranking::{RankedBatter, RankedPitcher, RosterShape, StrategyPreferences};
use crate::selection::validator::{validate, RosterReport, RosterRequirements};

/// Fraction by which a quota-critical pitcher pick may exceed the strict
/// pitcher sub-budget. Relaxation applies only while a role quota is unmet;
/// batter selection never relaxes.
pub const PITCHER_BUDGET_OVERAGE: f64 = 0.20;

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// The split of the total cap into the two class sub-budgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetSplit {
    pub batters: u64,
    pub pitchers: u64,
}

/// Split the salary cap by the batter percentage; the pitcher share is the
/// exact complement, so the two sub-budgets always sum to the cap.
pub fn split_budget(salary_cap: u32, batter_budget_pct: u8) -> BudgetSplit {
    let batters = salary_cap as u64 * batter_budget_pct as u64 / 100;
    BudgetSplit { batters, pitchers: salary_cap as u64 - batters }
}

/// A selected roster: the chosen records plus the derived total spend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionResult {
    pub batters: Vec<Batter>,
    pub pitchers: Vec<Pitcher>,
    pub total_spend: u64,
}

impl SelectionResult {
    /// Run the feasibility validator over this selection.
    pub fn validate(&self, requirements: &RosterRequirements) -> RosterReport {
        validate(&self.batters, &self.pitchers, requirements)
    }
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Build a roster from ranked pools under the preferences and requirements.
///
/// Pitchers are selected first, then batters, from disjoint sub-budgets; the
/// two walks never trade budget. Empty pools yield an empty selection, and
/// an unsatisfiable quota never raises: the result is the best roster the
/// pools allow, and the validator reports what is missing.
pub fn select(
    batter_pool: &[RankedBatter],
    pitcher_pool: &[RankedPitcher],
    prefs: &StrategyPreferences,
    requirements: &RosterRequirements,
) -> SelectionResult {
    let split = split_budget(requirements.salary_cap, prefs.batter_budget_pct);

    let pitchers = select_pitchers(pitcher_pool, &prefs.shape, split.pitchers);
    let batters = select_batters(
        batter_pool,
        prefs.shape.batters,
        requirements.min_catchers,
        split.batters,
    );

    let total_spend = batters.iter().map(|b| b.salary as u64).sum::<u64>()
        + pitchers.iter().map(|p| p.salary as u64).sum::<u64>();

    SelectionResult { batters, pitchers, total_spend }
}

/// Pitcher walk: score order with quota tracking and bounded relaxation.
///
/// A candidate is "needed" when some role count is still below its target
/// and the candidate carries the matching capability. Non-needed candidates
/// must fit the strict remaining budget; needed candidates may spend into
/// the overage but never past the relaxed ceiling. An accepted pitcher
/// advances every count it matches. A backfill pass then seats any remaining
/// strictly-affordable candidates in rank order while seats are open.
fn select_pitchers(pool: &[RankedPitcher], shape: &RosterShape, budget: u64) -> Vec<Pitcher> {
    let mut sorted: Vec<&RankedPitcher> = pool.iter().collect();
    sorted.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

    let relaxed_ceiling = budget as f64 * (1.0 + PITCHER_BUDGET_OVERAGE);

    let mut chosen: Vec<Pitcher> = Vec::new();
    let mut taken = vec![false; sorted.len()];
    let mut spent: u64 = 0;
    let mut starters: usize = 0;
    let mut relievers: usize = 0;
    let mut pure_relievers: usize = 0;

    for (i, candidate) in sorted.iter().enumerate() {
        if chosen.len() >= shape.pitchers {
            break;
        }
        let roles = candidate.pitcher.endurance;
        let needed = (starters < shape.min_starters && roles.can_start)
            || (relievers < shape.min_relievers && roles.can_relieve)
            || (pure_relievers < shape.min_pure_relievers && roles.is_pure_reliever());

        let salary = candidate.pitcher.salary as u64;
        let fits_strict = spent + salary <= budget;
        let fits_relaxed = (spent + salary) as f64 <= relaxed_ceiling;

        if fits_strict || (needed && fits_relaxed) {
            if !fits_strict {
                debug!(
                    player = %candidate.pitcher.name,
                    salary,
                    spent,
                    budget,
                    "quota-critical pick over the soft pitcher budget"
                );
            }
            taken[i] = true;
            spent += salary;
            if roles.can_start {
                starters += 1;
            }
            if roles.can_relieve {
                relievers += 1;
            }
            if roles.is_pure_reliever() {
                pure_relievers += 1;
            }
            chosen.push(candidate.pitcher.clone());
        }
    }

    // Backfill any open seats with strictly-affordable arms, in rank order.
    if chosen.len() < shape.pitchers {
        for (i, candidate) in sorted.iter().enumerate() {
            if chosen.len() >= shape.pitchers {
                break;
            }
            if taken[i] {
                continue;
            }
            let salary = candidate.pitcher.salary as u64;
            if spent + salary <= budget {
                taken[i] = true;
                spent += salary;
                chosen.push(candidate.pitcher.clone());
            }
        }
    }

    chosen
}

/// Batter walk: catcher coverage first, then score order, strictly budgeted.
fn select_batters(
    pool: &[RankedBatter],
    target: usize,
    catcher_target: usize,
    budget: u64,
) -> Vec<Batter> {
    let mut sorted: Vec<&RankedBatter> = pool.iter().collect();
    sorted.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

    let mut chosen: Vec<Batter> = Vec::new();
    let mut taken = vec![false; sorted.len()];
    let mut spent: u64 = 0;

    // Catcher coverage before any generic spending: catchers rarely survive
    // a pure score-order walk once the budget starts filling.
    let mut catchers: usize = 0;
    for (i, candidate) in sorted.iter().enumerate() {
        if catchers >= catcher_target || chosen.len() >= target {
            break;
        }
        if !list_covers(&candidate.batter.positions, Position::Catcher) {
            continue;
        }
        let salary = candidate.batter.salary as u64;
        if spent + salary <= budget {
            taken[i] = true;
            spent += salary;
            catchers += 1;
            chosen.push(candidate.batter.clone());
        }
    }

    for (i, candidate) in sorted.iter().enumerate() {
        if chosen.len() >= target {
            break;
        }
        if taken[i] {
            continue;
        }
        let salary = candidate.batter.salary as u64;
        if spent + salary <= budget {
            taken[i] = true;
            spent += salary;
            chosen.push(candidate.batter.clone());
        }
    }

    chosen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::codes::{PitchingRoles, PlatoonBalance};
    use crate::ranking::{BatterSliders, PitcherSliders};
    use crate::valuation::batter::BatterValue;
    use crate::valuation::pitcher::PitcherValue;

    fn make_prefs(shape: RosterShape, batter_budget_pct: u8) -> StrategyPreferences {
        StrategyPreferences {
            batter: BatterSliders { speed: 50, power: 50, defense: 50, on_base: 50 },
            pitcher: PitcherSliders { starter: 50, reliever: 50, closer: 50, strikeout: 50 },
            batter_budget_pct,
            shape,
        }
    }

    fn make_requirements(salary_cap: u32, min_catchers: usize) -> RosterRequirements {
        RosterRequirements {
            min_pitchers: 0,
            max_pitchers: 50,
            min_batters: 0,
            max_batters: 50,
            min_starters: 0,
            min_relievers: 0,
            min_pure_relievers: 0,
            min_catchers,
            require_all_positions: false,
            salary_cap,
        }
    }

    fn ranked_pitcher(id: &str, endurance: &str, salary: u32, score: f64) -> RankedPitcher {
        RankedPitcher {
            pitcher: Pitcher {
                id: id.to_string(),
                name: format!("Pitcher {}", id),
                season: "2025".to_string(),
                salary,
                games: 30,
                games_started: 15,
                innings: 120.0,
                strikeouts: 100,
                walks_allowed: 40,
                hits_allowed: 110,
                home_runs_allowed: 12,
                earned_runs: 50,
                endurance: PitchingRoles::parse(endurance),
            },
            value: PitcherValue {
                total: score,
                per_inning: None,
                per_start: None,
                per_salary: None,
            },
            score,
        }
    }

    fn ranked_batter(id: &str, positions: &str, salary: u32, score: f64) -> RankedBatter {
        RankedBatter {
            batter: Batter {
                id: id.to_string(),
                name: format!("Batter {}", id),
                season: "2025".to_string(),
                salary,
                positions: positions.to_string(),
                games: 140,
                plate_appearances: 550,
                at_bats: 500,
                hits: 130,
                doubles: 22,
                triples: 3,
                home_runs: 18,
                walks: 40,
                hit_by_pitch: 4,
                stolen_bases: 8,
                caught_stealing: 3,
                balance: PlatoonBalance::neutral(),
                defense: vec![],
            },
            value: BatterValue { total: score, per_600_pa: None, per_salary: None },
            score,
        }
    }

    fn chosen_pitcher_ids(result: &SelectionResult) -> Vec<&str> {
        result.pitchers.iter().map(|p| p.id.as_str()).collect()
    }

    fn chosen_batter_ids(result: &SelectionResult) -> Vec<&str> {
        result.batters.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn split_budget_floors_the_batter_share() {
        let split = split_budget(10_000, 60);
        assert_eq!(split.batters, 6_000);
        assert_eq!(split.pitchers, 4_000);

        // Odd split: the complement absorbs the rounding remainder.
        let split = split_budget(1_001, 33);
        assert_eq!(split.batters, 330);
        assert_eq!(split.pitchers, 671);
        assert_eq!(split.batters + split.pitchers, 1_001);

        assert_eq!(split_budget(500, 0).batters, 0);
        assert_eq!(split_budget(500, 100).pitchers, 0);
    }

    #[test]
    fn empty_pools_select_nothing() {
        let shape = RosterShape {
            pitchers: 5,
            batters: 5,
            min_starters: 2,
            min_relievers: 2,
            min_pure_relievers: 1,
        };
        let result = select(&[], &[], &make_prefs(shape, 60), &make_requirements(10_000, 2));
        assert!(result.batters.is_empty());
        assert!(result.pitchers.is_empty());
        assert_eq!(result.total_spend, 0);
    }

    #[test]
    fn pitchers_fill_to_target_in_score_order() {
        let shape = RosterShape {
            pitchers: 2,
            batters: 0,
            min_starters: 0,
            min_relievers: 0,
            min_pure_relievers: 0,
        };
        let pool = vec![
            ranked_pitcher("mid", "S7", 100, 80.0),
            ranked_pitcher("best", "S8", 100, 95.0),
            ranked_pitcher("worst", "R2", 100, 60.0),
        ];
        let result = select(&[], &pool, &make_prefs(shape, 0), &make_requirements(10_000, 0));
        assert_eq!(chosen_pitcher_ids(&result), vec!["best", "mid"]);
        assert_eq!(result.total_spend, 200);
    }

    #[test]
    fn equal_scores_keep_input_order() {
        let shape = RosterShape {
            pitchers: 2,
            batters: 0,
            min_starters: 0,
            min_relievers: 0,
            min_pure_relievers: 0,
        };
        let pool = vec![
            ranked_pitcher("first", "S7", 100, 75.0),
            ranked_pitcher("second", "S7", 100, 75.0),
            ranked_pitcher("third", "S7", 100, 75.0),
        ];
        let result = select(&[], &pool, &make_prefs(shape, 0), &make_requirements(10_000, 0));
        assert_eq!(chosen_pitcher_ids(&result), vec!["first", "second"]);
    }

    #[test]
    fn unaffordable_non_needed_arm_is_skipped_for_a_cheaper_one() {
        let shape = RosterShape {
            pitchers: 2,
            batters: 0,
            min_starters: 0,
            min_relievers: 0,
            min_pure_relievers: 0,
        };
        // Cap 100, all to pitchers. The ace eats 90; the mid arm no longer
        // fits strictly and no quota makes it needed, so the cheap arm seats.
        let pool = vec![
            ranked_pitcher("ace", "S8", 90, 100.0),
            ranked_pitcher("mid", "S7", 40, 90.0),
            ranked_pitcher("cheap", "R2", 10, 50.0),
        ];
        let result = select(&[], &pool, &make_prefs(shape, 0), &make_requirements(100, 0));
        assert_eq!(chosen_pitcher_ids(&result), vec!["ace", "cheap"]);
        assert_eq!(result.total_spend, 100);
    }

    #[test]
    fn quota_critical_pick_spends_into_the_overage() {
        let shape = RosterShape {
            pitchers: 7,
            batters: 0,
            min_starters: 5,
            min_relievers: 2,
            min_pure_relievers: 2,
        };
        // Five starters exhaust the strict 1000. The two pure relievers are
        // below them in score but quota-needed, so they spend into the 20%.
        let mut pool: Vec<RankedPitcher> = (0..5)
            .map(|i| ranked_pitcher(&format!("sp{}", i), "S8", 200, 90.0 - i as f64))
            .collect();
        pool.push(ranked_pitcher("rp1", "R2", 80, 40.0));
        pool.push(ranked_pitcher("rp2", "C1", 80, 35.0));

        let result = select(&[], &pool, &make_prefs(shape, 0), &make_requirements(1_000, 0));
        assert_eq!(result.pitchers.len(), 7);
        let pure = result.pitchers.iter().filter(|p| p.endurance.is_pure_reliever()).count();
        assert_eq!(pure, 2, "both pure relievers should be seated: {:?}", chosen_pitcher_ids(&result));
        // 5*200 + 2*80 = 1160: over the soft 1000, under the 1200 ceiling.
        assert_eq!(result.total_spend, 1_160);
    }

    #[test]
    fn relaxed_ceiling_is_a_hard_stop() {
        let shape = RosterShape {
            pitchers: 7,
            batters: 0,
            min_starters: 5,
            min_relievers: 2,
            min_pure_relievers: 2,
        };
        // Same shape, but the pure relievers cost 150 each: the first lands
        // at 1150 <= 1200, the second would hit 1300 and is refused even
        // though the quota stays unmet.
        let mut pool: Vec<RankedPitcher> = (0..5)
            .map(|i| ranked_pitcher(&format!("sp{}", i), "S8", 200, 90.0 - i as f64))
            .collect();
        pool.push(ranked_pitcher("rp1", "R2", 150, 40.0));
        pool.push(ranked_pitcher("rp2", "R2", 150, 35.0));

        let result = select(&[], &pool, &make_prefs(shape, 0), &make_requirements(1_000, 0));
        let pure = result.pitchers.iter().filter(|p| p.endurance.is_pure_reliever()).count();
        assert_eq!(pure, 1);
        assert_eq!(result.total_spend, 1_150);
    }

    #[test]
    fn accepted_arm_advances_every_matching_count() {
        let shape = RosterShape {
            pitchers: 3,
            batters: 0,
            min_starters: 1,
            min_relievers: 1,
            min_pure_relievers: 0,
        };
        // The swing man satisfies both the starter and reliever quotas at
        // once; afterwards the pure reliever is not needed, does not fit
        // strictly, and must not ride the relaxation.
        let pool = vec![
            ranked_pitcher("swing", "S6R3", 60, 100.0),
            ranked_pitcher("rp", "R2", 60, 80.0),
        ];
        let result = select(&[], &pool, &make_prefs(shape, 0), &make_requirements(100, 0));
        assert_eq!(chosen_pitcher_ids(&result), vec!["swing"]);
        assert_eq!(result.total_spend, 60);
    }

    #[test]
    fn strict_budget_exhaustion_leaves_the_roster_short() {
        let shape = RosterShape {
            pitchers: 4,
            batters: 0,
            min_starters: 0,
            min_relievers: 0,
            min_pure_relievers: 0,
        };
        let pool = vec![
            ranked_pitcher("a", "S8", 70, 90.0),
            ranked_pitcher("b", "S7", 70, 85.0),
            ranked_pitcher("c", "S6", 70, 80.0),
            ranked_pitcher("d", "S5", 70, 75.0),
        ];
        // Only two arms fit 150; no quota is live, so nothing relaxes and
        // the backfill finds nothing cheaper.
        let result = select(&[], &pool, &make_prefs(shape, 0), &make_requirements(150, 0));
        assert_eq!(chosen_pitcher_ids(&result), vec!["a", "b"]);
        assert_eq!(result.total_spend, 140);
    }

    #[test]
    fn catcher_pass_runs_before_generic_spending() {
        let shape = RosterShape {
            pitchers: 0,
            batters: 6,
            min_starters: 0,
            min_relievers: 0,
            min_pure_relievers: 0,
        };
        // Without the dedicated pass the five 240s would exhaust the 1000
        // budget before either catcher is reached.
        let mut pool: Vec<RankedBatter> = (0..5)
            .map(|i| ranked_batter(&format!("of{}", i), "OF", 240, 100.0 - i as f64))
            .collect();
        pool.push(ranked_batter("c1", "C", 200, 5.0));
        pool.push(ranked_batter("c2", "C/1B", 200, 4.0));

        let result = select(&pool, &[], &make_prefs(shape, 100), &make_requirements(1_000, 2));
        let catchers = result
            .batters
            .iter()
            .filter(|b| list_covers(&b.positions, Position::Catcher))
            .count();
        assert_eq!(catchers, 2, "chosen: {:?}", chosen_batter_ids(&result));
        // 200 + 200 + 240 + 240 = 880; the third outfielder would break 1000.
        assert_eq!(result.total_spend, 880);
        assert_eq!(result.batters.len(), 4);
    }

    #[test]
    fn catcher_beyond_the_whole_budget_is_skipped() {
        let shape = RosterShape {
            pitchers: 0,
            batters: 3,
            min_starters: 0,
            min_relievers: 0,
            min_pure_relievers: 0,
        };
        let pool = vec![
            ranked_batter("gold", "C", 2_000, 50.0),
            ranked_batter("of1", "LF", 300, 40.0),
            ranked_batter("of2", "RF", 300, 30.0),
        ];
        let result = select(&pool, &[], &make_prefs(shape, 100), &make_requirements(1_000, 2));
        assert_eq!(chosen_batter_ids(&result), vec!["of1", "of2"]);
    }

    #[test]
    fn batter_selection_never_relaxes_the_budget() {
        let shape = RosterShape {
            pitchers: 0,
            batters: 2,
            min_starters: 0,
            min_relievers: 0,
            min_pure_relievers: 0,
        };
        // 600 + 500 = 1100 would fit a 20% relaxation of 1000; batters must
        // refuse it anyway.
        let pool = vec![
            ranked_batter("b1", "LF", 600, 90.0),
            ranked_batter("b2", "RF", 500, 85.0),
            ranked_batter("b3", "CF", 400, 80.0),
        ];
        let result = select(&pool, &[], &make_prefs(shape, 100), &make_requirements(1_000, 0));
        assert_eq!(chosen_batter_ids(&result), vec!["b1", "b3"]);
        assert_eq!(result.total_spend, 1_000);
    }

    #[test]
    fn batter_target_caps_the_roster() {
        let shape = RosterShape {
            pitchers: 0,
            batters: 2,
            min_starters: 0,
            min_relievers: 0,
            min_pure_relievers: 0,
        };
        let pool = vec![
            ranked_batter("b1", "LF", 10, 90.0),
            ranked_batter("b2", "RF", 10, 85.0),
            ranked_batter("b3", "CF", 10, 80.0),
        ];
        let result = select(&pool, &[], &make_prefs(shape, 100), &make_requirements(1_000, 0));
        assert_eq!(result.batters.len(), 2);
    }

    #[test]
    fn selection_validates_through_to_the_validator() {
        let shape = RosterShape {
            pitchers: 1,
            batters: 1,
            min_starters: 1,
            min_relievers: 0,
            min_pure_relievers: 0,
        };
        let batter_pool = vec![ranked_batter("b1", "C", 100, 50.0)];
        let pitcher_pool = vec![ranked_pitcher("p1", "S7", 100, 60.0)];
        let requirements = RosterRequirements {
            min_pitchers: 1,
            max_pitchers: 2,
            min_batters: 1,
            max_batters: 2,
            min_starters: 1,
            min_relievers: 0,
            min_pure_relievers: 0,
            min_catchers: 1,
            require_all_positions: false,
            salary_cap: 1_000,
        };
        let result = select(&batter_pool, &pitcher_pool, &make_prefs(shape, 50), &requirements);
        let report = result.validate(&requirements);
        assert!(report.passed, "deficits: {:?}", report.deficits);
    }
}
