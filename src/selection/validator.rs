// Feasibility validator: re-checks a roster against the hard requirements.
//
// The validator recomputes every count from scratch on each call and never
// trusts selector bookkeeping, so it is equally correct for selector output
// and for rosters a caller has edited by hand. It is the single source of
// truth for "is this roster legal"; the selector never raises on an
// infeasible pool, it builds what it can and this report says what is
// missing.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::player::position::{parse_position_list, Position, REQUIRED_POSITIONS};
use crate::player::record::{Batter, Pitcher};

// ---------------------------------------------------------------------------
// Requirements
// ---------------------------------------------------------------------------

/// Hard roster constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterRequirements {
    pub min_pitchers: usize,
    pub max_pitchers: usize,
    pub min_batters: usize,
    pub max_batters: usize,
    /// Minimum pitchers who can start.
    pub min_starters: usize,
    /// Minimum pitchers who can relieve.
    pub min_relievers: usize,
    /// Minimum pitchers who can relieve but cannot start.
    pub min_pure_relievers: usize,
    pub min_catchers: usize,
    /// Require at least one batter at each of the nine lineup positions.
    pub require_all_positions: bool,
    /// Total salary cap, smallest currency unit.
    pub salary_cap: u32,
}

// ---------------------------------------------------------------------------
// Deficits
// ---------------------------------------------------------------------------

/// One failed bound or quota, with the amounts needed to fix it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Deficit {
    TooFewPitchers { required: usize, actual: usize },
    TooManyPitchers { limit: usize, actual: usize },
    TooFewStarters { required: usize, actual: usize },
    TooFewRelievers { required: usize, actual: usize },
    TooFewPureRelievers { required: usize, actual: usize },
    TooFewBatters { required: usize, actual: usize },
    TooManyBatters { limit: usize, actual: usize },
    TooFewCatchers { required: usize, actual: usize },
    MissingPositions { missing: Vec<Position> },
    OverCap { cap: u32, spent: u64 },
}

impl fmt::Display for Deficit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Deficit::TooFewPitchers { required, actual } => {
                write!(f, "need {} more pitchers (have {}, need {})", required - actual, actual, required)
            }
            Deficit::TooManyPitchers { limit, actual } => {
                write!(f, "{} pitchers exceeds the maximum of {}", actual, limit)
            }
            Deficit::TooFewStarters { required, actual } => {
                write!(f, "need {} more starters (have {}, need {})", required - actual, actual, required)
            }
            Deficit::TooFewRelievers { required, actual } => {
                write!(f, "need {} more relievers (have {}, need {})", required - actual, actual, required)
            }
            Deficit::TooFewPureRelievers { required, actual } => {
                write!(
                    f,
                    "need {} more pure relievers (have {}, need {})",
                    required - actual,
                    actual,
                    required
                )
            }
            Deficit::TooFewBatters { required, actual } => {
                write!(f, "need {} more batters (have {}, need {})", required - actual, actual, required)
            }
            Deficit::TooManyBatters { limit, actual } => {
                write!(f, "{} batters exceeds the maximum of {}", actual, limit)
            }
            Deficit::TooFewCatchers { required, actual } => {
                write!(f, "need {} more catchers (have {}, need {})", required - actual, actual, required)
            }
            Deficit::MissingPositions { missing } => {
                let tokens: Vec<&str> = missing.iter().map(|p| p.display_str()).collect();
                write!(f, "no batter covers: {}", tokens.join(", "))
            }
            Deficit::OverCap { cap, spent } => {
                write!(f, "total salary {} exceeds the cap {}", spent, cap)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// The validator's verdict on a roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterReport {
    /// True only when every bound and quota holds and salary fits the cap.
    pub passed: bool,
    /// Required positions covered by at least one batter, canonical order.
    pub covered_positions: Vec<Position>,
    /// Required positions no batter covers, canonical order.
    pub missing_positions: Vec<Position>,
    pub deficits: Vec<Deficit>,
}

/// Validate a roster against the requirements.
///
/// Checks, in a fixed order: pitcher count bounds, the three role quotas,
/// batter count bounds, the catcher minimum, position coverage (when
/// required), and the salary cap (inclusive: spending exactly the cap
/// passes). Coverage sets are reported whether or not the coverage flag is
/// on, so display layers can always show them.
pub fn validate(
    batters: &[Batter],
    pitchers: &[Pitcher],
    requirements: &RosterRequirements,
) -> RosterReport {
    let mut deficits: Vec<Deficit> = Vec::new();

    let pitcher_count = pitchers.len();
    if pitcher_count < requirements.min_pitchers {
        deficits.push(Deficit::TooFewPitchers {
            required: requirements.min_pitchers,
            actual: pitcher_count,
        });
    }
    if pitcher_count > requirements.max_pitchers {
        deficits.push(Deficit::TooManyPitchers {
            limit: requirements.max_pitchers,
            actual: pitcher_count,
        });
    }

    let starters = pitchers.iter().filter(|p| p.endurance.can_start).count();
    if starters < requirements.min_starters {
        deficits.push(Deficit::TooFewStarters {
            required: requirements.min_starters,
            actual: starters,
        });
    }
    let relievers = pitchers.iter().filter(|p| p.endurance.can_relieve).count();
    if relievers < requirements.min_relievers {
        deficits.push(Deficit::TooFewRelievers {
            required: requirements.min_relievers,
            actual: relievers,
        });
    }
    let pure_relievers = pitchers.iter().filter(|p| p.endurance.is_pure_reliever()).count();
    if pure_relievers < requirements.min_pure_relievers {
        deficits.push(Deficit::TooFewPureRelievers {
            required: requirements.min_pure_relievers,
            actual: pure_relievers,
        });
    }

    let batter_count = batters.len();
    if batter_count < requirements.min_batters {
        deficits.push(Deficit::TooFewBatters {
            required: requirements.min_batters,
            actual: batter_count,
        });
    }
    if batter_count > requirements.max_batters {
        deficits.push(Deficit::TooManyBatters {
            limit: requirements.max_batters,
            actual: batter_count,
        });
    }

    let catchers = batters
        .iter()
        .filter(|b| parse_position_list(&b.positions).contains(&Position::Catcher))
        .count();
    if catchers < requirements.min_catchers {
        deficits.push(Deficit::TooFewCatchers {
            required: requirements.min_catchers,
            actual: catchers,
        });
    }

    let mut covered_set: HashSet<Position> = HashSet::new();
    for batter in batters {
        covered_set.extend(parse_position_list(&batter.positions));
    }
    let covered_positions: Vec<Position> = REQUIRED_POSITIONS
        .iter()
        .copied()
        .filter(|p| covered_set.contains(p))
        .collect();
    let missing_positions: Vec<Position> = REQUIRED_POSITIONS
        .iter()
        .copied()
        .filter(|p| !covered_set.contains(p))
        .collect();
    if requirements.require_all_positions && !missing_positions.is_empty() {
        deficits.push(Deficit::MissingPositions { missing: missing_positions.clone() });
    }

    let spent: u64 = batters.iter().map(|b| b.salary as u64).sum::<u64>()
        + pitchers.iter().map(|p| p.salary as u64).sum::<u64>();
    if spent > requirements.salary_cap as u64 {
        deficits.push(Deficit::OverCap { cap: requirements.salary_cap, spent });
    }

    RosterReport {
        passed: deficits.is_empty(),
        covered_positions,
        missing_positions,
        deficits,
    }
}
