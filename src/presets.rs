// Built-in presets: weight schemes, strategy preferences, and the standard
// league requirements. These are the values the binary falls back to when no
// settings file is given, and the vocabulary behind the --weights and
// --strategy flags.

use crate::ranking::{BatterSliders, PitcherSliders, RosterShape, StrategyPreferences};
use crate::selection::validator::RosterRequirements;
use crate::valuation::weights::{BatterWeights, PitcherWeights, ValuationWeights};

/// Weight scheme names accepted by `weight_preset`.
pub const WEIGHT_PRESET_NAMES: &[&str] = &["standard", "patient"];

/// Strategy names accepted by `strategy_preset`.
pub const STRATEGY_PRESET_NAMES: &[&str] =
    &["balanced", "power", "speed", "rotation", "bullpen"];

// ---------------------------------------------------------------------------
// Weight schemes
// ---------------------------------------------------------------------------

/// The default scheme: linear-weights-flavored event values.
pub fn standard_weights() -> ValuationWeights {
    ValuationWeights {
        batter: BatterWeights {
            single: 1.0,
            double: 2.0,
            triple: 3.0,
            home_run: 4.0,
            walk: 1.0,
            hit_by_pitch: 1.0,
            stolen_base: 2.0,
            caught_stealing: -1.0,
            out: -0.5,
            platoon_vs_right: 2.0,
            platoon_vs_left: 2.0,
            range_bonus: 5.0,
            error_penalty: -0.5,
        },
        pitcher: PitcherWeights {
            strikeout: 1.0,
            walk_allowed: -0.5,
            hit_allowed: -0.5,
            home_run_allowed: -1.5,
            earned_run: -1.0,
        },
    }
}

/// A patience-leaning scheme: free passes count more on both sides of the
/// ball, outs cost more.
pub fn patient_weights() -> ValuationWeights {
    let mut weights = standard_weights();
    weights.batter.walk = 1.5;
    weights.batter.hit_by_pitch = 1.5;
    weights.batter.out = -0.75;
    weights.batter.caught_stealing = -1.5;
    weights.pitcher.walk_allowed = -0.75;
    weights
}

/// Look up a weight scheme by name, case-insensitively.
pub fn weight_preset(name: &str) -> Option<ValuationWeights> {
    match name.to_ascii_lowercase().as_str() {
        "standard" => Some(standard_weights()),
        "patient" => Some(patient_weights()),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn balanced_shape() -> RosterShape {
    RosterShape {
        pitchers: 10,
        batters: 14,
        min_starters: 5,
        min_relievers: 4,
        min_pure_relievers: 2,
    }
}

/// Even sliders, even shape. The default strategy.
pub fn balanced_strategy() -> StrategyPreferences {
    StrategyPreferences {
        batter: BatterSliders { speed: 50, power: 50, defense: 50, on_base: 50 },
        pitcher: PitcherSliders { starter: 50, reliever: 50, closer: 50, strikeout: 50 },
        batter_budget_pct: 60,
        shape: balanced_shape(),
    }
}

/// Chase extra-base damage; spend a little more of the cap on bats.
pub fn power_strategy() -> StrategyPreferences {
    StrategyPreferences {
        batter: BatterSliders { speed: 30, power: 85, defense: 35, on_base: 60 },
        pitcher: PitcherSliders { starter: 50, reliever: 50, closer: 50, strikeout: 50 },
        batter_budget_pct: 65,
        shape: balanced_shape(),
    }
}

/// Chase steals and range.
pub fn speed_strategy() -> StrategyPreferences {
    StrategyPreferences {
        batter: BatterSliders { speed: 85, power: 30, defense: 55, on_base: 60 },
        pitcher: PitcherSliders { starter: 50, reliever: 50, closer: 50, strikeout: 50 },
        batter_budget_pct: 60,
        shape: balanced_shape(),
    }
}

/// Build around the rotation: deeper starter quota, more pitcher budget.
pub fn rotation_strategy() -> StrategyPreferences {
    StrategyPreferences {
        batter: BatterSliders { speed: 50, power: 50, defense: 50, on_base: 50 },
        pitcher: PitcherSliders { starter: 85, reliever: 30, closer: 25, strikeout: 70 },
        batter_budget_pct: 50,
        shape: RosterShape {
            pitchers: 11,
            batters: 13,
            min_starters: 6,
            min_relievers: 3,
            min_pure_relievers: 2,
        },
    }
}

/// Build around the pen: deeper reliever quotas, closer emphasis.
pub fn bullpen_strategy() -> StrategyPreferences {
    StrategyPreferences {
        batter: BatterSliders { speed: 50, power: 50, defense: 50, on_base: 50 },
        pitcher: PitcherSliders { starter: 30, reliever: 80, closer: 75, strikeout: 55 },
        batter_budget_pct: 55,
        shape: RosterShape {
            pitchers: 11,
            batters: 13,
            min_starters: 4,
            min_relievers: 6,
            min_pure_relievers: 3,
        },
    }
}

/// Look up a strategy by name, case-insensitively.
pub fn strategy_preset(name: &str) -> Option<StrategyPreferences> {
    match name.to_ascii_lowercase().as_str() {
        "balanced" => Some(balanced_strategy()),
        "power" => Some(power_strategy()),
        "speed" => Some(speed_strategy()),
        "rotation" => Some(rotation_strategy()),
        "bullpen" => Some(bullpen_strategy()),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// League rules
// ---------------------------------------------------------------------------

/// The standard league's roster requirements.
pub fn standard_requirements() -> RosterRequirements {
    RosterRequirements {
        min_pitchers: 8,
        max_pitchers: 12,
        min_batters: 12,
        max_batters: 16,
        min_starters: 4,
        min_relievers: 3,
        min_pure_relievers: 2,
        min_catchers: 2,
        require_all_positions: true,
        salary_cap: 26_000,
    }
}
