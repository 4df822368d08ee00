// Pitcher valuation: linear event weights over the allowed-event stat line.

use serde::Serialize;

use crate::player::record::Pitcher;
use crate::valuation::weights::PitcherWeights;

/// A pitcher's computed value and rate metrics.
///
/// Same undefined-metric convention as batters: `None` means the denominator
/// was zero and the metric is treated as minimal by every consumer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PitcherValue {
    pub total: f64,
    /// Value per inning pitched; `None` when innings is zero.
    pub per_inning: Option<f64>,
    /// Value per start; `None` when the pitcher has no starts.
    pub per_start: Option<f64>,
    /// Value per unit of salary; `None` when salary is zero.
    pub per_salary: Option<f64>,
}

/// Compute a pitcher's value and rate metrics.
///
/// Value is the weighted sum of strikeouts, walks allowed, hits allowed,
/// home runs allowed, and earned runs; coefficients other than strikeout are
/// normally negative. Pure and deterministic; never fails on any stat line.
pub fn value_pitcher(pitcher: &Pitcher, weights: &PitcherWeights) -> PitcherValue {
    let total = pitcher.strikeouts as f64 * weights.strikeout
        + pitcher.walks_allowed as f64 * weights.walk_allowed
        + pitcher.hits_allowed as f64 * weights.hit_allowed
        + pitcher.home_runs_allowed as f64 * weights.home_run_allowed
        + pitcher.earned_runs as f64 * weights.earned_run;

    let per_inning = if pitcher.innings > 0.0 {
        Some(total / pitcher.innings)
    } else {
        None
    };
    let per_start = if pitcher.games_started > 0 {
        Some(total / pitcher.games_started as f64)
    } else {
        None
    };
    let per_salary = if pitcher.salary > 0 {
        Some(total / pitcher.salary as f64)
    } else {
        None
    };

    PitcherValue { total, per_inning, per_start, per_salary }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::codes::PitchingRoles;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    fn test_weights() -> PitcherWeights {
        PitcherWeights {
            strikeout: 1.0,
            walk_allowed: -0.5,
            hit_allowed: -0.5,
            home_run_allowed: -1.5,
            earned_run: -1.0,
        }
    }

    fn make_pitcher(innings: f64, games_started: u32, salary: u32) -> Pitcher {
        Pitcher {
            id: "p1".to_string(),
            name: "Test Pitcher".to_string(),
            season: "2025".to_string(),
            salary,
            games: 32,
            games_started,
            innings,
            strikeouts: 200,
            walks_allowed: 50,
            hits_allowed: 150,
            home_runs_allowed: 20,
            earned_runs: 60,
            endurance: PitchingRoles::parse("S8"),
        }
    }

    #[test]
    fn pitcher_value_is_the_weighted_sum() {
        // 200*1 + 50*(-0.5) + 150*(-0.5) + 20*(-1.5) + 60*(-1.0)
        //   = 200 - 25 - 75 - 30 - 60 = 10
        let pitcher = make_pitcher(200.0, 32, 1000);
        let value = value_pitcher(&pitcher, &test_weights());
        assert!(approx_eq(value.total, 10.0, 1e-9), "Expected 10.0, got {}", value.total);
    }

    #[test]
    fn rate_metrics_divide_by_usage() {
        let pitcher = make_pitcher(200.0, 32, 1000);
        let value = value_pitcher(&pitcher, &test_weights());

        let per_inning = value.per_inning.expect("innings > 0 should define the rate");
        assert!(approx_eq(per_inning, 0.05, 1e-9), "Expected 0.05, got {}", per_inning);

        let per_start = value.per_start.expect("starts > 0 should define the rate");
        assert!(approx_eq(per_start, 0.3125, 1e-9), "Expected 0.3125, got {}", per_start);

        let per_salary = value.per_salary.expect("salary > 0 should define the rate");
        assert!(approx_eq(per_salary, 0.01, 1e-9), "Expected 0.01, got {}", per_salary);
    }

    #[test]
    fn zero_innings_leaves_rates_undefined() {
        let pitcher = make_pitcher(0.0, 0, 1000);
        let value = value_pitcher(&pitcher, &test_weights());
        assert!(value.per_inning.is_none());
        assert!(value.per_start.is_none());
        assert!(value.total.is_finite());
    }

    #[test]
    fn reliever_without_starts_has_no_per_start_rate() {
        let pitcher = make_pitcher(70.0, 0, 500);
        let value = value_pitcher(&pitcher, &test_weights());
        assert!(value.per_start.is_none());
        assert!(value.per_inning.is_some());
    }

    #[test]
    fn zero_salary_leaves_per_salary_undefined() {
        let pitcher = make_pitcher(200.0, 32, 0);
        let value = value_pitcher(&pitcher, &test_weights());
        assert!(value.per_salary.is_none());
    }

    #[test]
    fn bad_pitcher_values_negative() {
        let mut pitcher = make_pitcher(120.0, 24, 800);
        pitcher.strikeouts = 60;
        pitcher.walks_allowed = 70;
        pitcher.hits_allowed = 160;
        pitcher.home_runs_allowed = 25;
        pitcher.earned_runs = 80;
        // 60 - 35 - 80 - 37.5 - 80 = -172.5
        let value = value_pitcher(&pitcher, &test_weights());
        assert!(
            approx_eq(value.total, -172.5, 1e-9),
            "Expected -172.5, got {}",
            value.total
        );
    }
}
