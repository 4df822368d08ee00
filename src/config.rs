// Settings loading and validation (config/settings.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::presets;
use crate::ranking::StrategyPreferences;
use crate::selection::validator::RosterRequirements;
use crate::valuation::weights::ValuationWeights;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("settings file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse settings file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// settings.toml structs
// ---------------------------------------------------------------------------

/// The full settings file: `[weights]`, `[strategy]`, and `[rules]` tables.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    pub weights: ValuationWeights,
    pub strategy: StrategyPreferences,
    pub rules: RosterRequirements,
}

impl Settings {
    /// The built-in fallback: standard weights, balanced strategy, standard
    /// league rules.
    pub fn standard() -> Self {
        Settings {
            weights: presets::standard_weights(),
            strategy: presets::balanced_strategy(),
            rules: presets::standard_requirements(),
        }
    }

    /// Reject settings the engine cannot act on sensibly: sliders and the
    /// budget split are percentages, weights must be finite numbers, and the
    /// strategy shape has to land inside the league's roster bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let b = &self.strategy.batter;
        let p = &self.strategy.pitcher;
        let sliders: &[(&str, u8)] = &[
            ("strategy.batter.speed", b.speed),
            ("strategy.batter.power", b.power),
            ("strategy.batter.defense", b.defense),
            ("strategy.batter.on_base", b.on_base),
            ("strategy.pitcher.starter", p.starter),
            ("strategy.pitcher.reliever", p.reliever),
            ("strategy.pitcher.closer", p.closer),
            ("strategy.pitcher.strikeout", p.strikeout),
        ];
        for (name, val) in sliders {
            if *val > 100 {
                return Err(ConfigError::ValidationError {
                    field: name.to_string(),
                    message: format!("must be between 0 and 100, got {val}"),
                });
            }
        }

        if self.strategy.batter_budget_pct > 100 {
            return Err(ConfigError::ValidationError {
                field: "strategy.batter_budget_pct".into(),
                message: format!(
                    "must be between 0 and 100, got {}",
                    self.strategy.batter_budget_pct
                ),
            });
        }

        let bw = &self.weights.batter;
        let pw = &self.weights.pitcher;
        let weight_fields: &[(&str, f64)] = &[
            ("weights.batter.single", bw.single),
            ("weights.batter.double", bw.double),
            ("weights.batter.triple", bw.triple),
            ("weights.batter.home_run", bw.home_run),
            ("weights.batter.walk", bw.walk),
            ("weights.batter.hit_by_pitch", bw.hit_by_pitch),
            ("weights.batter.stolen_base", bw.stolen_base),
            ("weights.batter.caught_stealing", bw.caught_stealing),
            ("weights.batter.out", bw.out),
            ("weights.batter.platoon_vs_right", bw.platoon_vs_right),
            ("weights.batter.platoon_vs_left", bw.platoon_vs_left),
            ("weights.batter.range_bonus", bw.range_bonus),
            ("weights.batter.error_penalty", bw.error_penalty),
            ("weights.pitcher.strikeout", pw.strikeout),
            ("weights.pitcher.walk_allowed", pw.walk_allowed),
            ("weights.pitcher.hit_allowed", pw.hit_allowed),
            ("weights.pitcher.home_run_allowed", pw.home_run_allowed),
            ("weights.pitcher.earned_run", pw.earned_run),
        ];
        for (name, val) in weight_fields {
            if !val.is_finite() {
                return Err(ConfigError::ValidationError {
                    field: name.to_string(),
                    message: format!("must be a finite number, got {val}"),
                });
            }
        }

        let rules = &self.rules;
        if rules.salary_cap == 0 {
            return Err(ConfigError::ValidationError {
                field: "rules.salary_cap".into(),
                message: "must be greater than 0".into(),
            });
        }
        if rules.min_pitchers > rules.max_pitchers {
            return Err(ConfigError::ValidationError {
                field: "rules.min_pitchers".into(),
                message: format!(
                    "must not exceed max_pitchers ({} > {})",
                    rules.min_pitchers, rules.max_pitchers
                ),
            });
        }
        if rules.min_batters > rules.max_batters {
            return Err(ConfigError::ValidationError {
                field: "rules.min_batters".into(),
                message: format!(
                    "must not exceed max_batters ({} > {})",
                    rules.min_batters, rules.max_batters
                ),
            });
        }

        let shape = &self.strategy.shape;
        if shape.pitchers < rules.min_pitchers || shape.pitchers > rules.max_pitchers {
            return Err(ConfigError::ValidationError {
                field: "strategy.shape.pitchers".into(),
                message: format!(
                    "target {} outside the league bounds {}..={}",
                    shape.pitchers, rules.min_pitchers, rules.max_pitchers
                ),
            });
        }
        if shape.batters < rules.min_batters || shape.batters > rules.max_batters {
            return Err(ConfigError::ValidationError {
                field: "strategy.shape.batters".into(),
                message: format!(
                    "target {} outside the league bounds {}..={}",
                    shape.batters, rules.min_batters, rules.max_batters
                ),
            });
        }
        if shape.min_starters + shape.min_pure_relievers > shape.pitchers {
            return Err(ConfigError::ValidationError {
                field: "strategy.shape".into(),
                message: format!(
                    "starter and pure-reliever minimums ({} + {}) exceed the pitcher target {}",
                    shape.min_starters, shape.min_pure_relievers, shape.pitchers
                ),
            });
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate a settings file.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let text = read_file(path)?;
    let settings: Settings = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;
    settings.validate()?;
    info!(path = %path.display(), "settings loaded");
    Ok(settings)
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
