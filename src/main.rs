// Roster planner entry point.
//
// Startup sequence:
// 1. Initialize tracing (stderr; stdout carries the report)
// 2. Parse arguments
// 3. Load settings, falling back to the built-in standard set
// 4. Load the player pool
// 5. Rank both pools under the strategy
// 6. Select a roster under the budget split and shape
// 7. Validate the selection and print the report
//
// A roster that fails validation is still a result: the report says what is
// missing, and the process exits 0. Only operational failures (bad flags,
// unreadable files, invalid settings) exit nonzero.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{info, warn};

use roster_planner::config::{self, Settings};
use roster_planner::player::pool;
use roster_planner::presets;
use roster_planner::ranking;
use roster_planner::selection::selector;

const USAGE: &str = "usage: rosterplan <players.json> \
[--settings <settings.toml>] [--weights <name>] [--strategy <name>]";

const DEFAULT_SETTINGS_PATH: &str = "config/settings.toml";

/// How many rows of each ranking board to print.
const BOARD_ROWS: usize = 10;

#[derive(Debug, PartialEq, Eq)]
struct Args {
    pool_path: PathBuf,
    settings_path: Option<PathBuf>,
    weights: Option<String>,
    strategy: Option<String>,
}

fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing (stderr; stdout carries the report)
    init_tracing()?;

    // 2. Parse arguments
    let raw: Vec<String> = std::env::args().skip(1).collect();
    if raw.iter().any(|a| a == "--help" || a == "-h") {
        println!("{USAGE}");
        println!("weight presets:   {}", presets::WEIGHT_PRESET_NAMES.join(", "));
        println!("strategy presets: {}", presets::STRATEGY_PRESET_NAMES.join(", "));
        return Ok(());
    }
    let args = parse_args(raw.into_iter()).map_err(|message| anyhow::anyhow!(message))?;

    // 3. Load settings, falling back to the built-in standard set
    let (mut settings, source) = resolve_settings(&args)?;
    if let Some(name) = &args.weights {
        settings.weights = presets::weight_preset(name).with_context(|| {
            format!(
                "unknown weight preset `{name}` (expected one of: {})",
                presets::WEIGHT_PRESET_NAMES.join(", ")
            )
        })?;
    }
    if let Some(name) = &args.strategy {
        settings.strategy = presets::strategy_preset(name).with_context(|| {
            format!(
                "unknown strategy `{name}` (expected one of: {})",
                presets::STRATEGY_PRESET_NAMES.join(", ")
            )
        })?;
    }
    // An override can push the strategy shape outside custom league rules.
    settings
        .validate()
        .context("settings rejected after preset overrides")?;
    info!(source = %source, "settings resolved");

    // 4. Load the player pool
    let pool = pool::load_pool(&args.pool_path)
        .with_context(|| format!("failed to load player pool {}", args.pool_path.display()))?;
    info!(
        batters = pool.batters.len(),
        pitchers = pool.pitchers.len(),
        "player pool loaded"
    );

    // 5. Rank both pools under the strategy
    let ranked_batters =
        ranking::rank_batters(&pool.batters, &settings.weights.batter, &settings.strategy);
    let ranked_pitchers =
        ranking::rank_pitchers(&pool.pitchers, &settings.weights.pitcher, &settings.strategy);

    let split =
        selector::split_budget(settings.rules.salary_cap, settings.strategy.batter_budget_pct);
    println!("Roster plan for {}", args.pool_path.display());
    println!("Settings: {source}");
    println!(
        "Salary cap {} (batters {} / pitchers {})",
        settings.rules.salary_cap, split.batters, split.pitchers
    );

    println!("\nTop batters:");
    for (i, entry) in ranked_batters.iter().take(BOARD_ROWS).enumerate() {
        println!(
            "{:>3}. {:<24} {:<12} salary {:>6}  score {:>8.1}",
            i + 1,
            entry.batter.name,
            entry.batter.positions,
            entry.batter.salary,
            entry.score
        );
    }
    println!("\nTop pitchers:");
    for (i, entry) in ranked_pitchers.iter().take(BOARD_ROWS).enumerate() {
        println!(
            "{:>3}. {:<24} {:<12} salary {:>6}  score {:>8.1}",
            i + 1,
            entry.pitcher.name,
            entry.pitcher.endurance.to_string(),
            entry.pitcher.salary,
            entry.score
        );
    }

    // 6. Select a roster under the budget split and shape
    let selection = selector::select(
        &ranked_batters,
        &ranked_pitchers,
        &settings.strategy,
        &settings.rules,
    );
    println!(
        "\nSelected roster: {} batters, {} pitchers, spend {} of {}",
        selection.batters.len(),
        selection.pitchers.len(),
        selection.total_spend,
        settings.rules.salary_cap
    );
    for batter in &selection.batters {
        println!("    B  {:<24} {:<12} salary {:>6}", batter.name, batter.positions, batter.salary);
    }
    for pitcher in &selection.pitchers {
        println!(
            "    P  {:<24} {:<12} salary {:>6}",
            pitcher.name,
            pitcher.endurance.to_string(),
            pitcher.salary
        );
    }

    // 7. Validate the selection and print the report
    let report = selection.validate(&settings.rules);
    if report.passed {
        println!("\nValidation: PASS ({} positions covered)", report.covered_positions.len());
    } else {
        println!("\nValidation: FAIL");
        for deficit in &report.deficits {
            println!("  - {deficit}");
        }
    }

    Ok(())
}

/// Resolve the settings source: an explicit `--settings` path must load, the
/// default path loads when present, and otherwise the built-in standard
/// settings apply.
fn resolve_settings(args: &Args) -> anyhow::Result<(Settings, String)> {
    if let Some(path) = &args.settings_path {
        let settings = config::load_settings(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?;
        return Ok((settings, format!("settings file {}", path.display())));
    }

    let default_path = Path::new(DEFAULT_SETTINGS_PATH);
    if default_path.exists() {
        let settings = config::load_settings(default_path)
            .with_context(|| format!("failed to load settings from {}", default_path.display()))?;
        return Ok((settings, format!("settings file {}", default_path.display())));
    }

    warn!(
        "no settings file at {}; using built-in standard settings",
        DEFAULT_SETTINGS_PATH
    );
    Ok((Settings::standard(), "built-in standard settings".to_string()))
}

fn parse_args<I: Iterator<Item = String>>(mut raw: I) -> Result<Args, String> {
    let mut pool_path: Option<PathBuf> = None;
    let mut settings_path: Option<PathBuf> = None;
    let mut weights: Option<String> = None;
    let mut strategy: Option<String> = None;

    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--settings" => {
                let value = raw.next().ok_or_else(|| format!("--settings needs a path\n{USAGE}"))?;
                settings_path = Some(PathBuf::from(value));
            }
            "--weights" => {
                let value = raw.next().ok_or_else(|| format!("--weights needs a name\n{USAGE}"))?;
                weights = Some(value);
            }
            "--strategy" => {
                let value =
                    raw.next().ok_or_else(|| format!("--strategy needs a name\n{USAGE}"))?;
                strategy = Some(value);
            }
            other if other.starts_with('-') => {
                return Err(format!("unknown flag {other}\n{USAGE}"));
            }
            other => {
                if pool_path.is_some() {
                    return Err(format!("unexpected argument {other}\n{USAGE}"));
                }
                pool_path = Some(PathBuf::from(other));
            }
        }
    }

    let pool_path = pool_path.ok_or_else(|| USAGE.to_string())?;
    Ok(Args { pool_path, settings_path, weights, strategy })
}

/// Initialize tracing to stderr so stdout stays clean for the report.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("roster_planner=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
