//! Loading game configuration (scoring constants + optional content bank) from TOML.
//!
//! See `GameConfig` for the expected schema. Example:
//!
//! ```toml
//! replace_levels = false
//!
//! [scoring]
//! short_words = 8
//! pass_score = 55
//!
//! [[levels]]
//! id = 9
//! title = "Level 9: Ask for Sources"
//! scenario = "..."
//! task = "..."
//! bad_prompt = "Tell me about volcanoes"
//! hints = ["Which volcano?", "What kind of sources?"]
//! example_good_prompt = "..."
//! scoring_criteria = [
//!   { pattern = "source|citation|reference", points = 40, description = "Asks for sources" },
//! ]
//! ```

use std::time::Duration;

use serde::Deserialize;
use tracing::{error, info, warn};

use crate::domain::{EthicsScenario, LevelRubric, RealWorldExample};
use crate::scoring::{CompiledRubric, ScoringRules};
use crate::seeds::{seed_levels, seed_real_world_examples, seed_scenarios};

#[derive(Clone, Debug, Deserialize, Default)]
pub struct GameConfig {
  #[serde(default)]
  pub scoring: ScoringRules,
  #[serde(default)]
  pub levels: Vec<LevelRubric>,
  /// When true, `levels` replaces the built-in levels instead of extending them.
  #[serde(default)]
  pub replace_levels: bool,
  #[serde(default)]
  pub scenarios: Vec<EthicsScenario>,
  #[serde(default)]
  pub replace_scenarios: bool,
  #[serde(default)]
  pub real_world_examples: Vec<RealWorldExample>,
}

/// Everything a session needs, compiled and ready.
#[derive(Clone, Debug)]
pub struct GameContent {
  pub levels: Vec<CompiledRubric>,
  pub scenarios: Vec<EthicsScenario>,
  pub real_world_examples: Vec<RealWorldExample>,
  pub rules: ScoringRules,
}

impl GameContent {
  /// Merge config (if any) with the built-in seeds. Levels whose patterns
  /// fail to compile are skipped.
  pub fn build(cfg: Option<GameConfig>) -> Self {
    let cfg = cfg.unwrap_or_default();

    let mut raw_levels = if cfg.replace_levels { Vec::new() } else { seed_levels() };
    raw_levels.extend(cfg.levels);
    let mut levels = Vec::with_capacity(raw_levels.len());
    for level in raw_levels {
      let id = level.id;
      match CompiledRubric::compile(level) {
        Ok(c) => levels.push(c),
        Err(e) => error!(target: "aiquest_backend", level_id = id, error = %e, "Skipping level with invalid rubric"),
      }
    }
    if levels.is_empty() {
      warn!(target: "aiquest_backend", "No playable levels configured; prompt mission starts completed");
    }

    let mut scenarios = if cfg.replace_scenarios { Vec::new() } else { seed_scenarios() };
    scenarios.extend(cfg.scenarios);

    let mut real_world_examples = seed_real_world_examples();
    real_world_examples.extend(cfg.real_world_examples);

    Self { levels, scenarios, real_world_examples, rules: cfg.scoring }
  }
}

pub fn parse_game_config(s: &str) -> Result<GameConfig, toml::de::Error> {
  toml::from_str::<GameConfig>(s)
}

/// Attempt to load `GameConfig` from GAME_CONFIG_PATH. On any parsing/IO error, returns None.
pub fn load_game_config_from_env() -> Option<GameConfig> {
  let path = std::env::var("GAME_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match parse_game_config(&s) {
      Ok(cfg) => {
        info!(target: "aiquest_backend", %path, levels = cfg.levels.len(), scenarios = cfg.scenarios.len(), "Loaded game config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "aiquest_backend", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "aiquest_backend", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}

/// Idle sessions older than this are swept unless `SESSION_IDLE_TTL_SECS` says otherwise.
pub const DEFAULT_SESSION_IDLE_TTL: Duration = Duration::from_secs(30 * 60);

fn parse_idle_ttl(raw: Option<&str>) -> Duration {
  match raw.map(|s| s.trim().parse::<u64>()) {
    None => DEFAULT_SESSION_IDLE_TTL,
    Some(Ok(secs)) if secs > 0 => Duration::from_secs(secs),
    Some(_) => {
      warn!(target: "aiquest_backend", value = ?raw, "Invalid SESSION_IDLE_TTL_SECS; using default");
      DEFAULT_SESSION_IDLE_TTL
    }
  }
}

/// Read the idle session TTL from `SESSION_IDLE_TTL_SECS` (whole seconds, > 0).
pub fn session_idle_ttl_from_env() -> Duration {
  parse_idle_ttl(std::env::var("SESSION_IDLE_TTL_SECS").ok().as_deref())
}

#[cfg(test)]
mod tests {
  use super::*;

  const SAMPLE: &str = r#"
[scoring]
short_words = 8
pass_score = 55

[[levels]]
id = 9
title = "Level 9: Ask for Sources"
scenario = "You are researching volcanoes."
task = "Ask for credible sources."
bad_prompt = "Tell me about volcanoes"
hints = ["Which volcano?"]
example_good_prompt = "List three sources about Mount St. Helens."
scoring_criteria = [
  { pattern = "source|citation", points = 40, description = "Asks for sources" },
  { keyword = "mount|volcano", points = 30, description = "Names a volcano" },
]

[[levels]]
id = 10
title = "Broken"
scenario = "s"
task = "t"
bad_prompt = "b"
example_good_prompt = "g"
scoring_criteria = [{ pattern = "(oops", points = 10, description = "never compiles" }]
"#;

  #[test]
  fn defaults_are_the_shipped_content() {
    let content = GameContent::build(None);
    assert_eq!(content.levels.len(), 8);
    assert_eq!(content.scenarios.len(), 5);
    assert_eq!(content.real_world_examples.len(), 3);
    assert_eq!(content.rules, ScoringRules::default());
  }

  #[test]
  fn toml_overrides_rules_and_extends_levels() {
    let cfg = parse_game_config(SAMPLE).unwrap();
    assert_eq!(cfg.scoring.short_words, 8);
    assert_eq!(cfg.scoring.pass_score, 55);
    assert_eq!(cfg.scoring.detail_bonus, 10);
    assert_eq!(cfg.levels[0].scoring_criteria[1].pattern, "mount|volcano");

    let content = GameContent::build(Some(cfg));
    // level 10 is skipped
    assert_eq!(content.levels.len(), 9);
    assert_eq!(content.levels.last().unwrap().rubric.id, 9);
  }

  #[test]
  fn replace_levels_drops_seeds() {
    let mut cfg = parse_game_config(SAMPLE).unwrap();
    cfg.replace_levels = true;
    let content = GameContent::build(Some(cfg));
    assert_eq!(content.levels.len(), 1);
  }

  #[test]
  fn malformed_toml_is_an_error() {
    assert!(parse_game_config("[scoring]\nshort_words = \"ten\"").is_err());
  }

  #[test]
  fn idle_ttl_parsing() {
    assert_eq!(parse_idle_ttl(None), DEFAULT_SESSION_IDLE_TTL);
    assert_eq!(parse_idle_ttl(Some("90")), Duration::from_secs(90));
    assert_eq!(parse_idle_ttl(Some(" 45 ")), Duration::from_secs(45));
    assert_eq!(parse_idle_ttl(Some("0")), DEFAULT_SESSION_IDLE_TTL);
    assert_eq!(parse_idle_ttl(Some("soon")), DEFAULT_SESSION_IDLE_TTL);
  }
}
