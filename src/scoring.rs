//! Prompt scoring engine.
//!
//! A submission is scored by testing each criterion's pattern for presence
//! (never counting repeats), adjusting once for length, picking a summary
//! line from the unclamped total, and finally clamping to `0..=100`.
//! Evaluation never fails: every string, including the empty one, gets a
//! result.

use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::domain::{EvaluationResult, ExamplePair, LevelRubric};
use crate::error::RubricError;

pub const MSG_MASTERY: &str = "Excellent prompt! You've mastered this level!";
pub const MSG_ON_TRACK: &str = "Good prompt! You're on the right track.";
pub const MSG_DECENT: &str = "Decent start, but try adding more specifics.";
pub const MSG_NEEDS_DETAIL: &str = "Your prompt needs more detail. Check the hints!";
pub const MSG_TOO_SHORT: &str = "Your prompt is very short. Try adding more details!";
pub const MSG_GOOD_DETAIL: &str = "Great detail! You included lots of helpful information.";

const MAX_SCORE: i64 = 100;

/// Length heuristics and verdict thresholds. Defaults match the shipped game.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScoringRules {
  /// Prompts with fewer words than this are penalized.
  pub short_words: usize,
  pub short_penalty: u32,
  /// Prompts with at least this many words get the bonus.
  pub detailed_words: usize,
  pub detail_bonus: u32,
  pub pass_score: u32,
  pub mastery_score: u32,
  pub on_track_score: u32,
  pub decent_score: u32,
}

impl Default for ScoringRules {
  fn default() -> Self {
    Self {
      short_words: 10,
      short_penalty: 20,
      detailed_words: 20,
      detail_bonus: 10,
      pass_score: 60,
      mastery_score: 80,
      on_track_score: 60,
      decent_score: 40,
    }
  }
}

impl ScoringRules {
  fn summary_for(&self, raw_score: i64) -> &'static str {
    if raw_score >= i64::from(self.mastery_score) {
      MSG_MASTERY
    } else if raw_score >= i64::from(self.on_track_score) {
      MSG_ON_TRACK
    } else if raw_score >= i64::from(self.decent_score) {
      MSG_DECENT
    } else {
      MSG_NEEDS_DETAIL
    }
  }
}

/// A rubric whose criterion patterns have been compiled once at load time.
#[derive(Clone, Debug)]
pub struct CompiledRubric {
  pub rubric: LevelRubric,
  matchers: Vec<Regex>,
}

impl CompiledRubric {
  pub fn compile(rubric: LevelRubric) -> Result<Self, RubricError> {
    let mut matchers = Vec::with_capacity(rubric.scoring_criteria.len());
    for c in &rubric.scoring_criteria {
      if c.points == 0 {
        return Err(RubricError::ZeroPoints { level_id: rubric.id, description: c.description.clone() });
      }
      let re = RegexBuilder::new(&c.pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| RubricError::InvalidPattern {
          level_id: rubric.id,
          pattern: c.pattern.clone(),
          source,
        })?;
      matchers.push(re);
    }
    Ok(Self { rubric, matchers })
  }
}

/// Number of non-empty whitespace-delimited tokens.
pub fn word_count(text: &str) -> usize {
  text.split_whitespace().count()
}

/// Score `text` against `compiled`. Pure: the rubric is never mutated.
#[instrument(level = "debug", skip(text, compiled, rules), fields(level_id = compiled.rubric.id, text_len = text.len()))]
pub fn evaluate(text: &str, compiled: &CompiledRubric, rules: &ScoringRules) -> EvaluationResult {
  let lowered = text.to_lowercase();
  let mut score: i64 = 0;
  let mut matched_criteria = Vec::new();

  for (criterion, matcher) in compiled.rubric.scoring_criteria.iter().zip(&compiled.matchers) {
    if matcher.is_match(&lowered) {
      score += i64::from(criterion.points);
      matched_criteria.push(criterion.description.clone());
    }
  }

  let words = word_count(text);
  let mut feedback = Vec::with_capacity(2);
  if words < rules.short_words {
    feedback.push(MSG_TOO_SHORT.to_string());
    score = (score - i64::from(rules.short_penalty)).max(0);
  } else if words >= rules.detailed_words {
    feedback.push(MSG_GOOD_DETAIL.to_string());
    score += i64::from(rules.detail_bonus);
  }

  feedback.insert(0, rules.summary_for(score).to_string());

  let clamped = score.clamp(0, MAX_SCORE) as u32;
  let passed = clamped >= rules.pass_score;
  debug!(target: "scoring", raw = score, score = clamped, words, matched = matched_criteria.len(), passed, "Prompt evaluated");

  EvaluationResult { score: clamped, feedback, matched_criteria, word_count: words, passed }
}

/// The hint at `index`, or `None` once hints are exhausted.
pub fn get_hint(rubric: &LevelRubric, index: usize) -> Option<&str> {
  rubric.hints.get(index).map(String::as_str)
}

pub fn show_example(rubric: &LevelRubric) -> ExamplePair {
  ExamplePair { bad: rubric.bad_prompt.clone(), good: rubric.example_good_prompt.clone() }
}
