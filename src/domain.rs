//! Domain models used by the backend: level rubrics, scoring criteria,
//! evaluation results, and the ethics scenarios.

use serde::{Deserialize, Serialize};

/// A single scored pattern-match rule within a rubric.
///
/// `pattern` is a case-insensitive regular expression, usually a plain
/// alternation such as `"adventure|mystery|science"`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScoringCriterion {
  #[serde(alias = "keyword")]
  pub pattern: String,
  pub points: u32,
  pub description: String,
}

/// Scoring configuration for one prompt-engineering level.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LevelRubric {
  pub id: u32,
  pub title: String,
  pub scenario: String,
  pub task: String,
  #[serde(alias = "bad_prompt")]
  pub bad_prompt: String,
  #[serde(default)]
  pub hints: Vec<String>,
  #[serde(alias = "example_good_prompt")]
  pub example_good_prompt: String,
  #[serde(alias = "scoring_criteria")]
  pub scoring_criteria: Vec<ScoringCriterion>,
}

/// Output of scoring one submission against one rubric. Never persisted.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
  /// Clamped to `0..=100`.
  pub score: u32,
  /// Summary line first, then detail lines.
  pub feedback: Vec<String>,
  /// Descriptions of matched criteria, in rubric order.
  pub matched_criteria: Vec<String>,
  pub word_count: usize,
  pub passed: bool,
}

/// The fixed bad/good prompt pair shown for a level.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ExamplePair {
  pub bad: String,
  pub good: String,
}

/// Everyday situations contrasting a vague prompt with a specific one.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RealWorldExample {
  pub context: String,
  pub bad: String,
  pub good: String,
  pub lesson: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EthicsChoice {
  pub text: String,
  pub points: u32,
  pub feedback: String,
}

/// A multiple-choice ethics question. Choice order here is the canonical
/// order; players see a shuffled order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EthicsScenario {
  pub title: String,
  pub description: String,
  pub question: String,
  pub choices: Vec<EthicsChoice>,
}
