//! Prompt-engineering mission session.
//!
//! One `PromptSession` per player: it owns the shuffled level order, the
//! attempt counter and the best score. Nothing here is global, so any number
//! of sessions can run side by side.

use std::sync::Arc;

use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::domain::{EvaluationResult, ExamplePair, LevelRubric};
use crate::error::GameError;
use crate::scoring::{self, CompiledRubric, ScoringRules};
use crate::shuffle::fisher_yates;

pub const COMPLETION_MESSAGE: &str = "Congratulations! You've mastered the art of prompt engineering!";

/// 1-based position for progress bars.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct StepProgress {
  pub current: usize,
  pub total: usize,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum LevelView {
  #[serde(rename_all = "camelCase")]
  Completed {
    completed: bool,
    total_levels: usize,
    attempts: u32,
    message: String,
  },
  Level {
    level: LevelRubric,
    progress: StepProgress,
  },
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
  /// Zero-based index of the most recently loaded level.
  pub current_level: usize,
  pub total_levels: usize,
  pub attempts: u32,
  pub best_score: u32,
}

pub struct PromptSession {
  bank: Arc<Vec<CompiledRubric>>,
  rules: Arc<ScoringRules>,
  rng: StdRng,
  /// `order[i]` is the bank index of the level shown at position `i`.
  order: Vec<usize>,
  current_level: usize,
  attempts: u32,
  best_score: u32,
}

impl PromptSession {
  pub fn new(bank: Arc<Vec<CompiledRubric>>, rules: Arc<ScoringRules>, rng: StdRng) -> Self {
    let mut session = Self {
      bank,
      rules,
      rng,
      order: Vec::new(),
      current_level: 0,
      attempts: 0,
      best_score: 0,
    };
    session.init();
    session
  }

  /// Reset counters and reshuffle the level order.
  #[instrument(level = "debug", skip(self))]
  pub fn init(&mut self) {
    self.current_level = 0;
    self.attempts = 0;
    self.best_score = 0;
    self.order = (0..self.bank.len()).collect();
    fisher_yates(&mut self.order, &mut self.rng);
    debug!(target: "session", levels = self.order.len(), "Prompt mission initialized");
  }

  fn level_at(&self, index: usize) -> Result<&CompiledRubric, GameError> {
    self.order
      .get(index)
      .map(|&bank_index| &self.bank[bank_index])
      .ok_or(GameError::UnknownLevel(index))
  }

  /// Bank indices in display order.
  #[cfg(test)]
  pub fn order(&self) -> &[usize] {
    &self.order
  }

  pub fn load_level(&mut self, index: usize) -> LevelView {
    if index >= self.order.len() {
      info!(target: "session", attempts = self.attempts, "Prompt mission completed");
      return LevelView::Completed {
        completed: true,
        total_levels: self.order.len(),
        attempts: self.attempts,
        message: COMPLETION_MESSAGE.into(),
      };
    }
    self.current_level = index;
    let level = self.bank[self.order[index]].rubric.clone();
    LevelView::Level {
      level,
      progress: StepProgress { current: index + 1, total: self.order.len() },
    }
  }

  /// Score a submission for the level shown at `index`, counting the attempt.
  pub fn evaluate_prompt(&mut self, text: &str, index: usize) -> Result<EvaluationResult, GameError> {
    let result = scoring::evaluate(text, self.level_at(index)?, &self.rules);
    self.attempts += 1;
    self.best_score = self.best_score.max(result.score);
    Ok(result)
  }

  pub fn get_hint(&self, index: usize, hint_number: usize) -> Result<Option<String>, GameError> {
    let level = self.level_at(index)?;
    Ok(scoring::get_hint(&level.rubric, hint_number).map(str::to_string))
  }

  pub fn show_example(&self, index: usize) -> Result<ExamplePair, GameError> {
    Ok(scoring::show_example(&self.level_at(index)?.rubric))
  }

  pub fn get_progress(&self) -> Progress {
    Progress {
      current_level: self.current_level,
      total_levels: self.order.len(),
      attempts: self.attempts,
      best_score: self.best_score,
    }
  }
}
