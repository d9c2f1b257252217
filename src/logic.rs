//! Core behaviors shared by both HTTP and WebSocket handlers.
//!
//! Each function looks up the caller's session and runs one synchronous
//! game operation against it. Submitted prompt text is never logged, only
//! its length.

use tracing::{info, instrument};

use crate::domain::{EvaluationResult, ExamplePair, RealWorldExample};
use crate::error::GameError;
use crate::ethics::{ChoiceOutcome, ScenarioView};
use crate::session::{LevelView, Progress};
use crate::state::AppState;

#[instrument(level = "info", skip(state), fields(%session_id))]
pub async fn init_session(state: &AppState, session_id: &str) -> Result<(), GameError> {
  state.with_session(session_id, |s| s.init()).await
}

#[instrument(level = "info", skip(state), fields(%session_id))]
pub async fn load_level(state: &AppState, session_id: &str, index: usize) -> Result<LevelView, GameError> {
  state.with_session(session_id, |s| s.prompt.load_level(index)).await
}

#[instrument(level = "info", skip(state, text), fields(%session_id, text_len = text.len()))]
pub async fn evaluate_prompt(
  state: &AppState,
  session_id: &str,
  text: &str,
  index: usize,
) -> Result<EvaluationResult, GameError> {
  let result = state.with_session(session_id, |s| s.prompt.evaluate_prompt(text, index)).await??;
  info!(target: "scoring", %session_id, level = index, score = result.score, passed = result.passed, words = result.word_count, "Prompt scored");
  Ok(result)
}

#[instrument(level = "info", skip(state), fields(%session_id))]
pub async fn get_hint(
  state: &AppState,
  session_id: &str,
  index: usize,
  hint_number: usize,
) -> Result<Option<String>, GameError> {
  state.with_session(session_id, |s| s.prompt.get_hint(index, hint_number)).await?
}

#[instrument(level = "info", skip(state), fields(%session_id))]
pub async fn show_example(state: &AppState, session_id: &str, index: usize) -> Result<ExamplePair, GameError> {
  state.with_session(session_id, |s| s.prompt.show_example(index)).await?
}

#[instrument(level = "info", skip(state), fields(%session_id))]
pub async fn get_progress(state: &AppState, session_id: &str) -> Result<Progress, GameError> {
  state.with_session(session_id, |s| s.prompt.get_progress()).await
}

pub fn real_world_examples(state: &AppState) -> Vec<RealWorldExample> {
  state.real_world_examples.as_ref().clone()
}

#[instrument(level = "info", skip(state), fields(%session_id))]
pub async fn load_scenario(state: &AppState, session_id: &str, index: usize) -> Result<ScenarioView, GameError> {
  state.with_session(session_id, |s| s.ethics.load_scenario(index)).await
}

#[instrument(level = "info", skip(state), fields(%session_id))]
pub async fn select_choice(
  state: &AppState,
  session_id: &str,
  display_index: usize,
) -> Result<ChoiceOutcome, GameError> {
  let outcome = state.with_session(session_id, |s| s.ethics.select_choice(display_index)).await??;
  info!(target: "session", %session_id, scenario = outcome.scenario_index, choice = outcome.original_index, points = outcome.points, "Ethics choice resolved");
  Ok(outcome)
}
