//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Each handler is instrumented and logs parameters and basic result info.

use std::sync::Arc;
use axum::{extract::{Path, Query, State}, http::StatusCode, Json, response::IntoResponse};
use tracing::{info, instrument};

use crate::error::GameError;
use crate::logic;
use crate::protocol::*;
use crate::state::AppState;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info", skip(state))]
pub async fn http_create_session(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  let session_id = state.create_session().await;
  (StatusCode::CREATED, Json(SessionOut { session_id }))
}

#[instrument(level = "info", skip(state))]
pub async fn http_reset_session(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> Result<StatusCode, GameError> {
  logic::init_session(&state, &id).await?;
  Ok(StatusCode::NO_CONTENT)
}

#[instrument(level = "info", skip(state))]
pub async fn http_delete_session(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> Result<StatusCode, GameError> {
  state.remove_session(&id).await?;
  Ok(StatusCode::NO_CONTENT)
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_level(
  State(state): State<Arc<AppState>>,
  Path((id, index)): Path<(String, usize)>,
) -> Result<impl IntoResponse, GameError> {
  let view = logic::load_level(&state, &id, index).await?;
  Ok(Json(view))
}

#[instrument(level = "info", skip(state, body), fields(level = body.level_index, text_len = body.text.len()))]
pub async fn http_post_evaluate(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
  Json(body): Json<EvaluateIn>,
) -> Result<impl IntoResponse, GameError> {
  let result = logic::evaluate_prompt(&state, &id, &body.text, body.level_index).await?;
  Ok(Json(result))
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_hint(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
  Query(q): Query<HintQuery>,
) -> Result<impl IntoResponse, GameError> {
  let text = logic::get_hint(&state, &id, q.level_index, q.hint_number).await?;
  info!(target: "session", %id, level = q.level_index, hint = q.hint_number, exhausted = text.is_none(), "HTTP hint served");
  Ok(Json(HintOut::from_hint(text)))
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_example(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
  Query(q): Query<ExampleQuery>,
) -> Result<impl IntoResponse, GameError> {
  let pair = logic::show_example(&state, &id, q.level_index).await?;
  Ok(Json(pair))
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_progress(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> Result<impl IntoResponse, GameError> {
  Ok(Json(logic::get_progress(&state, &id).await?))
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_real_world_examples(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  Json(logic::real_world_examples(&state))
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_scenario(
  State(state): State<Arc<AppState>>,
  Path((id, index)): Path<(String, usize)>,
) -> Result<impl IntoResponse, GameError> {
  Ok(Json(logic::load_scenario(&state, &id, index).await?))
}

#[instrument(level = "info", skip(state, body), fields(display_index = body.display_index))]
pub async fn http_post_choice(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
  Json(body): Json<ChoiceIn>,
) -> Result<impl IntoResponse, GameError> {
  Ok(Json(logic::select_choice(&state, &id, body.display_index).await?))
}
