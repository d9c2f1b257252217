//! WebSocket upgrade + message loop. Each connection gets its own game
//! session, created on connect and dropped on disconnect. Client messages are
//! parsed as JSON and forwarded to core logic; we reply with a single JSON
//! message per request.

use std::sync::Arc;
use axum::{
  extract::{
    ws::{Message, WebSocket},
    State, WebSocketUpgrade,
  },
  response::IntoResponse,
};
use tracing::{info, error, instrument, debug};

use crate::error::GameError;
use crate::logic;
use crate::protocol::{ClientWsMessage, HintOut, ServerWsMessage};
use crate::state::AppState;

#[instrument(level = "info", skip(state))]
pub async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
  info!(target: "aiquest_backend", "WebSocket upgrade requested");
  ws.on_upgrade(move |socket| handle_ws(socket, state))
}

#[instrument(level = "info", skip(socket, state))]
async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
  let session_id = state.create_connected_session().await;
  info!(target: "aiquest_backend", %session_id, "WebSocket connected");

  let hello = ServerWsMessage::Session { session_id: session_id.clone() };
  if send_json(&mut socket, &hello).await.is_err() {
    let _ = state.remove_session(&session_id).await;
    return;
  }

  while let Some(Ok(msg)) = socket.recv().await {
    match msg {
      Message::Text(txt) => {
        // Parse, dispatch, serialize response.
        let reply_msg = match serde_json::from_str::<ClientWsMessage>(&txt) {
          Ok(incoming) => {
            debug!(target: "aiquest_backend", %session_id, "WS received: {:?}", message_kind(&incoming));
            handle_client_ws(incoming, &state, &session_id).await
          }
          Err(e) => ServerWsMessage::Error { message: format!("Invalid JSON: {}", e) },
        };

        if send_json(&mut socket, &reply_msg).await.is_err() {
          break;
        }
      }
      Message::Ping(payload) => { let _ = socket.send(Message::Pong(payload)).await; }
      Message::Close(_) => break,
      _ => {}
    }
  }

  let _ = state.remove_session(&session_id).await;
  info!(target: "aiquest_backend", %session_id, "WebSocket disconnected");
}

async fn send_json(socket: &mut WebSocket, msg: &ServerWsMessage) -> Result<(), axum::Error> {
  let out = serde_json::to_string(msg).unwrap_or_else(|e| {
    serde_json::json!({ "type": "error", "message": format!("Serialization error: {}", e) }).to_string()
  });
  socket.send(Message::Text(out)).await.map_err(|e| {
    error!(target: "aiquest_backend", error = %e, "WS send error");
    e
  })
}

/// Message name without payload, so prompt text stays out of the logs.
fn message_kind(msg: &ClientWsMessage) -> &'static str {
  match msg {
    ClientWsMessage::Ping => "ping",
    ClientWsMessage::Init => "init",
    ClientWsMessage::LoadLevel { .. } => "load_level",
    ClientWsMessage::EvaluatePrompt { .. } => "evaluate_prompt",
    ClientWsMessage::GetHint { .. } => "get_hint",
    ClientWsMessage::ShowExample { .. } => "show_example",
    ClientWsMessage::GetProgress => "get_progress",
    ClientWsMessage::RealWorldExamples => "real_world_examples",
    ClientWsMessage::LoadScenario { .. } => "load_scenario",
    ClientWsMessage::SelectChoice { .. } => "select_choice",
  }
}

fn or_error<T>(res: Result<T, GameError>, ok: impl FnOnce(T) -> ServerWsMessage) -> ServerWsMessage {
  match res {
    Ok(v) => ok(v),
    Err(e) => ServerWsMessage::Error { message: e.to_string() },
  }
}

#[instrument(level = "info", skip(state, msg))]
pub(crate) async fn handle_client_ws(msg: ClientWsMessage, state: &AppState, session_id: &str) -> ServerWsMessage {
  match msg {
    ClientWsMessage::Ping => ServerWsMessage::Pong,

    ClientWsMessage::Init => or_error(logic::init_session(state, session_id).await, |_| {
      ServerWsMessage::Session { session_id: session_id.to_string() }
    }),

    ClientWsMessage::LoadLevel { level_index } => {
      or_error(logic::load_level(state, session_id, level_index).await, |view| ServerWsMessage::Level { view })
    }

    ClientWsMessage::EvaluatePrompt { text, level_index } => or_error(
      logic::evaluate_prompt(state, session_id, &text, level_index).await,
      |result| ServerWsMessage::Evaluation { result },
    ),

    ClientWsMessage::GetHint { level_index, hint_number } => or_error(
      logic::get_hint(state, session_id, level_index, hint_number).await,
      |text| ServerWsMessage::Hint { hint: HintOut::from_hint(text) },
    ),

    ClientWsMessage::ShowExample { level_index } => or_error(
      logic::show_example(state, session_id, level_index).await,
      |example| ServerWsMessage::Example { example },
    ),

    ClientWsMessage::GetProgress => {
      or_error(logic::get_progress(state, session_id).await, |progress| ServerWsMessage::Progress { progress })
    }

    ClientWsMessage::RealWorldExamples => ServerWsMessage::RealWorldExamples { examples: logic::real_world_examples(state) },

    ClientWsMessage::LoadScenario { scenario_index } => or_error(
      logic::load_scenario(state, session_id, scenario_index).await,
      |view| ServerWsMessage::Scenario { view },
    ),

    ClientWsMessage::SelectChoice { display_index } => or_error(
      logic::select_choice(state, session_id, display_index).await,
      |outcome| ServerWsMessage::ChoiceResult { outcome },
    ),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::GameContent;

  #[tokio::test]
  async fn dispatch_over_a_session() {
    let state = AppState::from_content(GameContent::build(None));
    let id = state.create_session().await;

    let reply = handle_client_ws(ClientWsMessage::LoadLevel { level_index: 0 }, &state, &id).await;
    assert!(matches!(reply, ServerWsMessage::Level { .. }));

    let reply = handle_client_ws(
      ClientWsMessage::EvaluatePrompt { text: "cat".into(), level_index: 0 },
      &state,
      &id,
    )
    .await;
    match reply {
      ServerWsMessage::Evaluation { result } => assert_eq!(result.word_count, 1),
      other => panic!("unexpected reply {other:?}"),
    }

    let reply = handle_client_ws(ClientWsMessage::GetProgress, &state, &id).await;
    match reply {
      ServerWsMessage::Progress { progress } => assert_eq!(progress.attempts, 1),
      other => panic!("unexpected reply {other:?}"),
    }
  }

  #[tokio::test]
  async fn errors_become_error_messages() {
    let state = AppState::from_content(GameContent::build(None));
    let reply = handle_client_ws(ClientWsMessage::GetProgress, &state, "nope").await;
    match reply {
      ServerWsMessage::Error { message } => assert_eq!(message, "unknown session: nope"),
      other => panic!("unexpected reply {other:?}"),
    }

    let id = state.create_session().await;
    let reply = handle_client_ws(ClientWsMessage::SelectChoice { display_index: 0 }, &state, &id).await;
    assert!(matches!(reply, ServerWsMessage::Error { .. }));
  }
}
