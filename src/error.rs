//! Error types for rubric loading and session operations.
//!
//! Scoring itself is total over any input string; the only failures are
//! malformed rubric data (at load time) and requests that reference
//! sessions, levels or choices that do not exist.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Raised while compiling a level rubric.
#[derive(Debug, Error)]
pub enum RubricError {
    #[error("level {level_id}: invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        level_id: u32,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("level {level_id}: criterion {description:?} must award at least one point")]
    ZeroPoints { level_id: u32, description: String },
}

/// Errors surfaced to HTTP and WebSocket clients.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("unknown session: {0}")]
    UnknownSession(String),

    #[error("no level at index {0}")]
    UnknownLevel(usize),

    #[error("no choice at display index {0}")]
    UnknownChoice(usize),

    #[error("no scenario is currently loaded")]
    NoActiveScenario,

    #[error("this scenario has already been answered")]
    AlreadyAnswered,
}

impl GameError {
    pub fn status(&self) -> StatusCode {
        match self {
            GameError::UnknownSession(_) => StatusCode::NOT_FOUND,
            GameError::UnknownLevel(_) | GameError::UnknownChoice(_) => StatusCode::BAD_REQUEST,
            GameError::NoActiveScenario | GameError::AlreadyAnswered => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for GameError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(GameError::UnknownSession("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(GameError::UnknownLevel(9).status(), StatusCode::BAD_REQUEST);
        assert_eq!(GameError::AlreadyAnswered.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn messages_name_the_index() {
        assert_eq!(GameError::UnknownLevel(12).to_string(), "no level at index 12");
        assert_eq!(GameError::UnknownChoice(4).to_string(), "no choice at display index 4");
    }
}
