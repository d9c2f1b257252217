//! Public protocol structs for WebSocket and HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::domain::{EvaluationResult, ExamplePair, RealWorldExample};
use crate::ethics::{ChoiceOutcome, ScenarioView};
use crate::session::{LevelView, Progress};

pub const HINTS_EXHAUSTED: &str = "No more hints for this level. Try the example instead!";

/// Messages the client can send over WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientWsMessage {
    Ping,
    Init,
    LoadLevel {
        #[serde(rename = "levelIndex")]
        level_index: usize,
    },
    EvaluatePrompt {
        text: String,
        #[serde(rename = "levelIndex")]
        level_index: usize,
    },
    GetHint {
        #[serde(rename = "levelIndex")]
        level_index: usize,
        #[serde(rename = "hintNumber")]
        hint_number: usize,
    },
    ShowExample {
        #[serde(rename = "levelIndex")]
        level_index: usize,
    },
    GetProgress,
    RealWorldExamples,
    LoadScenario {
        #[serde(rename = "scenarioIndex")]
        scenario_index: usize,
    },
    SelectChoice {
        #[serde(rename = "displayIndex")]
        display_index: usize,
    },
}

/// Messages the server sends back over WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerWsMessage {
    Pong,
    Session {
        #[serde(rename = "sessionId")]
        session_id: String,
    },
    Level {
        view: LevelView,
    },
    Evaluation {
        result: EvaluationResult,
    },
    Hint {
        #[serde(flatten)]
        hint: HintOut,
    },
    Example {
        example: ExamplePair,
    },
    Progress {
        progress: Progress,
    },
    RealWorldExamples {
        examples: Vec<RealWorldExample>,
    },
    Scenario {
        view: ScenarioView,
    },
    ChoiceResult {
        outcome: ChoiceOutcome,
    },
    Error {
        message: String,
    },
}

//
// HTTP request/response DTOs
//

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionOut {
    #[serde(rename = "sessionId")]
    pub session_id: String,
}

#[derive(Debug, Deserialize)]
pub struct EvaluateIn {
    pub text: String,
    #[serde(rename = "levelIndex")]
    pub level_index: usize,
}

#[derive(Debug, Deserialize)]
pub struct HintQuery {
    #[serde(rename = "levelIndex")]
    pub level_index: usize,
    #[serde(rename = "hintNumber")]
    pub hint_number: usize,
}

/// `text` is `None` once hints run out; `message` is what to show instead.
#[derive(Debug, Serialize)]
pub struct HintOut {
    pub text: Option<String>,
    pub message: Option<String>,
}

impl HintOut {
    pub fn from_hint(text: Option<String>) -> Self {
        match text {
            Some(t) => Self { text: Some(t), message: None },
            None => Self { text: None, message: Some(HINTS_EXHAUSTED.into()) },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ExampleQuery {
    #[serde(rename = "levelIndex")]
    pub level_index: usize,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceIn {
    #[serde(rename = "displayIndex")]
    pub display_index: usize,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}
