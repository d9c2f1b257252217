//! Router assembly: HTTP endpoints, WebSocket upgrade, static files, CORS, and HTTP tracing.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::AppState;

pub mod http;
pub mod ws;

/// Build the application router with:
/// - WebSocket at `/ws` (one game session per connection)
/// - REST-ish API under `/api/v1/...` (explicit session ids)
/// - Static SPA from `static_dir` with index fallback
/// - CORS (allow any origin/method/headers) – adjust for production if needed
/// - HTTP trace layer (per-request spans w/ method, path, status, latency)
pub fn build_router(state: Arc<AppState>, static_dir: &str) -> Router {
    // Static files with SPA fallback
    let static_service = ServeDir::new(static_dir)
        .append_index_html_on_directories(true)
        .not_found_service(ServeFile::new(format!("{static_dir}/index.html")));

    Router::new()
        // WebSocket
        .route("/ws", get(ws::ws_upgrade))
        // HTTP API
        .route("/api/v1/health", get(http::http_health))
        .route("/api/v1/examples/real-world", get(http::http_get_real_world_examples))
        .route("/api/v1/session", post(http::http_create_session))
        .route("/api/v1/session/:id", axum::routing::delete(http::http_delete_session))
        .route("/api/v1/session/:id/reset", post(http::http_reset_session))
        .route("/api/v1/session/:id/level/:index", get(http::http_get_level))
        .route("/api/v1/session/:id/evaluate", post(http::http_post_evaluate))
        .route("/api/v1/session/:id/hint", get(http::http_get_hint))
        .route("/api/v1/session/:id/example", get(http::http_get_example))
        .route("/api/v1/session/:id/progress", get(http::http_get_progress))
        .route("/api/v1/session/:id/scenario/:index", get(http::http_get_scenario))
        .route("/api/v1/session/:id/choice", post(http::http_post_choice))
        // State + CORS + HTTP tracing
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Frontend fallback
        .fallback_service(static_service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameContent;
    use crate::protocol::{SessionOut, HINTS_EXHAUSTED};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> (Router, Arc<AppState>) {
        let state = Arc::new(AppState::from_content(GameContent::build(None)));
        (build_router(state.clone(), "./static"), state)
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    async fn new_session(app: &Router) -> String {
        let response = app
            .clone()
            .oneshot(Request::builder().method("POST").uri("/api/v1/session").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice::<SessionOut>(&body).unwrap().session_id
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, json: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health() {
        let (app, _) = app();
        let response = app.oneshot(get("/api/v1/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["ok"], true);
    }

    #[tokio::test]
    async fn level_evaluate_progress_flow() {
        let (app, _) = app();
        let id = new_session(&app).await;

        let response = app.clone().oneshot(get(&format!("/api/v1/session/{id}/level/0"))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let level = json_body(response).await;
        assert_eq!(level["progress"]["current"], 1);
        assert_eq!(level["progress"]["total"], 8);
        let good = level["level"]["exampleGoodPrompt"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(post_json(
                &format!("/api/v1/session/{id}/evaluate"),
                serde_json::json!({ "text": good, "levelIndex": 0 }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let result = json_body(response).await;
        assert_eq!(result["passed"], true);
        assert!(result["matchedCriteria"].as_array().unwrap().len() >= 3);

        let response = app.clone().oneshot(get(&format!("/api/v1/session/{id}/progress"))).await.unwrap();
        let progress = json_body(response).await;
        assert_eq!(progress["attempts"], 1);
        assert_eq!(progress["totalLevels"], 8);
        assert_eq!(progress["bestScore"], result["score"]);

        let response = app.oneshot(get(&format!("/api/v1/session/{id}/level/8"))).await.unwrap();
        let done = json_body(response).await;
        assert_eq!(done["completed"], true);
        assert_eq!(done["attempts"], 1);
    }

    #[tokio::test]
    async fn hints_run_out_with_a_message() {
        let (app, _) = app();
        let id = new_session(&app).await;

        let response = app
            .clone()
            .oneshot(get(&format!("/api/v1/session/{id}/hint?levelIndex=0&hintNumber=0")))
            .await
            .unwrap();
        assert!(json_body(response).await["text"].is_string());

        let response = app
            .oneshot(get(&format!("/api/v1/session/{id}/hint?levelIndex=0&hintNumber=99")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert!(body["text"].is_null());
        assert_eq!(body["message"], HINTS_EXHAUSTED);
    }

    #[tokio::test]
    async fn unknown_session_and_level() {
        let (app, _) = app();
        let response = app.clone().oneshot(get("/api/v1/session/missing/progress")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["error"], "unknown session: missing");

        let id = new_session(&app).await;
        let response = app
            .oneshot(get(&format!("/api/v1/session/{id}/example?levelIndex=40")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn scenario_choice_flow() {
        let (app, _) = app();
        let id = new_session(&app).await;

        let response = app.clone().oneshot(get(&format!("/api/v1/session/{id}/scenario/0"))).await.unwrap();
        let view = json_body(response).await;
        assert_eq!(view["choices"].as_array().unwrap().len(), 4);

        let uri = format!("/api/v1/session/{id}/choice");
        let response = app
            .clone()
            .oneshot(post_json(&uri, serde_json::json!({ "displayIndex": 2 })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let outcome = json_body(response).await;
        assert_eq!(outcome["scenarioIndex"], 0);

        let response = app.oneshot(post_json(&uri, serde_json::json!({ "displayIndex": 1 }))).await.unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn reset_and_delete() {
        let (app, state) = app();
        let id = new_session(&app).await;
        state
            .with_session(&id, |s| s.prompt.evaluate_prompt("hello", 0))
            .await
            .unwrap()
            .unwrap();

        let response = app
            .clone()
            .oneshot(Request::builder().method("POST").uri(format!("/api/v1/session/{id}/reset")).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let attempts = state.with_session(&id, |s| s.prompt.get_progress().attempts).await.unwrap();
        assert_eq!(attempts, 0);

        let response = app
            .oneshot(Request::builder().method("DELETE").uri(format!("/api/v1/session/{id}")).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(state.session_count().await, 0);
    }

    #[tokio::test]
    async fn abandoned_http_sessions_are_evicted() {
        let (app, state) = app();
        let mut ids = Vec::new();
        for _ in 0..50 {
            ids.push(new_session(&app).await);
        }
        assert_eq!(state.session_count().await, 50);

        let later = tokio::time::Instant::now() + state.idle_ttl;
        assert_eq!(state.evict_idle(later).await, 50);
        assert_eq!(state.session_count().await, 0);

        let response = app.oneshot(get(&format!("/api/v1/session/{}/progress", ids[0]))).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
