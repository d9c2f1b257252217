//! Application state: compiled content, scoring rules, and the live player sessions.
//!
//! This module owns:
//!   - the compiled level bank, ethics scenarios and real-world examples
//!   - the scoring rules (from TOML or defaults)
//!   - the session store (by id) and its idle sweeper
//!
//! Each session is independent; the store lock is held only for the
//! duration of one synchronous session operation.

use std::{collections::HashMap, sync::Arc, time::Duration};

use rand::{rngs::StdRng, SeedableRng};
use tokio::{sync::RwLock, task::JoinHandle, time::Instant};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::config::{load_game_config_from_env, session_idle_ttl_from_env, GameContent, DEFAULT_SESSION_IDLE_TTL};
use crate::domain::{EthicsScenario, RealWorldExample};
use crate::error::GameError;
use crate::ethics::EthicsSession;
use crate::scoring::{CompiledRubric, ScoringRules};
use crate::session::PromptSession;

/// Everything one player owns.
pub struct GameSession {
    pub prompt: PromptSession,
    pub ethics: EthicsSession,
    /// Last time any operation touched this session.
    last_seen: Instant,
    /// Owned by a live WebSocket; removed on disconnect, never swept.
    connected: bool,
}

impl GameSession {
    /// Reset both missions and reshuffle.
    pub fn init(&mut self) {
        self.prompt.init();
        self.ethics.reset();
    }
}

#[derive(Clone)]
pub struct AppState {
    pub levels: Arc<Vec<CompiledRubric>>,
    pub scenarios: Arc<Vec<EthicsScenario>>,
    pub real_world_examples: Arc<Vec<RealWorldExample>>,
    pub rules: Arc<ScoringRules>,
    pub sessions: Arc<RwLock<HashMap<String, GameSession>>>,
    /// Anonymous HTTP sessions idle for this long are evicted.
    pub idle_ttl: Duration,
}

impl AppState {
    /// Build state from env: load config, merge with seeds, compile rubrics.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        Self::from_content(GameContent::build(load_game_config_from_env()))
            .with_idle_ttl(session_idle_ttl_from_env())
    }

    pub fn from_content(content: GameContent) -> Self {
        info!(
            target: "aiquest_backend",
            levels = content.levels.len(),
            scenarios = content.scenarios.len(),
            examples = content.real_world_examples.len(),
            pass_score = content.rules.pass_score,
            "Game content ready"
        );
        Self {
            levels: Arc::new(content.levels),
            scenarios: Arc::new(content.scenarios),
            real_world_examples: Arc::new(content.real_world_examples),
            rules: Arc::new(content.rules),
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_ttl: DEFAULT_SESSION_IDLE_TTL,
        }
    }

    pub fn with_idle_ttl(mut self, idle_ttl: Duration) -> Self {
        self.idle_ttl = idle_ttl;
        self
    }

    fn new_session(&self, connected: bool) -> GameSession {
        GameSession {
            prompt: PromptSession::new(self.levels.clone(), self.rules.clone(), StdRng::from_entropy()),
            ethics: EthicsSession::new(self.scenarios.clone(), StdRng::from_entropy()),
            last_seen: Instant::now(),
            connected,
        }
    }

    async fn insert_session(&self, connected: bool) -> String {
        let id = Uuid::new_v4().to_string();
        let session = self.new_session(connected);
        let mut sessions = self.sessions.write().await;
        sessions.insert(id.clone(), session);
        let total = sessions.len();
        info!(target: "session", %id, connected, live_sessions = total, "Session created");
        id
    }

    /// Create a freshly initialized session and return its id. Subject to idle eviction.
    #[instrument(level = "info", skip(self))]
    pub async fn create_session(&self) -> String {
        self.insert_session(false).await
    }

    /// Create a session owned by a WebSocket connection. The caller removes it on disconnect.
    #[instrument(level = "info", skip(self))]
    pub async fn create_connected_session(&self) -> String {
        self.insert_session(true).await
    }

    #[instrument(level = "info", skip(self), fields(%id))]
    pub async fn remove_session(&self, id: &str) -> Result<(), GameError> {
        match self.sessions.write().await.remove(id) {
            Some(_) => {
                info!(target: "session", %id, "Session removed");
                Ok(())
            }
            None => Err(GameError::UnknownSession(id.to_string())),
        }
    }

    /// Run `f` against session `id` under the store's write lock.
    pub async fn with_session<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut GameSession) -> T,
    ) -> Result<T, GameError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| GameError::UnknownSession(id.to_string()))?;
        session.last_seen = Instant::now();
        Ok(f(session))
    }

    /// Drop every unconnected session idle for at least `idle_ttl` as of `now`.
    /// Returns how many were evicted.
    pub async fn evict_idle(&self, now: Instant) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.connected || now.saturating_duration_since(s.last_seen) < self.idle_ttl);
        let evicted = before - sessions.len();
        if evicted > 0 {
            info!(target: "session", evicted, live_sessions = sessions.len(), "Idle sessions evicted");
        } else {
            debug!(target: "session", live_sessions = sessions.len(), "Idle sweep found nothing");
        }
        evicted
    }

    #[cfg(test)]
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

/// Periodically evict idle sessions. Runs until the runtime shuts down.
pub fn spawn_session_sweeper(state: Arc<AppState>) -> JoinHandle<()> {
    let period = (state.idle_ttl / 4).max(Duration::from_secs(1));
    info!(target: "session", idle_ttl_secs = state.idle_ttl.as_secs(), period_ms = period.as_millis() as u64, "Session sweeper started");
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            state.evict_idle(Instant::now()).await;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::from_content(GameContent::build(None))
    }

    #[tokio::test]
    async fn sessions_do_not_interfere() {
        let st = state();
        let a = st.create_session().await;
        let b = st.create_session().await;
        assert_ne!(a, b);

        st.with_session(&a, |s| s.prompt.evaluate_prompt("hello there", 0))
            .await
            .unwrap()
            .unwrap();
        let pa = st.with_session(&a, |s| s.prompt.get_progress()).await.unwrap();
        let pb = st.with_session(&b, |s| s.prompt.get_progress()).await.unwrap();
        assert_eq!(pa.attempts, 1);
        assert_eq!(pb.attempts, 0);
    }

    #[tokio::test]
    async fn unknown_and_removed_sessions() {
        let st = state();
        let id = st.create_session().await;
        assert_eq!(st.session_count().await, 1);
        st.remove_session(&id).await.unwrap();
        assert_eq!(st.session_count().await, 0);
        assert_eq!(
            st.with_session(&id, |s| s.prompt.get_progress()).await,
            Err(GameError::UnknownSession(id.clone()))
        );
        assert_eq!(st.remove_session(&id).await, Err(GameError::UnknownSession(id)));
    }

    #[tokio::test]
    async fn idle_sessions_are_evicted_but_connected_ones_stay() {
        let st = state().with_idle_ttl(Duration::from_secs(60));
        let a = st.create_session().await;
        let _b = st.create_session().await;
        let ws = st.create_connected_session().await;

        let later = Instant::now() + Duration::from_secs(61);
        assert_eq!(st.evict_idle(later).await, 2);
        assert_eq!(st.session_count().await, 1);
        assert!(st.with_session(&ws, |s| s.prompt.get_progress()).await.is_ok());
        assert_eq!(
            st.with_session(&a, |s| s.prompt.get_progress()).await,
            Err(GameError::UnknownSession(a))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn activity_keeps_a_session_alive() {
        let st = state().with_idle_ttl(Duration::from_secs(60));
        let active = st.create_session().await;
        let idle = st.create_session().await;

        tokio::time::advance(Duration::from_secs(40)).await;
        st.with_session(&active, |s| s.prompt.load_level(0)).await.unwrap();
        tokio::time::advance(Duration::from_secs(30)).await;

        assert_eq!(st.evict_idle(Instant::now()).await, 1);
        assert!(st.with_session(&active, |s| s.prompt.get_progress()).await.is_ok());
        assert!(st.with_session(&idle, |s| s.prompt.get_progress()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn sweeper_clears_abandoned_sessions() {
        let st = Arc::new(state().with_idle_ttl(Duration::from_secs(10)));
        for _ in 0..25 {
            st.create_session().await;
        }
        assert_eq!(st.session_count().await, 25);

        let sweeper = spawn_session_sweeper(st.clone());
        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(st.session_count().await, 0);
        sweeper.abort();
    }
}
