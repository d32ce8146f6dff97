//! In-memory study sessions.
//!
//! A session lives from a successful paste until the user goes back to the
//! paste screen, or until it sits idle past the configured timeout.
//! Nothing is persisted.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use uuid::Uuid;
use vocab_core::{Deck, Navigator};

use crate::models::{CardView, SessionView};
use crate::services::speech::SpeechSlot;

/// Upper bound on how often the reaper sweeps the store.
const REAP_PERIOD: Duration = Duration::from_secs(60);

/// One user's walk through a deck.
#[derive(Debug)]
pub struct Session {
    pub id: Uuid,
    pub navigator: Navigator,
    pub speech: SpeechSlot,
    pub created_at: DateTime<Utc>,
    /// Last time a request read or changed this session.
    pub last_seen: Instant,
}

impl Session {
    pub fn new(deck: Deck) -> Self {
        Self {
            id: Uuid::new_v4(),
            navigator: Navigator::new(deck),
            speech: SpeechSlot::default(),
            created_at: Utc::now(),
            last_seen: Instant::now(),
        }
    }

    pub fn touch(&mut self) {
        self.last_seen = Instant::now();
    }

    pub fn is_idle(&self, max_idle: Duration) -> bool {
        self.last_seen.elapsed() > max_idle
    }

    /// Snapshot for the presentation layer.
    pub fn view(&self) -> SessionView {
        let nav = &self.navigator;
        let card = nav.current_card().map(|record| CardView {
            id: record.id,
            front: nav.front_text().unwrap_or_default().to_string(),
            back: nav.back_text().unwrap_or_default().to_string(),
            note: record.note.clone(),
        });

        SessionView {
            id: self.id,
            card,
            state: nav.state(),
            voice_gender: nav.voice(),
            progress: nav.progress(),
            created_at: self.created_at,
        }
    }
}

/// Sessions keyed by id.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session over `deck` and return its first view.
    pub async fn create(&self, deck: Deck) -> SessionView {
        let session = Session::new(deck);
        let view = session.view();
        self.sessions.write().await.insert(session.id, session);
        view
    }

    /// Run `f` against the session, if it exists. Marks it as seen.
    pub async fn with_session<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Session) -> R,
    ) -> Option<R> {
        let mut sessions = self.sessions.write().await;
        sessions.get_mut(&id).map(|session| {
            session.touch();
            f(session)
        })
    }

    pub async fn view(&self, id: Uuid) -> Option<SessionView> {
        self.with_session(id, |session| session.view()).await
    }

    pub async fn deck(&self, id: Uuid) -> Option<Deck> {
        self.with_session(id, |session| session.navigator.deck().clone()).await
    }

    /// Drop the session. Any speech fetch it owned is aborted.
    pub async fn remove(&self, id: Uuid) -> bool {
        self.sessions.write().await.remove(&id).is_some()
    }

    /// Drop every session not seen within `max_idle`. Returns how many went.
    pub async fn evict_idle(&self, max_idle: Duration) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_idle(max_idle));
        let evicted = before - sessions.len();

        if evicted > 0 {
            tracing::info!("Evicted {} idle sessions, {} remain", evicted, sessions.len());
        }
        evicted
    }

    /// Sweep idle sessions in the background for as long as the task runs.
    pub fn spawn_reaper(self: Arc<Self>, max_idle: Duration) -> JoinHandle<()> {
        let period = max_idle.clamp(Duration::from_secs(1), REAP_PERIOD);

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                self.evict_idle(max_idle).await;
            }
        })
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
