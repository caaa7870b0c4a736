//! In-memory per-poll session state.
//!
//! Sessions are keyed by Telegram poll id and hold everything the bot knows
//! about one attendance round: the answer tracker and the court config being
//! edited. Nothing survives a restart; a crashed bot means a fresh
//! `/new_poll`, not a migration.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::poll::{PollChoice, PollTracker};
use crate::scheduler::{CourtConfig, CourtId, Player};

/// Telegram poll id, the key every session hangs off.
pub type PollId = String;

/// Shared handle to the bot state, cloned into every handler branch.
pub type SharedState = Arc<AppState>;

/// Everything tracked for one attendance poll.
#[derive(Debug, Clone, Default)]
pub struct PollSession {
    /// Who answered what.
    pub tracker: PollTracker,
    /// Court bookings accumulated by the config editor.
    pub court_config: CourtConfig,
}

/// All live poll sessions behind one async lock.
///
/// A single mutex is plenty here: every access is a short map lookup, and
/// the bot serves one small group chat, not a fleet.
#[derive(Debug, Default)]
pub struct AppState {
    sessions: Mutex<HashMap<PollId, PollSession>>,
}

impl AppState {
    /// Creates an empty state behind a shared handle.
    pub fn new() -> SharedState {
        Arc::new(Self::default())
    }

    /// Registers a freshly sent poll so later updates find a session.
    pub async fn register_poll(&self, poll_id: PollId) {
        self.sessions.lock().await.entry(poll_id).or_default();
    }

    /// Records or replaces `player`'s answer for `poll_id`. Unknown polls
    /// get a session on the fly, so an answer racing ahead of poll
    /// registration is never dropped.
    pub async fn record_answer(&self, poll_id: &str, player: Player, choice: PollChoice) {
        let mut sessions = self.sessions.lock().await;
        let session = sessions.entry(poll_id.to_string()).or_default();
        session.tracker.record(player, choice);
    }

    /// Removes `player_id`'s answer for `poll_id` (vote retraction).
    pub async fn retract_answer(&self, poll_id: &str, player_id: i64) {
        let mut sessions = self.sessions.lock().await;
        if let Some(session) = sessions.get_mut(poll_id) {
            session.tracker.retract(player_id);
        }
    }

    /// Adds bookings for `court` and returns a snapshot of the updated
    /// config for rendering.
    pub async fn add_court_bookings(
        &self,
        poll_id: &str,
        court: CourtId,
        count: u32,
    ) -> CourtConfig {
        let mut sessions = self.sessions.lock().await;
        let session = sessions.entry(poll_id.to_string()).or_default();
        session.court_config.add_bookings(court, count);
        session.court_config.clone()
    }

    /// Clears the court config for `poll_id`, keeping the tracked answers.
    pub async fn reset_config(&self, poll_id: &str) {
        let mut sessions = self.sessions.lock().await;
        sessions.entry(poll_id.to_string()).or_default().court_config = CourtConfig::new();
    }

    /// The attending players plus an owned copy of the court config, ready
    /// to feed a generation run. The run must never share the live config,
    /// so this always clones.
    pub async fn snapshot(&self, poll_id: &str) -> (Vec<Player>, CourtConfig) {
        let mut sessions = self.sessions.lock().await;
        let session = sessions.entry(poll_id.to_string()).or_default();
        (session.tracker.attending(), session.court_config.clone())
    }

    /// Number of polls currently tracked, reported by the health endpoint.
    pub async fn active_poll_count(&self) -> usize {
        self.sessions.lock().await.len()
    }
}
