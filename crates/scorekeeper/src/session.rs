//! Session state machine: Setup to InProgress and back
//!
//! A session owns the blob store and the current tournament, and serializes
//! every event fully before the next one runs: a score edit mutates the
//! tournament, re-derives standings, then snapshots to the store.

use chrono::Utc;
use thiserror::Error;

use roundrobin_core::{
    affected_competitors, rankings, Ranking, Roster, RosterError, ScoreError, Tournament,
};

use crate::saved::SavedTournament;
use crate::store::{BlobStore, StoreError};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error(transparent)]
    Score(#[from] ScoreError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("no tournament in progress")]
    NotStarted,

    #[error("a tournament is already in progress")]
    AlreadyStarted,
}

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum State {
    /// Competitor names editable, no schedule yet.
    #[default]
    Setup,
    /// Schedule fixed, names locked, scores editable.
    InProgress(Tournament),
}

/// Which input groups the presentation layer should enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub setup_enabled: bool,
    pub scores_enabled: bool,
}

/// Result of one score edit: the rows whose totals changed plus the full
/// re-derived standings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreUpdate {
    pub affected: Vec<usize>,
    pub rankings: Vec<Ranking>,
}

pub struct Session<S: BlobStore> {
    store: S,
    key: String,
    state: State,
}

impl<S: BlobStore> Session<S> {
    /// Fresh session in Setup, ignoring anything persisted.
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            state: State::Setup,
        }
    }

    /// Start from whatever the store holds: a well-formed, fresh blob
    /// restores straight into InProgress; a malformed or expired one is
    /// discarded and the session begins in Setup. Never a user-facing error.
    pub fn restore(store: S, key: impl Into<String>) -> Self {
        let mut session = Self::new(store, key);
        session.try_restore();
        session
    }

    fn try_restore(&mut self) {
        let blob = match self.store.get(&self.key) {
            Ok(Some(blob)) => blob,
            Ok(None) => return,
            Err(e) => {
                log::warn!("failed to read persisted session: {}", e);
                return;
            }
        };

        let Some(saved) = SavedTournament::parse(&blob) else {
            log::info!("discarding malformed persisted session");
            self.discard();
            return;
        };
        if !saved.is_fresh(Utc::now().timestamp_millis()) {
            log::info!("discarding expired persisted session");
            self.discard();
            return;
        }
        match saved.into_tournament() {
            Some(tournament) => {
                log::info!(
                    "restored tournament with {} competitors",
                    tournament.roster().real_count()
                );
                self.state = State::InProgress(tournament);
            }
            None => {
                log::info!("discarding malformed persisted session");
                self.discard();
            }
        }
    }

    fn discard(&mut self) {
        if let Err(e) = self.store.remove(&self.key) {
            log::warn!("failed to remove stale session blob: {}", e);
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn tournament(&self) -> Option<&Tournament> {
        match &self.state {
            State::InProgress(t) => Some(t),
            State::Setup => None,
        }
    }

    pub fn controls(&self) -> Controls {
        let in_progress = matches!(self.state, State::InProgress(_));
        Controls {
            setup_enabled: !in_progress,
            scores_enabled: in_progress,
        }
    }

    /// Validate names and lock in the schedule. On a validation error the
    /// session stays in Setup and nothing is persisted.
    pub fn start(&mut self, names: Vec<String>) -> Result<(), SessionError> {
        if matches!(self.state, State::InProgress(_)) {
            return Err(SessionError::AlreadyStarted);
        }
        let roster = Roster::new(names)?;
        self.state = State::InProgress(Tournament::new(roster));
        Ok(())
    }

    /// Record one score edit end to end: coerce the raw value, mutate the
    /// pairing, re-derive standings, persist the snapshot.
    pub fn record_score(
        &mut self,
        round: usize,
        pairing: usize,
        raw: &str,
    ) -> Result<ScoreUpdate, SessionError> {
        let State::InProgress(tournament) = &mut self.state else {
            return Err(SessionError::NotStarted);
        };

        tournament.record_score(round, pairing, parse_score(raw))?;
        let update = ScoreUpdate {
            affected: affected_competitors(tournament, round, pairing),
            rankings: rankings(tournament),
        };

        let blob = serde_json::to_string(&SavedTournament::from_tournament(tournament))
            .map_err(StoreError::from)?;
        self.store.set(&self.key, &blob)?;
        Ok(update)
    }

    /// Snapshot the current tournament to the store.
    pub fn persist(&mut self) -> Result<(), SessionError> {
        let State::InProgress(tournament) = &self.state else {
            return Err(SessionError::NotStarted);
        };
        let blob = serde_json::to_string(&SavedTournament::from_tournament(tournament))
            .map_err(StoreError::from)?;
        self.store.set(&self.key, &blob)?;
        Ok(())
    }

    /// Current standings, empty while in Setup.
    pub fn rankings(&self) -> Vec<Ranking> {
        self.tournament().map(rankings).unwrap_or_default()
    }

    /// Drop the tournament and its persisted blob, returning to Setup.
    /// Confirmation gating is the caller's concern.
    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.store.remove(&self.key)?;
        self.state = State::Setup;
        Ok(())
    }
}

/// Score inputs are free text: blank or non-numeric becomes a blank score.
fn parse_score(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}
