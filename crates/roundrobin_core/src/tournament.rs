//! Tournament state: roster, schedule, and recorded scores

use chrono::Utc;
use thiserror::Error;

use crate::competitor::Roster;
use crate::schedule::{generate_rounds, Pairing, Round};

/// Score addressing failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("no pairing {pairing} in round {round}")]
    NoSuchPairing { round: usize, pairing: usize },
}

/// One tournament: the roster, the full round-robin schedule over its padded
/// indices, and the creation timestamp in epoch milliseconds.
///
/// Pairings are mutated in place as scores arrive; everything else is fixed
/// at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tournament {
    roster: Roster,
    rounds: Vec<Round>,
    created_at: i64,
}

impl Tournament {
    /// Create a tournament from a validated roster, generating the schedule
    /// and stamping the current time.
    pub fn new(roster: Roster) -> Self {
        let rounds = generate_rounds(roster.len());
        Self {
            roster,
            rounds,
            created_at: Utc::now().timestamp_millis(),
        }
    }

    /// Reassemble a tournament from previously persisted parts.
    pub fn from_parts(roster: Roster, rounds: Vec<Round>, created_at: i64) -> Self {
        Self {
            roster,
            rounds,
            created_at,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    pub fn pairing(&self, round: usize, pairing: usize) -> Option<&Pairing> {
        self.rounds.get(round)?.get(pairing)
    }

    /// Record a score for one pairing, `None` clearing it back to blank.
    ///
    /// A score against a pairing whose members are all byes is stored but
    /// never credited to anyone.
    pub fn record_score(
        &mut self,
        round: usize,
        pairing: usize,
        score: Option<i64>,
    ) -> Result<(), ScoreError> {
        let slot = self
            .rounds
            .get_mut(round)
            .and_then(|r| r.get_mut(pairing))
            .ok_or(ScoreError::NoSuchPairing { round, pairing })?;
        slot.score = score;
        Ok(())
    }

    /// Presentation label for a pairing: both names joined, or just the
    /// active competitor's name when the other slot is the bye.
    pub fn pairing_label(&self, pairing: &Pairing) -> String {
        let names: Vec<&str> = pairing
            .slots
            .iter()
            .filter_map(|&slot| self.roster.name(slot))
            .collect();
        names.join(" and ")
    }
}
