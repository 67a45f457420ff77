//! Persisted blob format, structural validation, and the freshness window
//!
//! The wire shape matches the original browser storage format:
//!
//! ```json
//! {
//!   "players": ["A", "B", "C", "self"],
//!   "rounds": [[{ "players": [0, 3], "score": 5 }, ...], ...],
//!   "date": 1700000000000
//! }
//! ```
//!
//! The bye slot is written under the legacy placeholder name `"self"` at the
//! end of `players`, so blobs stay interchangeable with the original front
//! end; loading maps that trailing placeholder back to the bye variant.

use serde::{Deserialize, Serialize};

use roundrobin_core::{Pairing, Roster, Round, Tournament};

/// Maximum age of a persisted session. Anything at or past this is expired.
pub const FRESHNESS_WINDOW_MS: i64 = 2 * 60 * 60 * 1000;

/// Legacy placeholder the wire format uses for the bye slot.
const BYE_PLACEHOLDER: &str = "self";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPairing {
    pub players: [usize; 2],
    pub score: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedTournament {
    pub players: Vec<String>,
    pub rounds: Vec<Vec<SavedPairing>>,
    pub date: i64,
}

impl SavedTournament {
    pub fn from_tournament(tournament: &Tournament) -> Self {
        let players = tournament
            .roster()
            .competitors()
            .iter()
            .map(|c| c.name().unwrap_or(BYE_PLACEHOLDER).to_string())
            .collect();
        let rounds = tournament
            .rounds()
            .iter()
            .map(|round| {
                round
                    .iter()
                    .map(|p| SavedPairing {
                        players: p.slots,
                        score: p.score,
                    })
                    .collect()
            })
            .collect();
        Self {
            players,
            rounds,
            date: tournament.created_at(),
        }
    }

    /// Parse a raw blob and apply the structural checks: well-formed JSON,
    /// non-empty player and round lists, and a positive timestamp. `None`
    /// means the blob is unusable and should be discarded.
    pub fn parse(blob: &str) -> Option<Self> {
        let saved: SavedTournament = serde_json::from_str(blob).ok()?;
        if saved.players.is_empty() || saved.rounds.is_empty() || saved.date <= 0 {
            return None;
        }
        Some(saved)
    }

    /// Whether the blob is still inside the freshness window at `now_ms`.
    pub fn is_fresh(&self, now_ms: i64) -> bool {
        now_ms - self.date < FRESHNESS_WINDOW_MS
    }

    /// Rebuild the tournament. `None` if the player list fails roster
    /// validation or any pairing references a slot out of range.
    pub fn into_tournament(self) -> Option<Tournament> {
        let mut names = self.players;
        if names.last().map(String::as_str) == Some(BYE_PLACEHOLDER) {
            names.pop();
        }
        // Roster::new re-pads, restoring the bye the placeholder stood for.
        let roster = Roster::new(names).ok()?;

        let mut rounds: Vec<Round> = Vec::with_capacity(self.rounds.len());
        for saved_round in self.rounds {
            let mut round = Vec::with_capacity(saved_round.len());
            for saved in saved_round {
                let [a, b] = saved.players;
                if a >= roster.len() || b >= roster.len() {
                    return None;
                }
                let mut pairing = Pairing::new(a, b);
                pairing.score = saved.score;
                round.push(pairing);
            }
            rounds.push(round);
        }

        Some(Tournament::from_parts(roster, rounds, self.date))
    }
}
