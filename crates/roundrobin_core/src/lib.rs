//! Round-robin tournament core
//!
//! This crate provides the tournament model shared by every front end:
//! - Competitor rosters with validation and bye padding
//! - Full round-robin schedule generation (circle method)
//! - Score recording and per-competitor totals
//! - Stable rankings by total score

pub mod competitor;
pub mod schedule;
pub mod standings;
pub mod tournament;

pub use competitor::{Competitor, Roster, RosterError};
pub use schedule::{generate_rounds, Pairing, Round};
pub use standings::{affected_competitors, rankings, totals, Ranking};
pub use tournament::{ScoreError, Tournament};
