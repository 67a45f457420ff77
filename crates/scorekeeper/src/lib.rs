//! Session layer for the round-robin scorekeeper
//!
//! This crate provides infrastructure for:
//! - Persisting in-progress tournaments as JSON blobs with a freshness window
//! - The Setup/InProgress session state machine driving score entry
//! - Swappable blob stores (filesystem or in-memory)
//!
//! # Usage
//!
//! ```bash
//! # Start a tournament and enter a score
//! cargo run -p scorekeeper -- start Alice Bob Carol
//! cargo run -p scorekeeper -- score 1 2 5
//!
//! # Show standings, then wipe everything
//! cargo run -p scorekeeper -- standings
//! cargo run -p scorekeeper -- clear --yes
//! ```

pub mod config;
pub mod saved;
pub mod session;
pub mod store;

pub use config::{ConfigError, StoreConfig, DEFAULT_CONFIG_PATH};
pub use saved::{SavedPairing, SavedTournament, FRESHNESS_WINDOW_MS};
pub use session::{Controls, ScoreUpdate, Session, SessionError, State};
pub use store::{BlobStore, FileStore, MemStore, StoreError};
