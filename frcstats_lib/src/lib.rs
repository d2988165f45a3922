//! Library layer for frcstats: team, event and match lookups against The
//! Blue Alliance, per-team aggregation, and the running leaderboard.
//!
//! Every lookup collapses transport failures, error-shaped responses and
//! empty results into `None` at the component that sees them, so callers
//! only ever branch on presence.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod events;
pub mod leaderboard;
pub mod matches;
pub mod session;
pub mod team;
pub mod validation;

pub use tba_api;
pub use tba_api::Client;

pub use aggregate::{compute_stats, tally, AggregateResult, Totals};
pub use config::{Config, ConfigError};
pub use error::FrcStatsError;
pub use events::{fetch_events, EventEntry, EventSet};
pub use leaderboard::{render, Leaderboard};
pub use matches::{fetch_matches, MatchSet, PlayedMatch};
pub use session::{QueryOutcome, Session};
pub use team::{fetch_team, Team};
