//! One interactive session: the leaderboard plus the query step that feeds it.

use tba_api::Client;

use crate::aggregate::{compute_stats, AggregateResult};
use crate::leaderboard::Leaderboard;

/// What happened to a submitted query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// The pair was already asked for this session. Nothing was fetched.
    Duplicate,
    /// The team or its events could not be found.
    NoData,
    /// The result was added to the leaderboard.
    Added(AggregateResult),
}

/// Holds the state that lives for the whole process: the leaderboard and
/// the set of queries already asked. Starts empty; nothing to tear down.
#[derive(Debug, Default)]
pub struct Session {
    leaderboard: Leaderboard,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    /// Runs one (team, year) query. Repeats are rejected before any request
    /// is made; every other attempt is recorded, even if it finds nothing.
    pub async fn submit(&mut self, client: &Client, team: u32, year: i32) -> QueryOutcome {
        if self.leaderboard.has_seen(team, year) {
            tracing::info!("Already have stats for team {} in {}", team, year);
            return QueryOutcome::Duplicate;
        }
        self.leaderboard.record(team, year);

        match compute_stats(client, team, year).await {
            Some(result) => {
                self.leaderboard.insert(result.clone());
                QueryOutcome::Added(result)
            }
            None => {
                tracing::info!("No stats for team {} in {}", team, year);
                QueryOutcome::NoData
            }
        }
    }
}
