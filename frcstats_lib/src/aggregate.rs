//! Per-team aggregation over a season's events and matches.

use serde::Serialize;
use tba_api::Client;

use crate::events::{fetch_events, EventSet};
use crate::team::{fetch_team, Team};

/// Running totals over the matches a team actually played.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub matches_played: u32,
    pub points: u64,
    pub wins: u32,
    pub losses: u32,
}

impl Totals {
    /// Points per match played, or 0 when no match was played.
    pub fn average(&self) -> f64 {
        if self.matches_played > 0 {
            self.points as f64 / self.matches_played as f64
        } else {
            0.0
        }
    }
}

/// Summary of one (team, year) query, as shown on the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResult {
    pub team: u32,
    pub year: i32,
    pub avg_score: f64,
    pub wins: u32,
    pub losses: u32,
    pub matches_played: u32,
    pub total_points: u64,
}

impl AggregateResult {
    pub fn new(team: u32, year: i32, totals: Totals) -> Self {
        Self {
            team,
            year,
            avg_score: totals.average(),
            wins: totals.wins,
            losses: totals.losses,
            matches_played: totals.matches_played,
            total_points: totals.points,
        }
    }

    /// Wins and losses as `"wins:losses"`.
    pub fn w_l_ratio(&self) -> String {
        format!("{}:{}", self.wins, self.losses)
    }
}

/// Walks every match of every event and counts the ones `team` played in.
/// Events without matches contribute nothing.
pub fn tally(team: &Team, events: &EventSet) -> Totals {
    let mut totals = Totals::default();
    for i in 0..events.count() {
        let Some(matches) = events.matches_for(i) else {
            continue;
        };
        for j in 0..matches.count() {
            let Some(score) = matches.score_for(j, team) else {
                continue;
            };
            totals.matches_played += 1;
            totals.points += u64::from(score);
            if matches.did_win(j, team) {
                totals.wins += 1;
            } else {
                totals.losses += 1;
            }
        }
    }
    totals
}

/// Looks up the team, then its events and matches for `year`, and
/// aggregates them. Returns `None` if either lookup comes back empty; there
/// are no partial results.
pub async fn compute_stats(client: &Client, team_number: u32, year: i32) -> Option<AggregateResult> {
    let team = fetch_team(client, team_number).await?;
    tracing::debug!("Resolved team {} ({})", team.key, team.name);
    let events = fetch_events(client, team_number, year).await?;
    let totals = tally(&team, &events);
    tracing::debug!(
        "Team {} in {}: {} matches over {} events",
        team_number,
        year,
        totals.matches_played,
        events.count()
    );
    Some(AggregateResult::new(team_number, year, totals))
}
