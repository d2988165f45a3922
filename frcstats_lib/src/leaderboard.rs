//! Running leaderboard of aggregate results, ranked by average score.

use std::collections::HashSet;

use crate::aggregate::AggregateResult;

/// Results kept in descending average-score order, plus every (team, year)
/// pair that has been asked for.
#[derive(Debug, Default)]
pub struct Leaderboard {
    results: Vec<AggregateResult>,
    seen: HashSet<(u32, i32)>,
}

impl Leaderboard {
    /// An empty leaderboard.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_seen(&self, team: u32, year: i32) -> bool {
        self.seen.contains(&(team, year))
    }

    /// Marks a query as asked, whether or not it produced a result.
    pub fn record(&mut self, team: u32, year: i32) {
        self.seen.insert((team, year));
    }

    /// Appends a result and re-ranks. The sort is stable, so equal averages
    /// keep insertion order. A result for a pair already on the board is
    /// dropped.
    pub fn insert(&mut self, result: AggregateResult) {
        if self
            .results
            .iter()
            .any(|r| r.team == result.team && r.year == result.year)
        {
            tracing::warn!(
                "Ignoring second result for team {} in {}",
                result.team,
                result.year
            );
            return;
        }
        self.seen.insert((result.team, result.year));
        self.results.push(result);
        self.results
            .sort_by(|a, b| b.avg_score.total_cmp(&a.avg_score));
    }

    /// All results, highest average first.
    pub fn sorted_view(&self) -> &[AggregateResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Renders results as a fixed-width text table:
///
/// ```text
/// TEAM  YEAR  AVG SCORE  WIN:LOSS RATIO
/// 254   2019  35.00      1:1
/// ```
pub fn render(view: &[AggregateResult]) -> String {
    let header = format!(
        "{:<5} {:<5} {:<10} {:<7}",
        "TEAM", "YEAR", "AVG SCORE", "WIN:LOSS RATIO"
    );
    let rows = view.iter().map(|r| {
        format!(
            "{:<5} {:<5} {:<10.2} {:<7}",
            r.team,
            r.year,
            r.avg_score,
            r.w_l_ratio()
        )
    });
    std::iter::once(header)
        .chain(rows)
        .map(|line| format!("{}\n", line.trim_end()))
        .collect()
}
