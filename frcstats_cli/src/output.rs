use std::io::Write;

use anyhow::Result;
use frcstats_lib::{render, AggregateResult};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    /// Fixed-width text, the default.
    Plain,
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Self {
        match s {
            "table" => Self::Table,
            "json" => Self::Json,
            "csv" => Self::Csv,
            "markdown" | "md" => Self::Markdown,
            _ => Self::Plain,
        }
    }
}

#[derive(Tabled, Serialize)]
struct LeaderboardRow {
    #[tabled(rename = "Rank")]
    #[serde(rename = "Rank")]
    rank: usize,
    #[tabled(rename = "Team")]
    #[serde(rename = "Team")]
    team: u32,
    #[tabled(rename = "Year")]
    #[serde(rename = "Year")]
    year: i32,
    #[tabled(rename = "Avg Score")]
    #[serde(rename = "Avg Score")]
    avg_score: String,
    #[tabled(rename = "Win:Loss")]
    #[serde(rename = "Win:Loss")]
    w_l_ratio: String,
    #[tabled(rename = "Matches")]
    #[serde(rename = "Matches")]
    matches: u32,
}

fn build_leaderboard_rows(results: &[AggregateResult]) -> Vec<LeaderboardRow> {
    results
        .iter()
        .enumerate()
        .map(|(i, r)| LeaderboardRow {
            rank: i + 1,
            team: r.team,
            year: r.year,
            avg_score: format!("{:.2}", r.avg_score),
            w_l_ratio: r.w_l_ratio(),
            matches: r.matches_played,
        })
        .collect()
}

/// Writes the ranked results in the requested format.
pub fn write_leaderboard<W: Write>(
    out: &mut W,
    results: &[AggregateResult],
    format: &OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Plain => write!(out, "{}", render(results))?,
        OutputFormat::Table => writeln!(out, "{}", Table::new(build_leaderboard_rows(results)))?,
        OutputFormat::Markdown => {
            let mut table = Table::new(build_leaderboard_rows(results));
            table.with(Style::markdown());
            writeln!(out, "{}", table)?;
        }
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(results)?)?,
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(&mut *out);
            for row in build_leaderboard_rows(results) {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
    }
    out.flush()?;
    Ok(())
}
