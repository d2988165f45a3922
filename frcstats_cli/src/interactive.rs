//! Prompt loop and batch runner.

use std::io::{BufRead, Write};

use anyhow::Result;
use frcstats_lib::validation::{is_affirmative, parse_team_number, parse_year};
use frcstats_lib::{Client, FrcStatsError, QueryOutcome, Session};

use crate::output::{write_leaderboard, OutputFormat};

const TEAM_PROMPT: &str = "Enter a valid team number: ";
const YEAR_PROMPT: &str = "Enter the year you want to get the data from: ";
const AGAIN_PROMPT: &str = "Again? [Y/N]: ";

/// Prompts until `parse` accepts a line. Returns `None` at end of input.
fn prompt_until<R, W, T, F>(input: &mut R, out: &mut W, prompt: &str, parse: F) -> Result<Option<T>>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Result<T, FrcStatsError>,
{
    loop {
        let Some(line) = read_line(input, out, prompt)? else {
            return Ok(None);
        };
        match parse(&line) {
            Ok(value) => return Ok(Some(value)),
            Err(FrcStatsError::InvalidInput(msg)) => writeln!(out, "{}", msg)?,
            Err(e) => writeln!(out, "{}", e)?,
        }
    }
}

fn read_line<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<Option<String>> {
    write!(out, "{}", prompt)?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Runs the interactive session: team, year, leaderboard, repeat while the
/// user answers `Y`. End of input also stops the loop.
pub async fn run_interactive<R: BufRead, W: Write>(
    session: &mut Session,
    client: &Client,
    format: &OutputFormat,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    loop {
        let Some(team) = prompt_until(input, out, TEAM_PROMPT, parse_team_number)? else {
            break;
        };
        let Some(year) = prompt_until(input, out, YEAR_PROMPT, parse_year)? else {
            break;
        };

        match session.submit(client, team, year).await {
            QueryOutcome::Duplicate => {
                writeln!(out, "You've already seen the stats for {} in {}", team, year)?
            }
            QueryOutcome::NoData => {}
            QueryOutcome::Added(_) => {
                write_leaderboard(out, session.leaderboard().sorted_view(), format)?
            }
        }

        match read_line(input, out, AGAIN_PROMPT)? {
            Some(answer) if is_affirmative(&answer) => continue,
            _ => break,
        }
    }
    Ok(())
}

/// Runs every query in order without prompting, then prints the
/// leaderboard once.
pub async fn run_batch<W: Write>(
    session: &mut Session,
    client: &Client,
    format: &OutputFormat,
    queries: &[(u32, i32)],
    out: &mut W,
) -> Result<()> {
    for &(team, year) in queries {
        if let QueryOutcome::Added(result) = session.submit(client, team, year).await {
            tracing::info!(
                "Team {} in {}: avg {:.2}, {}",
                team,
                year,
                result.avg_score,
                result.w_l_ratio()
            );
        }
    }
    write_leaderboard(out, session.leaderboard().sorted_view(), format)
}
