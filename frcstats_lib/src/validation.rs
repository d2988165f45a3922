//! Parsing and range checks for user-entered team numbers and years.

use chrono::{Datelike, Utc};

use crate::error::FrcStatsError;

pub const MAX_TEAM_NUMBER: u32 = 99_999;

/// First season the data source has records for.
pub const FIRST_SEASON: i32 = 1992;

fn parse_number<T: std::str::FromStr>(input: &str) -> Result<T, FrcStatsError> {
    input
        .trim()
        .parse::<T>()
        .map_err(|_| FrcStatsError::InvalidInput("That's not a number".to_string()))
}

/// Parses a team number: a positive integer up to [`MAX_TEAM_NUMBER`].
pub fn parse_team_number(input: &str) -> Result<u32, FrcStatsError> {
    let n: i64 = parse_number(input)?;
    if n < 1 || n > i64::from(MAX_TEAM_NUMBER) {
        return Err(FrcStatsError::InvalidInput(format!(
            "team number must be between 1 and {}, got {}",
            MAX_TEAM_NUMBER, n
        )));
    }
    Ok(n as u32)
}

/// Parses a season year between [`FIRST_SEASON`] and next year.
pub fn parse_year(input: &str) -> Result<i32, FrcStatsError> {
    let year: i32 = parse_number(input)?;
    let last = Utc::now().year() + 1;
    if !(FIRST_SEASON..=last).contains(&year) {
        return Err(FrcStatsError::InvalidInput(format!(
            "year must be between {} and {}, got {}",
            FIRST_SEASON, last, year
        )));
    }
    Ok(year)
}

/// Parses a `TEAM:YEAR` pair such as `254:2019`.
pub fn parse_query_pair(input: &str) -> Result<(u32, i32), FrcStatsError> {
    let (team, year) = input.split_once(':').ok_or_else(|| {
        FrcStatsError::InvalidInput(format!("expected TEAM:YEAR, got {:?}", input))
    })?;
    Ok((parse_team_number(team)?, parse_year(year)?))
}

/// `Y` or `y` means yes; anything else means no.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim(), "Y" | "y")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_number_accepts_plain_and_padded() {
        assert_eq!(parse_team_number("254").unwrap(), 254);
        assert_eq!(parse_team_number("  1114\n").unwrap(), 1114);
    }

    #[test]
    fn team_number_rejects_non_numeric() {
        let err = parse_team_number("poofs").unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: That's not a number");
        assert!(parse_team_number("").is_err());
        assert!(parse_team_number("25.4").is_err());
    }

    #[test]
    fn team_number_rejects_out_of_range() {
        assert!(parse_team_number("0").is_err());
        assert!(parse_team_number("-254").is_err());
        assert!(parse_team_number("100000").is_err());
    }

    #[test]
    fn year_range() {
        assert_eq!(parse_year("2019").unwrap(), 2019);
        assert_eq!(parse_year("1992").unwrap(), 1992);
        assert!(parse_year("1991").is_err());
        assert!(parse_year("3000").is_err());
        assert!(parse_year("twenty").is_err());
    }

    #[test]
    fn query_pair() {
        assert_eq!(parse_query_pair("254:2019").unwrap(), (254, 2019));
        assert_eq!(parse_query_pair(" 1114 : 2018 ").unwrap(), (1114, 2018));
        assert!(parse_query_pair("254").is_err());
        assert!(parse_query_pair("254:abc").is_err());
    }

    #[test]
    fn affirmative_answers() {
        assert!(is_affirmative("Y"));
        assert!(is_affirmative("y\n"));
        assert!(!is_affirmative("yes"));
        assert!(!is_affirmative("N"));
        assert!(!is_affirmative(""));
    }
}
