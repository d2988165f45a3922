//! Team lookup.

use serde::Serialize;
use tba_api::Client;

use crate::error::FrcStatsError;

/// A team as resolved by the data source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Team {
    pub number: u32,
    pub name: String,
    /// The source's canonical key, e.g. `frc254`. Alliances list teams by key.
    pub key: String,
}

impl Team {
    pub fn new(number: u32, name: &str, key: &str) -> Self {
        Self {
            number,
            name: name.to_string(),
            key: key.to_string(),
        }
    }

    /// Converts an API record for the team that was asked for. The number
    /// comes from the query, since not every response carries one. A record
    /// without a name is incomplete.
    pub fn from_api(team_number: u32, t: tba_api::types::Team) -> Result<Self, FrcStatsError> {
        let name = t.display_name().ok_or_else(|| {
            FrcStatsError::Incomplete(format!("team {} has no name", t.key))
        })?;
        Ok(Self::new(team_number, name, &t.key))
    }
}

async fn load_team(client: &Client, team_number: u32) -> Result<Team, FrcStatsError> {
    let team = client.get_team(team_number).await?;
    Team::from_api(team_number, team)
}

/// Resolves a team number. Returns `None` when the team does not exist or
/// the lookup fails for any reason; the cause is logged.
pub async fn fetch_team(client: &Client, team_number: u32) -> Option<Team> {
    match load_team(client, team_number).await {
        Ok(team) => Some(team),
        Err(e) => {
            tracing::info!(
                "Error getting data for team {} or team does not exist: {}",
                team_number,
                e
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_team(
        team_number: Option<u32>,
        nickname: Option<&str>,
        name: Option<&str>,
    ) -> tba_api::types::Team {
        tba_api::types::Team {
            key: "frc254".to_string(),
            team_number,
            nickname: nickname.map(str::to_string),
            name: name.map(str::to_string),
            city: None,
            state_prov: None,
            country: None,
            rookie_year: None,
        }
    }

    #[test]
    fn from_api_uses_queried_number() {
        let team = Team::from_api(254, api_team(None, None, Some("NASA Ames"))).unwrap();
        assert_eq!(team, Team::new(254, "NASA Ames", "frc254"));
    }

    #[test]
    fn from_api_prefers_nickname() {
        let api = api_team(Some(254), Some("The Cheesy Poofs"), Some("NASA Ames"));
        let team = Team::from_api(254, api).unwrap();
        assert_eq!(team.name, "The Cheesy Poofs");
    }

    #[test]
    fn from_api_without_name_is_incomplete() {
        let err = Team::from_api(254, api_team(Some(254), None, None)).unwrap_err();
        assert!(matches!(err, FrcStatsError::Incomplete(_)));
    }
}
