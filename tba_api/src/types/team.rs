//! Team records returned by `/team/{team_key}`.

use serde::{Deserialize, Serialize};

/// Canonical string key for a team, e.g. `frc254`.
pub type TeamKey = String;

/// Team record. Only `key` is always present; which name fields and
/// whether `team_number` are sent varies between API versions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Team {
    pub key: TeamKey,
    pub team_number: Option<u32>,
    /// Short display name, e.g. "The Cheesy Poofs".
    pub nickname: Option<String>,
    /// Full sponsor name. Older responses only carry this field.
    pub name: Option<String>,
    pub city: Option<String>,
    pub state_prov: Option<String>,
    pub country: Option<String>,
    pub rookie_year: Option<i32>,
}

impl Team {
    /// Returns the name to show to a user: the nickname when present,
    /// otherwise the full name. Blank names count as missing.
    pub fn display_name(&self) -> Option<&str> {
        [self.nickname.as_deref(), self.name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|n| !n.is_empty())
    }

    /// Builds the key the API uses for a team number.
    pub fn key_for(team_number: u32) -> TeamKey {
        format!("frc{}", team_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(nickname: Option<&str>, name: Option<&str>) -> Team {
        Team {
            key: "frc254".to_string(),
            team_number: Some(254),
            nickname: nickname.map(str::to_string),
            name: name.map(str::to_string),
            city: None,
            state_prov: None,
            country: None,
            rookie_year: None,
        }
    }

    #[test]
    fn display_name_prefers_nickname() {
        assert_eq!(team(Some("Poofs"), Some("NASA Ames")).display_name(), Some("Poofs"));
    }

    #[test]
    fn display_name_falls_back_to_name() {
        assert_eq!(team(None, Some("NASA Ames")).display_name(), Some("NASA Ames"));
        assert_eq!(team(Some(""), Some("NASA Ames")).display_name(), Some("NASA Ames"));
    }

    #[test]
    fn display_name_missing_without_name_fields() {
        assert_eq!(team(None, None).display_name(), None);
        assert_eq!(team(Some("  "), None).display_name(), None);
    }

    #[test]
    fn key_for_prefixes_frc() {
        assert_eq!(Team::key_for(1114), "frc1114");
    }
}
