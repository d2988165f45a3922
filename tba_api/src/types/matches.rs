//! Match records returned by `/event/{event_key}/matches`.

use serde::{Deserialize, Serialize};

use super::TeamKey;

/// One side of a match.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Alliance {
    /// Team keys on this alliance. Older responses call this field `teams`.
    #[serde(alias = "teams", default)]
    pub team_keys: Vec<TeamKey>,
    /// Final score. The API reports `-1` (or null) for matches not yet played.
    pub score: Option<i32>,
}

impl Alliance {
    pub fn contains(&self, team_key: &str) -> bool {
        self.team_keys.iter().any(|k| k == team_key)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Alliances {
    pub red: Alliance,
    pub blue: Alliance,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AllianceColor {
    Red,
    Blue,
}

impl AllianceColor {
    pub fn opponent(self) -> Self {
        match self {
            Self::Red => Self::Blue,
            Self::Blue => Self::Red,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Match {
    pub key: Option<String>,
    /// Competition level: `qm`, `ef`, `qf`, `sf` or `f`.
    pub comp_level: Option<String>,
    pub set_number: Option<u32>,
    pub match_number: u32,
    pub alliances: Alliances,
}

impl Match {
    pub fn alliance(&self, color: AllianceColor) -> &Alliance {
        match color {
            AllianceColor::Red => &self.alliances.red,
            AllianceColor::Blue => &self.alliances.blue,
        }
    }

    /// Returns the color of the alliance containing `team_key`. Blue is
    /// checked first.
    pub fn color_of(&self, team_key: &str) -> Option<AllianceColor> {
        if self.alliances.blue.contains(team_key) {
            Some(AllianceColor::Blue)
        } else if self.alliances.red.contains(team_key) {
            Some(AllianceColor::Red)
        } else {
            None
        }
    }
}
