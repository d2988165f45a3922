//! Per-event match sets and the score/win queries made against them.

use tba_api::types::{Alliance, AllianceColor, Match};
use tba_api::Client;

use crate::error::FrcStatsError;
use crate::team::Team;

/// One alliance of a played match.
#[derive(Debug, Clone, PartialEq)]
pub struct Side {
    pub team_keys: Vec<String>,
    pub score: u32,
}

impl Side {
    fn from_alliance(alliance: Alliance) -> Option<Self> {
        let score = u32::try_from(alliance.score?).ok()?;
        Some(Self {
            team_keys: alliance.team_keys,
            score,
        })
    }

    fn contains(&self, team_key: &str) -> bool {
        self.team_keys.iter().any(|k| k == team_key)
    }
}

/// A match with final scores on both sides.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayedMatch {
    pub match_number: u32,
    pub comp_level: Option<String>,
    pub red: Side,
    pub blue: Side,
}

impl PlayedMatch {
    pub fn new(match_number: u32, red: (&[&str], u32), blue: (&[&str], u32)) -> Self {
        let side = |(keys, score): (&[&str], u32)| Side {
            team_keys: keys.iter().map(|k| k.to_string()).collect(),
            score,
        };
        Self {
            match_number,
            comp_level: None,
            red: side(red),
            blue: side(blue),
        }
    }

    /// Converts an API match. Matches without a non-negative score on both
    /// sides have not been played and yield `None`.
    pub fn from_api(m: Match) -> Option<Self> {
        Some(Self {
            match_number: m.match_number,
            comp_level: m.comp_level,
            red: Side::from_alliance(m.alliances.red)?,
            blue: Side::from_alliance(m.alliances.blue)?,
        })
    }

    fn side(&self, color: AllianceColor) -> &Side {
        match color {
            AllianceColor::Red => &self.red,
            AllianceColor::Blue => &self.blue,
        }
    }

    /// Blue is checked before red.
    fn color_of(&self, team_key: &str) -> Option<AllianceColor> {
        if self.blue.contains(team_key) {
            Some(AllianceColor::Blue)
        } else if self.red.contains(team_key) {
            Some(AllianceColor::Red)
        } else {
            None
        }
    }
}

/// The played matches of one event. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchSet {
    event_key: String,
    matches: Vec<PlayedMatch>,
}

impl MatchSet {
    /// Builds a set from already-played matches. Returns `None` for an empty list.
    pub fn new(event_key: &str, matches: Vec<PlayedMatch>) -> Option<Self> {
        if matches.is_empty() {
            return None;
        }
        Some(Self {
            event_key: event_key.to_string(),
            matches,
        })
    }

    pub fn event_key(&self) -> &str {
        &self.event_key
    }

    pub fn count(&self) -> usize {
        self.matches.len()
    }

    pub fn match_number(&self, i: usize) -> u32 {
        self.matches[i].match_number
    }

    /// The score of the alliance `team` played on in match `i`, or `None`
    /// if the team was on neither alliance.
    pub fn score_for(&self, i: usize, team: &Team) -> Option<u32> {
        let m = &self.matches[i];
        m.color_of(&team.key).map(|color| m.side(color).score)
    }

    /// Whether `team`'s alliance outscored the other one in match `i`.
    /// A tie is a loss for both sides.
    ///
    /// # Panics
    ///
    /// Panics if `team` did not play in the match; check
    /// [`MatchSet::score_for`] first.
    pub fn did_win(&self, i: usize, team: &Team) -> bool {
        let m = &self.matches[i];
        let color = match m.color_of(&team.key) {
            Some(color) => color,
            None => panic!(
                "did_win called for {} which is not in match {} of {}",
                team.key, m.match_number, self.event_key
            ),
        };
        m.side(color).score > m.side(color.opponent()).score
    }
}

async fn load_matches(client: &Client, event_key: &str) -> Result<MatchSet, FrcStatsError> {
    let raw = client.get_event_matches(event_key).await?;
    let played: Vec<PlayedMatch> = raw.into_iter().filter_map(PlayedMatch::from_api).collect();
    MatchSet::new(event_key, played)
        .ok_or_else(|| FrcStatsError::Empty(format!("no played matches at {}", event_key)))
}

/// Fetches the matches of an event. Returns `None` when the request fails,
/// the response is malformed, or no match has been played.
pub async fn fetch_matches(client: &Client, event_key: &str) -> Option<MatchSet> {
    match load_matches(client, event_key).await {
        Ok(set) => Some(set),
        Err(e) => {
            tracing::info!("Skipping matches for event {}: {}", event_key, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tba_api::types::Alliances;

    fn team(key: &str) -> Team {
        Team::new(0, "Test", key)
    }

    fn set(matches: Vec<PlayedMatch>) -> MatchSet {
        MatchSet::new("2019test", matches).unwrap()
    }

    #[test]
    fn score_for_returns_own_alliance_score() {
        let s = set(vec![PlayedMatch::new(
            1,
            (&["frc1", "frc2", "frc3"], 30),
            (&["frc4", "frc5", "frc6"], 50),
        )]);
        assert_eq!(s.score_for(0, &team("frc2")), Some(30));
        assert_eq!(s.score_for(0, &team("frc6")), Some(50));
    }

    #[test]
    fn score_for_absent_team_is_none() {
        let s = set(vec![PlayedMatch::new(1, (&["frc1"], 30), (&["frc4"], 50))]);
        assert_eq!(s.score_for(0, &team("frc254")), None);
    }

    #[test]
    fn zero_score_is_still_participation() {
        let s = set(vec![PlayedMatch::new(1, (&["frc1"], 0), (&["frc4"], 12))]);
        assert_eq!(s.score_for(0, &team("frc1")), Some(0));
        assert!(!s.did_win(0, &team("frc1")));
        assert!(s.did_win(0, &team("frc4")));
    }

    #[test]
    fn tie_is_a_loss_for_both() {
        let s = set(vec![PlayedMatch::new(3, (&["frc1"], 20), (&["frc4"], 20))]);
        assert!(!s.did_win(0, &team("frc1")));
        assert!(!s.did_win(0, &team("frc4")));
    }

    #[test]
    fn strict_win() {
        let s = set(vec![PlayedMatch::new(3, (&["frc1"], 21), (&["frc4"], 20))]);
        assert!(s.did_win(0, &team("frc1")));
        assert!(!s.did_win(0, &team("frc4")));
    }

    #[test]
    #[should_panic(expected = "not in match")]
    fn did_win_panics_for_non_participant() {
        let s = set(vec![PlayedMatch::new(1, (&["frc1"], 30), (&["frc4"], 50))]);
        s.did_win(0, &team("frc254"));
    }

    #[test]
    fn count_and_match_number() {
        let s = set(vec![
            PlayedMatch::new(4, (&["frc1"], 1), (&["frc2"], 2)),
            PlayedMatch::new(9, (&["frc1"], 1), (&["frc2"], 2)),
        ]);
        assert_eq!(s.count(), 2);
        assert_eq!(s.match_number(1), 9);
        assert_eq!(s.event_key(), "2019test");
    }

    #[test]
    fn empty_set_is_invalid() {
        assert!(MatchSet::new("2019test", vec![]).is_none());
    }

    #[test]
    fn unplayed_api_match_is_dropped() {
        let api = |red: Option<i32>, blue: Option<i32>| Match {
            key: None,
            comp_level: Some("qm".to_string()),
            set_number: Some(1),
            match_number: 1,
            alliances: Alliances {
                red: Alliance {
                    team_keys: vec!["frc1".to_string()],
                    score: red,
                },
                blue: Alliance {
                    team_keys: vec!["frc2".to_string()],
                    score: blue,
                },
            },
        };
        assert!(PlayedMatch::from_api(api(Some(-1), Some(-1))).is_none());
        assert!(PlayedMatch::from_api(api(None, Some(10))).is_none());
        let played = PlayedMatch::from_api(api(Some(5), Some(10))).unwrap();
        assert_eq!(played.red.score, 5);
        assert_eq!(played.comp_level.as_deref(), Some("qm"));
    }
}
