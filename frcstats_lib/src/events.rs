//! The events a team attended in one season, each with its matches.

use tba_api::Client;

use crate::error::FrcStatsError;
use crate::matches::{fetch_matches, MatchSet};

#[derive(Debug, Clone, PartialEq)]
pub struct EventEntry {
    pub key: String,
    pub name: String,
    /// `None` when the event's matches could not be loaded or none were played.
    pub matches: Option<MatchSet>,
}

/// Events for one (team, year) pair, in the order the source listed them.
/// Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct EventSet {
    events: Vec<EventEntry>,
}

impl EventSet {
    /// Returns `None` for an empty list.
    pub fn new(events: Vec<EventEntry>) -> Option<Self> {
        if events.is_empty() {
            return None;
        }
        Some(Self { events })
    }

    pub fn count(&self) -> usize {
        self.events.len()
    }

    pub fn name(&self, i: usize) -> &str {
        &self.events[i].name
    }

    pub fn matches_for(&self, i: usize) -> Option<&MatchSet> {
        self.events[i].matches.as_ref()
    }
}

async fn load_events(client: &Client, team_number: u32, year: i32) -> Result<EventSet, FrcStatsError> {
    let listed = client.get_team_events(team_number, year).await?;
    if listed.is_empty() {
        return Err(FrcStatsError::Empty(format!(
            "team {} participated in no events in {}",
            team_number, year
        )));
    }

    // One request per event, strictly in order.
    let mut events = Vec::with_capacity(listed.len());
    for event in listed {
        let matches = fetch_matches(client, &event.key).await;
        events.push(EventEntry {
            key: event.key,
            name: event.name,
            matches,
        });
    }

    EventSet::new(events)
        .ok_or_else(|| FrcStatsError::Empty(format!("no events for team {}", team_number)))
}

/// Fetches a team's events for `year` and eagerly loads every event's
/// matches. Returns `None` when the team attended no events, the source
/// answers with anything other than a list, or the request fails.
pub async fn fetch_events(client: &Client, team_number: u32, year: i32) -> Option<EventSet> {
    match load_events(client, team_number, year).await {
        Ok(set) => Some(set),
        Err(e) => {
            tracing::info!(
                "Error getting events for team {} in {}: {}",
                team_number,
                year,
                e
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matches::PlayedMatch;

    fn entry(name: &str, matches: Option<MatchSet>) -> EventEntry {
        EventEntry {
            key: format!("2019{}", name.to_lowercase()),
            name: name.to_string(),
            matches,
        }
    }

    #[test]
    fn empty_event_list_is_invalid() {
        assert!(EventSet::new(vec![]).is_none());
    }

    #[test]
    fn accessors() {
        let ms = MatchSet::new(
            "2019a",
            vec![PlayedMatch::new(1, (&["frc1"], 1), (&["frc2"], 2))],
        );
        let set = EventSet::new(vec![entry("A", ms), entry("B", None)]).unwrap();
        assert_eq!(set.count(), 2);
        assert_eq!(set.name(0), "A");
        assert_eq!(set.name(1), "B");
        assert_eq!(set.matches_for(0).map(|m| m.count()), Some(1));
        assert!(set.matches_for(1).is_none());
    }
}
