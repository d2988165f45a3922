//! Event records returned by `/team/{team_key}/events/{year}`.

use serde::{Deserialize, Serialize};

/// Canonical string key for an event, e.g. `2019cars`.
pub type EventKey = String;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Event {
    pub key: EventKey,
    pub name: String,
    pub short_name: Option<String>,
    pub event_code: Option<String>,
    pub year: Option<i32>,
    pub city: Option<String>,
    /// ISO date string as sent by the API (`YYYY-MM-DD`).
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}
