use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventStatus {
    #[default]
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
    /// Any status string this build does not know about. Keeps one odd entry
    /// from making the whole stored catalog undecodable.
    #[serde(other)]
    Unknown,
}

/// An event as it is persisted under the `events` key.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub date: NaiveDate,
    pub venue: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub registrations: u32,
    #[serde(default)]
    pub status: EventStatus,
}

impl Event {
    pub fn is_upcoming(&self) -> bool {
        self.status == EventStatus::Upcoming
    }
}

/// An event together with the per-device `registered` flag.
/// The flag is recomputed on every load and never written back.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct EventView {
    #[serde(flatten)]
    pub event: Event,
    pub registered: bool,
}
