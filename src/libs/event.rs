use super::entity::{Draft, Patch};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(ValueEnum, Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Deadline,
    #[default]
    Event,
    Reminder,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            EventKind::Deadline => "deadline",
            EventKind::Event => "event",
            EventKind::Reminder => "reminder",
        };
        write!(f, "{}", label)
    }
}

/// Parses a wall-clock time written as `HH:MM` (seconds are accepted too).
pub fn parse_time(value: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|e| format!("invalid time '{}': {}", value, e))
}

/// `HH:MM` serde representation for event times.
mod hm_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_time(&raw).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    #[serde(with = "hm_time")]
    pub time: NaiveTime,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    #[serde(with = "hm_time")]
    pub time: NaiveTime,
    #[serde(rename = "type")]
    pub kind: EventKind,
}

impl NewEvent {
    pub fn new(title: &str, date: NaiveDate, time: NaiveTime) -> Self {
        NewEvent {
            title: title.to_string(),
            description: String::new(),
            date,
            time,
            kind: EventKind::default(),
        }
    }
}

impl Draft for NewEvent {
    type Record = CalendarEvent;

    fn into_record(self, id: String, created_at: DateTime<Utc>) -> CalendarEvent {
        CalendarEvent {
            id,
            title: self.title,
            description: self.description,
            date: self.date,
            time: self.time,
            kind: self.kind,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub kind: Option<EventKind>,
}

impl Patch for EventPatch {
    type Record = CalendarEvent;

    fn apply_to(self, event: &mut CalendarEvent) {
        if let Some(title) = self.title {
            event.title = title;
        }
        if let Some(description) = self.description {
            event.description = description;
        }
        if let Some(date) = self.date {
            event.date = date;
        }
        if let Some(time) = self.time {
            event.time = time;
        }
        if let Some(kind) = self.kind {
            event.kind = kind;
        }
    }

    fn is_empty(&self) -> bool {
        self == &EventPatch::default()
    }
}
