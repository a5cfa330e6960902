//! Display status of scheduled resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where an event stands relative to the current time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Completed,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Ongoing => "ongoing",
            EventStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EventStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upcoming" => Ok(EventStatus::Upcoming),
            "ongoing" => Ok(EventStatus::Ongoing),
            "completed" => Ok(EventStatus::Completed),
            other => Err(anyhow::anyhow!(
                "Unknown status '{}', expected upcoming, ongoing or completed",
                other
            )),
        }
    }
}

/// Derives an event's status at `now`.
///
/// A missing end means the event ends when it starts, and an end before the
/// start is clamped to the start. Both bounds are inclusive.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use contentquill::resources::{derive_status, EventStatus};
///
/// let start = Utc.with_ymd_and_hms(2026, 8, 17, 8, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2026, 8, 17, 17, 0, 0).unwrap();
/// let noon = Utc.with_ymd_and_hms(2026, 8, 17, 12, 0, 0).unwrap();
/// assert_eq!(derive_status(noon, start, Some(end)), EventStatus::Ongoing);
/// ```
pub fn derive_status(
    now: DateTime<Utc>,
    start: DateTime<Utc>,
    end: Option<DateTime<Utc>>,
) -> EventStatus {
    let end = end.map(|e| e.max(start)).unwrap_or(start);
    if now < start {
        EventStatus::Upcoming
    } else if now <= end {
        EventStatus::Ongoing
    } else {
        EventStatus::Completed
    }
}
