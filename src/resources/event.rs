//! Village events and an in-memory event source.

use super::controller::ResourceSource;
use super::query::{Page, ResourceQuery};
use super::status::{derive_status, EventStatus};
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An event record as the events endpoint returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub location: String,
    pub start_date: DateTime<Utc>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
}

impl Event {
    pub fn status_at(&self, now: DateTime<Utc>) -> EventStatus {
        derive_status(now, self.start_date, self.end_date)
    }

    fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        [&self.title, &self.description, &self.location]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// An event together with its status at listing time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventListing {
    #[serde(flatten)]
    pub event: Event,
    pub status: EventStatus,
}

/// Serves event lists from memory, evaluating status against a fixed clock.
#[derive(Debug, Clone)]
pub struct EventCatalog {
    events: Vec<Event>,
    now: DateTime<Utc>,
}

impl EventCatalog {
    pub fn new(events: Vec<Event>, now: DateTime<Utc>) -> Self {
        Self { events, now }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl ResourceSource<EventListing> for EventCatalog {
    fn fetch(&self, query: &ResourceQuery) -> Result<Page<EventListing>> {
        let search = query.search_term();
        let category = query.category_filter();

        let matching: Vec<EventListing> = self
            .events
            .iter()
            .filter(|event| search.map_or(true, |s| event.matches_search(s)))
            .filter(|event| category.map_or(true, |c| event.category.eq_ignore_ascii_case(c)))
            .map(|event| EventListing {
                status: event.status_at(self.now),
                event: event.clone(),
            })
            .filter(|listing| query.status.map_or(true, |s| listing.status == s))
            .collect();

        let per_page = query.per_page.max(1);
        let page = query.page.max(1);
        let total = matching.len();
        let items = matching
            .into_iter()
            .skip((page as usize - 1) * per_page as usize)
            .take(per_page as usize)
            .collect();

        Ok(Page {
            items,
            page,
            per_page,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event(id: i64, title: &str, category: &str, start_day: u32, end_day: Option<u32>) -> Event {
        Event {
            id,
            title: title.to_string(),
            description: String::new(),
            category: category.to_string(),
            location: "Balai Desa".to_string(),
            start_date: Utc.with_ymd_and_hms(2026, 10, start_day, 8, 0, 0).unwrap(),
            end_date: end_day.map(|d| Utc.with_ymd_and_hms(2026, 10, d, 17, 0, 0).unwrap()),
        }
    }

    fn catalog() -> EventCatalog {
        let now = Utc.with_ymd_and_hms(2026, 10, 15, 12, 0, 0).unwrap();
        EventCatalog::new(
            vec![
                event(1, "Festival Panen", "budaya", 1, Some(2)),
                event(2, "Pasar UMKM", "ekonomi", 14, Some(16)),
                event(3, "Lomba Perahu", "olahraga", 20, None),
                event(4, "Tari Tradisional", "Budaya", 25, Some(26)),
            ],
            now,
        )
    }

    #[test]
    fn test_status_filter() {
        let query = ResourceQuery {
            status: Some(EventStatus::Upcoming),
            ..ResourceQuery::default()
        };
        let page = catalog().fetch(&query).unwrap();
        let ids: Vec<i64> = page.items.iter().map(|l| l.event.id).collect();
        assert_eq!(ids, vec![3, 4]);
        assert_eq!(page.total, 2);
    }

    #[test]
    fn test_category_ignores_case() {
        let query = ResourceQuery {
            category: Some("BUDAYA".to_string()),
            ..ResourceQuery::default()
        };
        let page = catalog().fetch(&query).unwrap();
        assert_eq!(page.total, 2);
    }

    #[test]
    fn test_search_matches_location_and_title() {
        let query = ResourceQuery {
            search: Some("perahu".to_string()),
            ..ResourceQuery::default()
        };
        assert_eq!(catalog().fetch(&query).unwrap().total, 1);

        let query = ResourceQuery {
            search: Some("balai".to_string()),
            ..ResourceQuery::default()
        };
        assert_eq!(catalog().fetch(&query).unwrap().total, 4);
    }

    #[test]
    fn test_pagination_slices() {
        let query = ResourceQuery {
            page: 2,
            per_page: 3,
            ..ResourceQuery::default()
        };
        let page = catalog().fetch(&query).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].event.id, 4);
        assert_eq!(page.total_pages(), 2);
    }

    #[test]
    fn test_listing_status_is_derived() {
        let page = catalog().fetch(&ResourceQuery::default()).unwrap();
        let statuses: Vec<EventStatus> = page.items.iter().map(|l| l.status).collect();
        assert_eq!(
            statuses,
            vec![
                EventStatus::Completed,
                EventStatus::Ongoing,
                EventStatus::Upcoming,
                EventStatus::Upcoming
            ]
        );
    }

    #[test]
    fn test_event_json_shape() {
        let event: Event = serde_json::from_str(
            r#"{"id": 7, "title": "Bersih Desa", "startDate": "2026-11-01T07:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(event.category, "");
        assert!(event.end_date.is_none());
    }
}
