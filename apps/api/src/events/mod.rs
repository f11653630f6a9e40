//! Events listing: filters the regional events calendar.

pub mod handlers;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    JobFair,
    Workshop,
    Webinar,
    Networking,
    OpenDay,
    CareersTalk,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub category: EventCategory,
    pub location: String,
    pub date: NaiveDate,
    pub online: bool,
    pub free: bool,
    pub summary: String,
}

/// Query-string filter. Every field is optional; an empty filter lists all
/// upcoming events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventFilter {
    pub category: Option<EventCategory>,
    pub location: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub free_only: bool,
    #[serde(default)]
    pub online_only: bool,
    pub q: Option<String>,
}

impl EventFilter {
    fn matches(&self, event: &Event, from: NaiveDate) -> bool {
        if event.date < from {
            return false;
        }
        if let Some(to) = self.to {
            if event.date > to {
                return false;
            }
        }
        if let Some(category) = self.category {
            if event.category != category {
                return false;
            }
        }
        if let Some(location) = non_blank(self.location.as_deref()) {
            if !event.location.eq_ignore_ascii_case(location) {
                return false;
            }
        }
        if self.free_only && !event.free {
            return false;
        }
        if self.online_only && !event.online {
            return false;
        }
        if let Some(q) = non_blank(self.q.as_deref()) {
            let q = q.to_lowercase();
            let hit = event.title.to_lowercase().contains(&q)
                || event.summary.to_lowercase().contains(&q);
            if !hit {
                return false;
            }
        }
        true
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Returns matching events sorted by date, then title. `today` is the default
/// lower bound when the filter carries no `from` date.
pub fn filter_events(events: &[Event], filter: &EventFilter, today: NaiveDate) -> Vec<Event> {
    let from = filter.from.unwrap_or(today);
    let mut matched: Vec<Event> = events
        .iter()
        .filter(|e| filter.matches(e, from))
        .cloned()
        .collect();
    matched.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.title.cmp(&b.title)));
    matched
}
