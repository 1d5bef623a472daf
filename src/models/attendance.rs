use chrono::NaiveDate;

use super::event::{DATE_FORMAT, Event};
use super::person::Person;

/// Read-only attendance row for the report view and CSV export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub event_id: String,
    pub event_name: String,
    pub date: NaiveDate,
    pub attendees: Vec<String>,
}

impl AttendanceRecord {
    /// Resolve an event's attendee ids to names, in `people` order.
    /// Ids that no longer match a person are skipped.
    pub fn from_event(event: &Event, people: &[Person]) -> Self {
        let attendees = people
            .iter()
            .filter(|p| event.has_attendee(&p.id))
            .map(|p| p.name.clone())
            .collect();
        Self {
            event_id: event.id.clone(),
            event_name: event.name.clone(),
            date: event.date,
            attendees,
        }
    }

    pub fn date_iso(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    pub fn date_long(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }
}
