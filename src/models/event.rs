use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeSet;

use crate::store::{Membership, Record};

/// Date format used by the `<input type="date">` field and the CSV export.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
    pub location: String,
    pub description: String,
    /// Person ids. Only changed through [`Membership`], never by the edit form.
    pub attendees: BTreeSet<String>,
}

impl Event {
    pub fn has_attendee(&self, person_id: &str) -> bool {
        self.attendees.contains(person_id)
    }

    /// ISO date, e.g. "2024-03-15".
    pub fn date_iso(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// Long date, e.g. "March 15, 2024".
    pub fn date_long(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub name: String,
    pub date: NaiveDate,
    pub location: String,
    pub description: String,
}

/// Raw form data from the event form. The date stays a string until validated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub csrf_token: String,
}

impl From<&Event> for EventInput {
    fn from(e: &Event) -> Self {
        Self {
            name: e.name.clone(),
            date: e.date_iso(),
            location: e.location.clone(),
            description: e.description.clone(),
            csrf_token: String::new(),
        }
    }
}

impl Record for Event {
    type Draft = EventDraft;
    const KIND: &'static str = "event";

    fn id(&self) -> &str {
        &self.id
    }

    /// New events start with nobody attending.
    fn from_draft(id: String, draft: EventDraft) -> Self {
        Self {
            id,
            name: draft.name,
            date: draft.date,
            location: draft.location,
            description: draft.description,
            attendees: BTreeSet::new(),
        }
    }

    fn apply_draft(&mut self, draft: EventDraft) {
        self.name = draft.name;
        self.date = draft.date;
        self.location = draft.location;
        self.description = draft.description;
    }
}

impl Membership for Event {
    fn members_mut(&mut self) -> &mut BTreeSet<String> {
        &mut self.attendees
    }
}
