use crate::models::{AttendanceRecord, Event, Person, SubAdmin, seed};

use super::collection::EntityCollection;

/// Everything one logged-in session can see and edit. Survives navigation
/// between screens, dropped on logout.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    pub sub_admins: EntityCollection<SubAdmin>,
    pub people: EntityCollection<Person>,
    pub events: EntityCollection<Event>,
    pub exports_generated: u32,
}

impl Workspace {
    pub fn seeded() -> Self {
        Self {
            sub_admins: EntityCollection::with_records(seed::sub_admins()),
            people: EntityCollection::with_records(seed::people()),
            events: EntityCollection::with_records(seed::events()),
            exports_generated: 0,
        }
    }

    /// Remove a person and their attendance on every event.
    pub fn remove_person(&mut self, id: &str) -> Option<Person> {
        let removed = self.people.remove(id)?;
        self.events.purge_member(id);
        Some(removed)
    }

    /// One report row per event, in event order.
    pub fn attendance_records(&self) -> Vec<AttendanceRecord> {
        self.events
            .records()
            .iter()
            .map(|e| AttendanceRecord::from_event(e, self.people.records()))
            .collect()
    }
}
