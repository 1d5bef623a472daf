use askama::Template;

use crate::auth::validate::FormErrors;
use crate::models::{Event, EventInput, Person, PersonInput, SubAdmin, SubAdminInput};
use super::PageContext;

#[derive(Template)]
#[template(path = "admin.html")]
pub struct SubAdminsTemplate {
    pub ctx: PageContext,
    pub sub_admins: Vec<SubAdmin>,
    pub form: SubAdminInput,
    pub editing_id: Option<String>,
    pub errors: FormErrors,
}

#[derive(Template)]
#[template(path = "subadmin.html")]
pub struct PeopleTemplate {
    pub ctx: PageContext,
    pub people: Vec<Person>,
    pub form: PersonInput,
    pub editing_id: Option<String>,
    pub errors: FormErrors,
}

/// Attendance button for one person on one event card.
pub struct AttendeeToggle {
    pub person_id: String,
    pub name: String,
    pub present: bool,
}

pub struct EventView {
    pub event: Event,
    pub toggles: Vec<AttendeeToggle>,
}

impl EventView {
    pub fn new(event: &Event, people: &[Person]) -> Self {
        let toggles = people
            .iter()
            .map(|p| AttendeeToggle {
                person_id: p.id.clone(),
                name: p.name.clone(),
                present: event.has_attendee(&p.id),
            })
            .collect();
        Self {
            event: event.clone(),
            toggles,
        }
    }
}

#[derive(Template)]
#[template(path = "events.html")]
pub struct EventsTemplate {
    pub ctx: PageContext,
    pub events: Vec<EventView>,
    pub form: EventInput,
    pub editing_id: Option<String>,
    pub errors: FormErrors,
}
