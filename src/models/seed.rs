//! Demo records every new workspace starts with.

use chrono::NaiveDate;
use std::collections::BTreeSet;

use super::{Event, Person, SubAdmin};

fn sub_admin(id: &str, name: &str, email: &str, role_label: &str) -> SubAdmin {
    SubAdmin {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role_label: role_label.to_string(),
    }
}

fn person(id: &str, name: &str, email: &str, department: &str) -> Person {
    Person {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        department: department.to_string(),
    }
}

fn event(
    id: &str,
    name: &str,
    (y, m, d): (i32, u32, u32),
    location: &str,
    description: &str,
    attendees: &[&str],
) -> Option<Event> {
    Some(Event {
        id: id.to_string(),
        name: name.to_string(),
        date: NaiveDate::from_ymd_opt(y, m, d)?,
        location: location.to_string(),
        description: description.to_string(),
        attendees: attendees.iter().map(|a| a.to_string()).collect::<BTreeSet<_>>(),
    })
}

pub fn sub_admins() -> Vec<SubAdmin> {
    vec![
        sub_admin("1", "John Doe", "john@example.com", "Event Manager"),
        sub_admin("2", "Jane Smith", "jane@example.com", "Attendance Tracker"),
    ]
}

pub fn people() -> Vec<Person> {
    vec![
        person("1", "Alice Johnson", "alice@example.com", "HR"),
        person("2", "Bob Williams", "bob@example.com", "IT"),
        person("3", "Charlie Brown", "charlie@example.com", "Marketing"),
        person("4", "David Smith", "david@example.com", "Finance"),
    ]
}

pub fn events() -> Vec<Event> {
    [
        event(
            "1",
            "Team Meeting",
            (2024, 3, 15),
            "Conference Room A",
            "Monthly team sync-up",
            &["1", "2"],
        ),
        event(
            "2",
            "Project Kickoff",
            (2024, 3, 20),
            "Auditorium",
            "New project launch meeting",
            &["2"],
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}
