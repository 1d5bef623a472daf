//! Turns raw form input into validated drafts. Failures come back as
//! per-field messages and leave all state untouched.

use chrono::NaiveDate;

use crate::auth::validate::{self, FormErrors};
use crate::models::event::DATE_FORMAT;
use crate::models::{
    EventDraft, EventInput, Identity, LoginInput, PersonDraft, PersonInput, ProfileInput, Role,
    SubAdminDraft, SubAdminInput,
};

const NAME_MAX: usize = 100;
const TEXT_MAX: usize = 200;
const DESCRIPTION_MAX: usize = 2000;

fn finish<T>(errors: FormErrors, value: impl FnOnce() -> T) -> Result<T, FormErrors> {
    if errors.is_empty() { Ok(value()) } else { Err(errors) }
}

pub fn sub_admin_draft(input: &SubAdminInput) -> Result<SubAdminDraft, FormErrors> {
    let mut errors = FormErrors::new();
    errors.add("name", validate::validate_required(&input.name, "Name", NAME_MAX));
    errors.add("email", validate::validate_email(&input.email));
    errors.add("role_label", validate::validate_required(&input.role_label, "Role", NAME_MAX));
    finish(errors, || SubAdminDraft {
        name: input.name.trim().to_string(),
        email: input.email.trim().to_string(),
        role_label: input.role_label.trim().to_string(),
    })
}

pub fn person_draft(input: &PersonInput) -> Result<PersonDraft, FormErrors> {
    let mut errors = FormErrors::new();
    errors.add("name", validate::validate_required(&input.name, "Name", NAME_MAX));
    errors.add("email", validate::validate_email(&input.email));
    errors.add(
        "department",
        validate::validate_required(&input.department, "Department", NAME_MAX),
    );
    finish(errors, || {
        PersonDraft::new(input.name.trim(), input.email.trim(), input.department.trim())
    })
}

pub fn event_draft(input: &EventInput) -> Result<EventDraft, FormErrors> {
    let mut errors = FormErrors::new();
    errors.add("name", validate::validate_required(&input.name, "Event name", NAME_MAX));
    errors.add("date", validate::validate_required(&input.date, "Date", TEXT_MAX));
    let date = NaiveDate::parse_from_str(input.date.trim(), DATE_FORMAT).ok();
    if date.is_none() {
        errors.add("date", Some("Date must be a valid date".to_string()));
    }
    errors.add("location", validate::validate_required(&input.location, "Location", TEXT_MAX));
    errors.add(
        "description",
        validate::validate_optional(&input.description, "Description", DESCRIPTION_MAX),
    );

    match date {
        Some(date) if errors.is_empty() => Ok(EventDraft {
            name: input.name.trim().to_string(),
            date,
            location: input.location.trim().to_string(),
            description: input.description.trim().to_string(),
        }),
        _ => Err(errors),
    }
}

/// Any well-formed identity is accepted.
pub fn login_identity(input: &LoginInput) -> Result<Identity, FormErrors> {
    let mut errors = FormErrors::new();
    errors.add("name", validate::validate_required(&input.name, "Name", NAME_MAX));
    errors.add("email", validate::validate_email(&input.email));
    let role = input.role.parse::<Role>();
    if let Err(e) = &role {
        errors.add("role", Some(e.clone()));
    }

    match role {
        Ok(role) if errors.is_empty() => Ok(Identity::new(&input.name, &input.email, role)),
        _ => Err(errors),
    }
}

/// Name and email replace the current identity's; the role never changes.
pub fn profile_update(input: &ProfileInput, current: &Identity) -> Result<Identity, FormErrors> {
    let mut errors = FormErrors::new();
    errors.add("name", validate::validate_required(&input.name, "Name", NAME_MAX));
    errors.add("email", validate::validate_email(&input.email));
    if input.current_password.is_empty() {
        errors.add("current_password", Some("Current password is required".to_string()));
    }
    errors.add("new_password", validate::validate_new_password(&input.new_password));
    errors.add(
        "confirm_password",
        validate::validate_password_match(&input.new_password, &input.confirm_password),
    );
    finish(errors, || Identity::new(&input.name, &input.email, current.role))
}
