//! `/events`: event management and attendance toggles, any role.

use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::auth::guard::{View, require_view};
use crate::auth::session::{require_workspace_key, set_flash};
use crate::auth::validate::FormErrors;
use crate::config::AppConfig;
use crate::errors::{AppError, render, see_other};
use crate::handlers::auth_handlers::CsrfOnly;
use crate::handlers::{crud, forms};
use crate::models::{Event, EventInput, Identity};
use crate::store::{EntityCollection, Workspace, WorkspaceRegistry};
use crate::templates_structs::{EventView, EventsTemplate, PageContext};

const VIEW: View = View::Events;

fn events(ws: &mut Workspace) -> &mut EntityCollection<Event> {
    &mut ws.events
}

fn render_page(
    session: &Session,
    identity: Identity,
    config: &AppConfig,
    registry: &WorkspaceRegistry,
    key: &str,
    form: Option<EventInput>,
    errors: FormErrors,
) -> Result<HttpResponse, AppError> {
    let (snap, events) = registry.with(key, |ws| {
        let snap = crud::snapshot::<_, EventInput>(&ws.events);
        let people = ws.people.records();
        let events: Vec<EventView> = snap.records.iter().map(|e| EventView::new(e, people)).collect();
        (snap, events)
    });
    let ctx = PageContext::build(session, identity, &config.app_name, VIEW.path());
    render(EventsTemplate {
        ctx,
        events,
        form: form.unwrap_or(snap.prefill),
        editing_id: snap.editing_id,
        errors,
    })
}

pub async fn list(
    config: web::Data<AppConfig>,
    registry: web::Data<WorkspaceRegistry>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let identity = require_view(&session, VIEW)?;
    let key = require_workspace_key(&session, &registry)?;
    render_page(&session, identity, &config, &registry, &key, None, FormErrors::new())
}

pub async fn edit_form(
    config: web::Data<AppConfig>,
    registry: web::Data<WorkspaceRegistry>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let identity = require_view(&session, VIEW)?;
    let key = require_workspace_key(&session, &registry)?;
    crud::begin_edit(&registry, &key, events, &path.into_inner());
    render_page(&session, identity, &config, &registry, &key, None, FormErrors::new())
}

pub async fn submit(
    config: web::Data<AppConfig>,
    registry: web::Data<WorkspaceRegistry>,
    session: Session,
    form: web::Form<EventInput>,
) -> Result<HttpResponse, AppError> {
    let (identity, key) = crud::guard_post(&session, &registry, VIEW, &form.csrf_token)?;

    match forms::event_draft(&form) {
        Ok(draft) => {
            let outcome = registry.with(&key, |ws| ws.events.submit(draft));
            set_flash(
                &session,
                crud::submitted_flash(&outcome, "Event created", "Event updated"),
            );
            Ok(see_other(VIEW.path()))
        }
        Err(errors) => {
            let input = form.into_inner();
            render_page(&session, identity, &config, &registry, &key, Some(input), errors)
        }
    }
}

pub async fn cancel(
    registry: web::Data<WorkspaceRegistry>,
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    crud::cancel(&session, &registry, VIEW, &form.csrf_token, events)
}

pub async fn delete(
    registry: web::Data<WorkspaceRegistry>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    let (_, key) = crud::guard_post(&session, &registry, VIEW, &form.csrf_token)?;
    let id = path.into_inner();

    if let Some(removed) = registry.with(&key, |ws| ws.events.remove(&id)) {
        set_flash(&session, &format!("Deleted {}", removed.name));
    }
    Ok(see_other(VIEW.path()))
}

/// POST /events/{id}/attendees/{person_id}: flip one person's attendance.
pub async fn toggle_attendee(
    registry: web::Data<WorkspaceRegistry>,
    session: Session,
    path: web::Path<(String, String)>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    let (_, key) = crud::guard_post(&session, &registry, VIEW, &form.csrf_token)?;
    let (event_id, person_id) = path.into_inner();

    let toggled = registry.with(&key, |ws| {
        if ws.people.get(&person_id).is_none() {
            return None;
        }
        ws.events.toggle_membership(&event_id, &person_id)
    });
    match toggled {
        Some(present) => log::info!(
            "Person '{person_id}' {} event '{event_id}'",
            if present { "added to" } else { "removed from" }
        ),
        None => return Err(AppError::NotFound),
    }
    Ok(see_other(VIEW.path()))
}
