//! `/subadmin`: people management, sub-admin role only.

use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::auth::guard::{View, require_view};
use crate::auth::session::{require_workspace_key, set_flash};
use crate::auth::validate::FormErrors;
use crate::config::AppConfig;
use crate::errors::{AppError, render, see_other};
use crate::handlers::auth_handlers::CsrfOnly;
use crate::handlers::crud;
use crate::handlers::forms;
use crate::models::{Identity, Person, PersonInput};
use crate::store::{EntityCollection, Workspace, WorkspaceRegistry};
use crate::templates_structs::{PageContext, PeopleTemplate};

const VIEW: View = View::SubAdmin;

fn people(ws: &mut Workspace) -> &mut EntityCollection<Person> {
    &mut ws.people
}

/// Render the screen from the workspace. `form` overrides the pre-fill
/// (used to echo input back after a validation failure).
fn render_page(
    session: &Session,
    identity: Identity,
    config: &AppConfig,
    registry: &WorkspaceRegistry,
    key: &str,
    form: Option<PersonInput>,
    errors: FormErrors,
) -> Result<HttpResponse, AppError> {
    let snap = registry.with(key, |ws| crud::snapshot::<_, PersonInput>(&ws.people));
    let ctx = PageContext::build(session, identity, &config.app_name, VIEW.path());
    render(PeopleTemplate {
        ctx,
        people: snap.records,
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

/// GET /subadmin/{id}/edit
pub async fn edit_form(
    config: web::Data<AppConfig>,
    registry: web::Data<WorkspaceRegistry>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let identity = require_view(&session, VIEW)?;
    let key = require_workspace_key(&session, &registry)?;
    crud::begin_edit(&registry, &key, people, &path.into_inner());
    render_page(&session, identity, &config, &registry, &key, None, FormErrors::new())
}

pub async fn submit(
    config: web::Data<AppConfig>,
    registry: web::Data<WorkspaceRegistry>,
    session: Session,
    form: web::Form<PersonInput>,
) -> Result<HttpResponse, AppError> {
    let (identity, key) = crud::guard_post(&session, &registry, VIEW, &form.csrf_token)?;

    match forms::person_draft(&form) {
        Ok(draft) => {
            let outcome = registry.with(&key, |ws| ws.people.submit(draft));
            set_flash(
                &session,
                crud::submitted_flash(&outcome, "Person added", "Person updated"),
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
    crud::cancel(&session, &registry, VIEW, &form.csrf_token, people)
}

pub async fn delete(
    registry: web::Data<WorkspaceRegistry>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    let (_, key) = crud::guard_post(&session, &registry, VIEW, &form.csrf_token)?;
    let id = path.into_inner();

    // also drops the person from every event's attendees
    if let Some(removed) = registry.with(&key, |ws| ws.remove_person(&id)) {
        set_flash(&session, &format!("Removed {}", removed.name));
    }
    Ok(see_other(VIEW.path()))
}
