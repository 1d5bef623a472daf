//! `/admin`: sub-admin management, admin role only.

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
use crate::models::{Identity, SubAdmin, SubAdminInput};
use crate::store::{EntityCollection, Workspace, WorkspaceRegistry};
use crate::templates_structs::{PageContext, SubAdminsTemplate};

const VIEW: View = View::Admin;

fn sub_admins(ws: &mut Workspace) -> &mut EntityCollection<SubAdmin> {
    &mut ws.sub_admins
}

/// Render the screen from the workspace. `form` overrides the pre-fill
/// (used to echo input back after a validation failure).
fn render_page(
    session: &Session,
    identity: Identity,
    config: &AppConfig,
    registry: &WorkspaceRegistry,
    key: &str,
    form: Option<SubAdminInput>,
    errors: FormErrors,
) -> Result<HttpResponse, AppError> {
    let snap = registry.with(key, |ws| crud::snapshot::<_, SubAdminInput>(&ws.sub_admins));
    let ctx = PageContext::build(session, identity, &config.app_name, VIEW.path());
    render(SubAdminsTemplate {
        ctx,
        sub_admins: snap.records,
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

/// GET /admin/{id}/edit
pub async fn edit_form(
    config: web::Data<AppConfig>,
    registry: web::Data<WorkspaceRegistry>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let identity = require_view(&session, VIEW)?;
    let key = require_workspace_key(&session, &registry)?;
    crud::begin_edit(&registry, &key, sub_admins, &path.into_inner());
    render_page(&session, identity, &config, &registry, &key, None, FormErrors::new())
}

pub async fn submit(
    config: web::Data<AppConfig>,
    registry: web::Data<WorkspaceRegistry>,
    session: Session,
    form: web::Form<SubAdminInput>,
) -> Result<HttpResponse, AppError> {
    let (identity, key) = crud::guard_post(&session, &registry, VIEW, &form.csrf_token)?;

    match forms::sub_admin_draft(&form) {
        Ok(draft) => {
            let outcome = registry.with(&key, |ws| ws.sub_admins.submit(draft));
            set_flash(
                &session,
                crud::submitted_flash(&outcome, "Sub-admin added", "Sub-admin updated"),
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
    crud::cancel(&session, &registry, VIEW, &form.csrf_token, sub_admins)
}

pub async fn delete(
    registry: web::Data<WorkspaceRegistry>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    let (_, key) = crud::guard_post(&session, &registry, VIEW, &form.csrf_token)?;
    let id = path.into_inner();

    if let Some(removed) = registry.with(&key, |ws| ws.sub_admins.remove(&id)) {
        set_flash(&session, &format!("Removed {}", removed.name));
    }
    Ok(see_other(VIEW.path()))
}
