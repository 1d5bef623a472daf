//! Pieces shared by the sub-admin, people and event screens. Each screen
//! names its collection with a [`Pick`] and keeps only its own template,
//! validation and flash wording.

use actix_session::Session;
use actix_web::HttpResponse;

use crate::auth::csrf;
use crate::auth::guard::{View, require_view};
use crate::auth::session::require_workspace_key;
use crate::errors::{AppError, see_other};
use crate::models::Identity;
use crate::store::{EntityCollection, Record, Submitted, Workspace, WorkspaceRegistry};

/// Selects one collection out of a workspace.
pub type Pick<R> = fn(&mut Workspace) -> &mut EntityCollection<R>;

/// What a screen renders from its collection.
pub struct Snapshot<R, I> {
    pub records: Vec<R>,
    pub editing_id: Option<String>,
    /// Form fields of the edit target, or blank when idle.
    pub prefill: I,
}

pub fn snapshot<R, I>(collection: &EntityCollection<R>) -> Snapshot<R, I>
where
    R: Record,
    I: Default + for<'a> From<&'a R>,
{
    Snapshot {
        records: collection.records().to_vec(),
        editing_id: collection.editing_id().map(String::from),
        prefill: collection.editing().map(I::from).unwrap_or_default(),
    }
}

/// Role check, CSRF check and workspace lookup for a form POST.
pub fn guard_post(
    session: &Session,
    registry: &WorkspaceRegistry,
    view: View,
    csrf_token: &str,
) -> Result<(Identity, String), AppError> {
    let identity = require_view(session, view)?;
    csrf::validate_csrf(session, csrf_token)?;
    let key = require_workspace_key(session, registry)?;
    Ok((identity, key))
}

/// Point the form at `id`. Unknown ids are ignored.
pub fn begin_edit<R: Record>(registry: &WorkspaceRegistry, key: &str, pick: Pick<R>, id: &str) {
    if !registry.with(key, |ws| pick(ws).begin_edit(id)) {
        log::debug!("Ignoring edit of unknown {} '{}'", R::KIND, id);
    }
}

/// POST `<view>/cancel`: drop the edit target and go back to the list.
pub fn cancel<R: Record>(
    session: &Session,
    registry: &WorkspaceRegistry,
    view: View,
    csrf_token: &str,
    pick: Pick<R>,
) -> Result<HttpResponse, AppError> {
    let (_, key) = guard_post(session, registry, view, csrf_token)?;
    registry.with(&key, |ws| pick(ws).cancel_edit());
    Ok(see_other(view.path()))
}

/// Flash text for a successful submit.
pub fn submitted_flash<'a>(outcome: &Submitted, created: &'a str, updated: &'a str) -> &'a str {
    match outcome {
        Submitted::Created(_) => created,
        Submitted::Updated(_) => updated,
    }
}
