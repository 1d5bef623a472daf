use actix_session::Session;

use crate::errors::AppError;
use crate::models::Identity;
use crate::store::WorkspaceRegistry;

const IDENTITY_KEY: &str = "identity";
const WORKSPACE_KEY: &str = "workspace";
const FLASH_KEY: &str = "flash";

/// The current identity. Missing or unreadable means logged out.
pub fn current_identity(session: &Session) -> Option<Identity> {
    session.get::<Identity>(IDENTITY_KEY).unwrap_or(None)
}

/// Start a session for `identity` with a freshly seeded workspace.
pub fn login(
    session: &Session,
    registry: &WorkspaceRegistry,
    identity: &Identity,
) -> Result<(), AppError> {
    if let Some(old) = workspace_key(session) {
        registry.close(&old);
    }
    session.renew();
    session
        .insert(IDENTITY_KEY, identity)
        .map_err(|e| AppError::Session(format!("Failed to store identity: {e}")))?;
    let key = registry.open();
    session
        .insert(WORKSPACE_KEY, &key)
        .map_err(|e| AppError::Session(format!("Failed to store workspace key: {e}")))?;
    log::info!("{} logged in as {}", identity.email, identity.role);
    Ok(())
}

/// Drop the workspace and everything in the session.
pub fn logout(session: &Session, registry: &WorkspaceRegistry) {
    if let Some(key) = workspace_key(session) {
        registry.close(&key);
    }
    if let Some(identity) = current_identity(session) {
        log::info!("{} logged out", identity.email);
    }
    session.purge();
}

/// Replace the stored identity, e.g. after a profile edit.
pub fn update_identity(session: &Session, identity: &Identity) -> Result<(), AppError> {
    session
        .insert(IDENTITY_KEY, identity)
        .map_err(|e| AppError::Session(format!("Failed to store identity: {e}")))
}

pub fn workspace_key(session: &Session) -> Option<String> {
    session.get::<String>(WORKSPACE_KEY).unwrap_or(None)
}

/// Workspace key for an authenticated session. Sessions that predate the
/// key get a new workspace.
pub fn require_workspace_key(
    session: &Session,
    registry: &WorkspaceRegistry,
) -> Result<String, AppError> {
    if let Some(key) = workspace_key(session) {
        return Ok(key);
    }
    let key = registry.open();
    session
        .insert(WORKSPACE_KEY, &key)
        .map_err(|e| AppError::Session(format!("Failed to store workspace key: {e}")))?;
    Ok(key)
}

pub fn set_flash(session: &Session, message: &str) {
    let _ = session.insert(FLASH_KEY, message);
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>(FLASH_KEY).unwrap_or(None);
    if flash.is_some() {
        session.remove(FLASH_KEY);
    }
    flash
}
