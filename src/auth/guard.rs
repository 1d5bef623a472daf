//! Role gate for protected views.
//!
//! This only decides what the UI shows. The role comes from the login form
//! and is trusted as-is; anything that needs real authorization must get the
//! identity from a backend that issues verifiable credentials.

use actix_session::Session;

use crate::errors::AppError;
use crate::models::{Identity, Role};

/// Where denied requests are sent.
pub const ENTRY_PATH: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Redirect(&'static str),
}

/// Allow iff an identity is present and `required` is unset, empty, or
/// contains the identity's role.
pub fn authorize(required: Option<&[Role]>, identity: Option<&Identity>) -> Access {
    let Some(identity) = identity else {
        return Access::Redirect(ENTRY_PATH);
    };
    match required {
        Some(roles) if !roles.is_empty() && !roles.contains(&identity.role) => {
            Access::Redirect(ENTRY_PATH)
        }
        _ => Access::Allow,
    }
}

/// Protected views and the roles they need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Admin,
    SubAdmin,
    Events,
    Report,
    Profile,
}

impl View {
    /// Sidebar order.
    pub const NAV: [View; 6] = [
        View::Dashboard,
        View::Admin,
        View::SubAdmin,
        View::Events,
        View::Report,
        View::Profile,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            View::Dashboard => "/dashboard",
            View::Admin => "/admin",
            View::SubAdmin => "/subadmin",
            View::Events => "/events",
            View::Report => "/report",
            View::Profile => "/profile",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Admin => "Manage SubAdmins",
            View::SubAdmin => "Manage People",
            View::Events => "Events",
            View::Report => "Reports",
            View::Profile => "Profile",
        }
    }

    pub fn required_roles(&self) -> Option<&'static [Role]> {
        match self {
            View::Admin => Some(&[Role::Admin]),
            View::SubAdmin => Some(&[Role::SubAdmin]),
            _ => None,
        }
    }

    pub fn from_path(path: &str) -> Option<View> {
        View::NAV.into_iter().find(|v| {
            let base = v.path();
            path == base || path.strip_prefix(base).is_some_and(|rest| rest.starts_with('/'))
        })
    }

    pub fn authorize(&self, identity: Option<&Identity>) -> Access {
        authorize(self.required_roles(), identity)
    }
}

/// Paths behind the login: every view, its sub-routes, and logout.
pub fn is_protected(path: &str) -> bool {
    path == "/logout" || View::from_path(path).is_some()
}

/// Handler-level check, run before anything renders. Returns the identity
/// on success.
pub fn require_view(session: &Session, view: View) -> Result<Identity, AppError> {
    let identity = super::session::current_identity(session);
    match view.authorize(identity.as_ref()) {
        Access::Allow => identity.ok_or(AppError::Unauthorized),
        Access::Redirect(_) => {
            log::debug!("Denied {} for {:?}", view.path(), identity.map(|i| i.role));
            Err(AppError::Unauthorized)
        }
    }
}
