// Template context structures for Askama templates, organized by screen.

use actix_session::Session;

use crate::auth::csrf;
use crate::auth::guard::{Access, View};
use crate::auth::session::take_flash;
use crate::models::Identity;

pub struct NavItem {
    pub label: String,
    pub url: String,
    pub is_active: bool,
}

/// Common context shared by all authenticated pages.
/// Templates access these as `ctx.identity.name`, `ctx.nav`, etc.
pub struct PageContext {
    pub identity: Identity,
    pub avatar_initial: String,
    pub nav: Vec<NavItem>,
    pub flash: Option<String>,
    pub app_name: String,
    pub csrf_token: String,
}

impl PageContext {
    pub fn build(session: &Session, identity: Identity, app_name: &str, current_path: &str) -> Self {
        let flash = take_flash(session);
        let csrf_token = csrf::get_or_create_token(session);
        let nav = navigation(&identity, current_path);
        let avatar_initial = identity.initial();
        Self {
            identity,
            avatar_initial,
            nav,
            flash,
            app_name: app_name.to_string(),
            csrf_token,
        }
    }
}

/// Sidebar entries the identity may open, with the current one marked.
pub fn navigation(identity: &Identity, current_path: &str) -> Vec<NavItem> {
    let active = View::from_path(current_path);
    View::NAV
        .into_iter()
        .filter(|v| v.authorize(Some(identity)) == Access::Allow)
        .map(|v| NavItem {
            label: v.label().to_string(),
            url: v.path().to_string(),
            is_active: active == Some(v),
        })
        .collect()
}

mod common;
mod dashboard;
mod entities;
mod report;

pub use self::common::{LoginTemplate, NotFoundTemplate, ProfileTemplate, RoleOption};
pub use self::dashboard::{DashboardStats, DashboardTemplate};
pub use self::entities::{AttendeeToggle, EventView, EventsTemplate, PeopleTemplate, SubAdminsTemplate};
pub use self::report::ReportTemplate;
