use actix_session::Session;
use actix_web::{HttpResponse, web};
use chrono::{Local, Timelike};

use crate::auth::guard::{View, require_view};
use crate::auth::session::require_workspace_key;
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::report::{chart_bars, monthly_overview};
use crate::store::{Workspace, WorkspaceRegistry};
use crate::templates_structs::{DashboardStats, DashboardTemplate, PageContext};

fn time_greeting(name: &str) -> String {
    let hour = Local::now().hour();
    let period = match hour {
        5..=11 => "Good morning",
        12..=16 => "Good afternoon",
        _ => "Good evening",
    };
    format!("{}, {}", period, name)
}

/// Card numbers for a workspace. The attendance rate is attended seats
/// over people × events.
pub fn stats_for(ws: &Workspace) -> DashboardStats {
    let people = ws.people.len();
    let events = ws.events.len();
    let attended: usize = ws.events.records().iter().map(|e| e.attendees.len()).sum();
    let seats = people * events;
    let attendance_rate = if seats == 0 {
        0
    } else {
        (attended * 100 / seats) as u32
    };
    DashboardStats {
        people,
        events,
        reports_generated: ws.exports_generated,
        attendance_rate,
    }
}

pub async fn index(
    config: web::Data<AppConfig>,
    registry: web::Data<WorkspaceRegistry>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let identity = require_view(&session, View::Dashboard)?;
    let key = require_workspace_key(&session, &registry)?;

    let (stats, monthly) = registry.with(&key, |ws| {
        (stats_for(ws), chart_bars(&monthly_overview(ws.events.records())))
    });

    let greeting = time_greeting(&identity.name);
    let ctx = PageContext::build(&session, identity, &config.app_name, View::Dashboard.path());
    render(DashboardTemplate { ctx, greeting, stats, monthly })
}
