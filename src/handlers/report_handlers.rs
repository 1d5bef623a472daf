use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::auth::guard::{View, require_view};
use crate::auth::session::require_workspace_key;
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::report::{aggregate, chart_bars, csv};
use crate::store::WorkspaceRegistry;
use crate::templates_structs::{PageContext, ReportTemplate};

pub async fn index(
    config: web::Data<AppConfig>,
    registry: web::Data<WorkspaceRegistry>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let identity = require_view(&session, View::Report)?;
    let key = require_workspace_key(&session, &registry)?;

    let records = registry.with(&key, |ws| ws.attendance_records());
    let bars = chart_bars(&aggregate(&records));

    let ctx = PageContext::build(&session, identity, &config.app_name, View::Report.path());
    render(ReportTemplate { ctx, bars, records })
}

/// GET /report/export.csv: download the report as `attendance_report.csv`.
pub async fn export_csv(
    registry: web::Data<WorkspaceRegistry>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let identity = require_view(&session, View::Report)?;
    let key = require_workspace_key(&session, &registry)?;

    let records = registry.with(&key, |ws| {
        ws.exports_generated += 1;
        ws.attendance_records()
    });
    let body = csv::to_csv(&records);
    log::info!("{} exported {} attendance rows", identity.email, records.len());

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", csv::FILENAME),
        ))
        .body(body))
}
