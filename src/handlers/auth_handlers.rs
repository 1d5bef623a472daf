use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::auth::validate::FormErrors;
use crate::auth::{csrf, session};
use crate::config::AppConfig;
use crate::errors::{AppError, render, see_other};
use crate::handlers::forms;
use crate::models::LoginInput;
use crate::store::WorkspaceRegistry;
use crate::templates_structs::LoginTemplate;

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

/// GET /: the entry view.
pub async fn login_page(
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    // If already logged in, redirect to dashboard
    if session::current_identity(&session).is_some() {
        return Ok(see_other("/dashboard"));
    }

    let csrf_token = csrf::get_or_create_token(&session);
    let tmpl = LoginTemplate::new(&config.app_name, csrf_token, LoginInput::default(), FormErrors::new());
    render(tmpl)
}

pub async fn login_submit(
    config: web::Data<AppConfig>,
    registry: web::Data<WorkspaceRegistry>,
    session: Session,
    form: web::Form<LoginInput>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    match forms::login_identity(&form) {
        Ok(identity) => {
            session::login(&session, &registry, &identity)?;
            Ok(see_other("/dashboard"))
        }
        Err(errors) => {
            let csrf_token = csrf::get_or_create_token(&session);
            let tmpl = LoginTemplate::new(&config.app_name, csrf_token, form.into_inner(), errors);
            render(tmpl)
        }
    }
}

pub async fn logout(
    registry: web::Data<WorkspaceRegistry>,
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    session::logout(&session, &registry);
    Ok(see_other("/"))
}
