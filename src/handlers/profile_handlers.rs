use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::auth::guard::{View, require_view};
use crate::auth::validate::FormErrors;
use crate::auth::{csrf, session};
use crate::config::{AppConfig, parse_flag};
use crate::errors::{AppError, render, see_other};
use crate::handlers::forms;
use crate::models::ProfileInput;
use crate::templates_structs::{PageContext, ProfileTemplate};

#[derive(Deserialize)]
pub struct ProfileQuery {
    pub edit: Option<String>,
}

/// GET /profile, read-only unless `?edit=1` (any truthy flag).
pub async fn form(
    config: web::Data<AppConfig>,
    session: Session,
    query: web::Query<ProfileQuery>,
) -> Result<HttpResponse, AppError> {
    let identity = require_view(&session, View::Profile)?;
    let form = ProfileInput::from(&identity);
    let ctx = PageContext::build(&session, identity, &config.app_name, View::Profile.path());
    render(ProfileTemplate {
        ctx,
        form,
        editing: query.edit.as_deref().is_some_and(parse_flag),
        errors: FormErrors::new(),
    })
}

/// POST /profile. No credential store exists, so the password fields are
/// validated and then discarded; name and email update the session identity.
pub async fn submit(
    config: web::Data<AppConfig>,
    session: Session,
    form: web::Form<ProfileInput>,
) -> Result<HttpResponse, AppError> {
    let identity = require_view(&session, View::Profile)?;
    csrf::validate_csrf(&session, &form.csrf_token)?;

    match forms::profile_update(&form, &identity) {
        Ok(updated) => {
            session::update_identity(&session, &updated)?;
            log::info!("Profile updated for {}", updated.email);
            session::set_flash(&session, "Profile updated");
            Ok(see_other(View::Profile.path()))
        }
        Err(errors) => {
            let mut input = form.into_inner();
            input.current_password.clear();
            input.new_password.clear();
            input.confirm_password.clear();
            let ctx = PageContext::build(&session, identity, &config.app_name, View::Profile.path());
            render(ProfileTemplate { ctx, form: input, editing: true, errors })
        }
    }
}
