use askama::Template;

use crate::auth::validate::FormErrors;
use crate::models::{LoginInput, ProfileInput, Role};
use super::PageContext;

/// One entry of the role picker.
pub struct RoleOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub app_name: String,
    pub csrf_token: String,
    pub form: LoginInput,
    pub roles: Vec<RoleOption>,
    pub errors: FormErrors,
}

impl LoginTemplate {
    pub fn new(app_name: &str, csrf_token: String, form: LoginInput, errors: FormErrors) -> Self {
        let roles = Role::ALL
            .iter()
            .map(|r| RoleOption {
                value: r.as_str(),
                label: r.label(),
                selected: form.role == r.as_str(),
            })
            .collect();
        Self {
            app_name: app_name.to_string(),
            csrf_token,
            form,
            roles,
            errors,
        }
    }
}

#[derive(Template)]
#[template(path = "profile.html")]
pub struct ProfileTemplate {
    pub ctx: PageContext,
    pub form: ProfileInput,
    pub editing: bool,
    pub errors: FormErrors,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate;
