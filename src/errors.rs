use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use askama::Template;
use std::fmt;

use crate::auth::guard::ENTRY_PATH;
use crate::templates_structs::NotFoundTemplate;

#[derive(Debug)]
pub enum AppError {
    Template(askama::Error),
    Session(String),
    /// Missing identity or role mismatch. Never shown to the user.
    Unauthorized,
    Csrf,
    NotFound,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Template(e) => write!(f, "Template error: {e}"),
            AppError::Session(e) => write!(f, "Session error: {e}"),
            AppError::Unauthorized => write!(f, "Unauthorized"),
            AppError::Csrf => write!(f, "Invalid or missing CSRF token"),
            AppError::NotFound => write!(f, "Not found"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::SEE_OTHER,
            AppError::Csrf => StatusCode::FORBIDDEN,
            AppError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Unauthorized => HttpResponse::SeeOther()
                .insert_header(("Location", ENTRY_PATH))
                .finish(),
            AppError::Csrf => HttpResponse::Forbidden().body(self.to_string()),
            AppError::NotFound => not_found_page(),
            _ => {
                log::error!("{self}");
                HttpResponse::InternalServerError().body("Internal Server Error")
            }
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e)
    }
}

/// Render an Askama template into a 200 HTML response.
pub fn render(tmpl: impl Template) -> Result<HttpResponse, AppError> {
    let body = tmpl.render()?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}

/// The catch-all not-found view, also used for unmatched routes.
pub fn not_found_page() -> HttpResponse {
    match NotFoundTemplate.render() {
        Ok(html) => HttpResponse::NotFound()
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(e) => {
            log::error!("Template error: {e}");
            HttpResponse::NotFound().body("Not Found")
        }
    }
}

/// 303 redirect, the response every successful POST ends with.
pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location.to_string()))
        .finish()
}
