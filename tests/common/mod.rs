//! Shared test infrastructure.
//!
//! - Record builders for model-level tests
//! - `test_app!` / `send!` macros and a cookie [`Jar`] for HTTP tests
//! - `login!` to walk the login form for a given role

#![allow(dead_code, unused_macros)]

use actix_web::body::MessageBody;
use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::test::{self, TestRequest};
use chrono::NaiveDate;
use regex::Regex;

use attendance_app::models::{EventDraft, PersonDraft, SubAdminDraft};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const TEST_NAME: &str = "Test User";
pub const TEST_EMAIL: &str = "test@example.com";
pub const SESSION_COOKIE: &str = "id";

// ============================================================================
// RECORD BUILDERS
// ============================================================================

pub fn person(name: &str) -> PersonDraft {
    let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
    PersonDraft::new(name, &email, "Eng")
}

pub fn sub_admin(name: &str, role_label: &str) -> SubAdminDraft {
    SubAdminDraft {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        role_label: role_label.to_string(),
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

pub fn event(name: &str, on: NaiveDate) -> EventDraft {
    EventDraft {
        name: name.to_string(),
        date: on,
        location: "Room 1".to_string(),
        description: String::new(),
    }
}

// ============================================================================
// HTTP HELPERS
// ============================================================================

/// Carries the session cookie from one response to the next request.
#[derive(Default)]
pub struct Jar(Option<Cookie<'static>>);

impl Jar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&self, req: TestRequest) -> TestRequest {
        match &self.0 {
            Some(cookie) => req.cookie(cookie.clone()),
            None => req,
        }
    }

    pub fn update<B>(&mut self, resp: &ServiceResponse<B>) {
        if let Some(cookie) = resp.response().cookies().find(|c| c.name() == SESSION_COOKIE) {
            self.0 = Some(cookie.into_owned());
        }
    }
}

pub async fn body_string<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

/// Pull the hidden CSRF token out of a rendered page.
pub fn csrf_from(html: &str) -> String {
    let re = Regex::new(r#"name="csrf_token" value="([0-9a-f]+)""#).expect("csrf regex");
    re.captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .expect("page has a csrf token")
}

pub fn location<B>(resp: &ServiceResponse<B>) -> String {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// URL-encoded form POST.
pub fn form_post(uri: &str, fields: &[(&str, &str)]) -> TestRequest {
    let body = serde_urlencoded::to_string(fields).expect("encode form");
    TestRequest::post()
        .uri(uri)
        .insert_header(("Content-Type", "application/x-www-form-urlencoded"))
        .set_payload(body)
}

/// Build the full app the way `main` does, with a throwaway session key.
/// Pass a registry to inspect it from the test.
macro_rules! test_app {
    () => {
        test_app!(attendance_app::store::WorkspaceRegistry::new())
    };
    ($registry:expr) => {{
        let config = attendance_app::config::AppConfig::default();
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(attendance_app::routes::session_middleware(&config))
                .app_data(actix_web::web::Data::new(config.clone()))
                .app_data(actix_web::web::Data::new($registry))
                .configure(attendance_app::routes::configure)
                .default_service(actix_web::web::to(attendance_app::routes::not_found)),
        )
        .await
    }};
}

/// Send a request with the jar's cookie and remember the new one.
macro_rules! send {
    ($app:expr, $jar:expr, $req:expr) => {{
        let resp = actix_web::test::call_service(&$app, $jar.apply($req).to_request()).await;
        $jar.update(&resp);
        resp
    }};
}

/// Log in through the form as `role` and return a fresh CSRF token.
macro_rules! login {
    ($app:expr, $jar:expr, $role:expr) => {{
        let page = send!($app, $jar, actix_web::test::TestRequest::get().uri("/"));
        let token = common::csrf_from(&common::body_string(page).await);
        let resp = send!(
            $app,
            $jar,
            common::form_post(
                "/",
                &[
                    ("name", common::TEST_NAME),
                    ("email", common::TEST_EMAIL),
                    ("role", $role),
                    ("csrf_token", token.as_str()),
                ],
            )
        );
        assert_eq!(resp.status(), actix_web::http::StatusCode::SEE_OTHER);
        assert_eq!(common::location(&resp), "/dashboard");
        let dashboard = send!($app, $jar, actix_web::test::TestRequest::get().uri("/dashboard"));
        common::csrf_from(&common::body_string(dashboard).await)
    }};
}
