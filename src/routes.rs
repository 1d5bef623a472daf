use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{middleware, web};

use crate::auth;
use crate::config::AppConfig;
use crate::errors::not_found_page;
use crate::handlers;

pub fn session_middleware(config: &AppConfig) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), config.session_key.clone())
        .cookie_secure(config.cookie_secure)
        .cookie_http_only(true)
        .build()
}

/// All routes. Protected screens also check their role in the handler.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Public routes
        .route("/", web::get().to(handlers::auth_handlers::login_page))
        .route("/", web::post().to(handlers::auth_handlers::login_submit))
        // Protected routes
        .service(
            web::scope("")
                .wrap(middleware::from_fn(auth::middleware::require_auth))
                .route("/logout", web::post().to(handlers::auth_handlers::logout))
                .route("/dashboard", web::get().to(handlers::dashboard::index))
                // Sub-admins: /admin/cancel BEFORE /admin/{id}/...
                .route("/admin", web::get().to(handlers::sub_admin_handlers::list))
                .route("/admin", web::post().to(handlers::sub_admin_handlers::submit))
                .route("/admin/cancel", web::post().to(handlers::sub_admin_handlers::cancel))
                .route("/admin/{id}/edit", web::get().to(handlers::sub_admin_handlers::edit_form))
                .route("/admin/{id}/delete", web::post().to(handlers::sub_admin_handlers::delete))
                // People
                .route("/subadmin", web::get().to(handlers::people_handlers::list))
                .route("/subadmin", web::post().to(handlers::people_handlers::submit))
                .route("/subadmin/cancel", web::post().to(handlers::people_handlers::cancel))
                .route("/subadmin/{id}/edit", web::get().to(handlers::people_handlers::edit_form))
                .route("/subadmin/{id}/delete", web::post().to(handlers::people_handlers::delete))
                // Events
                .route("/events", web::get().to(handlers::event_handlers::list))
                .route("/events", web::post().to(handlers::event_handlers::submit))
                .route("/events/cancel", web::post().to(handlers::event_handlers::cancel))
                .route("/events/{id}/edit", web::get().to(handlers::event_handlers::edit_form))
                .route("/events/{id}/delete", web::post().to(handlers::event_handlers::delete))
                .route(
                    "/events/{id}/attendees/{person_id}",
                    web::post().to(handlers::event_handlers::toggle_attendee),
                )
                // Report
                .route("/report", web::get().to(handlers::report_handlers::index))
                .route("/report/export.csv", web::get().to(handlers::report_handlers::export_csv))
                // Profile
                .route("/profile", web::get().to(handlers::profile_handlers::form))
                .route("/profile", web::post().to(handlers::profile_handlers::submit)),
        );
}

/// Catch-all for unmatched paths. Register last.
pub async fn not_found() -> actix_web::HttpResponse {
    not_found_page()
}
