#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::test::TestRequest;

use common::{Jar, body_string, form_post, location};

// ============================================================================
// ACCESS
// ============================================================================

#[actix_rt::test]
async fn protected_views_redirect_when_logged_out() {
    let app = test_app!();
    let mut jar = Jar::new();
    for path in ["/dashboard", "/admin", "/subadmin", "/events", "/report", "/profile"] {
        let resp = send!(app, jar, TestRequest::get().uri(path));
        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "{path}");
        assert_eq!(location(&resp), "/", "{path}");
    }
}

#[actix_rt::test]
async fn login_page_renders() {
    let app = test_app!();
    let mut jar = Jar::new();
    let resp = send!(app, jar, TestRequest::get().uri("/"));
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("name=\"csrf_token\""));
    assert!(body.contains("Sub-Admin"));
}

#[actix_rt::test]
async fn invalid_login_shows_errors() {
    let app = test_app!();
    let mut jar = Jar::new();
    let page = send!(app, jar, TestRequest::get().uri("/"));
    let token = common::csrf_from(&body_string(page).await);

    let resp = send!(
        app,
        jar,
        form_post("/", &[("name", ""), ("email", "nope"), ("role", "admin"), ("csrf_token", token.as_str())])
    );
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("Name is required"));
    assert!(body.contains("Invalid email address"));

    let resp = send!(app, jar, TestRequest::get().uri("/dashboard"));
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
}

#[actix_rt::test]
async fn login_without_csrf_is_rejected() {
    let app = test_app!();
    let mut jar = Jar::new();
    send!(app, jar, TestRequest::get().uri("/"));
    let resp = send!(
        app,
        jar,
        form_post("/", &[("name", "X"), ("email", "x@example.com"), ("role", "user")])
    );
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_rt::test]
async fn roles_reach_only_their_views() {
    let app = test_app!();

    let mut admin = Jar::new();
    login!(app, admin, "admin");
    let resp = send!(app, admin, TestRequest::get().uri("/admin"));
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_string(resp).await.contains("John Doe"));
    let resp = send!(app, admin, TestRequest::get().uri("/subadmin"));
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/");

    let mut sub = Jar::new();
    login!(app, sub, "subadmin");
    let resp = send!(app, sub, TestRequest::get().uri("/admin"));
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let resp = send!(app, sub, TestRequest::get().uri("/subadmin"));
    assert_eq!(resp.status(), StatusCode::OK);

    let mut user = Jar::new();
    login!(app, user, "user");
    for path in ["/dashboard", "/events", "/report", "/profile"] {
        let resp = send!(app, user, TestRequest::get().uri(path));
        assert_eq!(resp.status(), StatusCode::OK, "{path}");
    }
}

#[actix_rt::test]
async fn logged_in_user_skips_login_page() {
    let app = test_app!();
    let mut jar = Jar::new();
    login!(app, jar, "user");
    let resp = send!(app, jar, TestRequest::get().uri("/"));
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/dashboard");
}

#[actix_rt::test]
async fn unknown_path_is_not_found() {
    let app = test_app!();
    let mut jar = Jar::new();
    let resp = send!(app, jar, TestRequest::get().uri("/definitely-not-here"));
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_string(resp).await;
    assert!(body.contains("Page not found"));
    assert!(body.contains("Go Home"));
}

// ============================================================================
// WORKSPACE STATE
// ============================================================================

#[actix_rt::test]
async fn created_event_survives_navigation() {
    let app = test_app!();
    let mut jar = Jar::new();
    let token = login!(app, jar, "user");

    let resp = send!(
        app,
        jar,
        form_post(
            "/events",
            &[
                ("name", "Quarterly Review"),
                ("date", "2024-04-10"),
                ("location", "Board Room"),
                ("description", "Numbers"),
                ("csrf_token", token.as_str()),
            ],
        )
    );
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/events");

    send!(app, jar, TestRequest::get().uri("/dashboard"));
    let resp = send!(app, jar, TestRequest::get().uri("/events"));
    let body = body_string(resp).await;
    assert!(body.contains("Quarterly Review"));
    assert!(body.contains("Team Meeting"));

    let resp = send!(app, jar, TestRequest::get().uri("/report"));
    assert!(body_string(resp).await.contains("Quarterly Review"));
}

#[actix_rt::test]
async fn invalid_event_leaves_state_unchanged() {
    let app = test_app!();
    let mut jar = Jar::new();
    let token = login!(app, jar, "user");

    let resp = send!(
        app,
        jar,
        form_post(
            "/events",
            &[("name", ""), ("date", "2024-04-10"), ("location", "Nowhere Hall"), ("csrf_token", token.as_str())],
        )
    );
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_string(resp).await.contains("Event name is required"));

    let resp = send!(app, jar, TestRequest::get().uri("/report/export.csv"));
    let csv = body_string(resp).await;
    assert_eq!(csv.lines().count(), 3);
}

#[actix_rt::test]
async fn sub_admin_edit_and_delete() {
    let app = test_app!();
    let mut jar = Jar::new();
    let token = login!(app, jar, "admin");

    let resp = send!(app, jar, TestRequest::get().uri("/admin/2/edit"));
    let body = body_string(resp).await;
    assert!(body.contains("value=\"Jane Smith\""));

    let resp = send!(
        app,
        jar,
        form_post(
            "/admin",
            &[
                ("name", "Jane Smythe"),
                ("email", "jane@example.com"),
                ("role_label", "Attendance Tracker"),
                ("csrf_token", token.as_str()),
            ],
        )
    );
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let body = body_string(send!(app, jar, TestRequest::get().uri("/admin"))).await;
    assert!(body.contains("Jane Smythe"));
    assert!(body.contains("Sub-admin updated"));

    let resp = send!(app, jar, form_post("/admin/1/delete", &[("csrf_token", token.as_str())]));
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let body = body_string(send!(app, jar, TestRequest::get().uri("/admin"))).await;
    assert!(!body.contains("<td>John Doe</td>"));
    assert!(body.contains("Removed John Doe"));
}

#[actix_rt::test]
async fn attendee_toggle_updates_export() {
    let app = test_app!();
    let mut jar = Jar::new();
    let token = login!(app, jar, "user");

    let resp = send!(app, jar, form_post("/events/2/attendees/4", &[("csrf_token", token.as_str())]));
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let resp = send!(app, jar, TestRequest::get().uri("/report/export.csv"));
    let csv = body_string(resp).await;
    assert!(csv.contains("Project Kickoff,2024-03-20,\"Bob Williams, David Smith\"\n"));

    let resp = send!(app, jar, form_post("/events/2/attendees/99", &[("csrf_token", token.as_str())]));
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn csv_export_download() {
    let app = test_app!();
    let mut jar = Jar::new();
    login!(app, jar, "user");

    let resp = send!(app, jar, TestRequest::get().uri("/report/export.csv"));
    assert_eq!(resp.status(), StatusCode::OK);
    let header = |name: &str| {
        resp.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    };
    assert!(header("Content-Type").starts_with("text/csv"));
    assert_eq!(header("Content-Disposition"), "attachment; filename=\"attendance_report.csv\"");

    let csv = body_string(resp).await;
    assert_eq!(
        csv,
        "Event Name,Date,Attendees\n\
         Team Meeting,2024-03-15,\"Alice Johnson, Bob Williams\"\n\
         Project Kickoff,2024-03-20,Bob Williams\n"
    );
}

#[actix_rt::test]
async fn missing_csrf_is_forbidden_and_changes_nothing() {
    let app = test_app!();
    let mut jar = Jar::new();
    login!(app, jar, "user");

    let resp = send!(app, jar, form_post("/events/1/delete", &[("csrf_token", "deadbeef")]));
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let body = body_string(send!(app, jar, TestRequest::get().uri("/events"))).await;
    assert!(body.contains("Team Meeting"));
}

#[actix_rt::test]
async fn logout_discards_workspace() {
    let app = test_app!();
    let mut jar = Jar::new();
    let token = login!(app, jar, "user");

    send!(app, jar, form_post("/events/1/delete", &[("csrf_token", token.as_str())]));
    let body = body_string(send!(app, jar, TestRequest::get().uri("/events"))).await;
    assert!(!body.contains("Team Meeting"));

    let resp = send!(app, jar, form_post("/logout", &[("csrf_token", token.as_str())]));
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/");

    let resp = send!(app, jar, TestRequest::get().uri("/events"));
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    login!(app, jar, "user");
    let body = body_string(send!(app, jar, TestRequest::get().uri("/events"))).await;
    assert!(body.contains("Team Meeting"));
}

#[actix_rt::test]
async fn profile_update_changes_greeting() {
    let app = test_app!();
    let mut jar = Jar::new();
    let token = login!(app, jar, "user");

    let resp = send!(
        app,
        jar,
        form_post(
            "/profile",
            &[
                ("name", "Renamed Person"),
                ("email", "renamed@example.com"),
                ("current_password", "whatever1"),
                ("new_password", ""),
                ("confirm_password", ""),
                ("csrf_token", token.as_str()),
            ],
        )
    );
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/profile");

    let body = body_string(send!(app, jar, TestRequest::get().uri("/dashboard"))).await;
    assert!(body.contains("Welcome, Renamed Person"));
}

#[actix_rt::test]
async fn profile_errors_rerender_edit_mode() {
    let app = test_app!();
    let mut jar = Jar::new();
    let token = login!(app, jar, "user");

    let resp = send!(
        app,
        jar,
        form_post(
            "/profile",
            &[
                ("name", "Someone"),
                ("email", "someone@example.com"),
                ("current_password", "whatever1"),
                ("new_password", "abc"),
                ("confirm_password", "abc"),
                ("csrf_token", token.as_str()),
            ],
        )
    );
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_string(resp).await.contains("Password must be at least 8 characters"));

    let body = body_string(send!(app, jar, TestRequest::get().uri("/dashboard"))).await;
    assert!(body.contains(&format!("Welcome, {}", common::TEST_NAME)));
}

#[actix_rt::test]
async fn abandoned_logins_do_not_pile_up() {
    let registry = attendance_app::store::WorkspaceRegistry::with_limits(
        std::time::Duration::from_secs(3600),
        5,
    );
    let app = test_app!(registry.clone());
    for _ in 0..20 {
        let mut jar = Jar::new();
        login!(app, jar, "user");
    }
    assert_eq!(registry.len(), 5);
}

// ============================================================================
// INPUT LIMITS
// ============================================================================

#[actix_rt::test]
async fn overlong_email_is_a_form_error() {
    let app = test_app!();
    let mut jar = Jar::new();
    let page = send!(app, jar, TestRequest::get().uri("/"));
    let token = common::csrf_from(&body_string(page).await);

    let email = format!("{}@example.com", "a".repeat(5000));
    let resp = send!(
        app,
        jar,
        form_post(
            "/",
            &[("name", "Long"), ("email", email.as_str()), ("role", "user"), ("csrf_token", token.as_str())],
        )
    );
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_string(resp).await.contains("Email must be at most 254 characters"));

    let resp = send!(app, jar, TestRequest::get().uri("/dashboard"));
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
}

#[actix_rt::test]
async fn overlong_email_in_profile_is_a_form_error() {
    let app = test_app!();
    let mut jar = Jar::new();
    let token = login!(app, jar, "user");

    let email = format!("{}@example.com", "b".repeat(300));
    let resp = send!(
        app,
        jar,
        form_post(
            "/profile",
            &[
                ("name", "Someone"),
                ("email", email.as_str()),
                ("current_password", "whatever1"),
                ("csrf_token", token.as_str()),
            ],
        )
    );
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_string(resp).await.contains("Email must be at most 254 characters"));
}

#[actix_rt::test]
async fn profile_edit_mode_follows_flag_value() {
    let app = test_app!();
    let mut jar = Jar::new();
    login!(app, jar, "user");

    for (uri, editable) in [
        ("/profile", false),
        ("/profile?edit=0", false),
        ("/profile?edit=false", false),
        ("/profile?edit=1", true),
        ("/profile?edit=true", true),
    ] {
        let body = body_string(send!(app, jar, TestRequest::get().uri(uri))).await;
        assert_eq!(body.contains("Current Password"), editable, "{uri}");
        assert_eq!(body.contains("Edit Profile"), !editable, "{uri}");
    }
}

#[actix_rt::test]
async fn people_cancel_edit_then_add_creates_new_record() {
    let app = test_app!();
    let mut jar = Jar::new();
    let token = login!(app, jar, "subadmin");

    let body = body_string(send!(app, jar, TestRequest::get().uri("/subadmin/3/edit"))).await;
    assert!(body.contains("value=\"Charlie Brown\""));
    assert!(body.contains("action=\"/subadmin/cancel\""));

    let resp = send!(app, jar, form_post("/subadmin/cancel", &[("csrf_token", token.as_str())]));
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/subadmin");

    let resp = send!(
        app,
        jar,
        form_post(
            "/subadmin",
            &[
                ("name", "Erin Hall"),
                ("email", "erin@example.com"),
                ("department", "Ops"),
                ("csrf_token", token.as_str()),
            ],
        )
    );
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let body = body_string(send!(app, jar, TestRequest::get().uri("/subadmin"))).await;
    assert!(body.contains("Person added"));
    assert!(body.contains("Charlie Brown"));
    assert!(body.contains("Erin Hall"));

    // an unknown id leaves the form in add mode
    let body = body_string(send!(app, jar, TestRequest::get().uri("/subadmin/99/edit"))).await;
    assert!(!body.contains("action=\"/subadmin/cancel\""));

    let resp = send!(app, jar, form_post("/subadmin/cancel", &[("csrf_token", "0000")]));
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}
