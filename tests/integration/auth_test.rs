//! Integration tests for the login flow and the session gate.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_login_success_sets_cookie_and_redirects() {
    let app = helpers::TestApp::new().await;

    let response = app
        .post_form("/login", &[("login", "admin"), ("password", "admin123")], None)
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/dashboard"));
    assert!(response.session_cookie("docket_session").is_some());
}

#[tokio::test]
async fn test_flash_shown_once_on_dashboard() {
    let app = helpers::TestApp::new().await;
    let cookie = app.login_admin().await;

    let first = app.get("/dashboard", Some(&cookie)).await;
    assert_eq!(first.status, StatusCode::OK);
    assert!(first.text.contains("Login successful!"));

    let second = app.get("/dashboard", Some(&cookie)).await;
    assert!(!second.text.contains("Login successful!"));
}

#[tokio::test]
async fn test_wrong_password_rerenders_form() {
    let app = helpers::TestApp::new().await;

    let response = app
        .post_form("/login", &[("login", "admin"), ("password", "wrong")], None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains("Invalid login or password"));
    assert!(response.session_cookie("docket_session").is_none());

    let dashboard = app.get("/dashboard", None).await;
    assert_eq!(dashboard.status, StatusCode::SEE_OTHER);
    assert_eq!(dashboard.location(), Some("/login"));
}

#[tokio::test]
async fn test_relogin_retires_previous_session() {
    let app = helpers::TestApp::new().await;
    let first = app.login_admin().await;

    let response = app
        .post_form(
            "/login",
            &[("login", "user"), ("password", "user321")],
            Some(&first),
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    let second = response.session_cookie("docket_session").unwrap();
    assert_ne!(first, second);

    let stale = app.get("/dashboard", Some(&first)).await;
    assert_eq!(stale.status, StatusCode::SEE_OTHER);
    assert_eq!(stale.location(), Some("/login"));

    let fresh = app.get("/dashboard", Some(&second)).await;
    assert_eq!(fresh.status, StatusCode::OK);
}

#[tokio::test]
async fn test_second_default_user_can_log_in() {
    let app = helpers::TestApp::new().await;
    let cookie = app.login("user", "user321").await;

    let response = app.get("/dashboard", Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains("user"));
}

#[tokio::test]
async fn test_forged_cookie_is_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app
        .get("/dashboard", Some("docket_session=not-a-real-token"))
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);

    let response = app.post("/empty-trash", Some("docket_session=nope")).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_api_requires_session() {
    let app = helpers::TestApp::new().await;

    let response = app
        .post_form("/save-document", &[("title", "T"), ("content", "C")], None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
    assert_eq!(response.body["message"], "Not authorized");
}

#[tokio::test]
async fn test_logout_clears_session() {
    let app = helpers::TestApp::new().await;
    let cookie = app.login_admin().await;

    let response = app.get("/logout", Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/"));

    let dashboard = app.get("/dashboard", Some(&cookie)).await;
    assert_eq!(dashboard.status, StatusCode::SEE_OTHER);
    assert_eq!(dashboard.location(), Some("/login"));
}

#[tokio::test]
async fn test_public_pages() {
    let app = helpers::TestApp::new().await;

    let welcome = app.get("/", None).await;
    assert_eq!(welcome.status, StatusCode::OK);
    assert!(welcome.text.contains("Docket"));

    let login = app.get("/login", None).await;
    assert_eq!(login.status, StatusCode::OK);
    assert!(login.text.contains("name=\"password\""));

    let health = app.get("/api/health", None).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["success"], true);
    assert_eq!(health.body["data"]["status"], "ok");
}

#[tokio::test]
async fn test_health_reports_missing_trash_folder() {
    let app = helpers::TestApp::new().await;
    std::fs::remove_dir_all(app.trash_dir()).unwrap();

    let health = app.get("/api/health", None).await;
    assert_eq!(health.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(health.body["data"]["status"], "degraded");
}
