//! Integration tests for trash listing, retention, and emptying.

mod helpers;

use http::StatusCode;

const OLD_DOC: &str =
    "Title: Old\nDate: 01 Jan. 2020\n========================================\n\nexpired";
const FRESH_DOC: &str =
    "Title: Fresh\nDate: 01 Jan. 2024\n========================================\n\nstill here";

#[tokio::test]
async fn test_expired_trash_is_reaped_on_listing() {
    let app = helpers::TestApp::new().await;
    let cookie = app.login_admin().await;

    app.plant_trash_file("old.txt", OLD_DOC, 40);
    app.plant_trash_file("old.pdf", "%PDF", 40);
    app.plant_trash_file("fresh.txt", FRESH_DOC, 5);

    let response = app.get("/trash", Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains("Fresh"));
    assert!(!response.text.contains("expired"));

    assert!(!app.trash_dir().join("old.txt").exists());
    assert!(!app.trash_dir().join("old.pdf").exists());
    assert!(app.trash_dir().join("fresh.txt").exists());
}

#[tokio::test]
async fn test_dashboard_trash_count_reaps() {
    let app = helpers::TestApp::new().await;
    let cookie = app.login_admin().await;

    app.plant_trash_file("old.txt", OLD_DOC, 45);
    app.plant_trash_file("fresh.txt", FRESH_DOC, 1);

    let response = app.get("/dashboard", Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains("Trash (1)"));
    assert!(!app.trash_dir().join("old.txt").exists());
}

#[tokio::test]
async fn test_empty_trash_removes_everything() {
    let app = helpers::TestApp::new().await;
    let cookie = app.login_admin().await;

    app.save(&cookie, &[("title", "Gone"), ("content", "bye"), ("doc_file", "gone.txt")])
        .await;
    app.post("/delete-document/gone.txt", Some(&cookie)).await;

    let response = app.post("/empty-trash", Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["message"], "Trash emptied");

    for ext in ["txt", "docx", "pdf"] {
        assert!(!app.trash_dir().join(format!("gone.{ext}")).exists());
        assert!(!app.documents_dir().join(format!("gone.{ext}")).exists());
    }

    let download = app.get("/download/txt/gone.txt", Some(&cookie)).await;
    assert_eq!(download.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_trash_page_requires_login() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/trash", None).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/login"));
}

#[tokio::test]
async fn test_expired_trash_with_unusual_names_is_reaped() {
    let app = helpers::TestApp::new().await;
    let cookie = app.login_admin().await;

    app.plant_trash_file(
        "v1..2.txt",
        "Title: Dotted\nDate: 01 Jan. 2020\n========================================\n\ndotted body",
        40,
    );
    app.plant_trash_file("v1..2.pdf", "%PDF", 40);
    app.plant_trash_file(
        " old.txt",
        "Title: Spaced\nDate: 01 Jan. 2020\n========================================\n\nspaced body",
        40,
    );

    let response = app.get("/trash", Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(!response.text.contains("dotted body"));
    assert!(!response.text.contains("spaced body"));

    assert!(!app.trash_dir().join("v1..2.txt").exists());
    assert!(!app.trash_dir().join("v1..2.pdf").exists());
    assert!(!app.trash_dir().join(" old.txt").exists());

    let dashboard = app.get("/dashboard", Some(&cookie)).await;
    assert!(dashboard.text.contains("Trash (0)"));
}
