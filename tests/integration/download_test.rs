//! Integration tests for document downloads.

mod helpers;

use http::{StatusCode, header};

#[tokio::test]
async fn test_download_each_format() {
    let app = helpers::TestApp::new().await;
    let cookie = app.login_admin().await;

    app.save(&cookie, &[("title", "Report"), ("content", "Numbers"), ("doc_file", "report.txt")])
        .await;

    let txt = app.get("/download/txt/report.txt", Some(&cookie)).await;
    assert_eq!(txt.status, StatusCode::OK);
    assert!(txt.text.starts_with("Title: Report"));
    assert_eq!(
        txt.headers[header::CONTENT_DISPOSITION],
        "attachment; filename=\"report.txt\""
    );

    let pdf = app.get("/download/pdf/report.txt", Some(&cookie)).await;
    assert_eq!(pdf.status, StatusCode::OK);
    assert_eq!(pdf.headers[header::CONTENT_TYPE], "application/pdf");
    assert!(pdf.bytes.starts_with(b"%PDF"));

    let docx = app.get("/download/docx/report.txt", Some(&cookie)).await;
    assert_eq!(docx.status, StatusCode::OK);
    assert!(docx.bytes.starts_with(b"PK"));
}

#[tokio::test]
async fn test_download_from_trash() {
    let app = helpers::TestApp::new().await;
    let cookie = app.login_admin().await;

    app.save(&cookie, &[("title", "Binned"), ("content", "x"), ("doc_file", "binned.txt")])
        .await;
    app.post("/delete-document/binned.txt", Some(&cookie)).await;

    let response = app.get("/download/txt/binned.txt", Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains("Binned"));
}

#[tokio::test]
async fn test_download_invalid_format_is_400() {
    let app = helpers::TestApp::new().await;
    let cookie = app.login_admin().await;

    let response = app.get("/download/exe/anything.txt", Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.text, "Invalid format");
}

#[tokio::test]
async fn test_download_missing_is_404() {
    let app = helpers::TestApp::new().await;
    let cookie = app.login_admin().await;

    let response = app.get("/download/pdf/nothing.txt", Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.text, "File not found");
}

#[tokio::test]
async fn test_download_without_session() {
    let app = helpers::TestApp::new().await;
    let cookie = app.login_admin().await;
    app.save(&cookie, &[("title", "Shared"), ("content", "open"), ("doc_file", "shared.txt")])
        .await;

    let response = app.get("/download/txt/shared.txt", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.starts_with("Title: Shared"));

    let response = app.get("/download/exe/shared.txt", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.text, "Invalid format");

    let response = app.get("/download/pdf/absent.txt", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
