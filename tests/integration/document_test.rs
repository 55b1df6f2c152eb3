//! Integration tests for saving, editing, and moving documents.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_save_without_filename_generates_name() {
    let app = helpers::TestApp::new().await;
    let cookie = app.login_admin().await;

    let response = app
        .save(
            &cookie,
            &[("title", "Test"), ("content", "Hello World"), ("folder", "documents")],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["message"], "Document 'Test' saved!");

    let filename = response.body["filename"].as_str().unwrap().to_string();
    assert!(filename.starts_with("document_"));
    assert!(filename.ends_with(".txt"));
    let stamp = &filename["document_".len()..filename.len() - ".txt".len()];
    assert_eq!(stamp.len(), 15);
    assert!(stamp[..8].chars().all(|c| c.is_ascii_digit()));
    assert_eq!(&stamp[8..9], "_");
    assert!(stamp[9..].chars().all(|c| c.is_ascii_digit()));

    let raw = std::fs::read_to_string(app.documents_dir().join(&filename)).unwrap();
    assert!(raw.starts_with("Title: Test\nDate: "));
    assert!(raw.ends_with("\n\nHello World"));

    let base = filename.trim_end_matches(".txt");
    assert!(app.documents_dir().join(format!("{base}.docx")).exists());
    assert!(app.documents_dir().join(format!("{base}.pdf")).exists());
}

#[tokio::test]
async fn test_saved_document_reopens_in_editor() {
    let app = helpers::TestApp::new().await;
    let cookie = app.login_admin().await;

    let response = app
        .save(
            &cookie,
            &[("title", "Notes"), ("content", "line one\nline two"), ("doc_file", "notes.txt")],
        )
        .await;
    assert_eq!(response.body["filename"], "notes.txt");

    let editor = app.get("/editor?doc=notes.txt", Some(&cookie)).await;
    assert_eq!(editor.status, StatusCode::OK);
    assert!(editor.text.contains("value=\"Notes\""));
    assert!(editor.text.contains("line one\nline two"));
    assert!(editor.text.contains("value=\"notes.txt\""));
}

#[tokio::test]
async fn test_dashboard_lists_saved_documents() {
    let app = helpers::TestApp::new().await;
    let cookie = app.login_admin().await;

    app.save(&cookie, &[("title", "Alpha"), ("content", "a"), ("doc_file", "a.txt")])
        .await;
    app.save(&cookie, &[("title", "Beta"), ("content", "b"), ("doc_file", "b.txt")])
        .await;

    let dashboard = app.get("/dashboard", Some(&cookie)).await;
    assert_eq!(dashboard.status, StatusCode::OK);

    let alpha = dashboard.text.find("Alpha").unwrap();
    let beta = dashboard.text.find("Beta").unwrap();
    assert!(beta < alpha, "listing is sorted by filename descending");
}

#[tokio::test]
async fn test_cyrillic_title_saves_with_pdf_warning() {
    let app = helpers::TestApp::new().await;
    let cookie = app.login_admin().await;

    let response = app
        .save(
            &cookie,
            &[("title", "Отчёт"), ("content", "Привет"), ("doc_file", "ru.txt")],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    let warnings = response.body["warnings"].as_array().unwrap();
    assert!(warnings.iter().any(|w| w.as_str().unwrap().starts_with("pdf export failed")));

    assert!(app.documents_dir().join("ru.txt").exists());
    assert!(app.documents_dir().join("ru.docx").exists());
    assert!(!app.documents_dir().join("ru.pdf").exists());
}

#[tokio::test]
async fn test_editor_missing_document_is_404() {
    let app = helpers::TestApp::new().await;
    let cookie = app.login_admin().await;

    let response = app.get("/editor?doc=missing.txt", Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.text, "Document not found");

    let blank = app.get("/editor", Some(&cookie)).await;
    assert_eq!(blank.status, StatusCode::OK);
    assert!(blank.text.contains("value=\"Untitled\""));
}

#[tokio::test]
async fn test_delete_then_restore_round_trip() {
    let app = helpers::TestApp::new().await;
    let cookie = app.login_admin().await;

    app.save(&cookie, &[("title", "Keep"), ("content", "body"), ("doc_file", "keep.txt")])
        .await;
    let before = std::fs::read(app.documents_dir().join("keep.txt")).unwrap();

    let deleted = app.post("/delete-document/keep.txt", Some(&cookie)).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["message"], "Document moved to trash");
    assert!(!app.documents_dir().join("keep.txt").exists());
    assert!(app.trash_dir().join("keep.txt").exists());
    assert!(app.trash_dir().join("keep.pdf").exists());

    let restored = app.post("/restore-document/keep.txt", Some(&cookie)).await;
    assert_eq!(restored.status, StatusCode::OK);
    assert_eq!(restored.body["message"], "Document restored");

    let after = std::fs::read(app.documents_dir().join("keep.txt")).unwrap();
    assert_eq!(before, after);
    assert!(!app.trash_dir().join("keep.txt").exists());
}

#[tokio::test]
async fn test_delete_with_missing_exports_succeeds() {
    let app = helpers::TestApp::new().await;
    let cookie = app.login_admin().await;

    std::fs::write(
        app.documents_dir().join("plain.txt"),
        "Title: Plain\nDate: 01 Jan. 2024\n========================================\n\nText",
    )
    .unwrap();

    let response = app.post("/delete-document/plain.txt", Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert!(response.body.get("warnings").is_none());
    assert!(app.trash_dir().join("plain.txt").exists());
}

#[tokio::test]
async fn test_save_into_trash_folder() {
    let app = helpers::TestApp::new().await;
    let cookie = app.login_admin().await;

    let response = app
        .save(
            &cookie,
            &[("title", "Binned"), ("content", "x"), ("doc_file", "binned.txt"), ("folder", "trash")],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(app.trash_dir().join("binned.txt").exists());
    assert!(!app.documents_dir().join("binned.txt").exists());
}

#[tokio::test]
async fn test_absent_title_defaults_but_empty_title_is_kept() {
    let app = helpers::TestApp::new().await;
    let cookie = app.login_admin().await;

    let response = app
        .save(&cookie, &[("content", "no title field"), ("doc_file", "absent.txt")])
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Document 'Untitled' saved!");
    let raw = std::fs::read_to_string(app.documents_dir().join("absent.txt")).unwrap();
    assert!(raw.starts_with("Title: Untitled\n"));

    let response = app
        .save(&cookie, &[("title", ""), ("content", "blank title"), ("doc_file", "blank.txt")])
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Document '' saved!");
    let raw = std::fs::read_to_string(app.documents_dir().join("blank.txt")).unwrap();
    assert!(raw.starts_with("Title: \nDate: "));

    let editor = app.get("/editor?doc=blank.txt", Some(&cookie)).await;
    assert!(editor.text.contains("name=\"title\" value=\"\""));
}

#[tokio::test]
async fn test_multiline_title_is_rejected() {
    let app = helpers::TestApp::new().await;
    let cookie = app.login_admin().await;

    let response = app
        .save(&cookie, &[("title", "two\nlines"), ("content", "x"), ("doc_file", "multi.txt")])
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(!app.documents_dir().join("multi.txt").exists());
}
