//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use axum::Router;
use axum::body::Body;
use http::{HeaderMap, Request, StatusCode, header};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use docket_auth::StaticCredentialStore;
use docket_core::config::AppConfig;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
    /// Owns the data root for the lifetime of the test
    pub data_dir: TempDir,
}

impl TestApp {
    /// Create a new test application over an empty data root
    pub async fn new() -> Self {
        let data_dir = tempfile::tempdir().expect("Failed to create temp dir");

        let mut config = AppConfig::default();
        config.storage.data_root = data_dir.path().to_string_lossy().to_string();
        config.trash.reaper_enabled = false;

        let credentials = Arc::new(StaticCredentialStore::from_config(&config.auth));
        let state = docket_api::AppState::new(config.clone(), credentials)
            .await
            .expect("Failed to build app state");

        let router = docket_api::router::build_router(state);

        Self {
            router,
            config,
            data_dir,
        }
    }

    /// Active documents folder on disk
    pub fn documents_dir(&self) -> PathBuf {
        self.data_dir.path().join(&self.config.storage.documents_dir)
    }

    /// Trash folder on disk
    pub fn trash_dir(&self) -> PathBuf {
        self.data_dir.path().join(&self.config.storage.trash_dir)
    }

    /// Write a raw file into the trash and backdate its mtime
    pub fn plant_trash_file(&self, name: &str, contents: &str, age_days: u64) {
        let path = self.trash_dir().join(name);
        std::fs::write(&path, contents).expect("Failed to write trash file");
        let file = std::fs::File::options()
            .write(true)
            .open(&path)
            .expect("Failed to open trash file");
        let modified = SystemTime::now() - Duration::from_secs(age_days * 24 * 60 * 60);
        file.set_modified(modified).expect("Failed to set mtime");
    }

    /// Log in with the given credentials and return the session cookie
    pub async fn login(&self, login: &str, password: &str) -> String {
        let response = self
            .post_form("/login", &[("login", login), ("password", password)], None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::SEE_OTHER,
            "Login failed: {}",
            response.text
        );

        response
            .session_cookie(&self.config.session.cookie_name)
            .expect("No session cookie in login response")
    }

    /// Log in as the default admin
    pub async fn login_admin(&self) -> String {
        self.login("admin", "admin123").await
    }

    /// Save a document through the editor endpoint
    pub async fn save(&self, cookie: &str, fields: &[(&str, &str)]) -> TestResponse {
        self.post_form("/save-document", fields, Some(cookie)).await
    }

    /// GET request
    pub async fn get(&self, path: &str, cookie: Option<&str>) -> TestResponse {
        self.send("GET", path, None, cookie).await
    }

    /// POST with no body
    pub async fn post(&self, path: &str, cookie: Option<&str>) -> TestResponse {
        self.send("POST", path, None, cookie).await
    }

    /// POST a url-encoded form
    pub async fn post_form(
        &self,
        path: &str,
        fields: &[(&str, &str)],
        cookie: Option<&str>,
    ) -> TestResponse {
        self.send("POST", path, Some(encode_form(fields)), cookie)
            .await
    }

    async fn send(
        &self,
        method: &str,
        path: &str,
        form: Option<String>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);

        if form.is_some() {
            req = req.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        }
        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
        }

        let req = req
            .body(Body::from(form.unwrap_or_default()))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), 16 * 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        let text = String::from_utf8_lossy(&bytes).to_string();

        TestResponse {
            status,
            headers,
            body,
            bytes: bytes.to_vec(),
            text,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body, or `Null`
    pub body: Value,
    /// Raw body
    pub bytes: Vec<u8>,
    /// Body as text
    pub text: String,
}

impl TestResponse {
    /// The `Location` header, if any
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    /// `name=value` for the named cookie set by this response, if any
    pub fn session_cookie(&self, name: &str) -> Option<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .filter_map(|v| v.split(';').next())
            .find(|pair| pair.starts_with(&format!("{name}=")))
            .map(str::to_string)
    }
}

fn encode_form(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
        .collect::<Vec<_>>()
        .join("&")
}

fn encode_component(value: &str) -> String {
    let mut out = String::new();
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
