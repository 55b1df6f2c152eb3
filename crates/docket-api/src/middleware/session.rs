//! Session cookie resolution.
//!
//! Looks the session cookie up in the [`SessionStore`](docket_auth::SessionStore)
//! and, when it names a live session, attaches an [`Identity`] to the
//! request extensions. Enforcement is left to the extractors.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;

use crate::state::AppState;

/// The logged-in user behind the current request.
#[derive(Debug, Clone)]
pub struct Identity {
    /// Authenticated username.
    pub username: String,
    /// Session token from the cookie.
    pub token: String,
}

/// Resolve the session cookie into an [`Identity`] extension.
pub async fn resolve_session(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(cookie) = jar.get(&state.config.session.cookie_name) {
        let token = cookie.value();
        if let Some(username) = state.sessions.username(token) {
            request.extensions_mut().insert(Identity {
                username,
                token: token.to_string(),
            });
        }
    }

    next.run(request).await
}
