//! Auth handlers: login form, login, logout.

use axum::Form;
use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::{info, warn};

use crate::dto::request::LoginRequest;
use crate::error::PageError;
use crate::extractors::MaybeUser;
use crate::state::AppState;
use crate::views::{LoginTemplate, render};

/// GET /login
pub async fn login_form(
    State(state): State<AppState>,
    MaybeUser(identity): MaybeUser,
) -> Result<Response, PageError> {
    let flash = identity
        .as_ref()
        .and_then(|id| state.sessions.take_flash(&id.token));

    let page = render(&LoginTemplate {
        flash: flash.as_deref(),
        error: None,
        login: "",
    })?;
    Ok(page.into_response())
}

/// POST /login
///
/// A successful login replaces any session the caller already holds.
pub async fn login(
    State(state): State<AppState>,
    MaybeUser(identity): MaybeUser,
    jar: CookieJar,
    Form(req): Form<LoginRequest>,
) -> Result<Response, PageError> {
    if !state.credentials.verify(&req.login, &req.password) {
        warn!(login = %req.login, "Failed login attempt");
        let page = render(&LoginTemplate {
            flash: None,
            error: Some("Invalid login or password"),
            login: &req.login,
        })?;
        return Ok(page.into_response());
    }

    let previous = identity.as_ref().map(|id| id.token.as_str());
    let session = state.sessions.renew(previous, &req.login);
    state.sessions.set_flash(&session.token, "Login successful!");
    info!(user = %req.login, "User logged in");

    let cookie = Cookie::build((state.config.session.cookie_name.clone(), session.token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.config.session.secure_cookie);

    Ok((jar.add(cookie), Redirect::to("/dashboard")).into_response())
}

/// GET /logout
pub async fn logout(
    State(state): State<AppState>,
    MaybeUser(identity): MaybeUser,
    jar: CookieJar,
) -> impl IntoResponse {
    if let Some(identity) = identity {
        state.sessions.remove(&identity.token);
        info!(user = %identity.username, "User logged out");
    }

    let jar = jar.remove(Cookie::build(state.config.session.cookie_name.clone()).path("/"));
    (jar, Redirect::to("/"))
}
