//! Session extractors reading the [`Identity`] left by the session middleware.
//!
//! - [`AuthUser`] rejects with a 401 JSON body (document mutations).
//! - [`PageUser`] rejects with a redirect to `/login` (pages).
//! - [`MaybeUser`] never rejects.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::Redirect;

use docket_core::error::AppError;
use docket_service::context::RequestContext;

use crate::error::ApiError;
use crate::middleware::session::Identity;

fn identity(parts: &Parts) -> Option<Identity> {
    parts.extensions.get::<Identity>().cloned()
}

/// Extracted authenticated user context available in JSON handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let identity =
            identity(parts).ok_or_else(|| ApiError(AppError::unauthorized("Not authorized")))?;
        Ok(AuthUser(RequestContext::new(identity.username)))
    }
}

/// Logged-in user for page handlers.
#[derive(Debug, Clone)]
pub struct PageUser(pub Identity);

impl std::ops::Deref for PageUser {
    type Target = Identity;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S: Send + Sync> FromRequestParts<S> for PageUser {
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        identity(parts)
            .map(PageUser)
            .ok_or_else(|| Redirect::to("/login"))
    }
}

/// Optional identity, for pages that render either way.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<Identity>);

impl<S: Send + Sync> FromRequestParts<S> for MaybeUser {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(identity(parts)))
    }
}
