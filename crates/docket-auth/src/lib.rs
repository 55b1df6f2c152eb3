//! # docket-auth
//!
//! Authentication for Docket.
//!
//! ## Modules
//!
//! - `credentials` — plain-text credential table behind [`CredentialVerifier`](docket_core::traits::CredentialVerifier)
//! - `session` — in-memory cookie session store with one-shot flash messages

pub mod credentials;
pub mod session;

pub use credentials::StaticCredentialStore;
pub use session::{Session, SessionStore};
