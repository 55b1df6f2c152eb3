//! Credential verification trait.

/// Checks a username/password pair at login.
///
/// Implemented in `docket-auth`; injected into the HTTP layer so tests
/// can substitute their own table.
pub trait CredentialVerifier: Send + Sync + std::fmt::Debug + 'static {
    /// Return `true` when `password` is the password registered for `username`.
    fn verify(&self, username: &str, password: &str) -> bool;
}
