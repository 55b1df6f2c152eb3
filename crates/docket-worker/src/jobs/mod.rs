//! Built-in job implementations.

pub mod trash;

pub use trash::TrashReapJob;
