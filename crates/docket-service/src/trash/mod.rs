//! Trash retention.

pub mod reaper;

pub use reaper::{ReapReport, TrashReaper};
