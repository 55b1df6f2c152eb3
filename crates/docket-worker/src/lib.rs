//! Scheduled background tasks for Docket.
//!
//! This crate provides:
//! - A cron scheduler for periodic maintenance tasks
//! - The trash reaper job run on that schedule

pub mod jobs;
pub mod scheduler;

pub use jobs::TrashReapJob;
pub use scheduler::CronScheduler;
