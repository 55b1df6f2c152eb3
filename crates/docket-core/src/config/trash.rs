//! Trash retention configuration.

use serde::{Deserialize, Serialize};

/// Retention window and background reaper schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrashConfig {
    /// Trashed documents older than this many whole days are purged.
    #[serde(default = "default_retention_days")]
    pub retention_days: i64,
    /// Whether the scheduled reaper runs in the background.
    #[serde(default = "default_true")]
    pub reaper_enabled: bool,
    /// Six-field cron expression for the scheduled reaper.
    #[serde(default = "default_reaper_schedule")]
    pub reaper_schedule: String,
}

impl Default for TrashConfig {
    fn default() -> Self {
        Self {
            retention_days: default_retention_days(),
            reaper_enabled: true,
            reaper_schedule: default_reaper_schedule(),
        }
    }
}

fn default_retention_days() -> i64 {
    30
}

fn default_true() -> bool {
    true
}

fn default_reaper_schedule() -> String {
    "0 0 * * * *".to_string()
}
