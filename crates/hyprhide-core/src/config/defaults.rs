//! Default values for configuration types.
//!
//! The file config keeps every field optional; the accessors here resolve
//! an unset field to its built-in default.

use crate::config::types::{
    Config, HideConfig, ParkConfig, RestoreConfig, ThumbnailConfig, WmConfig,
};

pub const DEFAULT_PARK_X: i32 = 16000;
pub const DEFAULT_PARK_Y: i32 = 16000;
pub const DEFAULT_PARK_THRESHOLD: i32 = 12000;
pub const DEFAULT_MAX_CYCLE_TRIES: u32 = 10;
pub const DEFAULT_RESTORE_SETTLE_MS: u64 = 300;
pub const DEFAULT_CYCLE_DELAY_MS: u64 = 200;
pub const DEFAULT_HIDE_SETTLE_MS: u64 = 300;
pub const DEFAULT_SCREENSHOT_PROGRAM: &str = "grim";
pub const DEFAULT_HYPRCTL: &str = "hyprctl";

/// Directory name under the user data dir. Matches where earlier releases kept records.
const DATA_DIR_NAME: &str = "hypr-hide";

impl ParkConfig {
    pub fn x(&self) -> i32 {
        self.x.unwrap_or(DEFAULT_PARK_X)
    }

    pub fn y(&self) -> i32 {
        self.y.unwrap_or(DEFAULT_PARK_Y)
    }

    pub fn threshold(&self) -> i32 {
        self.threshold.unwrap_or(DEFAULT_PARK_THRESHOLD)
    }
}

impl RestoreConfig {
    pub fn max_cycle_tries(&self) -> u32 {
        self.max_cycle_tries.unwrap_or(DEFAULT_MAX_CYCLE_TRIES)
    }

    pub fn settle_delay_ms(&self) -> u64 {
        self.settle_delay_ms.unwrap_or(DEFAULT_RESTORE_SETTLE_MS)
    }

    pub fn cycle_delay_ms(&self) -> u64 {
        self.cycle_delay_ms.unwrap_or(DEFAULT_CYCLE_DELAY_MS)
    }
}

impl HideConfig {
    pub fn settle_delay_ms(&self) -> u64 {
        self.settle_delay_ms.unwrap_or(DEFAULT_HIDE_SETTLE_MS)
    }
}

impl ThumbnailConfig {
    pub fn enabled(&self) -> bool {
        self.enabled.unwrap_or(false)
    }

    pub fn program(&self) -> &str {
        self.program.as_deref().unwrap_or(DEFAULT_SCREENSHOT_PROGRAM)
    }
}

impl WmConfig {
    pub fn hyprctl(&self) -> &str {
        self.hyprctl.as_deref().unwrap_or(DEFAULT_HYPRCTL)
    }
}

impl Default for Config {
    fn default() -> Self {
        if let Some(dir) = std::env::var_os("HYPRHIDE_DATA_DIR").filter(|v| !v.is_empty()) {
            return Self {
                data_dir: dir.into(),
            };
        }

        let data_dir = match dirs::data_local_dir() {
            Some(data) => data.join(DATA_DIR_NAME),
            None => {
                eprintln!(
                    "Warning: Could not find user data directory. Set HOME or HYPRHIDE_DATA_DIR. \
                    Using fallback directory."
                );
                std::env::temp_dir().join(DATA_DIR_NAME)
            }
        };

        Self { data_dir }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory holding the per-window records and thumbnails.
    pub fn records_dir(&self) -> std::path::PathBuf {
        self.data_dir.clone()
    }
}
