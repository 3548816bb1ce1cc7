//! Configuration type definitions for hyprhide.
//!
//! These types are serialized/deserialized from TOML config files. Every
//! field is optional so that a later file in the hierarchy only overrides
//! what it actually sets; defaults are resolved by the accessors in
//! [`super::defaults`].
//!
//! # Example Configuration
//!
//! ```toml
//! [park]
//! x = 16000
//! y = 16000
//! threshold = 12000
//!
//! [restore]
//! max_cycle_tries = 10
//! settle_delay_ms = 300
//! cycle_delay_ms = 200
//!
//! [thumbnails]
//! enabled = true
//! program = "grim"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Runtime configuration derived from the environment, not from config files.
#[derive(Debug, Clone)]
pub struct Config {
    /// Flat directory holding one record (and optional thumbnail) per hidden window.
    /// Default: `~/.local/share/hypr-hide`, overridden by `HYPRHIDE_DATA_DIR`.
    pub data_dir: PathBuf,
}

/// Main configuration loaded from TOML config files.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct HyprHideConfig {
    /// Where hidden windows are parked and how parked windows are detected
    #[serde(default)]
    pub park: ParkConfig,

    /// Bounds and delays for the restore focus protocol
    #[serde(default)]
    pub restore: RestoreConfig,

    /// Delays for the hide operation
    #[serde(default)]
    pub hide: HideConfig,

    /// Thumbnail capture of windows before they are parked
    #[serde(default)]
    pub thumbnails: ThumbnailConfig,

    /// Window manager control plane
    #[serde(default)]
    pub wm: WmConfig,
}

/// Park sentinel configuration.
///
/// A window is considered parked when its position is further than
/// `threshold` pixels from the origin on either axis.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ParkConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RestoreConfig {
    /// Upper bound on focus-cycle attempts. The live client count lowers it further.
    /// Default: 10.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_cycle_tries: Option<u32>,

    /// Pause after each state-changing dispatch.
    /// Default: 300ms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settle_delay_ms: Option<u64>,

    /// Pause between focus-cycle attempts.
    /// Default: 200ms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle_delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct HideConfig {
    /// Pause after exit-fullscreen and toggle-floating dispatches.
    /// Default: 300ms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settle_delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ThumbnailConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Screenshot program invoked as `<program> -g "<x>,<y> <w>x<h>" <file>`.
    /// Default: `grim`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct WmConfig {
    /// Path or name of the hyprctl binary.
    /// Default: `hyprctl`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hyprctl: Option<String>,
}
