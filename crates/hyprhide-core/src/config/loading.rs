//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.config/hyprhide/config.toml`
//! 3. **Explicit config** - the file named by `HYPRHIDE_CONFIG`, if set

use crate::config::types::{
    HideConfig, HyprHideConfig, ParkConfig, RestoreConfig, ThumbnailConfig, WmConfig,
};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a present file cannot be read or parsed, or if the
/// merged result fails validation. A missing user config is not an error;
/// a missing `HYPRHIDE_CONFIG` file is.
pub fn load_hierarchy() -> Result<HyprHideConfig, ConfigError> {
    let mut config = HyprHideConfig::default();

    if let Some(user_path) = user_config_path() {
        match load_config_file(&user_path) {
            Ok(user_config) => config = merge_configs(config, user_config),
            Err(ConfigError::ConfigNotFound { .. }) => {}
            Err(e) => return Err(e),
        }
    }

    if let Some(explicit) = std::env::var_os("HYPRHIDE_CONFIG").filter(|v| !v.is_empty()) {
        let explicit_config = load_config_file(Path::new(&explicit))?;
        config = merge_configs(config, explicit_config);
    }

    validate_config(&config)?;

    Ok(config)
}

/// Path of the user config file (`~/.config/hyprhide/config.toml`).
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hyprhide").join("config.toml"))
}

/// Load a configuration file from the given path.
pub fn load_config_file(path: &Path) -> Result<HyprHideConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::ConfigNotFound {
                path: path.display().to_string(),
            }
        } else {
            ConfigError::IoError { source: e }
        }
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        message: format!("'{}': {}", path.display(), e),
    })
}

/// Merge two configurations, with override_config taking precedence.
///
/// Only fields actually present in the override replace base values.
pub fn merge_configs(base: HyprHideConfig, override_config: HyprHideConfig) -> HyprHideConfig {
    HyprHideConfig {
        park: ParkConfig {
            x: override_config.park.x.or(base.park.x),
            y: override_config.park.y.or(base.park.y),
            threshold: override_config.park.threshold.or(base.park.threshold),
        },
        restore: RestoreConfig {
            max_cycle_tries: override_config
                .restore
                .max_cycle_tries
                .or(base.restore.max_cycle_tries),
            settle_delay_ms: override_config
                .restore
                .settle_delay_ms
                .or(base.restore.settle_delay_ms),
            cycle_delay_ms: override_config
                .restore
                .cycle_delay_ms
                .or(base.restore.cycle_delay_ms),
        },
        hide: HideConfig {
            settle_delay_ms: override_config
                .hide
                .settle_delay_ms
                .or(base.hide.settle_delay_ms),
        },
        thumbnails: ThumbnailConfig {
            enabled: override_config.thumbnails.enabled.or(base.thumbnails.enabled),
            program: override_config.thumbnails.program.or(base.thumbnails.program),
        },
        wm: WmConfig {
            hyprctl: override_config.wm.hyprctl.or(base.wm.hyprctl),
        },
    }
}
