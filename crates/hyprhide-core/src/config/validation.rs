//! Configuration validation logic.

use crate::config::types::HyprHideConfig;
use crate::errors::ConfigError;

/// Validate a HyprHideConfig, returning an error if any values are invalid.
///
/// # Validation Rules
///
/// - Park threshold must be positive
/// - The park sentinel must itself count as parked (beyond the threshold),
///   otherwise the sweep could never recognise a window hidden by `hide`
/// - `max_cycle_tries` must be at least 1
/// - Program names must not be empty
pub fn validate_config(config: &HyprHideConfig) -> Result<(), ConfigError> {
    let threshold = config.park.threshold();
    if threshold <= 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: format!("park.threshold must be positive, got {}", threshold),
        });
    }

    let (x, y) = (config.park.x(), config.park.y());
    if x.unsigned_abs().max(y.unsigned_abs()) <= threshold.unsigned_abs() {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "park position ({}, {}) must lie beyond park.threshold ({})",
                x, y, threshold
            ),
        });
    }

    if config.restore.max_cycle_tries() == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "restore.max_cycle_tries must be at least 1".to_string(),
        });
    }

    if config.thumbnails.program().trim().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "thumbnails.program cannot be empty".to_string(),
        });
    }

    if config.wm.hyprctl().trim().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "wm.hyprctl cannot be empty".to_string(),
        });
    }

    Ok(())
}
