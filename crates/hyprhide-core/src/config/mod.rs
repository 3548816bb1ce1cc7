//! # Configuration System
//!
//! Hierarchical TOML configuration for hyprhide.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.config/hyprhide/config.toml`
//! 3. **Explicit config** - the file named by `HYPRHIDE_CONFIG`
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use hyprhide_core::config::{HideSettings, HyprHideConfig};
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = HyprHideConfig::load_hierarchy()?;
//!     let settings = HideSettings::from_config(&config);
//!     assert!(settings.max_cycle_tries > 0);
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod settings;
pub mod types;
pub mod validation;

pub use settings::{HideSettings, ParkSentinel};
pub use types::{
    Config, HideConfig, HyprHideConfig, ParkConfig, RestoreConfig, ThumbnailConfig, WmConfig,
};
pub use validation::validate_config;

impl HyprHideConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
