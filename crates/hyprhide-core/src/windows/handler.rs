use tracing::{error, info};

use crate::capture::{GrimCapture, ScreenCapture};
use crate::config::{Config, HideSettings, HyprHideConfig};
use crate::reconcile;
use crate::registry::{WindowRecord, WindowRegistry};
use crate::windows::{errors::WindowError, hide, restore};
use crate::wm::HyprctlClient;

fn open_registry() -> WindowRegistry {
    WindowRegistry::new(Config::new().records_dir())
}

/// Hide the focused window in the running Hyprland session.
pub fn hide_window(config: &HyprHideConfig) -> Result<WindowRecord, WindowError> {
    info!(event = "core.hide.handler_started");

    let settings = HideSettings::from_config(config);
    let wm = HyprctlClient::new(config.wm.hyprctl());
    let registry = open_registry();
    let grim = GrimCapture::new(config.thumbnails.program());
    let capture: Option<&dyn ScreenCapture> = if settings.thumbnails {
        Some(&grim)
    } else {
        None
    };

    let _lock = registry.lock()?;
    hide::hide_active_window(&wm, &registry, capture, &settings).inspect_err(|e| {
        error!(event = "core.hide.handler_failed", error = %e);
    })
}

/// Restore a hidden window.
///
/// Without an address, the registry is reconciled first and the most
/// recently hidden window is restored.
pub fn restore_window(
    config: &HyprHideConfig,
    address: Option<&str>,
) -> Result<WindowRecord, WindowError> {
    info!(event = "core.restore.handler_started", address = ?address);

    let settings = HideSettings::from_config(config);
    let wm = HyprctlClient::new(config.wm.hyprctl());
    let registry = open_registry();

    let _lock = registry.lock()?;
    let address = match address {
        Some(address) => address.to_string(),
        None => {
            reconcile::reconcile(&wm, &registry, &settings.park)?;
            most_recent(&registry)?.address
        }
    };

    restore::restore_hidden_window(&wm, &registry, &settings, &address).inspect_err(|e| {
        error!(event = "core.restore.handler_failed", address = %address, error = %e);
    })
}

/// Every hidden window, oldest first.
pub fn list_hidden_windows() -> Result<Vec<WindowRecord>, WindowError> {
    Ok(open_registry().list_all()?)
}

fn most_recent(registry: &WindowRegistry) -> Result<WindowRecord, WindowError> {
    registry
        .list_all()?
        .into_iter()
        .max_by(|a, b| a.hidden_at.cmp(&b.hidden_at))
        .ok_or(WindowError::NoHiddenWindows)
}
