use tracing::{error, info};

use crate::config::{Config, HideSettings, HyprHideConfig};
use crate::reconcile::{errors::ReconcileError, operations, types::ReconcileSummary};
use crate::registry::WindowRegistry;
use crate::wm::HyprctlClient;

/// Run the reconciliation sweep against the live Hyprland session.
pub fn sweep(config: &HyprHideConfig) -> Result<ReconcileSummary, ReconcileError> {
    info!(event = "core.reconcile.sweep_started");

    let settings = HideSettings::from_config(config);
    let wm = HyprctlClient::new(config.wm.hyprctl());
    let registry = WindowRegistry::new(Config::new().records_dir());

    let _lock = registry.lock()?;
    match operations::reconcile(&wm, &registry, &settings.park) {
        Ok(summary) => {
            info!(
                event = "core.reconcile.sweep_completed",
                changes = summary.total_changes()
            );
            Ok(summary)
        }
        Err(e) => {
            error!(event = "core.reconcile.sweep_failed", error = %e);
            Err(e)
        }
    }
}
