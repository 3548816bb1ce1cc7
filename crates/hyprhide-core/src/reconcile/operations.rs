use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::config::ParkSentinel;
use crate::reconcile::{errors::ReconcileError, types::ReconcileSummary};
use crate::registry::{WindowRecord, WindowRegistry, validate_address};
use crate::wm::WmClient;

/// Bring the registry in line with the live window list.
///
/// Parked windows without a record get a synthesized one; records whose
/// window is gone are deleted. Running it twice in a row changes nothing
/// the second time. The caller holds the registry lock.
pub fn reconcile(
    wm: &dyn WmClient,
    registry: &WindowRegistry,
    park: &ParkSentinel,
) -> Result<ReconcileSummary, ReconcileError> {
    info!(event = "core.reconcile.started", backend = wm.name());

    let clients = wm.list_clients()?;
    let records = registry.list_all()?;

    let recorded: HashSet<&str> = records.iter().map(|r| r.address.as_str()).collect();
    let live: HashSet<&str> = clients.iter().map(|c| c.address.as_str()).collect();

    let mut summary = ReconcileSummary::new();

    for client in &clients {
        if recorded.contains(client.address.as_str()) {
            continue;
        }
        let Some(position) = client.position() else {
            debug!(
                event = "core.reconcile.client_without_geometry",
                address = %client.address
            );
            continue;
        };
        if !park.is_parked(position) {
            continue;
        }
        if let Err(e) = validate_address(&client.address) {
            warn!(
                event = "core.reconcile.unusable_address",
                address = %client.address,
                error = %e
            );
            continue;
        }

        let Some(mut record) = WindowRecord::from_client(client, client.floating) else {
            continue;
        };
        record.synthesized = true;
        registry.put(&record)?;

        info!(
            event = "core.reconcile.record_synthesized",
            address = %client.address,
            class = %client.class,
            position = %position
        );
        summary.synthesized.push(client.address.clone());
    }

    for record in &records {
        if live.contains(record.address.as_str()) {
            continue;
        }
        registry.delete(&record.address)?;

        info!(
            event = "core.reconcile.stale_record_removed",
            address = %record.address,
            title = %record.title
        );
        summary.removed.push(record.address.clone());
    }

    info!(
        event = "core.reconcile.completed",
        synthesized = summary.synthesized.len(),
        removed = summary.removed.len()
    );
    Ok(summary)
}
