use tracing::{error, info, warn};

use crate::capture::ScreenCapture;
use crate::config::HideSettings;
use crate::config::settings::settle;
use crate::registry::{WindowRecord, WindowRegistry, validate_address};
use crate::windows::{errors::WindowError, focus};
use crate::wm::{ClientInfo, MoveTarget, WmClient, WmCommand, WmError};

/// Float and park the focused window off-screen, recording where it came from.
///
/// A window that already has a record, or already sits in the park area,
/// is left alone: its record keeps the placement captured the first time.
/// Nothing is left in the registry unless the park dispatch succeeded.
pub fn hide_active_window(
    wm: &dyn WmClient,
    registry: &WindowRegistry,
    capture: Option<&dyn ScreenCapture>,
    settings: &HideSettings,
) -> Result<WindowRecord, WindowError> {
    let active = wm.active_client()?.ok_or(WindowError::NoActiveWindow)?;
    let address = active.address;
    validate_address(&address)?;

    info!(event = "core.hide.started", address = %address, backend = wm.name());

    if registry.get(&address)?.is_some() {
        info!(event = "core.hide.already_hidden", address = %address, reason = "record");
        return Err(WindowError::AlreadyHidden { address });
    }

    let mut client = read_client(wm, &address)?;
    let Some(geometry) = client.geometry else {
        return Err(WindowError::MissingGeometry { address });
    };
    if settings.park.is_parked(geometry.position) {
        info!(
            event = "core.hide.already_hidden",
            address = %address,
            reason = "parked",
            position = %geometry.position
        );
        return Err(WindowError::AlreadyHidden { address });
    }

    if client.fullscreen {
        dispatch_best_effort(wm, &WmCommand::ExitFullscreen, &address)?;
        settle(settings.hide_settle);
        client = read_client(wm, &address)?;
        info!(
            event = "core.hide.fullscreen_exited",
            address = %address,
            fullscreen = client.fullscreen
        );
    }

    let was_floating = client.floating;
    if !was_floating {
        client = make_floating(wm, client, settings)?;
    }

    let mut record = WindowRecord::from_client(&client, was_floating).ok_or_else(|| {
        WindowError::MissingGeometry {
            address: address.clone(),
        }
    })?;

    if settings.thumbnails
        && let Some(capture) = capture
        && let Some(geometry) = client.geometry
    {
        registry.ensure_directory()?;
        let path = registry.screenshot_path(&address)?;
        match capture.capture(&geometry, &path) {
            Ok(()) => record.screenshot_path = Some(path),
            Err(e) => warn!(
                event = "core.hide.thumbnail_failed",
                address = %address,
                error = %e
            ),
        }
    }

    registry.put(&record)?;

    if let Err(e) = park(wm, &address, settings) {
        error!(event = "core.hide.park_failed", address = %address, error = %e);
        if let Err(rollback_err) = registry.delete(&address) {
            error!(
                event = "core.hide.rollback_failed",
                address = %address,
                error = %rollback_err
            );
        }
        return Err(e);
    }

    info!(
        event = "core.hide.completed",
        address = %address,
        workspace = %record.workspace,
        position = %record.position,
        was_floating = was_floating
    );
    Ok(record)
}

fn read_client(wm: &dyn WmClient, address: &str) -> Result<ClientInfo, WindowError> {
    wm.client(address)?.ok_or_else(|| WindowError::MissingGeometry {
        address: address.to_string(),
    })
}

/// Toggle a tiled window to floating, retrying once if the first toggle didn't stick.
fn make_floating(
    wm: &dyn WmClient,
    mut client: ClientInfo,
    settings: &HideSettings,
) -> Result<ClientInfo, WindowError> {
    for attempt in 1..=2 {
        dispatch_best_effort(
            wm,
            &WmCommand::ToggleFloating(Some(client.address.clone())),
            &client.address,
        )?;
        settle(settings.hide_settle);
        client = read_client(wm, &client.address)?;
        if client.floating {
            return Ok(client);
        }
        warn!(
            event = "core.hide.toggle_floating_ignored",
            address = %client.address,
            attempt = attempt
        );
    }
    Ok(client)
}

/// A rejected reply is logged and ignored. An unreachable control plane still fails.
fn dispatch_best_effort(
    wm: &dyn WmClient,
    command: &WmCommand,
    address: &str,
) -> Result<(), WindowError> {
    match wm.dispatch(command) {
        Ok(()) => Ok(()),
        Err(WmError::DispatchRejected { dispatch, response }) => {
            warn!(
                event = "core.hide.dispatch_rejected",
                address = %address,
                dispatch = %dispatch,
                response = %response
            );
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn park(wm: &dyn WmClient, address: &str, settings: &HideSettings) -> Result<(), WindowError> {
    let focused = focus::is_focused(wm, address)?
        || focus::focus_directly(wm, address, settings.hide_settle)?;
    if !focused {
        return Err(WindowError::FocusAcquisitionFailed {
            address: address.to_string(),
            attempts: 0,
        });
    }
    wm.dispatch(&WmCommand::MoveActive(MoveTarget::Exact(settings.park.position)))?;
    Ok(())
}
