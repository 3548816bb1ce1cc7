//! Restore a parked window to where it was hidden from.
//!
//! Restore is a linear state machine. Each phase issues its commands, lets
//! the compositor settle, and names the phase that runs next. Any failure
//! before [`RestorePhase::Cleanup`] leaves the record in place so the restore
//! can be retried.

use tracing::{debug, info, warn};

use crate::config::settings::settle;
use crate::config::{HideSettings, ParkSentinel};
use crate::registry::{WindowRecord, WindowRegistry};
use crate::windows::errors::WindowError;
use crate::windows::focus::{self, CycleOutcome};
use crate::wm::{ClientInfo, MoveTarget, Position, WmClient, WmCommand};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestorePhase {
    SwitchWorkspace,
    DirectFocus,
    CycleFocus,
    EnsureFloating,
    PlaceOnWorkspace,
    Reacquire,
    MoveToPosition,
    RestoreFloatingState,
    Cleanup,
    Done,
}

/// Bring the hidden window at `address` back and drop its record.
pub fn restore_hidden_window(
    wm: &dyn WmClient,
    registry: &WindowRegistry,
    settings: &HideSettings,
    address: &str,
) -> Result<WindowRecord, WindowError> {
    let record = registry
        .get(address)?
        .ok_or_else(|| WindowError::NotHidden {
            address: address.to_string(),
        })?;

    info!(
        event = "core.restore.started",
        address = %address,
        workspace = %record.workspace,
        position = %record.position,
        synthesized = record.synthesized
    );

    let restore = Restore {
        wm,
        registry,
        settings,
        record: &record,
    };

    let mut phase = RestorePhase::SwitchWorkspace;
    while phase != RestorePhase::Done {
        debug!(event = "core.restore.phase", address = %address, phase = ?phase);
        phase = restore.step(phase)?;
    }

    info!(event = "core.restore.completed", address = %address);
    Ok(record)
}

/// Where the window goes back to.
///
/// A recorded position that is itself parked (possible only for records the
/// sweep synthesized) would leave the window invisible, so the workspace
/// origin is used instead.
pub fn restore_target(record: &WindowRecord, park: &ParkSentinel) -> Position {
    if park.is_parked(record.position) {
        Position { x: 0, y: 0 }
    } else {
        record.position
    }
}

struct Restore<'a> {
    wm: &'a dyn WmClient,
    registry: &'a WindowRegistry,
    settings: &'a HideSettings,
    record: &'a WindowRecord,
}

impl Restore<'_> {
    fn address(&self) -> &str {
        &self.record.address
    }

    fn step(&self, phase: RestorePhase) -> Result<RestorePhase, WindowError> {
        let next = match phase {
            RestorePhase::SwitchWorkspace => {
                self.dispatch(WmCommand::SwitchWorkspace(self.record.workspace.clone()))?;
                RestorePhase::DirectFocus
            }
            RestorePhase::DirectFocus => {
                if focus::focus_directly(self.wm, self.address(), self.settings.restore_settle)? {
                    RestorePhase::EnsureFloating
                } else {
                    RestorePhase::CycleFocus
                }
            }
            RestorePhase::CycleFocus => {
                self.cycle_focus()?;
                RestorePhase::EnsureFloating
            }
            RestorePhase::EnsureFloating => {
                if !self.live()?.floating {
                    self.dispatch(WmCommand::ToggleFloating(Some(self.address().to_string())))?;
                }
                RestorePhase::PlaceOnWorkspace
            }
            RestorePhase::PlaceOnWorkspace => {
                self.place_on_workspace()?;
                RestorePhase::Reacquire
            }
            RestorePhase::Reacquire => {
                if !focus::is_focused(self.wm, self.address())? {
                    warn!(event = "core.restore.focus_lost", address = %self.address());
                    self.cycle_focus()?;
                }
                RestorePhase::MoveToPosition
            }
            RestorePhase::MoveToPosition => {
                let target = restore_target(self.record, &self.settings.park);
                self.dispatch(WmCommand::MoveActive(MoveTarget::Exact(target)))?;
                RestorePhase::RestoreFloatingState
            }
            RestorePhase::RestoreFloatingState => {
                self.restore_floating_state()?;
                RestorePhase::Cleanup
            }
            RestorePhase::Cleanup => {
                self.registry.delete(self.address())?;
                RestorePhase::Done
            }
            RestorePhase::Done => RestorePhase::Done,
        };
        Ok(next)
    }

    fn dispatch(&self, command: WmCommand) -> Result<(), WindowError> {
        self.wm.dispatch(&command)?;
        settle(self.settings.restore_settle);
        Ok(())
    }

    fn live(&self) -> Result<ClientInfo, WindowError> {
        self.wm
            .client(self.address())?
            .ok_or_else(|| WindowError::WindowVanished {
                address: self.address().to_string(),
            })
    }

    fn place_on_workspace(&self) -> Result<(), WindowError> {
        self.dispatch(WmCommand::MoveToWorkspaceSilent {
            workspace: self.record.workspace.clone(),
            address: Some(self.address().to_string()),
        })
    }

    /// One bounded focus-cycling pass. Bounded by the live client count so a
    /// small session never cycles more than once around.
    fn cycle_focus(&self) -> Result<(), WindowError> {
        let live_count = u32::try_from(self.wm.list_clients()?.len()).unwrap_or(u32::MAX);
        let max_tries = self.settings.max_cycle_tries.min(live_count);

        match focus::cycle_until_focused(
            self.wm,
            self.address(),
            max_tries,
            self.settings.cycle_delay,
        )? {
            CycleOutcome::Focused { .. } => Ok(()),
            CycleOutcome::Exhausted { attempts } => {
                if self.wm.client(self.address())?.is_none() {
                    Err(WindowError::WindowVanished {
                        address: self.address().to_string(),
                    })
                } else {
                    Err(WindowError::FocusAcquisitionFailed {
                        address: self.address().to_string(),
                        attempts,
                    })
                }
            }
        }
    }

    fn restore_floating_state(&self) -> Result<(), WindowError> {
        let wanted = self.record.was_floating;
        if self.live()?.floating != wanted {
            self.dispatch(WmCommand::ToggleFloating(Some(self.address().to_string())))?;
        }

        let actual = self.live()?.floating;
        if actual != wanted {
            warn!(
                event = "core.restore.floating_state_mismatch",
                address = %self.address(),
                expected = wanted,
                actual = actual
            );
            self.dispatch(WmCommand::ToggleFloating(Some(self.address().to_string())))?;
            self.place_on_workspace()?;
        }
        Ok(())
    }
}
