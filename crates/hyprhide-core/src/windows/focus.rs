//! Focus acquisition.
//!
//! Focusing by address is unreliable across workspaces, so callers fall back
//! to cycling focus on the current workspace a bounded number of times.

use std::time::Duration;

use tracing::{debug, warn};

use crate::config::settings::settle;
use crate::wm::{WmClient, WmCommand, WmError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    Focused { attempts: u32 },
    Exhausted { attempts: u32 },
}

pub fn is_focused(wm: &dyn WmClient, address: &str) -> Result<bool, WmError> {
    Ok(wm.active_address()?.as_deref() == Some(address))
}

/// Ask the window manager to focus `address` directly and report whether it took.
///
/// A rejected focus dispatch counts as a miss; only an unreachable control
/// plane is an error.
pub fn focus_directly(
    wm: &dyn WmClient,
    address: &str,
    settle_delay: Duration,
) -> Result<bool, WmError> {
    match wm.dispatch(&WmCommand::FocusWindow(address.to_string())) {
        Ok(()) => {}
        Err(WmError::DispatchRejected { response, .. }) => {
            warn!(
                event = "core.focus.direct_rejected",
                address = %address,
                response = %response
            );
            return Ok(false);
        }
        Err(e) => return Err(e),
    }
    settle(settle_delay);

    let focused = is_focused(wm, address)?;
    debug!(event = "core.focus.direct_result", address = %address, focused = focused);
    Ok(focused)
}

/// Cycle focus until `address` is active, dispatching `CycleNext` at most `max_tries` times.
pub fn cycle_until_focused(
    wm: &dyn WmClient,
    address: &str,
    max_tries: u32,
    delay: Duration,
) -> Result<CycleOutcome, WmError> {
    if is_focused(wm, address)? {
        return Ok(CycleOutcome::Focused { attempts: 0 });
    }

    for attempt in 1..=max_tries {
        wm.dispatch(&WmCommand::CycleNext)?;
        settle(delay);
        if is_focused(wm, address)? {
            debug!(event = "core.focus.cycle_succeeded", address = %address, attempts = attempt);
            return Ok(CycleOutcome::Focused { attempts: attempt });
        }
    }

    warn!(
        event = "core.focus.cycle_exhausted",
        address = %address,
        attempts = max_tries
    );
    Ok(CycleOutcome::Exhausted {
        attempts: max_tries,
    })
}
