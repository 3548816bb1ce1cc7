//! Resolved operation settings.
//!
//! [`HideSettings`] is built once from the loaded [`HyprHideConfig`] and
//! handed to the hide, restore and reconcile operations explicitly.

use std::time::Duration;

use crate::config::types::HyprHideConfig;
use crate::wm::types::Position;

/// Off-screen coordinate used to park windows, plus the distance beyond
/// which any window counts as parked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParkSentinel {
    pub position: Position,
    pub threshold: i32,
}

impl ParkSentinel {
    /// True when `position` is further than the threshold from the origin on either axis.
    pub fn is_parked(&self, position: Position) -> bool {
        position.x.unsigned_abs().max(position.y.unsigned_abs()) > self.threshold.unsigned_abs()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HideSettings {
    pub park: ParkSentinel,
    /// Upper bound on `CycleNext` dispatches per focus-cycle pass.
    pub max_cycle_tries: u32,
    pub hide_settle: Duration,
    pub restore_settle: Duration,
    pub cycle_delay: Duration,
    pub thumbnails: bool,
}

impl HideSettings {
    pub fn from_config(config: &HyprHideConfig) -> Self {
        Self {
            park: ParkSentinel {
                position: Position {
                    x: config.park.x(),
                    y: config.park.y(),
                },
                threshold: config.park.threshold(),
            },
            max_cycle_tries: config.restore.max_cycle_tries(),
            hide_settle: Duration::from_millis(config.hide.settle_delay_ms()),
            restore_settle: Duration::from_millis(config.restore.settle_delay_ms()),
            cycle_delay: Duration::from_millis(config.restore.cycle_delay_ms()),
            thumbnails: config.thumbnails.enabled(),
        }
    }

    /// Same settings with every delay set to zero.
    pub fn without_delays(self) -> Self {
        Self {
            hide_settle: Duration::ZERO,
            restore_settle: Duration::ZERO,
            cycle_delay: Duration::ZERO,
            ..self
        }
    }
}

impl Default for HideSettings {
    fn default() -> Self {
        Self::from_config(&HyprHideConfig::default())
    }
}

/// Block for `delay`, letting the control plane catch up with a dispatch.
pub(crate) fn settle(delay: Duration) {
    if !delay.is_zero() {
        std::thread::sleep(delay);
    }
}
