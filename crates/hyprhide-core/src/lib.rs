//! hyprhide-core: Core library for hiding Hyprland windows off-screen
//!
//! A hidden window is floated and parked far outside every monitor. Its
//! original placement is kept in a per-window record so it can be put back.
//!
//! # Main Entry Points
//!
//! - [`windows`] - Hide the focused window, restore a hidden one
//! - [`reconcile`] - Sweep the registry against the live window list
//! - [`registry`] - Durable records of hidden windows
//! - [`wm`] - Hyprland control-plane client
//! - [`config`] - Configuration management

pub mod capture;
pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod reconcile;
pub mod registry;
pub mod windows;
pub mod wm;

// Re-export commonly used types at crate root for convenience
pub use config::{HideSettings, HyprHideConfig, ParkSentinel};
pub use reconcile::{ReconcileError, ReconcileSummary};
pub use registry::{RegistryError, WindowRecord, WindowRegistry};
pub use windows::WindowError;
pub use wm::{ClientInfo, HyprctlClient, Position, WmClient, WmCommand, WmError, WorkspaceId};

// Re-export handler modules as the primary API
pub use reconcile::handler as reconcile_ops;
pub use windows::handler as window_ops;

// Re-export logging initialization
pub use logging::init_logging;
