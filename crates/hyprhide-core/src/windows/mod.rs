pub mod errors;
pub mod focus;
pub mod handler;
pub mod hide;
pub mod restore;

// Public API exports
pub use errors::WindowError;
pub use handler::{hide_window, list_hidden_windows, restore_window};
pub use hide::hide_active_window;
pub use restore::{RestorePhase, restore_hidden_window};
