pub mod errors;
#[cfg(test)]
pub mod fake;
pub mod hyprctl;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use errors::WmError;
pub use hyprctl::HyprctlClient;
pub use traits::WmClient;
pub use types::{ClientInfo, Geometry, MoveTarget, Position, Size, WmCommand, WorkspaceId};
