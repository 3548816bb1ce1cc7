use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub position: Position,
    pub size: Size,
}

/// Workspace identifier: numeric id, or a symbolic name for named and special workspaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WorkspaceId {
    Id(i64),
    Name(String),
}

impl WorkspaceId {
    /// Render as a Hyprland workspace selector (`2`, `name:web`, `special:scratch`).
    pub fn selector(&self) -> String {
        match self {
            WorkspaceId::Id(id) => id.to_string(),
            WorkspaceId::Name(name) if name.starts_with("special") => name.clone(),
            WorkspaceId::Name(name) => format!("name:{}", name),
        }
    }
}

impl fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkspaceId::Id(id) => write!(f, "{}", id),
            WorkspaceId::Name(name) => write!(f, "{}", name),
        }
    }
}

/// Live state of one client window as reported by the window manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientInfo {
    pub address: String,
    pub title: String,
    pub class: String,
    /// `None` when the control plane did not report position and size.
    pub geometry: Option<Geometry>,
    pub workspace: WorkspaceId,
    pub floating: bool,
    pub fullscreen: bool,
}

impl ClientInfo {
    pub fn position(&self) -> Option<Position> {
        self.geometry.map(|g| g.position)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveTarget {
    Exact(Position),
    Relative { dx: i32, dy: i32 },
}

/// Commands the hide/restore protocol issues against the window manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WmCommand {
    SwitchWorkspace(WorkspaceId),
    FocusWindow(String),
    CycleNext,
    /// Toggle floating on the given window, or on the active window when `None`.
    ToggleFloating(Option<String>),
    MoveActive(MoveTarget),
    /// Move a window (the active one when `address` is `None`) without following it.
    MoveToWorkspaceSilent {
        workspace: WorkspaceId,
        address: Option<String>,
    },
    /// Clear fullscreen and maximize on the active window.
    ExitFullscreen,
}
