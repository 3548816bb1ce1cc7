//! Hyprland backend driven through the `hyprctl` CLI.
//!
//! Queries use the JSON output mode (`clients -j`, `activewindow -j`).
//! Dispatches answer with a bare `ok` on success and an error message on
//! stdout otherwise, still with exit status 0.

use std::process::Command;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::wm::errors::WmError;
use crate::wm::traits::WmClient;
use crate::wm::types::{
    ClientInfo, Geometry, MoveTarget, Position, Size, WmCommand, WorkspaceId,
};

pub struct HyprctlClient {
    program: String,
}

impl HyprctlClient {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, args: &[&str]) -> Result<String, WmError> {
        let command_line = format!("{} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|e| WmError::Spawn {
                program: self.program.clone(),
                source: e,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(
                event = "core.wm.hyprctl_failed",
                command = %command_line,
                status = %output.status,
                stderr = %stderr
            );
            return Err(WmError::CommandFailed {
                command: command_line,
                status: output.status.to_string(),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl WmClient for HyprctlClient {
    fn name(&self) -> &'static str {
        "hyprctl"
    }

    fn list_clients(&self) -> Result<Vec<ClientInfo>, WmError> {
        let stdout = self.run(&["clients", "-j"])?;
        parse_clients(&stdout).map_err(|message| WmError::InvalidResponse {
            command: "clients -j".to_string(),
            message,
        })
    }

    fn active_client(&self) -> Result<Option<ClientInfo>, WmError> {
        let stdout = self.run(&["activewindow", "-j"])?;
        parse_active_window(&stdout).map_err(|message| WmError::InvalidResponse {
            command: "activewindow -j".to_string(),
            message,
        })
    }

    fn dispatch(&self, command: &WmCommand) -> Result<(), WmError> {
        let (dispatcher, arg) = dispatch_args(command);
        debug!(
            event = "core.wm.dispatch_started",
            dispatcher = dispatcher,
            arg = %arg
        );

        let mut args = vec!["dispatch", dispatcher];
        if !arg.is_empty() {
            args.push(&arg);
        }
        let stdout = self.run(&args)?;

        let response = stdout.trim();
        if response == "ok" {
            Ok(())
        } else {
            Err(WmError::DispatchRejected {
                dispatch: format!("{} {}", dispatcher, arg).trim_end().to_string(),
                response: response.to_string(),
            })
        }
    }
}

/// Map a command to its hyprctl dispatcher name and argument string.
pub fn dispatch_args(command: &WmCommand) -> (&'static str, String) {
    match command {
        WmCommand::SwitchWorkspace(ws) => ("workspace", ws.selector()),
        WmCommand::FocusWindow(address) => ("focuswindow", format!("address:{}", address)),
        WmCommand::CycleNext => ("cyclenext", String::new()),
        WmCommand::ToggleFloating(None) => ("togglefloating", String::new()),
        WmCommand::ToggleFloating(Some(address)) => {
            ("togglefloating", format!("address:{}", address))
        }
        WmCommand::MoveActive(MoveTarget::Exact(pos)) => {
            ("moveactive", format!("exact {} {}", pos.x, pos.y))
        }
        WmCommand::MoveActive(MoveTarget::Relative { dx, dy }) => {
            ("moveactive", format!("{} {}", dx, dy))
        }
        WmCommand::MoveToWorkspaceSilent {
            workspace,
            address: None,
        } => ("movetoworkspacesilent", workspace.selector()),
        WmCommand::MoveToWorkspaceSilent {
            workspace,
            address: Some(address),
        } => (
            "movetoworkspacesilent",
            format!("{},address:{}", workspace.selector(), address),
        ),
        // `fullscreen 0` toggles; `fullscreenstate` sets both modes explicitly.
        WmCommand::ExitFullscreen => ("fullscreenstate", "0 0".to_string()),
    }
}

#[derive(Debug, Deserialize)]
struct RawWorkspace {
    id: i64,
    #[serde(default)]
    name: String,
}

/// Older Hyprland reports a bool, newer releases an integer fullscreen mode.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawFullscreen {
    Flag(bool),
    Mode(i64),
}

impl Default for RawFullscreen {
    fn default() -> Self {
        RawFullscreen::Flag(false)
    }
}

impl RawFullscreen {
    fn is_fullscreen(&self) -> bool {
        match self {
            RawFullscreen::Flag(flag) => *flag,
            RawFullscreen::Mode(mode) => *mode != 0,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawClient {
    address: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    class: String,
    #[serde(default)]
    at: Option<[i32; 2]>,
    #[serde(default)]
    size: Option<[i32; 2]>,
    workspace: RawWorkspace,
    #[serde(default)]
    floating: bool,
    #[serde(default)]
    fullscreen: RawFullscreen,
}

impl From<RawWorkspace> for WorkspaceId {
    fn from(raw: RawWorkspace) -> Self {
        if raw.name.is_empty() || raw.name.parse::<i64>().ok() == Some(raw.id) {
            WorkspaceId::Id(raw.id)
        } else {
            WorkspaceId::Name(raw.name)
        }
    }
}

impl From<RawClient> for ClientInfo {
    fn from(raw: RawClient) -> Self {
        let geometry = match (raw.at, raw.size) {
            (Some([x, y]), Some([width, height])) => Some(Geometry {
                position: Position { x, y },
                size: Size { width, height },
            }),
            _ => None,
        };

        ClientInfo {
            fullscreen: raw.fullscreen.is_fullscreen(),
            address: raw.address,
            title: raw.title,
            class: raw.class,
            geometry,
            workspace: raw.workspace.into(),
            floating: raw.floating,
        }
    }
}

/// Parse the output of `hyprctl clients -j`.
pub fn parse_clients(json: &str) -> Result<Vec<ClientInfo>, String> {
    let raw: Vec<RawClient> = serde_json::from_str(json).map_err(|e| e.to_string())?;
    Ok(raw.into_iter().map(ClientInfo::from).collect())
}

/// Parse the output of `hyprctl activewindow -j`.
///
/// With nothing focused, Hyprland prints `{}`, `null`, `Invalid` or nothing
/// depending on the release; all of these mean "no active window".
pub fn parse_active_window(json: &str) -> Result<Option<ClientInfo>, String> {
    let trimmed = json.trim();
    if trimmed.is_empty() || trimmed == "Invalid" || trimmed == "null" {
        return Ok(None);
    }

    let value: serde_json::Value = serde_json::from_str(trimmed).map_err(|e| e.to_string())?;
    let has_address = value
        .get("address")
        .and_then(|a| a.as_str())
        .is_some_and(|a| !a.is_empty());
    if !has_address {
        return Ok(None);
    }

    let raw: RawClient = serde_json::from_value(value).map_err(|e| e.to_string())?;
    Ok(Some(raw.into()))
}
