//! In-memory window manager for exercising the hide/restore protocol.
//!
//! Models focus, workspaces, floating state, positions and fullscreen closely
//! enough to check end-to-end behaviour. Knobs make individual commands
//! unreliable the way a real compositor sometimes is.

use std::cell::RefCell;
use std::mem::{Discriminant, discriminant};

use crate::wm::errors::WmError;
use crate::wm::traits::WmClient;
use crate::wm::types::{
    ClientInfo, Geometry, MoveTarget, Position, Size, WmCommand, WorkspaceId,
};

#[derive(Debug, Clone)]
pub struct FakeWindow {
    pub address: String,
    pub title: String,
    pub class: String,
    pub position: Option<Position>,
    pub size: Size,
    pub workspace: WorkspaceId,
    pub floating: bool,
    pub fullscreen: bool,
}

impl FakeWindow {
    pub fn new(address: &str, x: i32, y: i32, workspace: i64) -> Self {
        Self {
            address: address.to_string(),
            title: format!("title {}", address),
            class: "kitty".to_string(),
            position: Some(Position { x, y }),
            size: Size {
                width: 800,
                height: 600,
            },
            workspace: WorkspaceId::Id(workspace),
            floating: false,
            fullscreen: false,
        }
    }

    pub fn floating(mut self, floating: bool) -> Self {
        self.floating = floating;
        self
    }

    pub fn fullscreen(mut self) -> Self {
        self.fullscreen = true;
        self
    }

    pub fn without_geometry(mut self) -> Self {
        self.position = None;
        self
    }

    fn info(&self) -> ClientInfo {
        ClientInfo {
            address: self.address.clone(),
            title: self.title.clone(),
            class: self.class.clone(),
            geometry: self.position.map(|position| Geometry {
                position,
                size: self.size,
            }),
            workspace: self.workspace.clone(),
            floating: self.floating,
            fullscreen: self.fullscreen,
        }
    }
}

#[derive(Debug, Default)]
struct State {
    windows: Vec<FakeWindow>,
    active: Option<String>,
    current_workspace: Option<WorkspaceId>,
    dispatched: Vec<WmCommand>,
    ignore_focus_by_address: bool,
    ignored_toggles: u32,
    steal_focus_on_place: Option<String>,
    unreachable: bool,
    reject_park: Option<Position>,
    rejected: Vec<Discriminant<WmCommand>>,
}

impl State {
    fn window_mut(&mut self, address: &str) -> Option<&mut FakeWindow> {
        self.windows.iter_mut().find(|w| w.address == address)
    }

    fn on_workspace(&self, workspace: &WorkspaceId) -> Vec<String> {
        self.windows
            .iter()
            .filter(|w| &w.workspace == workspace)
            .map(|w| w.address.clone())
            .collect()
    }

    fn apply(&mut self, command: &WmCommand) {
        match command {
            WmCommand::SwitchWorkspace(ws) => {
                self.current_workspace = Some(ws.clone());
                let here = self.on_workspace(ws);
                let keep = self.active.as_ref().is_some_and(|a| here.contains(a));
                if !keep {
                    self.active = here.first().cloned();
                }
            }
            WmCommand::FocusWindow(address) => {
                if self.ignore_focus_by_address {
                    return;
                }
                if let Some(ws) = self.window_mut(address).map(|w| w.workspace.clone()) {
                    self.current_workspace = Some(ws);
                    self.active = Some(address.clone());
                }
            }
            WmCommand::CycleNext => {
                let Some(ws) = self.current_workspace.clone() else {
                    return;
                };
                let here = self.on_workspace(&ws);
                if here.is_empty() {
                    return;
                }
                let next = match self
                    .active
                    .as_ref()
                    .and_then(|a| here.iter().position(|h| h == a))
                {
                    Some(i) => here[(i + 1) % here.len()].clone(),
                    None => here[0].clone(),
                };
                self.active = Some(next);
            }
            WmCommand::ToggleFloating(target) => {
                if self.ignored_toggles > 0 {
                    self.ignored_toggles -= 1;
                    return;
                }
                let address = target.clone().or_else(|| self.active.clone());
                if let Some(w) = address.and_then(|a| self.window_mut(&a)) {
                    w.floating = !w.floating;
                }
            }
            WmCommand::MoveActive(target) => {
                let Some(active) = self.active.clone() else {
                    return;
                };
                if let Some(w) = self.window_mut(&active)
                    && let Some(pos) = w.position.as_mut()
                {
                    match target {
                        MoveTarget::Exact(p) => *pos = *p,
                        MoveTarget::Relative { dx, dy } => {
                            pos.x += dx;
                            pos.y += dy;
                        }
                    }
                }
            }
            WmCommand::MoveToWorkspaceSilent { workspace, address } => {
                let Some(address) = address.clone().or_else(|| self.active.clone()) else {
                    return;
                };
                if let Some(w) = self.window_mut(&address) {
                    w.workspace = workspace.clone();
                }
                let leaves_view = self.current_workspace.as_ref() != Some(workspace);
                if leaves_view && self.active.as_deref() == Some(address.as_str()) {
                    let here = self
                        .current_workspace
                        .clone()
                        .map(|ws| self.on_workspace(&ws))
                        .unwrap_or_default();
                    self.active = here.into_iter().find(|a| *a != address);
                }
                if let Some(thief) = self.steal_focus_on_place.take() {
                    if let Some(ws) = self.window_mut(&thief).map(|w| w.workspace.clone()) {
                        self.current_workspace = Some(ws);
                    }
                    self.active = Some(thief);
                }
            }
            WmCommand::ExitFullscreen => {
                if let Some(active) = self.active.clone()
                    && let Some(w) = self.window_mut(&active)
                {
                    w.fullscreen = false;
                }
            }
        }
    }
}

/// Scripted window manager. Every dispatched command is recorded.
#[derive(Debug, Default)]
pub struct FakeWm {
    state: RefCell<State>,
}

impl FakeWm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_window(self, window: FakeWindow) -> Self {
        {
            let mut state = self.state.borrow_mut();
            if state.current_workspace.is_none() {
                state.current_workspace = Some(window.workspace.clone());
            }
            state.windows.push(window);
        }
        self
    }

    /// Focus `address` and view its workspace.
    pub fn focused(self, address: &str) -> Self {
        {
            let mut state = self.state.borrow_mut();
            let ws = state.window_mut(address).map(|w| w.workspace.clone());
            state.current_workspace = ws;
            state.active = Some(address.to_string());
        }
        self
    }

    pub fn viewing(self, workspace: i64) -> Self {
        self.state.borrow_mut().current_workspace = Some(WorkspaceId::Id(workspace));
        self
    }

    /// Make `focuswindow address:...` a silent no-op.
    pub fn ignoring_focus_by_address(self) -> Self {
        self.state.borrow_mut().ignore_focus_by_address = true;
        self
    }

    /// Silently drop the next `count` toggle-floating commands.
    pub fn ignoring_toggles(self, count: u32) -> Self {
        self.state.borrow_mut().ignored_toggles = count;
        self
    }

    /// After the next silent workspace move, hand focus (and the view) to `address`.
    pub fn stealing_focus_on_place(self, address: &str) -> Self {
        self.state.borrow_mut().steal_focus_on_place = Some(address.to_string());
        self
    }

    /// Reject any move of the active window to `position`.
    pub fn rejecting_park_at(self, position: Position) -> Self {
        self.state.borrow_mut().reject_park = Some(position);
        self
    }

    /// Answer every command of the same kind as `command` with a non-`ok` reply.
    pub fn rejecting(self, command: WmCommand) -> Self {
        self.state.borrow_mut().rejected.push(discriminant(&command));
        self
    }

    pub fn unreachable(self) -> Self {
        self.state.borrow_mut().unreachable = true;
        self
    }

    pub fn close_window(&self, address: &str) {
        let mut state = self.state.borrow_mut();
        state.windows.retain(|w| w.address != address);
        if state.active.as_deref() == Some(address) {
            state.active = None;
        }
    }

    pub fn window(&self, address: &str) -> Option<FakeWindow> {
        self.state
            .borrow()
            .windows
            .iter()
            .find(|w| w.address == address)
            .cloned()
    }

    pub fn dispatched(&self) -> Vec<WmCommand> {
        self.state.borrow().dispatched.clone()
    }

    pub fn count_dispatched(&self, matches: impl Fn(&WmCommand) -> bool) -> usize {
        self.state
            .borrow()
            .dispatched
            .iter()
            .filter(|c| matches(c))
            .count()
    }

    fn check_reachable(&self) -> Result<(), WmError> {
        if self.state.borrow().unreachable {
            return Err(WmError::Spawn {
                program: "fake".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "unreachable"),
            });
        }
        Ok(())
    }
}

impl WmClient for FakeWm {
    fn name(&self) -> &'static str {
        "fake"
    }

    fn list_clients(&self) -> Result<Vec<ClientInfo>, WmError> {
        self.check_reachable()?;
        Ok(self
            .state
            .borrow()
            .windows
            .iter()
            .map(FakeWindow::info)
            .collect())
    }

    fn active_client(&self) -> Result<Option<ClientInfo>, WmError> {
        self.check_reachable()?;
        let state = self.state.borrow();
        Ok(state.active.as_ref().and_then(|a| {
            state
                .windows
                .iter()
                .find(|w| &w.address == a)
                .map(FakeWindow::info)
        }))
    }

    fn dispatch(&self, command: &WmCommand) -> Result<(), WmError> {
        self.check_reachable()?;
        let mut state = self.state.borrow_mut();
        state.dispatched.push(command.clone());

        if let (Some(reject), WmCommand::MoveActive(MoveTarget::Exact(p))) =
            (state.reject_park, command)
            && reject == *p
        {
            return Err(WmError::DispatchRejected {
                dispatch: format!("moveactive exact {} {}", p.x, p.y),
                response: "rejected by fake".to_string(),
            });
        }

        if state.rejected.contains(&discriminant(command)) {
            return Err(WmError::DispatchRejected {
                dispatch: format!("{:?}", command),
                response: "rejected by fake".to_string(),
            });
        }

        state.apply(command);
        Ok(())
    }
}
