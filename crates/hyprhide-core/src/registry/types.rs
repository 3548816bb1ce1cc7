use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::wm::types::{ClientInfo, Position, WorkspaceId};

/// Persisted state of one hidden window.
///
/// `position`, `workspace` and `was_floating` describe where the window
/// goes back to on restore; they are written once at capture time and
/// never reflect live window state afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub address: String,
    pub title: String,
    pub class: String,
    pub position: Position,
    pub workspace: WorkspaceId,
    pub was_floating: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshot_path: Option<PathBuf>,
    /// RFC 3339 capture time.
    #[serde(default)]
    pub hidden_at: String,
    /// Created by the reconciliation sweep for a window found parked without a record.
    #[serde(default)]
    pub synthesized: bool,
}

impl WindowRecord {
    /// Build a record from a client's live state.
    ///
    /// Returns `None` when the client has no geometry; such a window can
    /// never be put back and must not get a record.
    pub fn from_client(client: &ClientInfo, was_floating: bool) -> Option<Self> {
        let position = client.position()?;
        Some(Self {
            address: client.address.clone(),
            title: client.title.clone(),
            class: client.class.clone(),
            position,
            workspace: client.workspace.clone(),
            was_floating,
            screenshot_path: None,
            hidden_at: chrono::Utc::now().to_rfc3339(),
            synthesized: false,
        })
    }

    /// Short label for listings: `class: title`.
    pub fn label(&self) -> String {
        if self.class.is_empty() {
            self.title.clone()
        } else {
            format!("{}: {}", self.class, self.title)
        }
    }
}
