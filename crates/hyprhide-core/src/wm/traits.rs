//! Window manager client trait definition.

use crate::wm::errors::WmError;
use crate::wm::types::{ClientInfo, WmCommand};

/// Synchronous command/query interface to the window manager control plane.
///
/// Every call is a blocking round-trip. Commands are acknowledged before the
/// window manager has necessarily applied them, so callers verify effects by
/// querying again after a settle delay.
pub trait WmClient {
    /// The canonical name of this backend (e.g., "hyprctl").
    fn name(&self) -> &'static str;

    /// Enumerate all client windows.
    fn list_clients(&self) -> Result<Vec<ClientInfo>, WmError>;

    /// The currently focused window, if any.
    fn active_client(&self) -> Result<Option<ClientInfo>, WmError>;

    /// Look up a single window by address.
    fn client(&self, address: &str) -> Result<Option<ClientInfo>, WmError> {
        Ok(self
            .list_clients()?
            .into_iter()
            .find(|c| c.address == address))
    }

    /// Address of the currently focused window, if any.
    fn active_address(&self) -> Result<Option<String>, WmError> {
        Ok(self.active_client()?.map(|c| c.address))
    }

    /// Issue a command.
    ///
    /// # Returns
    /// * `Ok(())` - The control plane acknowledged the command
    /// * `Err(WmError::DispatchRejected)` - The control plane answered but refused it
    /// * `Err(_)` - The control plane could not be reached or answered garbage
    fn dispatch(&self, command: &WmCommand) -> Result<(), WmError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wm::types::WorkspaceId;

    struct StaticWm {
        clients: Vec<ClientInfo>,
    }

    impl WmClient for StaticWm {
        fn name(&self) -> &'static str {
            "static"
        }

        fn list_clients(&self) -> Result<Vec<ClientInfo>, WmError> {
            Ok(self.clients.clone())
        }

        fn active_client(&self) -> Result<Option<ClientInfo>, WmError> {
            Ok(self.clients.first().cloned())
        }

        fn dispatch(&self, _command: &WmCommand) -> Result<(), WmError> {
            Ok(())
        }
    }

    fn client(address: &str) -> ClientInfo {
        ClientInfo {
            address: address.to_string(),
            title: String::new(),
            class: String::new(),
            geometry: None,
            workspace: WorkspaceId::Id(1),
            floating: false,
            fullscreen: false,
        }
    }

    #[test]
    fn test_default_client_lookup() {
        let wm = StaticWm {
            clients: vec![client("0xa"), client("0xb")],
        };
        assert_eq!(wm.client("0xb").unwrap().unwrap().address, "0xb");
        assert!(wm.client("0xc").unwrap().is_none());
    }

    #[test]
    fn test_default_active_address() {
        let wm = StaticWm {
            clients: vec![client("0xa")],
        };
        assert_eq!(wm.active_address().unwrap().as_deref(), Some("0xa"));

        let empty = StaticWm { clients: vec![] };
        assert_eq!(empty.active_address().unwrap(), None);
    }
}
