use crate::errors::HyprHideError;
use crate::registry::RegistryError;
use crate::wm::WmError;

#[derive(Debug, thiserror::Error)]
pub enum ReconcileError {
    #[error("Window manager unavailable: {source}")]
    WmUnavailable {
        #[from]
        source: WmError,
    },

    #[error("Registry operation failed: {source}")]
    Registry {
        #[from]
        source: RegistryError,
    },
}

impl HyprHideError for ReconcileError {
    fn error_code(&self) -> &'static str {
        match self {
            ReconcileError::WmUnavailable { .. } => "RECONCILE_WM_UNAVAILABLE",
            ReconcileError::Registry { .. } => "RECONCILE_REGISTRY_ERROR",
        }
    }
}
