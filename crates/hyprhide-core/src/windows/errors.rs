use crate::errors::HyprHideError;
use crate::reconcile::ReconcileError;
use crate::registry::RegistryError;
use crate::wm::WmError;

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("Window manager unavailable: {source}")]
    WmUnavailable {
        #[from]
        source: WmError,
    },

    #[error("No window is focused")]
    NoActiveWindow,

    #[error("Window '{address}' has no readable geometry")]
    MissingGeometry { address: String },

    #[error("Could not focus window '{address}' after {attempts} focus cycles")]
    FocusAcquisitionFailed { address: String, attempts: u32 },

    #[error("Window '{address}' no longer exists")]
    WindowVanished { address: String },

    #[error("Window '{address}' is already hidden")]
    AlreadyHidden { address: String },

    #[error("Window '{address}' is not hidden")]
    NotHidden { address: String },

    #[error("No hidden windows")]
    NoHiddenWindows,

    #[error("Registry operation failed: {source}")]
    Registry {
        #[from]
        source: RegistryError,
    },
}

impl From<ReconcileError> for WindowError {
    fn from(error: ReconcileError) -> Self {
        match error {
            ReconcileError::WmUnavailable { source } => WindowError::WmUnavailable { source },
            ReconcileError::Registry { source } => WindowError::Registry { source },
        }
    }
}

impl HyprHideError for WindowError {
    fn error_code(&self) -> &'static str {
        match self {
            WindowError::WmUnavailable { .. } => "WM_UNAVAILABLE",
            WindowError::NoActiveWindow => "NO_ACTIVE_WINDOW",
            WindowError::MissingGeometry { .. } => "MISSING_GEOMETRY",
            WindowError::FocusAcquisitionFailed { .. } => "FOCUS_ACQUISITION_FAILED",
            WindowError::WindowVanished { .. } => "WINDOW_VANISHED",
            WindowError::AlreadyHidden { .. } => "WINDOW_ALREADY_HIDDEN",
            WindowError::NotHidden { .. } => "WINDOW_NOT_HIDDEN",
            WindowError::NoHiddenWindows => "NO_HIDDEN_WINDOWS",
            WindowError::Registry { .. } => "REGISTRY_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            WindowError::NoActiveWindow
                | WindowError::AlreadyHidden { .. }
                | WindowError::NotHidden { .. }
                | WindowError::NoHiddenWindows
        ) || matches!(self, WindowError::Registry { source } if source.is_user_error())
    }
}
