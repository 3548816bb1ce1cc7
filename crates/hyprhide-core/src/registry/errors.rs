use crate::errors::HyprHideError;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Invalid window address '{address}': {reason}")]
    InvalidAddress {
        address: String,
        reason: &'static str,
    },

    #[error("Record for '{address}' is corrupt: {message}")]
    CorruptRecord { address: String, message: String },

    #[error("Failed to serialize record for '{address}': {source}")]
    Serialization {
        address: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to lock registry at '{path}': {message}")]
    LockFailed { path: String, message: String },

    #[error("Registry IO failed: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl HyprHideError for RegistryError {
    fn error_code(&self) -> &'static str {
        match self {
            RegistryError::InvalidAddress { .. } => "REGISTRY_INVALID_ADDRESS",
            RegistryError::CorruptRecord { .. } => "REGISTRY_CORRUPT_RECORD",
            RegistryError::Serialization { .. } => "REGISTRY_SERIALIZATION_FAILED",
            RegistryError::LockFailed { .. } => "REGISTRY_LOCK_FAILED",
            RegistryError::IoError { .. } => "REGISTRY_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, RegistryError::InvalidAddress { .. })
    }
}
