use crate::errors::HyprHideError;

#[derive(Debug, thiserror::Error)]
pub enum WmError {
    #[error("Failed to execute '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("Unparsable response from '{command}': {message}")]
    InvalidResponse { command: String, message: String },

    #[error("Dispatch '{dispatch}' rejected: {response}")]
    DispatchRejected { dispatch: String, response: String },
}

impl HyprHideError for WmError {
    fn error_code(&self) -> &'static str {
        match self {
            WmError::Spawn { .. } => "WM_SPAWN_FAILED",
            WmError::CommandFailed { .. } => "WM_COMMAND_FAILED",
            WmError::InvalidResponse { .. } => "WM_INVALID_RESPONSE",
            WmError::DispatchRejected { .. } => "WM_DISPATCH_REJECTED",
        }
    }
}
