use crate::errors::HyprHideError;

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("Failed to execute screenshot program '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Screenshot program '{program}' failed: {message}")]
    Failed { program: String, message: String },

    #[error("Cannot capture a {width}x{height} area")]
    EmptyArea { width: i32, height: i32 },
}

impl HyprHideError for CaptureError {
    fn error_code(&self) -> &'static str {
        match self {
            CaptureError::Spawn { .. } => "CAPTURE_SPAWN_FAILED",
            CaptureError::Failed { .. } => "CAPTURE_FAILED",
            CaptureError::EmptyArea { .. } => "CAPTURE_EMPTY_AREA",
        }
    }
}
