//! Window thumbnail capture.
//!
//! Capturing is delegated to an external screenshot program. Failures are
//! reported to the caller, which treats them as non-fatal.

pub mod errors;

use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use crate::wm::types::Geometry;

pub use errors::CaptureError;

pub trait ScreenCapture {
    /// Capture the screen area covered by `geometry` into `dest`.
    fn capture(&self, geometry: &Geometry, dest: &Path) -> Result<(), CaptureError>;
}

/// Captures with `grim -g "<x>,<y> <w>x<h>" <file>` (or any program taking the same arguments).
pub struct GrimCapture {
    program: String,
}

impl GrimCapture {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

/// Format a geometry in the `slurp`/`grim` region syntax.
pub fn region_arg(geometry: &Geometry) -> String {
    format!(
        "{},{} {}x{}",
        geometry.position.x, geometry.position.y, geometry.size.width, geometry.size.height
    )
}

impl ScreenCapture for GrimCapture {
    fn capture(&self, geometry: &Geometry, dest: &Path) -> Result<(), CaptureError> {
        if geometry.size.width <= 0 || geometry.size.height <= 0 {
            return Err(CaptureError::EmptyArea {
                width: geometry.size.width,
                height: geometry.size.height,
            });
        }

        let region = region_arg(geometry);
        debug!(
            event = "core.capture.started",
            program = %self.program,
            region = %region,
            dest = %dest.display()
        );

        let output = Command::new(&self.program)
            .arg("-g")
            .arg(&region)
            .arg(dest)
            .output()
            .map_err(|e| CaptureError::Spawn {
                program: self.program.clone(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(CaptureError::Failed {
                program: self.program.clone(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        info!(event = "core.capture.completed", dest = %dest.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wm::types::{Position, Size};

    fn geometry(width: i32, height: i32) -> Geometry {
        Geometry {
            position: Position { x: 10, y: 20 },
            size: Size { width, height },
        }
    }

    #[test]
    fn test_region_arg() {
        assert_eq!(region_arg(&geometry(800, 600)), "10,20 800x600");
    }

    #[test]
    fn test_empty_area_rejected_before_spawn() {
        let capture = GrimCapture::new("/nonexistent/grim");
        let result = capture.capture(&geometry(0, 600), Path::new("/tmp/unused.png"));
        assert!(matches!(result, Err(CaptureError::EmptyArea { .. })));
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let capture = GrimCapture::new("/nonexistent/grim");
        let result = capture.capture(&geometry(800, 600), &temp_dir.path().join("shot.png"));
        assert!(matches!(result, Err(CaptureError::Spawn { .. })));
    }
}
