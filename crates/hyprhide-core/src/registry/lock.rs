use std::fs;
use std::path::{Path, PathBuf};

use nix::fcntl::{Flock, FlockArg};

use crate::registry::errors::RegistryError;

pub const LOCK_FILE_NAME: &str = ".lock";

/// Exclusive advisory lock over a registry directory.
///
/// Held for the whole of a hide, restore or sweep so two invocations never
/// interleave their read-modify-write of the same records. Released on drop.
pub struct RegistryLock {
    _flock: Flock<fs::File>,
    path: PathBuf,
}

impl RegistryLock {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

pub fn acquire_lock(dir: &Path) -> Result<RegistryLock, RegistryError> {
    let path = dir.join(LOCK_FILE_NAME);
    let lock_failed = |message: String| RegistryError::LockFailed {
        path: path.display().to_string(),
        message,
    };

    fs::create_dir_all(dir)
        .map_err(|e| lock_failed(format!("failed to create {}: {}", dir.display(), e)))?;

    let lock_file = fs::OpenOptions::new()
        .create(true)
        .truncate(false)
        .read(true)
        .write(true)
        .open(&path)
        .map_err(|e| lock_failed(format!("failed to open lock file: {}", e)))?;

    let flock = Flock::lock(lock_file, FlockArg::LockExclusive)
        .map_err(|(_, e)| lock_failed(format!("failed to acquire lock: {}", e)))?;

    tracing::debug!(event = "core.registry.lock_acquired", path = %path.display());

    Ok(RegistryLock {
        _flock: flock,
        path,
    })
}
