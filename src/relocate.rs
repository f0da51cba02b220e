use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};

/// Move `file` into `dest_dir`, keeping its name. Returns the new path.
///
/// `dest_dir` has to exist already. If it does not, nothing is touched and
/// `file` stays where it is.
pub fn relocate(file: &Path, dest_dir: &Path) -> Result<PathBuf> {
    if !dest_dir.is_dir() {
        return Err(Error::DestinationMissing { dir: dest_dir.to_path_buf() });
    }
    let name = file
        .file_name()
        .ok_or_else(|| Error::FileNotFound { path: file.to_path_buf() })?;
    let target = dest_dir.join(name);
    if let Err(e) = fs::rename(file, &target) {
        if !file.exists() {
            return Err(Error::io(file, e));
        }
        // rename cannot cross filesystems
        debug!(error = %e, "rename failed, falling back to copy and remove");
        fs::copy(file, &target).map_err(|e| Error::io(&target, e))?;
        fs::remove_file(file).map_err(|e| Error::io(file, e))?;
    }
    info!(from = %file.display(), to = %target.display(), "moved binary dump");
    Ok(target)
}
