//! Platform-specific file permission handling.

use crate::error::Result;
use std::path::Path;
use tracing::debug;

/// Mark a desktop-entry file as launchable.
///
/// # Platform Behavior
/// - **Linux/macOS**: sets mode 0o744 (owner read/write/execute,
///   group/other execute) so desktop environments treat the file as a
///   trusted launcher
/// - **Windows**: no-op (executability is determined by file extension)
///
/// # Errors
/// Returns an error if the file doesn't exist or permissions can't be changed.
pub fn set_launchable(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let metadata = std::fs::metadata(path)?;
        let mut permissions = metadata.permissions();
        permissions.set_mode(0o744);
        std::fs::set_permissions(path, permissions)?;
        debug!("Set launchable permissions on: {}", path.display());
    }

    #[cfg(windows)]
    {
        debug!("Skipping permission bits on Windows for: {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_set_launchable() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("entry.desktop");
        File::create(&file_path).unwrap();

        set_launchable(&file_path).unwrap();

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&file_path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o744);
        }
    }

    #[test]
    fn test_set_launchable_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("absent.desktop");

        #[cfg(unix)]
        assert!(set_launchable(&missing).is_err());
        #[cfg(windows)]
        assert!(set_launchable(&missing).is_ok());
    }
}
