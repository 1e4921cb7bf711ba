//! Platform-specific path lookups for shortcut destinations.

use crate::error::{LauncherError, Result};
use std::path::PathBuf;

/// Get the user's desktop directory.
///
/// # Platform Behavior
/// Uses the `dirs` crate which handles platform differences:
/// - **Linux**: `~/Desktop` or XDG user dirs
/// - **Windows**: `C:\Users\{user}\Desktop`
/// - **macOS**: `~/Desktop`
pub fn desktop_dir() -> Result<PathBuf> {
    dirs::desktop_dir().ok_or_else(|| LauncherError::Config {
        message: "Could not determine desktop directory".to_string(),
    })
}

/// Get the XDG applications directory (`~/.local/share/applications`).
///
/// Resolved from the home directory rather than the platform data dir so
/// the same path comes back for unrecognized platform tags, which fall
/// through to the Linux layout.
pub fn applications_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| LauncherError::Config {
        message: "Could not determine home directory".to_string(),
    })?;
    Ok(home.join(".local").join("share").join("applications"))
}

/// Get the Windows Start Menu programs folder
/// (`%APPDATA%\Microsoft\Windows\Start Menu\Programs`).
pub fn start_menu_programs_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| LauncherError::Config {
        message: "Could not determine app data directory".to_string(),
    })?;
    Ok(data_dir
        .join("Microsoft")
        .join("Windows")
        .join("Start Menu")
        .join("Programs"))
}
