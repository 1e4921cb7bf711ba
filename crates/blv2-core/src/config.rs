//! Launcher context and shared constants.
//!
//! [`LauncherEnv`] is a snapshot of process-level state (platform tag,
//! packaging mode, well-known directories) taken once at startup and passed
//! into the association manager, so nothing in this crate reads ambient
//! process globals at call time.

use std::path::PathBuf;

use crate::error::{LauncherError, Result};
use crate::platform::Platform;

/// Application-level configuration.
pub struct AppConfig;

impl AppConfig {
    pub const APP_NAME: &'static str = "Blender Launcher V2";
    /// Registry program-id associating .blend files with the launcher.
    pub const PROGID: &'static str = "blenderlauncherv2.blend";
    /// Argument that tells the launcher to open a file instead of its window.
    pub const LAUNCH_FLAG: &'static str = "__launch_target";
    pub const HANDLED_EXTENSIONS: [&'static str; 2] = [".blend", ".blend1"];

    /// Platform file name of the launcher executable.
    pub fn launcher_exe_name(platform: Platform) -> &'static str {
        match platform {
            Platform::Windows => "Blender Launcher.exe",
            _ => "Blender Launcher",
        }
    }
}

/// Shortcut file names and desktop-entry boilerplate.
pub struct ShortcutConfig;

impl ShortcutConfig {
    pub const LAUNCHER_DESKTOP_FILENAME: &'static str = "BLV2.desktop";
    pub const LAUNCHER_LINK_FILENAME: &'static str = "Blender Launcher.lnk";
    pub const LAUNCHER_GENERIC_NAME: &'static str = "Launcher";
    /// Icon theme name used by the launcher's own desktop entry.
    pub const LAUNCHER_ICON: &'static str = "blender-icon";

    pub const BUILD_EXE_WINDOWS: &'static str = "blender.exe";
    pub const BUILD_EXE_LINUX: &'static str = "blender";
    pub const BUILD_ICON_WINDOWS: &'static str = "winblender.ico";
    pub const BUILD_ICON_LINUX: &'static str = "blender.svg";

    pub const BLEND_MIME_TYPE: &'static str = "application/x-blender";
    pub const BUILD_COMMENT: &'static str =
        "3D modeling, animation, rendering and post-production";
    pub const BUILD_CATEGORIES: &'static [&'static str] = &["Graphics", "3DGraphics"];
    pub const BUILD_KEYWORDS: &'static [&'static str] = &[
        "3d",
        "cg",
        "modeling",
        "animation",
        "painting",
        "sculpting",
        "texturing",
        "video editing",
        "video tracking",
        "rendering",
        "render engine",
        "cycles",
        "game engine",
        "python",
    ];
}

/// Snapshot of the process state the association manager depends on.
#[derive(Debug, Clone)]
pub struct LauncherEnv {
    /// Platform tag used to select the manager variant.
    pub platform: Platform,
    /// Whether this process runs from a packaged build. Unpackaged runs
    /// launch through an entry script and carry extra shortcut arguments.
    pub frozen: bool,
    /// Root folder holding installed Blender builds.
    pub library_dir: PathBuf,
    /// Path to the launcher executable.
    pub executable: PathBuf,
    /// Entry script path for unpackaged runs.
    pub entry_script: Option<PathBuf>,
    /// Working directory recorded into launcher shortcuts.
    pub cwd: PathBuf,
    /// Root of the bundled icon assets.
    pub resources_dir: PathBuf,
}

impl LauncherEnv {
    /// Snapshot the current process.
    ///
    /// Packaged mode is assumed: `frozen` is true and `entry_script` is
    /// `None`. Dev runs construct the struct directly.
    pub fn current(library_dir: impl Into<PathBuf>) -> Result<Self> {
        let executable = std::env::current_exe().map_err(|e| LauncherError::Config {
            message: format!("Could not determine executable path: {}", e),
        })?;
        let cwd = std::env::current_dir().map_err(|e| LauncherError::Config {
            message: format!("Could not determine working directory: {}", e),
        })?;
        let resources_dir = executable
            .parent()
            .map(|p| p.join("resources"))
            .unwrap_or_else(|| PathBuf::from("resources"));

        Ok(Self {
            platform: Platform::current(),
            frozen: true,
            library_dir: library_dir.into(),
            executable,
            entry_script: None,
            cwd,
            resources_dir,
        })
    }

    /// Folder of an installed build inside the library.
    pub fn build_dir(&self, build_folder: &str) -> PathBuf {
        self.library_dir.join(build_folder)
    }

    /// Command template recorded under the program-id's open command key.
    ///
    /// Literal shape: `"<executable>" ["<entry-script>"] __launch_target "%1"`.
    pub fn launch_command(&self) -> String {
        match &self.entry_script {
            Some(script) if !self.frozen => format!(
                "\"{}\" \"{}\" {} \"%1\"",
                self.executable.display(),
                script.display(),
                AppConfig::LAUNCH_FLAG
            ),
            _ => format!(
                "\"{}\" {} \"%1\"",
                self.executable.display(),
                AppConfig::LAUNCH_FLAG
            ),
        }
    }

    /// Argument string for a shortcut that launches this program.
    pub fn shortcut_args(&self) -> String {
        match &self.entry_script {
            Some(script) if !self.frozen => {
                format!("{} {}", script.display(), AppConfig::LAUNCH_FLAG)
            }
            _ => AppConfig::LAUNCH_FLAG.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(frozen: bool, entry_script: Option<&str>) -> LauncherEnv {
        LauncherEnv {
            platform: Platform::Windows,
            frozen,
            library_dir: PathBuf::from("C:/blender-builds"),
            executable: PathBuf::from("C:/launcher/blv2.exe"),
            entry_script: entry_script.map(PathBuf::from),
            cwd: PathBuf::from("C:/launcher"),
            resources_dir: PathBuf::from("C:/launcher/resources"),
        }
    }

    #[test]
    fn test_launch_command_frozen() {
        assert_eq!(
            env(true, None).launch_command(),
            "\"C:/launcher/blv2.exe\" __launch_target \"%1\""
        );
    }

    #[test]
    fn test_launch_command_unpackaged() {
        assert_eq!(
            env(false, Some("C:/src/launcher-entry.ps1")).launch_command(),
            "\"C:/launcher/blv2.exe\" \"C:/src/launcher-entry.ps1\" __launch_target \"%1\""
        );
    }

    #[test]
    fn test_shortcut_args() {
        assert_eq!(env(true, None).shortcut_args(), "__launch_target");
        assert_eq!(
            env(false, Some("C:/src/launcher-entry.ps1")).shortcut_args(),
            "C:/src/launcher-entry.ps1 __launch_target"
        );
    }

    #[test]
    fn test_build_dir() {
        assert_eq!(
            env(true, None).build_dir("stable"),
            PathBuf::from("C:/blender-builds/stable")
        );
    }
}
