//! Association manager variants and platform dispatch.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::desktop_entry::{escape_spaces, shell_quote, DesktopEntry};
use crate::config::{AppConfig, LauncherEnv, ShortcutConfig};
use crate::error::Result;
use crate::platform::{self, Platform};

/// Uniform operation set over platform-specific shortcut and
/// file-association handling.
///
/// One variant is selected per process via [`association_manager`]:
/// Windows gets shortcut objects plus registry records, Linux gets desktop
/// entries, everything else gets the null variant whose mutating
/// operations silently do nothing.
pub trait AssociationManager {
    /// Create a desktop shortcut to an installed Blender build inside the
    /// library.
    fn create_build_shortcut(&self, build_folder: &str, display_name: &str) -> Result<()>;

    /// Create a shortcut that launches this program, at `destination`.
    fn create_launcher_shortcut(&self, destination: &Path) -> Result<()>;

    /// Register the launcher as an "Open With" handler for .blend files.
    fn register_file_associations(&self) -> Result<()>;

    /// Remove the file-association records. Safe to call when nothing is
    /// registered.
    fn unregister_file_associations(&self) -> Result<()>;

    /// Whether the launcher is currently registered as a handler.
    fn file_associations_registered(&self) -> Result<bool>;

    /// Display label for the platform's shortcut artifact.
    fn shortcut_type(&self) -> &'static str;

    /// Well-known default location for the launcher's own shortcut.
    fn default_shortcut_destination(&self) -> Result<PathBuf>;
}

/// Display label for the platform's shortcut artifact.
/// For presentation only.
pub fn shortcut_type(platform: Platform) -> &'static str {
    match platform {
        Platform::Linux => "Desktop file",
        _ => "Shortcut",
    }
}

/// Well-known default location for the launcher's own shortcut.
///
/// Unrecognized platforms fall through to the Linux layout.
pub fn default_shortcut_destination(platform: Platform) -> Result<PathBuf> {
    match platform {
        Platform::Windows => Ok(platform::paths::start_menu_programs_dir()?
            .join(ShortcutConfig::LAUNCHER_LINK_FILENAME)),
        _ => Ok(platform::paths::applications_dir()?
            .join(ShortcutConfig::LAUNCHER_DESKTOP_FILENAME)),
    }
}

/// Select the association manager for the environment's platform.
///
/// The choice happens once at startup; callers hold the trait object and
/// never branch on the platform tag again.
pub fn association_manager(env: LauncherEnv) -> Result<Box<dyn AssociationManager>> {
    match env.platform {
        #[cfg(windows)]
        Platform::Windows => Ok(Box::new(super::windows::WindowsAssociationManager::new(env)?)),
        Platform::Linux => Ok(Box::new(LinuxAssociationManager::new(env)?)),
        other => Ok(Box::new(NullAssociationManager::new(other))),
    }
}

/// Desktop-entry based manager for Linux.
pub struct LinuxAssociationManager {
    env: LauncherEnv,
    desktop_dir: PathBuf,
}

impl LinuxAssociationManager {
    pub fn new(env: LauncherEnv) -> Result<Self> {
        let desktop_dir = platform::paths::desktop_dir()?;
        Ok(Self::with_desktop_dir(env, desktop_dir))
    }

    /// Construct against an explicit desktop directory instead of the
    /// user's resolved one.
    pub fn with_desktop_dir(env: LauncherEnv, desktop_dir: impl AsRef<Path>) -> Self {
        Self {
            env,
            desktop_dir: desktop_dir.as_ref().to_path_buf(),
        }
    }
}

impl AssociationManager for LinuxAssociationManager {
    fn create_build_shortcut(&self, build_folder: &str, display_name: &str) -> Result<()> {
        let build_dir = self.env.build_dir(build_folder);
        let exec = build_dir.join(ShortcutConfig::BUILD_EXE_LINUX);
        let icon = build_dir.join(ShortcutConfig::BUILD_ICON_LINUX);

        let file_name = format!("{}.desktop", display_name.replace(' ', "-"));
        let destination = self.desktop_dir.join(file_name);

        let entry = DesktopEntry::builder()
            .name(display_name)
            .comment(ShortcutConfig::BUILD_COMMENT)
            .keywords(ShortcutConfig::BUILD_KEYWORDS.iter().copied())
            .icon(escape_spaces(&icon))
            .terminal(false)
            .categories(ShortcutConfig::BUILD_CATEGORIES.iter().copied())
            .mime_type(ShortcutConfig::BLEND_MIME_TYPE)
            .exec(format!("{} %f", escape_spaces(&exec)))
            .build();

        entry.write_to_file(&destination)?;
        debug!("Created build shortcut at {}", destination.display());
        Ok(())
    }

    fn create_launcher_shortcut(&self, destination: &Path) -> Result<()> {
        let launcher = self
            .env
            .cwd
            .join(AppConfig::launcher_exe_name(self.env.platform));

        let entry = DesktopEntry::builder()
            .name(AppConfig::APP_NAME)
            .generic_name(ShortcutConfig::LAUNCHER_GENERIC_NAME)
            .exec(format!(
                "{} {}",
                shell_quote(&launcher),
                AppConfig::LAUNCH_FLAG
            ))
            .mime_type(ShortcutConfig::BLEND_MIME_TYPE)
            .icon(ShortcutConfig::LAUNCHER_ICON)
            .terminal(false)
            .build();

        entry.write_to_file(destination)?;
        info!("Created launcher desktop entry at {}", destination.display());
        Ok(())
    }

    // File opening on Linux rides on the desktop entry's MimeType line;
    // there is no registry-style record to manage.
    fn register_file_associations(&self) -> Result<()> {
        Ok(())
    }

    fn unregister_file_associations(&self) -> Result<()> {
        Ok(())
    }

    fn file_associations_registered(&self) -> Result<bool> {
        Ok(false)
    }

    fn shortcut_type(&self) -> &'static str {
        shortcut_type(self.env.platform)
    }

    fn default_shortcut_destination(&self) -> Result<PathBuf> {
        default_shortcut_destination(self.env.platform)
    }
}

/// Fallback for platforms without shortcut or association support.
///
/// Mutating operations are deliberate no-ops rather than errors, so
/// callers don't have to special-case exotic hosts.
pub struct NullAssociationManager {
    platform: Platform,
}

impl NullAssociationManager {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }
}

impl AssociationManager for NullAssociationManager {
    fn create_build_shortcut(&self, _build_folder: &str, display_name: &str) -> Result<()> {
        debug!(
            "Skipping shortcut for {} on unsupported platform {}",
            display_name, self.platform
        );
        Ok(())
    }

    fn create_launcher_shortcut(&self, destination: &Path) -> Result<()> {
        debug!(
            "Skipping launcher shortcut at {} on unsupported platform {}",
            destination.display(),
            self.platform
        );
        Ok(())
    }

    fn register_file_associations(&self) -> Result<()> {
        Ok(())
    }

    fn unregister_file_associations(&self) -> Result<()> {
        Ok(())
    }

    fn file_associations_registered(&self) -> Result<bool> {
        Ok(false)
    }

    fn shortcut_type(&self) -> &'static str {
        shortcut_type(self.platform)
    }

    fn default_shortcut_destination(&self) -> Result<PathBuf> {
        default_shortcut_destination(self.platform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn linux_env(library_dir: &Path, cwd: &Path) -> LauncherEnv {
        LauncherEnv {
            platform: Platform::Linux,
            frozen: true,
            library_dir: library_dir.to_path_buf(),
            executable: cwd.join("Blender Launcher"),
            entry_script: None,
            cwd: cwd.to_path_buf(),
            resources_dir: cwd.join("resources"),
        }
    }

    #[test]
    fn test_shortcut_type_labels() {
        assert_eq!(shortcut_type(Platform::Windows), "Shortcut");
        assert_eq!(shortcut_type(Platform::Linux), "Desktop file");
        assert_eq!(shortcut_type(Platform::MacOs), "Shortcut");
        assert_eq!(shortcut_type(Platform::Unknown), "Shortcut");
    }

    #[test]
    fn test_default_destination_linux_and_fallback_agree() {
        let linux = default_shortcut_destination(Platform::Linux).unwrap();
        let fallback = default_shortcut_destination(Platform::Unknown).unwrap();

        assert_eq!(linux, fallback);
        assert!(linux.ends_with(".local/share/applications/BLV2.desktop"));
    }

    #[test]
    fn test_default_destination_windows() {
        let dest = default_shortcut_destination(Platform::Windows).unwrap();
        assert!(dest.ends_with("Start Menu/Programs/Blender Launcher.lnk"));
    }

    #[test]
    fn test_build_shortcut_hyphenates_name() {
        let temp_dir = TempDir::new().unwrap();
        let library = temp_dir.path().join("builds");
        let desktop = temp_dir.path().join("Desktop");
        fs::create_dir_all(library.join("stable")).unwrap();

        let manager =
            LinuxAssociationManager::with_desktop_dir(linux_env(&library, temp_dir.path()), &desktop);
        manager.create_build_shortcut("stable", "My App").unwrap();

        let written = desktop.join("My-App.desktop");
        assert!(written.exists());

        let content = fs::read_to_string(&written).unwrap();
        assert!(content.contains("Name=My App\n"));
        assert!(content.contains(&format!(
            "Exec={}/stable/blender %f\n",
            library.display()
        )));
    }

    #[test]
    fn test_build_shortcut_escapes_spaces_in_paths() {
        let temp_dir = TempDir::new().unwrap();
        let library = temp_dir.path().join("blender builds");
        let desktop = temp_dir.path().join("Desktop");
        fs::create_dir_all(library.join("stable")).unwrap();

        let manager =
            LinuxAssociationManager::with_desktop_dir(linux_env(&library, temp_dir.path()), &desktop);
        manager.create_build_shortcut("stable", "My App").unwrap();

        let content = fs::read_to_string(desktop.join("My-App.desktop")).unwrap();
        let escaped_library = escape_spaces(&library);
        assert!(content.contains(&format!("Exec={}/stable/blender %f\n", escaped_library)));
        assert!(content.contains(&format!("Icon={}/stable/blender.svg\n", escaped_library)));
    }

    #[test]
    fn test_launcher_shortcut_contents() {
        let temp_dir = TempDir::new().unwrap();
        let desktop = temp_dir.path().join("Desktop");
        let manager = LinuxAssociationManager::with_desktop_dir(
            linux_env(&temp_dir.path().join("builds"), temp_dir.path()),
            &desktop,
        );

        let destination = temp_dir.path().join("applications").join("BLV2.desktop");
        manager.create_launcher_shortcut(&destination).unwrap();

        let content = fs::read_to_string(&destination).unwrap();
        assert!(content.contains("Name=Blender Launcher V2\n"));
        assert!(content.contains("GenericName=Launcher\n"));
        assert!(content.contains("MimeType=application/x-blender;\n"));
        // The launcher path contains a space, so the Exec word is quoted.
        assert!(content.contains(&format!(
            "Exec='{}/Blender Launcher' __launch_target\n",
            temp_dir.path().display()
        )));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&destination).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o744);
        }
    }

    #[test]
    fn test_null_manager_noops() {
        let manager = NullAssociationManager::new(Platform::MacOs);

        manager.create_build_shortcut("stable", "My App").unwrap();
        manager
            .create_launcher_shortcut(Path::new("/nonexistent/shortcut"))
            .unwrap();
        manager.register_file_associations().unwrap();
        manager.unregister_file_associations().unwrap();
        assert!(!manager.file_associations_registered().unwrap());
        assert_eq!(manager.shortcut_type(), "Shortcut");
    }
}
