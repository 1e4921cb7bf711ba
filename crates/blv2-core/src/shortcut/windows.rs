//! Windows shortcut objects and file-association wiring.

use std::fs;
use std::path::{Path, PathBuf};

use mslnk::ShellLink;
use tracing::{debug, info};

use super::manager::{default_shortcut_destination, shortcut_type, AssociationManager};
use crate::config::{LauncherEnv, ShortcutConfig};
use crate::error::{LauncherError, Result};
use crate::platform::{self, Platform};
use crate::registry::{FiletypeRegistrar, WindowsRegistry};

/// Shortcut-object and registry based manager for Windows.
pub struct WindowsAssociationManager {
    env: LauncherEnv,
    desktop_dir: PathBuf,
    registrar: FiletypeRegistrar<WindowsRegistry>,
}

impl WindowsAssociationManager {
    pub fn new(env: LauncherEnv) -> Result<Self> {
        let desktop_dir = platform::paths::desktop_dir()?;
        let registrar = FiletypeRegistrar::new(WindowsRegistry, env.launch_command());
        Ok(Self {
            env,
            desktop_dir,
            registrar,
        })
    }

    fn open_link(target: &Path) -> Result<ShellLink> {
        ShellLink::new(target).map_err(|e| LauncherError::Shortcut {
            message: format!("link target {}: {}", target.display(), e),
        })
    }

    fn save_link(link: &ShellLink, destination: &Path) -> Result<()> {
        link.create_lnk(destination).map_err(|e| LauncherError::Shortcut {
            message: format!("write {}: {}", destination.display(), e),
        })
    }
}

impl AssociationManager for WindowsAssociationManager {
    fn create_build_shortcut(&self, build_folder: &str, display_name: &str) -> Result<()> {
        let build_dir = self.env.build_dir(build_folder);
        let target = build_dir.join(ShortcutConfig::BUILD_EXE_WINDOWS);

        // The icon travels with the build so the link survives launcher
        // reinstalls. Overwrites any previous copy.
        let icon_source = self
            .env
            .resources_dir
            .join("icons")
            .join(ShortcutConfig::BUILD_ICON_WINDOWS);
        let icon = build_dir.join(ShortcutConfig::BUILD_ICON_WINDOWS);
        fs::copy(&icon_source, &icon)
            .map_err(|e| LauncherError::io_with_path(e, &icon_source))?;

        let destination = self.desktop_dir.join(format!("{}.lnk", display_name));

        let mut link = Self::open_link(&target)?;
        link.set_working_dir(Some(build_dir.display().to_string()));
        link.set_icon_location(Some(icon.display().to_string()));
        Self::save_link(&link, &destination)?;

        debug!("Created build shortcut at {}", destination.display());
        Ok(())
    }

    fn create_launcher_shortcut(&self, destination: &Path) -> Result<()> {
        let destination = destination.with_extension("lnk");

        let mut link = Self::open_link(&self.env.executable)?;
        link.set_arguments(Some(self.env.shortcut_args()));
        link.set_working_dir(Some(self.env.cwd.display().to_string()));

        if !self.env.frozen {
            // Unpackaged runs have no icon resource compiled into the
            // executable; point the link at the checkout's icon file.
            if let Some(script) = &self.env.entry_script {
                let icon = script
                    .parent()
                    .unwrap_or_else(|| Path::new("."))
                    .join("resources")
                    .join("icons")
                    .join("bl")
                    .join("bl.ico");
                link.set_icon_location(Some(icon.display().to_string()));
            }
        }

        Self::save_link(&link, &destination)?;
        info!("Created launcher shortcut at {}", destination.display());
        Ok(())
    }

    fn register_file_associations(&self) -> Result<()> {
        self.registrar.register()
    }

    fn unregister_file_associations(&self) -> Result<()> {
        self.registrar.unregister()
    }

    fn file_associations_registered(&self) -> Result<bool> {
        self.registrar.is_registered()
    }

    fn shortcut_type(&self) -> &'static str {
        shortcut_type(Platform::Windows)
    }

    fn default_shortcut_destination(&self) -> Result<PathBuf> {
        default_shortcut_destination(Platform::Windows)
    }
}
