//! Desktop shortcut and menu entry management.
//!
//! Provides functionality for creating:
//! - Desktop shortcuts to installed Blender builds
//! - Start-Menu / application-menu shortcuts to the launcher itself
//!
//! # Platform Support
//!
//! - **Windows**: `.lnk` shortcut objects plus registry file associations
//! - **Linux**: `.desktop` entries (XDG Desktop Entry Specification)
//! - Other platforms: operations degrade to no-ops
//!
//! # Example
//!
//! ```rust,ignore
//! use blv2_core::{association_manager, LauncherEnv};
//!
//! fn main() -> blv2_core::Result<()> {
//!     let env = LauncherEnv::current("/path/to/library")?;
//!     let manager = association_manager(env)?;
//!
//!     manager.create_build_shortcut("stable", "Blender 4.2")?;
//!     manager.register_file_associations()?;
//!
//!     Ok(())
//! }
//! ```

mod desktop_entry;
mod manager;
#[cfg(windows)]
mod windows;

pub use desktop_entry::{escape_spaces, shell_quote, DesktopEntry, DesktopEntryBuilder};
pub use manager::{
    association_manager, default_shortcut_destination, shortcut_type, AssociationManager,
    LinuxAssociationManager, NullAssociationManager,
};
#[cfg(windows)]
pub use windows::WindowsAssociationManager;
