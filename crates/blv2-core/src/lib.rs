//! Shortcut and file-association management for the Blender build launcher.
//!
//! This crate covers the launcher's shell integration: Desktop and
//! Start-Menu shortcuts for installed Blender builds and for the launcher
//! itself, and (on Windows) registering the launcher as an "Open With"
//! handler for `.blend`/`.blend1` files.
//!
//! Everything the operations depend on from the hosting process — platform
//! tag, packaging mode, library location, executable paths — is captured
//! once in a [`LauncherEnv`] and passed in, so the crate reads no ambient
//! process state at call time.
//!
//! # Example
//!
//! ```rust,ignore
//! use blv2_core::{association_manager, LauncherEnv};
//!
//! fn main() -> blv2_core::Result<()> {
//!     let env = LauncherEnv::current("/path/to/blender-builds")?;
//!     let manager = association_manager(env)?;
//!
//!     manager.create_build_shortcut("stable", "Blender 4.2")?;
//!     if !manager.file_associations_registered()? {
//!         manager.register_file_associations()?;
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod platform;
pub mod registry;
pub mod shortcut;

// Re-export commonly used types
pub use config::{AppConfig, LauncherEnv, ShortcutConfig};
pub use error::{LauncherError, Result};
pub use platform::Platform;
pub use registry::{FiletypeRegistrar, RegistryStore};
pub use shortcut::{
    association_manager, AssociationManager, DesktopEntry, DesktopEntryBuilder,
    LinuxAssociationManager, NullAssociationManager,
};
