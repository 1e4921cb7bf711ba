//! Windows file-association records.
//!
//! The OS mapping from a file extension to a launch command lives in the
//! registry. This module abstracts the registry behind [`RegistryStore`]
//! so the registration sequences stay testable off-Windows, and implements
//! the ordered register/unregister steps in [`FiletypeRegistrar`].

mod filetypes;
mod store;

pub use filetypes::FiletypeRegistrar;
pub use store::RegistryStore;
#[cfg(windows)]
pub use store::WindowsRegistry;
