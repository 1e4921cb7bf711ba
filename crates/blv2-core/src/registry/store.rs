//! Registry storage backend trait and implementations.

use crate::error::Result;
#[cfg(windows)]
use crate::error::LauncherError;

/// Storage backend for file-association records.
///
/// Key paths are backslash-separated and relative to the backend's hive
/// root. `create_key` creates missing intermediate keys, mirroring the OS
/// behavior. `delete_key` is non-recursive: deleting a key that still has
/// subkeys must fail, which forces callers to delete leaf-first.
pub trait RegistryStore {
    /// Create a key (and any missing parents).
    fn create_key(&self, path: &str) -> Result<()>;

    /// Set a string value on a key, creating the key if needed.
    /// The empty name addresses the key's default value.
    fn set_string_value(&self, path: &str, name: &str, value: &str) -> Result<()>;

    /// Delete a childless key. Missing keys report
    /// [`crate::error::LauncherError::NotFound`].
    fn delete_key(&self, path: &str) -> Result<()>;

    /// Delete a named value from a key. Missing keys and missing values
    /// both report [`crate::error::LauncherError::NotFound`].
    fn delete_value(&self, path: &str, name: &str) -> Result<()>;

    /// Whether the key can be opened for read. Missing keys are `false`;
    /// any other failure propagates.
    fn key_exists(&self, path: &str) -> Result<bool>;
}

/// Registry store rooted at `HKEY_CURRENT_USER`.
///
/// The per-user hive keeps registration, unregistration, and the
/// registered-state probe on the same scope without elevation.
#[cfg(windows)]
pub struct WindowsRegistry;

#[cfg(windows)]
impl WindowsRegistry {
    fn root() -> winreg::RegKey {
        winreg::RegKey::predef(winreg::enums::HKEY_CURRENT_USER)
    }
}

#[cfg(windows)]
impl RegistryStore for WindowsRegistry {
    fn create_key(&self, path: &str) -> Result<()> {
        Self::root()
            .create_subkey(path)
            .map(|_| ())
            .map_err(|e| LauncherError::registry(e, path))
    }

    fn set_string_value(&self, path: &str, name: &str, value: &str) -> Result<()> {
        let (key, _) = Self::root()
            .create_subkey(path)
            .map_err(|e| LauncherError::registry(e, path))?;
        key.set_value(name, &value)
            .map_err(|e| LauncherError::registry(e, path))
    }

    fn delete_key(&self, path: &str) -> Result<()> {
        Self::root()
            .delete_subkey(path)
            .map_err(|e| LauncherError::registry(e, path))
    }

    fn delete_value(&self, path: &str, name: &str) -> Result<()> {
        let key = Self::root()
            .open_subkey_with_flags(path, winreg::enums::KEY_SET_VALUE)
            .map_err(|e| LauncherError::registry(e, path))?;
        key.delete_value(name)
            .map_err(|e| LauncherError::registry(e, path))
    }

    fn key_exists(&self, path: &str) -> Result<bool> {
        match Self::root().open_subkey(path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(LauncherError::registry(e, path)),
        }
    }
}

/// In-memory registry with OS delete semantics, for exercising the
/// registration sequences on any host. Records every mutation so tests can
/// assert ordering.
#[cfg(test)]
pub(crate) mod memory {
    use super::RegistryStore;
    use crate::error::{LauncherError, Result};
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    #[derive(Default)]
    pub(crate) struct MemoryRegistry {
        keys: RefCell<BTreeMap<String, BTreeMap<String, String>>>,
        journal: RefCell<Vec<String>>,
    }

    impl MemoryRegistry {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn journal(&self) -> Vec<String> {
            self.journal.borrow().clone()
        }

        pub fn value(&self, path: &str, name: &str) -> Option<String> {
            self.keys.borrow().get(path).and_then(|v| v.get(name)).cloned()
        }
    }

    impl RegistryStore for MemoryRegistry {
        fn create_key(&self, path: &str) -> Result<()> {
            let mut keys = self.keys.borrow_mut();
            let mut prefix = String::new();
            for part in path.split('\\') {
                if !prefix.is_empty() {
                    prefix.push('\\');
                }
                prefix.push_str(part);
                keys.entry(prefix.clone()).or_default();
            }
            self.journal.borrow_mut().push(format!("create {}", path));
            Ok(())
        }

        fn set_string_value(&self, path: &str, name: &str, value: &str) -> Result<()> {
            self.create_key(path)?;
            self.keys
                .borrow_mut()
                .get_mut(path)
                .expect("key just created")
                .insert(name.to_string(), value.to_string());
            self.journal
                .borrow_mut()
                .push(format!("set {}!{}", path, name));
            Ok(())
        }

        fn delete_key(&self, path: &str) -> Result<()> {
            let mut keys = self.keys.borrow_mut();
            if !keys.contains_key(path) {
                return Err(LauncherError::NotFound {
                    resource: path.to_string(),
                });
            }
            let child_prefix = format!("{}\\", path);
            if keys.keys().any(|k| k.starts_with(&child_prefix)) {
                return Err(LauncherError::Registry {
                    message: format!("{}: key has subkeys", path),
                    source: None,
                });
            }
            keys.remove(path);
            self.journal.borrow_mut().push(format!("delete {}", path));
            Ok(())
        }

        fn delete_value(&self, path: &str, name: &str) -> Result<()> {
            let mut keys = self.keys.borrow_mut();
            let values = keys.get_mut(path).ok_or_else(|| LauncherError::NotFound {
                resource: path.to_string(),
            })?;
            values.remove(name).ok_or_else(|| LauncherError::NotFound {
                resource: format!("{}!{}", path, name),
            })?;
            self.journal
                .borrow_mut()
                .push(format!("unset {}!{}", path, name));
            Ok(())
        }

        fn key_exists(&self, path: &str) -> Result<bool> {
            Ok(self.keys.borrow().contains_key(path))
        }
    }
}
