//! File-association registration sequences.
//!
//! Registration is an ordered list of independent steps with no rollback:
//! a partially-applied state (command key present, OpenWithProgids entry
//! missing) is possible and tolerated. The program-id key alone decides
//! whether the launcher counts as registered; the OpenWithProgids entries
//! are auxiliary.

use tracing::{debug, info};

use super::store::RegistryStore;
use crate::config::AppConfig;
use crate::error::Result;

const CLASSES: &str = r"Software\Classes";

fn progid_key() -> String {
    format!(r"{}\{}", CLASSES, AppConfig::PROGID)
}

fn shell_key() -> String {
    format!(r"{}\shell", progid_key())
}

fn open_key() -> String {
    format!(r"{}\open", shell_key())
}

fn command_key() -> String {
    format!(r"{}\command", open_key())
}

fn progids_list_key(extension: &str) -> String {
    format!(r"{}\{}\OpenWithProgids", CLASSES, extension)
}

/// Registers and removes the launcher's program-id over a [`RegistryStore`].
pub struct FiletypeRegistrar<S> {
    store: S,
    launch_command: String,
}

impl<S: RegistryStore> FiletypeRegistrar<S> {
    /// `launch_command` is the literal open command recorded for the
    /// program-id, typically [`crate::config::LauncherEnv::launch_command`].
    pub fn new(store: S, launch_command: impl Into<String>) -> Self {
        Self {
            store,
            launch_command: launch_command.into(),
        }
    }

    /// Register the program-id and offer it for the handled extensions.
    pub fn register(&self) -> Result<()> {
        let command = command_key();
        self.store.create_key(&command)?;
        self.store.set_string_value(&command, "", &self.launch_command)?;

        for extension in AppConfig::HANDLED_EXTENSIONS {
            let list = progids_list_key(extension);
            self.store.create_key(&list)?;
            self.store.set_string_value(&list, AppConfig::PROGID, "")?;
        }

        info!("Registered {} for file associations", AppConfig::PROGID);
        Ok(())
    }

    /// Remove the program-id and its OpenWithProgids entries.
    ///
    /// Keys are deleted leaf-to-root: the OS refuses to delete a key that
    /// still has subkeys. Every step swallows "not found" so unregistering
    /// twice is not an error.
    pub fn unregister(&self) -> Result<()> {
        for key in [command_key(), open_key(), shell_key(), progid_key()] {
            match self.store.delete_key(&key) {
                Ok(()) => {}
                Err(e) if e.is_not_found() => debug!("{} already absent", key),
                Err(e) => return Err(e),
            }
        }

        for extension in AppConfig::HANDLED_EXTENSIONS {
            match self
                .store
                .delete_value(&progids_list_key(extension), AppConfig::PROGID)
            {
                Ok(()) => {}
                Err(e) if e.is_not_found() => {}
                Err(e) => return Err(e),
            }
        }

        info!("Unregistered {} file associations", AppConfig::PROGID);
        Ok(())
    }

    /// True iff the program-id key exists under the chosen hive.
    pub fn is_registered(&self) -> Result<bool> {
        self.store.key_exists(&progid_key())
    }
}
