//! Desktop entry (.desktop file) generation.
//!
//! Implements the XDG Desktop Entry Specification key-value block.
//! Note: this module is Linux-specific. Windows uses .lnk files instead.

use std::fmt::Write as FmtWrite;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{LauncherError, Result};
use crate::platform;
use tracing::debug;

/// Backslash-escape embedded spaces so a path-valued Exec or Icon field
/// survives the consuming shell's word splitting.
pub fn escape_spaces(path: &Path) -> String {
    path.display().to_string().replace(' ', "\\ ")
}

/// Quote a path for use as a single shell word in an Exec line.
///
/// Paths made of safe characters pass through untouched; anything else is
/// wrapped in single quotes with embedded quotes escaped.
pub fn shell_quote(path: &Path) -> String {
    let raw = path.display().to_string();
    let safe = |c: char| c.is_ascii_alphanumeric() || "@%+=:,./-_".contains(c);
    if !raw.is_empty() && raw.chars().all(safe) {
        raw
    } else {
        format!("'{}'", raw.replace('\'', r"'\''"))
    }
}

/// A desktop entry representation.
#[derive(Debug, Clone)]
pub struct DesktopEntry {
    /// Entry name (shown in menus).
    pub name: String,
    /// Generic name (e.g. "Launcher").
    pub generic_name: Option<String>,
    /// Comment/description.
    pub comment: Option<String>,
    /// Keywords for search.
    pub keywords: Vec<String>,
    /// Icon name or pre-escaped path.
    pub icon: String,
    /// Whether to run in a terminal.
    pub terminal: bool,
    /// Entry type (usually "Application").
    pub entry_type: String,
    /// Categories (semicolon-separated).
    pub categories: Vec<String>,
    /// MIME types the entry handles.
    pub mime_types: Vec<String>,
    /// Executable command.
    pub exec: String,
}

impl Default for DesktopEntry {
    fn default() -> Self {
        Self {
            name: String::new(),
            generic_name: None,
            comment: None,
            keywords: Vec::new(),
            icon: String::new(),
            terminal: false,
            entry_type: "Application".to_string(),
            categories: Vec::new(),
            mime_types: Vec::new(),
            exec: String::new(),
        }
    }
}

impl DesktopEntry {
    /// Create a new desktop entry builder.
    pub fn builder() -> DesktopEntryBuilder {
        DesktopEntryBuilder::new()
    }

    /// Generate the .desktop file content.
    pub fn to_string(&self) -> String {
        let mut content = String::new();

        writeln!(content, "[Desktop Entry]").unwrap();
        writeln!(content, "Name={}", self.name).unwrap();

        if let Some(ref generic_name) = self.generic_name {
            writeln!(content, "GenericName={}", generic_name).unwrap();
        }

        if let Some(ref comment) = self.comment {
            writeln!(content, "Comment={}", comment).unwrap();
        }

        if !self.keywords.is_empty() {
            writeln!(content, "Keywords={};", self.keywords.join(";")).unwrap();
        }

        writeln!(content, "Icon={}", self.icon).unwrap();
        writeln!(content, "Terminal={}", if self.terminal { "true" } else { "false" }).unwrap();
        writeln!(content, "Type={}", self.entry_type).unwrap();

        if !self.categories.is_empty() {
            writeln!(content, "Categories={};", self.categories.join(";")).unwrap();
        }

        if !self.mime_types.is_empty() {
            writeln!(content, "MimeType={};", self.mime_types.join(";")).unwrap();
        }

        writeln!(content, "Exec={}", self.exec).unwrap();

        content
    }

    /// Write the desktop entry to a file and mark it launchable.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| LauncherError::Io {
                message: "create directory".to_string(),
                path: Some(parent.to_path_buf()),
                source: Some(e),
            })?;
        }

        let content = self.to_string();
        let mut file = fs::File::create(path).map_err(|e| LauncherError::Io {
            message: "create desktop file".to_string(),
            path: Some(path.to_path_buf()),
            source: Some(e),
        })?;

        file.write_all(content.as_bytes()).map_err(|e| LauncherError::Io {
            message: "write desktop file".to_string(),
            path: Some(path.to_path_buf()),
            source: Some(e),
        })?;

        platform::set_launchable(path)?;

        debug!("Wrote desktop entry to {:?}", path);

        Ok(())
    }
}

/// Builder for desktop entries.
pub struct DesktopEntryBuilder {
    entry: DesktopEntry,
}

impl DesktopEntryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            entry: DesktopEntry::default(),
        }
    }

    /// Set the entry name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entry.name = name.into();
        self
    }

    /// Set the generic name.
    pub fn generic_name(mut self, generic_name: impl Into<String>) -> Self {
        self.entry.generic_name = Some(generic_name.into());
        self
    }

    /// Set the comment.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.entry.comment = Some(comment.into());
        self
    }

    /// Set the search keywords.
    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entry.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Set the icon.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.entry.icon = icon.into();
        self
    }

    /// Set whether to run in terminal.
    pub fn terminal(mut self, terminal: bool) -> Self {
        self.entry.terminal = terminal;
        self
    }

    /// Set the menu categories.
    pub fn categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entry.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Add a handled MIME type.
    pub fn mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.entry.mime_types.push(mime_type.into());
        self
    }

    /// Set the executable command.
    pub fn exec(mut self, exec: impl Into<String>) -> Self {
        self.entry.exec = exec.into();
        self
    }

    /// Build the desktop entry.
    pub fn build(self) -> DesktopEntry {
        self.entry
    }
}

impl Default for DesktopEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
