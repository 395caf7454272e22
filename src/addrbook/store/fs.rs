use super::DataStore;
use crate::error::{AddressBookError, Result};
use crate::registry::BookRegistry;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// JSON-file storage: all books live in a single file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "addressbook.json".to_string());
        self.path.with_file_name(format!(".{}.tmp", name))
    }

    /// `addressbook.json` becomes `addressbook.json.corrupt-20240905-101502`.
    fn corrupt_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "addressbook.json".to_string());
        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        self.path.with_file_name(format!("{}.corrupt-{}", name, stamp))
    }

    fn read_error(&self, reason: impl std::fmt::Display) -> AddressBookError {
        AddressBookError::PersistenceRead(format!("{}: {}", self.path.display(), reason))
    }

    fn write_error(&self, reason: impl std::fmt::Display) -> AddressBookError {
        AddressBookError::PersistenceWrite(format!("{}: {}", self.path.display(), reason))
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<BookRegistry> {
        if !self.path.exists() {
            return Ok(BookRegistry::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| self.read_error(e))?;
        if content.trim().is_empty() {
            return Ok(BookRegistry::new());
        }

        let registry: BookRegistry =
            serde_json::from_str(&content).map_err(|e| self.read_error(e))?;
        if let Some((book, full_name)) = registry.first_duplicate() {
            return Err(self.read_error(format!(
                "book {} lists {} more than once",
                book, full_name
            )));
        }
        Ok(registry)
    }

    fn save(&mut self, registry: &BookRegistry) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
            }
        }

        let content = serde_json::to_string_pretty(registry).map_err(|e| self.write_error(e))?;

        // Write beside the target, then swap it in.
        let temp = self.temp_path();
        fs::write(&temp, content).map_err(|e| self.write_error(e))?;
        if let Err(e) = fs::rename(&temp, &self.path) {
            let _ = fs::remove_file(&temp);
            return Err(self.write_error(e));
        }
        Ok(())
    }

    fn preserve_unreadable(&mut self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let backup = self.corrupt_path();
        fs::copy(&self.path, &backup).map_err(|e| self.read_error(e))?;
        Ok(Some(backup.display().to_string()))
    }
}
