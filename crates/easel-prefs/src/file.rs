//! TOML-file-backed preference stores.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::warn;

use easel_core::{Error, Preferences, PreferencesStore, Result};

/// Preferences persisted as a flat TOML table in a single file.
///
/// Mutations stay in memory until `flush`, which rewrites the whole file.
/// A missing file opens as an empty store; an unreadable or malformed one
/// is reported through a warning and likewise opens empty, so a damaged
/// file never prevents the application from starting.
pub struct FilePreferences {
    path: PathBuf,
    values: RwLock<BTreeMap<String, String>>,
}

impl FilePreferences {
    /// Open the preferences file at `path`, loading any existing table.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = load_table(&path);
        Self {
            path,
            values: RwLock::new(values),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn load_table(path: &Path) -> BTreeMap<String, String> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
        Err(err) => {
            warn!(path = %path.display(), "unreadable preferences file, starting empty: {err}");
            return BTreeMap::new();
        }
    };
    match toml::from_str(&text) {
        Ok(values) => values,
        Err(err) => {
            warn!(path = %path.display(), "malformed preferences file, starting empty: {err}");
            BTreeMap::new()
        }
    }
}

impl Preferences for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    fn put(&self, key: &str, value: &str) {
        self.values
            .write()
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.values.write().remove(key);
    }

    fn keys(&self) -> Vec<String> {
        self.values.read().keys().cloned().collect()
    }

    fn flush(&self) -> Result<()> {
        let rendered = toml::to_string_pretty(&*self.values.read())
            .map_err(|err| Error::Preferences(format!("cannot encode {}: {err}", self.path.display())))?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, rendered)?;
        Ok(())
    }
}

/// Store mapping each name to `<root>/<name>.toml`.
///
/// Opens are not memoized here; the canvas's own preference cache keeps
/// one handle per name. Two independently opened handles for the same
/// name hold independent in-memory tables and the last flush wins.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`. The directory is created lazily,
    /// on the first flush.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl PreferencesStore for FileStore {
    fn open(&self, name: &str) -> Arc<dyn Preferences> {
        Arc::new(FilePreferences::open(self.root.join(format!("{name}.toml"))))
    }
}
