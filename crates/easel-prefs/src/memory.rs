//! In-memory preference stores.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use easel_core::{Preferences, PreferencesStore, Result};

/// Preferences held only in memory.
///
/// `flush` is a no-op; contents vanish with the process. Useful as the
/// default store of a canvas and in tests.
#[derive(Default)]
pub struct MemoryPreferences {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryPreferences {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Preferences for MemoryPreferences {
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
        Ok(())
    }
}

/// Store handing out in-memory preference maps.
///
/// Opens are memoized per name, so every handle to `"settings"` addresses
/// the same map for as long as the store lives.
#[derive(Default)]
pub struct MemoryStore {
    open: Mutex<HashMap<String, Arc<MemoryPreferences>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferencesStore for MemoryStore {
    fn open(&self, name: &str) -> Arc<dyn Preferences> {
        let mut open = self.open.lock();
        if let Some(prefs) = open.get(name) {
            return Arc::clone(prefs) as Arc<dyn Preferences>;
        }
        let prefs = Arc::new(MemoryPreferences::new());
        open.insert(name.to_owned(), Arc::clone(&prefs));
        prefs
    }
}
