//! Preference handle memoization.

use std::collections::HashMap;
use std::sync::Arc;

use easel_core::{Preferences, PreferencesStore};

/// Memoizes preference handles by store name.
///
/// Each name is opened at most once for the life of the canvas; later
/// lookups return the same shared handle, so edits made through one
/// handle are visible through all of them and a single flush covers
/// every user of the name. Nothing is ever evicted.
pub struct PreferencesCache {
    store: Box<dyn PreferencesStore>,
    open: HashMap<String, Arc<dyn Preferences>>,
}

impl PreferencesCache {
    /// A cache drawing handles from `store`.
    #[must_use]
    pub fn new(store: Box<dyn PreferencesStore>) -> Self {
        Self {
            store,
            open: HashMap::new(),
        }
    }

    /// Fetch the handle for `name`, opening the store on first use.
    pub fn handle(&mut self, name: &str) -> Arc<dyn Preferences> {
        if let Some(prefs) = self.open.get(name) {
            return Arc::clone(prefs);
        }
        let prefs = self.store.open(name);
        self.open.insert(name.to_owned(), Arc::clone(&prefs));
        prefs
    }
}
