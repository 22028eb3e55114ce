//! Preference store contracts.

use std::sync::Arc;

use crate::Result;

/// A named, string-keyed, string-valued store.
///
/// Mutations are buffered in memory; `flush` makes them durable. Handles
/// are shared behind `Arc` and must tolerate access from any thread.
pub trait Preferences: Send + Sync {
    /// Look up a value.
    fn get(&self, key: &str) -> Option<String>;

    /// Insert or replace a value.
    fn put(&self, key: &str, value: &str);

    /// Remove a key if present.
    fn remove(&self, key: &str);

    /// All keys currently present, in unspecified order.
    fn keys(&self) -> Vec<String>;

    /// Persist buffered mutations.
    fn flush(&self) -> Result<()>;
}

/// Factory for named preference stores.
pub trait PreferencesStore: Send {
    /// Open (or create) the store with the given name.
    ///
    /// Opening never fails: implementations that find unreadable existing
    /// data start from an empty map and report the problem through their
    /// own logging. Persistence errors surface on `flush` instead.
    fn open(&self, name: &str) -> Arc<dyn Preferences>;
}
