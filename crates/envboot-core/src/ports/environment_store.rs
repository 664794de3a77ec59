//! Environment store port.

/// The live variable scope consulted by subsequent requests.
///
/// Keys map to string values. Writes overwrite unconditionally and entries
/// are never removed, so the only way the store changes is through
/// [`EnvironmentStore::set`].
pub trait EnvironmentStore: Send + Sync {
    /// Look up a value.
    fn get(&self, key: &str) -> Option<String>;

    /// Insert or overwrite a value.
    fn set(&mut self, key: &str, value: &str);

    /// Snapshot of every entry, in first-insertion order.
    fn entries(&self) -> Vec<(String, String)>;

    /// Whether a key has been set.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of entries.
    fn len(&self) -> usize {
        self.entries().len()
    }

    /// Whether the store holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
