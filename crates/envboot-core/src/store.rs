//! In-memory environment store.

use indexmap::IndexMap;

use crate::ports::EnvironmentStore;

/// Insertion-ordered in-memory [`EnvironmentStore`].
///
/// Overwriting a key keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryEnvironmentStore {
    values: IndexMap<String, String>,
}

impl InMemoryEnvironmentStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EnvironmentStore for InMemoryEnvironmentStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(existing) = self.values.get_mut(key) {
            value.clone_into(existing);
        } else {
            self.values.insert(key.to_string(), value.to_string());
        }
    }

    fn entries(&self) -> Vec<(String, String)> {
        self.values
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    fn len(&self) -> usize {
        self.values.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InMemoryEnvironmentStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for InMemoryEnvironmentStore {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            let (key, value) = (key.into(), value.into());
            self.set(&key, &value);
        }
    }
}
