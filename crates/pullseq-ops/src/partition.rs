//! Key-partition result of `group_by`.

use std::hash::Hash;

use indexmap::{Equivalent, IndexMap};
use serde::Serialize;

/// Mapping from key to the values that produced it.
///
/// Keys iterate in order of first occurrence; each group keeps its values
/// in pull order. Serializes as a JSON object in that key order.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Partition<K: Hash + Eq, V> {
    groups: IndexMap<K, Vec<V>>,
}

impl<K: Hash + Eq, V> Default for Partition<K, V> {
    fn default() -> Self {
        Self {
            groups: IndexMap::new(),
        }
    }
}

impl<K: Hash + Eq, V> Partition<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` to the group for `key`, opening the group on first sight.
    pub fn push(&mut self, key: K, value: V) {
        self.groups.entry(key).or_default().push(value);
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&[V]>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.groups.get(key).map(Vec::as_slice)
    }

    /// Keys in first-occurrence order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> {
        self.groups.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of values across all groups.
    pub fn total_values(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn into_inner(self) -> IndexMap<K, Vec<V>> {
        self.groups
    }
}

impl<K: Hash + Eq, V> IntoIterator for Partition<K, V> {
    type Item = (K, Vec<V>);
    type IntoIter = indexmap::map::IntoIter<K, Vec<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}
