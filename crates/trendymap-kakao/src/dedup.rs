//! Order-preserving deduplication by an arbitrary key.

use std::collections::HashSet;
use std::hash::Hash;

/// Removes items whose key was already seen, keeping the first occurrence
/// of each key and the relative order of first occurrences.
pub fn dedup_by_key<T, K, F>(items: Vec<T>, mut key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(key(item))).collect()
}
