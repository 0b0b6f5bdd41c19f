//! Filter, sort and group operations over collection snapshots.
//!
//! All operations preserve the relative order of their input. They accept any
//! iterator, so they work on owned records or on references into a snapshot.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

/// Records sharing one key, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Group<K, R> {
    pub key: K,
    pub records: Vec<R>,
}

/// Subsequence satisfying `predicate`.
pub fn filter<I, R, P>(records: I, mut predicate: P) -> Vec<R>
where
    I: IntoIterator<Item = R>,
    P: FnMut(&R) -> bool,
{
    records.into_iter().filter(|r| predicate(r)).collect()
}

/// Stable sort: equal elements keep their input order.
pub fn sort<I, R, C>(records: I, compare: C) -> Vec<R>
where
    I: IntoIterator<Item = R>,
    C: FnMut(&R, &R) -> Ordering,
{
    let mut sorted: Vec<R> = records.into_iter().collect();
    sorted.sort_by(compare);
    sorted
}

/// Group by key. Groups appear in the order their key is first seen.
pub fn group_by<I, R, K, F>(records: I, mut key_of: F) -> Vec<Group<K, R>>
where
    I: IntoIterator<Item = R>,
    K: Eq + Hash + Clone,
    F: FnMut(&R) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<Group<K, R>> = Vec::new();

    for record in records {
        let key = key_of(&record);
        match index.get(&key).copied() {
            Some(i) => groups[i].records.push(record),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(Group {
                    key,
                    records: vec![record],
                });
            }
        }
    }
    groups
}

/// Unique keys in first-seen order.
pub fn distinct_by<I, R, K, F>(records: I, mut key_of: F) -> Vec<K>
where
    I: IntoIterator<Item = R>,
    K: Eq + Hash + Clone,
    F: FnMut(&R) -> K,
{
    let mut seen = std::collections::HashSet::new();
    let mut keys = Vec::new();
    for record in records {
        let key = key_of(&record);
        if seen.insert(key.clone()) {
            keys.push(key);
        }
    }
    keys
}
