use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

// ---------------------------------------------------------------------------
// GroupCounts: occurrence counts per key, remembering first-encounter order
// ---------------------------------------------------------------------------

/// Counts of records per grouping key.
///
/// Keys keep the order in which they were first seen, so every consumer can
/// decide its own ordering policy (encounter order, count-descending with
/// stable ties, or sorted by key) from a single scan.
#[derive(Debug, Clone)]
pub struct GroupCounts<K> {
    entries: Vec<(K, usize)>,
    index: HashMap<K, usize>,
}

impl<K> Default for GroupCounts<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> GroupCounts<K> {
    /// Count one more occurrence of `key`.
    pub fn increment(&mut self, key: K) {
        self.add(key, 1);
    }

    fn add(&mut self, key: K, n: usize) {
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1 += n,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, n));
            }
        }
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-encounter order.
    pub fn into_encounter_order(self) -> Vec<(K, usize)> {
        self.entries
    }

    /// Entries sorted by descending count. The sort is stable, so ties keep
    /// their first-encounter order.
    pub fn into_descending(self) -> Vec<(K, usize)> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    /// Entries keyed and ordered by the key itself.
    pub fn into_sorted(self) -> BTreeMap<K, usize>
    where
        K: Ord,
    {
        self.entries.into_iter().collect()
    }

    /// Convert every key, e.g. from a borrowed `&str` into an owned `String`.
    pub fn map_keys<J, F>(self, mut f: F) -> GroupCounts<J>
    where
        J: Eq + Hash + Clone,
        F: FnMut(K) -> J,
    {
        self.entries
            .into_iter()
            .fold(GroupCounts::default(), |mut acc, (key, n)| {
                acc.add(f(key), n);
                acc
            })
    }
}

/// Fold `items` into per-key counts using `key` to pick the grouping value.
///
/// This is the single scan every aggregation is built on; filtering happens
/// on the iterator before it reaches here.
pub fn count_by<'a, T, I, K, F>(items: I, mut key: F) -> GroupCounts<K>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    K: Eq + Hash + Clone,
    F: FnMut(&'a T) -> K,
{
    items
        .into_iter()
        .fold(GroupCounts::default(), |mut acc, item| {
            acc.increment(key(item));
            acc
        })
}

/// Number of distinct values `key` takes over `items`.
pub fn distinct_count<'a, T, I, K, F>(items: I, key: F) -> usize
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    K: Eq + Hash + Clone,
    F: FnMut(&'a T) -> K,
{
    count_by(items, key).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_keep_first_encounter_order() {
        let words = ["b", "a", "b", "c", "a", "b"];
        let counts = count_by(&words, |w| *w);
        assert_eq!(counts.len(), 3);
        assert_eq!(
            counts.into_encounter_order(),
            vec![("b", 3), ("a", 2), ("c", 1)]
        );
    }

    #[test]
    fn descending_sort_is_stable_on_ties() {
        let words = ["x", "y", "z", "z", "y", "w", "w", "w"];
        let sorted = count_by(&words, |w| *w).into_descending();
        assert_eq!(sorted, vec![("w", 3), ("y", 2), ("z", 2), ("x", 1)]);
    }

    #[test]
    fn sorted_view_orders_by_key() {
        let words = ["b", "a", "c", "a"];
        let sorted = count_by(&words, |w| *w).into_sorted();
        let keys: Vec<_> = sorted.keys().copied().collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn map_keys_merges_colliding_keys() {
        let words = ["A", "a", "B"];
        let merged = count_by(&words, |w| *w).map_keys(|w| w.to_lowercase());
        assert_eq!(
            merged.into_encounter_order(),
            vec![("a".to_string(), 2), ("b".to_string(), 1)]
        );
    }

    #[test]
    fn empty_input_gives_empty_counts() {
        let none: [&str; 0] = [];
        let counts = count_by(&none, |w| *w);
        assert!(counts.is_empty());
        assert_eq!(distinct_count(&none, |w| *w), 0);
    }
}
