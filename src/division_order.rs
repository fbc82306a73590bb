//! Deterministic display order over division groups.

use std::collections::HashMap;

use crate::constants::DIVISION_PRIORITY;

/// Orders division keys by a fixed priority table.
///
/// Keys missing from the table keep their relative input order and go after
/// every prioritised key.
#[derive(Debug, Clone, Default)]
pub struct DivisionOrderer {
    /// Overrides and additions on top of the static table
    overrides: HashMap<String, usize>,
}

impl DivisionOrderer {
    pub fn new(overrides: HashMap<String, usize>) -> Self {
        Self { overrides }
    }

    /// Rank of a key, or `None` when it is not in the table
    pub fn rank(&self, key: &str) -> Option<usize> {
        self.overrides
            .get(key)
            .copied()
            .or_else(|| DIVISION_PRIORITY.get(key).copied())
    }

    /// Stable sort of `items` by the rank of the key extracted from each item
    pub fn sort_by_key<T, F>(&self, items: &mut [T], key: F)
    where
        F: Fn(&T) -> &str,
    {
        // sort_by_key is stable, so unknown keys (usize::MAX) keep input order
        items.sort_by_key(|item| self.rank(key(item)).unwrap_or(usize::MAX));
    }

    /// Convenience form over plain keys
    pub fn order<'a>(&self, keys: &[&'a str]) -> Vec<&'a str> {
        let mut ordered = keys.to_vec();
        self.sort_by_key(&mut ordered, |k| *k);
        ordered
    }
}
