//! In-memory route table: canonical key → `Type::operation`.

use crate::route::RouteTarget;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Mapping from canonical route key to its [`RouteTarget`].
///
/// Keys are unique; inserting an existing key replaces the previous target
/// (last write wins). Serialises as a flat JSON object of strings, which is
/// exactly the cache file format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteTable {
    entries: HashMap<String, RouteTarget>,
}

/// Borrowed view of one table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry<'a> {
    pub key: &'a str,
    pub handler_type: &'a str,
    pub operation: &'a str,
}

impl RouteTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `key`. Returns the target that was replaced, if any.
    pub fn insert(&mut self, key: impl Into<String>, target: RouteTarget) -> Option<RouteTarget> {
        self.entries.insert(key.into(), target)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&RouteTarget> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = RouteEntry<'_>> {
        self.entries.iter().map(|(key, target)| RouteEntry {
            key,
            handler_type: &target.handler_type,
            operation: &target.operation,
        })
    }

    /// Entries sorted by key, for stable output.
    #[must_use]
    pub fn sorted(&self) -> Vec<RouteEntry<'_>> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.key.cmp(b.key));
        entries
    }

    /// `true` when some target of `self` does not appear anywhere among the
    /// targets of `other`.
    ///
    /// This is a value-level comparison: keys are ignored, so a route whose
    /// path changed while its `Type::operation` stayed the same does not count
    /// as a difference.
    #[must_use]
    pub fn has_unseen_targets(&self, other: &RouteTable) -> bool {
        let known: HashSet<&RouteTarget> = other.entries.values().collect();
        self.entries.values().any(|target| !known.contains(target))
    }

    /// Plain `key → "Type::operation"` map.
    #[must_use]
    pub fn to_string_map(&self) -> HashMap<String, String> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), v.to_string()))
            .collect()
    }
}

impl FromIterator<(String, RouteTarget)> for RouteTable {
    fn from_iter<I: IntoIterator<Item = (String, RouteTarget)>>(iter: I) -> Self {
        let mut table = RouteTable::new();
        for (key, target) in iter {
            table.insert(key, target);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, &str, &str)]) -> RouteTable {
        pairs
            .iter()
            .map(|(k, t, o)| (k.to_string(), RouteTarget::new(*t, *o)))
            .collect()
    }

    #[test]
    fn test_insert_last_write_wins() {
        let mut t = RouteTable::new();
        assert!(t.insert("GET:/api/a", RouteTarget::new("A", "x")).is_none());
        let old = t.insert("GET:/api/a", RouteTarget::new("B", "y"));
        assert_eq!(old, Some(RouteTarget::new("A", "x")));
        assert_eq!(t.len(), 1);
        assert_eq!(t.get("GET:/api/a"), Some(&RouteTarget::new("B", "y")));
    }

    #[test]
    fn test_json_shape_is_flat_string_map() {
        let t = table(&[("GET:/api/hello", "Greeter", "hello")]);
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json, serde_json::json!({"GET:/api/hello": "Greeter::hello"}));
        let back: RouteTable = serde_json::from_value(json).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn test_unseen_targets_value_level() {
        let cached = table(&[("GET:/api/a", "A", "x"), ("GET:/api/b", "B", "y")]);

        // identical
        assert!(!cached.clone().has_unseen_targets(&cached));

        // key moved, same target: not detected
        let moved = table(&[("GET:/api/a2", "A", "x"), ("GET:/api/b", "B", "y")]);
        assert!(!moved.has_unseen_targets(&cached));

        // route removed: fresh targets are a subset, not detected
        let removed = table(&[("GET:/api/a", "A", "x")]);
        assert!(!removed.has_unseen_targets(&cached));

        // new target: detected
        let added = table(&[("GET:/api/a", "A", "x"), ("GET:/api/c", "C", "z")]);
        assert!(added.has_unseen_targets(&cached));
    }

    #[test]
    fn test_sorted_is_by_key() {
        let t = table(&[("POST:/api/b", "B", "y"), ("GET:/api/a", "A", "x")]);
        let keys: Vec<_> = t.sorted().iter().map(|e| e.key).collect();
        assert_eq!(keys, vec!["GET:/api/a", "POST:/api/b"]);
        assert_eq!(t.to_string_map()["GET:/api/a"], "A::x");
    }
}
