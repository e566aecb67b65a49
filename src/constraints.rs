//! Disjunctive and exclusive constraint groups parsed from the eighth input
//! field.

use crate::edge::EdgeId;
use std::collections::BTreeMap;

/// The sentinel coefficient used to mark a mutually-exclusive edge within an
/// exclusive group. Exceeds any feasible sum of coefficient-1 edges.
pub const LARGE_COEFF: i64 = 1000;

/// A group-name keyed table of disjunctive constraints: each entry requires
/// at least one of its `(edge, polarity)` pairs to hold, where polarity
/// `true` means "edge used" and `false` means "edge unused".
#[derive(Debug, Clone, Default)]
pub struct DisjunctiveGroups {
    groups: BTreeMap<String, Vec<(EdgeId, bool)>>,
}

impl DisjunctiveGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `(edge_id, polarity)` to the named group, creating it if absent.
    pub fn add(&mut self, name: &str, edge_id: EdgeId, polarity: bool) {
        self.groups
            .entry(name.to_string())
            .or_default()
            .push((edge_id, polarity));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[(EdgeId, bool)])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// A group-name keyed table of exclusive constraints: each entry requires the
/// coefficient-weighted sum of "edge used" indicators to stay below
/// [`LARGE_COEFF`].
#[derive(Debug, Clone, Default)]
pub struct ExclusiveGroups {
    groups: BTreeMap<String, Vec<(EdgeId, i64)>>,
}

impl ExclusiveGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `(edge_id, coefficient)` to the named group, creating it if
    /// absent. `coefficient` is either [`LARGE_COEFF`] or `1`.
    pub fn add(&mut self, name: &str, edge_id: EdgeId, coefficient: i64) {
        self.groups
            .entry(name.to_string())
            .or_default()
            .push((edge_id, coefficient));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[(EdgeId, i64)])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
