//! Station name interning.
//!
//! Station names arrive as arbitrary UTF-8 strings; the loader interns them
//! to small integer ids so the rest of the pipeline (vertex incidence,
//! vertex-balance constraints, path extraction) can index into dense arrays
//! instead of hashing strings on every lookup. The interner is retained so
//! diagnostics and output can translate ids back to names.

use std::collections::HashMap;

/// A dense id for an interned station name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(pub u32);

/// Bidirectional station-name <-> id table.
#[derive(Debug, Clone, Default)]
pub struct StationInterner {
    names: Vec<String>,
    ids: HashMap<String, StationId>,
}

impl StationInterner {
    /// Create an empty interner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `name`, returning its existing id or allocating a new one.
    pub fn intern(&mut self, name: &str) -> StationId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = StationId(self.names.len() as u32);
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        id
    }

    /// Look up the name for a previously interned id.
    pub fn name(&self, id: StationId) -> &str {
        &self.names[id.0 as usize]
    }

    /// Look up the id for an already-interned name, without interning it.
    pub fn get(&self, name: &str) -> Option<StationId> {
        self.ids.get(name).copied()
    }

    /// Number of distinct stations interned so far.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no stations have been interned yet.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_the_same_name_twice_returns_the_same_id() {
        let mut interner = StationInterner::new();
        let a = interner.intern("Tokyo");
        let b = interner.intern("Tokyo");
        assert_eq!(a, b);
        assert_eq!(interner.len(), 1);
    }

    #[test]
    fn distinct_names_get_distinct_ids_in_insertion_order() {
        let mut interner = StationInterner::new();
        let tokyo = interner.intern("Tokyo");
        let osaka = interner.intern("Osaka");
        assert_ne!(tokyo, osaka);
        assert_eq!(interner.name(tokyo), "Tokyo");
        assert_eq!(interner.name(osaka), "Osaka");
    }
}
