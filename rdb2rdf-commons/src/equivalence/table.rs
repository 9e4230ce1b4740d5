//! This module defines [EquivalenceTable].

use std::{collections::HashMap, fmt::Debug, hash::Hash};

use rdb2rdf_xsd::DataType;

/// Immutable mapping from some kind of SQL type to its equivalent [DataType]
///
/// Several SQL types may share the same datatype,
/// but every SQL type has at most one.
#[derive(Debug, Clone)]
pub struct EquivalenceTable<K> {
    /// Name used when logging
    name: &'static str,
    /// The equivalences
    equivalences: HashMap<K, DataType>,
}

impl<K> EquivalenceTable<K>
where
    K: Copy + Eq + Hash + Debug,
{
    /// Build a table from a list of entries.
    ///
    /// If a key is listed more than once, the last entry wins.
    pub fn new(name: &'static str, entries: &[(K, DataType)]) -> Self {
        let mut equivalences = HashMap::with_capacity(entries.len());

        for &(key, datatype) in entries {
            if let Some(previous) = equivalences.insert(key, datatype) {
                log::warn!(
                    "{name} equivalence of {key:?} is listed twice, replacing {previous} with {datatype}"
                );
            }
        }

        log::debug!(
            "built {name} equivalence table with {} entries",
            equivalences.len()
        );

        Self { name, equivalences }
    }

    /// Return the name of this table.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Return the datatype equivalent to the given key, if there is one.
    pub fn get(&self, key: K) -> Option<DataType> {
        let result = self.equivalences.get(&key).copied();
        if result.is_none() {
            log::trace!("{} equivalence table has no entry for {key:?}", self.name);
        }

        result
    }

    /// Return whether the given key has an equivalent datatype.
    pub fn contains(&self, key: K) -> bool {
        self.equivalences.contains_key(&key)
    }

    /// Return the number of keys with an equivalent datatype.
    pub fn len(&self) -> usize {
        self.equivalences.len()
    }

    /// Return whether this table is empty.
    pub fn is_empty(&self) -> bool {
        self.equivalences.is_empty()
    }

    /// Iterate over all equivalences in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (K, DataType)> + '_ {
        self.equivalences
            .iter()
            .map(|(&key, &datatype)| (key, datatype))
    }
}

/// Return the keys that are listed more than once in `entries`.
#[cfg(test)]
pub(crate) fn duplicate_keys<K>(entries: &[(K, DataType)]) -> Vec<K>
where
    K: Copy + Eq + Hash + Debug,
{
    let mut seen = std::collections::HashSet::new();

    entries
        .iter()
        .filter(|(key, _)| !seen.insert(*key))
        .map(|&(key, _)| key)
        .collect()
}
