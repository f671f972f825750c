//! Symbol interning.
//!
//! A [`SymbolTable`] hands out dense ids starting at 0, one per distinct key,
//! in order of first appearance. Ids are never reused or removed during a
//! generation pass. Variable names and constants use separate tables, so
//! their id spaces are independent.

use std::borrow::Borrow;
use std::hash::Hash;

use corvid_core::{CodegenError, Result};
use rustc_hash::FxHashMap;

/// Dense, first-occurrence-ordered id assignment.
#[derive(Debug, Clone)]
pub struct SymbolTable<K> {
    /// Key to id
    ids: FxHashMap<K, u32>,
    /// Keys by id
    keys: Vec<K>,
}

/// Global variable and function names.
pub type Names = SymbolTable<String>;

/// Id of the entry stored at index `len`.
///
/// Fails once the index no longer fits the 32-bit operand.
pub(crate) fn next_id(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| CodegenError::TooManySymbols { len })
}

impl<K> Default for SymbolTable<K> {
    fn default() -> Self {
        Self {
            ids: FxHashMap::default(),
            keys: Vec::new(),
        }
    }
}

impl<K: Hash + Eq + Clone> SymbolTable<K> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id of `key`, assigning the next free id if it is new.
    pub fn intern<Q>(&mut self, key: &Q) -> Result<u32>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
    {
        if let Some(&id) = self.ids.get(key) {
            return Ok(id);
        }

        let id = next_id(self.keys.len())?;
        let owned = key.to_owned();
        self.keys.push(owned.clone());
        self.ids.insert(owned, id);
        Ok(id)
    }

    /// Keys indexed by id.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Consume the table, returning keys indexed by id.
    pub fn into_keys(self) -> Vec<K> {
        self.keys
    }

    /// Number of interned keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if nothing has been interned.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_first_occurrence() {
        let mut names = Names::new();
        assert_eq!(names.intern("b"), Ok(0));
        assert_eq!(names.intern("a"), Ok(1));
        assert_eq!(names.intern("c"), Ok(2));
        assert_eq!(names.keys(), &["b", "a", "c"]);
    }

    #[test]
    fn repeat_lookup_is_stable() {
        let mut names = Names::new();
        let x = names.intern("x").unwrap();
        names.intern("y").unwrap();
        assert_eq!(names.intern("x"), Ok(x));
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn into_keys_is_indexed_by_id() {
        let mut names = Names::new();
        assert!(names.is_empty());
        names.intern("first").unwrap();
        names.intern("second").unwrap();
        assert_eq!(names.into_keys(), vec!["first", "second"]);
    }

    #[test]
    fn separate_tables_have_separate_spaces() {
        let mut variables = Names::new();
        let mut other = SymbolTable::<u64>::new();
        variables.intern("0").unwrap();
        assert_eq!(other.intern(&0), Ok(0));
        assert_eq!(variables.intern("1"), Ok(1));
        assert_eq!(other.intern(&1), Ok(1));
    }

    #[test]
    fn next_id_fits_operand() {
        assert_eq!(next_id(0), Ok(0));
        assert_eq!(next_id(u32::MAX as usize), Ok(u32::MAX));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn next_id_past_operand_range() {
        let len = u32::MAX as usize + 1;
        assert_eq!(next_id(len), Err(CodegenError::TooManySymbols { len }));
    }
}
