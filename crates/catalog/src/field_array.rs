//! Ordered keyed collection for dynamic form lists
//!
//! The variant list is an ordered sequence the merchant edits in place:
//! append a blank row, delete a row by position, and (at the state layer)
//! insert, swap, and move. Each entry carries a stable key so the renderer
//! can keep row identity across reorders instead of re-keying by index.
//!
//! The rendered form only wires up append and remove, but the full
//! index-based contract lives here so it can be tested in isolation from
//! any rendering framework.

use serde::{Deserialize, Serialize};
use shopfront_core::{AdminError, AdminResult};
use uuid::Uuid;

// ============================================================================
// FieldEntry
// ============================================================================

/// One entry of a field array with its stable render key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldEntry<T> {
    /// Stable key assigned at insertion, never reused across entries
    pub key: Uuid,

    /// The entry value
    pub value: T,
}

impl<T> FieldEntry<T> {
    fn new(value: T) -> Self {
        Self {
            key: Uuid::new_v4(),
            value,
        }
    }
}

// ============================================================================
// FieldArray
// ============================================================================

/// Ordered collection with index-based editing operations
///
/// All operations preserve the order, keys, and content of untouched
/// entries. Out-of-range indices are reported as
/// [`AdminError::IndexOutOfBounds`], never a panic.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldArray<T> {
    entries: Vec<FieldEntry<T>>,
}

impl<T> FieldArray<T> {
    /// Create an empty field array
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the array has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add an entry at the end
    pub fn append(&mut self, value: T) {
        self.entries.push(FieldEntry::new(value));
    }

    /// Add an entry at the front
    pub fn prepend(&mut self, value: T) {
        self.entries.insert(0, FieldEntry::new(value));
    }

    /// Insert an entry at `index`, shifting later entries right
    ///
    /// `index == len` appends.
    pub fn insert(&mut self, index: usize, value: T) -> AdminResult<()> {
        if index > self.entries.len() {
            return Err(self.out_of_bounds(index));
        }
        self.entries.insert(index, FieldEntry::new(value));
        Ok(())
    }

    /// Remove the entry at `index`, closing the gap
    pub fn remove(&mut self, index: usize) -> AdminResult<T> {
        if index >= self.entries.len() {
            return Err(self.out_of_bounds(index));
        }
        Ok(self.entries.remove(index).value)
    }

    /// Swap the entries at two indices
    pub fn swap(&mut self, a: usize, b: usize) -> AdminResult<()> {
        let len = self.entries.len();
        if a >= len {
            return Err(self.out_of_bounds(a));
        }
        if b >= len {
            return Err(self.out_of_bounds(b));
        }
        self.entries.swap(a, b);
        Ok(())
    }

    /// Move the entry at `from` to position `to`
    ///
    /// Remove-then-insert semantics: the entry ends up at index `to` in
    /// the resulting list, relative order of the rest preserved.
    pub fn move_entry(&mut self, from: usize, to: usize) -> AdminResult<()> {
        let len = self.entries.len();
        if from >= len {
            return Err(self.out_of_bounds(from));
        }
        if to >= len {
            return Err(self.out_of_bounds(to));
        }
        let entry = self.entries.remove(from);
        self.entries.insert(to, entry);
        Ok(())
    }

    /// Entry at `index`, if in range
    pub fn get(&self, index: usize) -> Option<&FieldEntry<T>> {
        self.entries.get(index)
    }

    /// Mutable value at `index`, if in range
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.entries.get_mut(index).map(|e| &mut e.value)
    }

    /// Iterate entries in order
    pub fn iter(&self) -> impl Iterator<Item = &FieldEntry<T>> {
        self.entries.iter()
    }

    /// Iterate values in order
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|e| &e.value)
    }

    /// Remove all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn out_of_bounds(&self, index: usize) -> AdminError {
        AdminError::IndexOutOfBounds {
            index,
            len: self.entries.len(),
        }
    }
}

impl<T: Clone> FieldArray<T> {
    /// Collect the values into a plain vector, preserving order
    pub fn to_vec(&self) -> Vec<T> {
        self.values().cloned().collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn array_of(values: &[&str]) -> FieldArray<String> {
        let mut array = FieldArray::new();
        for v in values {
            array.append(v.to_string());
        }
        array
    }

    #[test]
    fn test_append_and_order() {
        let array = array_of(&["a", "b", "c"]);
        assert_eq!(array.len(), 3);
        assert_eq!(array.to_vec(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_append_then_remove_round_trip() {
        let mut array = array_of(&["a", "b"]);
        let before = array.to_vec();
        let keys: Vec<_> = array.iter().map(|e| e.key).collect();

        array.append("c".to_string());
        let removed = array.remove(2).unwrap();

        assert_eq!(removed, "c");
        assert_eq!(array.to_vec(), before);
        // Untouched entries keep their keys
        let keys_after: Vec<_> = array.iter().map(|e| e.key).collect();
        assert_eq!(keys_after, keys);
    }

    #[test]
    fn test_remove_closes_gap() {
        let mut array = array_of(&["a", "b", "c"]);
        array.remove(1).unwrap();
        assert_eq!(array.to_vec(), vec!["a", "c"]);
    }

    #[test]
    fn test_prepend_and_insert() {
        let mut array = array_of(&["b", "d"]);
        array.prepend("a".to_string());
        array.insert(2, "c".to_string()).unwrap();
        array.insert(4, "e".to_string()).unwrap(); // index == len appends
        assert_eq!(array.to_vec(), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_swap() {
        let mut array = array_of(&["a", "b", "c"]);
        array.swap(0, 2).unwrap();
        assert_eq!(array.to_vec(), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_move_entry_forward_and_back() {
        let mut array = array_of(&["a", "b", "c", "d"]);
        array.move_entry(0, 2).unwrap();
        assert_eq!(array.to_vec(), vec!["b", "c", "a", "d"]);
        array.move_entry(2, 0).unwrap();
        assert_eq!(array.to_vec(), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_out_of_bounds_is_error_not_panic() {
        let mut array = array_of(&["a"]);
        assert!(array.remove(1).is_err());
        assert!(array.insert(3, "x".to_string()).is_err());
        assert!(array.swap(0, 1).is_err());
        assert!(array.move_entry(1, 0).is_err());
        // Failed operations leave the list untouched
        assert_eq!(array.to_vec(), vec!["a"]);
    }

    #[test]
    fn test_keys_are_unique_and_stable() {
        let mut array = array_of(&["a", "b"]);
        let key_b = array.get(1).unwrap().key;
        array.remove(0).unwrap();
        assert_eq!(array.get(0).unwrap().key, key_b);

        let mut seen = std::collections::HashSet::new();
        array.append("c".to_string());
        array.append("d".to_string());
        for entry in array.iter() {
            assert!(seen.insert(entry.key));
        }
    }

    #[test]
    fn test_get_mut_edits_in_place() {
        let mut array = array_of(&["a"]);
        *array.get_mut(0).unwrap() = "z".to_string();
        assert_eq!(array.to_vec(), vec!["z"]);
        assert!(array.get_mut(1).is_none());
    }
}
