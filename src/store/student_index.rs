//! Fixed-capacity open-addressing index for student records.
//!
//! Collision resolution is linear probing: insert and search scan forward
//! from the hashed slot, wrapping at the end of the table. The slot count is
//! fixed at construction; there is no resizing and no delete operation, so
//! tombstones are never needed. Every probe sequence is bounded by the slot
//! count and a fully occupied table reports `IndexExhausted` instead of
//! looping.

use crate::api::StudentId;
use crate::models::StudentRecord;
use crate::store::error::{RegistryError, RegistryResult};

/// Open-addressing hash table keyed by student id.
#[derive(Debug, Clone)]
pub struct StudentIndex {
    slots: Vec<Option<StudentRecord>>,
}

impl StudentIndex {
    /// Create an index with the given number of slots.
    ///
    /// Callers should size the table from `RegistryConfig::student_slots`;
    /// a zero slot count is rejected there.
    pub fn new(slot_count: usize) -> Self {
        Self {
            slots: vec![None; slot_count],
        }
    }

    /// Hash an id to its home slot: sum of byte values modulo the slot count.
    fn bucket(&self, id: &StudentId) -> usize {
        let sum: usize = id.as_str().bytes().map(usize::from).sum();
        sum % self.slots.len()
    }

    /// Insert a record, linear-probing from its home slot.
    ///
    /// A slot already keyed by the same id is overwritten — the prior record
    /// (including its schedule) is replaced; there is no separate update
    /// operation. When the probe visits every slot without finding a free or
    /// matching one, the insert fails with `IndexExhausted`.
    pub fn insert(&mut self, record: StudentRecord) -> RegistryResult<()> {
        let start = self.bucket(record.id());
        for step in 0..self.slots.len() {
            let idx = (start + step) % self.slots.len();
            match &self.slots[idx] {
                Some(existing) if existing.id() != record.id() => continue,
                _ => {
                    self.slots[idx] = Some(record);
                    return Ok(());
                }
            }
        }
        Err(RegistryError::IndexExhausted {
            slots: self.slots.len(),
        })
    }

    /// Probe position of an id, or `None`.
    ///
    /// The scan stops at the first empty slot: with no deletions, an empty
    /// slot proves the id was never placed further along the sequence.
    fn position(&self, id: &StudentId) -> Option<usize> {
        let start = self.bucket(id);
        for step in 0..self.slots.len() {
            let idx = (start + step) % self.slots.len();
            match &self.slots[idx] {
                None => return None,
                Some(record) if record.id() == id => return Some(idx),
                Some(_) => continue,
            }
        }
        None
    }

    /// Look up a record by id.
    pub fn search(&self, id: &StudentId) -> Option<&StudentRecord> {
        self.position(id).and_then(|idx| self.slots[idx].as_ref())
    }

    /// Look up a record by id for mutation.
    pub fn search_mut(&mut self, id: &StudentId) -> Option<&mut StudentRecord> {
        let idx = self.position(id)?;
        self.slots[idx].as_mut()
    }

    /// True iff a record under this id exists.
    pub fn exists(&self, id: &StudentId) -> bool {
        self.position(id).is_some()
    }

    /// Occupied records in table order (used by the export surface).
    pub fn iter(&self) -> impl Iterator<Item = &StudentRecord> {
        self.slots.iter().flatten()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total slot count (fixed at construction).
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str) -> StudentRecord {
        StudentRecord::new(StudentId::new(id), name)
    }

    #[test]
    fn test_insert_then_search_roundtrip() {
        let mut index = StudentIndex::new(16);
        index.insert(record("S1", "Eman")).unwrap();
        index.insert(record("S2", "Maimona")).unwrap();

        assert_eq!(index.search(&StudentId::new("S1")).unwrap().name(), "Eman");
        assert_eq!(
            index.search(&StudentId::new("S2")).unwrap().name(),
            "Maimona"
        );
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_search_miss() {
        let mut index = StudentIndex::new(16);
        index.insert(record("S1", "Eman")).unwrap();

        assert!(index.search(&StudentId::new("S9")).is_none());
        assert!(!index.exists(&StudentId::new("S9")));
    }

    #[test]
    fn test_colliding_ids_probe_forward() {
        // "ab" and "ba" share a byte sum, so they hash to the same slot.
        let mut index = StudentIndex::new(8);
        index.insert(record("ab", "first")).unwrap();
        index.insert(record("ba", "second")).unwrap();

        assert_eq!(index.search(&StudentId::new("ab")).unwrap().name(), "first");
        assert_eq!(
            index.search(&StudentId::new("ba")).unwrap().name(),
            "second"
        );
    }

    #[test]
    fn test_insert_same_id_overwrites() {
        let mut index = StudentIndex::new(8);
        index.insert(record("S1", "Eman")).unwrap();
        index.insert(record("S1", "Eman Updated")).unwrap();

        assert_eq!(index.len(), 1);
        assert_eq!(
            index.search(&StudentId::new("S1")).unwrap().name(),
            "Eman Updated"
        );
    }

    #[test]
    fn test_full_table_reports_exhausted() {
        let mut index = StudentIndex::new(2);
        index.insert(record("S1", "a")).unwrap();
        index.insert(record("S2", "b")).unwrap();

        let result = index.insert(record("S3", "c"));
        assert_eq!(result, Err(RegistryError::IndexExhausted { slots: 2 }));

        // A matching key still lands even when the table is full.
        assert!(index.insert(record("S2", "b2")).is_ok());
        assert_eq!(index.search(&StudentId::new("S2")).unwrap().name(), "b2");
    }

    #[test]
    fn test_search_terminates_on_full_table_without_match() {
        let mut index = StudentIndex::new(2);
        index.insert(record("S1", "a")).unwrap();
        index.insert(record("S2", "b")).unwrap();

        assert!(index.search(&StudentId::new("S3")).is_none());
    }

    #[test]
    fn test_iter_yields_occupied_in_table_order() {
        let mut index = StudentIndex::new(100);
        // No collisions at 100 slots, so table order is ascending home slot
        // regardless of insertion order.
        index.insert(record("S3", "Noor")).unwrap();
        index.insert(record("S1", "Eman")).unwrap();

        let ids: Vec<&str> = index.iter().map(|r| r.id().as_str()).collect();
        assert_eq!(ids, vec!["S1", "S3"]);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;
        use std::collections::HashSet;

        proptest! {
            #[test]
            fn prop_roundtrip_within_capacity(
                ids in proptest::collection::hash_set("[A-Z][0-9]{1,3}", 1..50)
            ) {
                let mut index = StudentIndex::new(64);
                for id in &ids {
                    index.insert(StudentRecord::new(StudentId::new(id.clone()), "x")).unwrap();
                }
                for id in &ids {
                    prop_assert!(index.exists(&StudentId::new(id.clone())));
                }
                prop_assert_eq!(index.len(), ids.len());
            }

            #[test]
            fn prop_absent_ids_stay_absent(
                ids in proptest::collection::hash_set("[A-Z][0-9]{1,3}", 1..30),
                probe in "[a-z]{1,4}"
            ) {
                let mut index = StudentIndex::new(64);
                let mut inserted = HashSet::new();
                for id in &ids {
                    index.insert(StudentRecord::new(StudentId::new(id.clone()), "x")).unwrap();
                    inserted.insert(id.clone());
                }
                if !inserted.contains(&probe) {
                    prop_assert!(index.search(&StudentId::new(probe)).is_none());
                }
            }
        }
    }
}
