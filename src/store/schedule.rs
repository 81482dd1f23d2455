//! Per-student schedule with time-slot clash detection.
//!
//! Conceptually a stack: new entries go to the front, so traversal runs most
//! recent first. The backing store is a `Vec` appended at the back and
//! iterated in reverse, which keeps the same observable order without node
//! allocation.

use crate::api::{CourseId, ScheduleEntry, TimeSlot};

/// Ordered sequence of schedule entries for one student.
///
/// Invariant: no two entries share a time slot. `add` enforces this locally,
/// so the invariant holds after any sequence of successful operations.
#[derive(Debug, Clone, Default)]
pub struct ScheduleList {
    entries: Vec<ScheduleEntry>,
}

impl ScheduleList {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff an entry already occupies this time slot.
    pub fn has_clash(&self, time_slot: &TimeSlot) -> bool {
        self.entries.iter().any(|e| &e.time_slot == time_slot)
    }

    /// Add an entry unless its time slot clashes with an existing one.
    ///
    /// Returns `false` (and leaves the list untouched) on a clash; the
    /// caller decides how to report it.
    pub fn add(&mut self, entry: ScheduleEntry) -> bool {
        if self.has_clash(&entry.time_slot) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Remove the first entry (in traversal order) matching the course id.
    ///
    /// Returns whether an entry was removed; absent ids are a no-op.
    pub fn remove(&mut self, course_id: &CourseId) -> bool {
        match self.entries.iter().rposition(|e| &e.course_id == course_id) {
            Some(idx) => {
                self.entries.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Entries most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &ScheduleEntry> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
