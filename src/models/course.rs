//! Course domain record.

use crate::api::{CourseId, CourseSummary, StudentId, TimeSlot};
use crate::store::waitlist::WaitlistQueue;

/// One course: catalog data, the enrolled roster, and the waitlist.
///
/// The enrolled count is always `roster.len()`; there is no separate
/// counter to drift. The roster's upper bound (`roster_capacity` in config,
/// independent of `capacity`) is enforced when the course is registered, by
/// refusing capacities that exceed it.
#[derive(Debug, Clone)]
pub struct CourseRecord {
    id: CourseId,
    title: String,
    instructor: String,
    time_slot: TimeSlot,
    capacity: usize,
    roster: Vec<StudentId>,
    waitlist: WaitlistQueue,
}

impl CourseRecord {
    pub fn new(
        id: CourseId,
        title: impl Into<String>,
        instructor: impl Into<String>,
        time_slot: TimeSlot,
        capacity: usize,
        waitlist_capacity: usize,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            instructor: instructor.into(),
            time_slot,
            capacity,
            roster: Vec::with_capacity(capacity),
            waitlist: WaitlistQueue::new(waitlist_capacity),
        }
    }

    pub fn id(&self) -> &CourseId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn instructor(&self) -> &str {
        &self.instructor
    }

    pub fn time_slot(&self) -> &TimeSlot {
        &self.time_slot
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn enrolled_count(&self) -> usize {
        self.roster.len()
    }

    /// True once enrollment has reached capacity.
    pub fn is_full(&self) -> bool {
        self.roster.len() >= self.capacity
    }

    pub fn roster(&self) -> &[StudentId] {
        &self.roster
    }

    pub fn waitlist(&self) -> &WaitlistQueue {
        &self.waitlist
    }

    pub fn waitlist_mut(&mut self) -> &mut WaitlistQueue {
        &mut self.waitlist
    }

    /// Append a student to the roster. The caller checks `is_full` first;
    /// the engine's capacity validation keeps the roster within its bound.
    pub fn add_to_roster(&mut self, id: StudentId) {
        self.roster.push(id);
    }

    /// Remove a student from the roster, preserving the order of the rest.
    ///
    /// Returns whether the student was actually enrolled.
    pub fn remove_from_roster(&mut self, id: &StudentId) -> bool {
        match self.roster.iter().position(|s| s == id) {
            Some(idx) => {
                self.roster.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn summary(&self) -> CourseSummary {
        CourseSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            instructor: self.instructor.clone(),
            time_slot: self.time_slot.clone(),
            enrolled_count: self.enrolled_count(),
            capacity: self.capacity,
        }
    }
}
