//! Shared engine handle for multi-consumer callers.
//!
//! The engine itself takes `&mut self` for every mutation, so exclusive
//! access is the default. Collaborators that need clone-able handles (a menu
//! loop driving registrations while an exporter reads) wrap the engine here:
//! writers hold the write lock for the whole register/drop transaction,
//! including the promotion step, so readers never observe a roster and
//! waitlist mid-promotion.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::api::{
    CourseId, CourseSummary, DropOutcome, RegisterOutcome, ScheduleEntry, StudentId, TimeSlot,
};
use crate::services::registration::RegistrationEngine;
use crate::store::error::RegistryResult;

/// Clone-able handle around a [`RegistrationEngine`].
#[derive(Clone)]
pub struct SharedEngine {
    inner: Arc<RwLock<RegistrationEngine>>,
}

impl SharedEngine {
    pub fn new(engine: RegistrationEngine) -> Self {
        Self {
            inner: Arc::new(RwLock::new(engine)),
        }
    }

    pub fn register_student(&self, id: StudentId, name: impl Into<String>) -> RegistryResult<()> {
        self.inner.write().register_student(id, name)
    }

    pub fn register_course(
        &self,
        id: CourseId,
        title: impl Into<String>,
        instructor: impl Into<String>,
        time_slot: TimeSlot,
        capacity: usize,
    ) -> RegistryResult<()> {
        self.inner
            .write()
            .register_course(id, title, instructor, time_slot, capacity)
    }

    pub fn register(
        &self,
        student_id: &StudentId,
        course_id: &CourseId,
    ) -> RegistryResult<RegisterOutcome> {
        self.inner.write().register(student_id, course_id)
    }

    pub fn drop(
        &self,
        student_id: &StudentId,
        course_id: &CourseId,
    ) -> RegistryResult<DropOutcome> {
        self.inner.write().drop(student_id, course_id)
    }

    pub fn timetable(&self, student_id: &StudentId) -> RegistryResult<Vec<ScheduleEntry>> {
        self.inner.read().timetable(student_id)
    }

    pub fn list_courses(&self) -> Vec<CourseSummary> {
        self.inner.read().list_courses()
    }

    pub fn course_summary(&self, course_id: &CourseId) -> RegistryResult<CourseSummary> {
        self.inner.read().course_summary(course_id)
    }

    /// Run a closure under the read lock, e.g. for report rendering.
    pub fn with_read<R>(&self, f: impl FnOnce(&RegistrationEngine) -> R) -> R {
        f(&self.inner.read())
    }
}
