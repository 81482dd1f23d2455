//! Error types for registry operations.
//!
//! One crate-wide taxonomy covers the index structures and the registration
//! engine. All failures are local and non-fatal: an operation reports its
//! error to the caller and leaves prior state unmodified.

use crate::api::{CourseId, StudentId, TimeSlot};

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Error type for registry operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// No student record under the given id.
    #[error("student '{id}' not found")]
    StudentNotFound { id: StudentId },

    /// No course record under the given id.
    #[error("course '{id}' not found")]
    CourseNotFound { id: CourseId },

    /// The student already has a course at the requested time slot.
    /// Nothing was mutated.
    #[error("student '{student}' already has a course at '{time_slot}'")]
    ScheduleClash {
        student: StudentId,
        time_slot: TimeSlot,
    },

    /// The course is full and its waitlist has reached its configured
    /// maximum. The enqueue request was refused, not silently dropped.
    #[error("waitlist for course '{course}' is full")]
    WaitlistFull { course: CourseId },

    /// The student table has no free slot and no slot keyed by the incoming
    /// id. The probe sequence is bounded by the slot count, so this is
    /// reported instead of looping.
    #[error("student index exhausted: all {slots} slots occupied")]
    IndexExhausted { slots: usize },

    /// A course with this id is already in the tree. Duplicate keys would
    /// create nodes unreachable by search, so insertion rejects them.
    #[error("course '{id}' is already registered")]
    DuplicateCourse { id: CourseId },

    /// Seed or bootstrap input failed validation.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Configuration file read or parse failure.
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl RegistryError {
    /// Create a student not-found error.
    pub fn student_not_found(id: &StudentId) -> Self {
        Self::StudentNotFound { id: id.clone() }
    }

    /// Create a course not-found error.
    pub fn course_not_found(id: &CourseId) -> Self {
        Self::CourseNotFound { id: id.clone() }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// True for errors that indicate an unknown id rather than a refused
    /// operation.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::StudentNotFound { .. } | Self::CourseNotFound { .. }
        )
    }
}
