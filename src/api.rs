//! Public API surface for the registration core.
//!
//! This file consolidates the identifier newtypes and the DTO types consumed
//! by the menu/export collaborators. All types derive Serialize/Deserialize
//! for JSON serialization.

use serde::{Deserialize, Serialize};

/// Student identifier (hash index key).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub String);

/// Course identifier (BST ordering key).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub String);

/// Opaque time-slot label, e.g. `"Tue 10AM"`. Two entries clash iff their
/// labels compare equal; no calendar semantics are attached.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeSlot(pub String);

impl StudentId {
    pub fn new(value: impl Into<String>) -> Self {
        StudentId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl CourseId {
    pub fn new(value: impl Into<String>) -> Self {
        CourseId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TimeSlot {
    pub fn new(value: impl Into<String>) -> Self {
        TimeSlot(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StudentId {
    fn from(value: &str) -> Self {
        StudentId(value.to_string())
    }
}
impl From<&str> for CourseId {
    fn from(value: &str) -> Self {
        CourseId(value.to_string())
    }
}
impl From<&str> for TimeSlot {
    fn from(value: &str) -> Self {
        TimeSlot(value.to_string())
    }
}

/// One timetable entry: a course scheduled at a time slot.
///
/// Within one student's schedule no two entries share a time slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub time_slot: TimeSlot,
    pub course_id: CourseId,
}

/// Successful outcome of a `register` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegisterOutcome {
    /// The student holds a roster seat and a timetable entry.
    Enrolled,
    /// The course was full; the student is queued and their timetable is
    /// untouched until a seat opens.
    Waitlisted,
}

/// Outcome of a `drop` call. Dropping always succeeds once both ids resolve,
/// even when the student was not actually enrolled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropOutcome {
    /// Waitlisted student moved into the freed seat, if any.
    pub promoted: Option<StudentId>,
}

/// Course listing row (ascending-by-id sequences from `list_courses`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSummary {
    pub id: CourseId,
    pub title: String,
    pub instructor: String,
    pub time_slot: TimeSlot,
    pub enrolled_count: usize,
    pub capacity: usize,
}
