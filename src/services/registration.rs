//! Registration engine: the register/drop protocol over the two indexes.
//!
//! The engine owns the student table and the course tree and is the only
//! writer to either. Each `register`/`drop` call is one logical transaction:
//! every check precedes every mutation, so a rejected request leaves all
//! structures exactly as they were.

use log::{debug, info, warn};

use crate::api::{
    CourseId, CourseSummary, DropOutcome, RegisterOutcome, ScheduleEntry, StudentId, TimeSlot,
};
use crate::config::RegistryConfig;
use crate::models::{CourseRecord, SeedCatalog, StudentRecord};
use crate::store::course_tree::CourseTree;
use crate::store::error::{RegistryError, RegistryResult};
use crate::store::student_index::StudentIndex;

/// Orchestrates enrollment across the student and course indexes.
pub struct RegistrationEngine {
    config: RegistryConfig,
    students: StudentIndex,
    courses: CourseTree,
}

impl RegistrationEngine {
    /// Create an engine with default limits.
    pub fn new() -> Self {
        let config = RegistryConfig::default();
        Self {
            students: StudentIndex::new(config.student_slots),
            courses: CourseTree::new(),
            config,
        }
    }

    /// Create an engine with explicit limits.
    pub fn with_config(config: RegistryConfig) -> RegistryResult<Self> {
        config.validate()?;
        Ok(Self {
            students: StudentIndex::new(config.student_slots),
            courses: CourseTree::new(),
            config,
        })
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Read access to the student table (export surface).
    pub fn students(&self) -> &StudentIndex {
        &self.students
    }

    /// Read access to the course tree (export surface).
    pub fn courses(&self) -> &CourseTree {
        &self.courses
    }

    // ==================== Bootstrap population ====================

    /// Add a student record. Re-registering an existing id replaces the
    /// record, schedule included.
    pub fn register_student(
        &mut self,
        id: StudentId,
        name: impl Into<String>,
    ) -> RegistryResult<()> {
        if id.as_str().is_empty() {
            return Err(RegistryError::validation("student id must not be empty"));
        }
        debug!("registering student '{}'", id);
        self.students.insert(StudentRecord::new(id, name))
    }

    /// Add a course record.
    ///
    /// The course capacity may not exceed the configured roster bound, so a
    /// roster can never outgrow its storage.
    pub fn register_course(
        &mut self,
        id: CourseId,
        title: impl Into<String>,
        instructor: impl Into<String>,
        time_slot: TimeSlot,
        capacity: usize,
    ) -> RegistryResult<()> {
        if id.as_str().is_empty() {
            return Err(RegistryError::validation("course id must not be empty"));
        }
        if time_slot.as_str().is_empty() {
            return Err(RegistryError::validation(format!(
                "course '{}' has an empty time slot",
                id
            )));
        }
        if capacity > self.config.roster_capacity {
            return Err(RegistryError::validation(format!(
                "course '{}' capacity {} exceeds the roster bound {}",
                id, capacity, self.config.roster_capacity
            )));
        }

        debug!("registering course '{}' at '{}'", id, time_slot);
        self.courses.insert(CourseRecord::new(
            id,
            title,
            instructor,
            time_slot,
            capacity,
            self.config.waitlist_capacity,
        ))
    }

    /// Register every student and course of a seed catalog, in document
    /// order. Stops at the first error; earlier entries stay applied.
    pub fn apply_seed(&mut self, catalog: &SeedCatalog) -> RegistryResult<()> {
        for student in &catalog.students {
            self.register_student(StudentId::new(student.id.clone()), student.name.clone())?;
        }
        for course in &catalog.courses {
            self.register_course(
                CourseId::new(course.id.clone()),
                course.title.clone(),
                course.instructor.clone(),
                TimeSlot::new(course.time_slot.clone()),
                course.capacity,
            )?;
        }
        info!(
            "seed catalog applied: {} students, {} courses (checksum {})",
            catalog.students.len(),
            catalog.courses.len(),
            catalog.checksum
        );
        Ok(())
    }

    // ==================== Register / Drop protocol ====================

    /// Register a student into a course.
    ///
    /// Checks run in a fixed order — resolve both ids, clash, capacity —
    /// and nothing is mutated until every check on the taken path has
    /// passed. A full course queues the student (`Waitlisted`) and leaves
    /// their timetable alone until a seat actually opens.
    pub fn register(
        &mut self,
        student_id: &StudentId,
        course_id: &CourseId,
    ) -> RegistryResult<RegisterOutcome> {
        let Self {
            students, courses, ..
        } = self;

        let student = students
            .search_mut(student_id)
            .ok_or_else(|| RegistryError::student_not_found(student_id))?;
        let course = courses
            .search_mut(course_id)
            .ok_or_else(|| RegistryError::course_not_found(course_id))?;

        if student.schedule().has_clash(course.time_slot()) {
            return Err(RegistryError::ScheduleClash {
                student: student_id.clone(),
                time_slot: course.time_slot().clone(),
            });
        }

        if course.is_full() {
            if !course.waitlist_mut().enqueue(student_id.clone()) {
                warn!(
                    "waitlist for course '{}' is full; refusing student '{}'",
                    course_id, student_id
                );
                return Err(RegistryError::WaitlistFull {
                    course: course_id.clone(),
                });
            }
            info!(
                "course '{}' full; student '{}' waitlisted",
                course_id, student_id
            );
            return Ok(RegisterOutcome::Waitlisted);
        }

        course.add_to_roster(student_id.clone());
        let added = student.schedule_mut().add(ScheduleEntry {
            time_slot: course.time_slot().clone(),
            course_id: course_id.clone(),
        });
        debug_assert!(added, "slot must be free after the clash check");
        info!(
            "student '{}' enrolled in '{}' ({}/{})",
            student_id,
            course_id,
            course.enrolled_count(),
            course.capacity()
        );
        Ok(RegisterOutcome::Enrolled)
    }

    /// Drop a student from a course.
    ///
    /// Succeeds whenever both ids resolve, even if the student was not
    /// enrolled. When a seat frees up and the waitlist is non-empty, the
    /// next queued student is promoted into the roster; their timetable
    /// entry is added only if their id still resolves and the slot is free
    /// for them.
    pub fn drop(
        &mut self,
        student_id: &StudentId,
        course_id: &CourseId,
    ) -> RegistryResult<DropOutcome> {
        let Self {
            students, courses, ..
        } = self;

        let course = courses
            .search_mut(course_id)
            .ok_or_else(|| RegistryError::course_not_found(course_id))?;
        let student = students
            .search_mut(student_id)
            .ok_or_else(|| RegistryError::student_not_found(student_id))?;

        let removed = course.remove_from_roster(student_id);
        student.schedule_mut().remove(course_id);
        if removed {
            info!("student '{}' dropped from '{}'", student_id, course_id);
        }

        let mut promoted = None;
        if !course.is_full() {
            if let Some(next_id) = course.waitlist_mut().dequeue() {
                course.add_to_roster(next_id.clone());
                match students.search_mut(&next_id) {
                    Some(next) => {
                        let added = next.schedule_mut().add(ScheduleEntry {
                            time_slot: course.time_slot().clone(),
                            course_id: course_id.clone(),
                        });
                        if !added {
                            warn!(
                                "promoted student '{}' clashes at '{}'; roster seat kept, timetable unchanged",
                                next_id,
                                course.time_slot()
                            );
                        }
                    }
                    None => {
                        warn!(
                            "promoted student '{}' no longer resolves; roster seat kept",
                            next_id
                        );
                    }
                }
                info!("student '{}' promoted into '{}'", next_id, course_id);
                promoted = Some(next_id);
            }
        }

        Ok(DropOutcome { promoted })
    }

    // ==================== Read surface ====================

    /// A student's current timetable, most recent entry first.
    pub fn timetable(&self, student_id: &StudentId) -> RegistryResult<Vec<ScheduleEntry>> {
        let student = self
            .students
            .search(student_id)
            .ok_or_else(|| RegistryError::student_not_found(student_id))?;
        Ok(student.schedule().iter().cloned().collect())
    }

    /// Course summaries in ascending id order.
    pub fn list_courses(&self) -> Vec<CourseSummary> {
        self.courses.iter_inorder().map(|c| c.summary()).collect()
    }

    /// Summary of a single course.
    pub fn course_summary(&self, course_id: &CourseId) -> RegistryResult<CourseSummary> {
        self.courses
            .search(course_id)
            .map(|c| c.summary())
            .ok_or_else(|| RegistryError::course_not_found(course_id))
    }
}

impl Default for RegistrationEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sid(s: &str) -> StudentId {
        StudentId::new(s)
    }

    fn cid(s: &str) -> CourseId {
        CourseId::new(s)
    }

    /// Engine populated with the canonical bootstrap fixture.
    fn seeded_engine() -> RegistrationEngine {
        let mut engine = RegistrationEngine::new();
        engine.register_student(sid("S1"), "Eman").unwrap();
        engine.register_student(sid("S2"), "Maimona").unwrap();
        engine.register_student(sid("S3"), "Noor").unwrap();
        engine
            .register_course(cid("CS101"), "ITC", "Bilal Hashmi", "Tue 10AM".into(), 2)
            .unwrap();
        engine
            .register_course(cid("CS102"), "OOP", "Qazi Ammar", "Wed 11AM".into(), 1)
            .unwrap();
        engine
            .register_course(cid("CS103"), "DSA", "Hammad Naveed", "Mon 4PM".into(), 3)
            .unwrap();
        engine
    }

    #[test]
    fn test_register_unknown_ids() {
        let mut engine = seeded_engine();

        assert_eq!(
            engine.register(&sid("S9"), &cid("CS101")),
            Err(RegistryError::StudentNotFound { id: sid("S9") })
        );
        assert_eq!(
            engine.register(&sid("S1"), &cid("CS999")),
            Err(RegistryError::CourseNotFound { id: cid("CS999") })
        );
    }

    #[test]
    fn test_register_enrolls_and_updates_both_sides() {
        let mut engine = seeded_engine();

        let outcome = engine.register(&sid("S1"), &cid("CS101")).unwrap();
        assert_eq!(outcome, RegisterOutcome::Enrolled);

        let timetable = engine.timetable(&sid("S1")).unwrap();
        assert_eq!(timetable.len(), 1);
        assert_eq!(timetable[0].course_id, cid("CS101"));
        assert_eq!(timetable[0].time_slot, TimeSlot::new("Tue 10AM"));

        assert_eq!(engine.course_summary(&cid("CS101")).unwrap().enrolled_count, 1);
    }

    #[test]
    fn test_schedule_clash_rejected_without_mutation() {
        let mut engine = seeded_engine();
        engine
            .register_course(cid("CS201"), "AI", "Someone", "Tue 10AM".into(), 5)
            .unwrap();

        engine.register(&sid("S1"), &cid("CS101")).unwrap();
        let result = engine.register(&sid("S1"), &cid("CS201"));
        assert_eq!(
            result,
            Err(RegistryError::ScheduleClash {
                student: sid("S1"),
                time_slot: TimeSlot::new("Tue 10AM"),
            })
        );

        assert_eq!(engine.timetable(&sid("S1")).unwrap().len(), 1);
        assert_eq!(engine.course_summary(&cid("CS201")).unwrap().enrolled_count, 0);
    }

    #[test]
    fn test_full_course_waitlists_without_schedule_mutation() {
        let mut engine = seeded_engine();

        assert_eq!(
            engine.register(&sid("S1"), &cid("CS102")).unwrap(),
            RegisterOutcome::Enrolled
        );
        assert_eq!(
            engine.register(&sid("S2"), &cid("CS102")).unwrap(),
            RegisterOutcome::Waitlisted
        );

        // Capacity is never exceeded and the waitlisted timetable is untouched.
        assert_eq!(engine.course_summary(&cid("CS102")).unwrap().enrolled_count, 1);
        assert!(engine.timetable(&sid("S2")).unwrap().is_empty());
    }

    #[test]
    fn test_full_waitlist_surfaces_error() {
        let config = RegistryConfig {
            waitlist_capacity: 1,
            ..Default::default()
        };
        let mut engine = RegistrationEngine::with_config(config).unwrap();
        engine.register_student(sid("S1"), "a").unwrap();
        engine.register_student(sid("S2"), "b").unwrap();
        engine.register_student(sid("S3"), "c").unwrap();
        engine
            .register_course(cid("CS102"), "OOP", "Qazi Ammar", "Wed 11AM".into(), 1)
            .unwrap();

        engine.register(&sid("S1"), &cid("CS102")).unwrap();
        engine.register(&sid("S2"), &cid("CS102")).unwrap();
        assert_eq!(
            engine.register(&sid("S3"), &cid("CS102")),
            Err(RegistryError::WaitlistFull { course: cid("CS102") })
        );
    }

    #[test]
    fn test_drop_promotes_next_waitlisted_student() {
        let mut engine = seeded_engine();
        engine.register(&sid("S1"), &cid("CS102")).unwrap();
        engine.register(&sid("S2"), &cid("CS102")).unwrap();

        let outcome = engine.drop(&sid("S1"), &cid("CS102")).unwrap();
        assert_eq!(outcome.promoted, Some(sid("S2")));

        // Seat conservation: still exactly one enrolled.
        assert_eq!(engine.course_summary(&cid("CS102")).unwrap().enrolled_count, 1);

        let timetable = engine.timetable(&sid("S2")).unwrap();
        assert_eq!(timetable.len(), 1);
        assert_eq!(timetable[0].course_id, cid("CS102"));

        assert!(engine.timetable(&sid("S1")).unwrap().is_empty());
    }

    #[test]
    fn test_drop_without_waitlist_frees_seat() {
        let mut engine = seeded_engine();
        engine.register(&sid("S1"), &cid("CS101")).unwrap();

        let outcome = engine.drop(&sid("S1"), &cid("CS101")).unwrap();
        assert_eq!(outcome.promoted, None);
        assert_eq!(engine.course_summary(&cid("CS101")).unwrap().enrolled_count, 0);
    }

    #[test]
    fn test_drop_is_idempotent_for_not_enrolled() {
        let mut engine = seeded_engine();

        let outcome = engine.drop(&sid("S1"), &cid("CS101")).unwrap();
        assert_eq!(outcome.promoted, None);

        let outcome = engine.drop(&sid("S1"), &cid("CS101")).unwrap();
        assert_eq!(outcome.promoted, None);
    }

    #[test]
    fn test_drop_unknown_ids() {
        let mut engine = seeded_engine();

        assert!(engine.drop(&sid("S9"), &cid("CS101")).is_err());
        assert!(engine.drop(&sid("S1"), &cid("CS999")).is_err());
    }

    #[test]
    fn test_promotion_with_clashing_schedule_keeps_roster_seat() {
        let mut engine = seeded_engine();
        engine
            .register_course(cid("CS302"), "DB", "Someone", "Wed 11AM".into(), 5)
            .unwrap();

        // S2 queues on full CS102 (Wed 11AM), then enrolls in CS302 at the
        // same slot — legal, because waitlisting does not touch the schedule.
        engine.register(&sid("S1"), &cid("CS102")).unwrap();
        engine.register(&sid("S2"), &cid("CS102")).unwrap();
        engine.register(&sid("S2"), &cid("CS302")).unwrap();

        let outcome = engine.drop(&sid("S1"), &cid("CS102")).unwrap();
        assert_eq!(outcome.promoted, Some(sid("S2")));

        // The roster seat is consumed even though the timetable entry was
        // refused by the clash guard.
        assert_eq!(engine.course_summary(&cid("CS102")).unwrap().enrolled_count, 1);
        let timetable = engine.timetable(&sid("S2")).unwrap();
        assert_eq!(timetable.len(), 1);
        assert_eq!(timetable[0].course_id, cid("CS302"));
    }

    #[test]
    fn test_duplicate_course_rejected() {
        let mut engine = seeded_engine();
        let result = engine.register_course(cid("CS101"), "X", "Y", "Fri 9AM".into(), 1);
        assert_eq!(
            result,
            Err(RegistryError::DuplicateCourse { id: cid("CS101") })
        );
    }

    #[test]
    fn test_capacity_above_roster_bound_rejected() {
        let mut engine = seeded_engine();
        let bound = engine.config().roster_capacity;
        let result = engine.register_course(cid("CS900"), "X", "Y", "Fri 9AM".into(), bound + 1);
        assert!(matches!(result, Err(RegistryError::Validation { .. })));
    }

    #[test]
    fn test_student_index_exhaustion_reported() {
        let config = RegistryConfig {
            student_slots: 2,
            ..Default::default()
        };
        let mut engine = RegistrationEngine::with_config(config).unwrap();
        engine.register_student(sid("S1"), "a").unwrap();
        engine.register_student(sid("S2"), "b").unwrap();

        assert_eq!(
            engine.register_student(sid("S3"), "c"),
            Err(RegistryError::IndexExhausted { slots: 2 })
        );
    }

    #[test]
    fn test_empty_ids_rejected() {
        let mut engine = RegistrationEngine::new();
        assert!(matches!(
            engine.register_student(sid(""), "x"),
            Err(RegistryError::Validation { .. })
        ));
        assert!(matches!(
            engine.register_course(cid(""), "X", "Y", "Fri 9AM".into(), 1),
            Err(RegistryError::Validation { .. })
        ));
    }

    #[test]
    fn test_reregistering_student_clears_schedule() {
        let mut engine = seeded_engine();
        engine.register(&sid("S1"), &cid("CS101")).unwrap();

        engine.register_student(sid("S1"), "Eman Again").unwrap();
        assert!(engine.timetable(&sid("S1")).unwrap().is_empty());
        // The roster still holds the old membership; only the record was
        // replaced. This mirrors the overwrite semantics of the index.
        assert_eq!(engine.course_summary(&cid("CS101")).unwrap().enrolled_count, 1);
    }

    #[test]
    fn test_list_courses_sorted_by_id() {
        let engine = seeded_engine();
        let ids: Vec<String> = engine
            .list_courses()
            .iter()
            .map(|c| c.id.as_str().to_string())
            .collect();
        assert_eq!(ids, vec!["CS101", "CS102", "CS103"]);
    }

    #[test]
    fn test_apply_seed() {
        let catalog = crate::models::parse_seed_json(
            r#"{
                "students": [ { "id": "S1", "name": "Eman" } ],
                "courses": [
                    {
                        "id": "CS101",
                        "title": "ITC",
                        "instructor": "Bilal Hashmi",
                        "time_slot": "Tue 10AM",
                        "capacity": 2
                    }
                ]
            }"#,
        )
        .unwrap();

        let mut engine = RegistrationEngine::new();
        engine.apply_seed(&catalog).unwrap();

        assert!(engine.students().exists(&sid("S1")));
        assert_eq!(engine.list_courses().len(), 1);
    }
}
