//! Tabular report rendering for the export collaborator.
//!
//! The two report shapes are consumed by existing tooling, so the rendered
//! bytes — separators, header spelling, group format, line ends — must not
//! change. Writing the reports to disk is the caller's job; this module only
//! produces the text and its fingerprint.

use std::io::{self, Write};

use crate::checksum::sha256_hex;
use crate::services::registration::RegistrationEngine;

/// Header row of the course report.
pub const COURSE_REPORT_HEADER: &str = "CourseId, Title, Instructor, Time, Capacity, Enrolled";

/// Header row of the student report.
pub const STUDENT_REPORT_HEADER: &str = "StudentId, Name, TimeTable";

/// Render the course report: one row per course in ascending id order.
pub fn render_course_report(engine: &RegistrationEngine) -> String {
    let mut out = String::new();
    out.push_str(COURSE_REPORT_HEADER);
    out.push('\n');

    for course in engine.courses().iter_inorder() {
        out.push_str(&format!(
            "{}, {}, {}, {}, {}, {}\n",
            course.id(),
            course.title(),
            course.instructor(),
            course.time_slot(),
            course.capacity(),
            course.enrolled_count()
        ));
    }
    out
}

/// Render the student report: one row per occupied table slot, in table
/// order, each schedule rendered as concatenated `(time-course)` groups in
/// current schedule order.
pub fn render_student_report(engine: &RegistrationEngine) -> String {
    let mut out = String::new();
    out.push_str(STUDENT_REPORT_HEADER);
    out.push('\n');

    for student in engine.students().iter() {
        out.push_str(&format!("{}, {}, ", student.id(), student.name()));
        for entry in student.schedule().iter() {
            out.push_str(&format!("({}-{})", entry.time_slot, entry.course_id));
        }
        out.push('\n');
    }
    out
}

/// Write the course report to any sink.
pub fn write_course_report<W: Write>(engine: &RegistrationEngine, writer: &mut W) -> io::Result<()> {
    writer.write_all(render_course_report(engine).as_bytes())
}

/// Write the student report to any sink.
pub fn write_student_report<W: Write>(
    engine: &RegistrationEngine,
    writer: &mut W,
) -> io::Result<()> {
    writer.write_all(render_student_report(engine).as_bytes())
}

/// Fingerprint of a rendered report, for divergence detection downstream.
pub fn report_checksum(report: &str) -> String {
    sha256_hex(report)
}
