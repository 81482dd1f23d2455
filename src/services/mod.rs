//! Service layer: registration orchestration and report rendering.
//!
//! Services sit between the storage structures and the menu/export
//! collaborators. The engine owns the indexes and applies the
//! register/drop protocol; export renders the read surface.

pub mod export;
pub mod registration;
pub mod shared;

pub use export::{render_course_report, render_student_report, report_checksum};
pub use registration::RegistrationEngine;
pub use shared::SharedEngine;
