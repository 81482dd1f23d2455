//! # CRS Rust Core
//!
//! In-memory course registration engine.
//!
//! This crate resolves enrollment requests against two constraints: a
//! student's per-time-slot schedule must stay conflict-free, and a course's
//! enrollment must not exceed its capacity — overflow students queue on a
//! bounded waitlist that drains automatically when a seat opens. The
//! interactive menu loop and CSV file placement live outside this crate;
//! they drive the engine's operations and consume its rendered reports.
//!
//! ## Features
//!
//! - **Indexes**: fixed-capacity open-addressing table for students, an
//!   unbalanced BST for courses
//! - **Clash detection**: per-student schedules refuse double-booked slots
//! - **Waitlists**: bounded FIFO per course with promotion on drop
//! - **Bootstrap**: JSON seed catalogs with checksummed provenance
//! - **Export**: byte-stable tabular reports for downstream consumers
//!
//! ## Architecture
//!
//! - [`api`]: identifier newtypes and DTO types for callers
//! - [`config`]: structural limits from TOML configuration
//! - [`models`]: student/course records and seed parsing
//! - [`store`]: the index structures and the error taxonomy
//! - [`services`]: the registration engine, report rendering, and the
//!   shared clone-able handle

pub mod api;
pub mod checksum;
pub mod config;
pub mod models;
pub mod services;
pub mod store;

pub use api::{
    CourseId, CourseSummary, DropOutcome, RegisterOutcome, ScheduleEntry, StudentId, TimeSlot,
};
pub use config::RegistryConfig;
pub use services::registration::RegistrationEngine;
pub use services::shared::SharedEngine;
pub use store::error::{RegistryError, RegistryResult};
