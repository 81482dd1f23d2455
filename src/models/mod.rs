//! Domain records and seed-catalog parsing.

pub mod course;
pub mod seed;
pub mod student;

pub use course::CourseRecord;
pub use seed::{parse_seed_json, SeedCatalog, SeedCourse, SeedStudent};
pub use student::StudentRecord;
