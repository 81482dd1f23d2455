//! Storage structures for the registration core.
//!
//! This module owns the data-structure engine underneath the registration
//! service:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Service Layer (services::registration)             │
//! │  - register / drop protocol, waitlist promotion     │
//! └────────────┬──────────────────────┬─────────────────┘
//!              │                      │
//! ┌────────────▼───────────┐  ┌───────▼─────────────────┐
//! │  StudentIndex          │  │  CourseTree             │
//! │  (open addressing)     │  │  (unbalanced BST)       │
//! │  owns StudentRecord    │  │  owns CourseRecord      │
//! │   └─ ScheduleList      │  │   └─ WaitlistQueue      │
//! └────────────────────────┘  └─────────────────────────┘
//! ```
//!
//! The two indexes are independent; records cross-reference each other only
//! by id, resolved at call time. Every structure is an owning container
//! (slot vector, node arena, `Vec`, `VecDeque`) — no raw links.

pub mod course_tree;
pub mod error;
pub mod schedule;
pub mod student_index;
pub mod waitlist;

pub use course_tree::CourseTree;
pub use error::{RegistryError, RegistryResult};
pub use schedule::ScheduleList;
pub use student_index::StudentIndex;
pub use waitlist::WaitlistQueue;
