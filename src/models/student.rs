//! Student domain record.

use crate::api::StudentId;
use crate::store::schedule::ScheduleList;

/// One student: identity plus their personal schedule.
///
/// Records are owned by the `StudentIndex`; re-inserting under the same id
/// replaces the whole record, schedule included.
#[derive(Debug, Clone)]
pub struct StudentRecord {
    id: StudentId,
    name: String,
    schedule: ScheduleList,
}

impl StudentRecord {
    pub fn new(id: StudentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            schedule: ScheduleList::new(),
        }
    }

    pub fn id(&self) -> &StudentId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schedule(&self) -> &ScheduleList {
        &self.schedule
    }

    pub fn schedule_mut(&mut self) -> &mut ScheduleList {
        &mut self.schedule
    }
}
