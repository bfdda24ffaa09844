use super::student::string_or_number;
use crate::utils::time::deserialize_optional_timestamp;
use chrono::{DateTime, Local};
use serde::Deserialize;
use std::collections::HashSet;

/// One entry of `GET /current-status/`: a student currently in the room.
#[derive(Debug, Clone, Deserialize)]
pub struct PresenceRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub student_id: String,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub entry_time: Option<DateTime<Local>>,
}

/// Ids of the students present in the current snapshot.
/// Anyone not listed is absent.
#[derive(Debug, Default, Clone)]
pub struct PresenceSet {
    ids: HashSet<String>,
}

impl PresenceSet {
    pub fn from_records(records: &[PresenceRecord]) -> Self {
        Self {
            ids: records.iter().map(|r| r.student_id.clone()).collect(),
        }
    }

    pub fn is_present(&self, student_id: &str) -> bool {
        self.ids.contains(student_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
