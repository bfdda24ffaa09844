use super::student::string_or_number;
use crate::utils::time::deserialize_optional_timestamp;
use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer};

/// One entry of `GET /attendance/{id}`.
///
/// A missing `exit_time` is an open session. Timestamps that cannot be
/// parsed are read as missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttendanceLog {
    #[serde(default, deserialize_with = "optional_id")]
    pub student_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub entry_time: Option<DateTime<Local>>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub exit_time: Option<DateTime<Local>>,
}

impl AttendanceLog {
    pub fn new(entry_time: DateTime<Local>, exit_time: Option<DateTime<Local>>) -> Self {
        Self {
            student_id: None,
            entry_time: Some(entry_time),
            exit_time,
        }
    }

    /// Both ends of the session, if the session is closed.
    pub fn closed_session(&self) -> Option<(DateTime<Local>, DateTime<Local>)> {
        Some((self.entry_time?, self.exit_time?))
    }
}

fn optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapped(#[serde(deserialize_with = "string_or_number")] String);

    Ok(Option::<Wrapped>::deserialize(deserializer)?.map(|w| w.0))
}
