use super::student::string_or_number;
use serde::{Deserialize, Serialize};

/// Violation counter of one student after a core-time check.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ViolationUpdate {
    #[serde(deserialize_with = "string_or_number")]
    pub student_id: String,
    #[serde(default)]
    pub core_time_violations: u32,
}

/// Payload of `GET /core-time/check/{period}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckResult {
    #[serde(default)]
    pub updated_students: Vec<ViolationUpdate>,
    /// Students found absent during their core time by this check.
    #[serde(default)]
    pub violations: Vec<String>,
}

/// A recorded core-time violation, from `GET /core-time/violations`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Alert {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(deserialize_with = "string_or_number")]
    pub student_id: String,
    pub alert_date: String,
    #[serde(default)]
    pub alert_period: Option<u8>,
}
