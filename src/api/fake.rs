//! In-memory `AttendanceApi` for tests.

use super::AttendanceApi;
use crate::errors::{AppError, AppResult};
use crate::models::attendance::AttendanceLog;
use crate::models::check::{Alert, CheckResult};
use crate::models::presence::PresenceRecord;
use crate::models::student::Student;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

#[derive(Default)]
pub struct FakeApi {
    pub students: Vec<Student>,
    pub presence: Vec<PresenceRecord>,
    pub attendance: HashMap<String, Vec<AttendanceLog>>,
    pub check: Option<CheckResult>,
    pub alerts: Vec<Alert>,

    pub students_status: Option<u16>,
    pub presence_status: Option<u16>,
    pub failing_attendance: HashSet<String>,

    pub calls: Mutex<Vec<String>>,
}

pub fn student(id: &str, name: &str) -> Student {
    Student {
        student_id: id.to_string(),
        name: name.to_string(),
        core_time_1_day: 0,
        core_time_1_period: 0,
        core_time_2_day: 0,
        core_time_2_period: 0,
        core_time_violations: 0,
    }
}

pub fn present(id: &str) -> PresenceRecord {
    PresenceRecord {
        student_id: id.to_string(),
        entry_time: None,
    }
}

impl FakeApi {
    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn fail(endpoint: &str, status: u16) -> AppError {
        AppError::Status {
            endpoint: endpoint.to_string(),
            status,
        }
    }
}

impl AttendanceApi for FakeApi {
    async fn students(&self) -> AppResult<Vec<Student>> {
        self.record("students".into());
        match self.students_status {
            Some(status) => Err(Self::fail("/api/students/", status)),
            None => Ok(self.students.clone()),
        }
    }

    async fn current_status(&self) -> AppResult<Vec<PresenceRecord>> {
        self.record("current-status".into());
        match self.presence_status {
            Some(status) => Err(Self::fail("/api/current-status/", status)),
            None => Ok(self.presence.clone()),
        }
    }

    async fn attendance(&self, student_id: &str, days: u32) -> AppResult<Vec<AttendanceLog>> {
        self.record(format!("attendance/{student_id}?days={days}"));
        if self.failing_attendance.contains(student_id) {
            return Err(Self::fail(&format!("/api/attendance/{student_id}"), 500));
        }
        Ok(self.attendance.get(student_id).cloned().unwrap_or_default())
    }

    async fn check_core_time(&self, period: u8) -> AppResult<CheckResult> {
        self.record(format!("core-time/check/{period}"));
        self.check
            .clone()
            .ok_or_else(|| Self::fail(&format!("/api/core-time/check/{period}"), 500))
    }

    async fn violations(&self) -> AppResult<Vec<Alert>> {
        self.record("core-time/violations".into());
        Ok(self.alerts.clone())
    }
}
