//! Structured dashboard content: one descriptor per student row.
//!
//! Render targets (terminal, HTML, JSON) only ever read a [`Board`]; nothing
//! is built by concatenating raw markup.

use crate::models::check::ViolationUpdate;
use crate::models::student::Student;
use crate::utils::formatting::{ViolationCell, format_core_time, format_violations};
use chrono::{DateTime, Local};
use serde::Serialize;

/// Number of columns of the student table.
pub const COLUMN_COUNT: usize = 7;

pub const HEADERS: [&str; COLUMN_COUNT] = [
    "学籍番号",
    "氏名",
    "入室状況",
    "今週の利用時間",
    "コアタイム1",
    "コアタイム2",
    "違反回数",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    Present,
    Absent,
}

impl Presence {
    pub fn from_flag(present: bool) -> Self {
        if present {
            Presence::Present
        } else {
            Presence::Absent
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Presence::Present => "入室中 ✓",
            Presence::Absent => "退室中 ×",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Presence::Present => "status-present",
            Presence::Absent => "status-absent",
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Presence::Present)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRow {
    pub student_id: String,
    pub name: String,
    pub presence: Presence,
    pub weekly_hours: f64,
    pub core_time_1: String,
    pub core_time_2: String,
    pub violations: ViolationCell,
}

impl StudentRow {
    pub fn build(student: &Student, present: bool, weekly_hours: f64) -> Self {
        let (d1, p1) = student.core_time_1();
        let (d2, p2) = student.core_time_2();

        Self {
            student_id: student.student_id.clone(),
            name: student.name.clone(),
            presence: Presence::from_flag(present),
            weekly_hours,
            core_time_1: format_core_time(d1, p1),
            core_time_2: format_core_time(d2, p2),
            violations: format_violations(student.core_time_violations),
        }
    }
}

/// Table body produced by one refresh cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum BoardBody {
    /// Nothing loaded yet.
    Empty,
    Rows {
        rows: Vec<StudentRow>,
        /// Students left out because their attendance could not be fetched.
        #[serde(skip_serializing_if = "Vec::is_empty")]
        skipped: Vec<String>,
    },
    /// Roster or presence could not be fetched: a single error row with a
    /// retry control.
    Failed { message: String },
}

impl BoardBody {
    pub fn with_rows(rows: Vec<StudentRow>) -> Self {
        BoardBody::Rows {
            rows,
            skipped: Vec::new(),
        }
    }
}

/// The rendered dashboard. Every refresh replaces the body wholesale.
#[derive(Debug, Clone, Serialize)]
pub struct Board {
    pub body: BoardBody,
    /// Outcome of the last manual check, shown until acknowledged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
    pub check_enabled: bool,
    /// When the body was last replaced.
    pub updated_at: Option<DateTime<Local>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub ok: bool,
    pub message: String,
}

impl Board {
    pub fn new(check_enabled: bool) -> Self {
        Self {
            body: BoardBody::Empty,
            notice: None,
            check_enabled,
            updated_at: None,
        }
    }

    pub fn replace(&mut self, body: BoardBody) {
        self.body = body;
    }

    pub fn replace_at(&mut self, body: BoardBody, at: DateTime<Local>) {
        self.replace(body);
        self.updated_at = Some(at);
    }

    pub fn rows(&self) -> &[StudentRow] {
        match &self.body {
            BoardBody::Rows { rows, .. } => rows,
            _ => &[],
        }
    }

    /// Ids of the students dropped from the last refresh.
    pub fn skipped(&self) -> &[String] {
        match &self.body {
            BoardBody::Rows { skipped, .. } => skipped,
            _ => &[],
        }
    }

    /// Patch the violation cell of every row whose id matches an update.
    /// Other cells and rows are left as they are; unknown ids are ignored.
    /// Returns the number of rows changed.
    pub fn patch_violations(&mut self, updates: &[ViolationUpdate]) -> usize {
        let BoardBody::Rows { rows, .. } = &mut self.body else {
            return 0;
        };

        let mut patched = 0;
        for update in updates {
            if let Some(row) = rows.iter_mut().find(|r| r.student_id == update.student_id) {
                row.violations = format_violations(update.core_time_violations);
                patched += 1;
            }
        }
        patched
    }

    pub fn set_notice(&mut self, ok: bool, message: impl Into<String>) {
        self.notice = Some(Notice {
            ok,
            message: message.into(),
        });
    }

    pub fn acknowledge(&mut self) -> Option<Notice> {
        self.notice.take()
    }
}
