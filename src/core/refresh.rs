use crate::api::AttendanceApi;
use crate::core::hours::weekly_hours;
use crate::errors::AppResult;
use crate::models::presence::PresenceSet;
use crate::render::board::{BoardBody, StudentRow};
use chrono::{DateTime, Local};
use tracing::{error, info, warn};

/// Run one refresh cycle and produce the new table body.
///
/// Order: roster, presence, then one attendance fetch per student, one
/// after another. Roster or presence failures abort the cycle and yield a
/// failed body; a failed attendance fetch only drops that student.
pub async fn refresh<A: AttendanceApi>(api: &A, now: DateTime<Local>, days: u32) -> BoardBody {
    match collect_rows(api, now, days).await {
        Ok((rows, skipped)) => BoardBody::Rows { rows, skipped },
        Err(e) => {
            error!(error = %e, "refresh aborted");
            BoardBody::Failed {
                message: e.to_string(),
            }
        }
    }
}

async fn collect_rows<A: AttendanceApi>(
    api: &A,
    now: DateTime<Local>,
    days: u32,
) -> AppResult<(Vec<StudentRow>, Vec<String>)> {
    let students = api.students().await?;
    let presence = PresenceSet::from_records(&api.current_status().await?);

    let mut rows = Vec::with_capacity(students.len());
    let mut skipped = Vec::new();
    for student in &students {
        let logs = match api.attendance(&student.student_id, days).await {
            Ok(logs) => logs,
            Err(e) => {
                warn!(student_id = %student.student_id, error = %e, "attendance fetch failed, student skipped");
                skipped.push(student.student_id.clone());
                continue;
            }
        };

        rows.push(StudentRow::build(
            student,
            presence.is_present(&student.student_id),
            weekly_hours(&logs, now),
        ));
    }

    info!(
        students = students.len(),
        rendered = rows.len(),
        skipped = skipped.len(),
        present = presence.len(),
        "refresh complete"
    );
    Ok((rows, skipped))
}
