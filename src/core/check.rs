use crate::api::AttendanceApi;
use crate::errors::{AppError, AppResult};
use crate::render::board::Board;
use tokio::sync::Mutex;
use tracing::{info, warn};

pub const FIRST_PERIOD: u8 = 1;
pub const LAST_PERIOD: u8 = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub period: u8,
    /// Rows whose violation cell changed on the board.
    pub patched: usize,
    /// Students reported by the server for this check.
    pub updated: usize,
    /// Students found in violation by this check.
    pub violations: usize,
}

impl CheckReport {
    pub fn summary(&self) -> String {
        format!(
            "{}限のコアタイムチェックを実行しました。(違反 {}名 / 更新 {}行)",
            self.period, self.violations, self.patched
        )
    }
}

pub fn validate_period(period: u8) -> AppResult<u8> {
    if (FIRST_PERIOD..=LAST_PERIOD).contains(&period) {
        Ok(period)
    } else {
        Err(AppError::InvalidPeriod(period))
    }
}

/// Run the server-side check for `period` and patch the violation cells of
/// matching rows. The rest of the board is not refreshed.
pub async fn run_check<A: AttendanceApi>(
    api: &A,
    board: &Mutex<Board>,
    period: u8,
) -> AppResult<CheckReport> {
    let period = validate_period(period)?;

    let result = api.check_core_time(period).await.inspect_err(|e| {
        warn!(period, error = %e, "core-time check failed");
    })?;

    let patched = board.lock().await.patch_violations(&result.updated_students);

    let report = CheckReport {
        period,
        patched,
        updated: result.updated_students.len(),
        violations: result.violations.len(),
    };
    info!(
        period,
        patched = report.patched,
        updated = report.updated,
        violations = report.violations,
        "core-time check applied"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{FakeApi, student};
    use crate::models::check::{CheckResult, ViolationUpdate};
    use crate::render::board::{BoardBody, StudentRow};
    use crate::utils::formatting::format_violations;

    fn board() -> Mutex<Board> {
        let mut b = Board::new(true);
        b.replace(BoardBody::with_rows(vec![
            StudentRow::build(&student("S1", "佐藤"), true, 3.0),
            StudentRow::build(&student("S2", "鈴木"), false, 1.5),
        ]));
        Mutex::new(b)
    }

    #[tokio::test]
    async fn patches_only_reported_students() {
        let api = FakeApi {
            check: Some(CheckResult {
                updated_students: vec![ViolationUpdate {
                    student_id: "S1".into(),
                    core_time_violations: 2,
                }],
                violations: vec!["S1".into()],
            }),
            ..Default::default()
        };
        let board = board();
        let before = board.lock().await.rows().to_vec();

        let report = run_check(&api, &board, 3).await.unwrap();
        assert_eq!(report.patched, 1);
        assert_eq!(report.violations, 1);

        let b = board.lock().await;
        assert_eq!(b.rows()[0].violations, format_violations(2));
        assert_eq!(b.rows()[0].presence, before[0].presence);
        assert_eq!(b.rows()[0].weekly_hours, before[0].weekly_hours);
        assert_eq!(b.rows()[1], before[1]);
        // no refresh happened
        assert_eq!(api.calls(), vec!["core-time/check/3"]);
    }

    #[tokio::test]
    async fn failure_leaves_board_untouched() {
        let api = FakeApi::default();
        let board = board();
        let before = board.lock().await.rows().to_vec();

        let err = run_check(&api, &board, 2).await.unwrap_err();
        assert!(matches!(err, AppError::Status { status: 500, .. }));
        assert_eq!(board.lock().await.rows(), before.as_slice());
    }

    #[tokio::test]
    async fn rejects_out_of_range_periods() {
        let api = FakeApi::default();
        let board = board();
        assert!(matches!(
            run_check(&api, &board, 0).await,
            Err(AppError::InvalidPeriod(0))
        ));
        assert!(matches!(
            run_check(&api, &board, 7).await,
            Err(AppError::InvalidPeriod(7))
        ));
        assert!(api.calls().is_empty());
    }
}
