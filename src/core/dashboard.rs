use crate::api::AttendanceApi;
use crate::core::check::{self, CheckReport};
use crate::core::refresh;
use crate::core::scheduler::{Scheduler, SchedulerHandle, Ticker};
use crate::errors::{AppError, AppResult};
use crate::render::board::{Board, Notice};
use chrono::{DateTime, Local};
use std::sync::Arc;
use tokio::sync::{Mutex, watch};
use tracing::warn;

#[derive(Debug, Clone, Copy)]
pub struct DashboardOptions {
    /// Window passed as `?days=` to the attendance endpoint.
    pub attendance_days: u32,
    /// Enables the manual core-time check.
    pub check_enabled: bool,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            attendance_days: 7,
            check_enabled: false,
        }
    }
}

/// The dashboard: an API, the shared board and the entry points that
/// write to it.
///
/// The periodic refresh and the manual triggers are independent and not
/// serialized against each other; each refresh replaces the whole body.
pub struct Dashboard<A> {
    api: Arc<A>,
    board: Arc<Mutex<Board>>,
    /// Bumped on every board change; watchers redraw on it.
    changes: Arc<watch::Sender<u64>>,
    options: DashboardOptions,
}

impl<A> Clone for Dashboard<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            board: Arc::clone(&self.board),
            changes: Arc::clone(&self.changes),
            options: self.options,
        }
    }
}

impl<A: AttendanceApi + 'static> Dashboard<A> {
    pub fn new(api: A, options: DashboardOptions) -> Self {
        Self {
            api: Arc::new(api),
            board: Arc::new(Mutex::new(Board::new(options.check_enabled))),
            changes: Arc::new(watch::channel(0).0),
            options,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }

    fn touch(&self) {
        self.changes.send_modify(|rev| *rev = rev.wrapping_add(1));
    }

    pub fn options(&self) -> DashboardOptions {
        self.options
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// One refresh cycle against the current time.
    pub async fn refresh(&self) {
        self.refresh_at(Local::now()).await;
    }

    pub async fn refresh_at(&self, now: DateTime<Local>) {
        let body = refresh::refresh(self.api.as_ref(), now, self.options.attendance_days).await;
        self.board.lock().await.replace_at(body, now);
        self.touch();
    }

    /// Run the manual check for `period` and patch the board.
    pub async fn run_check(&self, period: u8) -> AppResult<CheckReport> {
        if !self.options.check_enabled {
            return Err(AppError::CheckDisabled);
        }
        let report = check::run_check(self.api.as_ref(), &self.board, period).await?;
        self.touch();
        Ok(report)
    }

    /// Like [`Self::run_check`], but the outcome is left on the board as a
    /// notice for the user to acknowledge. Failures never propagate.
    pub async fn trigger_check(&self, period: u8) -> bool {
        let (ok, message) = match self.run_check(period).await {
            Ok(report) => (true, report.summary()),
            Err(e) => {
                warn!(period, error = %e, "manual check failed");
                (false, format!("コアタイムチェックに失敗しました: {e}"))
            }
        };
        self.board.lock().await.set_notice(ok, message);
        self.touch();
        ok
    }

    pub async fn acknowledge(&self) -> Option<Notice> {
        let notice = self.board.lock().await.acknowledge();
        if notice.is_some() {
            self.touch();
        }
        notice
    }

    /// Copy of the current board, for rendering.
    pub async fn snapshot(&self) -> Board {
        self.board.lock().await.clone()
    }

    /// Refresh on every tick of `ticker` until the handle is stopped.
    pub fn schedule<T: Ticker>(&self, ticker: T) -> SchedulerHandle {
        let dashboard = self.clone();
        Scheduler::new(ticker).start(move || {
            let dashboard = dashboard.clone();
            async move { dashboard.refresh().await }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{FakeApi, present, student};
    use crate::core::scheduler::ChannelTicker;
    use crate::models::check::{CheckResult, ViolationUpdate};
    use crate::render::board::BoardBody;

    fn api() -> FakeApi {
        FakeApi {
            students: vec![student("S1", "佐藤"), student("S2", "鈴木")],
            presence: vec![present("S1")],
            check: Some(CheckResult {
                updated_students: vec![ViolationUpdate {
                    student_id: "S2".into(),
                    core_time_violations: 4,
                }],
                violations: vec!["S2".into()],
            }),
            ..Default::default()
        }
    }

    fn options(check_enabled: bool) -> DashboardOptions {
        DashboardOptions {
            attendance_days: 7,
            check_enabled,
        }
    }

    #[tokio::test]
    async fn refresh_replaces_the_body() {
        let dashboard = Dashboard::new(api(), options(false));
        assert_eq!(dashboard.snapshot().await.body, BoardBody::Empty);

        dashboard.refresh().await;
        let board = dashboard.snapshot().await;
        assert_eq!(board.rows().len(), 2);
        assert!(board.updated_at.is_some());
    }

    #[tokio::test]
    async fn board_changes_are_announced() {
        let dashboard = Dashboard::new(api(), options(true));
        let mut changes = dashboard.subscribe();
        assert!(!changes.has_changed().unwrap());

        dashboard.refresh().await;
        assert!(changes.has_changed().unwrap());
        changes.borrow_and_update();

        dashboard.trigger_check(1).await;
        assert!(changes.has_changed().unwrap());
    }

    #[tokio::test]
    async fn check_is_refused_when_disabled() {
        let dashboard = Dashboard::new(api(), options(false));
        dashboard.refresh().await;

        assert!(matches!(
            dashboard.run_check(1).await,
            Err(AppError::CheckDisabled)
        ));
        assert!(!dashboard.api().calls().iter().any(|c| c.starts_with("core-time")));
    }

    #[tokio::test]
    async fn trigger_check_patches_and_leaves_notice() {
        let dashboard = Dashboard::new(api(), options(true));
        dashboard.refresh().await;

        assert!(dashboard.trigger_check(2).await);
        let board = dashboard.snapshot().await;
        assert_eq!(board.rows()[1].violations.text, "4回");
        assert_eq!(board.rows()[0].violations.text, "0回");
        assert!(board.notice.as_ref().is_some_and(|n| n.ok));

        assert!(dashboard.acknowledge().await.is_some());
        assert!(dashboard.snapshot().await.notice.is_none());
    }

    #[tokio::test]
    async fn failed_check_is_reported_not_raised() {
        let dashboard = Dashboard::new(
            FakeApi {
                check: None,
                ..api()
            },
            options(true),
        );
        dashboard.refresh().await;

        assert!(!dashboard.trigger_check(2).await);
        let board = dashboard.snapshot().await;
        assert!(board.notice.as_ref().is_some_and(|n| !n.ok));
        assert_eq!(board.rows().len(), 2);
    }

    #[tokio::test]
    async fn scheduled_ticks_refresh_the_board() {
        let dashboard = Dashboard::new(api(), options(false));
        let (tx, ticker) = ChannelTicker::channel();
        let handle = dashboard.schedule(ticker);

        tx.fire();
        tx.fire();
        drop(tx);
        assert_eq!(handle.join().await.unwrap(), 2);

        let calls = dashboard.api().calls();
        assert_eq!(calls.iter().filter(|c| *c == "students").count(), 2);
        assert_eq!(dashboard.snapshot().await.rows().len(), 2);
    }
}
