use super::http_dashboard;
use super::show::use_color;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::check::validate_period;
use crate::errors::{AppError, AppResult};
use crate::render::render;
use crate::ui::messages::success;

/// Handle the `check` command: refresh, run the core-time check for the
/// period, print the patched board and report the outcome.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check {
        period,
        format,
        check_enabled,
    } = cmd
    {
        let period = validate_period(*period)?;
        if !(cfg.check_enabled || *check_enabled) {
            return Err(AppError::CheckDisabled);
        }
        let dashboard = http_dashboard(cfg, true)?;

        dashboard.refresh().await;
        let outcome = dashboard.run_check(period).await;

        let board = dashboard.snapshot().await;
        print!("{}", render(&board, *format, use_color(*format))?);

        let report = outcome?;
        success(report.summary());
    }
    Ok(())
}
