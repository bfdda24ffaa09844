use super::http_dashboard;
use crate::api::AttendanceApi;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Dashboard;
use crate::core::scheduler::IntervalTicker;
use crate::errors::{AppError, AppResult};
use crate::render::terminal::{render_board, render_status_line};
use crate::ui::messages::clear_screen;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

/// A line typed while the dashboard is running.
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    /// Empty line: dismiss the current notice.
    Acknowledge,
    Refresh,
    Check(u8),
    Quit,
    Unknown(String),
}

pub fn parse_input(line: &str) -> Input {
    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (None, _, _) => Input::Acknowledge,
        (Some("r" | "refresh"), None, _) => Input::Refresh,
        (Some("q" | "quit" | "exit"), None, _) => Input::Quit,
        (Some("c" | "check"), Some(p), None) => match p.parse::<u8>() {
            Ok(period) => Input::Check(period),
            Err(_) => Input::Unknown(line.trim().to_string()),
        },
        _ => Input::Unknown(line.trim().to_string()),
    }
}

/// Handle the `watch` command: periodic refresh plus interactive triggers.
///
/// Manual refreshes and checks run in their own tasks, next to the
/// scheduled refresh; the screen is redrawn on every board change.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch {
        interval,
        check_enabled,
    } = cmd
    {
        let secs = interval.unwrap_or(cfg.refresh_interval_secs);
        if secs == 0 {
            return Err(AppError::Config("refresh interval must be at least 1 second".into()));
        }

        let dashboard = http_dashboard(cfg, cfg.check_enabled || *check_enabled)?;
        info!(api = %dashboard.api().base_url(), interval_secs = secs, "dashboard started");

        let mut changes = dashboard.subscribe();
        let schedule = dashboard.schedule(IntervalTicker::new(Duration::from_secs(secs)));

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdin_open = true;
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        draw(&dashboard).await;
        loop {
            tokio::select! {
                _ = &mut ctrl_c => break,
                changed = changes.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    draw(&dashboard).await;
                }
                line = lines.next_line(), if stdin_open => match line? {
                    None => stdin_open = false,
                    Some(line) => {
                        if !dispatch_input(&dashboard, parse_input(&line)).await {
                            break;
                        }
                    }
                },
            }
        }

        schedule.stop();
        let ticks = schedule.join().await?;
        info!(ticks, "dashboard stopped");
    }
    Ok(())
}

/// Returns false when the user asked to quit.
async fn dispatch_input<A: AttendanceApi + 'static>(dashboard: &Dashboard<A>, input: Input) -> bool {
    match input {
        Input::Quit => return false,
        Input::Acknowledge => {
            dashboard.acknowledge().await;
        }
        Input::Refresh => {
            let d = dashboard.clone();
            tokio::spawn(async move { d.refresh().await });
        }
        Input::Check(period) => {
            let d = dashboard.clone();
            tokio::spawn(async move {
                d.trigger_check(period).await;
            });
        }
        Input::Unknown(cmd) => {
            tracing::debug!(input = %cmd, "unknown command");
        }
    }
    true
}

async fn draw<A: AttendanceApi + 'static>(dashboard: &Dashboard<A>) {
    let board = dashboard.snapshot().await;
    clear_screen();
    println!("{}\n", render_status_line(&board));
    print!("{}", render_board(&board));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(parse_input(""), Input::Acknowledge);
        assert_eq!(parse_input("   "), Input::Acknowledge);
        assert_eq!(parse_input("r"), Input::Refresh);
        assert_eq!(parse_input("refresh"), Input::Refresh);
        assert_eq!(parse_input("q"), Input::Quit);
        assert_eq!(parse_input("c 3"), Input::Check(3));
        assert_eq!(parse_input("check  6 "), Input::Check(6));
    }

    #[test]
    fn rejects_malformed_commands() {
        assert_eq!(parse_input("c"), Input::Unknown("c".into()));
        assert_eq!(parse_input("c x"), Input::Unknown("c x".into()));
        assert_eq!(parse_input("c 1 2"), Input::Unknown("c 1 2".into()));
        assert_eq!(parse_input("r now"), Input::Unknown("r now".into()));
        assert_eq!(parse_input("hello"), Input::Unknown("hello".into()));
    }
}
