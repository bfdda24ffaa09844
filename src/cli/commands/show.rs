use super::http_dashboard;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::render::{OutputFormat, render};
use crate::ui::messages::success;
use std::fs;
use std::io::IsTerminal;

/// Handle the `show` command: one refresh, then print or write the board.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { format, output } = cmd {
        let dashboard = http_dashboard(cfg, cfg.check_enabled)?;
        dashboard.refresh().await;
        let board = dashboard.snapshot().await;

        match output {
            Some(path) => {
                fs::write(path, render(&board, *format, false)?)?;
                success(format!("Dashboard written to {path}"));
            }
            None => print!("{}", render(&board, *format, use_color(*format))?),
        }
    }
    Ok(())
}

pub fn use_color(format: OutputFormat) -> bool {
    format == OutputFormat::Text && std::io::stdout().is_terminal()
}
