//! Terminal rendering of the board.

use super::board::{Board, BoardBody, HEADERS, Notice};
use crate::utils::colors::{
    BOLD, CYAN, GREEN, RED, RESET, YELLOW, color_for_presence, colorize_slot, colorize_violations,
    paint,
};
use crate::utils::formatting::{format_hours, sanitize_cell};
use crate::utils::table::{Column, Table};
use chrono::{DateTime, Local};

pub const RETRY_HINT: &str = "[r] 再読み込み";

/// Draw the board as a table.
///
/// A failed body becomes a single row spanning all columns, carrying the
/// error and the retry control. Text from the server is stripped of control
/// characters first.
pub fn render_board(board: &Board) -> String {
    let mut table = Table::new(HEADERS.iter().map(|h| Column::new(h)).collect());

    match &board.body {
        BoardBody::Empty => {
            table.add_spanning_row(vec![paint("読み込み中…", YELLOW)]);
        }
        BoardBody::Rows { rows, .. } => {
            for row in rows {
                table.add_row(vec![
                    sanitize_cell(&row.student_id),
                    sanitize_cell(&row.name),
                    paint(
                        row.presence.label(),
                        color_for_presence(row.presence.is_present()),
                    ),
                    format_hours(row.weekly_hours),
                    colorize_slot(&row.core_time_1),
                    colorize_slot(&row.core_time_2),
                    colorize_violations(&row.violations),
                ]);
            }
        }
        BoardBody::Failed { message } => {
            table.add_spanning_row(vec![
                paint("データの取得に失敗しました。", RED),
                paint(&format!("エラー: {}", sanitize_cell(message)), RED),
                format!("{BOLD}{RETRY_HINT}{RESET}"),
            ]);
        }
    }

    let mut out = table.render();
    if let Some(notice) = &board.notice {
        out.push('\n');
        out.push_str(&render_notice(notice));
        out.push('\n');
    }
    out
}

pub fn render_notice(notice: &Notice) -> String {
    let (color, icon) = if notice.ok { (GREEN, "✅") } else { (RED, "❌") };
    format!(
        "{color}{icon} {}{RESET}  (Enter で閉じる)",
        sanitize_cell(&notice.message)
    )
}

/// Status line drawn above the table in watch mode, followed by the students
/// dropped by the last refresh, if any.
pub fn render_status_line(board: &Board) -> String {
    let updated = board
        .updated_at
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());
    let mut keys = String::from("r=再読み込み q=終了");
    if board.check_enabled {
        keys.push_str(" c <時限>=コアタイムチェック");
    }

    let mut line = format!("{CYAN}最終更新: {updated}{RESET}  {keys}");
    let skipped = board.skipped();
    if !skipped.is_empty() {
        let ids: Vec<String> = skipped.iter().map(|id| sanitize_cell(id)).collect();
        line.push('\n');
        line.push_str(&paint(
            &format!("⚠ 利用記録を取得できませんでした ({}名): {}", ids.len(), ids.join(", ")),
            YELLOW,
        ));
    }
    line
}
