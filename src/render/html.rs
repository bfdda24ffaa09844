//! HTML rendering of the board (`<tbody>` only; the page around it is not ours).
//! All text goes through maud, so student-provided values are escaped.

use super::board::{Board, BoardBody, COLUMN_COUNT, StudentRow};
use crate::utils::formatting::format_hours;
use maud::{Markup, html};

pub fn render_tbody(board: &Board) -> Markup {
    html! {
        tbody #studentList {
            @match &board.body {
                BoardBody::Empty => {}
                BoardBody::Rows { rows, .. } => {
                    @for row in rows {
                        (render_row(row))
                    }
                }
                BoardBody::Failed { message } => {
                    tr {
                        td colspan=(COLUMN_COUNT) class="text-center text-danger" {
                            "データの取得に失敗しました。" br;
                            "エラー: " (message) br;
                            button class="btn btn-outline-danger mt-2" data-action="retry" { "再読み込み" }
                        }
                    }
                }
            }
        }
    }
}

fn render_row(row: &StudentRow) -> Markup {
    let violation_class = if row.violations.emphasized { "violation" } else { "" };

    html! {
        tr data-student-id=(row.student_id) {
            td { (row.student_id) }
            td { (row.name) }
            td class=(row.presence.css_class()) {
                span { (row.presence.label()) }
            }
            td { (format_hours(row.weekly_hours)) }
            td { (row.core_time_1) }
            td { (row.core_time_2) }
            td class=(violation_class) {
                @if row.violations.emphasized {
                    span class="text-danger fw-bold" { (row.violations.text) }
                } @else {
                    span class="text-muted" { (row.violations.text) }
                }
            }
        }
    }
}
