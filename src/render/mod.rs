pub mod board;
pub mod html;
pub mod terminal;

use crate::errors::AppResult;
use crate::utils::colors::strip_ansi;
use board::Board;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal table
    Text,
    /// Escaped HTML table body
    Html,
    /// Serialized board
    Json,
}

/// Render `board` in the requested format.
/// `color` only affects the text format.
pub fn render(board: &Board, format: OutputFormat, color: bool) -> AppResult<String> {
    Ok(match format {
        OutputFormat::Text => {
            let out = terminal::render_board(board);
            if color { out } else { strip_ansi(&out) }
        }
        OutputFormat::Html => html::render_tbody(board).into_string(),
        OutputFormat::Json => serde_json::to_string_pretty(board)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use board::BoardBody;

    #[test]
    fn json_output_carries_the_state_tag() {
        let mut b = Board::new(false);
        b.replace(BoardBody::Failed {
            message: "down".into(),
        });
        let out = render(&b, OutputFormat::Json, false).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["body"]["state"], "failed");
        assert_eq!(v["body"]["message"], "down");
    }

    #[test]
    fn plain_text_has_no_escapes() {
        let b = Board::new(false);
        let out = render(&b, OutputFormat::Text, false).unwrap();
        assert!(!out.contains('\x1b'));
    }
}
