use crate::core::{Board, Cell, Position};
use crate::logic::GameState;
use crossterm::{cursor, queue, style::Stylize, terminal};
use std::io::{self, Write};

pub struct DisplayState {
    pub highlights: Vec<Position>,
    pub status_msg: Option<String>,
    pub last_move: Option<Position>,
    /// 描画前に画面を消す
    pub clear_screen: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            highlights: Vec::new(),
            status_msg: None,
            last_move: None,
            clear_screen: true,
        }
    }
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 手番側の合法手をヒントとして表示する状態
    pub fn for_turn(state: &GameState, last_move: Option<Position>) -> Self {
        Self {
            highlights: state.available_moves().to_vec(),
            status_msg: Some(format!(
                "{}'s turn   BLACK {} - {} WHITE",
                state.turn(),
                state.black_score(),
                state.white_score()
            )),
            last_move,
            clear_screen: true,
        }
    }
}

pub fn render_board<W: Write>(out: &mut W, board: &Board, state: &DisplayState) -> io::Result<()> {
    if state.clear_screen {
        // 画面クリア（スクロール防止）
        queue!(
            out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
    }

    writeln!(out, "=== Othello ===")?;
    match &state.status_msg {
        Some(msg) => writeln!(out, "{}", msg.clone().bold().yellow())?,
        None => writeln!(out)?,
    }
    writeln!(out)?;

    // 列ラベル
    write!(out, "   ")?;
    for col in 0..board.size() {
        write!(out, "{:>3}", col)?;
    }
    writeln!(out)?;

    for row in 0..board.size() {
        write!(out, "{:>3}", row)?;
        for col in 0..board.size() {
            let pos = Position::new(row, col);
            let cell = board.state_at(pos);
            let is_last_move = state.last_move == Some(pos);
            let is_highlight = state.highlights.contains(&pos);

            let text = if is_highlight {
                "  *".to_string()
            } else {
                format!("  {}", cell.display_char())
            };

            if is_last_move {
                write!(out, "{}", text.red().bold())?;
            } else if is_highlight {
                write!(out, "{}", text.green())?;
            } else {
                match cell {
                    Cell::Black => write!(out, "{}", text.cyan())?,
                    Cell::White => write!(out, "{}", text.magenta())?,
                    Cell::Empty => write!(out, "{}", text)?,
                }
            }
        }
        writeln!(out)?;
    }
    writeln!(out)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_board_and_status() {
        let state = GameState::with_size(6).unwrap();
        let mut display = DisplayState::for_turn(&state, None);
        display.clear_screen = false;

        let mut out = Vec::new();
        render_board(&mut out, state.board(), &display).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("=== Othello ==="));
        assert!(text.contains("BLACK's turn"));
        assert!(text.contains("BLACK 2 - 2 WHITE"));
        // 合法手4つがヒント表示
        assert_eq!(text.matches('*').count(), 4);
    }

    #[test]
    fn test_highlights_empty_when_game_over() {
        let board = crate::core::setup_from_strings(&["WWWWWW"; 6]).unwrap();
        let state = GameState::from_board(board, crate::core::Color::Black);
        let display = DisplayState::for_turn(&state, Some(Position::new(0, 0)));
        assert!(display.highlights.is_empty());
        assert_eq!(display.last_move, Some(Position::new(0, 0)));
    }
}
