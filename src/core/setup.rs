use super::board::Board;
use super::cell::Cell;
use super::types::Position;
use crate::error::{OthelloError, Result};

/// 文字列配列から盤面を組み立てる
///
/// 1行が盤面の1行に対応する。`B` / `W` / `-` (`.` も可) を使い、
/// 空白と `|` は読み飛ばすので `render()` の出力もそのまま読める。
pub fn setup_from_strings(setup: &[&str]) -> Result<Board> {
    let rows: Vec<Vec<Cell>> = setup
        .iter()
        .map(|line| parse_row(line))
        .filter(|row| !matches!(row, Ok(cells) if cells.is_empty()))
        .collect::<Result<_>>()?;

    let size = rows.len();
    let mut board = Board::empty(size)?;

    for (row, cells) in rows.iter().enumerate() {
        if cells.len() != size {
            return Err(OthelloError::MalformedSetup(format!(
                "row {} has {} cells, expected {}",
                row,
                cells.len(),
                size
            )));
        }
        for (col, &cell) in cells.iter().enumerate() {
            board.set_state(Position::new(row, col), cell);
        }
    }
    Ok(board)
}

fn parse_row(line: &str) -> Result<Vec<Cell>> {
    line.chars()
        .filter(|c| !c.is_whitespace() && *c != '|')
        .map(|c| {
            Cell::from_char(c)
                .ok_or_else(|| OthelloError::MalformedSetup(format!("unknown glyph {:?}", c)))
        })
        .collect()
}
