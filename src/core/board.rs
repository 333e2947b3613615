use super::cell::Cell;
use super::types::{Color, Direction, Position};
use crate::error::{OthelloError, Result};
use std::fmt;

pub const MIN_BOARD_SIZE: usize = 6;
pub const MAX_BOARD_SIZE: usize = 12;
pub const STANDARD_BOARD_SIZE: usize = 8;

/// 盤面 (size x size)。ルールは持たない
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Vec<Cell>>,
}

impl Board {
    /// 初期配置済みの盤面を作る
    pub fn new(size: usize) -> Result<Self> {
        let mut board = Self::empty(size)?;
        board.place_starting_tokens();
        Ok(board)
    }

    pub fn standard() -> Self {
        let mut board = Board {
            size: STANDARD_BOARD_SIZE,
            cells: vec![vec![Cell::Empty; STANDARD_BOARD_SIZE]; STANDARD_BOARD_SIZE],
        };
        board.place_starting_tokens();
        board
    }

    /// 石のない盤面 (局面の組み立て用)
    pub fn empty(size: usize) -> Result<Self> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(OthelloError::BoardSize { size });
        }
        Ok(Board {
            size,
            cells: vec![vec![Cell::Empty; size]; size],
        })
    }

    // 中央に2個ずつ。奇数サイズでは中央やや右下寄り
    fn place_starting_tokens(&mut self) {
        let mid = self.size / 2;
        self.cells[mid][mid] = Cell::White;
        self.cells[mid - 1][mid] = Cell::Black;
        self.cells[mid][mid - 1] = Cell::Black;
        self.cells[mid - 1][mid - 1] = Cell::White;
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn rows(&self) -> usize {
        self.size
    }

    pub fn cols(&self) -> usize {
        self.size
    }

    pub fn is_valid_coordinate(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.is_valid_coordinate(pos.row, pos.col)
    }

    /// 範囲チェックなし。座標は検証済みであること
    pub fn state_at(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    /// 範囲チェックなし。座標は検証済みであること
    pub fn set_state(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row][pos.col] = cell;
    }

    pub fn place_token(&mut self, pos: Position, color: Color) -> Result<()> {
        if !self.contains(pos) {
            return Err(OthelloError::InvalidCoordinate {
                row: pos.row,
                col: pos.col,
            });
        }
        if !self.state_at(pos).is_empty() {
            return Err(OthelloError::OccupiedCell {
                row: pos.row,
                col: pos.col,
            });
        }
        self.set_state(pos, color.into());
        Ok(())
    }

    /// 石を裏返す。空マスなら何もしない
    pub fn flank(&mut self, pos: Position) -> Result<()> {
        if !self.contains(pos) {
            return Err(OthelloError::InvalidCoordinate {
                row: pos.row,
                col: pos.col,
            });
        }
        let flipped = self.state_at(pos).flipped();
        self.set_state(pos, flipped);
        Ok(())
    }

    /// 隣のマス。盤外なら None
    pub fn offset(&self, pos: Position, dir: Direction) -> Option<Position> {
        let row = pos.row.checked_add_signed(dir.d_row)?;
        let col = pos.col.checked_add_signed(dir.d_col)?;
        if self.is_valid_coordinate(row, col) {
            Some(Position::new(row, col))
        } else {
            None
        }
    }

    /// 全マスを row-major で走査する。呼ぶたびに先頭から
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(move |(col, &cell)| (Position::new(row, col), cell))
        })
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.iter().filter(|&(_, c)| c == cell).count()
    }

    pub fn occupied(&self) -> usize {
        self.iter().filter(|&(_, c)| !c.is_empty()).count()
    }

    /// 四隅 (左上, 右上, 左下, 右下)
    pub fn corners(&self) -> [Position; 4] {
        let last = self.size - 1;
        [
            Position::new(0, 0),
            Position::new(0, last),
            Position::new(last, 0),
            Position::new(last, last),
        ]
    }

    /// 行ごとの表記 ("B W - ...")。シリアライズ用
    pub fn row_strings(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|line| {
                line.iter()
                    .map(|c| c.display_char().to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (pos, cell) in self.iter() {
            if pos.col == self.size - 1 {
                writeln!(f, "{}", cell.display_char())?;
            } else {
                write!(f, "{} | ", cell.display_char())?;
            }
        }
        writeln!(f)
    }
}
