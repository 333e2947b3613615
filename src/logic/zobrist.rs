use crate::core::{Board, Color, MAX_BOARD_SIZE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::OnceLock;

// 定数
const CELLS: usize = MAX_BOARD_SIZE * MAX_BOARD_SIZE;
const COLORS: usize = 2;
const SEED: u64 = 0x0DE1_10C0_FFEE;

// Zobrist Hash用の乱数テーブル
struct ZobristTable {
    discs: [[u64; COLORS]; CELLS],
    side_to_move: u64,
    // 盤サイズ違いの同形を区別する
    size: [u64; MAX_BOARD_SIZE + 1],
}

static ZOBRIST_TABLE: OnceLock<ZobristTable> = OnceLock::new();

fn get_zobrist_table() -> &'static ZobristTable {
    ZOBRIST_TABLE.get_or_init(|| {
        // 実行ごとに同じ値になるよう固定シード
        let mut rng = StdRng::seed_from_u64(SEED);
        let mut table = ZobristTable {
            discs: [[0; COLORS]; CELLS],
            side_to_move: rng.gen(),
            size: [0; MAX_BOARD_SIZE + 1],
        };

        for cell in table.discs.iter_mut() {
            for key in cell.iter_mut() {
                *key = rng.gen();
            }
        }
        for key in table.size.iter_mut() {
            *key = rng.gen();
        }

        table
    })
}

pub struct ZobristHasher;

impl ZobristHasher {
    /// 盤面と評価視点の色からハッシュを作る
    pub fn compute_hash(board: &Board, perspective: Color) -> u64 {
        let table = get_zobrist_table();
        let mut hash = table.size[board.size()];

        for (pos, cell) in board.iter() {
            if let Some(color) = cell.color() {
                hash ^= table.discs[pos.row * MAX_BOARD_SIZE + pos.col][color.index()];
            }
        }

        if perspective == Color::White {
            hash ^= table.side_to_move;
        }

        hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::GameState;

    #[test]
    fn test_hash_is_stable() {
        let board = Board::standard();
        assert_eq!(
            ZobristHasher::compute_hash(&board, Color::Black),
            ZobristHasher::compute_hash(&board.clone(), Color::Black)
        );
    }

    #[test]
    fn test_hash_distinguishes_color_and_position() {
        let board = Board::standard();
        let black = ZobristHasher::compute_hash(&board, Color::Black);
        let white = ZobristHasher::compute_hash(&board, Color::White);
        assert_ne!(black, white);

        let mut state = GameState::new();
        state.apply_move(2, 3).unwrap();
        assert_ne!(ZobristHasher::compute_hash(state.board(), Color::Black), black);
    }

    #[test]
    fn test_hash_distinguishes_board_size() {
        let small = Board::empty(6).unwrap();
        let large = Board::empty(8).unwrap();
        assert_ne!(
            ZobristHasher::compute_hash(&small, Color::Black),
            ZobristHasher::compute_hash(&large, Color::Black)
        );
    }
}
