pub mod state;
pub mod zobrist;

pub use state::GameState;

use crate::core::{Board, Cell, Color, Direction, Position};

/// 一方向の挟み判定
///
/// `from` の隣から `dir` 方向へ相手の石を集め、自分の石で閉じていればその列を返す。
/// 相手の石が無い / 空マスに当たる / 盤外に出る場合はすべて空。
pub fn flank_run(board: &Board, from: Position, dir: Direction, color: Color) -> Vec<Position> {
    let own: Cell = color.into();
    let opponent: Cell = color.opponent().into();
    let mut run = Vec::new();
    let mut curr = from;

    while let Some(next) = board.offset(curr, dir) {
        let cell = board.state_at(next);
        if cell == opponent {
            run.push(next);
            curr = next;
        } else if cell == own && !run.is_empty() {
            return run;
        } else {
            break;
        }
    }
    Vec::new()
}

/// 8方向で裏返せる石をすべて集める
pub fn flankable_tiles(board: &Board, pos: Position, color: Color) -> Vec<Position> {
    Direction::ALL
        .iter()
        .flat_map(|&dir| flank_run(board, pos, dir, color))
        .collect()
}

/// 空マスかつ少なくとも1方向で挟めるか
pub fn is_legal_at(board: &Board, pos: Position, color: Color) -> bool {
    board.state_at(pos).is_empty()
        && Direction::ALL
            .iter()
            .any(|&dir| !flank_run(board, pos, dir, color).is_empty())
}

/// 合法手生成 (row-major 順)
pub fn legal_moves(board: &Board, color: Color) -> Vec<Position> {
    board
        .iter()
        .filter(|&(pos, _)| is_legal_at(board, pos, color))
        .map(|(pos, _)| pos)
        .collect()
}

/// 着手可能なマスの数
pub fn mobility(board: &Board, color: Color) -> usize {
    board
        .iter()
        .filter(|&(pos, _)| is_legal_at(board, pos, color))
        .count()
}

/// `color` の石に隣接する空マスの数
pub fn frontier_count(board: &Board, color: Color) -> usize {
    let target: Cell = color.into();
    board
        .iter()
        .filter(|&(pos, cell)| {
            cell.is_empty()
                && Direction::ALL.iter().any(|&dir| {
                    board
                        .offset(pos, dir)
                        .map_or(false, |n| board.state_at(n) == target)
                })
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::setup_from_strings;

    #[test]
    fn test_standard_opening_moves() {
        let board = Board::standard();
        assert_eq!(
            legal_moves(&board, Color::Black),
            vec![
                Position::new(2, 3),
                Position::new(3, 2),
                Position::new(4, 5),
                Position::new(5, 4)
            ]
        );
        assert_eq!(
            legal_moves(&board, Color::White),
            vec![
                Position::new(2, 4),
                Position::new(3, 5),
                Position::new(4, 2),
                Position::new(5, 3)
            ]
        );
    }

    #[test]
    fn test_adjacent_but_unclosed_is_illegal() {
        // (0,0) の隣に白が並ぶが、黒で閉じていない
        let board = setup_from_strings(&[
            "-WW---", "------", "------", "------", "------", "------",
        ])
        .unwrap();
        assert!(flank_run(&board, Position::new(0, 0), Direction::EAST, Color::Black).is_empty());
        assert!(!is_legal_at(&board, Position::new(0, 0), Color::Black));
    }

    #[test]
    fn test_run_hits_empty_or_own_first() {
        let board = setup_from_strings(&[
            "-W-B--", "B-----", "------", "------", "------", "------",
        ])
        .unwrap();
        // 白の後に空マス
        assert!(flank_run(&board, Position::new(0, 0), Direction::EAST, Color::Black).is_empty());
        // 最初が自分の石
        assert!(flank_run(&board, Position::new(0, 0), Direction::SOUTH, Color::Black).is_empty());
    }

    #[test]
    fn test_multi_direction_flank() {
        let board = setup_from_strings(&[
            "B-B---", "-WW---", "B-WB--", "------", "------", "------",
        ])
        .unwrap();
        let mut tiles = flankable_tiles(&board, Position::new(2, 1), Color::Black);
        tiles.sort();
        // 東だけが閉じている。北と北東は空マスで途切れる
        assert_eq!(tiles, vec![Position::new(2, 2)]);

        let mut tiles = flankable_tiles(&board, Position::new(0, 1), Color::Black);
        tiles.sort();
        // 南東の (1,2) だけ
        assert_eq!(tiles, vec![Position::new(1, 2)]);
    }

    #[test]
    fn test_long_run_flips_all() {
        let board = setup_from_strings(&[
            "-WWWWB", "------", "------", "------", "------", "------",
        ])
        .unwrap();
        let run = flank_run(&board, Position::new(0, 0), Direction::EAST, Color::Black);
        assert_eq!(run.len(), 4);
        assert_eq!(mobility(&board, Color::Black), 1);
        assert_eq!(mobility(&board, Color::White), 0);
    }

    #[test]
    fn test_frontier_count() {
        let board = Board::standard();
        // 中央4石の周囲の空マスは12。黒石に接する空マスは10
        assert_eq!(frontier_count(&board, Color::Black), 10);
        assert_eq!(frontier_count(&board, Color::White), 10);
    }
}
