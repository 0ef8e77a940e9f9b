//! Win condition checking
//!
//! Standard Gomoku: five or more consecutive stones of one color along a
//! line. Overlines (six or more) also win.

use crate::board::{Board, Pos, Stone};

/// Direction vectors for line checking (4 directions)
const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Vertical
    (0, 1),  // Horizontal
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Five-in-a-row check anchored at a just-placed stone.
///
/// Only probes the 4 lines through `pos`, at most 4 cells each way, so the
/// check is O(1) and allocation-free on the miss path.
///
/// Returns the first five stones of the winning line (in board order along
/// the direction) if the placement completed one, `None` otherwise.
pub fn find_five_from(board: &Board, pos: Pos, color: Stone) -> Option<[Pos; 5]> {
    if color == Stone::Empty {
        return None;
    }

    for &(dr, dc) in &DIRECTIONS {
        let mut line = vec![pos];

        // Extend in negative direction first
        for i in 1..5 {
            let r = pos.row as i32 - dr * i;
            let c = pos.col as i32 - dc * i;
            if !board.in_bounds(r, c) {
                break;
            }
            let prev = Pos::new(r as u8, c as u8);
            if board.get(prev) == color {
                line.insert(0, prev);
            } else {
                break;
            }
        }

        // Extend in positive direction
        for i in 1..5 {
            let r = pos.row as i32 + dr * i;
            let c = pos.col as i32 + dc * i;
            if !board.in_bounds(r, c) {
                break;
            }
            let next = Pos::new(r as u8, c as u8);
            if board.get(next) == color {
                line.push(next);
            } else {
                break;
            }
        }

        if line.len() >= 5 {
            return Some([line[0], line[1], line[2], line[3], line[4]]);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_row(board: &mut Board, row: u8, cols: std::ops::Range<u8>, color: Stone) {
        for col in cols {
            board.place_stone(Pos::new(row, col), color);
        }
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let mut board = Board::new();
        place_row(&mut board, 7, 0..5, Stone::Black);
        assert!(find_five_from(&board, Pos::new(7, 2), Stone::Black).is_some());
        assert!(find_five_from(&board, Pos::new(7, 2), Stone::White).is_none());
    }

    #[test]
    fn test_five_in_row_vertical() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(i, 7), Stone::Black);
        }
        assert!(find_five_from(&board, Pos::new(4, 7), Stone::Black).is_some());
    }

    #[test]
    fn test_five_in_row_diagonal() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(i, i), Stone::White);
        }
        assert!(find_five_from(&board, Pos::new(0, 0), Stone::White).is_some());
    }

    #[test]
    fn test_diagonal_sw_five() {
        let mut board = Board::new();
        // Diagonal from (4, 8) to (8, 4)
        for i in 0..5 {
            board.place_stone(Pos::new(4 + i, 8 - i), Stone::White);
        }
        assert!(find_five_from(&board, Pos::new(6, 6), Stone::White).is_some());
    }

    #[test]
    fn test_four_in_row_not_win() {
        let mut board = Board::new();
        place_row(&mut board, 7, 0..4, Stone::Black);
        for col in 0..4 {
            assert!(find_five_from(&board, Pos::new(7, col), Stone::Black).is_none());
        }
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let mut board = Board::new();
        place_row(&mut board, 7, 0..6, Stone::Black);
        assert!(find_five_from(&board, Pos::new(7, 5), Stone::Black).is_some());
    }

    #[test]
    fn test_gap_does_not_win() {
        let mut board = Board::new();
        // B B B B _ B
        place_row(&mut board, 7, 0..4, Stone::Black);
        board.place_stone(Pos::new(7, 5), Stone::Black);
        assert!(find_five_from(&board, Pos::new(7, 5), Stone::Black).is_none());
        assert!(find_five_from(&board, Pos::new(7, 3), Stone::Black).is_none());
    }

    #[test]
    fn test_opponent_stone_breaks_line() {
        let mut board = Board::new();
        // B B W B B B  -- no five for Black through the W
        place_row(&mut board, 7, 0..2, Stone::Black);
        board.place_stone(Pos::new(7, 2), Stone::White);
        place_row(&mut board, 7, 3..6, Stone::Black);
        assert!(find_five_from(&board, Pos::new(7, 4), Stone::Black).is_none());
    }

    #[test]
    fn test_five_at_board_edge() {
        let mut board = Board::new();
        place_row(&mut board, 14, 0..5, Stone::Black);
        assert!(find_five_from(&board, Pos::new(14, 0), Stone::Black).is_some());
    }

    #[test]
    fn test_five_at_corner() {
        let mut board = Board::new();
        // Diagonal from (10, 10) to (14, 14)
        for i in 0..5 {
            board.place_stone(Pos::new(10 + i, 10 + i), Stone::White);
        }
        assert!(find_five_from(&board, Pos::new(14, 14), Stone::White).is_some());
    }

    #[test]
    fn test_line_positions_in_order() {
        let mut board = Board::new();
        place_row(&mut board, 7, 3..8, Stone::Black);
        let line = find_five_from(&board, Pos::new(7, 5), Stone::Black).unwrap();
        for (i, pos) in line.iter().enumerate() {
            assert_eq!(*pos, Pos::new(7, 3 + i as u8));
        }
    }

    #[test]
    fn test_empty_color_never_wins() {
        let board = Board::new();
        assert!(find_five_from(&board, Pos::new(7, 7), Stone::Empty).is_none());
    }
}
