use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board.size(), DEFAULT_BOARD_SIZE);
    assert!(board.is_board_empty());
    assert_eq!(board.stone_count(), 0);
}

#[test]
fn test_with_size() {
    let board = Board::with_size(9);
    assert_eq!(board.size(), 9);
    assert!(board.in_bounds(8, 8));
    assert!(!board.in_bounds(9, 0));
}

#[test]
fn test_in_bounds() {
    let board = Board::new();
    assert!(board.in_bounds(0, 0));
    assert!(board.in_bounds(14, 14));
    assert!(board.in_bounds(7, 7));
    assert!(!board.in_bounds(-1, 0));
    assert!(!board.in_bounds(0, -1));
    assert!(!board.in_bounds(15, 0));
    assert!(!board.in_bounds(0, 15));
    assert!(!board.in_bounds(i32::MIN, i32::MAX));
}

#[test]
fn test_place_and_remove() {
    let mut board = Board::new();
    let pos = Pos::new(7, 7);

    board.place_stone(pos, Stone::Black);
    assert_eq!(board.get(pos), Stone::Black);
    assert!(!board.is_empty(pos));
    assert_eq!(board.stone_count(), 1);

    board.remove_stone(pos);
    assert_eq!(board.get(pos), Stone::Empty);
    assert!(board.is_board_empty());
}

#[test]
fn test_clone_is_independent() {
    let mut board = Board::new();
    board.place_stone(Pos::new(3, 4), Stone::White);

    let mut copy = board.clone();
    copy.place_stone(Pos::new(5, 5), Stone::Black);
    copy.remove_stone(Pos::new(3, 4));

    assert_eq!(board.get(Pos::new(3, 4)), Stone::White);
    assert_eq!(board.get(Pos::new(5, 5)), Stone::Empty);
    assert_eq!(board.stone_count(), 1);
}

#[test]
fn test_display_renders_every_row() {
    let mut board = Board::new();
    board.place_stone(Pos::new(0, 0), Stone::Black);
    board.place_stone(Pos::new(14, 14), Stone::White);

    let text = board.to_string();
    assert_eq!(text.lines().count(), DEFAULT_BOARD_SIZE + 1);
    assert!(text.contains('\u{25cf}'));
    assert!(text.contains('\u{25cb}'));
}
