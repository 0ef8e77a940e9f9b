//! Core game-state engine
//!
//! `GameState` owns the board, the turn pointer, and a linear move history.
//! It is the single source of truth for rules: front-ends translate input
//! into `(row, col)` calls and render from read-only accessors, and the
//! audio layer reacts to the returned [`MoveOutcome`] / [`MoveError`]. The
//! engine itself never calls into rendering or sound.
//!
//! The engine is synchronous and single-threaded; a concurrent host must
//! serialize access to one `GameState` instance.

use crate::board::{Board, Pos, Stone};
use crate::rules;

/// A recorded move: where and by whom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub pos: Pos,
    pub stone: Stone,
}

/// Outcome of a successfully applied placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Stone placed, game continues
    Placed,
    /// Stone placed and it completed a winning line
    Won,
}

/// Why a placement was rejected. Rejections never mutate state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("position ({row}, {col}) is outside the board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("position ({row}, {col}) is already occupied")]
    Occupied { row: i32, col: i32 },

    #[error("the game is already over")]
    GameOver,
}

/// Result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Stone,
    pub winning_line: [Pos; 5],
}

/// Main game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current_player: Stone,
    game_over: Option<GameResult>,
    history: Vec<Move>,
}

impl GameState {
    /// New game on the default 15x15 board; Black moves first
    pub fn new() -> Self {
        Self::with_board_size(crate::board::DEFAULT_BOARD_SIZE)
    }

    /// New game on a board with the given side length
    pub fn with_board_size(size: usize) -> Self {
        Self {
            board: Board::with_size(size),
            current_player: Stone::Black,
            game_over: None,
            history: Vec::new(),
        }
    }

    /// Attempt to place a stone for the current player.
    ///
    /// `true` iff the move was applied (including a winning move). This is
    /// the boolean-success surface; use [`try_place`](Self::try_place) to
    /// distinguish rejection reasons or detect a win.
    pub fn place_stone(&mut self, row: i32, col: i32) -> bool {
        self.try_place(row, col).is_ok()
    }

    /// Attempt to place a stone, reporting the structured outcome.
    ///
    /// Placements are rejected once the game is over; `undo_move` is the
    /// only way back into play. A rejected placement leaves every field
    /// untouched.
    pub fn try_place(&mut self, row: i32, col: i32) -> Result<MoveOutcome, MoveError> {
        if self.game_over.is_some() {
            return Err(MoveError::GameOver);
        }
        if !self.board.in_bounds(row, col) {
            return Err(MoveError::OutOfBounds { row, col });
        }
        let pos = Pos::new(row as u8, col as u8);
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied { row, col });
        }

        let color = self.current_player;
        self.board.place_stone(pos, color);
        self.history.push(Move { pos, stone: color });

        // Win check anchored at the placed stone. On a win the turn is not
        // switched, so `current_player` stays equal to the winner.
        if let Some(line) = rules::find_five_from(&self.board, pos, color) {
            self.game_over = Some(GameResult {
                winner: color,
                winning_line: line,
            });
            return Ok(MoveOutcome::Won);
        }

        self.current_player = color.opponent();
        Ok(MoveOutcome::Placed)
    }

    /// Undo the most recent move.
    ///
    /// Restores the cell to empty, hands the turn back to the player who
    /// made the undone move, and clears any win state. `false` if there is
    /// nothing to undo.
    pub fn undo_move(&mut self) -> bool {
        let Some(last) = self.history.pop() else {
            return false;
        };
        self.board.remove_stone(last.pos);
        self.current_player = last.stone;
        self.game_over = None;
        true
    }

    /// Pure legality predicate: in bounds and empty. Used internally by
    /// `try_place` validation order and by hover previews in the GUI.
    pub fn is_valid_move(&self, row: i32, col: i32) -> bool {
        self.board.in_bounds(row, col) && self.board.is_empty(Pos::new(row as u8, col as u8))
    }

    /// Independent copy of the board; mutating it never affects the game
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Read-only view of the board for rendering
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose move is next (frozen at the winner once over)
    pub fn current_player(&self) -> Stone {
        self.current_player
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over.is_some()
    }

    /// The winner, if the game is over
    pub fn winner(&self) -> Option<Stone> {
        self.game_over.map(|r| r.winner)
    }

    /// The winning line, if the game is over (for GUI highlighting)
    pub fn winning_line(&self) -> Option<[Pos; 5]> {
        self.game_over.map(|r| r.winning_line)
    }

    /// Number of moves played so far
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Chronological move history
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The most recently placed stone, if any
    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().map(|m| m.pos)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Interleave Black along `row` with White along `row + 1`; Black's
    /// fifth stone completes the line.
    fn play_black_row_win(game: &mut GameState, row: i32) {
        for col in 0..5 {
            assert!(game.place_stone(row, col));
            if col < 4 {
                assert!(game.place_stone(row + 1, col));
            }
        }
    }

    #[test]
    fn test_initial_state() {
        let game = GameState::new();
        assert_eq!(game.board().size(), 15);
        assert_eq!(game.current_player(), Stone::Black);
        assert!(!game.is_game_over());
        assert_eq!(game.winner(), None);
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_first_move() {
        let mut game = GameState::new();
        assert!(game.place_stone(7, 7));
        assert_eq!(game.board().get(Pos::new(7, 7)), Stone::Black);
        assert_eq!(game.current_player(), Stone::White);
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut game = GameState::new();
        assert!(game.place_stone(7, 7));
        let before = game.snapshot();

        assert_eq!(game.try_place(7, 7), Err(MoveError::Occupied { row: 7, col: 7 }));
        assert_eq!(game.snapshot(), before);
        assert_eq!(game.current_player(), Stone::White);
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut game = GameState::new();
        for (row, col) in [(-1, 7), (15, 7), (7, -1), (7, 15), (i32::MIN, i32::MAX)] {
            assert_eq!(
                game.try_place(row, col),
                Err(MoveError::OutOfBounds { row, col })
            );
        }
        assert!(game.board().is_board_empty());
        assert_eq!(game.current_player(), Stone::Black);
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_turn_alternation() {
        let mut game = GameState::new();
        game.place_stone(0, 0);
        assert_eq!(game.current_player(), Stone::White);
        game.place_stone(0, 1);
        assert_eq!(game.current_player(), Stone::Black);
        game.place_stone(0, 2);
        assert_eq!(game.current_player(), Stone::White);
    }

    #[test]
    fn test_horizontal_win() {
        let mut game = GameState::new();
        play_black_row_win(&mut game, 7);

        assert!(game.is_game_over());
        assert_eq!(game.winner(), Some(Stone::Black));
        // Turn is frozen at the winner
        assert_eq!(game.current_player(), Stone::Black);
        let line = game.winning_line().unwrap();
        assert_eq!(line[0], Pos::new(7, 0));
        assert_eq!(line[4], Pos::new(7, 4));
    }

    #[test]
    fn test_winning_move_reports_won() {
        let mut game = GameState::new();
        for col in 0..4 {
            assert_eq!(game.try_place(7, col), Ok(MoveOutcome::Placed));
            assert_eq!(game.try_place(8, col), Ok(MoveOutcome::Placed));
        }
        assert_eq!(game.try_place(7, 4), Ok(MoveOutcome::Won));
    }

    #[test]
    fn test_vertical_win() {
        let mut game = GameState::new();
        for row in 0..5 {
            game.place_stone(row, 7);
            if row < 4 {
                game.place_stone(row, 8);
            }
        }
        assert_eq!(game.winner(), Some(Stone::Black));
    }

    #[test]
    fn test_diagonal_win() {
        let mut game = GameState::new();
        for i in 0..5 {
            game.place_stone(i, i);
            if i < 4 {
                game.place_stone(i, i + 1);
            }
        }
        assert_eq!(game.winner(), Some(Stone::Black));
    }

    #[test]
    fn test_white_can_win() {
        let mut game = GameState::new();
        // Black scattered, White builds a row
        for col in 0..5 {
            game.place_stone(0, col * 2);
            game.place_stone(7, col);
        }
        assert_eq!(game.winner(), Some(Stone::White));
    }

    #[test]
    fn test_overline_win() {
        let mut game = GameState::new();
        // Black builds B B B B _ B B then fills the gap
        for (i, col) in [0, 1, 2, 3, 5, 6].iter().enumerate() {
            game.place_stone(7, *col);
            game.place_stone(10, i as i32 * 2); // gapped, never five
        }
        assert!(!game.is_game_over());
        assert!(game.place_stone(7, 4));
        assert_eq!(game.winner(), Some(Stone::Black));
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut game = GameState::new();
        play_black_row_win(&mut game, 7);
        let before = game.snapshot();

        assert_eq!(game.try_place(10, 10), Err(MoveError::GameOver));
        assert!(!game.place_stone(10, 10));
        assert_eq!(game.snapshot(), before);
        assert_eq!(game.move_count(), 9);
    }

    #[test]
    fn test_history_matches_stone_count() {
        let mut game = GameState::new();
        game.place_stone(7, 7);
        game.place_stone(7, 8);
        game.place_stone(-1, 0); // rejected
        game.place_stone(7, 7); // rejected
        game.undo_move();

        assert_eq!(game.move_count(), game.board().stone_count());
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn test_undo_restores_previous_state() {
        let mut game = GameState::new();
        game.place_stone(3, 3);
        let before = game.snapshot();
        let player_before = game.current_player();

        game.place_stone(9, 9);
        assert!(game.undo_move());

        assert_eq!(game.snapshot(), before);
        assert_eq!(game.current_player(), player_before);
        assert_eq!(game.last_move(), Some(Pos::new(3, 3)));
    }

    #[test]
    fn test_undo_single_move() {
        let mut game = GameState::new();
        game.place_stone(7, 7);
        assert!(game.undo_move());

        assert_eq!(game.board().get(Pos::new(7, 7)), Stone::Empty);
        assert_eq!(game.current_player(), Stone::Black);
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_undo_empty_history() {
        let mut game = GameState::new();
        assert!(!game.undo_move());
        assert_eq!(game.current_player(), Stone::Black);
        assert!(game.board().is_board_empty());
    }

    #[test]
    fn test_undo_clears_win() {
        let mut game = GameState::new();
        play_black_row_win(&mut game, 7);
        assert!(game.is_game_over());

        assert!(game.undo_move());
        assert!(!game.is_game_over());
        assert_eq!(game.winner(), None);
        assert_eq!(game.winning_line(), None);
        // The winner gets their move back
        assert_eq!(game.current_player(), Stone::Black);
        assert!(game.place_stone(0, 0));
    }

    #[test]
    fn test_undo_rewinds_to_empty_board() {
        let mut game = GameState::new();
        play_black_row_win(&mut game, 7);
        while game.undo_move() {}

        assert!(game.board().is_board_empty());
        assert_eq!(game.current_player(), Stone::Black);
        assert_eq!(game.move_count(), 0);
        assert!(!game.is_game_over());
    }

    #[test]
    fn test_snapshot_isolation() {
        let mut game = GameState::new();
        game.place_stone(7, 7);

        let mut snap = game.snapshot();
        snap.place_stone(Pos::new(0, 0), Stone::White);
        snap.remove_stone(Pos::new(7, 7));

        assert!(game.is_valid_move(0, 0));
        assert!(!game.is_valid_move(7, 7));
        assert_eq!(game.board().get(Pos::new(7, 7)), Stone::Black);
    }

    #[test]
    fn test_is_valid_move() {
        let mut game = GameState::new();
        assert!(game.is_valid_move(0, 0));
        assert!(game.is_valid_move(14, 14));
        assert!(!game.is_valid_move(-1, 0));
        assert!(!game.is_valid_move(0, 15));

        game.place_stone(7, 7);
        assert!(!game.is_valid_move(7, 7));
    }

    #[test]
    fn test_custom_board_size() {
        let mut game = GameState::with_board_size(9);
        assert!(!game.place_stone(9, 0));
        assert!(game.place_stone(8, 8));
        assert_eq!(game.board().size(), 9);
    }
}
