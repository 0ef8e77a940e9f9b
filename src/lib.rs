//! Gomoku (five-in-a-row) game
//!
//! A 15x15 Gomoku game: rules engine with history-based undo, an
//! egui-based GUI, a small console front-end, and procedural generation of
//! the game's sound assets.
//!
//! # Architecture
//!
//! - [`board`]: grid representation (`Board`, `Stone`, `Pos`)
//! - [`rules`]: win-condition scanning
//! - [`game`]: `GameState`, the engine front-ends drive
//! - [`ui`]: egui/eframe GUI
//! - [`audio`]: sound playback and offline wav synthesis
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameState, MoveOutcome, Stone};
//!
//! let mut game = GameState::new();
//! assert_eq!(game.try_place(7, 7), Ok(MoveOutcome::Placed));
//! assert_eq!(game.current_player(), Stone::White);
//!
//! game.undo_move();
//! assert_eq!(game.current_player(), Stone::Black);
//! ```

pub mod audio;
pub mod board;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, DEFAULT_BOARD_SIZE};
pub use game::{GameResult, GameState, Move, MoveError, MoveOutcome};
