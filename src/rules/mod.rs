//! Game rules for Gomoku
//!
//! The only win-detection implementation in the crate lives here; front-ends
//! observe `GameState` and never rescan the board themselves.

pub mod win;

pub use win::find_five_from;
