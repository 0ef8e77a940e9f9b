//! Generate the game's wav assets
//!
//! Writes the four sound effects and one background track per music style
//! into `assets/sounds/` (or the directory given as the first argument).

use gomoku::audio::synth;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(gomoku::audio::DEFAULT_ASSET_DIR));

    match synth::generate_all(&dir) {
        Ok(()) => {
            println!("Generated sound assets in {}", dir.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Failed to generate sound assets: {err}");
            ExitCode::FAILURE
        }
    }
}
