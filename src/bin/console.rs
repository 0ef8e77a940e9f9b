//! Line-based console front-end for manual testing
//!
//! Reads `row col` pairs from stdin, `u` to undo, `q` to quit.

use gomoku::{GameState, MoveError};
use std::io::{self, BufRead, Write};

fn print_instructions(size: usize) {
    println!("\nWelcome to Gomoku!");
    println!("How to play:");
    println!("1. Enter a row and column (0-{}) to place a stone", size - 1);
    println!("2. \u{25cf} is Black, \u{25cb} is White");
    println!("3. Enter 'u' to undo the last move");
    println!("4. Enter 'q' to quit");
    println!("5. First player to connect five stones in a line wins\n");
}

fn main() -> io::Result<()> {
    let mut game = GameState::new();
    print_instructions(game.board().size());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !game.is_game_over() {
        println!("{}", game.board());
        println!("Current player: {}", game.current_player().name());
        print!("Enter move (row col), 'u' to undo, 'q' to quit: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let input = line?.trim().to_lowercase();

        match input.as_str() {
            "q" => {
                println!("\nGoodbye!");
                return Ok(());
            }
            "u" => {
                if game.undo_move() {
                    println!("\nUndid the last move");
                } else {
                    println!("\nNothing to undo");
                }
                continue;
            }
            _ => {}
        }

        let coords: Vec<i32> = input.split_whitespace().filter_map(|s| s.parse().ok()).collect();
        let &[row, col] = coords.as_slice() else {
            println!("\nPlease enter valid coordinates, e.g. '7 7'");
            continue;
        };

        if let Err(err) = game.try_place(row, col) {
            match err {
                MoveError::OutOfBounds { .. } | MoveError::Occupied { .. } => {
                    println!("\nInvalid move: {err}")
                }
                MoveError::GameOver => break,
            }
        }
    }

    println!("{}", game.board());
    if let Some(winner) = game.winner() {
        println!("\nGame over! {} wins!", winner.name());
    }
    Ok(())
}
