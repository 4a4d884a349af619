//! tictactoe-rs: Tic-tac-toe rules engine
//!
//! Goals:
//! - Small, well-documented rules core usable from any front end
//! - No panics for invalid input; use `Result` for recoverable errors
//! - A line-oriented console front end over injectable text streams
//!
//! ## Quick start: drive a game from code
//! ```
//! use tictactoe_rs::cells::Player;
//! use tictactoe_rs::game::{Game, GameState};
//! use tictactoe_rs::position::Position;
//!
//! let mut game = Game::new();
//! for symbol in ['a', 'd', 'b', 'e', 'c'] {
//!     let pos = Position::try_from(symbol).unwrap();
//!     game.play(pos).unwrap();
//! }
//!
//! // X took the whole top row.
//! assert_eq!(game.state(), GameState::Won(Player::One));
//! ```
//!
//! ## Console game
//! Play on stdin/stdout with:
//! ```sh
//! cargo run --bin tictactoe-rs
//! ```

pub mod board;
pub mod cells;
pub mod console;
pub mod engine;
pub mod game;
pub mod position;
pub mod rules;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
