//! Two-player tic-tac-toe with a running session score.
//!
//! # Architecture
//!
//! - **Games**: the session state machine ([`GameState`]), pure board rules
//!   and first-class invariants
//! - **TUI**: a terminal presentation layer that owns a [`GameState`] and
//!   forwards key presses as [`GameEvent`]s
//! - **Config**: TOML settings for the front end
//!
//! # Example
//!
//! ```
//! use tictactoe_session::{GameState, GameStatus, Player};
//!
//! let mut game = GameState::new();
//! game.start();
//! for index in [0, 1, 3, 2, 6] {
//!     game.place(index);
//! }
//! assert_eq!(game.terminal_status(), GameStatus::Won(Player::X));
//! assert_eq!(game.score_of(Player::X), 1);
//!
//! game.reset_board();
//! assert_eq!(game.score_of(Player::X), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod games;
pub mod tui;

// Crate-level exports - Command line
pub use cli::Cli;

// Crate-level exports - Settings
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, Settings};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Cell, GameEvent, GameState, GameStatus, PlaceError, Player, Position, Score,
    invariants, rules,
};
