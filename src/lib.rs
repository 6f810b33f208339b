//! # Connect Four Engine
//!
//! Rules engine for a two-player Connect Four game. It owns the board, move
//! legality, turn alternation, and win/draw detection; everything else
//! (transport, persistence, rendering for clients) belongs to the caller.
//!
//! ## Modules
//!
//! - [`game`] — Board, players, turn state, win detection, `Game` and `SharedGame`
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;

pub use config::GameConfig;
pub use error::{ConfigError, MoveError, RegistrationError};
pub use game::{Board, Cell, Game, Mark, Outcome, PlayerId, SharedGame, StatusView};
