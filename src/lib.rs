//! # Mancala
//!
//! A two-player Mancala (Kalah variant) played in the terminal with a
//! Ratatui interface. The rules engine is a pure state machine; the UI is
//! thin glue that reads pocket identifiers like `3L` and displays the board.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board arena, sowing ring, captures, turn
//!   state machine
//! - [`ui`] — Terminal UI: board view and input loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
