//! # Connect Four
//!
//! Connect Four for two or more players, played in the terminal with the
//! keyboard or mouse. Scores carry across rounds until the program exits.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, win detection, state machine
//! - [`ui`] — Terminal UI: renders game snapshots and translates input
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
