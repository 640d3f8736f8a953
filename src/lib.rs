//! Wordie
//!
//! A terminal Wordle game. Target words come from a remote word service; the
//! grid, scoring, and game flow run locally.
//!
//! # Quick Start
//!
//! ```rust
//! use wordie::core::{Feedback, Word};
//!
//! let guess = Word::new("crate").unwrap();
//! let target = Word::new("crane").unwrap();
//!
//! let feedback = Feedback::evaluate(&guess, &target);
//! println!("{feedback}");
//! ```

// Core domain types
pub mod core;

// Game session and state machine
pub mod game;

// Word service client
pub mod provider;

// Errors surfaced to the player
pub mod error;

// Runtime configuration and logging
pub mod config;
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
