//! Game flow on top of the core types
//!
//! `GameSession` is the value front ends render; `GameController` is the only
//! thing that changes it.

mod controller;
mod session;

pub use controller::{GameController, Outcome};
pub use session::{GameSession, GameStatus};
