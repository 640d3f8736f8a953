//! Command implementations

pub mod evaluate;
pub mod remote;
pub mod simple;

pub use evaluate::evaluate_guess;
pub use remote::{fetch_word, restart};
pub use simple::run_simple;
