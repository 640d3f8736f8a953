//! Display functions for command results

use super::formatters::{create_progress_bar, format_guess, format_row};
use crate::core::{Feedback, MAX_ROWS, Word};
use crate::game::{GameSession, GameStatus};
use crate::provider::RestartResponse;
use colored::Colorize;

/// Print the result of evaluating a guess offline
pub fn print_evaluation(guess: &Word, target: &Word, feedback: &Feedback) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        guess.text().bright_white().bold(),
        target.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}   {}", format_guess(guess, feedback), feedback.to_emoji());
    println!(
        "\n  Correct: {}  Present: {}",
        feedback.count_correct().to_string().green(),
        feedback.count_present().to_string().yellow()
    );

    if feedback.is_perfect() {
        println!("\n{}", "✅ Exact match!".green().bold());
    }
}

/// Print every non-empty row of the session plus an attempts bar
pub fn print_grid(session: &GameSession) {
    println!();
    for (i, row) in session.grid().rows().iter().enumerate() {
        if row.filled() == 0 && i + 1 != session.grid().current_row() {
            continue;
        }
        println!("  {}. {}", (i + 1).to_string().bright_black(), format_row(row));
    }

    let attempts = session.attempts();
    println!(
        "\n  Attempts: [{}] {attempts}/{MAX_ROWS}",
        create_progress_bar(attempts, MAX_ROWS, 12)
    );

    if let Some(message) = session.terminal_message() {
        let styled = match session.status() {
            GameStatus::Won => message.green().bold(),
            _ => message.red().bold(),
        };
        println!("\n  {styled}");
    }
    println!();
}

/// Print the restart endpoint's answer
pub fn print_restart_response(response: &RestartResponse) {
    println!("\n{}", "RESTART".bright_cyan().bold());
    match &response.message {
        Some(message) => println!("  Message: {message}"),
        None => println!("  {}", "(no message)".bright_black()),
    }
    for (key, value) in &response.extra {
        println!("  {key}: {value}");
    }
}
