//! Simple interactive CLI mode
//!
//! Text-based game without the TUI: type a whole word per turn.

use super::remote::with_spinner;
use crate::error::GameError;
use crate::game::{GameController, Outcome};
use crate::output::print_grid;
use crate::provider::WordProvider;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub async fn run_simple<P>(provider: &P) -> io::Result<()>
where
    P: WordProvider + ?Sized,
{
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordie - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the 5-letter word in 6 tries. After each guess:");
    println!("  - {} letter is in the right spot", " G ".black().on_green());
    println!("  - {} letter is in the word elsewhere", " Y ".black().on_yellow());
    println!("  - {} letter is not in the word\n", " R ".white().on_red());
    println!("Commands: 'quit' to exit, 'new' for a new word\n");

    let mut controller = GameController::new();
    load(&mut controller, provider).await;

    loop {
        let input = get_user_input("Guess")?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                load(&mut controller, provider).await;
                continue;
            }
            "" => continue,
            _ => {}
        }

        match controller.enter_guess(&input) {
            Ok(outcome) => {
                print_grid(controller.session());
                if matches!(outcome, Outcome::Advanced { .. }) {
                    continue;
                }

                match get_user_input("Play again? (yes/no)")?
                    .to_lowercase()
                    .as_str()
                {
                    "yes" | "y" => load(&mut controller, provider).await,
                    _ => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                }
            }
            Err(GameError::GridLocked) => {
                println!("{}", "❌ The game is over. Type 'new' to play again.\n".red());
            }
            Err(err) => println!("{}\n", format!("❌ {err}").red()),
        }
    }
}

/// Fetch a word into `controller`, reporting the result
async fn load<P>(controller: &mut GameController, provider: &P)
where
    P: WordProvider + ?Sized,
{
    match with_spinner("Fetching word...", controller.reset(provider)).await {
        Ok(()) => println!("{}\n", "🔄 New game started!".green()),
        Err(err) => println!("{}\n", format!("❌ {err}").red()),
    }
}

/// Get user input with a prompt; end of input reads as "quit"
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        // EOF
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
