//! Wordie - CLI
//!
//! Terminal Wordle with a TUI and a simple line mode. Target words come from
//! the remote word service.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use wordie::{
    commands::{evaluate_guess, fetch_word, restart, run_simple},
    config::{
        DEFAULT_API_URL, DEFAULT_LOG_FILE, DEFAULT_TIMEOUT_SECS, LogConfig, ProviderConfig,
    },
    logging,
    output::{print_evaluation, print_restart_response},
    provider::HttpWordProvider,
};

#[derive(Parser)]
#[command(
    name = "wordie",
    about = "Guess the 5-letter word in 6 tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    service: ServiceArgs,
}

#[derive(Args)]
struct ServiceArgs {
    /// Base URL of the word service
    #[arg(long, global = true, env = "WORDIE_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "WORDIE_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Log file used while the TUI is running
    #[arg(long, global = true, env = "WORDIE_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (type whole words, no TUI)
    Simple,

    /// Score a guess against a target without contacting the service
    Evaluate {
        /// The guessed word
        guess: String,

        /// The word to score against
        target: String,
    },

    /// Fetch one word from the service and print it
    Word,

    /// Call the service's restart endpoint and print its response
    Restart,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let log_config = match command {
        Commands::Play => LogConfig::file(&cli.service.log_file),
        _ => LogConfig::stderr(),
    };
    logging::init(&log_config)?;

    run(command, &cli.service).await
}

async fn run(command: Commands, service: &ServiceArgs) -> Result<()> {
    if let Commands::Evaluate { guess, target } = &command {
        return run_evaluate_command(guess, target);
    }

    let config = ProviderConfig::new(&service.api_url, Duration::from_secs(service.timeout))?;
    let provider = HttpWordProvider::new(&config)?;
    info!(base_url = %config.base_url(), "Using word service");

    match command {
        Commands::Play => run_play_command(provider).await,
        Commands::Simple => run_simple(&provider).await.map_err(anyhow::Error::from),
        Commands::Word => run_word_command(&provider).await,
        Commands::Restart => run_restart_command(&provider).await,
        Commands::Evaluate { .. } => Ok(()),
    }
}

fn run_evaluate_command(guess: &str, target: &str) -> Result<()> {
    let result = evaluate_guess(guess, target)?;
    print_evaluation(&result.guess, &result.target, &result.feedback);
    Ok(())
}

async fn run_word_command(provider: &HttpWordProvider) -> Result<()> {
    let word = fetch_word(provider).await?;
    println!("{word}");
    Ok(())
}

async fn run_restart_command(provider: &HttpWordProvider) -> Result<()> {
    let response = restart(provider).await?;
    print_restart_response(&response);
    Ok(())
}

async fn run_play_command(provider: HttpWordProvider) -> Result<()> {
    use wordie::interactive::{App, run_tui};

    let app = App::new(Arc::new(provider));
    run_tui(app).await
}
