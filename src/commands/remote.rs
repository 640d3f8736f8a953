//! One-shot calls against the word service

use crate::core::Word;
use crate::provider::{HttpWordProvider, ProviderError, RestartResponse, WordProvider};
use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::time::Duration;

/// Run `future` behind a terminal spinner
pub async fn with_spinner<F, T>(message: &'static str, future: F) -> T
where
    F: Future<Output = T>,
{
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));

    let output = future.await;
    spinner.finish_and_clear();
    output
}

/// Fetch a single word
///
/// # Errors
///
/// Returns the provider's error unchanged.
pub async fn fetch_word<P>(provider: &P) -> Result<Word, ProviderError>
where
    P: WordProvider + ?Sized,
{
    with_spinner("Fetching word...", provider.fetch_word()).await
}

/// Call the restart endpoint
///
/// # Errors
///
/// Returns the provider's error unchanged.
pub async fn restart(provider: &HttpWordProvider) -> Result<RestartResponse, ProviderError> {
    with_spinner("Restarting...", provider.restart()).await
}
