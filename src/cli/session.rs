//! Session command implementation.

use super::output::{JsonSession, format_session_text};
use super::{CliError, OutputFormat};
use market_shifter::GameConfig;

/// Execute the session command.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded.
pub(crate) fn execute(config: &GameConfig, format: OutputFormat) -> Result<(), CliError> {
    let (quiz, seed) = config.start_quiz()?;

    match format {
        OutputFormat::Text => print!("{}", format_session_text(&quiz, seed)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&JsonSession::from_quiz(&quiz, seed))?;
            println!("{json}");
        }
    }

    Ok(())
}
