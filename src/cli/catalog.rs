//! Catalog command implementation.

use super::output::format_catalog_text;
use super::{CliError, OutputFormat};
use market_shifter::GameConfig;
use std::path::PathBuf;

/// Execute the catalog command.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded.
pub(crate) fn execute(catalog: Option<PathBuf>, format: OutputFormat) -> Result<(), CliError> {
    let config = GameConfig {
        catalog_path: catalog,
        ..GameConfig::default()
    };
    let catalog = config.load_catalog()?;

    match format {
        OutputFormat::Text => print!("{}", format_catalog_text(&catalog)),
        OutputFormat::Json => println!("{}", catalog.to_json_string()?),
    }

    Ok(())
}
