//! Catalog validation command implementation.

use super::CliError;
use market_shifter::{Catalog, Curve, QuizError, QuizResult, Shift};
use std::path::Path;

/// Execute the validate command.
///
/// # Errors
///
/// Returns an error if the catalog file cannot be read or is invalid.
pub(crate) fn execute(path: &Path) -> Result<(), CliError> {
    println!("Validating: {}", path.display());
    println!();

    let loaded = Catalog::load(path);
    for (name, ok) in checks(&loaded) {
        print_check(name, ok);
    }
    let catalog = loaded?;

    // Informational only; a missing combination is not an error.
    println!();
    println!("Answer coverage:");
    for curve in Curve::ALL {
        for shift in Shift::ALL {
            let count = catalog
                .iter()
                .filter(|s| s.correct_curve == curve && s.correct_shift == shift)
                .count();
            let marker = if count == 0 { "  (none)" } else { "" };
            println!("  {curve:<6} {shift:<5} {count:>3}{marker}");
        }
    }

    println!();
    println!("Validation successful! ({} scenarios)", catalog.len());

    Ok(())
}

/// Named checks and whether each passed, up to the first failure.
fn checks(loaded: &QuizResult<Catalog>) -> Vec<(&'static str, bool)> {
    let failed_at = match loaded {
        Ok(_) => return vec![("Catalog loads", true), ("Non-empty", true), ("Unique ids", true)],
        Err(QuizError::EmptyCatalog) => 1,
        Err(QuizError::DuplicateScenario(_)) => 2,
        Err(_) => 0,
    };
    ["Catalog loads", "Non-empty", "Unique ids"]
        .into_iter()
        .take(failed_at + 1)
        .enumerate()
        .map(|(i, name)| (name, i < failed_at))
        .collect()
}

fn print_check(name: &str, ok: bool) {
    let status = if ok { "OK" } else { "FAILED" };
    let symbol = if ok { "✓" } else { "✗" };
    println!("  {symbol} {name}: {status}");
}
