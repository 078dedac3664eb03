//! Game configuration.

use crate::catalog::Catalog;
use crate::error::QuizResult;
use crate::session::Quiz;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Swipe threshold for terminal mouse drags, in cells.
pub const DEFAULT_TERMINAL_SWIPE_CELLS: u32 = 12;

/// Seed used when the clock is unavailable.
const FALLBACK_SEED: u64 = 42;

/// Settings for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Shuffle seed; drawn from the clock when `None`.
    pub seed: Option<u64>,
    /// Catalog file; the built-in catalog when `None`.
    pub catalog_path: Option<PathBuf>,
    /// Horizontal drag distance that counts as a swipe.
    pub swipe_threshold: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            catalog_path: None,
            swipe_threshold: DEFAULT_TERMINAL_SWIPE_CELLS,
        }
    }
}

impl GameConfig {
    /// The configured seed, or one derived from the current time.
    #[must_use]
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs() ^ u64::from(d.subsec_nanos()))
                .unwrap_or(FALLBACK_SEED)
        })
    }

    /// Load the configured catalog.
    ///
    /// # Errors
    ///
    /// Returns any error from [`Catalog::load`].
    pub fn load_catalog(&self) -> QuizResult<Catalog> {
        match &self.catalog_path {
            Some(path) => Catalog::load(path),
            None => Ok(Catalog::builtin()),
        }
    }

    /// Load the catalog and start a quiz. Returns the quiz and its seed.
    ///
    /// # Errors
    ///
    /// Returns any error from [`GameConfig::load_catalog`].
    pub fn start_quiz(&self) -> QuizResult<(Quiz, u64)> {
        let catalog = self.load_catalog()?;
        let seed = self.resolve_seed();
        tracing::info!(seed, scenarios = catalog.len(), "starting quiz");
        Ok((Quiz::new(catalog, seed), seed))
    }
}
