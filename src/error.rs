//! Error types for catalogs and quiz sessions.

use crate::session::Phase;
use std::fmt;

/// Controller action names used when reporting a rejected transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// `select_curve`.
    SelectCurve,
    /// `select_direction`.
    SelectDirection,
    /// `go_back`.
    GoBack,
    /// `advance`.
    Advance,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SelectCurve => "select_curve",
            Self::SelectDirection => "select_direction",
            Self::GoBack => "go_back",
            Self::Advance => "advance",
        };
        f.write_str(name)
    }
}

/// Errors raised by the catalog and the session controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    /// An action was issued in a phase that does not accept it.
    ///
    /// The session is left exactly as it was.
    InvalidTransition {
        /// The rejected action.
        action: ActionKind,
        /// The phase the session was in.
        phase: Phase,
    },
    /// The catalog has no scenarios.
    EmptyCatalog,
    /// Two scenarios share the same id.
    DuplicateScenario(String),
    /// `current_scenario` was called after the last scenario was answered.
    NoCurrentScenario,
    /// A catalog file could not be read or parsed.
    CatalogLoad(String),
    /// A session's scenario order does not fit the catalog it was paired with.
    CatalogMismatch {
        /// Number of scenarios the session expects.
        expected: usize,
        /// Number of scenarios the catalog holds.
        actual: usize,
    },
    /// A restored session breaks a session invariant.
    InvalidSession(String),
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTransition { action, phase } => {
                write!(f, "invalid transition: {action} is not allowed while {phase}")
            }
            Self::EmptyCatalog => write!(f, "scenario catalog is empty"),
            Self::DuplicateScenario(id) => write!(f, "duplicate scenario id: {id}"),
            Self::NoCurrentScenario => {
                write!(f, "no current scenario: the session is complete")
            }
            Self::CatalogLoad(reason) => write!(f, "failed to load catalog: {reason}"),
            Self::CatalogMismatch { expected, actual } => write!(
                f,
                "session expects {expected} scenarios but the catalog has {actual}"
            ),
            Self::InvalidSession(reason) => write!(f, "invalid session: {reason}"),
        }
    }
}

impl std::error::Error for QuizError {}

/// Result type for catalog and session operations.
pub type QuizResult<T> = Result<T, QuizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_display() {
        let err = QuizError::InvalidTransition {
            action: ActionKind::SelectDirection,
            phase: Phase::ChoosingCurve,
        };
        assert_eq!(
            err.to_string(),
            "invalid transition: select_direction is not allowed while choosing a curve"
        );
    }

    #[test]
    fn test_catalog_errors_display() {
        assert_eq!(QuizError::EmptyCatalog.to_string(), "scenario catalog is empty");
        assert!(
            QuizError::DuplicateScenario("eggs".to_string())
                .to_string()
                .contains("eggs")
        );
        let mismatch = QuizError::CatalogMismatch {
            expected: 3,
            actual: 2,
        };
        assert!(mismatch.to_string().contains('3'));
    }
}
