// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Market Shifter: a supply and demand quiz.
//!
//! Each question is a real-world market event. The player decides which
//! curve it moves (supply or demand) and which way (left or right), then sees
//! the explanation and the shift on a chart.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Front-end (TUI, text, ...)        │
//! ├──────────────────┬──────────────────┤
//! │  view            │  gesture         │
//! │  (pure projection│  (drag -> Action)│
//! ├──────────────────┴──────────────────┤
//! │  session (phase state machine)      │
//! ├─────────────────────────────────────┤
//! │  catalog (immutable scenarios)      │
//! └─────────────────────────────────────┘
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod gesture;
pub mod session;
pub mod view;

pub use catalog::{Catalog, Curve, MediaKind, Scenario, Shift};
pub use config::GameConfig;
pub use error::{ActionKind, QuizError, QuizResult};
pub use gesture::{Swipe, SwipeTracker};
pub use session::{Action, Answer, Phase, Quiz, Score, Session, Snapshot};
pub use view::ViewModel;
