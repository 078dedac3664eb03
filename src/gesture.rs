//! Swipe input.
//!
//! A horizontal drag is an alternative to pressing a choice. The tracker
//! follows one drag at a time; on release it reports a [`Swipe`] only when
//! the displacement strictly exceeds the threshold. Shorter drags snap back
//! and change nothing.
//!
//! A swipe becomes the same [`Action`] a button press would:
//!
//! | phase               | left              | right              |
//! |---------------------|-------------------|--------------------|
//! | choosing a curve    | supply            | demand             |
//! | choosing a direction| shift left        | shift right        |
//! | result / complete   | ignored           | ignored            |

use crate::catalog::{Curve, Shift};
use crate::error::QuizResult;
use crate::session::{Action, Phase, Quiz};

/// Pointer displacement needed for a swipe, in pixels.
pub const DEFAULT_SWIPE_THRESHOLD: u32 = 100;

/// A completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Released far enough to the left.
    Left,
    /// Released far enough to the right.
    Right,
}

impl Swipe {
    /// The action this swipe stands for in `phase`, if swiping is enabled.
    #[must_use]
    pub const fn to_action(self, phase: Phase) -> Option<Action> {
        match (phase, self) {
            (Phase::ChoosingCurve, Self::Left) => Some(Action::SelectCurve(Curve::Supply)),
            (Phase::ChoosingCurve, Self::Right) => Some(Action::SelectCurve(Curve::Demand)),
            (Phase::ChoosingDirection, Self::Left) => Some(Action::SelectDirection(Shift::Left)),
            (Phase::ChoosingDirection, Self::Right) => {
                Some(Action::SelectDirection(Shift::Right))
            }
            (Phase::ShowingResult | Phase::Complete, _) => None,
        }
    }
}

/// Whether dragging the card is allowed in `phase`.
#[must_use]
pub const fn swipe_enabled(phase: Phase) -> bool {
    matches!(phase, Phase::ChoosingCurve | Phase::ChoosingDirection)
}

/// Follows a single horizontal drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeTracker {
    threshold: u32,
    origin: Option<i32>,
    offset: i32,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl SwipeTracker {
    /// Tracker that needs more than `threshold` units of displacement.
    #[must_use]
    pub const fn new(threshold: u32) -> Self {
        Self {
            threshold,
            origin: None,
            offset: 0,
        }
    }

    /// Configured threshold.
    #[must_use]
    pub const fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    /// Current displacement from where the drag started.
    #[must_use]
    pub const fn offset(&self) -> i32 {
        self.offset
    }

    /// Start a drag at `x`. Restarts any drag already in progress.
    pub fn begin(&mut self, x: i32) {
        self.origin = Some(x);
        self.offset = 0;
    }

    /// Pointer moved to `x`. Returns the new displacement.
    pub fn update(&mut self, x: i32) -> i32 {
        if let Some(origin) = self.origin {
            self.offset = x.saturating_sub(origin);
        }
        self.offset
    }

    /// The swipe a release right now would produce.
    #[must_use]
    pub fn preview(&self) -> Option<Swipe> {
        if !self.is_dragging() {
            return None;
        }
        classify(self.offset, self.threshold)
    }

    /// Pointer released at `x`. Ends the drag either way.
    pub fn end(&mut self, x: i32) -> Option<Swipe> {
        self.origin?;
        let offset = self.update(x);
        self.cancel();
        let swipe = classify(offset, self.threshold);
        tracing::trace!(offset, ?swipe, "drag released");
        swipe
    }

    /// Abandon the drag without producing a swipe.
    pub fn cancel(&mut self) {
        self.origin = None;
        self.offset = 0;
    }
}

fn classify(offset: i32, threshold: u32) -> Option<Swipe> {
    let distance = offset.unsigned_abs();
    if distance <= threshold {
        None
    } else if offset < 0 {
        Some(Swipe::Left)
    } else {
        Some(Swipe::Right)
    }
}

/// Apply a swipe to the quiz.
///
/// Returns the action that was applied, or `None` when swiping is disabled
/// in the current phase.
///
/// # Errors
///
/// Returns any error from [`Quiz::apply`].
pub fn dispatch(quiz: &mut Quiz, swipe: Swipe) -> QuizResult<Option<Action>> {
    let Some(action) = swipe.to_action(quiz.session().phase()) else {
        return Ok(None);
    };
    quiz.apply(action)?;
    Ok(Some(action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_sub_threshold_drag_reverts() {
        let mut tracker = SwipeTracker::new(100);
        tracker.begin(500);
        assert_eq!(tracker.update(580), 80);
        assert_eq!(tracker.end(600), None);
        assert!(!tracker.is_dragging());
        assert_eq!(tracker.offset(), 0);
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut tracker = SwipeTracker::new(100);
        tracker.begin(0);
        assert_eq!(tracker.end(-100), None);
        tracker.begin(0);
        assert_eq!(tracker.end(-101), Some(Swipe::Left));
        tracker.begin(0);
        assert_eq!(tracker.end(101), Some(Swipe::Right));
    }

    #[test]
    fn test_release_position_decides() {
        let mut tracker = SwipeTracker::new(10);
        tracker.begin(50);
        tracker.update(80);
        assert_eq!(tracker.preview(), Some(Swipe::Right));
        // Dragged back before letting go.
        assert_eq!(tracker.end(55), None);
    }

    #[test]
    fn test_end_without_begin() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(tracker.threshold(), DEFAULT_SWIPE_THRESHOLD);
        assert_eq!(tracker.end(1000), None);
        assert_eq!(tracker.preview(), None);
    }

    #[test]
    fn test_swipe_mapping() {
        assert_eq!(
            Swipe::Left.to_action(Phase::ChoosingCurve),
            Some(Action::SelectCurve(Curve::Supply))
        );
        assert_eq!(
            Swipe::Right.to_action(Phase::ChoosingCurve),
            Some(Action::SelectCurve(Curve::Demand))
        );
        assert_eq!(
            Swipe::Left.to_action(Phase::ChoosingDirection),
            Some(Action::SelectDirection(Shift::Left))
        );
        assert_eq!(Swipe::Right.to_action(Phase::ShowingResult), None);
        assert_eq!(Swipe::Left.to_action(Phase::Complete), None);
        assert!(!swipe_enabled(Phase::ShowingResult));
    }

    #[test]
    fn test_dispatch_matches_buttons() {
        let mut swiped = Quiz::new(Catalog::builtin(), 8);
        let mut pressed = swiped.clone();

        dispatch(&mut swiped, Swipe::Right).unwrap();
        dispatch(&mut swiped, Swipe::Left).unwrap();
        pressed.select_curve(Curve::Demand).unwrap();
        pressed.select_direction(Shift::Left).unwrap();

        assert_eq!(swiped.session(), pressed.session());
        assert_eq!(swiped.session().phase(), Phase::ShowingResult);

        // Swiping on the result card is ignored, not an error.
        assert_eq!(dispatch(&mut swiped, Swipe::Right).unwrap(), None);
        assert_eq!(swiped.session(), pressed.session());
    }
}
