//! Presentation view.
//!
//! [`ViewModel::project`] turns a session [`Snapshot`] into everything a
//! front-end draws: the scenario card, the controls for the current phase,
//! swipe hints, the result summary and the chart. It is a pure function; the
//! view never decides correctness or score on its own.

mod chart;
mod text;

pub use chart::{Cell, ChartGrid, render_chart};
pub use text::render_text;

use crate::catalog::{Curve, Scenario, Shift};
use crate::session::{Answer, Phase, Score, Snapshot};

/// Semantic color of a piece of the view. Front-ends map roles to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    /// Ordinary text.
    Text,
    /// De-emphasized text and lines.
    Muted,
    /// Chart axes.
    Axis,
    /// The supply curve and supply choices (blue).
    Supply,
    /// The demand curve and demand choices (gold).
    Demand,
    /// A leftward shift choice (red).
    Decrease,
    /// A rightward shift choice (green).
    Increase,
    /// A correct answer (green).
    Correct,
    /// A wrong answer (red).
    Incorrect,
}

impl ColorRole {
    /// Role used for a curve.
    #[must_use]
    pub const fn for_curve(curve: Curve) -> Self {
        match curve {
            Curve::Supply => Self::Supply,
            Curve::Demand => Self::Demand,
        }
    }

    /// Role used for a shift direction.
    #[must_use]
    pub const fn for_shift(shift: Shift) -> Self {
        match shift {
            Shift::Left => Self::Decrease,
            Shift::Right => Self::Increase,
        }
    }

    /// Role used for a verdict.
    #[must_use]
    pub const fn for_verdict(is_correct: bool) -> Self {
        if is_correct { Self::Correct } else { Self::Incorrect }
    }
}

/// Controls offered in the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controls {
    /// Supply or demand.
    CurveChoice,
    /// Shift left or right for `curve`, or go back.
    DirectionChoice {
        /// The curve picked in the previous step.
        curve: Curve,
    },
    /// Continue to the next scenario.
    Next,
    /// Final score and a restart button.
    PlayAgain {
        /// Score at the end of the session.
        score: Score,
        /// Correct answers as a rounded percentage.
        percent: u32,
    },
}

/// Labels shown at the card edges while swiping is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeHints {
    /// Label for a left swipe.
    pub left: &'static str,
    /// Color of the left label.
    pub left_role: ColorRole,
    /// Label for a right swipe.
    pub right: &'static str,
    /// Color of the right label.
    pub right_role: ColorRole,
}

/// The result panel after an answer is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultSummary<'a> {
    /// Whether the answer was right.
    pub is_correct: bool,
    /// What the player answered.
    pub answer: Answer,
    /// The scenario's curve.
    pub correct_curve: Curve,
    /// The scenario's shift.
    pub correct_shift: Shift,
    /// Concept being taught.
    pub concept: &'a str,
    /// Why the answer is right.
    pub explanation: &'a str,
    /// Textbook reference.
    pub chapter: &'a str,
}

impl ResultSummary<'_> {
    /// Headline verdict.
    #[must_use]
    pub const fn verdict(&self) -> &'static str {
        if self.is_correct { "Correct!" } else { "Not quite!" }
    }

    /// "You said: ..." line, only for wrong answers.
    #[must_use]
    pub fn you_said(&self) -> Option<String> {
        (!self.is_correct).then(|| {
            format!(
                "You said: {} shifts {}",
                self.answer.curve, self.answer.direction
            )
        })
    }
}

/// Shifted curve drawn on the result chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftOverlay {
    /// Curve that moves.
    pub curve: Curve,
    /// Which way it moves.
    pub direction: Shift,
    /// Tints the moved curve green or red.
    pub is_correct: bool,
}

/// What the supply and demand chart shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChartState {
    /// Curve under consideration, drawn emphasized.
    pub highlight: Option<Curve>,
    /// Shift shown after answering.
    pub shift: Option<ShiftOverlay>,
}

impl ChartState {
    /// Chart for a phase, given the pending curve and the recorded answer.
    #[must_use]
    pub fn for_phase(
        phase: Phase,
        pending_curve: Option<Curve>,
        answer: Option<Answer>,
        scenario: Option<&Scenario>,
    ) -> Self {
        match phase {
            Phase::ChoosingCurve | Phase::Complete => Self::default(),
            Phase::ChoosingDirection => Self {
                highlight: pending_curve,
                shift: None,
            },
            Phase::ShowingResult => Self {
                highlight: None,
                shift: scenario.zip(answer).map(|(s, a)| ShiftOverlay {
                    curve: s.correct_curve,
                    direction: s.correct_shift,
                    is_correct: a.is_correct,
                }),
            },
        }
    }

    /// Caption shown under the chart.
    #[must_use]
    pub fn caption(&self) -> Option<&'static str> {
        if let Some(shift) = self.shift {
            return Some(if shift.is_correct {
                "Correct shift shown"
            } else {
                "Correct answer shown"
            });
        }
        self.highlight.map(|curve| match curve {
            Curve::Supply => "Blue curve will shift",
            Curve::Demand => "Gold curve will shift",
        })
    }
}

/// Everything a front-end renders for one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewModel<'a> {
    /// Current phase.
    pub phase: Phase,
    /// One-based number of the scenario on screen.
    pub number: usize,
    /// Scenarios in the session.
    pub total: usize,
    /// Running score.
    pub score: Score,
    /// Scenario card; `None` on the completion screen.
    pub card: Option<&'a Scenario>,
    /// Prompt above the controls.
    pub prompt: &'static str,
    /// Controls for this phase.
    pub controls: Controls,
    /// Edge labels while swiping is enabled.
    pub hints: Option<SwipeHints>,
    /// Result panel after answering.
    pub result: Option<ResultSummary<'a>>,
    /// Chart contents; `None` on the completion screen.
    pub chart: Option<ChartState>,
}

impl<'a> ViewModel<'a> {
    /// Project a session snapshot.
    #[must_use]
    pub fn project(snapshot: &Snapshot<'a>) -> Self {
        let phase = snapshot.phase;
        let scenario = snapshot.current_scenario;

        let controls = match phase {
            Phase::ChoosingCurve => Controls::CurveChoice,
            Phase::ChoosingDirection => snapshot
                .pending_curve
                .map_or(Controls::CurveChoice, |curve| Controls::DirectionChoice { curve }),
            Phase::ShowingResult => Controls::Next,
            Phase::Complete => Controls::PlayAgain {
                score: snapshot.score,
                percent: snapshot.score.percent(),
            },
        };

        let prompt = match phase {
            Phase::ChoosingCurve => "Which curve does this affect?",
            Phase::ChoosingDirection => "Which direction does it shift?",
            Phase::ShowingResult => "",
            Phase::Complete => "Game Complete!",
        };

        let hints = match phase {
            Phase::ChoosingCurve => Some(SwipeHints {
                left: Curve::Supply.label(),
                left_role: ColorRole::Supply,
                right: Curve::Demand.label(),
                right_role: ColorRole::Demand,
            }),
            Phase::ChoosingDirection => Some(SwipeHints {
                left: Shift::Left.label(),
                left_role: ColorRole::Decrease,
                right: Shift::Right.label(),
                right_role: ColorRole::Increase,
            }),
            Phase::ShowingResult | Phase::Complete => None,
        };

        let result = match (phase, scenario, snapshot.answer) {
            (Phase::ShowingResult, Some(s), Some(answer)) => Some(ResultSummary {
                is_correct: answer.is_correct,
                answer,
                correct_curve: s.correct_curve,
                correct_shift: s.correct_shift,
                concept: &s.concept,
                explanation: &s.explanation,
                chapter: &s.chapter,
            }),
            _ => None,
        };

        let chart = (phase != Phase::Complete).then(|| {
            ChartState::for_phase(phase, snapshot.pending_curve, snapshot.answer, scenario)
        });

        Self {
            phase,
            number: (snapshot.position + 1).min(snapshot.total),
            total: snapshot.total,
            score: snapshot.score,
            card: scenario,
            prompt,
            controls,
            hints,
            result,
            chart,
        }
    }
}
