//! Quiz session controller.
//!
//! A [`Session`] walks a shuffled permutation of the catalog, one scenario at
//! a time, through four phases:
//!
//! ```text
//! ChoosingCurve --select_curve--> ChoosingDirection
//! ChoosingDirection --select_direction--> ShowingResult
//! ChoosingDirection --go_back--> ChoosingCurve
//! ShowingResult --advance--> ChoosingCurve   (more scenarios remain)
//! ShowingResult --advance--> Complete        (last scenario)
//! any --start--> ChoosingCurve               (new session)
//! ```
//!
//! Every action issued in a phase that does not accept it is rejected with
//! [`QuizError::InvalidTransition`] and leaves the session untouched. There is
//! no way back from `ShowingResult`: an answer is scored exactly once, when
//! the direction is chosen.
//!
//! `Session` only holds state and borrows the catalog when it needs scenario
//! data. [`Quiz`] bundles an owned catalog, a session and the RNG that seeds
//! restarts.

use crate::catalog::{Catalog, Curve, Scenario, Shift};
use crate::error::{ActionKind, QuizError, QuizResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The current step of one scenario's question/answer flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    /// Waiting for the player to pick supply or demand.
    ChoosingCurve,
    /// A curve is picked; waiting for left or right.
    ChoosingDirection,
    /// The answer is recorded and scored; waiting for `advance`.
    ShowingResult,
    /// Every scenario has been answered.
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::ChoosingCurve => "choosing a curve",
            Self::ChoosingDirection => "choosing a direction",
            Self::ShowingResult => "showing a result",
            Self::Complete => "complete",
        };
        f.write_str(text)
    }
}

/// Running score for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    /// Answers that matched both curve and direction.
    pub correct: u32,
    /// Answers recorded.
    pub total: u32,
}

impl Score {
    /// Percentage of correct answers, rounded to the nearest whole number.
    ///
    /// Zero when nothing has been answered yet.
    #[must_use]
    pub fn percent(self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.correct * 100 + self.total / 2) / self.total
    }
}

/// A recorded answer for the current scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Curve the player chose.
    pub curve: Curve,
    /// Direction the player chose.
    pub direction: Shift,
    /// Whether both matched the scenario.
    pub is_correct: bool,
}

/// A discrete input event.
///
/// Buttons, keys and completed swipes all reduce to these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Pick a curve.
    SelectCurve(Curve),
    /// Pick a direction for the pending curve.
    SelectDirection(Shift),
    /// Undo the curve choice.
    GoBack,
    /// Move past the result screen.
    Advance,
    /// Throw the session away and start a new one.
    Restart,
}

/// Session state. One per active game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Catalog indices in play order.
    order: Vec<usize>,
    /// Index into `order`.
    position: usize,
    phase: Phase,
    pending_curve: Option<Curve>,
    answer: Option<Answer>,
    score: Score,
    /// Seed that produced `order`.
    seed: u64,
}

/// What a view needs to render the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Snapshot<'a> {
    /// Current phase.
    pub phase: Phase,
    /// The scenario being asked; `None` once the session is complete.
    pub current_scenario: Option<&'a Scenario>,
    /// Curve chosen in `ChoosingDirection`.
    pub pending_curve: Option<Curve>,
    /// Answer recorded for the current scenario.
    pub answer: Option<Answer>,
    /// Running score.
    pub score: Score,
    /// Zero-based position in the play order.
    pub position: usize,
    /// Number of scenarios in the session.
    pub total: usize,
}

/// Uniform random permutation of `0..len` (Fisher-Yates).
#[must_use]
pub fn shuffled_order(len: usize, seed: u64) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut order: Vec<usize> = (0..len).collect();
    order.shuffle(&mut rng);
    order
}

impl Session {
    /// Start a session over `catalog`, shuffled with `seed`.
    #[must_use]
    pub fn start(catalog: &Catalog, seed: u64) -> Self {
        let order = shuffled_order(catalog.len(), seed);
        tracing::debug!(seed, scenarios = order.len(), "session started");
        Self::fresh(order, seed)
    }

    /// Start a session with a fixed play order.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::CatalogMismatch`] if `order` is not a permutation
    /// of the catalog's indices.
    pub fn with_order(catalog: &Catalog, order: Vec<usize>) -> QuizResult<Self> {
        check_permutation(&order, catalog.len())?;
        Ok(Self::fresh(order, 0))
    }

    fn fresh(order: Vec<usize>, seed: u64) -> Self {
        Self {
            order,
            position: 0,
            phase: Phase::ChoosingCurve,
            pending_curve: None,
            answer: None,
            score: Score::default(),
            seed,
        }
    }

    /// Check a restored session against the catalog it will be played with.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::CatalogMismatch`] if the play order does not fit
    /// the catalog, or [`QuizError::InvalidSession`] if the phase, position,
    /// pending curve, answer and score disagree with each other or with the
    /// current scenario.
    pub fn validate(&self, catalog: &Catalog) -> QuizResult<()> {
        check_permutation(&self.order, catalog.len())?;

        let scenario = self
            .order
            .get(self.position)
            .and_then(|&index| catalog.get(index))
            .ok_or_else(|| {
                invalid(format!(
                    "position {} is past the last scenario",
                    self.position
                ))
            })?;

        // Scenarios before `position` are scored; the current one is scored
        // once its answer is shown.
        let answered = matches!(self.phase, Phase::ShowingResult | Phase::Complete);
        let expected_total = self.position + usize::from(answered);
        if usize::try_from(self.score.total).ok() != Some(expected_total)
            || self.score.correct > self.score.total
        {
            return Err(invalid(format!(
                "score {}/{} does not fit position {} while {}",
                self.score.correct, self.score.total, self.position, self.phase
            )));
        }

        if self.phase == Phase::Complete && self.position + 1 != self.order.len() {
            return Err(invalid(format!(
                "complete at position {} of {}",
                self.position,
                self.order.len()
            )));
        }

        match (self.phase, self.pending_curve, self.answer) {
            (Phase::ChoosingCurve, None, None) | (Phase::ChoosingDirection, Some(_), None) => {}
            (Phase::ShowingResult | Phase::Complete, Some(pending), Some(answer)) => {
                if pending != answer.curve {
                    return Err(invalid(format!(
                        "pending curve {pending} differs from answered curve {}",
                        answer.curve
                    )));
                }
                if answer.is_correct != scenario.is_correct(answer.curve, answer.direction) {
                    return Err(invalid(format!(
                        "answer to {} is marked {}",
                        scenario.id,
                        if answer.is_correct { "correct" } else { "incorrect" }
                    )));
                }
                let (correct, total) = (self.score.correct, self.score.total);
                if (answer.is_correct && correct == 0) || (!answer.is_correct && correct == total)
                {
                    return Err(invalid(format!(
                        "score {correct}/{total} does not count the last answer"
                    )));
                }
            }
            _ => {
                return Err(invalid(format!(
                    "pending curve and answer do not match phase {}",
                    self.phase
                )));
            }
        }
        Ok(())
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Zero-based position in the play order.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Number of scenarios in the session.
    #[must_use]
    pub fn total(&self) -> usize {
        self.order.len()
    }

    /// Play order as catalog indices.
    #[must_use]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Curve chosen in `ChoosingDirection`.
    #[must_use]
    pub const fn pending_curve(&self) -> Option<Curve> {
        self.pending_curve
    }

    /// Answer recorded for the current scenario.
    #[must_use]
    pub const fn answer(&self) -> Option<Answer> {
        self.answer
    }

    /// Running score.
    #[must_use]
    pub const fn score(&self) -> Score {
        self.score
    }

    /// Seed that produced the play order.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// The scenario being asked.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::NoCurrentScenario`] once the session is complete,
    /// and [`QuizError::CatalogMismatch`] if `catalog` is not the catalog the
    /// session was started with.
    pub fn current_scenario<'a>(&self, catalog: &'a Catalog) -> QuizResult<&'a Scenario> {
        if self.phase == Phase::Complete {
            return Err(QuizError::NoCurrentScenario);
        }
        self.order
            .get(self.position)
            .and_then(|&index| catalog.get(index))
            .ok_or(QuizError::CatalogMismatch {
                expected: self.order.len(),
                actual: catalog.len(),
            })
    }

    /// Pick a curve.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::InvalidTransition`] unless choosing a curve.
    pub fn select_curve(&mut self, curve: Curve) -> QuizResult<()> {
        self.expect_phase(ActionKind::SelectCurve, Phase::ChoosingCurve)?;
        self.pending_curve = Some(curve);
        self.phase = Phase::ChoosingDirection;
        tracing::debug!(position = self.position, %curve, "curve selected");
        Ok(())
    }

    /// Pick a direction for the pending curve, recording and scoring the
    /// answer.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::InvalidTransition`] unless choosing a direction,
    /// or any error from [`Session::current_scenario`].
    pub fn select_direction(&mut self, catalog: &Catalog, direction: Shift) -> QuizResult<Answer> {
        self.expect_phase(ActionKind::SelectDirection, Phase::ChoosingDirection)?;
        let Some(curve) = self.pending_curve else {
            return Err(self.reject(ActionKind::SelectDirection));
        };
        let scenario = self.current_scenario(catalog)?;

        let answer = Answer {
            curve,
            direction,
            is_correct: scenario.is_correct(curve, direction),
        };

        self.answer = Some(answer);
        self.score.total += 1;
        if answer.is_correct {
            self.score.correct += 1;
        }
        self.phase = Phase::ShowingResult;

        tracing::debug!(
            scenario = %scenario.id,
            %curve,
            %direction,
            correct = answer.is_correct,
            correct_total = self.score.correct,
            answered = self.score.total,
            "answer recorded"
        );
        Ok(answer)
    }

    /// Undo the curve choice.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::InvalidTransition`] unless choosing a direction.
    pub fn go_back(&mut self) -> QuizResult<()> {
        self.expect_phase(ActionKind::GoBack, Phase::ChoosingDirection)?;
        self.pending_curve = None;
        self.phase = Phase::ChoosingCurve;
        tracing::debug!(position = self.position, "curve choice undone");
        Ok(())
    }

    /// Move to the next scenario, or finish the session after the last one.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::InvalidTransition`] unless showing a result.
    pub fn advance(&mut self) -> QuizResult<()> {
        self.expect_phase(ActionKind::Advance, Phase::ShowingResult)?;

        if self.position + 1 >= self.order.len() {
            self.phase = Phase::Complete;
            tracing::info!(
                correct = self.score.correct,
                total = self.score.total,
                "session complete"
            );
        } else {
            self.position += 1;
            self.phase = Phase::ChoosingCurve;
            self.pending_curve = None;
            self.answer = None;
            tracing::debug!(position = self.position, "next scenario");
        }
        Ok(())
    }

    /// Everything a view needs, with the current scenario resolved.
    #[must_use]
    pub fn snapshot<'a>(&self, catalog: &'a Catalog) -> Snapshot<'a> {
        Snapshot {
            phase: self.phase,
            current_scenario: self.current_scenario(catalog).ok(),
            pending_curve: self.pending_curve,
            answer: self.answer,
            score: self.score,
            position: self.position,
            total: self.order.len(),
        }
    }

    fn expect_phase(&self, action: ActionKind, expected: Phase) -> QuizResult<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(self.reject(action))
        }
    }

    fn reject(&self, action: ActionKind) -> QuizError {
        tracing::warn!(%action, phase = %self.phase, "rejected transition");
        QuizError::InvalidTransition {
            action,
            phase: self.phase,
        }
    }
}

fn invalid(reason: String) -> QuizError {
    QuizError::InvalidSession(reason)
}

fn check_permutation(order: &[usize], len: usize) -> QuizResult<()> {
    let mismatch = QuizError::CatalogMismatch {
        expected: order.len(),
        actual: len,
    };
    if order.len() != len {
        return Err(mismatch);
    }
    let mut seen = vec![false; len];
    for &index in order {
        match seen.get_mut(index) {
            Some(slot) if !*slot => *slot = true,
            _ => return Err(mismatch),
        }
    }
    Ok(())
}

/// A catalog and the session being played over it.
#[derive(Debug, Clone)]
pub struct Quiz {
    catalog: Catalog,
    session: Session,
    rng: StdRng,
}

impl Quiz {
    /// Start a quiz over `catalog`. `seed` shuffles the first session and
    /// seeds every later restart.
    #[must_use]
    pub fn new(catalog: Catalog, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let session = Session::start(&catalog, rng.r#gen());
        Self {
            catalog,
            session,
            rng,
        }
    }

    /// Resume a saved session.
    ///
    /// # Errors
    ///
    /// Returns any error from [`Session::validate`].
    pub fn resume(catalog: Catalog, session: Session) -> QuizResult<Self> {
        session.validate(&catalog)?;
        let rng = StdRng::seed_from_u64(session.seed());
        Ok(Self {
            catalog,
            session,
            rng,
        })
    }

    /// The catalog in play.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Replace the session with a freshly shuffled one.
    pub fn start_session(&mut self) {
        self.session = Session::start(&self.catalog, self.rng.r#gen());
    }

    /// See [`Session::select_curve`].
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::InvalidTransition`] unless choosing a curve.
    pub fn select_curve(&mut self, curve: Curve) -> QuizResult<()> {
        self.session.select_curve(curve)
    }

    /// See [`Session::select_direction`].
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::InvalidTransition`] unless choosing a direction.
    pub fn select_direction(&mut self, direction: Shift) -> QuizResult<Answer> {
        self.session.select_direction(&self.catalog, direction)
    }

    /// See [`Session::go_back`].
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::InvalidTransition`] unless choosing a direction.
    pub fn go_back(&mut self) -> QuizResult<()> {
        self.session.go_back()
    }

    /// See [`Session::advance`].
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::InvalidTransition`] unless showing a result.
    pub fn advance(&mut self) -> QuizResult<()> {
        self.session.advance()
    }

    /// See [`Session::current_scenario`].
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::NoCurrentScenario`] once the session is complete.
    pub fn current_scenario(&self) -> QuizResult<&Scenario> {
        self.session.current_scenario(&self.catalog)
    }

    /// See [`Session::snapshot`].
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        self.session.snapshot(&self.catalog)
    }

    /// Dispatch a discrete input event.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::InvalidTransition`] if the action does not fit
    /// the current phase. `Restart` never fails.
    pub fn apply(&mut self, action: Action) -> QuizResult<()> {
        match action {
            Action::SelectCurve(curve) => self.select_curve(curve),
            Action::SelectDirection(direction) => self.select_direction(direction).map(|_| ()),
            Action::GoBack => self.go_back(),
            Action::Advance => self.advance(),
            Action::Restart => {
                self.start_session();
                Ok(())
            }
        }
    }
}
