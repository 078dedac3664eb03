//! Plain-text rendering of a view model.

// format! into push_str keeps the layout readable
#![allow(clippy::format_push_string)]

use super::{Controls, ViewModel, render_chart};

/// Chart size used for text output.
const CHART_WIDTH: u16 = 44;
const CHART_HEIGHT: u16 = 14;

/// Render a view model as plain text.
///
/// Output format:
/// ```text
/// Score: 1/2                                  Scenario 2 / 16
///
/// [2023] 2023 Avian Flu Egg Price Spike
/// Bird flu outbreaks led to ...
///
/// Which curve does this affect?
///   [s] Supply   [d] Demand
///
/// ^
/// |  \                 / S
/// ...
/// ```
#[must_use]
pub fn render_text(view: &ViewModel<'_>) -> String {
    let mut out = String::new();

    let score = format!("Score: {}/{}", view.score.correct, view.score.total);
    out.push_str(&format!(
        "{score:<44}Scenario {} / {}\n\n",
        view.number, view.total
    ));

    if let Some(card) = view.card {
        out.push_str(&format!("[{}] {}\n", card.year, card.headline));
        out.push_str(&card.description);
        out.push_str("\n\n");
    }

    if !view.prompt.is_empty() {
        out.push_str(view.prompt);
        out.push('\n');
    }

    match view.controls {
        Controls::CurveChoice => out.push_str("  [s] Supply   [d] Demand\n"),
        Controls::DirectionChoice { curve } => out.push_str(&format!(
            "  ({}) [b] Back   [l] Shift Left (Decrease)   [r] Shift Right (Increase)\n",
            curve.label()
        )),
        Controls::Next => {}
        Controls::PlayAgain { score, percent } => {
            out.push_str(&format!("You've finished all {} scenarios\n", view.total));
            out.push_str(&format!(
                "Final Score: {} / {} ({percent}% correct)\n",
                score.correct, score.total
            ));
            out.push_str("  [r] Play Again\n");
        }
    }

    if let Some(result) = view.result {
        out.push_str(result.verdict());
        out.push('\n');
        if let Some(said) = result.you_said() {
            out.push_str(&said);
            out.push('\n');
        }
        out.push_str(&format!(
            "Answer: {} -> {}\n\n",
            result.correct_curve, result.correct_shift
        ));
        out.push_str(&format!("{}\n{}\n{}\n", result.concept, result.explanation, result.chapter));
        out.push_str("  [n] Next Scenario\n");
    }

    if let Some(chart) = view.chart {
        out.push('\n');
        out.push_str(&render_chart(&chart, CHART_WIDTH, CHART_HEIGHT).to_plain_string());
        if let Some(caption) = chart.caption() {
            out.push_str(caption);
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Curve, Shift};
    use crate::session::Session;

    #[test]
    fn test_text_for_each_phase() {
        let catalog = Catalog::builtin();
        let mut session = Session::start(&catalog, 21);
        let first = session.current_scenario(&catalog).unwrap().clone();

        let text = render_text(&ViewModel::project(&session.snapshot(&catalog)));
        assert!(text.contains("Score: 0/0"));
        assert!(text.contains("Scenario 1 / 16"));
        assert!(text.contains(&first.headline));
        assert!(text.contains("Which curve does this affect?"));

        session.select_curve(first.correct_curve).unwrap();
        let text = render_text(&ViewModel::project(&session.snapshot(&catalog)));
        assert!(text.contains("Which direction does it shift?"));
        assert!(text.contains(first.correct_curve.label()));

        session.select_direction(&catalog, first.correct_shift).unwrap();
        let text = render_text(&ViewModel::project(&session.snapshot(&catalog)));
        assert!(text.contains("Correct!"));
        assert!(text.contains(&first.explanation));
        assert!(text.contains("Correct shift shown"));
        assert!(!text.contains("You said"));
    }

    #[test]
    fn test_text_complete() {
        let catalog = Catalog::new(vec![crate::catalog::tests::scenario(
            "only",
            Curve::Demand,
            Shift::Left,
        )])
        .unwrap();
        let mut session = Session::start(&catalog, 0);
        session.select_curve(Curve::Supply).unwrap();
        session.select_direction(&catalog, Shift::Left).unwrap();
        session.advance().unwrap();

        let text = render_text(&ViewModel::project(&session.snapshot(&catalog)));
        assert!(text.contains("Game Complete!"));
        assert!(text.contains("Final Score: 0 / 1 (0% correct)"));
        assert!(text.contains("Play Again"));
    }
}
