//! Output formatting utilities for CLI.

use market_shifter::{Catalog, Curve, Quiz, Shift, Snapshot};
use serde::Serialize;
use std::fmt::Write as _;

/// JSON-serializable session overview.
#[derive(Debug, Serialize)]
pub(super) struct JsonSession<'a> {
    /// Seed the play order was shuffled with.
    pub(super) seed: u64,
    /// Scenario ids in play order.
    pub(super) order: Vec<&'a str>,
    /// Opening state.
    pub(super) snapshot: Snapshot<'a>,
}

impl<'a> JsonSession<'a> {
    /// Create from a freshly started quiz.
    pub(super) fn from_quiz(quiz: &'a Quiz, seed: u64) -> Self {
        Self {
            seed,
            order: ordered_ids(quiz),
            snapshot: quiz.snapshot(),
        }
    }
}

fn ordered_ids(quiz: &Quiz) -> Vec<&str> {
    quiz.session()
        .order()
        .iter()
        .filter_map(|&i| quiz.catalog().get(i))
        .map(|s| s.id.as_str())
        .collect()
}

const fn answer_tag(curve: Curve, shift: Shift) -> &'static str {
    match (curve, shift) {
        (Curve::Supply, Shift::Left) => "supply <-",
        (Curve::Supply, Shift::Right) => "supply ->",
        (Curve::Demand, Shift::Left) => "demand <-",
        (Curve::Demand, Shift::Right) => "demand ->",
    }
}

/// Format a catalog as a human-readable table.
pub(super) fn format_catalog_text(catalog: &Catalog) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "{} scenarios\n", catalog.len());
    for (i, scenario) in catalog.iter().enumerate() {
        let _ = writeln!(
            output,
            "  {:>2}. [{}] {:<10} {}",
            i + 1,
            scenario.year,
            answer_tag(scenario.correct_curve, scenario.correct_shift),
            scenario.headline
        );
        let _ = writeln!(output, "      {} ({})", scenario.concept, scenario.id);
    }

    let supply = catalog
        .iter()
        .filter(|s| s.correct_curve == Curve::Supply)
        .count();
    let _ = writeln!(
        output,
        "\n  Supply: {supply}  Demand: {}",
        catalog.len() - supply
    );

    output
}

/// Format a session overview as text.
pub(super) fn format_session_text(quiz: &Quiz, seed: u64) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "Session (seed: {seed})");
    let _ = writeln!(output, "  Phase: {}", quiz.session().phase());
    let _ = writeln!(output, "  Scenarios: {}\n", quiz.session().total());
    for (i, id) in ordered_ids(quiz).into_iter().enumerate() {
        let _ = writeln!(output, "  {:>2}. {id}", i + 1);
    }

    output
}
