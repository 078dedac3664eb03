//! Scenario catalog.
//!
//! A catalog is an ordered, immutable list of [`Scenario`] records. It is
//! validated once when built: an empty list or a repeated id is a
//! configuration error reported before any session can start.
//!
//! Catalog files are JSON arrays of scenario records with `camelCase` keys:
//!
//! ```text
//! [
//!   {
//!     "id": "avian-flu-eggs-2023",
//!     "headline": "2023 Avian Flu Egg Price Spike",
//!     "year": "2023",
//!     "description": "...",
//!     "mediaSource": "scenarios/eggs.webp",
//!     "mediaType": "image",
//!     "correctCurve": "supply",
//!     "correctShift": "left",
//!     "concept": "Natural Disasters / Supply Shocks",
//!     "chapter": "Chapter 3: The Market at Work: Supply and Demand",
//!     "explanation": "..."
//!   }
//! ]
//! ```

mod builtin;

use crate::error::{QuizError, QuizResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

/// Which market curve a scenario moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Curve {
    /// The supply curve (upward sloping).
    Supply,
    /// The demand curve (downward sloping).
    Demand,
}

impl Curve {
    /// Both curves, in the order they are offered to the player.
    pub const ALL: [Self; 2] = [Self::Supply, Self::Demand];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Supply => "Supply",
            Self::Demand => "Demand",
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Supply => f.pad("supply"),
            Self::Demand => f.pad("demand"),
        }
    }
}

/// Which way a curve moves on the price/quantity plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    /// Decrease: less is bought or sold at every price.
    Left,
    /// Increase: more is bought or sold at every price.
    Right,
}

impl Shift {
    /// Both directions, in the order they are offered to the player.
    pub const ALL: [Self; 2] = [Self::Left, Self::Right];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Left => "Shift Left",
            Self::Right => "Shift Right",
        }
    }

    /// What the shift means economically.
    #[must_use]
    pub const fn meaning(self) -> &'static str {
        match self {
            Self::Left => "Decrease",
            Self::Right => "Increase",
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.pad("left"),
            Self::Right => f.pad("right"),
        }
    }
}

/// Kind of media a scenario references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// A still image.
    #[default]
    Image,
    /// A video clip.
    Video,
}

/// One quiz question: a real-world market event and its correct answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    /// Unique identifier.
    pub id: String,
    /// Short title of the event.
    pub headline: String,
    /// Year (or year range) the event happened.
    pub year: String,
    /// What happened.
    pub description: String,
    /// Opaque media reference, resolved by whoever displays the scenario.
    pub media_source: String,
    /// Kind of media behind `media_source`.
    #[serde(default)]
    pub media_type: MediaKind,
    /// The curve the event moves.
    pub correct_curve: Curve,
    /// The direction that curve moves.
    pub correct_shift: Shift,
    /// Name of the concept the scenario teaches.
    pub concept: String,
    /// Textbook reference.
    pub chapter: String,
    /// Why the answer is what it is.
    pub explanation: String,
}

impl Scenario {
    /// Whether `curve` and `shift` are this scenario's answer.
    #[must_use]
    pub fn is_correct(&self, curve: Curve, shift: Shift) -> bool {
        self.correct_curve == curve && self.correct_shift == shift
    }
}

/// A validated, non-empty list of scenarios with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    scenarios: Vec<Scenario>,
}

impl Catalog {
    /// Build a catalog from a list of scenarios.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::EmptyCatalog`] for an empty list and
    /// [`QuizError::DuplicateScenario`] if two scenarios share an id.
    pub fn new(scenarios: Vec<Scenario>) -> QuizResult<Self> {
        if scenarios.is_empty() {
            return Err(QuizError::EmptyCatalog);
        }

        let mut seen = HashSet::with_capacity(scenarios.len());
        for scenario in &scenarios {
            if !seen.insert(scenario.id.as_str()) {
                return Err(QuizError::DuplicateScenario(scenario.id.clone()));
            }
        }

        Ok(Self { scenarios })
    }

    /// The scenarios that ship with the game.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            scenarios: builtin::scenarios(),
        }
    }

    /// Parse a catalog from a JSON array of scenario records.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::CatalogLoad`] if the JSON is malformed, or any
    /// validation error from [`Catalog::new`].
    pub fn from_json_str(json: &str) -> QuizResult<Self> {
        let scenarios: Vec<Scenario> =
            serde_json::from_str(json).map_err(|e| QuizError::CatalogLoad(e.to_string()))?;
        Self::new(scenarios)
    }

    /// Load a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::CatalogLoad`] if the file cannot be read or
    /// parsed, or any validation error from [`Catalog::new`].
    pub fn load(path: &Path) -> QuizResult<Self> {
        let json = fs::read_to_string(path)
            .map_err(|e| QuizError::CatalogLoad(format!("{}: {e}", path.display())))?;
        let catalog = Self::from_json_str(&json)?;
        tracing::debug!(
            path = %path.display(),
            scenarios = catalog.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Serialize the catalog back to the file format.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::CatalogLoad`] if serialization fails.
    pub fn to_json_string(&self) -> QuizResult<String> {
        serde_json::to_string_pretty(&self.scenarios)
            .map_err(|e| QuizError::CatalogLoad(e.to_string()))
    }

    /// Number of scenarios. Always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Scenario at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Scenario> {
        self.scenarios.get(index)
    }

    /// Find a scenario by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    /// All scenarios in catalog order.
    #[must_use]
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Iterate scenarios in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Scenario> {
        self.scenarios.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Scenario;
    type IntoIter = std::slice::Iter<'a, Scenario>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Minimal scenario for tests.
    pub(crate) fn scenario(id: &str, curve: Curve, shift: Shift) -> Scenario {
        Scenario {
            id: id.to_string(),
            headline: format!("{id} headline"),
            year: "2024".to_string(),
            description: format!("{id} description"),
            media_source: format!("scenarios/{id}.webp"),
            media_type: MediaKind::Image,
            correct_curve: curve,
            correct_shift: shift,
            concept: format!("{id} concept"),
            chapter: "Chapter 3".to_string(),
            explanation: format!("{id} explanation"),
        }
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(Catalog::new(Vec::new()), Err(QuizError::EmptyCatalog));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::new(vec![
            scenario("a", Curve::Supply, Shift::Left),
            scenario("b", Curve::Demand, Shift::Right),
            scenario("a", Curve::Demand, Shift::Left),
        ]);
        assert_eq!(result, Err(QuizError::DuplicateScenario("a".to_string())));
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let builtin = Catalog::builtin();
        assert_eq!(builtin.len(), 16);
        // Round through the validating constructor.
        let validated = Catalog::new(builtin.scenarios().to_vec()).unwrap();
        assert_eq!(validated, builtin);
    }

    #[test]
    fn test_builtin_covers_every_answer() {
        let builtin = Catalog::builtin();
        for curve in Curve::ALL {
            for shift in Shift::ALL {
                assert!(
                    builtin
                        .iter()
                        .any(|s| s.correct_curve == curve && s.correct_shift == shift),
                    "no builtin scenario for {curve} {shift}"
                );
            }
        }
    }

    #[test]
    fn test_find_and_get() {
        let builtin = Catalog::builtin();
        let eggs = builtin.find("avian-flu-eggs-2023").unwrap();
        assert_eq!(eggs.correct_curve, Curve::Supply);
        assert_eq!(eggs.correct_shift, Shift::Left);
        assert!(builtin.find("missing").is_none());
        assert!(builtin.get(builtin.len()).is_none());
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let json = r#"[{
            "id": "x",
            "headline": "H",
            "year": "2020",
            "description": "D",
            "mediaSource": "x.webp",
            "correctCurve": "demand",
            "correctShift": "left",
            "concept": "C",
            "chapter": "Ch",
            "explanation": "E"
        }]"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        let s = catalog.get(0).unwrap();
        assert_eq!(s.media_type, MediaKind::Image);
        assert!(s.is_correct(Curve::Demand, Shift::Left));
        assert!(!s.is_correct(Curve::Supply, Shift::Left));

        let back = catalog.to_json_string().unwrap();
        assert!(back.contains("\"correctCurve\": \"demand\""));
        assert!(back.contains("\"mediaType\": \"image\""));
    }

    #[test]
    fn test_malformed_json_is_load_error() {
        let err = Catalog::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, QuizError::CatalogLoad(_)));

        let err = Catalog::from_json_str(r#"[{"id": "x", "correctCurve": "sideways"}]"#)
            .unwrap_err();
        assert!(matches!(err, QuizError::CatalogLoad(_)));
    }

    #[test]
    fn test_empty_json_array_is_empty_catalog() {
        assert_eq!(Catalog::from_json_str("[]"), Err(QuizError::EmptyCatalog));
    }
}
