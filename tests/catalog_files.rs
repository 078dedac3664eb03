//! Loading scenario catalogs from disk.
//!
//! Run with: cargo test catalog_files

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::PathBuf;

use market_shifter::{Catalog, Curve, GameConfig, MediaKind, QuizError, Shift};
use tempfile::TempDir;

const ONE_SCENARIO: &str = r#"[
  {
    "id": "port-strike-2024",
    "headline": "Port Strike Halts Imports",
    "year": "2024",
    "description": "Dockworkers walk out and container ships wait offshore.",
    "mediaSource": "scenarios/port.mp4",
    "mediaType": "video",
    "correctCurve": "supply",
    "correctShift": "left",
    "concept": "Input disruption",
    "chapter": "Chapter 3",
    "explanation": "Fewer goods reach shelves at every price."
  }
]"#;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_valid_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "catalog.json", ONE_SCENARIO);

    let catalog = Catalog::load(&path).unwrap();
    assert_eq!(catalog.len(), 1);
    let scenario = catalog.find("port-strike-2024").unwrap();
    assert_eq!(scenario.media_type, MediaKind::Video);
    assert!(scenario.is_correct(Curve::Supply, Shift::Left));
}

#[test]
fn test_missing_file_is_load_error() {
    let dir = TempDir::new().unwrap();
    let err = Catalog::load(&dir.path().join("nope.json")).unwrap_err();
    match err {
        QuizError::CatalogLoad(message) => assert!(message.contains("nope.json")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_bad_files_are_rejected() {
    let dir = TempDir::new().unwrap();

    let garbage = write(&dir, "garbage.json", "scenarios: yes");
    assert!(matches!(
        Catalog::load(&garbage),
        Err(QuizError::CatalogLoad(_))
    ));

    let empty = write(&dir, "empty.json", "[]");
    assert_eq!(Catalog::load(&empty), Err(QuizError::EmptyCatalog));

    let twice = format!(
        "[{}, {}]",
        ONE_SCENARIO.trim().trim_start_matches('[').trim_end_matches(']'),
        ONE_SCENARIO.trim().trim_start_matches('[').trim_end_matches(']')
    );
    let duplicate = write(&dir, "duplicate.json", &twice);
    assert_eq!(
        Catalog::load(&duplicate),
        Err(QuizError::DuplicateScenario("port-strike-2024".to_string()))
    );
}

#[test]
fn test_exported_builtin_loads_back() {
    let dir = TempDir::new().unwrap();
    let builtin = Catalog::builtin();
    let path = write(&dir, "builtin.json", &builtin.to_json_string().unwrap());

    assert_eq!(Catalog::load(&path).unwrap(), builtin);
}

#[test]
fn test_config_uses_catalog_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "catalog.json", ONE_SCENARIO);

    let config = GameConfig {
        seed: Some(8),
        catalog_path: Some(path),
        ..GameConfig::default()
    };
    let (quiz, seed) = config.start_quiz().unwrap();
    assert_eq!(seed, 8);
    assert_eq!(quiz.session().total(), 1);
    assert_eq!(quiz.current_scenario().unwrap().id, "port-strike-2024");
}
