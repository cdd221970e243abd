//! Loading recase.toml from disk.

use std::fs;

use recase_config::{Config, Error};
use recase_core::CaseStyle;
use tempfile::TempDir;

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load(None, dir.path()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_discovers_file_in_search_dir() {
    let dir = TempDir::new().unwrap();
    fs::write(
        Config::default_path(dir.path()),
        "[defaults]\nstyle = \"pascal\"\n\n[aliases]\ntype = \"pascal\"\n",
    )
    .unwrap();

    let config = Config::load(None, dir.path()).unwrap();
    assert_eq!(config.default_style(), CaseStyle::Pascal);
    assert_eq!(config.resolve_style(Some("type")), Ok(CaseStyle::Pascal));
}

#[test]
fn test_explicit_path_must_exist() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");
    let err = Config::load(Some(&missing), dir.path()).unwrap_err();
    assert!(matches!(*err, Error::Io { ref path, .. } if path == &missing));
}

#[test]
fn test_errors_name_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "[defaults]\nstyle = \"loud\"\n").unwrap();

    let err = Config::from_file(&path).unwrap_err();
    let report = format!("{:?}", miette::Report::new(*err));
    assert!(report.contains("custom.toml"));
    assert!(report.contains("loud"));
}
