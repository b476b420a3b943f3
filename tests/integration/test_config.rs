//! Integration tests for configuration loading and override precedence

use std::fs;
use std::path::PathBuf;

use docshots::config::{ConfigFile, PngSettings, SvgSettings};
use docshots::error::Error;

#[test]
fn test_svg_defaults() {
    let settings = SvgSettings::default();
    assert_eq!(settings.input_dir, PathBuf::from("../examples"));
    assert_eq!(settings.output_dir, PathBuf::from("../assets/svg"));
    assert_eq!(settings.template, "gjm8");
    assert_eq!(settings.cols, 120);
}

#[test]
fn test_png_defaults() {
    let settings = PngSettings::default();
    assert_eq!(settings.input_dir, PathBuf::from("../examples"));
    assert_eq!(settings.output_dir, PathBuf::from("../assets/png"));
    assert_eq!(settings.width, 800);
}

#[test]
fn test_toml_file_overrides_defaults_partially() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("docshots.toml");
    fs::write(&path, "input_dir = \"./demos\"\ncols = 100\n").unwrap();

    let mut settings = SvgSettings::default();
    settings.apply_file(&ConfigFile::load(&path).unwrap());

    assert_eq!(settings.input_dir, PathBuf::from("./demos"));
    assert_eq!(settings.cols, 100);
    // Untouched fields keep their defaults.
    assert_eq!(settings.template, "gjm8");
    assert_eq!(settings.output_dir, PathBuf::from("../assets/svg"));
}

#[test]
fn test_json_file_is_supported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("docshots.json");
    fs::write(&path, r#"{"width": 1024, "stylesheet": "dark.css"}"#).unwrap();

    let mut settings = PngSettings::default();
    settings.apply_file(&ConfigFile::load(&path).unwrap());

    assert_eq!(settings.width, 1024);
    assert_eq!(settings.stylesheet, PathBuf::from("dark.css"));
}

#[test]
fn test_unknown_extension_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("docshots.ini");
    fs::write(&path, "cols = 80").unwrap();

    assert!(matches!(
        ConfigFile::load(&path),
        Err(Error::UnsupportedConfigFormat { .. })
    ));
}

#[test]
fn test_missing_config_file_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    assert!(matches!(
        ConfigFile::load(&path),
        Err(Error::ConfigLoadFailed { .. })
    ));
}

#[test]
fn test_malformed_toml_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "cols = [not toml").unwrap();

    assert!(matches!(
        ConfigFile::load(&path),
        Err(Error::ConfigParseFailed { .. })
    ));
}

#[test]
fn test_flag_overrides_beat_file_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("docshots.toml");
    fs::write(&path, "cols = 100\n").unwrap();

    // The binaries apply the file first, then flag values on top.
    let mut settings = SvgSettings::default();
    settings.apply_file(&ConfigFile::load(&path).unwrap());
    settings.cols = 60;

    assert_eq!(settings.cols, 60);
}

#[test]
fn test_validation_rejects_zero_widths() {
    let mut svg = SvgSettings::default();
    svg.cols = 0;
    assert!(matches!(
        svg.validate(),
        Err(Error::ConfigValidationFailed { .. })
    ));

    let mut png = PngSettings::default();
    png.width = 0;
    assert!(matches!(
        png.validate(),
        Err(Error::ConfigValidationFailed { .. })
    ));
}
