//! Unit tests for the one-shot SVG screen-area crop
//!
//! The samples mimic the structure termtosvg emits: an outer svg with a
//! style block and animation timing, and an inner svg carrying the reserved
//! screen-area id.

use std::fs;

use docshots::error::Error;
use docshots::svg::{crop_screen_height, crop_svg_file};

const RECORDED: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="944" height="520" viewBox="0 0 944 520">
  <style type="text/css"><![CDATA[
    text { font-family: 'DejaVu Sans Mono', monospace; font-size: 14px; }
    .background { fill: #1e1e1e; }
  ]]></style>
  <rect class="background" width="944" height="520"/>
  <svg id="screen" width="904" height="500" x="20" y="10" viewBox="0 0 904 500">
    <text x="0" y="14">$ demo</text>
    <animate attributeName="opacity" dur="3s" repeatCount="indefinite"/>
  </svg>
</svg>
"#;

#[test]
fn test_documented_crop_arithmetic() {
    // total_lines = 5, original height 500 -> (500 // 5) * 4 = 400
    let cropped = crop_screen_height(RECORDED, 5).unwrap();
    let doc = roxmltree::Document::parse(&cropped).unwrap();
    let screen = doc
        .descendants()
        .find(|n| n.attribute("id") == Some("screen"))
        .unwrap();
    assert_eq!(screen.attribute("height"), Some("400"));
}

#[test]
fn test_non_exact_division_rounds_down() {
    let svg = RECORDED.replace(r#"height="500" x="20""#, r#"height="503" x="20""#);
    let cropped = crop_screen_height(&svg, 5).unwrap();
    // 503 // 5 = 100 pixels per line, so the cropped height is an exact
    // multiple of the remaining 4 lines.
    assert!(cropped.contains(r#"height="400""#));
}

#[test]
fn test_everything_but_the_height_survives_byte_for_byte() {
    let cropped = crop_screen_height(RECORDED, 5).unwrap();

    // Styles, CDATA, animation timing, the outer geometry: all untouched.
    assert!(cropped.contains("'DejaVu Sans Mono', monospace"));
    assert!(cropped.contains(r#"<![CDATA["#));
    assert!(cropped.contains(r#"dur="3s""#));
    assert!(cropped.contains(r#"viewBox="0 0 944 520""#));
    assert!(cropped.contains(r#"<rect class="background" width="944" height="520"/>"#));

    // Exactly one byte region changed: the screen height value.
    assert_eq!(cropped.len(), RECORDED.len());
    assert_eq!(cropped.replace(r#"height="400""#, r#"height="500""#), RECORDED);
}

#[test]
fn test_missing_screen_element_is_fatal() {
    let svg = RECORDED.replace(r#"id="screen""#, r#"id="display""#);
    assert!(matches!(
        crop_screen_height(&svg, 5),
        Err(Error::ScreenElementMissing)
    ));
}

#[test]
fn test_duplicate_screen_elements_are_fatal() {
    let svg = RECORDED.replace(
        "</svg>\n</svg>",
        r#"</svg><g id="screen" height="10"/></svg>"#,
    );
    assert!(matches!(
        crop_screen_height(&svg, 5),
        Err(Error::ScreenElementAmbiguous)
    ));
}

#[test]
fn test_non_numeric_height_is_fatal() {
    let svg = RECORDED.replace(r#"height="500" x="20""#, r#"height="tall" x="20""#);
    assert!(matches!(
        crop_screen_height(&svg, 5),
        Err(Error::ScreenHeightInvalid { .. })
    ));
}

#[test]
fn test_absent_height_is_fatal() {
    let svg = RECORDED.replace(r#"height="500" x="20""#, r#"x="20""#);
    assert!(matches!(
        crop_screen_height(&svg, 5),
        Err(Error::ScreenHeightInvalid { .. })
    ));
}

#[test]
fn test_unparseable_document_is_fatal() {
    assert!(matches!(
        crop_screen_height("<svg id=\"screen\" height=\"500\"", 5),
        Err(Error::SvgParseFailed { .. })
    ));
}

#[test]
fn test_single_quoted_height_attribute() {
    let svg = RECORDED.replace(r#"height="500" x="20""#, r#"height='500' x="20""#);
    let cropped = crop_screen_height(&svg, 5).unwrap();
    assert!(cropped.contains("400"));
    let doc = roxmltree::Document::parse(&cropped).unwrap();
    let screen = doc
        .descendants()
        .find(|n| n.attribute("id") == Some("screen"))
        .unwrap();
    assert_eq!(screen.attribute("height"), Some("400"));
}

#[test]
fn test_crop_file_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output.svg");
    fs::write(&path, RECORDED).unwrap();

    crop_svg_file(&path, 5).unwrap();

    let cropped = fs::read_to_string(&path).unwrap();
    assert!(cropped.contains(r#"height="400""#));
}

// The transform is one-shot: re-deriving a line count from the cropped
// document and applying it again does not reconstruct a sensible height.
// This pins the one-directional contract rather than any round-trip.
#[test]
fn test_reapplying_with_original_line_count_keeps_shrinking() {
    let once = crop_screen_height(RECORDED, 5).unwrap();
    let twice = crop_screen_height(&once, 5).unwrap();
    assert!(twice.contains(r#"height="320""#));
    assert_ne!(once, twice);
}
