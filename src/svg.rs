//! SVG cropping
//!
//! The recorded SVG contains one extra terminal row reserved for the shell
//! prompt. Cropping shrinks the visible height of the screen-area element by
//! exactly one line's worth of pixels, discarding that row, while leaving
//! every other byte of the document (styles, animation timing, sibling
//! elements) untouched.
//!
//! Contract with the recording tool: the SVG it emits must expose exactly
//! one element carrying the reserved screen-area id with a numeric `height`
//! attribute. A document that violates this is a tool-compatibility problem
//! and fails the run rather than silently producing a corrupt artifact.
//!
//! The transform is one-shot: it must be applied once, with the line count
//! the recording was made at. Re-deriving a line count from an already
//! cropped document and applying it again is unsupported.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Id of the element representing the visible terminal surface
pub const SCREEN_ELEMENT_ID: &str = "screen";

/// Crop one line's worth of height off the screen element of an SVG file.
///
/// `total_lines` is the row count the recording was made at, including the
/// reserved prompt row. The file is rewritten in place.
pub fn crop_svg_file(path: &Path, total_lines: usize) -> Result<()> {
    let svg = fs::read_to_string(path)?;
    let cropped = crop_screen_height(&svg, total_lines)?;
    fs::write(path, cropped)?;
    Ok(())
}

/// Crop one line's worth of height off the screen element of an SVG document.
///
/// The new height is `height / total_lines * (total_lines - 1)` with integer
/// division, i.e. always an exact multiple of `total_lines - 1` line heights;
/// a height that does not divide evenly loses the remainder pixels. Only the
/// height attribute's value changes; the rest of the document is returned
/// byte-for-byte.
pub fn crop_screen_height(svg: &str, total_lines: usize) -> Result<String> {
    if total_lines == 0 {
        return Err(Error::InvalidLineCount { total_lines });
    }

    let doc = roxmltree::Document::parse(svg).map_err(|e| Error::SvgParseFailed {
        reason: e.to_string(),
    })?;

    let mut screens = doc
        .descendants()
        .filter(|node| node.attribute("id") == Some(SCREEN_ELEMENT_ID));
    let screen = screens.next().ok_or(Error::ScreenElementMissing)?;
    if screens.next().is_some() {
        return Err(Error::ScreenElementAmbiguous);
    }

    let attr = screen
        .attributes()
        .find(|attr| attr.name() == "height")
        .ok_or_else(|| Error::ScreenHeightInvalid {
            value: "<absent>".to_string(),
        })?;

    let height: u64 = attr
        .value()
        .trim()
        .parse()
        .map_err(|_| Error::ScreenHeightInvalid {
            value: attr.value().to_string(),
        })?;

    let lines = total_lines as u64;
    let cropped = height / lines * (lines - 1);

    // Splice the new value into the attribute's source span so the rest of
    // the document survives byte-for-byte.
    let (value_start, value_end) = attribute_value_span(svg, attr.position()..svg.len())
        .ok_or_else(|| Error::ScreenHeightInvalid {
            value: attr.value().to_string(),
        })?;
    let mut out = String::with_capacity(svg.len());
    out.push_str(&svg[..value_start]);
    out.push_str(&cropped.to_string());
    out.push_str(&svg[value_end..]);
    Ok(out)
}

/// Locate the quoted value of the attribute starting the given range.
///
/// The range begins at the attribute's source position, so the first quote
/// character in it opens the attribute's own value; the value ends at the
/// matching closing quote. A span without a quoted value cannot come from a
/// parsed document and yields `None`.
fn attribute_value_span(svg: &str, range: std::ops::Range<usize>) -> Option<(usize, usize)> {
    let slice = &svg[range.clone()];
    let open = slice.find(&['"', '\''][..])?;
    let quote = slice.as_bytes()[open];
    let close = slice[open + 1..].find(quote as char)?;
    Some((range.start + open + 1, range.start + open + 1 + close))
}
