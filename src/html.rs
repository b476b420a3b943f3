//! HTML compositing and PNG validation
//!
//! The PNG pipeline converts captured terminal output into an HTML fragment
//! (via external filters) and splices that fragment into a minimal document
//! with the configured stylesheet inlined. The composed document is what the
//! rasterizer renders; the bytes it returns are decoded once to confirm they
//! really are a PNG before anything is written to the output directory.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Read the stylesheet file that gets embedded into every generated page
pub fn load_stylesheet(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::StylesheetLoadFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Splice a terminal-output HTML fragment into the page template
pub fn compose_document(fragment: &str, stylesheet: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\"/>\n\
         <style>\n{stylesheet}\n</style>\n\
         </head>\n\
         <body>\n{fragment}\n</body>\n\
         </html>\n"
    )
}

/// Decode rasterizer output to confirm it is a valid PNG.
///
/// Garbage from a misconfigured rasterizer must halt the run instead of
/// landing in the output directory as a broken artifact.
pub fn validate_png(bytes: &[u8]) -> Result<()> {
    image::load_from_memory_with_format(bytes, image::ImageFormat::Png).map_err(|e| {
        Error::PngDecodeFailed {
            reason: e.to_string(),
        }
    })?;
    Ok(())
}
