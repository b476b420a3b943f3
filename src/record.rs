//! Terminal session recording
//!
//! Delegates to the external `termtosvg` tool: it runs the built binary
//! inside a virtual terminal of an explicit geometry and writes an animated
//! SVG. The terminal is sized one row taller than the inferred output so the
//! recorder's initial prompt line has somewhere to live; the crop step
//! removes that row from the rendered height afterwards.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// The terminal-session recording tool
pub const RECORDER: &str = "termtosvg";

/// Record `binary` into `out_svg` at `cols × total_lines`.
///
/// `total_lines` must already include the extra prompt row. The recorder's
/// own output is discarded; only its exit status matters.
pub fn record_svg(
    example_name: &str,
    binary: &Path,
    out_svg: &Path,
    cols: u16,
    total_lines: usize,
    template: &str,
) -> Result<()> {
    let geometry = format!("{}x{}", cols, total_lines);

    let status = Command::new(RECORDER)
        .arg(out_svg)
        .arg("-c")
        .arg(binary)
        .arg("-g")
        .arg(&geometry)
        .arg("-t")
        .arg(template)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|e| Error::CommandSpawnFailed {
            command: RECORDER.to_string(),
            reason: e.to_string(),
        })?;

    if !status.success() {
        return Err(Error::RecordFailed {
            example: example_name.to_string(),
            code: status.code(),
        });
    }

    Ok(())
}
