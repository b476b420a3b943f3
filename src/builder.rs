//! Example compilation
//!
//! Examples are Go packages; each is compiled into a single binary in the
//! scratch directory before being recorded. A failing build aborts the whole
//! batch rather than skipping the example: a broken example means broken
//! documentation, not a cosmetic gap.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::discover::Example;
use crate::error::{Error, Result};

/// The compiler invoked for each example package
pub const COMPILER: &str = "go";

/// Name of the compiled binary inside the scratch directory.
///
/// The scratch directory is reused across examples within one run, so each
/// build overwrites the previous binary.
pub const SCRATCH_BINARY: &str = "main";

/// Compile one example into the scratch directory, returning the binary path
pub fn build_example(example: &Example, scratch: &Path) -> Result<PathBuf> {
    let binary = scratch.join(SCRATCH_BINARY);

    let status = Command::new(COMPILER)
        .arg("build")
        .arg("-o")
        .arg(&binary)
        .arg(&example.path)
        .stdout(Stdio::null())
        .status()
        .map_err(|e| Error::CommandSpawnFailed {
            command: COMPILER.to_string(),
            reason: e.to_string(),
        })?;

    if !status.success() {
        return Err(Error::BuildFailed {
            example: example.name.clone(),
            code: status.code(),
        });
    }

    Ok(binary)
}
