//! Example discovery
//!
//! Every immediate subdirectory of the input directory is one example
//! program. Files at the top level are ignored; nesting below the first
//! level is the example's own business. No ordering is guaranteed.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// One example program, identified by its source directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    /// Path to the example's source directory
    pub path: PathBuf,
    /// Name derived from the directory name; also names the artifact
    pub name: String,
}

/// Scan the input directory for example subdirectories.
///
/// Propagates an error if the input directory does not exist or cannot be
/// read.
pub fn discover_examples(input_dir: &Path) -> Result<Vec<Example>> {
    let mut examples = Vec::new();
    for entry in fs::read_dir(input_dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            examples.push(Example {
                path: entry.path(),
                name: entry.file_name().to_string_lossy().into_owned(),
            });
        }
    }
    debug!("Discovered {} example(s) in {}", examples.len(), input_dir.display());
    Ok(examples)
}
