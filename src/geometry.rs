//! Terminal geometry inference
//!
//! The minimal bounding box of an example's raw stdout text decides how
//! large a virtual terminal the recording tool needs. This is a heuristic:
//! it assumes the program prints roughly the same thing regardless of the
//! terminal it runs in, so a plain captured run approximates what it will
//! render at the configured width.

use std::fmt;

/// Minimal `(columns, rows)` bounding box of captured terminal output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Geometry {
    /// Length of the longest line, in characters
    pub columns: usize,
    /// Number of lines
    pub rows: usize,
}

impl Geometry {
    /// Infer the minimal geometry of captured output text.
    ///
    /// Columns is the maximum line length in characters (not bytes), rows is
    /// the line count. Empty output yields `(0, 0)`.
    pub fn infer(output: &str) -> Self {
        let mut columns = 0;
        let mut rows = 0;
        for line in output.lines() {
            columns = columns.max(line.chars().count());
            rows += 1;
        }
        Geometry { columns, rows }
    }

    /// Whether this output fits inside a terminal of the given column width
    pub fn fits_within(&self, columns: usize) -> bool {
        self.columns <= columns
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}
