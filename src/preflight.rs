//! Dependency preflight
//!
//! Both pipelines lean entirely on external tools, so each run starts by
//! probing for every tool it will need. A probe spawns the tool with a
//! harmless help-style flag and discards its output; only "executable not
//! found" counts as absence — a tool whose help flag exits non-zero still
//! exists. Any missing tool aborts the run before discovery or builds, with
//! an install hint per tool. This is a fail-fast gate, not an installer.

use std::io::ErrorKind;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// One required external tool and how to probe for it
#[derive(Debug, Clone, Copy)]
pub struct Tool {
    /// Program name as spawned
    pub program: &'static str,
    /// Arguments for a harmless probe invocation
    pub probe_args: &'static [&'static str],
    /// Shown to the user when the tool is missing
    pub install_hint: &'static str,
}

const GO: Tool = Tool {
    program: "go",
    probe_args: &["version"],
    install_hint: "install the Go toolchain from https://go.dev/dl",
};

/// Tools the SVG pipeline requires
pub const SVG_TOOLS: &[Tool] = &[
    GO,
    Tool {
        program: "termtosvg",
        probe_args: &["--help"],
        install_hint: "install it with `pip3 install termtosvg`",
    },
];

/// Tools the PNG pipeline requires
pub const PNG_TOOLS: &[Tool] = &[
    GO,
    Tool {
        program: "faketty",
        probe_args: &["--help"],
        install_hint: "install it with `cargo install faketty`",
    },
    Tool {
        program: "aha",
        probe_args: &["--help"],
        install_hint: "install it with your system package manager (e.g. `apt install aha`)",
    },
    Tool {
        program: "wkhtmltoimage",
        probe_args: &["--version"],
        install_hint: "install the wkhtmltopdf package from https://wkhtmltopdf.org",
    },
];

/// Probe every tool, reporting all that are missing before failing.
///
/// Returns [`Error::MissingDependencies`] naming each absent tool; the
/// caller exits with status 1 without doing any work.
pub fn check_dependencies(tools: &[Tool]) -> Result<()> {
    let mut missing = Vec::new();

    for tool in tools {
        if tool_exists(tool) {
            debug!("Found required tool '{}'", tool.program);
        } else {
            error!("'{}' not found: {}", tool.program, tool.install_hint);
            missing.push(tool.program.to_string());
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::MissingDependencies { tools: missing })
    }
}

/// Whether a tool can be spawned at all
fn tool_exists(tool: &Tool) -> bool {
    match Command::new(tool.program)
        .args(tool.probe_args)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
    {
        Ok(_) => true,
        Err(e) if e.kind() == ErrorKind::NotFound => false,
        // Spawned but something else went wrong; the tool is installed,
        // which is all this gate checks.
        Err(_) => true,
    }
}
