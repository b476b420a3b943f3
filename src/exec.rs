//! Subprocess execution
//!
//! All the heavy lifting in docshots happens in child processes. This module
//! provides the two ways they are driven:
//!
//! - [`capture_output`] runs a built example binary once and captures its
//!   stdout as text, for geometry inference. The exit status is deliberately
//!   ignored; a demo program that exits non-zero still produced the output
//!   we want to measure.
//! - [`Pipeline`] chains stages where each stage's stdout feeds the next
//!   stage's stdin. A stage exiting non-zero fails the whole pipeline.
//!
//! Everything is blocking: examples are processed one at a time and each
//! child runs to completion before the next starts.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;

use crate::error::{Error, Result};

/// One stage of a subprocess pipeline
#[derive(Debug, Clone)]
pub struct Stage {
    /// Program to invoke
    pub program: String,
    /// Arguments passed to the program
    pub args: Vec<String>,
}

impl Stage {
    /// Create a stage for the given program
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append an argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

/// A sequence of stages, each consuming the previous stage's output bytes
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    stages: Vec<Stage>,
}

impl Pipeline {
    /// Create an empty pipeline
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stage
    pub fn stage(mut self, stage: Stage) -> Self {
        self.stages.push(stage);
        self
    }

    /// Run the pipeline, feeding `input` into the first stage.
    ///
    /// Returns the final stage's stdout bytes. Fails with
    /// [`Error::StageFailed`] on the first stage that exits non-zero.
    pub fn run(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut bytes = input.to_vec();
        for stage in &self.stages {
            bytes = run_stage(stage, bytes)?;
        }
        Ok(bytes)
    }
}

/// Run one stage to completion, returning its stdout bytes.
///
/// Stdin is fed from a dedicated writer thread so a stage that starts
/// emitting output before it has drained its input cannot deadlock against
/// us.
fn run_stage(stage: &Stage, input: Vec<u8>) -> Result<Vec<u8>> {
    let mut child = Command::new(&stage.program)
        .args(&stage.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| Error::CommandSpawnFailed {
            command: stage.program.clone(),
            reason: e.to_string(),
        })?;

    let writer = child.stdin.take().map(|mut stdin| {
        thread::spawn(move || {
            // The child may exit without reading everything; a broken pipe
            // here is its report to make, not ours.
            let _ = stdin.write_all(&input);
        })
    });

    let output = child.wait_with_output()?;
    if let Some(writer) = writer {
        let _ = writer.join();
    }

    if !output.status.success() {
        return Err(Error::StageFailed {
            program: stage.program.clone(),
            code: output.status.code(),
        });
    }

    Ok(output.stdout)
}

/// Run a built example binary once and capture its stdout as text.
///
/// Stderr is discarded and the exit status is ignored: this run only exists
/// to measure the output's geometry.
pub fn capture_output(binary: &Path) -> Result<String> {
    let output = Command::new(binary)
        .stderr(Stdio::null())
        .output()
        .map_err(|e| Error::CaptureFailed {
            command: binary.display().to_string(),
            reason: e.to_string(),
        })?;

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
