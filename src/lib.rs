//! docshots - terminal-session images for documentation
//!
//! This library backs two small command-line utilities, `docshots-svg` and
//! `docshots-png`, which turn a directory of example programs into
//! illustrative terminal-session images. Each example is compiled, run to
//! capture its output, recorded or rasterized by external tools, and the
//! resulting image is post-processed and copied into an assets directory.
//!
//! The heavy lifting — compilation, terminal recording, rasterization — is
//! delegated to external processes. This crate is the orchestration around
//! them: discovery, geometry inference, subprocess pipelines, SVG cropping,
//! HTML compositing.
//!
//! ## Module Organization
//!
//! ### Core Functionality
//!
//! - [`config`] - Settings objects, defaults, config file loading
//! - [`discover`] - Example discovery from the input directory
//! - [`geometry`] - Minimal terminal geometry inference
//! - [`generate`] - The SVG and PNG batch orchestrators
//! - [`mod@error`] - Error types and Result aliases
//!
//! ### Subprocess Plumbing
//!
//! - [`preflight`] - Fail-fast probing for required external tools
//! - [`builder`] - Compiling examples with the Go toolchain
//! - [`exec`] - Output capture and staged subprocess pipelines
//! - [`record`] - termtosvg invocation
//!
//! ### Post-Processing
//!
//! - [`svg`] - One-shot screen-area crop of recorded SVGs
//! - [`html`] - HTML document compositing and PNG validation
//!
//! ## Execution Model
//!
//! Fully sequential and blocking: examples are processed one at a time, and
//! every step runs to completion before the next begins. There are no
//! retries and no per-example isolation — the first failure aborts the
//! batch. A missing external tool is caught by the preflight gate before
//! any work happens.

#[macro_use]
extern crate tracing;

pub mod builder;
pub mod config;
pub mod discover;
pub mod error;
pub mod exec;
pub mod generate;
pub mod geometry;
pub mod html;
pub mod preflight;
pub mod record;
pub mod svg;

// Re-exports for core functionality
pub use config::{ConfigFile, PngSettings, SvgSettings};
pub use discover::Example;
pub use error::{Error, Result};
pub use generate::{generate_pngs, generate_svgs};
pub use geometry::Geometry;

// Version information
/// The current version of docshots from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");
