//! docshots-png - generate terminal-session PNG images
//!
//! Builds every example program under the input directory, runs each one
//! through a PTY wrapper and a terminal-to-HTML converter, splices the
//! fragment into a styled HTML page, rasterizes it at a fixed pixel width,
//! and writes the validated PNG into the output directory.

use std::env;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{error, info};

use docshots::config::{ConfigFile, PngSettings};
use docshots::error::Result;
use docshots::generate::generate_pngs;
use docshots::preflight::{check_dependencies, PNG_TOOLS};

#[derive(Parser)]
#[command(name = "docshots-png")]
#[command(about = "Generate example png images from Go packages")]
#[command(version)]
struct Cli {
    /// Directory containing one Go package per example
    #[arg(long = "input_dir", value_name = "PATH")]
    input_dir: Option<PathBuf>,

    /// Directory where the generated png images are saved
    #[arg(long = "output_dir", value_name = "PATH")]
    output_dir: Option<PathBuf>,

    /// Stylesheet file embedded into the generated html
    #[arg(long, value_name = "FILE")]
    template: Option<PathBuf>,

    /// Width of the rasterized image, in pixels
    #[arg(long, value_name = "PIXELS")]
    width: Option<u32>,

    /// Optional TOML or JSON configuration file
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'd')]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(e) = check_dependencies(PNG_TOOLS) {
        error!("{}", e);
        process::exit(1);
    }

    let settings = match build_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    match generate_pngs(&settings) {
        Ok(count) => info!("Generated {} png image(s)", count),
        Err(e) => {
            error!("{}", e);
            process::exit(e.exit_code());
        }
    }
}

/// Defaults, overridden by the config file, overridden by flags
fn build_settings(cli: &Cli) -> Result<PngSettings> {
    let mut settings = PngSettings::default();

    if let Some(path) = &cli.config {
        settings.apply_file(&ConfigFile::load(path)?);
    }
    if let Some(input_dir) = &cli.input_dir {
        settings.input_dir = input_dir.clone();
    }
    if let Some(output_dir) = &cli.output_dir {
        settings.output_dir = output_dir.clone();
    }
    if let Some(stylesheet) = &cli.template {
        settings.stylesheet = stylesheet.clone();
    }
    if let Some(width) = cli.width {
        settings.width = width;
    }

    settings.validate()?;
    Ok(settings)
}

fn init_logging(debug: bool) {
    let default_level = if debug
        || env::var("DOCSHOTS_DEBUG").is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
    {
        "debug"
    } else {
        "info"
    };

    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_target(false)
        .compact()
        .init();
}
