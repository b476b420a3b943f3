//! docshots-svg - generate terminal-session SVG images
//!
//! Builds every example program under the input directory, records each one
//! with termtosvg at its inferred geometry, crops the reserved prompt line
//! off the recording, and copies the result into the output directory.

use std::env;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{error, info};

use docshots::config::{ConfigFile, SvgSettings};
use docshots::error::Result;
use docshots::generate::generate_svgs;
use docshots::preflight::{check_dependencies, SVG_TOOLS};

#[derive(Parser)]
#[command(name = "docshots-svg")]
#[command(about = "Generate example svg images from Go packages")]
#[command(version)]
struct Cli {
    /// Directory containing one Go package per example
    #[arg(long = "input_dir", value_name = "PATH")]
    input_dir: Option<PathBuf>,

    /// Directory where the generated svg images are saved
    #[arg(long = "output_dir", value_name = "PATH")]
    output_dir: Option<PathBuf>,

    /// termtosvg template used for the recording
    #[arg(long, value_name = "NAME")]
    template: Option<String>,

    /// Width of the recorded terminal, in character columns
    #[arg(long, value_name = "COLS")]
    cols: Option<u16>,

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

    if let Err(e) = check_dependencies(SVG_TOOLS) {
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

    match generate_svgs(&settings) {
        Ok(count) => info!("Generated {} svg image(s)", count),
        Err(e) => {
            error!("{}", e);
            process::exit(e.exit_code());
        }
    }
}

/// Defaults, overridden by the config file, overridden by flags
fn build_settings(cli: &Cli) -> Result<SvgSettings> {
    let mut settings = SvgSettings::default();

    if let Some(path) = &cli.config {
        settings.apply_file(&ConfigFile::load(path)?);
    }
    if let Some(input_dir) = &cli.input_dir {
        settings.input_dir = input_dir.clone();
    }
    if let Some(output_dir) = &cli.output_dir {
        settings.output_dir = output_dir.clone();
    }
    if let Some(template) = &cli.template {
        settings.template = template.clone();
    }
    if let Some(cols) = cli.cols {
        settings.cols = cols;
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
