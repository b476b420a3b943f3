//! Configuration
//!
//! Both utilities build one immutable settings object at startup: compiled-in
//! defaults, optionally overridden by a TOML or JSON configuration file,
//! finally overridden by command-line flags. The settings object is passed
//! explicitly to every operation; nothing reads defaults at call time.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
}

impl ConfigFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(ConfigFormat::Toml),
            Some("json") => Ok(ConfigFormat::Json),
            _ => Err(Error::UnsupportedConfigFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Partial configuration as read from a file.
///
/// Every field is optional; absent fields keep their defaults. SVG-only and
/// PNG-only fields live in the same file so one file can configure both
/// utilities.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Directory containing one subdirectory per example
    pub input_dir: Option<PathBuf>,
    /// Destination directory for generated artifacts
    pub output_dir: Option<PathBuf>,
    /// termtosvg template name (SVG pipeline)
    pub template: Option<String>,
    /// Stylesheet file embedded into the generated HTML (PNG pipeline)
    pub stylesheet: Option<PathBuf>,
    /// Terminal width in character columns (SVG pipeline)
    pub cols: Option<u16>,
    /// Image width in pixels (PNG pipeline)
    pub width: Option<u32>,
}

impl ConfigFile {
    /// Load a configuration file, picking the parser from the extension
    pub fn load(path: &Path) -> Result<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = fs::read_to_string(path).map_err(|e| Error::ConfigLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        match format {
            ConfigFormat::Toml => {
                toml::from_str(&content).map_err(|e| Error::ConfigParseFailed {
                    format: "TOML".to_string(),
                    reason: e.to_string(),
                })
            }
            ConfigFormat::Json => {
                serde_json::from_str(&content).map_err(|e| Error::ConfigParseFailed {
                    format: "JSON".to_string(),
                    reason: e.to_string(),
                })
            }
        }
    }
}

/// Settings for the SVG pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct SvgSettings {
    /// Directory containing one subdirectory per example
    pub input_dir: PathBuf,
    /// Destination directory for the generated SVG images
    pub output_dir: PathBuf,
    /// termtosvg template used for the recording
    pub template: String,
    /// Width of the recorded terminal, in character columns
    pub cols: u16,
}

impl Default for SvgSettings {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("../examples"),
            output_dir: PathBuf::from("../assets/svg"),
            template: "gjm8".to_string(),
            cols: 120,
        }
    }
}

impl SvgSettings {
    /// Overlay values from a configuration file
    pub fn apply_file(&mut self, file: &ConfigFile) {
        if let Some(input_dir) = &file.input_dir {
            self.input_dir = input_dir.clone();
        }
        if let Some(output_dir) = &file.output_dir {
            self.output_dir = output_dir.clone();
        }
        if let Some(template) = &file.template {
            self.template = template.clone();
        }
        if let Some(cols) = file.cols {
            self.cols = cols;
        }
    }

    /// Validate the final settings
    pub fn validate(&self) -> Result<()> {
        if self.cols == 0 {
            return Err(Error::ConfigValidationFailed {
                field: "cols".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

/// Settings for the PNG pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct PngSettings {
    /// Directory containing one subdirectory per example
    pub input_dir: PathBuf,
    /// Destination directory for the generated PNG images
    pub output_dir: PathBuf,
    /// Stylesheet file whose contents are embedded into the generated HTML
    pub stylesheet: PathBuf,
    /// Width of the rasterized image, in pixels
    pub width: u32,
}

impl Default for PngSettings {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("../examples"),
            output_dir: PathBuf::from("../assets/png"),
            stylesheet: PathBuf::from("style.css"),
            width: 800,
        }
    }
}

impl PngSettings {
    /// Overlay values from a configuration file
    pub fn apply_file(&mut self, file: &ConfigFile) {
        if let Some(input_dir) = &file.input_dir {
            self.input_dir = input_dir.clone();
        }
        if let Some(output_dir) = &file.output_dir {
            self.output_dir = output_dir.clone();
        }
        if let Some(stylesheet) = &file.stylesheet {
            self.stylesheet = stylesheet.clone();
        }
        if let Some(width) = file.width {
            self.width = width;
        }
    }

    /// Validate the final settings
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(Error::ConfigValidationFailed {
                field: "width".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
