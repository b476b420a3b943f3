//! Error types and Result aliases for docshots

use std::fmt;
use std::path::PathBuf;

/// Result type alias for docshots operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for docshots
#[derive(Debug)]
pub enum Error {
    // === Dependency preflight errors ===
    /// One or more required external tools are not installed
    MissingDependencies {
        tools: Vec<String>,
    },

    // === Subprocess errors ===
    /// Failed to spawn an external command
    CommandSpawnFailed {
        command: String,
        reason: String,
    },

    /// Failed to capture output from a built example binary
    CaptureFailed {
        command: String,
        reason: String,
    },

    /// Compiling an example package failed
    BuildFailed {
        example: String,
        code: Option<i32>,
    },

    /// The terminal recording tool exited with an error
    RecordFailed {
        example: String,
        code: Option<i32>,
    },

    /// A pipeline stage exited with a non-zero status
    StageFailed {
        program: String,
        code: Option<i32>,
    },

    // === SVG post-processing errors ===
    /// The recorded SVG could not be parsed as XML
    SvgParseFailed {
        reason: String,
    },

    /// No element with the reserved screen-area id was found
    ScreenElementMissing,

    /// More than one element carries the reserved screen-area id
    ScreenElementAmbiguous,

    /// The screen element's height attribute is absent or not numeric
    ScreenHeightInvalid {
        value: String,
    },

    /// The crop transform was given a line count it cannot divide by
    InvalidLineCount {
        total_lines: usize,
    },

    // === PNG post-processing errors ===
    /// The rasterizer's output did not decode as a PNG image
    PngDecodeFailed {
        reason: String,
    },

    /// The stylesheet file for the HTML template could not be read
    StylesheetLoadFailed {
        path: PathBuf,
        reason: String,
    },

    // === Configuration errors ===
    /// Failed to load configuration file
    ConfigLoadFailed {
        path: PathBuf,
        reason: String,
    },

    /// Failed to parse configuration
    ConfigParseFailed {
        format: String,
        reason: String,
    },

    /// Configuration validation failed
    ConfigValidationFailed {
        field: String,
        reason: String,
    },

    /// Configuration file extension is not a supported format
    UnsupportedConfigFormat {
        path: PathBuf,
    },

    // === I/O and serialization errors (kept for compatibility) ===
    /// I/O errors
    Io(std::io::Error),

    /// Serialization errors
    Serde(serde_json::Error),

    /// TOML parsing errors
    Toml(toml::de::Error),

    // === Generic fallback (use sparingly) ===
    /// Generic errors (for cases not yet categorized)
    Other(String),
}

impl Error {
    /// Process exit code for this error.
    ///
    /// Preflight failures exit with 1; subprocess failures propagate the
    /// child's exit status when one is available.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::MissingDependencies { .. } => 1,
            Error::BuildFailed { code, .. }
            | Error::RecordFailed { code, .. }
            | Error::StageFailed { code, .. } => code.unwrap_or(1),
            _ => 1,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Dependency preflight errors
            Error::MissingDependencies { tools } => {
                write!(f, "Required tools are missing: {}", tools.join(", "))
            }

            // Subprocess errors
            Error::CommandSpawnFailed { command, reason } => {
                write!(f, "Failed to spawn command '{}': {}", command, reason)
            }
            Error::CaptureFailed { command, reason } => {
                write!(f, "Failed to capture output of '{}': {}", command, reason)
            }
            Error::BuildFailed { example, code } => match code {
                Some(code) => {
                    write!(f, "Build failed for example '{}' (exit code {})", example, code)
                }
                None => write!(f, "Build failed for example '{}' (terminated by signal)", example),
            },
            Error::RecordFailed { example, code } => match code {
                Some(code) => write!(
                    f,
                    "Recording failed for example '{}' (exit code {})",
                    example, code
                ),
                None => write!(
                    f,
                    "Recording failed for example '{}' (terminated by signal)",
                    example
                ),
            },
            Error::StageFailed { program, code } => match code {
                Some(code) => {
                    write!(f, "Pipeline stage '{}' failed (exit code {})", program, code)
                }
                None => write!(f, "Pipeline stage '{}' terminated by signal", program),
            },

            // SVG post-processing errors
            Error::SvgParseFailed { reason } => {
                write!(f, "Failed to parse recorded SVG: {}", reason)
            }
            Error::ScreenElementMissing => {
                write!(f, "No element with id 'screen' found in the recorded SVG")
            }
            Error::ScreenElementAmbiguous => {
                write!(f, "Multiple elements with id 'screen' found in the recorded SVG")
            }
            Error::ScreenHeightInvalid { value } => {
                write!(f, "Screen element height '{}' is not a valid integer", value)
            }
            Error::InvalidLineCount { total_lines } => {
                write!(f, "Cannot crop an image recorded with {} lines", total_lines)
            }

            // PNG post-processing errors
            Error::PngDecodeFailed { reason } => {
                write!(f, "Rasterizer output is not a valid PNG: {}", reason)
            }
            Error::StylesheetLoadFailed { path, reason } => {
                write!(f, "Failed to read stylesheet '{}': {}", path.display(), reason)
            }

            // Configuration errors
            Error::ConfigLoadFailed { path, reason } => {
                write!(f, "Failed to load config from '{}': {}", path.display(), reason)
            }
            Error::ConfigParseFailed { format, reason } => {
                write!(f, "Failed to parse {} config: {}", format, reason)
            }
            Error::ConfigValidationFailed { field, reason } => {
                write!(f, "Configuration validation failed for '{}': {}", field, reason)
            }
            Error::UnsupportedConfigFormat { path } => {
                write!(
                    f,
                    "Unsupported config format for '{}' (expected .toml or .json)",
                    path.display()
                )
            }

            // I/O and serialization errors
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::Serde(err) => write!(f, "Serialization error: {}", err),
            Error::Toml(err) => write!(f, "TOML parsing error: {}", err),

            // Generic fallback
            Error::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serde(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Toml(err)
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err.to_string())
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Other(err)
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::Other(err.to_string())
    }
}
