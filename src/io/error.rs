//! Error types for generation and output operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum GenerationError {
    /// Seed reduced to zero, which is a fixed point of the xorshift transform
    InvalidSeed {
        /// The rejected seed value
        value: u32,
    },

    /// Sampling urn created over an empty backing collection
    EmptyCollection,

    /// No palette with the required number of distinct colors is available
    PaletteUnavailable {
        /// Number of distinct colors a usable palette must hold
        required: usize,
    },

    /// Pattern selection retried past its bound without finding an
    /// applicable pattern
    ///
    /// Only reachable with a catalog that lacks an always-applicable entry;
    /// surfaced as a fatal pass error rather than looping forever.
    PredicateDeadlock {
        /// Grid column of the placement being decided
        column: usize,
        /// Grid row of the placement being decided
        row: usize,
        /// Number of selection attempts made
        attempts: usize,
    },

    /// Color value is not a `#rrggbb` hex string
    InvalidColor {
        /// The malformed value
        value: String,
    },

    /// Palette file could not be parsed as JSON
    PaletteFile {
        /// Path to the palette file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSeed { value } => {
                write!(
                    f,
                    "Seed must be a non-zero 32 bit unsigned value, got {value}"
                )
            }
            Self::EmptyCollection => {
                write!(f, "Urn requires at least one item")
            }
            Self::PaletteUnavailable { required } => {
                write!(
                    f,
                    "No palette with exactly {required} distinct colors available"
                )
            }
            Self::PredicateDeadlock {
                column,
                row,
                attempts,
            } => {
                write!(
                    f,
                    "No applicable pattern for cell ({column}, {row}) after {attempts} attempts"
                )
            }
            Self::InvalidColor { value } => {
                write!(f, "Invalid color '{value}' (expected #rrggbb)")
            }
            Self::PaletteFile { path, source } => {
                write!(
                    f,
                    "Failed to parse palette file '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::PaletteFile { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

impl From<std::io::Error> for GenerationError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create a file system error with path and operation context
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> GenerationError {
    GenerationError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
