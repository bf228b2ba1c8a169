//! Error types for board construction, input parsing and trace export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all solver and export operations
#[derive(Debug)]
pub enum QueensError {
    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A square given in board notation could not be parsed
    InvalidSquare {
        /// Raw user input
        input: String,
        /// Explanation of why the square was rejected
        reason: String,
    },

    /// Export was requested for a trace with nothing to show
    ///
    /// Occurs when:
    /// - The step sequence is empty
    /// - A solution sheet is requested but no solution was found
    EmptyTrace {
        /// What was being exported
        artifact: &'static str,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Failed to serialize the step trace
    Serialization {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying serializer error
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

impl fmt::Display for QueensError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidSquare { input, reason } => {
                write!(f, "Invalid square '{input}': {reason}")
            }
            Self::EmptyTrace { artifact } => {
                write!(f, "Nothing to export for {artifact}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { path, source } => {
                write!(
                    f,
                    "Failed to serialize trace to '{}': {source}",
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

impl std::error::Error for QueensError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, QueensError>;

// In-memory serialization has no destination path
impl From<serde_json::Error> for QueensError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            path: PathBuf::from("<memory>"),
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> QueensError {
    QueensError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid square error
pub fn invalid_square(input: &str, reason: &impl ToString) -> QueensError {
    QueensError::InvalidSquare {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}
