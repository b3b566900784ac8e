use miette::Diagnostic;
use thiserror::Error;

/// Main error type for padding operations
#[derive(Error, Diagnostic, Debug)]
pub enum PaddingError {
    #[error("{usage}")]
    #[diagnostic(code(padding::usage))]
    Usage { usage: String },

    #[error("Invalid argument: {message}")]
    #[diagnostic(code(padding::argument))]
    Argument {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Geometry error: {message}")]
    #[diagnostic(code(padding::geometry))]
    Geometry {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Failed to read {path}: {message}")]
    #[diagnostic(code(padding::decode))]
    Decode {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Failed to write {path}: {message}")]
    #[diagnostic(code(padding::encode))]
    Encode {
        path: std::path::PathBuf,
        message: String,
    },
}

impl PaddingError {
    /// Process exit status for this class of failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            PaddingError::Usage { .. } => 1,
            PaddingError::Argument { .. } => 2,
            PaddingError::Geometry { .. } => 3,
            PaddingError::Decode { .. } => 4,
            PaddingError::Encode { .. } => 5,
        }
    }
}

pub type Result<T> = std::result::Result<T, PaddingError>;
