//! Error types for the converter.
//!
//! Every failure is terminal for the run; the enum exists so the top-level
//! handler can pick the right message and exit code, not for recovery.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the converter library.
#[derive(Debug, Error)]
pub enum Error {
    /// Supplied input path does not exist.
    #[error("specified file does not exist: {}", .0.display())]
    FileNotFound(PathBuf),

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    Xml(#[from] roxmltree::Error),

    /// Root marker element absent.
    #[error("wrong input file format: missing {expected} as root element (found <{found}>)")]
    WrongRoot { expected: &'static str, found: String },

    /// Required XML attribute absent.
    #[error("missing {attribute} attribute on <{element}> in region '{region}'")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
        region: String,
    },

    /// Malformed CIDR subnet string.
    #[error("invalid subnet '{value}': {reason}")]
    InvalidSubnet { value: String, reason: String },

    /// Prefix length beyond 32 bits.
    #[error("Network length is too long: /{0}")]
    PrefixTooLong(u8),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit code for this failure: 1 for argument/environment
    /// problems, 2 for input-format problems.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::FileNotFound(_) | Error::Io(_) => 1,
            Error::Xml(_)
            | Error::WrongRoot { .. }
            | Error::MissingAttribute { .. }
            | Error::InvalidSubnet { .. }
            | Error::PrefixTooLong(_) => 2,
        }
    }
}

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, Error>;
