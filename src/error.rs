//! Error types for the respell library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`RespellError`] enum. Loading errors (malformed transition tables,
//! unreadable dictionary files) are distinguished from search-time
//! conditions (cancellation, exceeded budgets); a search that exhausts its
//! space without reaching the dictionary is *not* an error — see
//! [`Corrector::correct`](crate::correction::corrector::Corrector::correct).
//!
//! # Examples
//!
//! ```
//! use respell::error::{RespellError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(RespellError::format(3, "expected 3 tab-separated fields"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for respell operations.
#[derive(Error, Debug)]
pub enum RespellError {
    /// I/O errors (reading transition tables or dictionary files).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A transition-table line that cannot be parsed. The whole load
    /// aborts; there are no partial loads.
    #[error("format error at line {line}: {message}")]
    Format { line: usize, message: String },

    /// Search aborted via a cancellation flag.
    #[error("operation cancelled: {0}")]
    OperationCancelled(String),

    /// Search aborted because a configured budget was exceeded.
    #[error("resource exhausted: {0}")]
    ResourceExhausted(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with RespellError.
pub type Result<T> = std::result::Result<T, RespellError>;

impl RespellError {
    /// Create a new format error for the given 1-based line number.
    pub fn format<S: Into<String>>(line: usize, message: S) -> Self {
        RespellError::Format {
            line,
            message: message.into(),
        }
    }

    /// Create a new cancellation error.
    pub fn cancelled<S: Into<String>>(msg: S) -> Self {
        RespellError::OperationCancelled(msg.into())
    }

    /// Create a new resource-exhausted error.
    pub fn resource_exhausted<S: Into<String>>(msg: S) -> Self {
        RespellError::ResourceExhausted(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        RespellError::Other(msg.into())
    }
}
