//! Error vocabulary shared by every stage of prompt generation.
//!
//! Failures are classified into a small, stable set of [`ErrorKind`]s so that callers (for
//! example a web layer) can map them to user-facing messages and decide whether a retry makes
//! sense, without parsing error strings.
//!
//! ```rust
//! use imageprompt::error::{ErrorKind, PromptError};
//!
//! let err = PromptError::not_found("Image file not found: /tmp/missing.png");
//! assert_eq!(err.kind(), ErrorKind::NotFound);
//! assert!(!err.kind().is_retryable());
//! ```

use std::error::Error;
use std::fmt;
use std::io;

/// Classification of a failed prompt generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or missing image reference, unsupported scheme, bad configuration.
    InvalidInput,
    /// The local image content does not exist.
    NotFound,
    /// The model call failed: network, authentication, or a malformed response.
    BackendError,
    /// The model call did not finish within the configured bound.
    Timeout,
}

impl ErrorKind {
    /// Whether repeating the same call could plausibly succeed.
    pub fn is_retryable(self) -> bool {
        matches!(self, ErrorKind::BackendError | ErrorKind::Timeout)
    }

    /// Stable snake_case name, suitable for logs and JSON envelopes.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::NotFound => "not_found",
            ErrorKind::BackendError => "backend_error",
            ErrorKind::Timeout => "timeout",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified failure carrying the original cause as its message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptError {
    kind: ErrorKind,
    message: String,
}

impl PromptError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        PromptError {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BackendError, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Timeout, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl Error for PromptError {}

impl From<io::Error> for PromptError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => PromptError::not_found(err.to_string()),
            _ => PromptError::invalid_input(err.to_string()),
        }
    }
}

/// Outcome of a prompt generation call: trimmed text or a classified failure.
pub type PromptResult<T = String> = Result<T, PromptError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_kinds() {
        assert!(ErrorKind::BackendError.is_retryable());
        assert!(ErrorKind::Timeout.is_retryable());
        assert!(!ErrorKind::InvalidInput.is_retryable());
        assert!(!ErrorKind::NotFound.is_retryable());
    }

    #[test]
    fn io_not_found_maps_to_not_found() {
        let err: PromptError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.message(), "gone");

        let err: PromptError = io::Error::new(io::ErrorKind::PermissionDenied, "nope").into();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn display_includes_kind_and_message() {
        let err = PromptError::timeout("model call exceeded 5s");
        assert_eq!(err.to_string(), "timeout: model call exceeded 5s");
    }
}
