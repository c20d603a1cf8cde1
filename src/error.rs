//! Error types for planning, range and stream operations.

use thiserror::Error;

/// Error codes surfaced by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Bad part count or part size, or the part ceiling was exceeded.
    InvalidArgument,
    /// The local file does not exist.
    NotFound,
    /// Open, stat, read or seek failure.
    IoError,
    /// Malformed range expression.
    InvalidRange,
    /// The reader exposes neither a length nor a seek capability.
    UnsupportedType,
    InvalidBucketName,
    InvalidObjectName,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidArgument => "InvalidArgument",
            ErrorCode::NotFound => "NotFound",
            ErrorCode::IoError => "IoError",
            ErrorCode::InvalidRange => "InvalidRange",
            ErrorCode::UnsupportedType => "UnsupportedType",
            ErrorCode::InvalidBucketName => "InvalidBucketName",
            ErrorCode::InvalidObjectName => "InvalidObjectName",
        }
    }

    /// Returns the default message for this error code.
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::InvalidArgument => "An argument is out of its accepted range.",
            ErrorCode::NotFound => "The specified file does not exist.",
            ErrorCode::IoError => "An I/O operation failed.",
            ErrorCode::InvalidRange => "The range specified is invalid.",
            ErrorCode::UnsupportedType => "can't get reader content length,unkown reader type",
            ErrorCode::InvalidBucketName => "The specified bucket name is invalid.",
            ErrorCode::InvalidObjectName => "The specified object name is invalid.",
        }
    }

    /// Whether an operation failing with this code may succeed when repeated.
    ///
    /// Only I/O failures are transient; bad arguments and malformed ranges
    /// fail the same way every time.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCode::IoError)
    }
}

/// Transfer error with code and message.
///
/// `Display` prints the message alone so that messages consumers match on
/// (`"InvalidRange bytes=M-N"`, propagated seek errors) come through verbatim.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransferError {
    pub code: ErrorCode,
    pub message: String,
    #[source]
    pub source: Option<std::io::Error>,
}

impl TransferError {
    /// Creates a new error with the given code and default message.
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.default_message().to_string(),
            code,
            source: None,
        }
    }

    /// Creates a new error with a custom message.
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Wraps an I/O error, keeping its message unchanged.
    pub fn from_io(err: std::io::Error) -> Self {
        let code = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::NotFound,
            _ => ErrorCode::IoError,
        };
        Self {
            code,
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Shorthand for `self.code.is_retryable()`.
    pub fn is_retryable(&self) -> bool {
        self.code.is_retryable()
    }

    /// Kind of the underlying I/O error, if this error wraps one.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        self.source.as_ref().map(|e| e.kind())
    }
}

impl From<std::io::Error> for TransferError {
    fn from(err: std::io::Error) -> Self {
        Self::from_io(err)
    }
}

/// Result type alias for transfer helpers.
pub type TransferResult<T> = Result<T, TransferError>;
