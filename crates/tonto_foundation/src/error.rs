//! Error types for the TONTO front end.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! These errors are reserved for conditions that stop a run outright.
//! Lexical, syntactic and semantic problems in the analyzed source are
//! [`Diagnostic`](crate::Diagnostic) values, never errors.

use std::fmt;

use thiserror::Error;

use crate::diagnostic::Phase;

/// The main error type for TONTO operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates the error for a source unit with nothing to tokenize.
    #[must_use]
    pub fn empty_source() -> Self {
        Self::new(ErrorKind::EmptySource)
    }

    /// Creates the error for a run stopped before `phase` started.
    #[must_use]
    pub fn cancelled(phase: Phase) -> Self {
        Self::new(ErrorKind::Cancelled { phase })
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IoError(message.into()))
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument(message.into()))
    }

    /// Returns true if this error is a cancellation rather than a failure.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self.kind, ErrorKind::Cancelled { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The source unit is empty or contains only whitespace.
    #[error("source is empty: nothing to analyze")]
    EmptySource,

    /// A cancellable run was stopped at a phase boundary.
    #[error("analysis cancelled before the {phase} phase")]
    Cancelled {
        /// The phase that was not started.
        phase: Phase,
    },

    /// I/O error (file loading, snapshot writing).
    #[error("I/O error: {0}")]
    IoError(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Invalid command-line or session argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file being processed.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<u32>,
    /// Column number in source.
    pub column: Option<u32>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source file.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: u32, column: u32) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let (Some(line), Some(col)) = (self.line, self.column) {
                write!(f, ":{line}:{col}")?;
            }
        }
        Ok(())
    }
}

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;
