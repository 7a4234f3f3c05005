//! Core error and diagnostic types for the TONTO front end.
//!
//! This crate provides:
//! - [`Error`] - Fatal errors with context (empty source, cancellation, I/O)
//! - [`Diagnostic`] - Collected lexical, syntactic and semantic findings
//! - [`Phase`] and [`Severity`] - Diagnostic classification

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod diagnostic;
pub mod error;

pub use diagnostic::{Diagnostic, Phase, Severity, codes, sort_diagnostics};
pub use error::{Error, ErrorContext, ErrorKind, Result};
