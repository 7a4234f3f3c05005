//! Analysis pipeline, reports, shell, and CLI for TONTO.
//!
//! This crate provides:
//! - [`analyze`] - The full pipeline from source text to [`AnalysisResult`]
//! - [`aggregate`] - Merging per-phase diagnostics into one ordered list
//! - [`report`] - Text and JSON reports plus batch exit statuses
//! - [`Repl`] - Interactive shell over a [`Session`]
//! - [`serialize`] - `MessagePack` snapshots of an analysis
//!
//! # Example
//!
//! ```
//! use tonto_runtime::analyze;
//!
//! let result = analyze("kind Pessoa\nrole Aluno specializes Pessoa").unwrap();
//! assert_eq!(result.document.declaration_count(), 2);
//! assert_eq!(result.violated().count(), 1);
//! assert!(!result.has_errors());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod aggregate;
pub mod analysis;
pub mod config;
pub mod editor;
pub mod highlight;
pub mod repl;
pub mod report;
pub mod serialize;
pub mod session;

pub use aggregate::{aggregate, violation_diagnostics};
pub use analysis::{AnalysisResult, PatternCount, Summary, analyze, analyze_with};
pub use config::{OutputFormat, ReportConfig};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use highlight::TontoHighlighter;
pub use repl::{Command, Outcome, Repl};
pub use report::{ExitStatus, render};
pub use serialize::{from_bytes, load_from_file, save_to_file, to_bytes};
pub use session::{CancelFlag, Session};
