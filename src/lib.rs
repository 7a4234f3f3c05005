//! TONTO - Front-end compiler for the TONTO ontology language
//!
//! This crate re-exports all layers of the TONTO toolchain for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: tonto_runtime    — Pipeline, aggregation, reports, shell, CLI
//! Layer 2: tonto_engine     — Reference resolution, pattern validation
//! Layer 1: tonto_language   — Lexer, parser, AST, source printer
//! Layer 0: tonto_foundation — Diagnostics, phases, errors
//! ```

pub use tonto_engine as engine;
pub use tonto_foundation as foundation;
pub use tonto_language as language;
pub use tonto_runtime as runtime;

pub use tonto_runtime::{AnalysisResult, analyze};
