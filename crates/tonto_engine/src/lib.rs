//! Reference resolution and ontology design pattern validation for TONTO.
//!
//! This crate provides:
//! - [`resolve`] - Duplicate and unresolved name diagnostics
//! - [`SpecializationIndex`] - Derived parent/child/genset lookups
//! - [`RULES`] - The six pattern rules
//! - [`validate`] - Pattern evaluation producing [`PatternResult`]s
//! - [`suggestion`] - Correction generators

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod index;
pub mod pattern;
pub mod resolve;
pub mod rule;
pub mod suggestion;
pub mod validator;

pub use index::SpecializationIndex;
pub use pattern::{PatternKind, PatternResult, PatternStatus};
pub use resolve::{PRIMITIVE_TYPES, resolve};
pub use rule::{Expect, GensetShape, RULES, Rule, check_genset};
pub use suggestion::Suggestion;
pub use validator::{validate, validate_with};
