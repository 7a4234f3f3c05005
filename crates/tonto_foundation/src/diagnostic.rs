//! Diagnostics shared by every analysis phase.
//!
//! Each phase collects diagnostics instead of failing: the lexer and parser
//! always hand a best-effort result downstream together with the problems
//! they found, and the semantic layer reports pattern violations the same way.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The analysis phase that produced a diagnostic.
///
/// The derived ordering is the report priority for diagnostics on the same
/// line: lexical before syntactic before semantic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Phase {
    /// Tokenization.
    Lexical,
    /// Parsing.
    Syntactic,
    /// Reference resolution and pattern validation.
    Semantic,
}

impl Phase {
    /// Returns the lowercase name of this phase.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lexical => "lexical",
            Self::Syntactic => "syntactic",
            Self::Semantic => "semantic",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Severity {
    /// The source is malformed or references something that does not exist.
    Error,
    /// The source is well-formed but violates an advisory rule.
    Warning,
    /// Informational note.
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        })
    }
}

/// A diagnostic message with location.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diagnostic {
    /// Phase that produced this diagnostic.
    pub phase: Phase,
    /// Severity level.
    pub severity: Severity,
    /// 1-based source line.
    pub line: u32,
    /// 1-based source column (0 when the diagnostic covers a whole declaration).
    pub column: u32,
    /// Stable code, see [`codes`].
    pub code: Option<String>,
    /// Human-readable message.
    pub message: String,
    /// Ready-to-apply replacement source text or a corrective note.
    pub suggestion: Option<String>,
}

impl Diagnostic {
    /// Creates a diagnostic.
    #[must_use]
    pub fn new(
        phase: Phase,
        severity: Severity,
        line: u32,
        column: u32,
        message: impl Into<String>,
    ) -> Self {
        Self {
            phase,
            severity,
            line,
            column,
            code: None,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Creates a lexical error.
    #[must_use]
    pub fn lexical(line: u32, column: u32, message: impl Into<String>) -> Self {
        Self::new(Phase::Lexical, Severity::Error, line, column, message)
    }

    /// Creates a syntax error.
    #[must_use]
    pub fn syntactic(line: u32, column: u32, message: impl Into<String>) -> Self {
        Self::new(Phase::Syntactic, Severity::Error, line, column, message)
    }

    /// Creates a semantic error.
    #[must_use]
    pub fn semantic_error(line: u32, column: u32, message: impl Into<String>) -> Self {
        Self::new(Phase::Semantic, Severity::Error, line, column, message)
    }

    /// Creates a semantic warning.
    #[must_use]
    pub fn semantic_warning(line: u32, column: u32, message: impl Into<String>) -> Self {
        Self::new(Phase::Semantic, Severity::Warning, line, column, message)
    }

    /// Sets the stable code.
    #[must_use]
    pub fn with_code(mut self, code: &str) -> Self {
        self.code = Some(code.to_string());
        self
    }

    /// Sets the suggestion.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Returns true for lexical and syntactic diagnostics.
    ///
    /// These are the diagnostics that make a batch run fail.
    #[must_use]
    pub const fn is_hard_error(&self) -> bool {
        matches!(self.phase, Phase::Lexical | Phase::Syntactic)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {} {}", self.line, self.column, self.phase, self.severity)?;
        if let Some(code) = &self.code {
            write!(f, "[{code}]")?;
        }
        write!(f, ": {}", self.message)
    }
}

/// Sorts diagnostics by line, then by phase priority.
///
/// The sort is stable: diagnostics with the same line and phase keep the
/// order in which their phase produced them.
pub fn sort_diagnostics(diagnostics: &mut [Diagnostic]) {
    diagnostics.sort_by_key(|d| (d.line, d.phase));
}

/// Stable diagnostic codes.
///
/// - **L001-L099**: lexical errors
/// - **P001-P099**: syntax errors
/// - **S001-S099**: semantic errors and warnings
/// - **S100-S199**: ontology design pattern violations
pub mod codes {
    /// Character that cannot start any token.
    pub const UNRECOGNIZED_SYMBOL: &str = "L001";
    /// Digits run directly into letters or a decimal point.
    pub const MALFORMED_NUMBER: &str = "L002";
    /// `@name` that is not a known relation stereotype.
    pub const UNKNOWN_RELATION_STEREOTYPE: &str = "L003";
    /// `/*` without a closing `*/`.
    pub const UNTERMINATED_COMMENT: &str = "L004";

    /// Token that does not fit the grammar at this point.
    pub const UNEXPECTED_TOKEN: &str = "P001";
    /// Identifier containing a hyphen.
    pub const HYPHENATED_IDENTIFIER: &str = "P002";
    /// `disjoint` with `overlapping`, or `complete` with `incomplete`.
    pub const CONFLICTING_MODIFIERS: &str = "P003";
    /// Relation stereotype not followed by a relation.
    pub const DANGLING_STEREOTYPE: &str = "P004";
    /// External relation without a name.
    pub const MISSING_RELATION_NAME: &str = "P005";
    /// More than one package in a source unit.
    pub const DUPLICATE_PACKAGE: &str = "P006";

    /// Class name declared more than once.
    pub const DUPLICATE_CLASS: &str = "S001";
    /// Name that does not resolve to a declaration.
    pub const UNRESOLVED_REFERENCE: &str = "S002";
    /// Attribute type that is neither primitive nor declared.
    pub const UNKNOWN_ATTRIBUTE_TYPE: &str = "S003";

    /// Subkind pattern violation.
    pub const SUBKIND_PATTERN: &str = "S100";
    /// Role pattern violation.
    pub const ROLE_PATTERN: &str = "S101";
    /// Phase pattern violation.
    pub const PHASE_PATTERN: &str = "S102";
    /// Relator pattern violation.
    pub const RELATOR_PATTERN: &str = "S103";
    /// Mode pattern violation.
    pub const MODE_PATTERN: &str = "S104";
    /// `RoleMixin` pattern violation.
    pub const ROLE_MIXIN_PATTERN: &str = "S105";
}
