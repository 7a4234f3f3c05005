//! Pattern results.
//!
//! Every rule evaluation produces one [`PatternResult`] for one subject
//! class, either satisfied or violated.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use tonto_foundation::codes;

use crate::suggestion::Suggestion;

// =============================================================================
// Pattern Kind
// =============================================================================

/// The six ontology design patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PatternKind {
    /// A general class partitioned by subkinds.
    Subkind,
    /// A general class specialized by roles.
    Role,
    /// A general class partitioned by phases.
    Phase,
    /// A relator mediating at least two entities.
    Relator,
    /// A mode bound by characterization and external dependence.
    Mode,
    /// A role mixin covered by roles.
    RoleMixin,
}

impl PatternKind {
    /// Every pattern, in rule order.
    pub const ALL: [Self; 6] = [
        Self::Subkind,
        Self::Role,
        Self::Phase,
        Self::Relator,
        Self::Mode,
        Self::RoleMixin,
    ];

    /// Returns the display name, e.g. `Subkind Pattern`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Subkind => "Subkind Pattern",
            Self::Role => "Role Pattern",
            Self::Phase => "Phase Pattern",
            Self::Relator => "Relator Pattern",
            Self::Mode => "Mode Pattern",
            Self::RoleMixin => "RoleMixin Pattern",
        }
    }

    /// Returns the diagnostic code used for violations.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Subkind => codes::SUBKIND_PATTERN,
            Self::Role => codes::ROLE_PATTERN,
            Self::Phase => codes::PHASE_PATTERN,
            Self::Relator => codes::RELATOR_PATTERN,
            Self::Mode => codes::MODE_PATTERN,
            Self::RoleMixin => codes::ROLE_MIXIN_PATTERN,
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of one rule for one subject.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PatternStatus {
    /// The pattern holds.
    Satisfied,
    /// The pattern is applicable but does not hold.
    Violated,
}

impl fmt::Display for PatternStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Satisfied => "satisfied",
            Self::Violated => "violated",
        })
    }
}

// =============================================================================
// Pattern Result
// =============================================================================

/// The result of evaluating one pattern on one subject.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PatternResult {
    /// Which pattern.
    pub kind: PatternKind,
    /// Subject class name.
    pub subject: String,
    /// Genset that satisfied the pattern, or the closest candidate.
    pub genset: Option<String>,
    /// Outcome.
    pub status: PatternStatus,
    /// Human-readable explanation.
    pub detail: String,
    /// Correction for violations.
    pub suggestion: Option<Suggestion>,
    /// Line of the subject declaration.
    pub line: u32,
}

impl PatternResult {
    /// Creates a satisfied result.
    #[must_use]
    pub fn satisfied(
        kind: PatternKind,
        subject: impl Into<String>,
        line: u32,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            subject: subject.into(),
            genset: None,
            status: PatternStatus::Satisfied,
            detail: detail.into(),
            suggestion: None,
            line,
        }
    }

    /// Creates a violated result.
    #[must_use]
    pub fn violated(
        kind: PatternKind,
        subject: impl Into<String>,
        line: u32,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            status: PatternStatus::Violated,
            ..Self::satisfied(kind, subject, line, detail)
        }
    }

    /// Sets the related genset name.
    #[must_use]
    pub fn with_genset(mut self, genset: impl Into<String>) -> Self {
        self.genset = Some(genset.into());
        self
    }

    /// Attaches a suggestion.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestion = Some(suggestion);
        self
    }

    /// Returns true if the pattern holds.
    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        self.status == PatternStatus::Satisfied
    }

    /// Returns true if the pattern is violated.
    #[must_use]
    pub fn is_violated(&self) -> bool {
        self.status == PatternStatus::Violated
    }
}

impl fmt::Display for PatternResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {} ({})",
            self.line, self.kind, self.status, self.subject
        )?;
        if !self.detail.is_empty() {
            write!(f, ": {}", self.detail)?;
        }
        Ok(())
    }
}
