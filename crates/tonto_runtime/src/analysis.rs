//! The analysis pipeline.
//!
//! `analyze` runs lexer, parser, reference resolution, pattern validation,
//! and aggregation over one source unit. Each phase consumes the whole
//! output of the one before it.

use std::fmt;

use serde::{Deserialize, Serialize};
use tonto_engine::{PatternKind, PatternResult, resolve, validate};
use tonto_foundation::{Diagnostic, Error, Phase, Result};
use tonto_language::{Document, Token, parse, tokenize};
use tracing::debug;

use crate::aggregate::{aggregate, violation_diagnostics};
use crate::session::CancelFlag;

// =============================================================================
// Analysis Result
// =============================================================================

/// Everything one analysis run produces.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Token sequence, ending with `Eof`.
    pub tokens: Vec<Token>,
    /// Parsed document.
    pub document: Document,
    /// Pattern results, satisfied and violated.
    pub patterns: Vec<PatternResult>,
    /// Diagnostics of every phase, ordered by line then phase.
    pub diagnostics: Vec<Diagnostic>,
}

impl AnalysisResult {
    /// Satisfied pattern results.
    pub fn satisfied(&self) -> impl Iterator<Item = &PatternResult> {
        self.patterns.iter().filter(|r| r.is_satisfied())
    }

    /// Violated pattern results.
    pub fn violated(&self) -> impl Iterator<Item = &PatternResult> {
        self.patterns.iter().filter(|r| r.is_violated())
    }

    /// Diagnostics of one phase.
    pub fn diagnostics_in(&self, phase: Phase) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.phase == phase)
    }

    /// Returns true if any lexical or syntactic diagnostic was produced.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_hard_error)
    }

    /// Returns true if the run fails under the given strictness.
    #[must_use]
    pub fn fails(&self, strict: bool) -> bool {
        if strict {
            !self.diagnostics.is_empty()
        } else {
            self.has_errors()
        }
    }

    /// Counts of tokens, declarations, diagnostics, and patterns.
    #[must_use]
    pub fn summary(&self) -> Summary {
        let patterns = PatternKind::ALL
            .into_iter()
            .map(|kind| {
                let of_kind = self.patterns.iter().filter(|r| r.kind == kind);
                let (satisfied, violated) = of_kind.fold((0, 0), |(s, v), r| {
                    if r.is_satisfied() { (s + 1, v) } else { (s, v + 1) }
                });
                PatternCount {
                    kind,
                    satisfied,
                    violated,
                }
            })
            .collect();

        Summary {
            tokens: self.tokens.len().saturating_sub(1),
            declarations: self.document.declaration_count(),
            lexical: self.diagnostics_in(Phase::Lexical).count(),
            syntactic: self.diagnostics_in(Phase::Syntactic).count(),
            semantic: self.diagnostics_in(Phase::Semantic).count(),
            patterns,
        }
    }
}

// =============================================================================
// Summary
// =============================================================================

/// Satisfied and violated counts for one pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternCount {
    /// The pattern.
    pub kind: PatternKind,
    /// Satisfied results.
    pub satisfied: usize,
    /// Violated results.
    pub violated: usize,
}

/// Counts describing one analysis run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Tokens, not counting `Eof`.
    pub tokens: usize,
    /// Top-level declarations.
    pub declarations: usize,
    /// Lexical diagnostics.
    pub lexical: usize,
    /// Syntactic diagnostics.
    pub syntactic: usize,
    /// Semantic diagnostics.
    pub semantic: usize,
    /// Per-pattern counts, in rule order.
    pub patterns: Vec<PatternCount>,
}

impl Summary {
    /// Total satisfied patterns.
    #[must_use]
    pub fn satisfied(&self) -> usize {
        self.patterns.iter().map(|p| p.satisfied).sum()
    }

    /// Total violated patterns.
    #[must_use]
    pub fn violated(&self) -> usize {
        self.patterns.iter().map(|p| p.violated).sum()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} tokens, {} declarations",
            self.tokens, self.declarations
        )?;
        writeln!(
            f,
            "diagnostics: {} lexical, {} syntactic, {} semantic",
            self.lexical, self.syntactic, self.semantic
        )?;
        write!(
            f,
            "patterns: {} satisfied, {} violated",
            self.satisfied(),
            self.violated()
        )?;
        for count in self.patterns.iter().filter(|p| p.satisfied + p.violated > 0) {
            write!(
                f,
                "\n  {}: {} satisfied, {} violated",
                count.kind, count.satisfied, count.violated
            )?;
        }
        Ok(())
    }
}

// =============================================================================
// Pipeline
// =============================================================================

/// Analyzes one source unit.
///
/// # Errors
///
/// Returns [`tonto_foundation::ErrorKind::EmptySource`] if the source is
/// empty or whitespace only. Every other problem is a diagnostic.
pub fn analyze(source: &str) -> Result<AnalysisResult> {
    analyze_with(source, &CancelFlag::new())
}

/// Analyzes one source unit, checking `cancel` before each phase.
///
/// # Errors
///
/// Returns `EmptySource` as [`analyze`] does, or `Cancelled` naming the
/// phase that was about to start.
pub fn analyze_with(source: &str, cancel: &CancelFlag) -> Result<AnalysisResult> {
    if source.trim().is_empty() {
        return Err(Error::empty_source());
    }

    cancel.check(Phase::Lexical)?;
    let (tokens, lexical) = tokenize(source);

    cancel.check(Phase::Syntactic)?;
    let (document, syntax) = parse(&tokens);

    cancel.check(Phase::Semantic)?;
    let mut semantic = resolve(&document);
    let patterns = validate(&document);
    semantic.extend(violation_diagnostics(&patterns));

    let diagnostics = aggregate(lexical, syntax, semantic);
    debug!(
        tokens = tokens.len(),
        declarations = document.declaration_count(),
        patterns = patterns.len(),
        diagnostics = diagnostics.len(),
        "analysis finished"
    );

    Ok(AnalysisResult {
        tokens,
        document,
        patterns,
        diagnostics,
    })
}
