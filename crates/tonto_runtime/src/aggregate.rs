//! Diagnostics aggregation.
//!
//! Merges the diagnostics of every phase into one list ordered by line, then
//! by phase. No validation happens here.

use tonto_engine::PatternResult;
use tonto_foundation::{Diagnostic, sort_diagnostics};

/// Merges phase diagnostics into one ordered report.
///
/// The sort is stable, so diagnostics of one phase on one line keep the
/// order their phase produced them in.
#[must_use]
pub fn aggregate(
    lexical: Vec<Diagnostic>,
    syntax: Vec<Diagnostic>,
    semantic: Vec<Diagnostic>,
) -> Vec<Diagnostic> {
    let mut report = lexical;
    report.reserve(syntax.len() + semantic.len());
    report.extend(syntax);
    report.extend(semantic);
    sort_diagnostics(&mut report);
    report
}

/// Turns pattern violations into semantic warnings.
///
/// Satisfied results produce nothing.
#[must_use]
pub fn violation_diagnostics(results: &[PatternResult]) -> Vec<Diagnostic> {
    results
        .iter()
        .filter(|r| r.is_violated())
        .map(|r| {
            let diagnostic = Diagnostic::semantic_warning(
                r.line,
                0,
                format!("{} violated for {}: {}", r.kind, r.subject, r.detail),
            )
            .with_code(r.kind.code());
            match &r.suggestion {
                Some(suggestion) => diagnostic.with_suggestion(suggestion.text()),
                None => diagnostic,
            }
        })
        .collect()
}
