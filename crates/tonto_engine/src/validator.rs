//! Pattern validation over a whole document.

use tonto_language::Document;
use tracing::debug;

use crate::index::SpecializationIndex;
use crate::pattern::PatternResult;
use crate::rule::{RULES, Rule};

/// Evaluates every pattern rule on every applicable class.
///
/// Results are ordered by subject declaration, then by rule. Classes that
/// no rule applies to produce nothing.
#[must_use]
pub fn validate(document: &Document) -> Vec<PatternResult> {
    validate_with(document, &RULES)
}

/// Evaluates the given rules only.
#[must_use]
pub fn validate_with(document: &Document, rules: &[Rule]) -> Vec<PatternResult> {
    let index = &SpecializationIndex::build(document);
    let results: Vec<PatternResult> = index
        .subjects()
        .flat_map(|class| {
            rules
                .iter()
                .filter_map(move |rule| rule.evaluate(index, class))
        })
        .collect();

    debug!(
        results = results.len(),
        violated = results.iter().filter(|r| r.is_violated()).count(),
        "pattern validation finished"
    );
    results
}
