//! Pipeline properties
//!
//! Properties that hold for any input, checked with generated sources.

use proptest::prelude::*;
use tonto::analyze;
use tonto::foundation::{Phase, codes};
use tonto::language::{TokenKind, tokenize};
use tonto::runtime::{CancelFlag, analyze_with};

/// Strategy for small, mostly well-formed models with some noise.
fn model() -> impl Strategy<Value = String> {
    let name = "[A-Z][a-z]{1,5}";
    let line = prop_oneof![
        name.prop_map(|n| format!("kind {n}")),
        (name, name).prop_map(|(a, b)| format!("subkind {a} specializes {b}")),
        (name, name).prop_map(|(a, b)| format!("role {a} specializes {b}")),
        (name, name).prop_map(|(a, b)| format!("phase {a} specializes {b}")),
        (name, name).prop_map(|(a, b)| format!("relator {a} {{ @mediation -- {b} }}")),
        (name, name).prop_map(|(a, b)| format!("mode {a} {{ @characterization -- {b} }}")),
        (name, name, name).prop_map(|(g, a, b)| {
            format!("disjoint complete genset {{ general {g} specifics {a}, {b} }}")
        }),
        Just("kind {".to_string()),
        Just("$".to_string()),
        Just("role Foo-Bar".to_string()),
    ];
    prop::collection::vec(line, 1..25).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Analyzing the same text twice gives identical results.
    #[test]
    fn analysis_is_idempotent(source in model()) {
        let first = analyze(&source).unwrap();
        let second = analyze(&source).unwrap();
        prop_assert_eq!(first, second);
    }

    /// The aggregated report is ordered by line, then by phase.
    #[test]
    fn diagnostics_are_ordered(source in model()) {
        let result = analyze(&source).unwrap();
        let keys: Vec<(u32, Phase)> = result.diagnostics.iter().map(|d| (d.line, d.phase)).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        prop_assert_eq!(keys, sorted);
    }

    /// Every violated pattern shows up as exactly one semantic warning.
    #[test]
    fn each_violation_has_a_diagnostic(source in model()) {
        let result = analyze(&source).unwrap();
        let pattern_codes: Vec<&str> = result
            .diagnostics
            .iter()
            .filter_map(|d| d.code.as_deref())
            .filter(|code| code.starts_with("S1"))
            .collect();
        prop_assert_eq!(pattern_codes.len(), result.violated().count());
    }

    /// Every unknown token yields a lexical diagnostic, and the parser
    /// never reports them again.
    #[test]
    fn unknown_tokens_are_lexical_only(source in model()) {
        let (tokens, _) = tokenize(&source);
        let unknown = tokens.iter().filter(|t| matches!(t.kind, TokenKind::Unknown(_))).count();
        let result = analyze(&source).unwrap();
        prop_assert_eq!(result.diagnostics_in(Phase::Lexical).count(), unknown);
    }

    /// A hyphenated name is always a syntax error with an underscore fix.
    #[test]
    fn hyphenated_names_are_rejected(a in "[A-Z][a-z]{1,5}", b in "[A-Z][a-z]{1,5}") {
        let result = analyze(&format!("kind {a}-{b}")).unwrap();
        let hyphen: Vec<_> = result
            .diagnostics
            .iter()
            .filter(|d| d.code.as_deref() == Some(codes::HYPHENATED_IDENTIFIER))
            .collect();
        prop_assert_eq!(hyphen.len(), 1);
        let expected = format!("{a}_{b}");
        prop_assert_eq!(hyphen[0].suggestion.as_deref(), Some(expected.as_str()));
        prop_assert!(result.document.classes.is_empty());
    }
}

#[test]
fn cancellation_names_the_pending_phase() {
    let cancel = CancelFlag::new();
    cancel.cancel();
    let err = analyze_with("kind Pessoa", &cancel).unwrap_err();
    assert!(err.is_cancelled());
    assert!(err.to_string().contains("lexical"));

    cancel.reset();
    assert!(analyze_with("kind Pessoa", &cancel).is_ok());
}

#[test]
fn cancel_flag_is_shared_between_clones() {
    let cancel = CancelFlag::new();
    let handle = cancel.clone();
    std::thread::spawn(move || handle.cancel()).join().unwrap();
    assert!(cancel.is_cancelled());
}
