//! Integration tests for Diagnostic
//!
//! Tests constructors, display format, and ordering.

use tonto_foundation::{Diagnostic, Phase, Severity, codes, sort_diagnostics};

// =============================================================================
// Construction
// =============================================================================

#[test]
fn constructors_set_phase_and_severity() {
    let cases = [
        (Diagnostic::lexical(1, 1, "x"), Phase::Lexical, Severity::Error),
        (Diagnostic::syntactic(1, 1, "x"), Phase::Syntactic, Severity::Error),
        (Diagnostic::semantic_error(1, 1, "x"), Phase::Semantic, Severity::Error),
        (Diagnostic::semantic_warning(1, 1, "x"), Phase::Semantic, Severity::Warning),
    ];
    for (diagnostic, phase, severity) in cases {
        assert_eq!(diagnostic.phase, phase);
        assert_eq!(diagnostic.severity, severity);
        assert!(diagnostic.code.is_none());
        assert!(diagnostic.suggestion.is_none());
    }
}

#[test]
fn hard_errors_are_lexical_and_syntactic() {
    assert!(Diagnostic::lexical(1, 1, "x").is_hard_error());
    assert!(Diagnostic::syntactic(1, 1, "x").is_hard_error());
    assert!(!Diagnostic::semantic_error(1, 1, "x").is_hard_error());
    assert!(!Diagnostic::semantic_warning(1, 1, "x").is_hard_error());
}

#[test]
fn builder_sets_code_and_suggestion() {
    let d = Diagnostic::semantic_warning(5, 0, "Role Pattern violated for Pessoa")
        .with_code(codes::ROLE_PATTERN)
        .with_suggestion("disjoint complete genset Pessoa_Role_Genset { general Pessoa specifics Aluno }");
    assert_eq!(d.code.as_deref(), Some("S101"));
    assert!(d.suggestion.as_deref().unwrap().starts_with("disjoint complete genset"));
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn display_format() {
    let d = Diagnostic::lexical(2, 9, "unrecognized symbol '$'").with_code(codes::UNRECOGNIZED_SYMBOL);
    assert_eq!(d.to_string(), "2:9: lexical error[L001]: unrecognized symbol '$'");

    let d = Diagnostic::semantic_warning(7, 0, "Mode Pattern violated for Cor");
    assert_eq!(d.to_string(), "7:0: semantic warning: Mode Pattern violated for Cor");
}

#[test]
fn codes_are_distinct() {
    let all = [
        codes::UNRECOGNIZED_SYMBOL,
        codes::MALFORMED_NUMBER,
        codes::UNKNOWN_RELATION_STEREOTYPE,
        codes::UNTERMINATED_COMMENT,
        codes::UNEXPECTED_TOKEN,
        codes::HYPHENATED_IDENTIFIER,
        codes::CONFLICTING_MODIFIERS,
        codes::DANGLING_STEREOTYPE,
        codes::MISSING_RELATION_NAME,
        codes::DUPLICATE_PACKAGE,
        codes::DUPLICATE_CLASS,
        codes::UNRESOLVED_REFERENCE,
        codes::UNKNOWN_ATTRIBUTE_TYPE,
        codes::SUBKIND_PATTERN,
        codes::ROLE_PATTERN,
        codes::PHASE_PATTERN,
        codes::RELATOR_PATTERN,
        codes::MODE_PATTERN,
        codes::ROLE_MIXIN_PATTERN,
    ];
    let mut sorted = all.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), all.len());
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn sort_by_line_then_phase() {
    let mut diagnostics = vec![
        Diagnostic::semantic_warning(1, 0, "c"),
        Diagnostic::syntactic(2, 1, "d"),
        Diagnostic::syntactic(1, 4, "b"),
        Diagnostic::lexical(1, 9, "a"),
    ];
    sort_diagnostics(&mut diagnostics);
    let messages: Vec<&str> = diagnostics.iter().map(|d| d.message.as_str()).collect();
    assert_eq!(messages, ["a", "b", "c", "d"]);
}

#[test]
fn sort_is_stable_within_phase() {
    let mut diagnostics = vec![
        Diagnostic::semantic_warning(3, 0, "first"),
        Diagnostic::semantic_warning(3, 0, "second"),
        Diagnostic::semantic_error(3, 5, "third"),
    ];
    sort_diagnostics(&mut diagnostics);
    let messages: Vec<&str> = diagnostics.iter().map(|d| d.message.as_str()).collect();
    assert_eq!(messages, ["first", "second", "third"]);
}
