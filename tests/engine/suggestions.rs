//! Integration tests for suggestions
//!
//! A genset suggestion appended to the source must satisfy the pattern it
//! was generated for.

use proptest::prelude::*;
use tonto_engine::{PatternKind, Suggestion, validate};
use tonto_language::parse_source;

/// Validates `source`, applies the suggestion of the first violation of
/// `kind`, and validates again.
fn apply_suggestion(source: &str, kind: PatternKind) -> (String, bool) {
    let (doc, _) = parse_source(source);
    let violation = validate(&doc)
        .into_iter()
        .find(|r| r.kind == kind && r.is_violated())
        .expect("expected a violation");
    let Some(Suggestion::Code(code)) = violation.suggestion else {
        panic!("expected a code suggestion for {kind}");
    };

    let fixed = format!("{source}\n{code}");
    let (doc, diagnostics) = parse_source(&fixed);
    assert!(diagnostics.is_empty(), "{fixed}\n{diagnostics:?}");
    let satisfied = validate(&doc)
        .iter()
        .any(|r| r.kind == kind && r.subject == violation.subject && r.is_satisfied());
    (fixed, satisfied)
}

#[test]
fn subkind_suggestion_fixes_violation() {
    let source = "kind Pessoa\nsubkind Homem specializes Pessoa\nsubkind Mulher specializes Pessoa";
    let (fixed, satisfied) = apply_suggestion(source, PatternKind::Subkind);
    assert!(satisfied, "{fixed}");
}

#[test]
fn role_suggestion_fixes_violation() {
    let source = "kind Pessoa\nrole Professor specializes Pessoa\nrole Aluno specializes Pessoa";
    let (fixed, satisfied) = apply_suggestion(source, PatternKind::Role);
    assert!(satisfied, "{fixed}");
    assert!(fixed.ends_with(
        "complete genset Pessoa_Role_Genset { general Pessoa specifics Professor, Aluno }"
    ));
}

#[test]
fn phase_suggestion_fixes_violation() {
    let source = "kind Pessoa\nphase Vivo specializes Pessoa\nphase Morto specializes Pessoa";
    let (fixed, satisfied) = apply_suggestion(source, PatternKind::Phase);
    assert!(satisfied, "{fixed}");
}

#[test]
fn role_mixin_suggestion_fixes_violation() {
    let source = "roleMixin Cliente\nkind Pessoa\n\
                  role ClientePF specializes Cliente, Pessoa\n\
                  role ClienteVip specializes Cliente, Pessoa";
    let (fixed, satisfied) = apply_suggestion(source, PatternKind::RoleMixin);
    assert!(satisfied, "{fixed}");
}

#[test]
fn notes_for_relator_and_mode() {
    let (doc, _) = parse_source("relator Consulta\nmode Sintoma");
    let results = validate(&doc);
    assert_eq!(results.len(), 2);
    for result in results {
        let suggestion = result.suggestion.unwrap();
        assert!(!suggestion.is_code());
        assert!(suggestion.text().starts_with("add "));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Any set of distinct subkinds is fixed by its suggestion.
    #[test]
    fn generated_subkind_sets_are_fixed(
        names in prop::collection::btree_set("Sub[A-Z][a-z]{1,5}", 1..6)
    ) {
        let mut source = String::from("kind Raiz");
        for name in &names {
            source.push_str(&format!("\nsubkind {name} specializes Raiz"));
        }
        let (fixed, satisfied) = apply_suggestion(&source, PatternKind::Subkind);
        prop_assert!(satisfied, "{}", fixed);
    }
}
