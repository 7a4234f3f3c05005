//! Integration tests for reference resolution
//!
//! Unresolved names, duplicates, and attribute types.

use tonto_engine::{PRIMITIVE_TYPES, resolve};
use tonto_foundation::{Diagnostic, Phase, Severity, codes};
use tonto_language::parse_source;

fn resolve_source(source: &str) -> Vec<Diagnostic> {
    let (doc, diagnostics) = parse_source(source);
    assert!(diagnostics.is_empty(), "{diagnostics:?}");
    resolve(&doc)
}

#[test]
fn primitive_types_resolve() {
    let attributes: Vec<String> = PRIMITIVE_TYPES
        .iter()
        .enumerate()
        .map(|(i, ty)| format!("a{i}: {ty}"))
        .collect();
    let source = format!("kind Coisa {{ {} }}", attributes.join("\n"));
    assert!(resolve_source(&source).is_empty());
}

#[test]
fn enums_and_datatypes_are_attribute_types() {
    let source = "enum Cor { Azul, Verde }\n\
                  datatype Ponto { x: int y: int }\n\
                  kind Forma { cor: Cor centro: Ponto }";
    assert!(resolve_source(source).is_empty());
}

#[test]
fn unresolved_parent_is_a_semantic_error() {
    let diagnostics = resolve_source("kind Pessoa\nrole Aluno specializes Pesoa");
    assert_eq!(diagnostics.len(), 1);
    let d = &diagnostics[0];
    assert_eq!(d.phase, Phase::Semantic);
    assert_eq!(d.severity, Severity::Error);
    assert_eq!(d.code.as_deref(), Some(codes::UNRESOLVED_REFERENCE));
    assert_eq!(d.line, 2);
    assert!(d.message.contains("Pesoa"));
}

#[test]
fn relation_ends_are_checked() {
    let diagnostics = resolve_source(
        "kind Medico\n@material relation atende Medico -- Paciente\nrelation usa Remedio -- Medico",
    );
    let lines: Vec<u32> = diagnostics.iter().map(|d| d.line).collect();
    assert_eq!(lines, vec![2, 3]);
    assert!(diagnostics.iter().all(|d| d.code.as_deref() == Some(codes::UNRESOLVED_REFERENCE)));
}

#[test]
fn duplicate_declarations() {
    let diagnostics = resolve_source("kind A\nkind B\nrole A\nphase A");
    let duplicates: Vec<u32> = diagnostics
        .iter()
        .filter(|d| d.code.as_deref() == Some(codes::DUPLICATE_CLASS))
        .map(|d| d.line)
        .collect();
    assert_eq!(duplicates, vec![3, 4]);
}

#[test]
fn unknown_attribute_type_suggests_close_name() {
    let diagnostics = resolve_source("datatype Endereco { rua: string }\nkind Casa { e: endereco }");
    assert_eq!(diagnostics.len(), 1);
    let d = &diagnostics[0];
    assert_eq!(d.code.as_deref(), Some(codes::UNKNOWN_ATTRIBUTE_TYPE));
    assert_eq!(d.severity, Severity::Warning);
    assert_eq!(d.suggestion.as_deref(), Some("did you mean 'Endereco'?"));
}

#[test]
fn resolution_is_repeatable() {
    let (doc, _) = parse_source("role A specializes X\nkind B { y: Z }");
    assert_eq!(resolve(&doc), resolve(&doc));
}
