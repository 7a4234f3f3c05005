//! Integration tests for the source printer
//!
//! Printing a document and parsing the output must give back the same model.

use tonto_language::pretty::{PrettyConfig, print_document, print_document_with_config};
use tonto_language::parse_source;

const MODEL: &str = "package Escola
kind Pessoa { nome: string }
role Aluno specializes Pessoa
role Professor specializes Pessoa
complete genset Papeis where Aluno, Professor specializes Pessoa
relator Matricula { @mediation [1..*] -- [1] Aluno }
mode Habilidade { @characterization -- Professor @externalDependence -- Aluno }
enum Turno { Manha01, Tarde02 }
@material relation leciona Professor [1] -- [*] Aluno";

#[test]
fn printed_model_reparses_to_same_model() {
    let (doc, diagnostics) = parse_source(MODEL);
    assert!(diagnostics.is_empty(), "{diagnostics:?}");

    let printed = print_document(&doc);
    let (reparsed, diagnostics) = parse_source(&printed);
    assert!(diagnostics.is_empty(), "{printed}\n{diagnostics:?}");

    assert_eq!(reparsed.declaration_count(), doc.declaration_count());
    assert_eq!(reparsed.gensets[0].specifics, doc.gensets[0].specifics);
    assert_eq!(reparsed.gensets[0].general, doc.gensets[0].general);
    assert_eq!(reparsed.enums[0].literals.len(), 2);
    assert_eq!(reparsed.relations.len(), doc.relations.len());
    assert_eq!(print_document(&reparsed), printed);
}

#[test]
fn compact_config() {
    let (doc, _) = parse_source("kind A\nkind B { x: int }");
    let config = PrettyConfig {
        indent_width: 4,
        blank_lines: false,
    };
    assert_eq!(
        print_document_with_config(&doc, &config),
        "kind A\nkind B {\n    x: int\n}\n"
    );
}
