//! End-to-end scenarios
//!
//! Each scenario is a small model run through `analyze`.

use tonto::analyze;
use tonto::engine::{PatternKind, PatternStatus};
use tonto::foundation::{Phase, codes};
use tonto::runtime::AnalysisResult;

fn pattern(result: &AnalysisResult, kind: PatternKind, subject: &str) -> PatternStatus {
    result
        .patterns
        .iter()
        .find(|r| r.kind == kind && r.subject == subject)
        .map(|r| r.status)
        .unwrap_or_else(|| panic!("no {kind} result for {subject}"))
}

#[test]
fn subkinds_with_disjoint_complete_genset() {
    let result = analyze(
        "kind Pessoa
subkind Paciente specializes Pessoa
subkind Medico specializes Pessoa
disjoint complete genset pessoas { general Pessoa specifics Paciente, Medico }",
    )
    .unwrap();
    assert_eq!(
        pattern(&result, PatternKind::Subkind, "Pessoa"),
        PatternStatus::Satisfied
    );
    assert!(result.diagnostics.is_empty());
}

#[test]
fn subkinds_with_complete_only_genset() {
    let result = analyze(
        "kind Pessoa
subkind Paciente specializes Pessoa
subkind Medico specializes Pessoa
complete genset pessoas { general Pessoa specifics Paciente, Medico }",
    )
    .unwrap();
    let violation = result.violated().next().unwrap();
    assert_eq!(violation.kind, PatternKind::Subkind);
    assert!(violation.detail.contains("disjoint"));
    assert_eq!(
        violation.suggestion.as_ref().unwrap().text(),
        "disjoint complete genset Pessoa_Subkind_Genset { general Pessoa specifics Paciente, Medico }"
    );

    let diagnostic = &result.diagnostics[0];
    assert_eq!(diagnostic.phase, Phase::Semantic);
    assert_eq!(diagnostic.code.as_deref(), Some(codes::SUBKIND_PATTERN));
    assert_eq!(diagnostic.line, 1);
    assert_eq!(diagnostic.suggestion, violation.suggestion.as_ref().map(|s| s.text().to_string()));
}

#[test]
fn roles_without_genset() {
    let result = analyze(
        "kind Pessoa
role Professor specializes Pessoa
role Aluno specializes Pessoa",
    )
    .unwrap();
    assert_eq!(
        pattern(&result, PatternKind::Role, "Pessoa"),
        PatternStatus::Violated
    );
    assert_eq!(
        result.diagnostics[0].suggestion.as_deref(),
        Some("complete genset Pessoa_Role_Genset { general Pessoa specifics Professor, Aluno }")
    );
    assert!(!result.has_errors());
}

#[test]
fn relator_with_two_mediations() {
    let result = analyze(
        "kind Paciente
kind Medico
relator Consulta {
  @mediation -- Paciente
  @mediation -- Medico
}",
    )
    .unwrap();
    assert_eq!(
        pattern(&result, PatternKind::Relator, "Consulta"),
        PatternStatus::Satisfied
    );
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
}

#[test]
fn mode_without_external_dependence() {
    let result = analyze(
        "kind Paciente
mode Sintoma {
  @characterization -- Paciente
}",
    )
    .unwrap();
    let violation = result
        .violated()
        .find(|r| r.kind == PatternKind::Mode)
        .unwrap();
    assert_eq!(violation.subject, "Sintoma");
    assert!(violation.detail.contains("@externalDependence"));
}

#[test]
fn enum_literals_with_suffixes() {
    let result = analyze("enum Status { Active01, Inactive02 }").unwrap();
    assert!(result.diagnostics.is_empty());
    let literals = &result.document.enums[0].literals;
    assert_eq!(literals.len(), 2);
    assert_eq!(literals[0].name, "Active");
    assert_eq!(literals[0].suffix.as_deref(), Some("01"));
    assert_eq!(literals[1].name, "Inactive");
    assert_eq!(literals[1].suffix.as_deref(), Some("02"));
}

#[test]
fn all_phases_in_one_report() {
    let source = "kind Pessoa $
role Aluno specializes Pessoa
kind {
relator Consulta { @mediation -- Aluno }
kind Casa { dono: Pesoa }";
    let result = analyze(source).unwrap();

    let phases: Vec<(u32, Phase)> = result.diagnostics.iter().map(|d| (d.line, d.phase)).collect();
    assert_eq!(
        phases,
        vec![
            (1, Phase::Lexical),
            (1, Phase::Semantic),
            (3, Phase::Syntactic),
            (4, Phase::Semantic),
            (5, Phase::Semantic),
        ]
    );
    assert!(result.has_errors());
}

#[test]
fn malformed_declarations_do_not_stop_validation() {
    let result = analyze(
        "kind Pessoa
role Aluno specializes
role Professor specializes Pessoa",
    )
    .unwrap();
    assert!(result.has_errors());
    assert_eq!(
        pattern(&result, PatternKind::Role, "Pessoa"),
        PatternStatus::Violated
    );
    assert_eq!(result.document.classes.len(), 2);
}
