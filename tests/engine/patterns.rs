//! Integration tests for pattern validation
//!
//! One section per ontology design pattern, plus cross-rule behavior.

use tonto_engine::{PatternKind, PatternResult, PatternStatus, RULES, validate, validate_with};
use tonto_language::{Document, parse_source};

fn document(source: &str) -> Document {
    let (doc, diagnostics) = parse_source(source);
    assert!(diagnostics.is_empty(), "{diagnostics:?}");
    doc
}

fn results(source: &str) -> Vec<PatternResult> {
    validate(&document(source))
}

fn only(source: &str, kind: PatternKind) -> PatternResult {
    let mut matching: Vec<PatternResult> =
        results(source).into_iter().filter(|r| r.kind == kind).collect();
    assert_eq!(matching.len(), 1, "expected one {kind} result: {matching:?}");
    matching.remove(0)
}

// =============================================================================
// Subkind Pattern
// =============================================================================

const PESSOA_SUBKINDS: &str = "kind Pessoa
subkind Paciente specializes Pessoa
subkind Medico specializes Pessoa
";

#[test]
fn subkind_satisfied() {
    let source = format!(
        "{PESSOA_SUBKINDS}disjoint complete genset pessoas {{ general Pessoa specifics Paciente, Medico }}"
    );
    let result = only(&source, PatternKind::Subkind);
    assert_eq!(result.status, PatternStatus::Satisfied);
    assert_eq!(result.subject, "Pessoa");
    assert_eq!(result.genset.as_deref(), Some("pessoas"));
    assert_eq!(result.line, 1);
    assert!(result.suggestion.is_none());
}

#[test]
fn subkind_missing_disjoint() {
    let source = format!(
        "{PESSOA_SUBKINDS}complete genset pessoas {{ general Pessoa specifics Paciente, Medico }}"
    );
    let result = only(&source, PatternKind::Subkind);
    assert!(result.is_violated());
    assert!(result.detail.contains("disjoint"), "{}", result.detail);
    assert_eq!(
        result.suggestion.unwrap().text(),
        "disjoint complete genset Pessoa_Subkind_Genset { general Pessoa specifics Paciente, Medico }"
    );
}

#[test]
fn subkind_genset_missing_a_specific() {
    let source = format!(
        "{PESSOA_SUBKINDS}disjoint complete genset pessoas where general Pessoa specifics Paciente"
    );
    let result = only(&source, PatternKind::Subkind);
    assert!(result.is_violated());
    assert!(result.detail.contains("is missing specifics Medico"), "{}", result.detail);
}

#[test]
fn subkind_without_genset() {
    let result = only(PESSOA_SUBKINDS, PatternKind::Subkind);
    assert!(result.is_violated());
    assert!(result.genset.is_none());
    assert!(result.detail.starts_with("no genset with general Pessoa"));
}

// =============================================================================
// Role Pattern
// =============================================================================

const PESSOA_ROLES: &str = "kind Pessoa
role Professor specializes Pessoa
role Aluno specializes Pessoa
";

#[test]
fn role_without_genset_suggests_complete_genset() {
    let result = only(PESSOA_ROLES, PatternKind::Role);
    assert!(result.is_violated());
    assert_eq!(
        result.suggestion.unwrap().text(),
        "complete genset Pessoa_Role_Genset { general Pessoa specifics Professor, Aluno }"
    );
}

#[test]
fn role_genset_must_not_be_disjoint() {
    let source = format!(
        "{PESSOA_ROLES}disjoint complete genset Papeis where general Pessoa specifics Professor, Aluno"
    );
    let result = only(&source, PatternKind::Role);
    assert!(result.is_violated());
    assert!(result.detail.contains("must not be 'disjoint'"), "{}", result.detail);
}

#[test]
fn roles_are_not_judged_against_the_subkind_genset() {
    let source = format!(
        "{PESSOA_SUBKINDS}role Professor specializes Pessoa\n\
         role Aluno specializes Pessoa\n\
         disjoint complete genset pessoas {{ general Pessoa specifics Paciente, Medico }}"
    );
    assert!(only(&source, PatternKind::Subkind).is_satisfied());

    let role = only(&source, PatternKind::Role);
    assert!(role.is_violated());
    assert!(role.genset.is_none());
    assert!(role.detail.starts_with("no genset with general Pessoa"), "{}", role.detail);
    assert!(!role.detail.contains("disjoint"));
}

#[test]
fn role_satisfied_with_complete_genset() {
    let source = format!("{PESSOA_ROLES}complete genset Papeis where Professor, Aluno specializes Pessoa");
    assert!(only(&source, PatternKind::Role).is_satisfied());
}

// =============================================================================
// Phase Pattern
// =============================================================================

#[test]
fn phase_needs_disjoint_only() {
    let source = "kind Pessoa
phase Crianca specializes Pessoa
phase Adulto specializes Pessoa
disjoint genset Fases where general Pessoa specifics Crianca, Adulto";
    assert!(only(source, PatternKind::Phase).is_satisfied());

    let overlapping = source.replace("disjoint genset", "overlapping genset");
    let result = only(&overlapping, PatternKind::Phase);
    assert!(result.is_violated());
    assert!(result.detail.contains("is missing 'disjoint'"));
}

// =============================================================================
// Relator Pattern
// =============================================================================

#[test]
fn relator_with_two_mediations() {
    let source = "kind Paciente\nkind Medico\n\
                  relator Consulta {\n  @mediation -- Paciente\n  @mediation -- Medico\n}";
    let result = only(source, PatternKind::Relator);
    assert!(result.is_satisfied());
    assert!(result.detail.contains("2 @mediation relations found"));
}

#[test]
fn relator_with_one_mediation() {
    let result = only(
        "kind Paciente\nrelator Consulta { @mediation -- Paciente }",
        PatternKind::Relator,
    );
    assert!(result.is_violated());
    assert!(result.detail.contains("at least 2 required"));
    assert!(!result.suggestion.unwrap().is_code());
}

#[test]
fn relator_counts_external_mediations() {
    let source = "kind Paciente\nkind Medico\nrelator Consulta\n\
                  @mediation relation envolve Consulta -- Paciente\n\
                  @mediation relation atende Medico -- Consulta";
    assert!(only(source, PatternKind::Relator).is_satisfied());
}

// =============================================================================
// Mode Pattern
// =============================================================================

#[test]
fn mode_missing_external_dependence() {
    let source = "kind Paciente\nmode Sintoma { @characterization -- Paciente }";
    let result = only(source, PatternKind::Mode);
    assert!(result.is_violated());
    assert_eq!(result.detail, "missing @externalDependence");
    assert!(!result.detail.contains("@characterization"));
}

#[test]
fn mode_with_both_dependencies() {
    let source = "kind Paciente\nkind Virus\n\
                  mode Sintoma {\n  @characterization -- Paciente\n  @externalDependence -- Virus\n}";
    assert!(only(source, PatternKind::Mode).is_satisfied());
}

// =============================================================================
// RoleMixin Pattern
// =============================================================================

#[test]
fn role_mixin_with_too_few_roles() {
    let source = "roleMixin Cliente\nkind Pessoa\nrole ClientePF specializes Cliente, Pessoa";
    let result = only(source, PatternKind::RoleMixin);
    assert!(result.is_violated());
    assert!(result.detail.contains("at least 2 required"));
}

#[test]
fn role_mixin_satisfied() {
    let source = "roleMixin Cliente
kind Pessoa
kind Empresa
role ClientePF specializes Cliente, Pessoa
role ClientePJ specializes Cliente, Empresa
disjoint complete genset Clientes where general Cliente specifics ClientePF, ClientePJ";
    let all = results(source);
    let mixin = all.iter().find(|r| r.kind == PatternKind::RoleMixin).unwrap();
    assert!(mixin.is_satisfied());
    assert!(
        all.iter().all(|r| !(r.kind == PatternKind::Role && r.subject == "Cliente")),
        "role mixins are not subjects of the role rule"
    );
}

// =============================================================================
// Cross-Rule Behavior
// =============================================================================

#[test]
fn no_subjects_no_results() {
    assert!(results("kind Pessoa\nkind Animal\ndatatype D { x: int }").is_empty());
}

#[test]
fn results_follow_subject_order() {
    let source = "relator Contrato
kind Pessoa
role Cliente specializes Pessoa
mode Risco";
    let subjects: Vec<String> = results(source).into_iter().map(|r| r.subject).collect();
    assert_eq!(subjects, vec!["Contrato", "Pessoa", "Risco"]);
}

#[test]
fn one_class_many_patterns() {
    let source = "kind Pessoa
subkind Homem specializes Pessoa
role Aluno specializes Pessoa
phase Vivo specializes Pessoa";
    let kinds: Vec<PatternKind> = results(source).into_iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![PatternKind::Subkind, PatternKind::Role, PatternKind::Phase]
    );
}

#[test]
fn rule_subset() {
    let doc = document(PESSOA_ROLES);
    let relator_only: Vec<_> = RULES
        .iter()
        .filter(|rule| rule.kind == PatternKind::Relator)
        .copied()
        .collect();
    assert!(validate_with(&doc, &relator_only).is_empty());
    assert_eq!(validate_with(&doc, &RULES).len(), 1);
}

#[test]
fn validation_is_repeatable() {
    let doc = document(PESSOA_ROLES);
    assert_eq!(validate(&doc), validate(&doc));
}
