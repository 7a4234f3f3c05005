//! Integration tests for the lexer
//!
//! Tests token streams, positions, and lexical diagnostics on realistic input.

use tonto_foundation::{Phase, codes};
use tonto_language::{
    ClassStereotype, RelationOperator, RelationStereotype, TokenCategory, TokenKind, tokenize,
};

const CLINIC: &str = "package Clinica

kind Pessoa {
  nome: string
  nascimento: date [1]
}

role Paciente specializes Pessoa
relator Consulta {
  @mediation [1..*] -- [1] Paciente
}
";

// =============================================================================
// Token Streams
// =============================================================================

#[test]
fn tokens_end_with_eof() {
    let (tokens, diagnostics) = tokenize(CLINIC);
    assert!(diagnostics.is_empty());
    assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
    assert_eq!(
        tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(),
        1
    );
}

#[test]
fn tokens_are_in_source_order() {
    let (tokens, _) = tokenize(CLINIC);
    for pair in tokens.windows(2) {
        assert!(pair[0].span.start <= pair[1].span.start);
        assert!(
            (pair[0].line(), pair[0].column()) <= (pair[1].line(), pair[1].column()),
            "{:?} after {:?}",
            pair[1],
            pair[0]
        );
    }
}

#[test]
fn lexemes_match_source_slices() {
    let (tokens, _) = tokenize(CLINIC);
    for token in tokens.iter().filter(|t| t.kind != TokenKind::Eof) {
        assert_eq!(&CLINIC[token.span.start..token.span.end], token.lexeme);
    }
}

#[test]
fn categories_of_a_relation_line() {
    let (tokens, _) = tokenize("@mediation [1..*] -- [1] Paciente");
    let categories: Vec<TokenCategory> = tokens.iter().map(|t| t.category()).collect();
    assert_eq!(
        categories,
        vec![
            TokenCategory::RelationStereotype,
            TokenCategory::Punctuation,
            TokenCategory::Literal,
            TokenCategory::Operator,
            TokenCategory::Operator,
            TokenCategory::Punctuation,
            TokenCategory::Operator,
            TokenCategory::Punctuation,
            TokenCategory::Literal,
            TokenCategory::Punctuation,
            TokenCategory::Identifier,
            TokenCategory::Punctuation,
        ]
    );
}

#[test]
fn every_class_stereotype_is_recognized() {
    for stereotype in ClassStereotype::ALL {
        let (tokens, diagnostics) = tokenize(stereotype.keyword());
        assert!(diagnostics.is_empty());
        assert_eq!(tokens[0].kind, TokenKind::ClassStereotype(*stereotype));
    }
}

#[test]
fn every_relation_stereotype_is_recognized() {
    for stereotype in RelationStereotype::ALL {
        let source = stereotype.to_string();
        let (tokens, diagnostics) = tokenize(&source);
        assert!(diagnostics.is_empty(), "{source}: {diagnostics:?}");
        assert_eq!(tokens[0].kind, TokenKind::RelationStereotype(*stereotype));
    }
}

#[test]
fn stereotype_prefix_of_identifier() {
    let (tokens, _) = tokenize("kindness categoryName");
    assert_eq!(tokens[0].kind, TokenKind::Ident("kindness".into()));
    assert_eq!(tokens[1].kind, TokenKind::Ident("categoryName".into()));
}

#[test]
fn aggregation_arrows_between_names() {
    let (tokens, _) = tokenize("Carro <>-- Roda\nTime o-- Jogador");
    let operators: Vec<RelationOperator> = tokens
        .iter()
        .filter_map(|t| match t.kind {
            TokenKind::Operator(op) => Some(op),
            _ => None,
        })
        .collect();
    assert_eq!(
        operators,
        vec![RelationOperator::Composite, RelationOperator::Shared]
    );
}

// =============================================================================
// Positions
// =============================================================================

#[test]
fn lines_and_columns_are_one_based() {
    let (tokens, _) = tokenize("kind A\n\n  role B");
    assert_eq!((tokens[0].line(), tokens[0].column()), (1, 1));
    assert_eq!((tokens[2].line(), tokens[2].column()), (3, 3));
    assert_eq!((tokens[3].line(), tokens[3].column()), (3, 8));
}

#[test]
fn comments_do_not_shift_lines() {
    let (tokens, _) = tokenize("/* one\ntwo */ kind A // three\nkind B");
    assert_eq!(tokens[0].line(), 2);
    assert_eq!(tokens[2].line(), 3);
}

// =============================================================================
// Diagnostics
// =============================================================================

#[test]
fn lexical_diagnostics_carry_phase_and_position() {
    let (tokens, diagnostics) = tokenize("kind A\nkind B ^ C");
    assert_eq!(diagnostics.len(), 1);
    let d = &diagnostics[0];
    assert_eq!(d.phase, Phase::Lexical);
    assert_eq!((d.line, d.column), (2, 8));
    assert_eq!(d.code.as_deref(), Some(codes::UNRECOGNIZED_SYMBOL));
    assert!(tokens.iter().any(|t| matches!(t.kind, TokenKind::Unknown(_))));
    assert!(tokens.iter().any(|t| t.kind == TokenKind::Ident("C".into())));
}

#[test]
fn lexing_continues_after_errors() {
    let (tokens, diagnostics) = tokenize("@bogus -- 9x ~ kind Z");
    assert_eq!(diagnostics.len(), 3);
    assert_eq!(
        tokens[tokens.len() - 2].kind,
        TokenKind::Ident("Z".into())
    );
}

#[test]
fn hyphen_is_its_own_token() {
    let (tokens, diagnostics) = tokenize("kind Foo-Bar");
    assert!(diagnostics.is_empty());
    assert_eq!(tokens[2].kind, TokenKind::Hyphen);
    assert_eq!(tokens[2].category(), TokenCategory::Operator);
}
