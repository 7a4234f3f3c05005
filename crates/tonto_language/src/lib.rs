//! Lexer, parser, and source printer for the TONTO ontology language.
//!
//! This crate provides:
//! - [`Lexer`] - Tokenization of TONTO source with lexical diagnostics
//! - [`Parser`] - Recovering parser producing a [`Document`]
//! - [`pretty`] - Canonical source printing
//!
//! # Example
//!
//! ```
//! use tonto_language::parse_source;
//!
//! let (doc, diagnostics) = parse_source(
//!     "kind Pessoa\nrole Aluno specializes Pessoa",
//! );
//! assert!(diagnostics.is_empty());
//! assert_eq!(doc.declaration_count(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod pretty;
pub mod span;
pub mod stereotype;
pub mod token;

pub use ast::{
    Attribute, Bound, Cardinality, ClassDecl, ClassId, DataTypeDecl, DataTypeId, Document,
    EnumDecl, EnumId, EnumLiteral, GensetDecl, GensetId, GensetModifiers, Item, Package,
    RelationDecl, RelationId,
};
pub use lexer::{Lexer, tokenize};
pub use parser::{Parser, parse, parse_source};
pub use span::Span;
pub use stereotype::{ClassStereotype, RelationStereotype};
pub use token::{RelationOperator, Token, TokenCategory, TokenKind};
