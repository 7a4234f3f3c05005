//! Token types for TONTO source.
//!
//! Tokens are the output of the lexer and input to the parser.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::span::Span;
use crate::stereotype::{ClassStereotype, RelationStereotype};

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// Source text of this token.
    pub lexeme: String,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// 1-based line of the first character.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.span.line
    }

    /// 1-based column of the first character.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.span.column
    }

    /// Returns the token category.
    #[must_use]
    pub const fn category(&self) -> TokenCategory {
        self.kind.category()
    }
}

/// Relation arrow variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RelationOperator {
    /// `--`
    Association,
    /// `<>--` (composite, whole on the source end)
    Composite,
    /// `o--` (shared, whole on the source end)
    Shared,
    /// `<o>--` (shared, diamond form)
    SharedDiamond,
    /// `--<>` (composite, whole on the target end)
    CompositeTarget,
    /// `--<o>` (shared, whole on the target end)
    SharedTarget,
    /// `-->`
    Directed,
}

impl RelationOperator {
    /// Returns the source text of this operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Association => "--",
            Self::Composite => "<>--",
            Self::Shared => "o--",
            Self::SharedDiamond => "<o>--",
            Self::CompositeTarget => "--<>",
            Self::SharedTarget => "--<o>",
            Self::Directed => "-->",
        }
    }
}

impl fmt::Display for RelationOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Coarse token classification shown in the token view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenCategory {
    /// Reserved word.
    Keyword,
    /// One of the class stereotypes.
    ClassStereotype,
    /// One of the `@` relation stereotypes.
    RelationStereotype,
    /// User-chosen name.
    Identifier,
    /// Number.
    Literal,
    /// Relation arrow, hyphen, `*` or `..`.
    Operator,
    /// Braces, brackets, colon, comma.
    Punctuation,
    /// Lexically invalid text.
    Unknown,
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Keyword => "keyword",
            Self::ClassStereotype => "class-stereotype",
            Self::RelationStereotype => "relation-stereotype",
            Self::Identifier => "identifier",
            Self::Literal => "literal",
            Self::Operator => "operator",
            Self::Punctuation => "punctuation",
            Self::Unknown => "unknown",
        })
    }
}

/// Token types for TONTO source.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenKind {
    // Keywords
    /// `package`
    Package,
    /// `genset`
    Genset,
    /// `general`
    General,
    /// `specifics`
    Specifics,
    /// `where`
    Where,
    /// `specializes`
    Specializes,
    /// `of`
    Of,
    /// `relation`
    Relation,
    /// `datatype`
    Datatype,
    /// `enum`
    Enum,
    /// `disjoint`
    Disjoint,
    /// `complete`
    Complete,
    /// `overlapping`
    Overlapping,
    /// `incomplete`
    Incomplete,

    // Stereotypes
    /// Class stereotype like `kind` or `roleMixin`.
    ClassStereotype(ClassStereotype),
    /// Relation stereotype like `@mediation`.
    RelationStereotype(RelationStereotype),

    // Names and literals
    /// Identifier like `Pessoa` or `has_part`.
    Ident(String),
    /// Unsigned integer, kept as written (`01` stays `01`).
    Number(String),

    // Operators
    /// Relation arrow.
    Operator(RelationOperator),
    /// A lone `-`.
    Hyphen,
    /// `*`
    Star,
    /// `..`
    DotDot,

    // Punctuation
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `:`
    Colon,
    /// `,`
    Comma,

    // Meta
    /// End of input
    Eof,
    /// Lexically invalid text; carries the reason.
    Unknown(String),
}

impl TokenKind {
    /// Looks up a reserved word.
    #[must_use]
    pub fn keyword(word: &str) -> Option<Self> {
        let kind = match word {
            "package" => Self::Package,
            "genset" => Self::Genset,
            "general" => Self::General,
            "specifics" => Self::Specifics,
            "where" => Self::Where,
            "specializes" => Self::Specializes,
            "of" => Self::Of,
            "relation" => Self::Relation,
            "datatype" => Self::Datatype,
            "enum" => Self::Enum,
            "disjoint" => Self::Disjoint,
            "complete" => Self::Complete,
            "overlapping" => Self::Overlapping,
            "incomplete" => Self::Incomplete,
            _ => return ClassStereotype::from_keyword(word).map(Self::ClassStereotype),
        };
        Some(kind)
    }

    /// Returns true if this token kind should be ignored during parsing.
    #[must_use]
    pub const fn is_trivia(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }

    /// Returns true for `disjoint`, `complete`, `overlapping` and `incomplete`.
    #[must_use]
    pub const fn is_genset_modifier(&self) -> bool {
        matches!(
            self,
            Self::Disjoint | Self::Complete | Self::Overlapping | Self::Incomplete
        )
    }

    /// Returns true if this token can begin a top-level declaration.
    #[must_use]
    pub const fn starts_declaration(&self) -> bool {
        self.is_genset_modifier()
            || matches!(
                self,
                Self::Package
                    | Self::ClassStereotype(_)
                    | Self::Datatype
                    | Self::Enum
                    | Self::Genset
                    | Self::Relation
                    | Self::RelationStereotype(_)
            )
    }

    /// Returns the token category.
    #[must_use]
    pub const fn category(&self) -> TokenCategory {
        match self {
            Self::Package
            | Self::Genset
            | Self::General
            | Self::Specifics
            | Self::Where
            | Self::Specializes
            | Self::Of
            | Self::Relation
            | Self::Datatype
            | Self::Enum
            | Self::Disjoint
            | Self::Complete
            | Self::Overlapping
            | Self::Incomplete => TokenCategory::Keyword,
            Self::ClassStereotype(_) => TokenCategory::ClassStereotype,
            Self::RelationStereotype(_) => TokenCategory::RelationStereotype,
            Self::Ident(_) => TokenCategory::Identifier,
            Self::Number(_) => TokenCategory::Literal,
            Self::Operator(_) | Self::Hyphen | Self::Star | Self::DotDot => TokenCategory::Operator,
            Self::LBrace
            | Self::RBrace
            | Self::LBracket
            | Self::RBracket
            | Self::Colon
            | Self::Comma
            | Self::Eof => TokenCategory::Punctuation,
            Self::Unknown(_) => TokenCategory::Unknown,
        }
    }

    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Package => "'package'".into(),
            Self::Genset => "'genset'".into(),
            Self::General => "'general'".into(),
            Self::Specifics => "'specifics'".into(),
            Self::Where => "'where'".into(),
            Self::Specializes => "'specializes'".into(),
            Self::Of => "'of'".into(),
            Self::Relation => "'relation'".into(),
            Self::Datatype => "'datatype'".into(),
            Self::Enum => "'enum'".into(),
            Self::Disjoint => "'disjoint'".into(),
            Self::Complete => "'complete'".into(),
            Self::Overlapping => "'overlapping'".into(),
            Self::Incomplete => "'incomplete'".into(),
            Self::ClassStereotype(s) => format!("class stereotype '{s}'"),
            Self::RelationStereotype(s) => format!("relation stereotype '{s}'"),
            Self::Ident(name) => format!("identifier '{name}'"),
            Self::Number(n) => format!("number '{n}'"),
            Self::Operator(op) => format!("operator '{op}'"),
            Self::Hyphen => "'-'".into(),
            Self::Star => "'*'".into(),
            Self::DotDot => "'..'".into(),
            Self::LBrace => "'{'".into(),
            Self::RBrace => "'}'".into(),
            Self::LBracket => "'['".into(),
            Self::RBracket => "']'".into(),
            Self::Colon => "':'".into(),
            Self::Comma => "','".into(),
            Self::Eof => "end of input".into(),
            Self::Unknown(_) => "invalid token".into(),
        }
    }
}
