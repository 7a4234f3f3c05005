//! Document model for parsed TONTO source.
//!
//! Declarations live in flat arenas owned by [`Document`]. Everything else
//! refers to them by typed index: the package and the top-level sequence
//! hold [`Item`]s, a class lists the ids of its internal relations, and an
//! internal relation points back at its class through [`RelationDecl::owner`].

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::span::Span;
use crate::stereotype::{ClassStereotype, RelationStereotype};
use crate::token::RelationOperator;

// =============================================================================
// Ids
// =============================================================================

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub struct $name(pub usize);

        impl $name {
            /// Returns the arena index.
            #[must_use]
            pub const fn index(self) -> usize {
                self.0
            }
        }
    };
}

arena_id!(
    /// Index into [`Document::classes`].
    ClassId
);
arena_id!(
    /// Index into [`Document::datatypes`].
    DataTypeId
);
arena_id!(
    /// Index into [`Document::enums`].
    EnumId
);
arena_id!(
    /// Index into [`Document::gensets`].
    GensetId
);
arena_id!(
    /// Index into [`Document::relations`].
    RelationId
);

/// A top-level declaration, by id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Item {
    /// Class declaration.
    Class(ClassId),
    /// Data type declaration.
    DataType(DataTypeId),
    /// Enumeration.
    Enum(EnumId),
    /// Generalization set.
    Genset(GensetId),
    /// External relation.
    Relation(RelationId),
}

// =============================================================================
// Declarations
// =============================================================================

/// `package Name`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Package {
    /// Package name.
    pub name: String,
    /// Declarations following the package line, in source order.
    pub items: Vec<Item>,
    /// Location of the `package` keyword through the name.
    pub span: Span,
}

/// Cardinality bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Bound {
    /// A fixed count.
    Count(u32),
    /// `*`
    Many,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Many => f.write_str("*"),
        }
    }
}

/// `[lower]` or `[lower..upper]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cardinality {
    /// Lower bound.
    pub lower: Bound,
    /// Upper bound, if a range was written.
    pub upper: Option<Bound>,
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.upper {
            Some(upper) => write!(f, "[{}..{upper}]", self.lower),
            None => write!(f, "[{}]", self.lower),
        }
    }
}

/// `name: Type [cardinality]`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Attribute {
    /// Attribute name.
    pub name: String,
    /// Type name (primitive, datatype, enum or class).
    pub type_name: String,
    /// Optional multiplicity.
    pub cardinality: Option<Cardinality>,
    /// Source location.
    pub span: Span,
}

/// A class with a stereotype.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClassDecl {
    /// Class stereotype.
    pub stereotype: ClassStereotype,
    /// Class name; unique per document.
    pub name: String,
    /// Direct `specializes` targets, in source order.
    pub parents: Vec<String>,
    /// `of` partition reference.
    pub partition: Option<String>,
    /// Body attributes.
    pub attributes: Vec<Attribute>,
    /// Internal relations declared in the body.
    pub relations: Vec<RelationId>,
    /// Location of the stereotype through the end of the declaration.
    pub span: Span,
}

impl ClassDecl {
    /// Returns the first `specializes` target.
    #[must_use]
    pub fn specializes(&self) -> Option<&str> {
        self.parents.first().map(String::as_str)
    }
}

/// `datatype Name { attributes }`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DataTypeDecl {
    /// Data type name.
    pub name: String,
    /// Optional `specializes` target.
    pub parent: Option<String>,
    /// Attributes.
    pub attributes: Vec<Attribute>,
    /// Source location.
    pub span: Span,
}

/// An enumeration literal. `Active01` splits into `Active` and `01`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnumLiteral {
    /// Base name without the numeric suffix.
    pub name: String,
    /// Trailing digits, kept as written. Metadata only.
    pub suffix: Option<String>,
    /// Source location.
    pub span: Span,
}

impl EnumLiteral {
    /// Splits trailing ASCII digits off `text`.
    #[must_use]
    pub fn split(text: &str, span: Span) -> Self {
        let base = text.trim_end_matches(|c: char| c.is_ascii_digit());
        if base.is_empty() || base.len() == text.len() {
            return Self {
                name: text.to_string(),
                suffix: None,
                span,
            };
        }
        Self {
            name: base.to_string(),
            suffix: Some(text[base.len()..].to_string()),
            span,
        }
    }

    /// Returns the literal as written in source.
    #[must_use]
    pub fn full_name(&self) -> String {
        match &self.suffix {
            Some(suffix) => format!("{}{suffix}", self.name),
            None => self.name.clone(),
        }
    }
}

/// `enum Name { A, B }`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnumDecl {
    /// Enumeration name.
    pub name: String,
    /// Literals in source order.
    pub literals: Vec<EnumLiteral>,
    /// Source location.
    pub span: Span,
}

/// Genset modifiers.
///
/// The parser never sets both members of a conflicting pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GensetModifiers {
    /// `disjoint`
    pub disjoint: bool,
    /// `complete`
    pub complete: bool,
    /// `overlapping`
    pub overlapping: bool,
    /// `incomplete`
    pub incomplete: bool,
}

impl fmt::Display for GensetModifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words = [
            (self.disjoint, "disjoint"),
            (self.overlapping, "overlapping"),
            (self.complete, "complete"),
            (self.incomplete, "incomplete"),
        ];
        let mut first = true;
        for (set, word) in words {
            if set {
                if !first {
                    f.write_str(" ")?;
                }
                f.write_str(word)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// A generalization set. Both surface forms parse into this.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GensetDecl {
    /// Optional genset name.
    pub name: Option<String>,
    /// Modifiers.
    pub modifiers: GensetModifiers,
    /// The general class.
    pub general: String,
    /// The specific classes, in source order, without duplicates.
    pub specifics: Vec<String>,
    /// Source location.
    pub span: Span,
}

impl GensetDecl {
    /// Returns the name, or `<anonymous>`.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<anonymous>")
    }
}

/// A relation, internal or external.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RelationDecl {
    /// Relation stereotype.
    pub stereotype: Option<RelationStereotype>,
    /// Relation name.
    pub name: Option<String>,
    /// Enclosing class for internal relations.
    pub owner: Option<ClassId>,
    /// Source end. For internal relations this is the enclosing class.
    pub source: String,
    /// Source end cardinality.
    pub source_cardinality: Option<Cardinality>,
    /// Arrow variant.
    pub operator: RelationOperator,
    /// Target end cardinality.
    pub target_cardinality: Option<Cardinality>,
    /// Target end.
    pub target: String,
    /// Source location.
    pub span: Span,
}

impl RelationDecl {
    /// Returns true if this relation was declared inside a class body.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        self.owner.is_some()
    }

    /// Returns true if `class` is either end of this relation.
    #[must_use]
    pub fn involves(&self, class: &str) -> bool {
        self.source == class || self.target == class
    }
}

// =============================================================================
// Document
// =============================================================================

/// The root of a parsed source unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Document {
    /// The package, if one was declared.
    pub package: Option<Package>,
    /// Declarations that precede the package line, or all of them when
    /// there is no package.
    pub items: Vec<Item>,
    /// Class arena.
    pub classes: Vec<ClassDecl>,
    /// Data type arena.
    pub datatypes: Vec<DataTypeDecl>,
    /// Enumeration arena.
    pub enums: Vec<EnumDecl>,
    /// Genset arena.
    pub gensets: Vec<GensetDecl>,
    /// Relation arena, internal and external.
    pub relations: Vec<RelationDecl>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every top-level declaration in source order.
    pub fn declarations(&self) -> impl Iterator<Item = Item> + '_ {
        self.items
            .iter()
            .chain(self.package.iter().flat_map(|p| p.items.iter()))
            .copied()
    }

    /// Number of top-level declarations, not counting the package line.
    #[must_use]
    pub fn declaration_count(&self) -> usize {
        self.declarations().count()
    }

    /// Returns a class by id.
    #[must_use]
    pub fn class(&self, id: ClassId) -> Option<&ClassDecl> {
        self.classes.get(id.0)
    }

    /// Returns a relation by id.
    #[must_use]
    pub fn relation(&self, id: RelationId) -> Option<&RelationDecl> {
        self.relations.get(id.0)
    }

    /// Iterates classes with their ids.
    pub fn classes_with_ids(&self) -> impl Iterator<Item = (ClassId, &ClassDecl)> {
        self.classes.iter().enumerate().map(|(i, c)| (ClassId(i), c))
    }

    /// Appends an item to the package, or to the top-level sequence.
    pub fn push_item(&mut self, item: Item) {
        match &mut self.package {
            Some(package) => package.items.push(item),
            None => self.items.push(item),
        }
    }
}
