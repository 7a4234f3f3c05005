//! Suggested corrections for pattern violations.
//!
//! Generators are pure functions from names to text. Genset suggestions are
//! complete declarations that parse on their own; the others are notes.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use tonto_language::{GensetModifiers, RelationStereotype};

/// A suggested correction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Suggestion {
    /// Ready-to-insert TONTO source.
    Code(String),
    /// A corrective note for the modeler.
    Note(String),
}

impl Suggestion {
    /// Returns the suggestion text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Code(text) | Self::Note(text) => text,
        }
    }

    /// Returns true for source suggestions.
    #[must_use]
    pub const fn is_code(&self) -> bool {
        matches!(self, Self::Code(_))
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

// =============================================================================
// Genset Templates
// =============================================================================

/// Renders a one-line block genset declaration.
#[must_use]
pub fn genset_declaration(
    modifiers: GensetModifiers,
    name: &str,
    general: &str,
    specifics: &[&str],
) -> String {
    let modifiers = modifiers.to_string();
    let prefix = if modifiers.is_empty() {
        String::new()
    } else {
        format!("{modifiers} ")
    };
    format!(
        "{prefix}genset {name} {{ general {general} specifics {} }}",
        specifics.join(", ")
    )
}

fn genset_code(
    disjoint: bool,
    complete: bool,
    pattern: &str,
    general: &str,
    specifics: &[&str],
) -> Suggestion {
    let modifiers = GensetModifiers {
        disjoint,
        complete,
        ..GensetModifiers::default()
    };
    let name = format!("{general}_{pattern}_Genset");
    Suggestion::Code(genset_declaration(modifiers, &name, general, specifics))
}

/// `disjoint complete genset <G>_Subkind_Genset { ... }`
#[must_use]
pub fn subkind_genset(general: &str, subkinds: &[&str]) -> Suggestion {
    genset_code(true, true, "Subkind", general, subkinds)
}

/// `complete genset <G>_Role_Genset { ... }`
#[must_use]
pub fn role_genset(general: &str, roles: &[&str]) -> Suggestion {
    genset_code(false, true, "Role", general, roles)
}

/// `disjoint genset <G>_Phase_Genset { ... }`
#[must_use]
pub fn phase_genset(general: &str, phases: &[&str]) -> Suggestion {
    genset_code(true, false, "Phase", general, phases)
}

/// `disjoint complete genset <G>_RoleMixin_Genset { ... }`
#[must_use]
pub fn role_mixin_genset(mixin: &str, roles: &[&str]) -> Suggestion {
    genset_code(true, true, "RoleMixin", mixin, roles)
}

// =============================================================================
// Notes
// =============================================================================

/// Names how many more mediations a relator needs.
#[must_use]
pub fn missing_mediations(relator: &str, found: usize, required: usize) -> Suggestion {
    let more = required.saturating_sub(found);
    let noun = if more == 1 { "relation" } else { "relations" };
    Suggestion::Note(format!(
        "add {more} more {} {noun} connecting {relator} to the entities it mediates",
        RelationStereotype::Mediation
    ))
}

/// Names the dependency stereotypes a mode is missing.
#[must_use]
pub fn missing_dependencies(mode: &str, missing: &[RelationStereotype]) -> Suggestion {
    let notes: Vec<String> = missing
        .iter()
        .map(|stereotype| match stereotype {
            RelationStereotype::Characterization => {
                format!("a {stereotype} relation from {mode} to the entity it inheres in")
            }
            RelationStereotype::ExternalDependence => {
                format!("a {stereotype} relation from {mode} to the entity it depends on")
            }
            other => format!("a {other} relation involving {mode}"),
        })
        .collect();
    Suggestion::Note(format!("add {}", notes.join(" and ")))
}

/// Asks for more roles under a role mixin.
#[must_use]
pub fn too_few_roles(mixin: &str, found: usize, required: usize) -> Suggestion {
    let more = required.saturating_sub(found);
    let noun = if more == 1 { "role" } else { "roles" };
    Suggestion::Note(format!(
        "declare {more} more {noun} specializing {mixin}, then group them with a disjoint complete genset"
    ))
}
