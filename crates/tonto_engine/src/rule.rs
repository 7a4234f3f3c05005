//! The ontology design pattern rules.
//!
//! [`RULES`] is a fixed table. Each entry pairs a subject predicate with a
//! check; checks for genset-shaped patterns share [`check_genset`].

use std::fmt;

use tonto_language::{ClassDecl, ClassStereotype, GensetDecl, RelationStereotype};
use tracing::trace;

use crate::index::SpecializationIndex;
use crate::pattern::{PatternKind, PatternResult};
use crate::suggestion::{self, Suggestion};

/// Minimum number of `@mediation` relations on a relator.
pub const MIN_MEDIATIONS: usize = 2;

/// Minimum number of roles under a role mixin.
pub const MIN_MIXIN_ROLES: usize = 2;

/// A pattern rule.
#[derive(Clone, Copy)]
pub struct Rule {
    /// The pattern this rule checks.
    pub kind: PatternKind,
    /// One-line description.
    pub description: &'static str,
    /// Returns true if the class is a subject of this rule.
    pub applies: fn(&SpecializationIndex<'_>, &ClassDecl) -> bool,
    /// Evaluates the rule on a subject.
    pub check: fn(&SpecializationIndex<'_>, &ClassDecl) -> PatternResult,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("kind", &self.kind)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl Rule {
    /// Evaluates the rule if the class is a subject.
    #[must_use]
    pub fn evaluate(
        &self,
        index: &SpecializationIndex<'_>,
        class: &ClassDecl,
    ) -> Option<PatternResult> {
        if !(self.applies)(index, class) {
            return None;
        }
        let result = (self.check)(index, class);
        trace!(
            pattern = self.kind.name(),
            subject = %class.name,
            status = %result.status,
            "pattern evaluated"
        );
        Some(result)
    }
}

/// Every pattern rule, in evaluation order.
pub static RULES: [Rule; 6] = [
    Rule {
        kind: PatternKind::Subkind,
        description: "subkinds of a class form a disjoint complete genset",
        applies: has_subkinds,
        check: check_subkinds,
    },
    Rule {
        kind: PatternKind::Role,
        description: "roles of a class form a complete, non-disjoint genset",
        applies: has_roles,
        check: check_roles,
    },
    Rule {
        kind: PatternKind::Phase,
        description: "phases of a class form a disjoint genset",
        applies: has_phases,
        check: check_phases,
    },
    Rule {
        kind: PatternKind::Relator,
        description: "a relator mediates at least two entities",
        applies: is_relator,
        check: check_relator,
    },
    Rule {
        kind: PatternKind::Mode,
        description: "a mode has a characterization and an external dependence",
        applies: is_mode,
        check: check_mode,
    },
    Rule {
        kind: PatternKind::RoleMixin,
        description: "a role mixin is covered by a disjoint complete genset of two or more roles",
        applies: is_role_mixin,
        check: check_role_mixin,
    },
];

fn has_specializations(
    index: &SpecializationIndex<'_>,
    class: &ClassDecl,
    stereotype: ClassStereotype,
) -> bool {
    !index.specializations(&class.name, stereotype).is_empty()
}

fn has_subkinds(index: &SpecializationIndex<'_>, class: &ClassDecl) -> bool {
    has_specializations(index, class, ClassStereotype::Subkind)
}

/// Roles under a role mixin belong to the role mixin rule.
fn has_roles(index: &SpecializationIndex<'_>, class: &ClassDecl) -> bool {
    class.stereotype != ClassStereotype::RoleMixin
        && has_specializations(index, class, ClassStereotype::Role)
}

fn has_phases(index: &SpecializationIndex<'_>, class: &ClassDecl) -> bool {
    has_specializations(index, class, ClassStereotype::Phase)
}

fn is_relator(_: &SpecializationIndex<'_>, class: &ClassDecl) -> bool {
    class.stereotype == ClassStereotype::Relator
}

fn is_mode(_: &SpecializationIndex<'_>, class: &ClassDecl) -> bool {
    class.stereotype == ClassStereotype::Mode
}

fn is_role_mixin(_: &SpecializationIndex<'_>, class: &ClassDecl) -> bool {
    class.stereotype == ClassStereotype::RoleMixin
}

fn check_subkinds(index: &SpecializationIndex<'_>, class: &ClassDecl) -> PatternResult {
    check_genset(index, class, &SUBKIND_SHAPE)
}

fn check_roles(index: &SpecializationIndex<'_>, class: &ClassDecl) -> PatternResult {
    check_genset(index, class, &ROLE_SHAPE)
}

fn check_phases(index: &SpecializationIndex<'_>, class: &ClassDecl) -> PatternResult {
    check_genset(index, class, &PHASE_SHAPE)
}

// =============================================================================
// Genset Patterns
// =============================================================================

/// Expected state of one genset modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expect {
    /// The modifier must be present.
    Required,
    /// The modifier must be absent.
    Forbidden,
    /// Either is fine.
    Any,
}

impl Expect {
    const fn accepts(self, present: bool) -> bool {
        match self {
            Self::Required => present,
            Self::Forbidden => !present,
            Self::Any => true,
        }
    }
}

/// What a genset-shaped pattern expects.
#[derive(Clone, Copy)]
pub struct GensetShape {
    /// Pattern reported.
    pub kind: PatternKind,
    /// Stereotype of the specifics.
    pub stereotype: ClassStereotype,
    /// Plural noun for messages.
    pub noun: &'static str,
    /// `disjoint` expectation.
    pub disjoint: Expect,
    /// `complete` expectation.
    pub complete: Expect,
    /// Suggestion generator.
    pub suggest: fn(&str, &[&str]) -> Suggestion,
}

/// Subkind pattern shape.
pub const SUBKIND_SHAPE: GensetShape = GensetShape {
    kind: PatternKind::Subkind,
    stereotype: ClassStereotype::Subkind,
    noun: "subkinds",
    disjoint: Expect::Required,
    complete: Expect::Required,
    suggest: suggestion::subkind_genset,
};

/// Role pattern shape.
pub const ROLE_SHAPE: GensetShape = GensetShape {
    kind: PatternKind::Role,
    stereotype: ClassStereotype::Role,
    noun: "roles",
    disjoint: Expect::Forbidden,
    complete: Expect::Required,
    suggest: suggestion::role_genset,
};

/// Phase pattern shape.
pub const PHASE_SHAPE: GensetShape = GensetShape {
    kind: PatternKind::Phase,
    stereotype: ClassStereotype::Phase,
    noun: "phases",
    disjoint: Expect::Required,
    complete: Expect::Any,
    suggest: suggestion::phase_genset,
};

/// Role mixin shape, checked once enough roles exist.
pub const ROLE_MIXIN_SHAPE: GensetShape = GensetShape {
    kind: PatternKind::RoleMixin,
    stereotype: ClassStereotype::Role,
    noun: "roles",
    disjoint: Expect::Required,
    complete: Expect::Required,
    suggest: suggestion::role_mixin_genset,
};

/// Problems found on one candidate genset.
#[derive(Debug, Default)]
struct Mismatch<'a> {
    missing: Vec<&'a str>,
    extra: Vec<&'a str>,
    modifiers: Vec<String>,
}

impl Mismatch<'_> {
    fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty() && self.modifiers.is_empty()
    }

    fn describe(&self) -> String {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!("is missing specifics {}", self.missing.join(", ")));
        }
        if !self.extra.is_empty() {
            parts.push(format!("has unexpected specifics {}", self.extra.join(", ")));
        }
        parts.extend(self.modifiers.iter().cloned());
        parts.join("; ")
    }
}

fn compare<'a>(genset: &'a GensetDecl, expected: &[&'a str], shape: &GensetShape) -> Mismatch<'a> {
    let mut mismatch = Mismatch {
        missing: expected
            .iter()
            .copied()
            .filter(|name| !genset.specifics.iter().any(|s| s == name))
            .collect(),
        extra: genset
            .specifics
            .iter()
            .map(String::as_str)
            .filter(|name| !expected.contains(name))
            .collect(),
        modifiers: Vec::new(),
    };

    for (word, expect, present) in [
        ("disjoint", shape.disjoint, genset.modifiers.disjoint),
        ("complete", shape.complete, genset.modifiers.complete),
    ] {
        if !expect.accepts(present) {
            mismatch.modifiers.push(match expect {
                Expect::Forbidden => format!("must not be '{word}'"),
                _ => format!("is missing '{word}'"),
            });
        }
    }
    mismatch
}

/// Checks that some genset over `class` has exactly the expected specifics
/// and the expected modifiers.
///
/// On violation the detail describes the candidate sharing the most
/// specifics with the expected set (the first one on ties). Gensets sharing
/// none are not candidates; with no candidate the genset counts as missing.
#[must_use]
pub fn check_genset(
    index: &SpecializationIndex<'_>,
    class: &ClassDecl,
    shape: &GensetShape,
) -> PatternResult {
    let general = class.name.as_str();
    let expected = index.specializations(general, shape.stereotype);
    let line = class.span.line;

    let mut best: Option<(&GensetDecl, Mismatch<'_>, usize)> = None;
    for genset in index.gensets_for(general) {
        let mismatch = compare(genset, &expected, shape);
        if mismatch.is_empty() {
            return PatternResult::satisfied(
                shape.kind,
                general,
                line,
                format!(
                    "genset {} covers {} {}",
                    genset.display_name(),
                    shape.noun,
                    expected.join(", ")
                ),
            )
            .with_genset(genset.display_name());
        }
        let overlap = expected.len() - mismatch.missing.len();
        if overlap > 0 && best.as_ref().is_none_or(|(_, _, score)| overlap > *score) {
            best = Some((genset, mismatch, overlap));
        }
    }

    let suggestion = (shape.suggest)(general, &expected);
    match best {
        Some((genset, mismatch, _)) => PatternResult::violated(
            shape.kind,
            general,
            line,
            format!("genset {} {}", genset.display_name(), mismatch.describe()),
        )
        .with_genset(genset.display_name())
        .with_suggestion(suggestion),
        None => PatternResult::violated(
            shape.kind,
            general,
            line,
            format!(
                "no genset with general {general} covers its {} {}",
                shape.noun,
                expected.join(", ")
            ),
        )
        .with_suggestion(suggestion),
    }
}

// =============================================================================
// Relator, Mode, RoleMixin
// =============================================================================

fn check_relator(index: &SpecializationIndex<'_>, class: &ClassDecl) -> PatternResult {
    let found = index.count_relations(&class.name, RelationStereotype::Mediation);
    let noun = if found == 1 { "relation" } else { "relations" };
    if found >= MIN_MEDIATIONS {
        return PatternResult::satisfied(
            PatternKind::Relator,
            &class.name,
            class.span.line,
            format!("{found} @mediation {noun} found"),
        );
    }
    PatternResult::violated(
        PatternKind::Relator,
        &class.name,
        class.span.line,
        format!("{found} @mediation {noun} found, at least {MIN_MEDIATIONS} required"),
    )
    .with_suggestion(suggestion::missing_mediations(
        &class.name,
        found,
        MIN_MEDIATIONS,
    ))
}

fn check_mode(index: &SpecializationIndex<'_>, class: &ClassDecl) -> PatternResult {
    let missing: Vec<RelationStereotype> = [
        RelationStereotype::Characterization,
        RelationStereotype::ExternalDependence,
    ]
    .into_iter()
    .filter(|&stereotype| index.count_relations(&class.name, stereotype) == 0)
    .collect();

    if missing.is_empty() {
        return PatternResult::satisfied(
            PatternKind::Mode,
            &class.name,
            class.span.line,
            "@characterization and @externalDependence found",
        );
    }
    let names: Vec<String> = missing.iter().map(ToString::to_string).collect();
    PatternResult::violated(
        PatternKind::Mode,
        &class.name,
        class.span.line,
        format!("missing {}", names.join(" and ")),
    )
    .with_suggestion(suggestion::missing_dependencies(&class.name, &missing))
}

fn check_role_mixin(index: &SpecializationIndex<'_>, class: &ClassDecl) -> PatternResult {
    let roles = index.specializations(&class.name, ClassStereotype::Role);
    if roles.len() < MIN_MIXIN_ROLES {
        let noun = if roles.len() == 1 { "role specializes" } else { "roles specialize" };
        return PatternResult::violated(
            PatternKind::RoleMixin,
            &class.name,
            class.span.line,
            format!(
                "{} {noun} {}, at least {MIN_MIXIN_ROLES} required",
                roles.len(),
                class.name
            ),
        )
        .with_suggestion(suggestion::too_few_roles(
            &class.name,
            roles.len(),
            MIN_MIXIN_ROLES,
        ));
    }
    check_genset(index, class, &ROLE_MIXIN_SHAPE)
}
