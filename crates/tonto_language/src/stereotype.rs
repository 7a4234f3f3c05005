//! Closed stereotype sets.
//!
//! Class and relation stereotypes are fixed vocabularies. Each is a plain
//! enum so the pattern rules can match on them exhaustively.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Generates a stereotype enum with its keyword table.
macro_rules! stereotypes {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $keyword:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            /// Looks up a stereotype by its source keyword (without `@`).
            #[must_use]
            pub fn from_keyword(keyword: &str) -> Option<Self> {
                match keyword {
                    $( $keyword => Some(Self::$variant), )+
                    _ => None,
                }
            }

            /// Returns the source keyword (without `@`).
            #[must_use]
            pub const fn keyword(self) -> &'static str {
                match self {
                    $( Self::$variant => $keyword, )+
                }
            }
        }
    };
}

stereotypes! {
    /// Ontological category of a class.
    ClassStereotype {
        /// `kind`
        Kind => "kind",
        /// `subkind`
        Subkind => "subkind",
        /// `role`
        Role => "role",
        /// `phase`
        Phase => "phase",
        /// `category`
        Category => "category",
        /// `mixin`
        Mixin => "mixin",
        /// `roleMixin`
        RoleMixin => "roleMixin",
        /// `phaseMixin`
        PhaseMixin => "phaseMixin",
        /// `historicalRole`
        HistoricalRole => "historicalRole",
        /// `historicalRoleMixin`
        HistoricalRoleMixin => "historicalRoleMixin",
        /// `relator`
        Relator => "relator",
        /// `mode`
        Mode => "mode",
        /// `quality`
        Quality => "quality",
        /// `collective`
        Collective => "collective",
        /// `quantity`
        Quantity => "quantity",
        /// `event`
        Event => "event",
        /// `situation`
        Situation => "situation",
        /// `type`
        Type => "type",
    }
}

stereotypes! {
    /// Ontological category of a relation, written `@name` in source.
    RelationStereotype {
        /// `@material`
        Material => "material",
        /// `@derivation`
        Derivation => "derivation",
        /// `@comparative`
        Comparative => "comparative",
        /// `@mediation`
        Mediation => "mediation",
        /// `@characterization`
        Characterization => "characterization",
        /// `@externalDependence`
        ExternalDependence => "externalDependence",
        /// `@componentOf`
        ComponentOf => "componentOf",
        /// `@memberOf`
        MemberOf => "memberOf",
        /// `@subCollectionOf`
        SubCollectionOf => "subCollectionOf",
        /// `@subQuantityOf`
        SubQuantityOf => "subQuantityOf",
        /// `@instantiation`
        Instantiation => "instantiation",
        /// `@termination`
        Termination => "termination",
        /// `@participational`
        Participational => "participational",
        /// `@participation`
        Participation => "participation",
        /// `@historicalDependence`
        HistoricalDependence => "historicalDependence",
        /// `@creation`
        Creation => "creation",
        /// `@manifestation`
        Manifestation => "manifestation",
        /// `@bringsAbout`
        BringsAbout => "bringsAbout",
        /// `@triggers`
        Triggers => "triggers",
        /// `@composition`
        Composition => "composition",
        /// `@aggregation`
        Aggregation => "aggregation",
        /// `@inherence`
        Inherence => "inherence",
        /// `@value`
        Value => "value",
        /// `@formal`
        Formal => "formal",
        /// `@constitution`
        Constitution => "constitution",
        /// `@subEventOf`
        SubEventOf => "subEventOf",
        /// `@causation`
        Causation => "causation",
        /// `@exemplification`
        Exemplification => "exemplification",
        /// `@qualification`
        Qualification => "qualification",
    }
}

impl fmt::Display for ClassStereotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl fmt::Display for RelationStereotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.keyword())
    }
}
