//! Specialization index.
//!
//! Derived from a [`Document`] on every validation run: for each class the
//! names of its direct parents, for each general class its children and the
//! gensets naming it as `general`. The document is only read.

use std::collections::HashMap;

use tonto_language::{
    ClassDecl, ClassId, ClassStereotype, Document, GensetDecl, GensetId, RelationStereotype,
};

/// Lookup tables over one document.
#[derive(Debug)]
pub struct SpecializationIndex<'d> {
    document: &'d Document,
    /// First declaration of each class name.
    classes: HashMap<&'d str, ClassId>,
    /// Direct parents, from `specializes` clauses and genset membership.
    parents: HashMap<&'d str, Vec<&'d str>>,
    /// Gensets by general class, in declaration order.
    gensets: HashMap<&'d str, Vec<GensetId>>,
}

impl<'d> SpecializationIndex<'d> {
    /// Builds the index.
    #[must_use]
    pub fn build(document: &'d Document) -> Self {
        let mut classes = HashMap::new();
        let mut parents: HashMap<&'d str, Vec<&'d str>> = HashMap::new();
        let mut gensets: HashMap<&'d str, Vec<GensetId>> = HashMap::new();

        for (id, class) in document.classes_with_ids() {
            classes.entry(class.name.as_str()).or_insert(id);
            let entry = parents.entry(class.name.as_str()).or_default();
            for parent in &class.parents {
                if !entry.contains(&parent.as_str()) {
                    entry.push(parent.as_str());
                }
            }
        }

        for (i, genset) in document.gensets.iter().enumerate() {
            gensets
                .entry(genset.general.as_str())
                .or_default()
                .push(GensetId(i));
            for specific in &genset.specifics {
                let entry = parents.entry(specific.as_str()).or_default();
                if !entry.contains(&genset.general.as_str()) {
                    entry.push(genset.general.as_str());
                }
            }
        }

        Self {
            document,
            classes,
            parents,
            gensets,
        }
    }

    /// Returns the indexed document.
    #[must_use]
    pub const fn document(&self) -> &'d Document {
        self.document
    }

    /// Returns the first declaration of `name`.
    #[must_use]
    pub fn class(&self, name: &str) -> Option<&'d ClassDecl> {
        let document = self.document;
        self.classes.get(name).and_then(|&id| document.class(id))
    }

    /// Returns true if a class called `name` is declared.
    #[must_use]
    pub fn is_declared(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Iterates the first declaration of each class, in source order.
    pub fn subjects(&self) -> impl Iterator<Item = &'d ClassDecl> + '_ {
        self.document
            .classes_with_ids()
            .filter(|(id, class)| self.classes.get(class.name.as_str()) == Some(id))
            .map(|(_, class)| class)
    }

    /// Direct parents of `name`.
    #[must_use]
    pub fn parents_of(&self, name: &str) -> &[&'d str] {
        self.parents.get(name).map_or(&[], Vec::as_slice)
    }

    /// Declared classes with the given stereotype that directly specialize
    /// `general`, in declaration order.
    #[must_use]
    pub fn specializations(&self, general: &str, stereotype: ClassStereotype) -> Vec<&'d str> {
        self.subjects()
            .filter(|class| class.stereotype == stereotype)
            .filter(|class| self.parents_of(&class.name).contains(&general))
            .map(|class| class.name.as_str())
            .collect()
    }

    /// Gensets whose general is `general`, in declaration order.
    pub fn gensets_for(&self, general: &str) -> impl Iterator<Item = &'d GensetDecl> + '_ {
        let document = self.document;
        self.gensets
            .get(general)
            .into_iter()
            .flatten()
            .filter_map(move |id| document.gensets.get(id.index()))
    }

    /// Counts relations with the given stereotype that have `class` at
    /// either end.
    #[must_use]
    pub fn count_relations(&self, class: &str, stereotype: RelationStereotype) -> usize {
        self.document
            .relations
            .iter()
            .filter(|r| r.stereotype == Some(stereotype) && r.involves(class))
            .count()
    }
}
