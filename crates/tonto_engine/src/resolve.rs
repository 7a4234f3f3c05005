//! Reference resolution.
//!
//! Reports names that do not resolve to a declaration. These are semantic
//! diagnostics: the source parsed fine, it just refers to nothing.

use std::collections::{HashMap, HashSet};

use tonto_foundation::{Diagnostic, codes};
use tonto_language::{Attribute, Document};
use tracing::debug;

/// Attribute types that need no declaration.
pub const PRIMITIVE_TYPES: &[&str] = &[
    "string", "number", "boolean", "date", "time", "datetime", "int", "integer", "real", "float",
    "double",
];

/// Checks every reference in the document.
///
/// Produces `S001` for repeated class names, `S002` for unresolved
/// `specializes` targets, genset members and relation ends, and `S003`
/// warnings for unknown attribute types.
#[must_use]
pub fn resolve(document: &Document) -> Vec<Diagnostic> {
    let mut resolver = Resolver::new(document);
    resolver.check_classes();
    resolver.check_datatypes();
    resolver.check_gensets();
    resolver.check_relations();
    debug!(
        diagnostics = resolver.diagnostics.len(),
        "reference resolution finished"
    );
    resolver.diagnostics
}

struct Resolver<'d> {
    document: &'d Document,
    /// Class name to the line of its first declaration.
    classes: HashMap<&'d str, u32>,
    /// Classes, datatypes, and enums.
    types: HashSet<&'d str>,
    diagnostics: Vec<Diagnostic>,
}

impl<'d> Resolver<'d> {
    fn new(document: &'d Document) -> Self {
        let mut classes = HashMap::new();
        for class in &document.classes {
            classes.entry(class.name.as_str()).or_insert(class.span.line);
        }
        let types = document
            .classes
            .iter()
            .map(|c| c.name.as_str())
            .chain(document.datatypes.iter().map(|d| d.name.as_str()))
            .chain(document.enums.iter().map(|e| e.name.as_str()))
            .collect();
        Self {
            document,
            classes,
            types,
            diagnostics: Vec::new(),
        }
    }

    fn check_classes(&mut self) {
        let document = self.document;
        let mut seen = HashSet::new();
        for class in &document.classes {
            let span = class.span;
            if !seen.insert(class.name.as_str()) {
                let first = self.classes.get(class.name.as_str()).copied().unwrap_or(0);
                self.diagnostics.push(
                    Diagnostic::semantic_error(
                        span.line,
                        span.column,
                        format!(
                            "class '{}' is already declared on line {first}",
                            class.name
                        ),
                    )
                    .with_code(codes::DUPLICATE_CLASS),
                );
            }
            for parent in &class.parents {
                self.class_reference(parent, span.line, span.column, "specialized class");
            }
            self.attributes(&class.attributes);
        }
    }

    fn check_datatypes(&mut self) {
        let document = self.document;
        for datatype in &document.datatypes {
            if let Some(parent) = &datatype.parent {
                self.type_reference(
                    parent,
                    datatype.span.line,
                    datatype.span.column,
                    "specialized type",
                );
            }
            self.attributes(&datatype.attributes);
        }
    }

    fn check_gensets(&mut self) {
        let document = self.document;
        for genset in &document.gensets {
            let (line, column) = (genset.span.line, genset.span.column);
            self.class_reference(&genset.general, line, column, "genset general");
            for specific in &genset.specifics {
                self.class_reference(specific, line, column, "genset specific");
            }
        }
    }

    fn check_relations(&mut self) {
        let document = self.document;
        for relation in &document.relations {
            let (line, column) = (relation.span.line, relation.span.column);
            if !relation.is_internal() {
                self.type_reference(&relation.source, line, column, "relation end");
            }
            self.type_reference(&relation.target, line, column, "relation end");
        }
    }

    fn attributes(&mut self, attributes: &[Attribute]) {
        for attribute in attributes {
            let type_name = attribute.type_name.as_str();
            if PRIMITIVE_TYPES.contains(&type_name) || self.types.contains(type_name) {
                continue;
            }
            let suggestion = match self.close_match(type_name) {
                Some(candidate) => format!("did you mean '{candidate}'?"),
                None => format!(
                    "use a primitive type ({}) or declare datatype {type_name}",
                    PRIMITIVE_TYPES.join(", ")
                ),
            };
            self.diagnostics.push(
                Diagnostic::semantic_warning(
                    attribute.span.line,
                    attribute.span.column,
                    format!(
                        "attribute '{}' has unknown type '{type_name}'",
                        attribute.name
                    ),
                )
                .with_code(codes::UNKNOWN_ATTRIBUTE_TYPE)
                .with_suggestion(suggestion),
            );
        }
    }

    fn class_reference(&mut self, name: &str, line: u32, column: u32, role: &str) {
        if self.classes.contains_key(name) {
            return;
        }
        let diagnostic = self.unresolved(name, line, column, &format!("{role} '{name}'"));
        self.diagnostics.push(diagnostic);
    }

    fn type_reference(&mut self, name: &str, line: u32, column: u32, role: &str) {
        if self.types.contains(name) {
            return;
        }
        let diagnostic = self.unresolved(name, line, column, &format!("{role} '{name}'"));
        self.diagnostics.push(diagnostic);
    }

    fn unresolved(&self, name: &str, line: u32, column: u32, what: &str) -> Diagnostic {
        let diagnostic = Diagnostic::semantic_error(
            line,
            column,
            format!("{what} is not declared"),
        )
        .with_code(codes::UNRESOLVED_REFERENCE);

        match self.close_match(name) {
            Some(candidate) => diagnostic.with_suggestion(format!("did you mean '{candidate}'?")),
            None => diagnostic,
        }
    }

    /// Declared type whose name differs from `name` only in case.
    fn close_match(&self, name: &str) -> Option<&'d str> {
        self.types
            .iter()
            .copied()
            .filter(|candidate| candidate.eq_ignore_ascii_case(name))
            .min()
    }
}
