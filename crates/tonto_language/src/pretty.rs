//! Source printer for documents.
//!
//! Renders a [`Document`] back to canonical TONTO source: one declaration
//! per paragraph, gensets in block form, internal relations inside their
//! class body.
//!
//! # Example
//!
//! ```
//! use tonto_language::{parse_source, pretty::print_document};
//!
//! let (doc, _) = parse_source("kind Pessoa  subkind Aluno specializes Pessoa");
//! assert_eq!(
//!     print_document(&doc),
//!     "kind Pessoa\n\nsubkind Aluno specializes Pessoa\n"
//! );
//! ```

use std::fmt::Write;

use crate::ast::{
    Attribute, ClassDecl, DataTypeDecl, Document, EnumDecl, GensetDecl, Item, RelationDecl,
};

/// Configuration for printing.
#[derive(Debug, Clone)]
pub struct PrettyConfig {
    /// Number of spaces for each indentation level.
    pub indent_width: usize,
    /// Blank line between top-level declarations.
    pub blank_lines: bool,
}

impl Default for PrettyConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            blank_lines: true,
        }
    }
}

/// Prints a whole document.
#[must_use]
pub fn print_document(document: &Document) -> String {
    print_document_with_config(document, &PrettyConfig::default())
}

/// Prints a whole document with custom configuration.
#[must_use]
pub fn print_document_with_config(document: &Document, config: &PrettyConfig) -> String {
    let mut printer = PrettyPrinter::new(document, config);
    printer.print_all();
    printer.output
}

/// Printer state.
struct PrettyPrinter<'a> {
    document: &'a Document,
    config: &'a PrettyConfig,
    output: String,
}

impl<'a> PrettyPrinter<'a> {
    fn new(document: &'a Document, config: &'a PrettyConfig) -> Self {
        Self {
            document,
            config,
            output: String::new(),
        }
    }

    fn print_all(&mut self) {
        let document = self.document;
        let mut first = true;

        for &item in &document.items {
            self.separate(&mut first);
            self.print_item(item);
        }
        if let Some(package) = &document.package {
            self.separate(&mut first);
            let _ = writeln!(self.output, "package {}", package.name);
            for &item in &package.items {
                self.separate(&mut first);
                self.print_item(item);
            }
        }
    }

    fn separate(&mut self, first: &mut bool) {
        if !*first && self.config.blank_lines {
            self.output.push('\n');
        }
        *first = false;
    }

    fn print_item(&mut self, item: Item) {
        let document = self.document;
        match item {
            Item::Class(id) => {
                if let Some(class) = document.class(id) {
                    self.print_class(class);
                }
            }
            Item::DataType(id) => {
                if let Some(datatype) = document.datatypes.get(id.index()) {
                    self.print_datatype(datatype);
                }
            }
            Item::Enum(id) => {
                if let Some(e) = document.enums.get(id.index()) {
                    self.print_enum(e);
                }
            }
            Item::Genset(id) => {
                if let Some(genset) = document.gensets.get(id.index()) {
                    self.print_genset(genset);
                }
            }
            Item::Relation(id) => {
                if let Some(relation) = document.relation(id) {
                    self.print_external_relation(relation);
                }
            }
        }
    }

    fn print_class(&mut self, class: &ClassDecl) {
        let _ = write!(self.output, "{} {}", class.stereotype, class.name);
        if let Some(partition) = &class.partition {
            let _ = write!(self.output, " of {partition}");
        }
        if !class.parents.is_empty() {
            let _ = write!(self.output, " specializes {}", class.parents.join(", "));
        }

        if class.attributes.is_empty() && class.relations.is_empty() {
            self.output.push('\n');
            return;
        }

        self.output.push_str(" {\n");
        self.print_attributes(&class.attributes);
        let document = self.document;
        for relation in class.relations.iter().filter_map(|&id| document.relation(id)) {
            self.indent();
            self.print_internal_relation(relation);
            self.output.push('\n');
        }
        self.output.push_str("}\n");
    }

    fn print_datatype(&mut self, datatype: &DataTypeDecl) {
        let _ = write!(self.output, "datatype {}", datatype.name);
        if let Some(parent) = &datatype.parent {
            let _ = write!(self.output, " specializes {parent}");
        }
        if datatype.attributes.is_empty() {
            self.output.push('\n');
            return;
        }
        self.output.push_str(" {\n");
        self.print_attributes(&datatype.attributes);
        self.output.push_str("}\n");
    }

    fn print_attributes(&mut self, attributes: &[Attribute]) {
        for attribute in attributes {
            self.indent();
            let _ = write!(self.output, "{}: {}", attribute.name, attribute.type_name);
            if let Some(cardinality) = attribute.cardinality {
                let _ = write!(self.output, " {cardinality}");
            }
            self.output.push('\n');
        }
    }

    fn print_enum(&mut self, e: &EnumDecl) {
        let literals: Vec<String> = e.literals.iter().map(|l| l.full_name()).collect();
        if literals.is_empty() {
            let _ = writeln!(self.output, "enum {} {{ }}", e.name);
        } else {
            let _ = writeln!(self.output, "enum {} {{ {} }}", e.name, literals.join(", "));
        }
    }

    fn print_genset(&mut self, genset: &GensetDecl) {
        let modifiers = genset.modifiers.to_string();
        if !modifiers.is_empty() {
            let _ = write!(self.output, "{modifiers} ");
        }
        self.output.push_str("genset");
        if let Some(name) = &genset.name {
            let _ = write!(self.output, " {name}");
        }
        self.output.push_str(" {\n");
        self.indent();
        let _ = writeln!(self.output, "general {}", genset.general);
        self.indent();
        let _ = writeln!(self.output, "specifics {}", genset.specifics.join(", "));
        self.output.push_str("}\n");
    }

    fn print_internal_relation(&mut self, relation: &RelationDecl) {
        if let Some(stereotype) = relation.stereotype {
            let _ = write!(self.output, "{stereotype} ");
        }
        if let Some(cardinality) = relation.source_cardinality {
            let _ = write!(self.output, "{cardinality} ");
        }
        self.print_relation_tail(relation);
    }

    fn print_external_relation(&mut self, relation: &RelationDecl) {
        if let Some(stereotype) = relation.stereotype {
            let _ = write!(self.output, "{stereotype} ");
        }
        self.output.push_str("relation ");
        if let Some(name) = &relation.name {
            let _ = write!(self.output, "{name} ");
        }
        let _ = write!(self.output, "{} ", relation.source);
        if let Some(cardinality) = relation.source_cardinality {
            let _ = write!(self.output, "{cardinality} ");
        }
        self.print_relation_tail(relation);
        self.output.push('\n');
    }

    /// `op (name --)? [c]? Target`; the name only appears here for
    /// internal relations.
    fn print_relation_tail(&mut self, relation: &RelationDecl) {
        let _ = write!(self.output, "{}", relation.operator);
        if relation.is_internal() {
            if let Some(name) = &relation.name {
                let _ = write!(self.output, " {name} --");
            }
        }
        if let Some(cardinality) = relation.target_cardinality {
            let _ = write!(self.output, " {cardinality}");
        }
        let _ = write!(self.output, " {}", relation.target);
    }

    fn indent(&mut self) {
        for _ in 0..self.config.indent_width {
            self.output.push(' ');
        }
    }
}
