//! Report rendering.
//!
//! Text and JSON views of an [`AnalysisResult`], plus the lexical,
//! syntactic, and semantic views used by the interactive shell.

use std::fmt::Write;

use serde::Serialize;
use tonto_engine::PatternResult;
use tonto_foundation::{Diagnostic, Error, ErrorKind, Result, Severity};
use tonto_language::{ClassDecl, Document, GensetDecl, Item, RelationDecl};

use crate::analysis::{AnalysisResult, Summary};
use crate::config::{OutputFormat, ReportConfig};

// =============================================================================
// Exit Status
// =============================================================================

/// Process outcome of a batch run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ExitStatus {
    /// Nothing failed.
    Success,
    /// A file had failing diagnostics.
    DiagnosticsFailed,
    /// A file could not be analyzed at all.
    Fatal,
}

impl ExitStatus {
    /// Returns the process exit code.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::DiagnosticsFailed => 1,
            Self::Fatal => 2,
        }
    }

    /// Status for one analyzed file.
    #[must_use]
    pub fn for_result(result: &AnalysisResult, strict: bool) -> Self {
        if result.fails(strict) {
            Self::DiagnosticsFailed
        } else {
            Self::Success
        }
    }
}

// =============================================================================
// Colors
// =============================================================================

const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn paint(text: &str, color: &str, enabled: bool) -> String {
    if enabled {
        format!("{color}{text}{RESET}")
    } else {
        text.to_string()
    }
}

const fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => RED,
        Severity::Warning => YELLOW,
        Severity::Info => CYAN,
    }
}

// =============================================================================
// Full Reports
// =============================================================================

/// Renders the report for one file in the configured format.
///
/// # Errors
///
/// Returns a serialization error if JSON encoding fails.
pub fn render(result: &AnalysisResult, name: &str, config: &ReportConfig) -> Result<String> {
    match config.format {
        OutputFormat::Text => Ok(render_text(result, name, config)),
        OutputFormat::Json => render_json(result, name, config),
    }
}

/// Renders diagnostics, optional satisfied patterns, and the summary.
#[must_use]
pub fn render_text(result: &AnalysisResult, name: &str, config: &ReportConfig) -> String {
    let mut out = String::new();
    out.push_str(&paint(&format!("== {name}"), BOLD, config.color));
    out.push('\n');
    out.push_str(&render_diagnostics(&result.diagnostics, Some(name), config));
    if config.show_satisfied {
        out.push_str(&render_patterns(result.satisfied(), config));
    }
    out.push_str(&result.summary().to_string());
    out.push('\n');
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    file: &'a str,
    summary: Summary,
    diagnostics: &'a [Diagnostic],
    patterns: Vec<&'a PatternResult>,
}

/// Renders one file's report as a JSON object.
///
/// # Errors
///
/// Returns a serialization error if encoding fails.
pub fn render_json(result: &AnalysisResult, name: &str, config: &ReportConfig) -> Result<String> {
    let report = JsonReport {
        file: name,
        summary: result.summary(),
        diagnostics: &result.diagnostics,
        patterns: result
            .patterns
            .iter()
            .filter(|r| config.show_satisfied || r.is_violated())
            .collect(),
    };
    serde_json::to_string_pretty(&report)
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}

// =============================================================================
// Views
// =============================================================================

/// One diagnostic per line, with suggestions indented below.
#[must_use]
pub fn render_diagnostics(
    diagnostics: &[Diagnostic],
    file: Option<&str>,
    config: &ReportConfig,
) -> String {
    let mut out = String::new();
    for diagnostic in diagnostics {
        let line = match file {
            Some(file) => format!("{file}:{diagnostic}"),
            None => diagnostic.to_string(),
        };
        let _ = writeln!(
            out,
            "{}",
            paint(&line, severity_color(diagnostic.severity), config.color)
        );
        if config.show_suggestions {
            if let Some(suggestion) = &diagnostic.suggestion {
                let _ = writeln!(
                    out,
                    "    {} {suggestion}",
                    paint("suggestion:", CYAN, config.color)
                );
            }
        }
    }
    out
}

/// Pattern results, one per line.
#[must_use]
pub fn render_patterns<'a>(
    results: impl IntoIterator<Item = &'a PatternResult>,
    config: &ReportConfig,
) -> String {
    let mut out = String::new();
    for result in results {
        let color = if result.is_satisfied() { GREEN } else { YELLOW };
        let _ = writeln!(out, "{}", paint(&result.to_string(), color, config.color));
        if config.show_suggestions {
            if let Some(suggestion) = &result.suggestion {
                let _ = writeln!(
                    out,
                    "    {} {suggestion}",
                    paint("suggestion:", CYAN, config.color)
                );
            }
        }
    }
    out
}

/// The lexical view: one token per line.
#[must_use]
pub fn render_tokens(result: &AnalysisResult) -> String {
    let mut out = String::new();
    for token in &result.tokens {
        let _ = writeln!(
            out,
            "{:>4}:{:<3} {:<20} {}",
            token.line(),
            token.column(),
            token.category(),
            token.lexeme
        );
    }
    out
}

/// The syntactic view: an indented outline of the document.
#[must_use]
pub fn render_tree(document: &Document, config: &ReportConfig) -> String {
    let mut out = String::new();
    for item in document.items.iter().copied() {
        render_item(&mut out, document, item, 0, config);
    }
    if let Some(package) = &document.package {
        let _ = writeln!(out, "{} {}", paint("package", BOLD, config.color), package.name);
        for item in package.items.iter().copied() {
            render_item(&mut out, document, item, 1, config);
        }
    }
    out
}

fn render_item(out: &mut String, document: &Document, item: Item, depth: usize, config: &ReportConfig) {
    let pad = "  ".repeat(depth);
    match item {
        Item::Class(id) => {
            if let Some(class) = document.class(id) {
                render_class(out, document, class, &pad, config);
            }
        }
        Item::DataType(id) => {
            if let Some(datatype) = document.datatypes.get(id.index()) {
                let _ = writeln!(out, "{pad}{} {}", paint("datatype", BOLD, config.color), datatype.name);
                for attribute in &datatype.attributes {
                    let _ = writeln!(out, "{pad}  {}: {}", attribute.name, attribute.type_name);
                }
            }
        }
        Item::Enum(id) => {
            if let Some(e) = document.enums.get(id.index()) {
                let _ = writeln!(out, "{pad}{} {}", paint("enum", BOLD, config.color), e.name);
                for literal in &e.literals {
                    match &literal.suffix {
                        Some(suffix) => {
                            let _ = writeln!(out, "{pad}  {} (suffix {suffix})", literal.name);
                        }
                        None => {
                            let _ = writeln!(out, "{pad}  {}", literal.name);
                        }
                    }
                }
            }
        }
        Item::Genset(id) => {
            if let Some(genset) = document.gensets.get(id.index()) {
                render_genset(out, genset, &pad, config);
            }
        }
        Item::Relation(id) => {
            if let Some(relation) = document.relation(id) {
                let _ = writeln!(out, "{pad}{}", describe_relation(relation));
            }
        }
    }
}

fn render_class(
    out: &mut String,
    document: &Document,
    class: &ClassDecl,
    pad: &str,
    config: &ReportConfig,
) {
    let _ = write!(
        out,
        "{pad}{} {}",
        paint(class.stereotype.keyword(), BOLD, config.color),
        class.name
    );
    if !class.parents.is_empty() {
        let _ = write!(out, " -> {}", class.parents.join(", "));
    }
    out.push('\n');
    for attribute in &class.attributes {
        let _ = write!(out, "{pad}  {}: {}", attribute.name, attribute.type_name);
        if let Some(cardinality) = attribute.cardinality {
            let _ = write!(out, " {cardinality}");
        }
        out.push('\n');
    }
    for relation in class.relations.iter().filter_map(|&id| document.relation(id)) {
        let _ = writeln!(out, "{pad}  {}", describe_relation(relation));
    }
}

fn render_genset(out: &mut String, genset: &GensetDecl, pad: &str, config: &ReportConfig) {
    let _ = write!(
        out,
        "{pad}{} {}",
        paint("genset", BOLD, config.color),
        genset.display_name()
    );
    let modifiers = genset.modifiers.to_string();
    if !modifiers.is_empty() {
        let _ = write!(out, " [{modifiers}]");
    }
    let _ = writeln!(
        out,
        " {} <- {}",
        genset.general,
        genset.specifics.join(", ")
    );
}

fn describe_relation(relation: &RelationDecl) -> String {
    let mut text = String::new();
    if let Some(stereotype) = relation.stereotype {
        let _ = write!(text, "{stereotype} ");
    }
    text.push_str("relation");
    if let Some(name) = &relation.name {
        let _ = write!(text, " {name}");
    }
    let _ = write!(
        text,
        ": {} {} {}",
        relation.source, relation.operator, relation.target
    );
    text
}

/// Dims text when colors are on.
#[must_use]
pub fn dim(text: &str, config: &ReportConfig) -> String {
    paint(text, DIM, config.color)
}
