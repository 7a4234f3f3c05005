//! Line editor abstraction for the interactive shell.
//!
//! The shell talks to a [`LineEditor`]; the rustyline implementation adds
//! completion, hints, highlighting, and multi-line input for open braces.

use std::borrow::Cow;

use rustyline::completion::{Completer, FilenameCompleter, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator as RLValidator};
use tonto_foundation::{Error, ErrorKind, Result};
use tonto_language::{ClassStereotype, RelationStereotype};

use crate::highlight::TontoHighlighter;

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);

    /// Set available completions.
    fn set_keywords(&mut self, keywords: Vec<String>);
}

/// Shell commands, completed after `:`.
pub const COMMANDS: &[&str] = &[
    ":tokens",
    ":tree",
    ":patterns",
    ":diagnostics",
    ":source",
    ":load",
    ":reset",
    ":help",
    ":quit",
];

/// Keywords, stereotypes, and commands offered for completion.
#[must_use]
pub fn default_keywords() -> Vec<String> {
    let keywords = [
        "package",
        "genset",
        "general",
        "specifics",
        "where",
        "specializes",
        "of",
        "relation",
        "datatype",
        "enum",
        "disjoint",
        "complete",
        "overlapping",
        "incomplete",
    ];
    keywords
        .iter()
        .map(ToString::to_string)
        .chain(ClassStereotype::ALL.iter().map(|s| s.keyword().to_string()))
        .chain(RelationStereotype::ALL.iter().map(ToString::to_string))
        .chain(COMMANDS.iter().map(ToString::to_string))
        .collect()
}

/// Returns true while a `{` is still open.
#[must_use]
pub fn is_complete(input: &str) -> bool {
    let mut depth = 0i32;
    for c in input.chars() {
        match c {
            '{' => depth += 1,
            '}' => depth -= 1,
            _ => {}
        }
    }
    depth <= 0
}

/// Helper for rustyline that provides completion, hints, highlighting, and validation.
#[derive(Helper, Completer, Hinter, RLValidator)]
struct TontoHelper {
    #[rustyline(Completer)]
    completer: TontoCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    #[rustyline(Validator)]
    validator: BraceValidator,
    highlighter: TontoHighlighter,
}

impl Highlighter for TontoHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completer for TONTO keywords and, after `:load`, file paths.
struct TontoCompleter {
    file_completer: FilenameCompleter,
    keywords: Vec<String>,
}

impl TontoCompleter {
    fn new() -> Self {
        Self {
            file_completer: FilenameCompleter::new(),
            keywords: default_keywords(),
        }
    }
}

impl Completer for TontoCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let before = line.get(..pos).unwrap_or(line);
        if before.starts_with(":load ") {
            return self.file_completer.complete(line, pos, ctx);
        }

        let start = before
            .rfind(|c: char| c.is_whitespace() || "{}[],".contains(c))
            .map_or(0, |i| i + 1);
        let word = before.get(start..).unwrap_or("");

        let candidates: Vec<Pair> = self
            .keywords
            .iter()
            .filter(|kw| kw.starts_with(word))
            .map(|kw| Pair {
                display: kw.clone(),
                replacement: kw.clone(),
            })
            .collect();

        Ok((start, candidates))
    }
}

/// Keeps reading lines while a brace is open.
#[derive(Default)]
struct BraceValidator;

impl Validator for BraceValidator {
    fn validate(&self, ctx: &mut ValidationContext<'_>) -> rustyline::Result<ValidationResult> {
        if is_complete(ctx.input()) {
            Ok(ValidationResult::Valid(None))
        } else {
            Ok(ValidationResult::Incomplete)
        }
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<TontoHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?
            .build();

        let helper = TontoHelper {
            completer: TontoCompleter::new(),
            hinter: HistoryHinter::new(),
            validator: BraceValidator,
            highlighter: TontoHighlighter::new(),
        };

        let mut editor = Editor::with_config(config)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::new(ErrorKind::Internal(e.to_string()))),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_keywords(&mut self, keywords: Vec<String>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer.keywords = keywords;
        }
    }
}
