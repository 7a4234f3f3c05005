//! The interactive shell.
//!
//! Declarations typed at the prompt are appended to the session buffer and
//! the whole buffer is re-analyzed; only diagnostics that were not already
//! reported are printed. Lines starting with `:` are commands.

use std::io::{self, Write};

use tonto_foundation::{Diagnostic, Error, ErrorKind, Result};
use tonto_language::pretty::print_document;

use crate::analysis::AnalysisResult;
use crate::editor::{LineEditor, ReadResult, RustylineEditor, is_complete};
use crate::report::{dim, render_diagnostics, render_patterns, render_tokens, render_tree};
use crate::session::Session;

// =============================================================================
// Commands
// =============================================================================

/// A shell command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Show the token stream.
    Tokens,
    /// Show the parsed document as an outline.
    Tree,
    /// Show pattern results.
    Patterns,
    /// Show every diagnostic of the buffer.
    Diagnostics,
    /// Show the buffer as canonical source.
    Source,
    /// Replace the buffer with a file.
    Load(String),
    /// Clear the buffer.
    Reset,
    /// Show command help.
    Help,
    /// Leave the shell.
    Quit,
}

impl Command {
    /// Parses a command line. Returns `Ok(None)` for input that is not a
    /// command.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an unknown command or a missing path.
    pub fn parse(input: &str) -> Result<Option<Self>> {
        let input = input.trim();
        let Some(rest) = input.strip_prefix(':') else {
            return Ok(None);
        };
        let (name, argument) = match rest.split_once(char::is_whitespace) {
            Some((name, argument)) => (name, argument.trim()),
            None => (rest, ""),
        };

        let command = match name {
            "tokens" | "t" => Self::Tokens,
            "tree" => Self::Tree,
            "patterns" | "p" => Self::Patterns,
            "diagnostics" | "d" => Self::Diagnostics,
            "source" | "s" => Self::Source,
            "load" | "l" => {
                if argument.is_empty() {
                    return Err(Error::invalid_argument(":load requires a path"));
                }
                Self::Load(argument.to_string())
            }
            "reset" => Self::Reset,
            "help" | "h" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            other => {
                return Err(Error::invalid_argument(format!(
                    "unknown command ':{other}' (try :help)"
                )));
            }
        };
        Ok(Some(command))
    }
}

/// What the shell does after evaluating one input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text and keep reading.
    Continue(String),
    /// Leave the shell.
    Quit,
}

const HELP: &str = "\
Enter TONTO declarations to add them to the buffer.

Commands:
  :tokens         show the token stream
  :tree           show the parsed document
  :patterns       show pattern results
  :diagnostics    show all diagnostics
  :source         show the buffer as canonical source
  :load <path>    replace the buffer with a file
  :reset          clear the buffer
  :help           show this help
  :quit           leave the shell
";

// =============================================================================
// Repl
// =============================================================================

/// The interactive shell.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Source buffer and last analysis.
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,

    /// Continuation prompt (for multi-line input).
    continuation_prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new shell with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new shell with the given editor.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            session: Session::new(),
            show_banner: true,
            prompt: "tonto> ".to_string(),
            continuation_prompt: "   ..> ".to_string(),
        }
    }

    /// Sets the session for this shell.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the shell loop until `:quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            let Some(input) = self.read_input()? else {
                break;
            };
            if input.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&input);

            match self.eval(&input) {
                Ok(Outcome::Continue(text)) => {
                    print!("{text}");
                    let _ = io::stdout().flush();
                }
                Ok(Outcome::Quit) => break,
                Err(e) => self.print_error(&e),
            }
        }

        println!();
        Ok(())
    }

    /// Reads a potentially multi-line input.
    fn read_input(&mut self) -> Result<Option<String>> {
        let mut input = String::new();
        let mut first_line = true;

        loop {
            let prompt = if first_line {
                &self.prompt
            } else {
                &self.continuation_prompt
            };

            match self.editor.read_line(prompt)? {
                ReadResult::Line(line) => {
                    if !first_line {
                        input.push('\n');
                    }
                    input.push_str(&line);

                    if input.trim_start().starts_with(':') || is_complete(&input) {
                        return Ok(Some(input));
                    }
                    first_line = false;
                }
                ReadResult::Interrupted => {
                    if !first_line {
                        println!("\nInput cancelled.");
                    }
                    return Ok(Some(String::new()));
                }
                ReadResult::Eof => {
                    if first_line {
                        return Ok(None);
                    }
                    return Err(Error::new(ErrorKind::Internal(
                        "unexpected EOF in multi-line input".to_string(),
                    )));
                }
            }
        }
    }

    /// Evaluates one input: a command, or declarations to append.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown command, an unreadable file, or a
    /// blank buffer.
    pub fn eval(&mut self, input: &str) -> Result<Outcome> {
        match Command::parse(input)? {
            Some(command) => self.run_command(command),
            None => self.add_declarations(input).map(Outcome::Continue),
        }
    }

    fn add_declarations(&mut self, input: &str) -> Result<String> {
        let previous: Vec<Diagnostic> = self
            .session
            .result()
            .map(|r| r.diagnostics.clone())
            .unwrap_or_default();

        let config = self.session.config().clone();
        let result = self.session.append(input)?;
        let fresh: Vec<Diagnostic> = result
            .diagnostics
            .iter()
            .filter(|d| !previous.contains(d))
            .cloned()
            .collect();

        let mut out = render_diagnostics(&fresh, None, &config);
        let summary = result.summary();
        out.push_str(&dim(
            &format!(
                "{} declaration(s), {} pattern(s) satisfied, {} violated\n",
                summary.declarations,
                summary.satisfied(),
                summary.violated()
            ),
            &config,
        ));
        Ok(out)
    }

    fn run_command(&mut self, command: Command) -> Result<Outcome> {
        let config = self.session.config().clone();
        let text = match command {
            Command::Quit => return Ok(Outcome::Quit),
            Command::Help => HELP.to_string(),
            Command::Reset => {
                self.session.reset();
                "buffer cleared\n".to_string()
            }
            Command::Load(path) => {
                let summary = self.session.load_file(&path)?.summary();
                format!("loaded {path}\n{summary}\n")
            }
            Command::Tokens => render_tokens(self.current()?),
            Command::Tree => render_tree(&self.current()?.document, &config),
            Command::Source => print_document(&self.current()?.document),
            Command::Diagnostics => {
                let result = self.current()?;
                if result.diagnostics.is_empty() {
                    "no diagnostics\n".to_string()
                } else {
                    render_diagnostics(&result.diagnostics, None, &config)
                }
            }
            Command::Patterns => {
                let result = self.current()?;
                if config.show_satisfied {
                    render_patterns(&result.patterns, &config)
                } else {
                    render_patterns(result.violated(), &config)
                }
            }
        };
        Ok(Outcome::Continue(text))
    }

    fn current(&self) -> Result<&AnalysisResult> {
        self.session
            .result()
            .ok_or_else(|| Error::invalid_argument("the buffer is empty"))
    }

    /// Prints an error to stderr.
    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        eprintln!("\x1b[31merror: {error}\x1b[0m");
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36mtonto\x1b[0m {}", env!("CARGO_PKG_VERSION"));
        println!("Enter declarations, :help for commands, Ctrl+D to exit.\n");
        let _ = io::stdout().flush();
    }
}
