//! Lexer for TONTO source.
//!
//! The lexer converts source text into a stream of tokens. It never stops
//! early: text it cannot classify becomes a [`TokenKind::Unknown`] token and
//! a lexical diagnostic, and scanning continues after it.

use tonto_foundation::{Diagnostic, codes};
use tracing::debug;

use crate::span::Span;
use crate::stereotype::RelationStereotype;
use crate::token::{RelationOperator, Token, TokenKind};

/// Lexer for TONTO source code.
pub struct Lexer<'src> {
    /// Source text being tokenized.
    source: &'src str,
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    column: u32,
    /// Line and column where the current token starts.
    token_start: (u32, u32),
    /// Lexical diagnostics collected so far.
    diagnostics: Vec<Diagnostic>,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            rest: source,
            position: 0,
            line: 1,
            column: 1,
            token_start: (1, 1),
            diagnostics: Vec::new(),
        }
    }

    /// Returns the next token from the source.
    ///
    /// Once the input is exhausted every call returns [`TokenKind::Eof`].
    pub fn next_token(&mut self) -> Token {
        self.skip_trivia();

        let start = self.position;
        let start_line = self.line;
        let start_column = self.column;
        self.token_start = (start_line, start_column);

        let Some(c) = self.peek_char() else {
            return Token::new(
                TokenKind::Eof,
                "",
                Span::new(start, start, start_line, start_column),
            );
        };

        let kind = match c {
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            '[' => self.single(TokenKind::LBracket),
            ']' => self.single(TokenKind::RBracket),
            ':' => self.single(TokenKind::Colon),
            ',' => self.single(TokenKind::Comma),
            '*' => self.single(TokenKind::Star),
            '.' if self.rest.starts_with("..") => {
                self.advance_by(2);
                TokenKind::DotDot
            }
            '-' => self.scan_dash(),
            '<' if self.rest.starts_with("<>--") => {
                self.advance_by(4);
                TokenKind::Operator(RelationOperator::Composite)
            }
            '<' if self.rest.starts_with("<o>--") => {
                self.advance_by(5);
                TokenKind::Operator(RelationOperator::SharedDiamond)
            }
            '@' => self.scan_stereotype(),
            c if c.is_ascii_digit() => self.scan_number(),
            c if is_ident_start(c) => self.scan_word(),
            _ => self.scan_unrecognized(),
        };

        let span = Span::new(start, self.position, start_line, start_column);
        Token::new(kind, span.text(self.source), span)
    }

    /// Returns the diagnostics collected so far, leaving the lexer empty.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Peeks `n` characters ahead.
    fn peek_char_n(&self, n: usize) -> Option<char> {
        self.rest.chars().nth(n)
    }

    /// Advances past the next character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Records a lexical error at the start of the current token.
    fn invalid(&mut self, code: &str, reason: String) -> TokenKind {
        let (line, column) = self.token_start;
        self.diagnostics
            .push(Diagnostic::lexical(line, column, reason.clone()).with_code(code));
        TokenKind::Unknown(reason)
    }

    /// Consumes one character and returns `kind`.
    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.advance();
        kind
    }

    /// Skips whitespace, `//` line comments and `/* */` block comments.
    fn skip_trivia(&mut self) {
        loop {
            match self.peek_char() {
                Some(c) if c.is_whitespace() => self.advance(),
                Some('/') if self.rest.starts_with("//") => {
                    while let Some(c) = self.peek_char() {
                        if c == '\n' {
                            break;
                        }
                        self.advance();
                    }
                }
                Some('/') if self.rest.starts_with("/*") => self.skip_block_comment(),
                _ => break,
            }
        }
    }

    fn skip_block_comment(&mut self) {
        let line = self.line;
        let column = self.column;
        self.advance_by(2);
        loop {
            if self.rest.starts_with("*/") {
                self.advance_by(2);
                return;
            }
            if self.rest.is_empty() {
                self.diagnostics.push(
                    Diagnostic::lexical(line, column, "unterminated block comment")
                        .with_code(codes::UNTERMINATED_COMMENT),
                );
                return;
            }
            self.advance();
        }
    }

    /// Scans tokens starting with `-`: arrows and the lone hyphen.
    fn scan_dash(&mut self) -> TokenKind {
        if self.peek_char_n(1) != Some('-') {
            self.advance();
            return TokenKind::Hyphen;
        }
        self.advance_by(2);

        let op = if self.rest.starts_with("<>") {
            self.advance_by(2);
            RelationOperator::CompositeTarget
        } else if self.rest.starts_with("<o>") {
            self.advance_by(3);
            RelationOperator::SharedTarget
        } else if self.peek_char() == Some('>') {
            self.advance();
            RelationOperator::Directed
        } else {
            RelationOperator::Association
        };
        TokenKind::Operator(op)
    }

    /// Scans `@name`.
    fn scan_stereotype(&mut self) -> TokenKind {
        self.advance(); // consume '@'
        let name = self.scan_ident_text();
        if name.is_empty() {
            return self.invalid(codes::UNRECOGNIZED_SYMBOL, "unrecognized symbol '@'".into());
        }
        match RelationStereotype::from_keyword(name) {
            Some(stereotype) => TokenKind::RelationStereotype(stereotype),
            None => self.invalid(
                codes::UNKNOWN_RELATION_STEREOTYPE,
                format!("unknown relation stereotype '@{name}'"),
            ),
        }
    }

    /// Scans an unsigned integer.
    ///
    /// Digits running into letters (`12abc`) or a fractional part (`1.5`)
    /// make the whole run a malformed number.
    fn scan_number(&mut self) -> TokenKind {
        let source = self.source;
        let start = self.position;
        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        let fractional = self.peek_char() == Some('.')
            && self.peek_char_n(1).is_some_and(|c| c.is_ascii_digit());
        if fractional {
            self.advance();
            while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let glued = self.peek_char().is_some_and(is_ident_char);
        if glued {
            self.scan_ident_text();
        }

        let text = &source[start..self.position];
        if fractional || glued {
            self.invalid(codes::MALFORMED_NUMBER, format!("malformed number '{text}'"))
        } else {
            TokenKind::Number(text.to_string())
        }
    }

    /// Scans an identifier, keyword, stereotype, or the `o--` arrow.
    fn scan_word(&mut self) -> TokenKind {
        let word = self.scan_ident_text();
        if word == "o" && self.rest.starts_with("--") {
            self.advance_by(2);
            return TokenKind::Operator(RelationOperator::Shared);
        }
        TokenKind::keyword(word).unwrap_or_else(|| TokenKind::Ident(word.to_string()))
    }

    fn scan_ident_text(&mut self) -> &'src str {
        let source = self.source;
        let start = self.position;
        while self.peek_char().is_some_and(is_ident_char) {
            self.advance();
        }
        &source[start..self.position]
    }

    /// Groups a run of characters that cannot start any token.
    fn scan_unrecognized(&mut self) -> TokenKind {
        let source = self.source;
        let start = self.position;
        self.advance();
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() || starts_token(c) {
                break;
            }
            self.advance();
        }
        let text = &source[start..self.position];
        self.invalid(codes::UNRECOGNIZED_SYMBOL, format!("unrecognized symbol '{text}'"))
    }
}

/// Returns true if `c` can start an identifier.
fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Returns true if `c` can appear in an identifier.
fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Returns true if `c` can begin some valid token or comment.
fn starts_token(c: char) -> bool {
    is_ident_char(c)
        || matches!(
            c,
            '{' | '}' | '[' | ']' | ':' | ',' | '*' | '.' | '-' | '<' | '@' | '/'
        )
}

/// Tokenizes a whole source unit.
///
/// The returned token sequence always ends with [`TokenKind::Eof`].
#[must_use]
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let is_eof = token.kind == TokenKind::Eof;
        tokens.push(token);
        if is_eof {
            break;
        }
    }
    let diagnostics = lexer.take_diagnostics();
    debug!(
        tokens = tokens.len(),
        errors = diagnostics.len(),
        "lexical analysis finished"
    );
    (tokens, diagnostics)
}
