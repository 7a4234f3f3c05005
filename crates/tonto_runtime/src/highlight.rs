//! Syntax highlighting for the interactive shell.

use std::borrow::Cow;

use tonto_language::{TokenCategory, TokenKind, tokenize};

/// Highlighter for TONTO source, driven by the lexer.
#[derive(Debug, Default)]
pub struct TontoHighlighter;

impl TontoHighlighter {
    /// Creates a new highlighter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Highlights a line of input.
    ///
    /// Text between tokens (whitespace, comments) is copied unchanged.
    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with(':') {
            return Cow::Owned(format!("\x1b[1;34m{line}\x1b[0m"));
        }

        let (tokens, _) = tokenize(line);
        let mut result = String::with_capacity(line.len() * 2);
        let mut last = 0;

        for token in tokens.iter().filter(|t| t.kind != TokenKind::Eof) {
            let (start, end) = (token.span.start, token.span.end);
            if start < last || end > line.len() {
                continue;
            }
            result.push_str(line.get(last..start).unwrap_or(""));
            let text = line.get(start..end).unwrap_or("");
            match color(token.category()) {
                Some(color) => {
                    result.push_str(color);
                    result.push_str(text);
                    result.push_str("\x1b[0m");
                }
                None => result.push_str(text),
            }
            last = end;
        }
        result.push_str(line.get(last..).unwrap_or(""));

        Cow::Owned(result)
    }
}

const fn color(category: TokenCategory) -> Option<&'static str> {
    match category {
        TokenCategory::Keyword => Some("\x1b[1;32m"),
        TokenCategory::ClassStereotype => Some("\x1b[36m"),
        TokenCategory::RelationStereotype => Some("\x1b[35m"),
        TokenCategory::Literal => Some("\x1b[33m"),
        TokenCategory::Operator => Some("\x1b[1m"),
        TokenCategory::Unknown => Some("\x1b[4;31m"),
        TokenCategory::Identifier | TokenCategory::Punctuation => None,
    }
}
