//! Parser for TONTO source.
//!
//! The parser converts a token sequence into a [`Document`]. Every surface
//! form of a construct (short and block gensets, internal and external
//! relations, stereotype on its own line or inline) lands in the same
//! canonical model.
//!
//! A malformed declaration is reported and dropped; the parser then skips
//! forward to the next token that can start a top-level declaration.

use tonto_foundation::{Diagnostic, codes};
use tracing::{debug, trace};

use crate::ast::{
    Attribute, Bound, Cardinality, ClassDecl, ClassId, DataTypeDecl, DataTypeId, Document,
    EnumDecl, EnumId, EnumLiteral, GensetDecl, GensetId, GensetModifiers, Item, Package,
    RelationDecl, RelationId,
};
use crate::lexer::tokenize;
use crate::span::Span;
use crate::stereotype::{ClassStereotype, RelationStereotype};
use crate::token::{RelationOperator, Token, TokenKind};

/// Syntax errors travel as diagnostics.
type ParseResult<T> = std::result::Result<T, Diagnostic>;

/// Returned when reading past the token slice.
static EOF_TOKEN: Token = Token {
    kind: TokenKind::Eof,
    lexeme: String::new(),
    span: Span::new(0, 0, 1, 1),
};

/// Parser for TONTO token sequences.
pub struct Parser<'t> {
    /// Tokens, ending with `Eof`.
    tokens: &'t [Token],
    /// Index of the current token. Never points at trivia.
    pos: usize,
    /// Span of the last consumed token.
    last_span: Span,
    /// Number of `{` blocks currently open.
    block_depth: usize,
    /// The document under construction.
    document: Document,
    /// Syntax diagnostics.
    diagnostics: Vec<Diagnostic>,
}

impl<'t> Parser<'t> {
    /// Creates a new parser over the given tokens.
    #[must_use]
    pub fn new(tokens: &'t [Token]) -> Self {
        let mut parser = Self {
            tokens,
            pos: 0,
            last_span: Span::new(0, 0, 1, 1),
            block_depth: 0,
            document: Document::new(),
            diagnostics: Vec::new(),
        };
        parser.skip_trivia();
        parser
    }

    /// Parses every declaration and returns the document with its syntax
    /// diagnostics.
    #[must_use]
    pub fn parse_document(mut self) -> (Document, Vec<Diagnostic>) {
        while self.current().kind != TokenKind::Eof {
            let start = self.pos;
            if let Err(diagnostic) = self.parse_declaration() {
                self.diagnostics.push(diagnostic);
                self.synchronize(start);
            }
        }

        debug!(
            declarations = self.document.declaration_count(),
            errors = self.diagnostics.len(),
            "syntactic analysis finished"
        );
        (self.document, self.diagnostics)
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    fn parse_declaration(&mut self) -> ParseResult<()> {
        match &self.current().kind {
            TokenKind::Package => self.parse_package(),
            TokenKind::ClassStereotype(stereotype) => {
                let stereotype = *stereotype;
                self.parse_class(stereotype)
            }
            TokenKind::Datatype => self.parse_datatype(),
            TokenKind::Enum => self.parse_enum(),
            TokenKind::Relation | TokenKind::RelationStereotype(_) => {
                self.parse_external_relation()
            }
            kind if kind.is_genset_modifier() || *kind == TokenKind::Genset => {
                self.parse_genset()
            }
            kind => Err(self.error(&format!("expected a declaration, found {}", kind.name()))),
        }
    }

    /// `package Name`
    fn parse_package(&mut self) -> ParseResult<()> {
        let start = self.advance().span;
        let (name, name_span) = self.expect_ident("package name")?;

        match &self.document.package {
            Some(existing) => {
                let message = format!(
                    "duplicate package '{name}'; declarations continue in package '{}'",
                    existing.name
                );
                self.diagnostics.push(
                    Diagnostic::syntactic(start.line, start.column, message)
                        .with_code(codes::DUPLICATE_PACKAGE),
                );
            }
            None => {
                self.document.package = Some(Package {
                    name,
                    items: Vec::new(),
                    span: start.to(name_span),
                });
            }
        }
        Ok(())
    }

    /// `stereotype Name (of X | specializes A, B)* { body }?`
    fn parse_class(&mut self, stereotype: ClassStereotype) -> ParseResult<()> {
        let start = self.advance().span;
        let (name, _) = self.expect_ident("class name")?;

        let mut parents = Vec::new();
        let mut partition = None;
        loop {
            match self.current().kind {
                TokenKind::Specializes => {
                    self.advance();
                    parents.push(self.expect_ident("class to specialize")?.0);
                    while self.current().kind == TokenKind::Comma {
                        self.advance();
                        parents.push(self.expect_ident("class to specialize")?.0);
                    }
                }
                TokenKind::Of => {
                    self.advance();
                    partition = Some(self.expect_ident("partition name after 'of'")?.0);
                }
                _ => break,
            }
        }

        let (attributes, relations) = if self.current().kind == TokenKind::LBrace {
            self.parse_class_body(&name)?
        } else {
            (Vec::new(), Vec::new())
        };

        let class_id = ClassId(self.document.classes.len());
        let mut relation_ids = Vec::with_capacity(relations.len());
        for mut relation in relations {
            relation.owner = Some(class_id);
            relation_ids.push(RelationId(self.document.relations.len()));
            self.document.relations.push(relation);
        }

        self.document.classes.push(ClassDecl {
            stereotype,
            name,
            parents,
            partition,
            attributes,
            relations: relation_ids,
            span: start.to(self.last_span),
        });
        self.document.push_item(Item::Class(class_id));
        Ok(())
    }

    fn parse_class_body(
        &mut self,
        owner: &str,
    ) -> ParseResult<(Vec<Attribute>, Vec<RelationDecl>)> {
        let open = self.open_block()?;
        let mut attributes = Vec::new();
        let mut relations = Vec::new();

        loop {
            match &self.current().kind {
                TokenKind::RBrace => {
                    self.close_block();
                    break;
                }
                TokenKind::Eof => {
                    return Err(self.error_at(
                        open,
                        &format!("unterminated body of class '{owner}'; expected '}}'"),
                    ));
                }
                TokenKind::Ident(_) => attributes.push(self.parse_attribute()?),
                TokenKind::RelationStereotype(_)
                | TokenKind::LBracket
                | TokenKind::Operator(_) => relations.push(self.parse_internal_relation(owner)?),
                kind => {
                    return Err(self.error(&format!(
                        "expected an attribute or relation in the body of '{owner}', found {}",
                        kind.name()
                    )));
                }
            }
        }

        Ok((attributes, relations))
    }

    /// `name: Type [cardinality]?`
    fn parse_attribute(&mut self) -> ParseResult<Attribute> {
        let (name, start) = self.expect_ident("attribute name")?;
        self.expect(&TokenKind::Colon)?;
        let (type_name, type_span) = self.expect_ident("attribute type")?;

        // A bracket on a later line opens the next relation, not a multiplicity.
        let cardinality = if self.current().kind == TokenKind::LBracket
            && self.current().span.line == type_span.line
        {
            self.parse_cardinality()?
        } else {
            None
        };

        Ok(Attribute {
            name,
            type_name,
            cardinality,
            span: start.to(self.last_span),
        })
    }

    /// `datatype Name (specializes X)? { attributes }?`
    fn parse_datatype(&mut self) -> ParseResult<()> {
        let start = self.advance().span;
        let (name, _) = self.expect_ident("data type name")?;

        let parent = if self.current().kind == TokenKind::Specializes {
            self.advance();
            Some(self.expect_ident("data type to specialize")?.0)
        } else {
            None
        };

        let mut attributes = Vec::new();
        if self.current().kind == TokenKind::LBrace {
            let open = self.open_block()?;
            loop {
                match &self.current().kind {
                    TokenKind::RBrace => {
                        self.close_block();
                        break;
                    }
                    TokenKind::Eof => {
                        return Err(self.error_at(
                            open,
                            &format!("unterminated body of data type '{name}'; expected '}}'"),
                        ));
                    }
                    TokenKind::Ident(_) => attributes.push(self.parse_attribute()?),
                    kind => {
                        return Err(self.error(&format!(
                            "expected an attribute in data type '{name}', found {}",
                            kind.name()
                        )));
                    }
                }
            }
        }

        let id = DataTypeId(self.document.datatypes.len());
        self.document.datatypes.push(DataTypeDecl {
            name,
            parent,
            attributes,
            span: start.to(self.last_span),
        });
        self.document.push_item(Item::DataType(id));
        Ok(())
    }

    /// `enum Name { A, B01, C }`
    fn parse_enum(&mut self) -> ParseResult<()> {
        let start = self.advance().span;
        let (name, _) = self.expect_ident("enumeration name")?;
        let open = self.open_block()?;

        let mut literals = Vec::new();
        loop {
            match &self.current().kind {
                TokenKind::RBrace => {
                    self.close_block();
                    break;
                }
                TokenKind::Eof => {
                    return Err(self.error_at(
                        open,
                        &format!("unterminated enumeration '{name}'; expected '}}'"),
                    ));
                }
                _ => {
                    let (text, span) = self.expect_ident("enumeration literal")?;
                    literals.push(EnumLiteral::split(&text, span));
                    match &self.current().kind {
                        TokenKind::Comma => {
                            self.advance();
                        }
                        TokenKind::RBrace => {}
                        kind => {
                            return Err(self.error(&format!(
                                "expected ',' or '}}' after enumeration literal, found {}",
                                kind.name()
                            )));
                        }
                    }
                }
            }
        }

        let id = EnumId(self.document.enums.len());
        self.document.enums.push(EnumDecl {
            name,
            literals,
            span: start.to(self.last_span),
        });
        self.document.push_item(Item::Enum(id));
        Ok(())
    }

    /// `modifiers genset Name? (where ... | { ... })`
    fn parse_genset(&mut self) -> ParseResult<()> {
        let start = self.current().span;
        let modifiers = self.parse_genset_modifiers();

        if self.current().kind != TokenKind::Genset {
            return Err(self.error(&format!(
                "expected 'genset' after genset modifiers, found {}",
                self.current().kind.name()
            )));
        }
        self.advance();

        let name = match self.current().kind {
            TokenKind::Ident(_) => Some(self.expect_ident("genset name")?.0),
            _ => None,
        };

        let (general, specifics) = match self.current().kind {
            TokenKind::Where => {
                self.advance();
                self.parse_genset_where()?
            }
            TokenKind::LBrace => self.parse_genset_block(start)?,
            _ => {
                return Err(self.error(&format!(
                    "expected 'where' or '{{' in genset declaration, found {}",
                    self.current().kind.name()
                )));
            }
        };

        let id = GensetId(self.document.gensets.len());
        self.document.gensets.push(GensetDecl {
            name,
            modifiers,
            general,
            specifics,
            span: start.to(self.last_span),
        });
        self.document.push_item(Item::Genset(id));
        Ok(())
    }

    /// Reads modifiers; a conflicting one is reported and ignored.
    fn parse_genset_modifiers(&mut self) -> GensetModifiers {
        let mut modifiers = GensetModifiers::default();
        while self.current().kind.is_genset_modifier() {
            let token = self.advance();
            let conflict = match token.kind {
                TokenKind::Disjoint if modifiers.overlapping => Some("overlapping"),
                TokenKind::Overlapping if modifiers.disjoint => Some("disjoint"),
                TokenKind::Complete if modifiers.incomplete => Some("incomplete"),
                TokenKind::Incomplete if modifiers.complete => Some("complete"),
                TokenKind::Disjoint => {
                    modifiers.disjoint = true;
                    None
                }
                TokenKind::Overlapping => {
                    modifiers.overlapping = true;
                    None
                }
                TokenKind::Complete => {
                    modifiers.complete = true;
                    None
                }
                _ => {
                    modifiers.incomplete = true;
                    None
                }
            };
            if let Some(other) = conflict {
                self.diagnostics.push(
                    Diagnostic::syntactic(
                        token.line(),
                        token.column(),
                        format!("genset modifier '{}' conflicts with '{other}'", token.lexeme),
                    )
                    .with_code(codes::CONFLICTING_MODIFIERS)
                    .with_suggestion(format!("remove '{}' or '{other}'", token.lexeme)),
                );
            }
        }
        modifiers
    }

    /// `general G specifics S1, S2` or `S1, S2 specializes G`.
    fn parse_genset_where(&mut self) -> ParseResult<(String, Vec<String>)> {
        if self.current().kind == TokenKind::General {
            self.advance();
            let (general, _) = self.expect_ident("general class")?;
            self.expect(&TokenKind::Specifics)?;
            let specifics = self.parse_ident_list("specific class")?;
            Ok((general, specifics))
        } else {
            let specifics = self.parse_ident_list("specific class")?;
            self.expect(&TokenKind::Specializes)?;
            let (general, _) = self.expect_ident("general class")?;
            Ok((general, specifics))
        }
    }

    /// `{ general G specifics S1, S2 }`, inner statements in either order.
    fn parse_genset_block(&mut self, start: Span) -> ParseResult<(String, Vec<String>)> {
        let open = self.open_block()?;
        let mut general = None;
        let mut specifics: Vec<String> = Vec::new();

        loop {
            match &self.current().kind {
                TokenKind::RBrace => {
                    self.close_block();
                    break;
                }
                TokenKind::General => {
                    let keyword = self.advance().span;
                    if general.is_some() {
                        return Err(self.error_at(keyword, "genset declares 'general' twice"));
                    }
                    general = Some(self.expect_ident("general class")?.0);
                }
                TokenKind::Specifics => {
                    self.advance();
                    for name in self.parse_ident_list("specific class")? {
                        if !specifics.contains(&name) {
                            specifics.push(name);
                        }
                    }
                }
                TokenKind::Eof => {
                    return Err(self.error_at(open, "unterminated genset block; expected '}'"));
                }
                kind => {
                    return Err(self.error(&format!(
                        "expected 'general' or 'specifics' in genset block, found {}",
                        kind.name()
                    )));
                }
            }
        }

        let Some(general) = general else {
            return Err(self.error_at(start, "genset block is missing its 'general' class"));
        };
        if specifics.is_empty() {
            return Err(self.error_at(start, "genset block is missing its 'specifics' list"));
        }
        Ok((general, specifics))
    }

    /// `A, B C` (commas optional); duplicates are dropped.
    fn parse_ident_list(&mut self, what: &str) -> ParseResult<Vec<String>> {
        let mut names = vec![self.expect_ident(what)?.0];
        loop {
            match self.current().kind {
                TokenKind::Comma => {
                    self.advance();
                }
                TokenKind::Ident(_) => {}
                _ => break,
            }
            let (name, _) = self.expect_ident(what)?;
            if !names.contains(&name) {
                names.push(name);
            }
        }
        Ok(names)
    }

    // =========================================================================
    // Relations
    // =========================================================================

    /// `@stereotype? [c]? op (name --)? [c]? Target` inside a class body.
    fn parse_internal_relation(&mut self, owner: &str) -> ParseResult<RelationDecl> {
        let start = self.current().span;
        let stereotype = self.parse_relation_stereotype(false)?;
        let source_cardinality = self.parse_cardinality()?;
        let (operator, name, target_cardinality, target) = self.parse_relation_tail()?;

        Ok(RelationDecl {
            stereotype,
            name,
            owner: None,
            source: owner.to_string(),
            source_cardinality,
            operator,
            target_cardinality,
            target,
            span: start.to(self.last_span),
        })
    }

    /// `@stereotype? relation Name? Source [c]? op (name --)? [c]? Target`
    fn parse_external_relation(&mut self) -> ParseResult<()> {
        let start = self.current().span;
        let stereotype = self.parse_relation_stereotype(true)?;
        self.expect(&TokenKind::Relation)?;

        let (first, _) = self.expect_ident("relation name or source class")?;
        let (leading_name, source) = if matches!(self.current().kind, TokenKind::Ident(_)) {
            let (source, _) = self.expect_ident("source class")?;
            (Some(first), source)
        } else {
            (None, first)
        };

        let source_cardinality = self.parse_cardinality()?;
        let (operator, middle_name, target_cardinality, target) = self.parse_relation_tail()?;
        let name = leading_name.or(middle_name);
        let span = start.to(self.last_span);

        if name.is_none() {
            self.diagnostics.push(
                Diagnostic::syntactic(
                    span.line,
                    span.column,
                    format!("relation between '{source}' and '{target}' has no name"),
                )
                .with_code(codes::MISSING_RELATION_NAME)
                .with_suggestion(format!("relation name {source} {operator} {target}")),
            );
        }

        let id = RelationId(self.document.relations.len());
        self.document.relations.push(RelationDecl {
            stereotype,
            name,
            owner: None,
            source,
            source_cardinality,
            operator,
            target_cardinality,
            target,
            span,
        });
        self.document.push_item(Item::Relation(id));
        Ok(())
    }

    /// Reads an optional stereotype that must be followed by a relation.
    fn parse_relation_stereotype(
        &mut self,
        top_level: bool,
    ) -> ParseResult<Option<RelationStereotype>> {
        let TokenKind::RelationStereotype(stereotype) = self.current().kind else {
            return Ok(None);
        };
        let token = self.advance();

        let bound = match self.current().kind {
            TokenKind::LBracket | TokenKind::Operator(_) => !top_level,
            TokenKind::Relation => top_level,
            _ => false,
        };
        if bound {
            Ok(Some(stereotype))
        } else {
            Err(Diagnostic::syntactic(
                token.line(),
                token.column(),
                format!(
                    "relation stereotype '{stereotype}' is not followed by a relation, found {}",
                    self.current().kind.name()
                ),
            )
            .with_code(codes::DANGLING_STEREOTYPE))
        }
    }

    /// `op (name --)? [c]? Target`
    fn parse_relation_tail(
        &mut self,
    ) -> ParseResult<(RelationOperator, Option<String>, Option<Cardinality>, String)> {
        let operator = match self.current().kind {
            TokenKind::Operator(op) => {
                self.advance();
                op
            }
            _ => {
                return Err(self.error(&format!(
                    "expected a relation operator such as '--', found {}",
                    self.current().kind.name()
                )));
            }
        };

        let name = match (&self.current().kind, &self.peek(1).kind) {
            (TokenKind::Ident(_), TokenKind::Operator(RelationOperator::Association))
                if self.peek(1).span.line == self.current().span.line =>
            {
                let (name, _) = self.expect_ident("relation name")?;
                self.advance();
                Some(name)
            }
            _ => None,
        };

        let target_cardinality = self.parse_cardinality()?;
        let (target, _) = self.expect_ident("relation target class")?;
        Ok((operator, name, target_cardinality, target))
    }

    /// `[lower]` or `[lower..upper]`, if present.
    fn parse_cardinality(&mut self) -> ParseResult<Option<Cardinality>> {
        if self.current().kind != TokenKind::LBracket {
            return Ok(None);
        }
        self.advance();
        let lower = self.parse_bound()?;
        let upper = if self.current().kind == TokenKind::DotDot {
            self.advance();
            Some(self.parse_bound()?)
        } else {
            None
        };
        self.expect(&TokenKind::RBracket)?;
        Ok(Some(Cardinality { lower, upper }))
    }

    fn parse_bound(&mut self) -> ParseResult<Bound> {
        match &self.current().kind {
            TokenKind::Star => {
                self.advance();
                Ok(Bound::Many)
            }
            TokenKind::Number(text) => {
                let value = text
                    .parse::<u32>()
                    .map_err(|_| self.error(&format!("cardinality bound '{text}' is too large")))?;
                self.advance();
                Ok(Bound::Count(value))
            }
            kind => Err(self.error(&format!(
                "expected a number or '*' in cardinality, found {}",
                kind.name()
            ))),
        }
    }

    // =========================================================================
    // Token plumbing
    // =========================================================================

    fn current(&self) -> &'t Token {
        self.tokens.get(self.pos).unwrap_or(&EOF_TOKEN)
    }

    /// Returns the `n`th non-trivia token after the current one.
    fn peek(&self, n: usize) -> &'t Token {
        self.tokens
            .get(self.pos..)
            .unwrap_or_default()
            .iter()
            .filter(|t| !t.kind.is_trivia())
            .nth(n)
            .unwrap_or(&EOF_TOKEN)
    }

    /// Consumes the current token and returns it.
    fn advance(&mut self) -> &'t Token {
        let token = self.current();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
            self.last_span = token.span;
            self.skip_trivia();
        }
        token
    }

    /// Skips tokens the lexer already reported.
    fn skip_trivia(&mut self) {
        while self.current().kind.is_trivia() {
            self.pos += 1;
        }
    }

    /// Expects the current token to be of a specific kind, then advances.
    fn expect(&mut self, expected: &TokenKind) -> ParseResult<&'t Token> {
        // Use discriminant comparison for token kinds that carry data
        let matches =
            std::mem::discriminant(&self.current().kind) == std::mem::discriminant(expected);

        if matches {
            Ok(self.advance())
        } else {
            Err(self.error(&format!(
                "expected {}, found {}",
                expected.name(),
                self.current().kind.name()
            )))
        }
    }

    /// Expects an identifier and rejects hyphenated names.
    fn expect_ident(&mut self, what: &str) -> ParseResult<(String, Span)> {
        let token = self.current();
        let TokenKind::Ident(name) = &token.kind else {
            return Err(self.error(&format!("expected {what}, found {}", token.kind.name())));
        };
        self.advance();
        self.reject_hyphenated(token)?;
        Ok((name.clone(), token.span))
    }

    /// Reports `Foo-Bar` written as one name.
    fn reject_hyphenated(&self, first: &Token) -> ParseResult<()> {
        let mut full = first.lexeme.clone();
        let mut end = first.span;
        let mut offset = 0;
        loop {
            let hyphen = self.peek(offset);
            let next = self.peek(offset + 1);
            let glued = hyphen.kind == TokenKind::Hyphen
                && end.touches(&hyphen.span)
                && matches!(next.kind, TokenKind::Ident(_) | TokenKind::Number(_))
                && hyphen.span.touches(&next.span);
            if !glued {
                break;
            }
            full.push('-');
            full.push_str(&next.lexeme);
            end = next.span;
            offset += 2;
        }

        if offset == 0 {
            return Ok(());
        }
        Err(Diagnostic::syntactic(
            first.line(),
            first.column(),
            format!(
                "identifier '{full}' contains a hyphen; hyphens are reserved for relation operators"
            ),
        )
        .with_code(codes::HYPHENATED_IDENTIFIER)
        .with_suggestion(full.replace('-', "_")))
    }

    fn open_block(&mut self) -> ParseResult<Span> {
        let open = self.expect(&TokenKind::LBrace)?.span;
        self.block_depth += 1;
        Ok(open)
    }

    fn close_block(&mut self) {
        self.advance();
        self.block_depth = self.block_depth.saturating_sub(1);
    }

    /// Skips to the next token that can start a top-level declaration.
    ///
    /// Braces are balanced on the way, so the `}` closing a malformed block
    /// is consumed. Inside a block, a starter only stops the scan when it
    /// begins a line and is not used as an attribute name, so an
    /// unterminated block still recovers at the next declaration.
    fn synchronize(&mut self, declaration_start: usize) {
        if self.pos == declaration_start {
            self.advance();
        }
        let mut depth = self.block_depth;
        self.block_depth = 0;
        let from = self.pos;

        loop {
            let kind = &self.current().kind;
            match kind {
                TokenKind::Eof => break,
                TokenKind::LBrace => depth += 1,
                TokenKind::RBrace => depth = depth.saturating_sub(1),
                TokenKind::RelationStereotype(_) if depth == 0 => break,
                TokenKind::RelationStereotype(_) => {}
                k if k.starts_declaration() && (depth == 0 || self.starts_line_declaration()) => {
                    break;
                }
                _ => {}
            }
            self.advance();
        }
        trace!(skipped = self.pos - from, "resynchronized after syntax error");
    }

    /// True if the current token is the first on its line and not followed
    /// by `:`.
    fn starts_line_declaration(&self) -> bool {
        self.current().span.line > self.last_span.line && self.peek(1).kind != TokenKind::Colon
    }

    fn error(&self, message: &str) -> Diagnostic {
        self.error_at(self.current().span, message)
    }

    fn error_at(&self, span: Span, message: &str) -> Diagnostic {
        Diagnostic::syntactic(span.line, span.column, message).with_code(codes::UNEXPECTED_TOKEN)
    }
}

/// Parses a token sequence into a document.
#[must_use]
pub fn parse(tokens: &[Token]) -> (Document, Vec<Diagnostic>) {
    Parser::new(tokens).parse_document()
}

/// Tokenizes and parses source text.
///
/// Returns the lexical diagnostics followed by the syntax diagnostics.
#[must_use]
pub fn parse_source(source: &str) -> (Document, Vec<Diagnostic>) {
    let (tokens, mut diagnostics) = tokenize(source);
    let (document, syntax) = parse(&tokens);
    diagnostics.extend(syntax);
    (document, diagnostics)
}
