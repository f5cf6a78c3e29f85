//! Recursive descent parser for analyzer source.
//!
//! The header (`analyzer NAME(PARAM: TYPE) {`) must parse for anything else
//! to make sense, so a header error ends parsing. Inside the body, a broken
//! statement is reported and skipped up to the next `;` or `}`, so one run
//! reports every broken statement.

use std::borrow::Cow;

use refract_diagnostic::{Diagnostic, ErrorCode};
use refract_ir::Span;

use crate::ast::{AnalyzerDecl, AppendValue, Ident, Stmt, StrLit};
use crate::lexer::{Token, TokenKind};

/// Method every property read must call.
const TO_STRING: &str = "to_string";

type PResult<T> = Result<T, Diagnostic>;

/// Parsed declaration (if the header parsed) plus parser diagnostics.
#[derive(Debug)]
pub struct ParseOutput<'src> {
    pub decl: Option<AnalyzerDecl<'src>>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse a token stream produced by [`lex`](crate::lexer::lex).
pub fn parse<'src>(tokens: &[Token<'src>]) -> ParseOutput<'src> {
    let mut parser = Parser::new(tokens);
    let decl = match parser.analyzer_decl() {
        Ok(decl) => Some(decl),
        Err(diag) => {
            parser.diagnostics.push(diag);
            None
        }
    };
    ParseOutput {
        decl,
        diagnostics: parser.diagnostics,
    }
}

struct Parser<'t, 'src> {
    tokens: &'t [Token<'src>],
    pos: usize,
    eof: Token<'src>,
    diagnostics: Vec<Diagnostic>,
}

impl<'t, 'src> Parser<'t, 'src> {
    fn new(tokens: &'t [Token<'src>]) -> Self {
        let end = tokens.last().map_or(0, |t| t.span.end);
        Parser {
            tokens,
            pos: 0,
            eof: Token {
                kind: TokenKind::Eof,
                span: Span::point(end),
            },
            diagnostics: Vec::new(),
        }
    }

    // ─── Cursor ────────────────────────────────────────────────────

    #[inline]
    fn current(&self) -> &Token<'src> {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    #[inline]
    fn check(&self, kind: &TokenKind<'_>) -> bool {
        &self.current().kind == kind
    }

    fn bump(&mut self) -> Span {
        let span = self.current().span;
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        span
    }

    fn at_eof(&self) -> bool {
        self.check(&TokenKind::Eof)
    }

    // ─── Errors ────────────────────────────────────────────────────

    #[cold]
    fn unexpected(&self, expected: &str) -> Diagnostic {
        let found = self.current();
        if found.kind == TokenKind::Eof {
            Diagnostic::error(ErrorCode::E1003)
                .with_message(format!("unexpected end of input, expected {expected}"))
                .with_label(found.span, format!("expected {expected}"))
        } else {
            Diagnostic::error(ErrorCode::E1001)
                .with_message(format!("expected {expected}, found {}", found.kind))
                .with_label(found.span, format!("expected {expected}"))
        }
    }

    fn expect(&mut self, kind: &TokenKind<'_>) -> PResult<Span> {
        if self.check(kind) {
            Ok(self.bump())
        } else {
            Err(self.unexpected(&kind.to_string()))
        }
    }

    fn expect_ident(&mut self) -> PResult<Ident<'src>> {
        let token = self.current();
        match token.kind {
            TokenKind::Ident(name) => {
                let span = token.span;
                self.bump();
                Ok(Ident { name, span })
            }
            TokenKind::Eof => Err(self.unexpected("an identifier")),
            ref other => Err(Diagnostic::error(ErrorCode::E1002)
                .with_message(format!("expected identifier, found {other}"))
                .with_label(token.span, "expected an identifier here")),
        }
    }

    /// Like [`expect_ident`](Self::expect_ident), but a keyword is also a
    /// valid property name after the receiver's `.`.
    fn expect_property(&mut self) -> PResult<Ident<'src>> {
        let token = self.current();
        let name = match token.kind {
            TokenKind::Analyzer => "analyzer",
            TokenKind::Let => "let",
            TokenKind::Return => "return",
            _ => return self.expect_ident(),
        };
        let span = token.span;
        self.bump();
        Ok(Ident { name, span })
    }

    fn expect_string(&mut self) -> PResult<StrLit<'src>> {
        let token = self.current();
        match &token.kind {
            TokenKind::Str(value) => {
                let lit = StrLit {
                    value: Cow::clone(value),
                    span: token.span,
                };
                self.bump();
                Ok(lit)
            }
            _ => Err(self.unexpected("a string literal")),
        }
    }

    /// Skip to just past the next `;`, or to a `}` or EOF.
    fn recover(&mut self) {
        loop {
            match self.current().kind {
                TokenKind::Semicolon => {
                    self.bump();
                    return;
                }
                TokenKind::RightBrace | TokenKind::Eof => return,
                _ => {
                    self.bump();
                }
            }
        }
    }

    // ─── Grammar ───────────────────────────────────────────────────

    fn analyzer_decl(&mut self) -> PResult<AnalyzerDecl<'src>> {
        self.expect(&TokenKind::Analyzer)?;
        let name = self.expect_ident()?;
        self.expect(&TokenKind::LeftParen)?;
        let param = self.expect_ident()?;
        self.expect(&TokenKind::Colon)?;
        let param_type = self.expect_ident()?;
        self.expect(&TokenKind::RightParen)?;
        self.expect(&TokenKind::LeftBrace)?;

        let mut body = Vec::new();
        let close = loop {
            match self.current().kind {
                TokenKind::RightBrace => break self.bump(),
                TokenKind::Eof => {
                    let diag = self.unexpected("`}`");
                    self.diagnostics.push(diag);
                    break self.current().span;
                }
                _ => {}
            }
            match self.statement() {
                Ok(stmt) => {
                    let returned = matches!(stmt, Stmt::Return { .. });
                    body.push(stmt);
                    if returned && !self.check(&TokenKind::RightBrace) {
                        let diag = self.unexpected("`}` after `return`");
                        self.diagnostics.push(diag);
                        self.skip_to_close();
                    }
                }
                Err(diag) => {
                    self.diagnostics.push(diag);
                    self.recover();
                }
            }
        };

        if !self.at_eof() {
            let diag = self.unexpected("end of input after the analyzer body");
            self.diagnostics.push(diag);
        }

        Ok(AnalyzerDecl {
            name,
            param,
            param_type,
            body,
            close,
        })
    }

    fn skip_to_close(&mut self) {
        while !matches!(
            self.current().kind,
            TokenKind::RightBrace | TokenKind::Eof
        ) {
            self.bump();
        }
    }

    fn statement(&mut self) -> PResult<Stmt<'src>> {
        match self.current().kind {
            TokenKind::Let => {
                self.bump();
                let name = self.expect_ident()?;
                self.expect(&TokenKind::Equal)?;
                let init = self.expect_string()?;
                self.expect(&TokenKind::Semicolon)?;
                Ok(Stmt::Let { name, init })
            }
            TokenKind::Return => {
                self.bump();
                let name = self.expect_ident()?;
                self.expect(&TokenKind::Semicolon)?;
                Ok(Stmt::Return { name })
            }
            TokenKind::Ident(_) => {
                let target = self.expect_ident()?;
                self.expect(&TokenKind::PlusEqual)?;
                let value = self.append_value()?;
                self.expect(&TokenKind::Semicolon)?;
                Ok(Stmt::Append { target, value })
            }
            _ => Err(self.unexpected("a statement")),
        }
    }

    fn append_value(&mut self) -> PResult<AppendValue<'src>> {
        if matches!(self.current().kind, TokenKind::Str(_)) {
            return self.expect_string().map(AppendValue::Literal);
        }

        let receiver = self.expect_ident()?;
        self.expect(&TokenKind::Dot)?;
        let property = self.expect_property()?;
        self.expect(&TokenKind::Dot)?;

        let method = self.expect_ident()?;
        if method.name != TO_STRING {
            return Err(Diagnostic::error(ErrorCode::E1001)
                .with_message(format!("expected `{TO_STRING}`, found `{}`", method.name))
                .with_label(method.span, "only `to_string()` can be called on a property"));
        }
        self.expect(&TokenKind::LeftParen)?;
        self.expect(&TokenKind::RightParen)?;

        Ok(AppendValue::Property { receiver, property })
    }
}
