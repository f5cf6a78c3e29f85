//! Syntax tree for analyzer source.
//!
//! Borrowed from the source text; string literal values are already
//! unescaped.

use std::borrow::Cow;

use refract_ir::Span;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ident<'src> {
    pub name: &'src str,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrLit<'src> {
    pub value: Cow<'src, str>,
    pub span: Span,
}

/// `analyzer NAME(PARAM: TYPE) { BODY }`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalyzerDecl<'src> {
    pub name: Ident<'src>,
    pub param: Ident<'src>,
    pub param_type: Ident<'src>,
    pub body: Vec<Stmt<'src>>,
    /// Span of the closing `}`.
    pub close: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stmt<'src> {
    /// `let NAME = "literal";`
    Let { name: Ident<'src>, init: StrLit<'src> },
    /// `TARGET += APPEND;`
    Append {
        target: Ident<'src>,
        value: AppendValue<'src>,
    },
    /// `return NAME;`
    Return { name: Ident<'src> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppendValue<'src> {
    /// `RECEIVER.PROPERTY.to_string()`
    Property {
        receiver: Ident<'src>,
        property: Ident<'src>,
    },
    Literal(StrLit<'src>),
}
