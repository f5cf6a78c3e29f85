//! Lambdas over an expression graph.

use std::fmt;

use refract_stack::ensure_sufficient_stack;

use crate::arena::{ExprArena, ExprId, ExprKind, ExprType, GraphError};

/// Name the parameter is printed under.
pub const PARAM_NAME: &str = "input";

/// A string-valued expression over one object parameter.
///
/// Printing a lambda renders its body as an expression:
///
/// ```text
/// |input| ((input as UnknownType).Prop1.to_string() + (input as UnknownType).Prop2.to_string())
/// ```
#[derive(Clone, Debug)]
pub struct Lambda {
    arena: ExprArena,
    parameter: ExprId,
    body: ExprId,
}

impl Lambda {
    /// Wrap `body` as a function of `parameter`.
    ///
    /// `parameter` must be a parameter node and `body` must be string-typed.
    pub fn new(arena: ExprArena, parameter: ExprId, body: ExprId) -> Result<Self, GraphError> {
        if !matches!(arena.kind(parameter)?, ExprKind::Parameter) {
            return Err(GraphError::NotAParameter(parameter));
        }
        let found = arena.ty(body)?;
        if found != ExprType::Str {
            return Err(GraphError::OperandType {
                node: "lambda",
                expected: ExprType::Str,
                found,
            });
        }
        Ok(Lambda {
            arena,
            parameter,
            body,
        })
    }

    pub fn arena(&self) -> &ExprArena {
        &self.arena
    }

    pub fn parameter(&self) -> ExprId {
        self.parameter
    }

    pub fn body(&self) -> ExprId {
        self.body
    }

    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    fn write_expr(&self, f: &mut fmt::Formatter<'_>, id: ExprId) -> fmt::Result {
        ensure_sufficient_stack(|| {
            let Ok(kind) = self.arena.kind(id) else {
                return write!(f, "<{id:?}>");
            };
            match kind {
                ExprKind::Parameter => f.write_str(PARAM_NAME),
                ExprKind::Convert { operand, target } => {
                    f.write_str("(")?;
                    self.write_expr(f, operand)?;
                    write!(f, " as {target})")
                }
                ExprKind::Property {
                    receiver, property, ..
                } => {
                    self.write_expr(f, receiver)?;
                    write!(f, ".{}", property.name())
                }
                ExprKind::ToString { operand } => {
                    self.write_expr(f, operand)?;
                    f.write_str(".to_string()")
                }
                ExprKind::Concat { left, right } => {
                    f.write_str("(")?;
                    self.write_expr(f, left)?;
                    f.write_str(" + ")?;
                    self.write_expr(f, right)?;
                    f.write_str(")")
                }
            }
        })
    }
}

impl fmt::Display for Lambda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|{PARAM_NAME}| ")?;
        self.write_expr(f, self.body)
    }
}
