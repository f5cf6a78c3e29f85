//! Tree-walking evaluation of a [`Lambda`].
//!
//! Walks the graph on every call. The compiled form in `compile` must
//! produce the same result and the same error for every object; the
//! interpreter is the reference it is tested against.

use refract_analyzer::{AnalyzeError, AnalyzeResult};
use refract_ir::{Reflect, Value};
use refract_stack::ensure_sufficient_stack;

use crate::arena::{ExprId, ExprKind, ExprType, GraphError};
use crate::lambda::Lambda;

/// Result of evaluating one node.
enum Evaluated<'a> {
    Object(&'a dyn Reflect),
    Value {
        value: Value<'a>,
        owner: &'static str,
        property: &'static str,
    },
    Str(String),
}

impl Evaluated<'_> {
    fn ty(&self) -> ExprType {
        match self {
            Evaluated::Object(_) => ExprType::Object,
            Evaluated::Value { .. } => ExprType::Value,
            Evaluated::Str(_) => ExprType::Str,
        }
    }
}

#[cold]
fn operand_error(node: &'static str, expected: ExprType, found: &Evaluated<'_>) -> AnalyzeError {
    GraphError::OperandType {
        node,
        expected,
        found: found.ty(),
    }
    .into()
}

impl Lambda {
    /// Evaluate the lambda with `object` bound to its parameter.
    pub fn evaluate(&self, object: &dyn Reflect) -> AnalyzeResult<String> {
        self.eval_str(self.body(), object, "lambda")
    }

    fn eval<'a>(&self, id: ExprId, object: &'a dyn Reflect) -> AnalyzeResult<Evaluated<'a>> {
        ensure_sufficient_stack(|| match self.arena().kind(id)? {
            ExprKind::Parameter if id == self.parameter() => Ok(Evaluated::Object(object)),
            ExprKind::Parameter => Err(GraphError::UnboundParameter(id).into()),
            ExprKind::Convert { operand, target } => {
                let inner = self.eval_object(operand, object, "convert")?;
                if target.matches(inner.as_any()) {
                    Ok(Evaluated::Object(inner))
                } else {
                    Err(AnalyzeError::type_mismatch(
                        target.name(),
                        inner.type_tag().name(),
                    ))
                }
            }
            ExprKind::Property {
                receiver,
                owner,
                property,
            } => {
                let inner = self.eval_object(receiver, object, "property")?;
                let value = property.read(inner.as_any()).ok_or_else(|| {
                    AnalyzeError::type_mismatch(owner.name(), inner.type_tag().name())
                })?;
                Ok(Evaluated::Value {
                    value,
                    owner: owner.name(),
                    property: property.name(),
                })
            }
            ExprKind::ToString { operand } => match self.eval(operand, object)? {
                Evaluated::Value {
                    value,
                    owner,
                    property,
                } => value
                    .to_display_string()
                    .map(Evaluated::Str)
                    .map_err(|_| AnalyzeError::null_value(owner, property)),
                other => Err(operand_error("to_string", ExprType::Value, &other)),
            },
            ExprKind::Concat { left, right } => {
                let mut out = self.eval_str(left, object, "concat")?;
                out.push_str(&self.eval_str(right, object, "concat")?);
                Ok(Evaluated::Str(out))
            }
        })
    }

    fn eval_object<'a>(
        &self,
        id: ExprId,
        object: &'a dyn Reflect,
        node: &'static str,
    ) -> AnalyzeResult<&'a dyn Reflect> {
        match self.eval(id, object)? {
            Evaluated::Object(inner) => Ok(inner),
            other => Err(operand_error(node, ExprType::Object, &other)),
        }
    }

    fn eval_str(
        &self,
        id: ExprId,
        object: &dyn Reflect,
        node: &'static str,
    ) -> AnalyzeResult<String> {
        match self.eval(id, object)? {
            Evaluated::Str(out) => Ok(out),
            other => Err(operand_error(node, ExprType::Str, &other)),
        }
    }
}
