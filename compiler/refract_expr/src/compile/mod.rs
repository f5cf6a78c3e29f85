//! Compile a [`Lambda`] into nested closures.
//!
//! One pass over the graph turns every node into a boxed closure that owns
//! the closures of its operands. Calling the root closure does no graph
//! lookups: property reads are the captured accessors, and the type check
//! of each `convert` node is a captured tag comparison.

use std::fmt;

use refract_analyzer::{AnalyzeError, AnalyzeResult};
use refract_ir::{Reflect, Value};
use refract_stack::ensure_sufficient_stack;

use crate::arena::{ExprId, ExprKind, ExprType, GraphError};
use crate::lambda::Lambda;

type ObjectFn =
    Box<dyn for<'a> Fn(&'a dyn Reflect) -> AnalyzeResult<&'a dyn Reflect> + Send + Sync>;
type ValueFn = Box<dyn for<'a> Fn(&'a dyn Reflect) -> AnalyzeResult<Value<'a>> + Send + Sync>;
type StringFn = Box<dyn Fn(&dyn Reflect) -> AnalyzeResult<String> + Send + Sync>;

// The helpers below pin each closure's signature to the higher-ranked one,
// so a returned borrow is tied to the argument.

fn object_fn<F>(f: F) -> ObjectFn
where
    F: for<'a> Fn(&'a dyn Reflect) -> AnalyzeResult<&'a dyn Reflect> + Send + Sync + 'static,
{
    Box::new(f)
}

fn value_fn<F>(f: F) -> ValueFn
where
    F: for<'a> Fn(&'a dyn Reflect) -> AnalyzeResult<Value<'a>> + Send + Sync + 'static,
{
    Box::new(f)
}

fn string_fn<F>(f: F) -> StringFn
where
    F: Fn(&dyn Reflect) -> AnalyzeResult<String> + Send + Sync + 'static,
{
    Box::new(f)
}

/// A compiled lambda.
pub struct CompiledLambda {
    body: StringFn,
    nodes: usize,
}

impl CompiledLambda {
    #[inline]
    pub fn call(&self, object: &dyn Reflect) -> AnalyzeResult<String> {
        (self.body)(object)
    }

    /// Number of graph nodes the closure tree was compiled from.
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// The compiled function as a plain callable.
    pub fn into_fn(self) -> impl Fn(&dyn Reflect) -> AnalyzeResult<String> + Send + Sync {
        self.body
    }
}

impl fmt::Debug for CompiledLambda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledLambda")
            .field("nodes", &self.nodes)
            .finish_non_exhaustive()
    }
}

impl Lambda {
    #[tracing::instrument(level = "debug", skip_all, fields(nodes = self.node_count()))]
    pub fn compile(&self) -> Result<CompiledLambda, GraphError> {
        let body = Compiler { lambda: self }.string(self.body(), "lambda")?;
        tracing::trace!("compiled expression graph");
        Ok(CompiledLambda {
            body,
            nodes: self.node_count(),
        })
    }
}

struct Compiler<'l> {
    lambda: &'l Lambda,
}

impl Compiler<'_> {
    #[cold]
    fn operand_error(&self, id: ExprId, node: &'static str, expected: ExprType) -> GraphError {
        match self.lambda.arena().ty(id) {
            Ok(found) => GraphError::OperandType {
                node,
                expected,
                found,
            },
            Err(err) => err,
        }
    }

    fn object(&self, id: ExprId, node: &'static str) -> Result<ObjectFn, GraphError> {
        ensure_sufficient_stack(|| match self.lambda.arena().kind(id)? {
            ExprKind::Parameter if id == self.lambda.parameter() => {
                Ok(object_fn(|object| Ok(object)))
            }
            ExprKind::Parameter => Err(GraphError::UnboundParameter(id)),
            ExprKind::Convert { operand, target } => {
                let inner = self.object(operand, "convert")?;
                Ok(object_fn(move |object| {
                    let object = inner(object)?;
                    if target.matches(object.as_any()) {
                        Ok(object)
                    } else {
                        Err(AnalyzeError::type_mismatch(
                            target.name(),
                            object.type_tag().name(),
                        ))
                    }
                }))
            }
            _ => Err(self.operand_error(id, node, ExprType::Object)),
        })
    }

    /// Closure reading a property, plus the owner and property names a
    /// null read is reported under.
    fn value(
        &self,
        id: ExprId,
        node: &'static str,
    ) -> Result<(ValueFn, &'static str, &'static str), GraphError> {
        let ExprKind::Property {
            receiver,
            owner,
            property,
        } = self.lambda.arena().kind(id)?
        else {
            return Err(self.operand_error(id, node, ExprType::Value));
        };
        let inner = self.object(receiver, "property")?;
        let read = value_fn(move |object| {
            let object = inner(object)?;
            property.read(object.as_any()).ok_or_else(|| {
                AnalyzeError::type_mismatch(owner.name(), object.type_tag().name())
            })
        });
        Ok((read, owner.name(), property.name()))
    }

    fn string(&self, id: ExprId, node: &'static str) -> Result<StringFn, GraphError> {
        ensure_sufficient_stack(|| match self.lambda.arena().kind(id)? {
            ExprKind::ToString { operand } => {
                let (read, owner, property) = self.value(operand, "to_string")?;
                Ok(string_fn(move |object| {
                    read(object)?
                        .to_display_string()
                        .map_err(|_| AnalyzeError::null_value(owner, property))
                }))
            }
            ExprKind::Concat { left, right } => {
                let left = self.string(left, "concat")?;
                let right = self.string(right, "concat")?;
                Ok(string_fn(move |object| {
                    ensure_sufficient_stack(|| {
                        let mut out = left(object)?;
                        out.push_str(&right(object)?);
                        Ok(out)
                    })
                }))
            }
            _ => Err(self.operand_error(id, node, ExprType::Str)),
        })
    }
}

#[cfg(test)]
mod tests;
