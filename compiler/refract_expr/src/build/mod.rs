//! Expression-graph construction for a type, and the analyzer built on it.

use refract_analyzer::{AnalyzeError, AnalyzeResult, Analyzer, Strategy};
use refract_ir::{Described, PropertyDescriptor, Reflect, TypeDescriptor, TypeTag};

use crate::arena::{ExprArena, ExprId, GraphError};
use crate::compile::CompiledLambda;
use crate::lambda::Lambda;

/// Build the concatenation lambda for `descriptor`.
///
/// Each property becomes `(input as T).P.to_string()`; the results are
/// folded left to right with `concat`, starting from the first property.
/// A type with no properties has nothing to start the fold from and fails
/// with [`AnalyzeError::EmptyType`].
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(type_name = %descriptor.name(), properties = descriptor.len())
)]
pub fn build_lambda(descriptor: &TypeDescriptor) -> AnalyzeResult<Lambda> {
    let Some((first, rest)) = descriptor.properties().split_first() else {
        return Err(AnalyzeError::EmptyType {
            type_name: descriptor.name().to_string(),
        });
    };

    // parameter + convert + (property, to_string) per property + concats
    let mut arena = ExprArena::with_capacity(3 * descriptor.len() + 1);
    let parameter = arena.parameter()?;
    let typed = arena.convert(parameter, descriptor.tag())?;

    let mut body = stringify(&mut arena, typed, descriptor, first)?;
    for property in rest {
        let next = stringify(&mut arena, typed, descriptor, property)?;
        body = arena.concat(body, next)?;
    }

    let lambda = Lambda::new(arena, parameter, body)?;
    tracing::debug!(nodes = lambda.node_count(), "built expression graph");
    tracing::trace!(%lambda);
    Ok(lambda)
}

fn stringify(
    arena: &mut ExprArena,
    typed: ExprId,
    owner: &TypeDescriptor,
    property: &PropertyDescriptor,
) -> Result<ExprId, GraphError> {
    let read = arena.property(typed, owner, property.name())?;
    arena.to_string(read)
}

/// Build and compile the concatenation lambda for `descriptor`.
pub fn build_expression_analyzer(
    descriptor: &TypeDescriptor,
) -> AnalyzeResult<CompiledExpressionAnalyzer> {
    let lambda = build_lambda(descriptor)?;
    let compiled = lambda.compile()?;
    Ok(CompiledExpressionAnalyzer {
        target: descriptor.tag(),
        lambda,
        compiled,
    })
}

/// Analyzer backed by a compiled expression graph.
#[derive(Debug)]
pub struct CompiledExpressionAnalyzer {
    target: TypeTag,
    lambda: Lambda,
    compiled: CompiledLambda,
}

impl CompiledExpressionAnalyzer {
    /// Build for `T` from its static descriptor.
    pub fn for_type<T: Described>() -> AnalyzeResult<Self> {
        build_expression_analyzer(&T::descriptor())
    }

    pub fn target(&self) -> TypeTag {
        self.target
    }

    /// The graph the analyzer was compiled from.
    pub fn lambda(&self) -> &Lambda {
        &self.lambda
    }

    /// Drop the graph and keep only the compiled function.
    pub fn into_fn(self) -> impl Fn(&dyn Reflect) -> AnalyzeResult<String> + Send + Sync {
        self.compiled.into_fn()
    }
}

impl Analyzer for CompiledExpressionAnalyzer {
    fn strategy(&self) -> Strategy {
        Strategy::CompiledExpression
    }

    #[inline]
    fn analyze(&self, object: &dyn Reflect) -> AnalyzeResult<String> {
        self.compiled.call(object)
    }
}
