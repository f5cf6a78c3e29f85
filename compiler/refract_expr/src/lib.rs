//! Compiled-expression analyzers.
//!
//! The concatenation for a type is built as a typed expression graph:
//!
//! ```text
//! concat
//! ├── concat
//! │   ├── to_string ── property Prop1 ── convert UnknownType ── parameter
//! │   └── to_string ── property Prop2 ── (shared convert)
//! └── to_string ── property Prop3 ── (shared convert)
//! ```
//!
//! The graph is wrapped in a [`Lambda`] and compiled once into nested
//! closures ([`CompiledLambda`]). [`Lambda::evaluate`] interprets the same
//! graph directly and must agree with the compiled form.
//!
//! Graphs for wide types are deep, so every recursive walk runs under
//! [`refract_stack::ensure_sufficient_stack`].

mod arena;
mod build;
mod compile;
mod interpret;
mod lambda;

pub use arena::{ExprArena, ExprId, ExprKind, ExprType, GraphError};
pub use build::{build_expression_analyzer, build_lambda, CompiledExpressionAnalyzer};
pub use compile::CompiledLambda;
pub use lambda::{Lambda, PARAM_NAME};
