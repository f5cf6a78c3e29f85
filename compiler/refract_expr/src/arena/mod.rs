//! Flat expression arena.
//!
//! Nodes live in one `Vec` and refer to each other by [`ExprId`]. Every
//! constructor checks the static type of its operands, so a graph that was
//! built without error is well typed:
//!
//! | Node | Operands | Result |
//! |------|----------|--------|
//! | `parameter` | | object |
//! | `convert` | object | `T` |
//! | `property` | `T` | value |
//! | `to_string` | value | string |
//! | `concat` | string, string | string |

use std::fmt;

use refract_analyzer::AnalyzeError;
use refract_ir::{PropertyDescriptor, TypeDescriptor, TypeTag};

/// Index into an [`ExprArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

/// Static type of the value a node produces.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExprType {
    /// An object of unknown concrete type.
    Object,
    /// An object known to be an instance of the tagged type.
    Typed(TypeTag),
    /// A single property value.
    Value,
    Str,
}

impl fmt::Display for ExprType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprType::Object => f.write_str("object"),
            ExprType::Typed(tag) => write!(f, "`{tag}`"),
            ExprType::Value => f.write_str("value"),
            ExprType::Str => f.write_str("string"),
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub enum ExprKind {
    /// The lambda's input object.
    Parameter,
    /// Checked downcast of an object to `target`.
    Convert { operand: ExprId, target: TypeTag },
    /// Read of `property` from an instance of `owner`.
    Property {
        receiver: ExprId,
        owner: TypeTag,
        property: PropertyDescriptor,
    },
    ToString { operand: ExprId },
    Concat { left: ExprId, right: ExprId },
}

impl ExprKind {
    pub fn name(&self) -> &'static str {
        match self {
            ExprKind::Parameter => "parameter",
            ExprKind::Convert { .. } => "convert",
            ExprKind::Property { .. } => "property",
            ExprKind::ToString { .. } => "to_string",
            ExprKind::Concat { .. } => "concat",
        }
    }
}

/// Misuse of the graph construction API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// The id does not name a node of this arena.
    UnknownNode { id: ExprId, len: usize },
    /// An operand has the wrong static type.
    OperandType {
        node: &'static str,
        expected: ExprType,
        found: ExprType,
    },
    UnknownProperty {
        type_name: &'static str,
        property: String,
    },
    /// A lambda's parameter slot names a node that is not a parameter.
    NotAParameter(ExprId),
    /// The body refers to a parameter other than the lambda's own.
    UnboundParameter(ExprId),
    /// The arena cannot index another node.
    TooManyNodes,
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::UnknownNode { id, len } => {
                write!(f, "{id:?} is not a node of this arena ({len} nodes)")
            }
            GraphError::OperandType {
                node,
                expected,
                found,
            } => write!(f, "`{node}` operand must be {expected}, found {found}"),
            GraphError::UnknownProperty {
                type_name,
                property,
            } => write!(f, "type `{type_name}` has no property `{property}`"),
            GraphError::NotAParameter(id) => {
                write!(f, "lambda parameter {id:?} is not a `parameter` node")
            }
            GraphError::UnboundParameter(id) => {
                write!(f, "{id:?} is not the parameter of the enclosing lambda")
            }
            GraphError::TooManyNodes => f.write_str("expression arena is full"),
        }
    }
}

impl std::error::Error for GraphError {}

impl From<GraphError> for AnalyzeError {
    fn from(err: GraphError) -> Self {
        AnalyzeError::InvalidExpression {
            message: err.to_string(),
        }
    }
}

#[derive(Copy, Clone, Debug)]
struct Node {
    kind: ExprKind,
    ty: ExprType,
}

/// Owner of every node in one expression graph.
#[derive(Clone, Debug, Default)]
pub struct ExprArena {
    nodes: Vec<Node>,
}

impl ExprArena {
    pub fn new() -> Self {
        ExprArena::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        ExprArena {
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node(&self, id: ExprId) -> Result<&Node, GraphError> {
        self.nodes.get(id.index()).ok_or(GraphError::UnknownNode {
            id,
            len: self.nodes.len(),
        })
    }

    pub fn kind(&self, id: ExprId) -> Result<ExprKind, GraphError> {
        self.node(id).map(|node| node.kind)
    }

    pub fn ty(&self, id: ExprId) -> Result<ExprType, GraphError> {
        self.node(id).map(|node| node.ty)
    }

    fn alloc(&mut self, kind: ExprKind, ty: ExprType) -> Result<ExprId, GraphError> {
        let index = u32::try_from(self.nodes.len()).map_err(|_| GraphError::TooManyNodes)?;
        self.nodes.push(Node { kind, ty });
        Ok(ExprId(index))
    }

    fn check_operand(
        &self,
        id: ExprId,
        node: &'static str,
        expected: ExprType,
    ) -> Result<(), GraphError> {
        let found = self.ty(id)?;
        if found == expected {
            Ok(())
        } else {
            Err(GraphError::OperandType {
                node,
                expected,
                found,
            })
        }
    }

    pub fn parameter(&mut self) -> Result<ExprId, GraphError> {
        self.alloc(ExprKind::Parameter, ExprType::Object)
    }

    pub fn convert(&mut self, operand: ExprId, target: TypeTag) -> Result<ExprId, GraphError> {
        self.check_operand(operand, "convert", ExprType::Object)?;
        self.alloc(ExprKind::Convert { operand, target }, ExprType::Typed(target))
    }

    /// Read the property called `name` of `owner` from `receiver`, which
    /// must already be typed as `owner`.
    pub fn property(
        &mut self,
        receiver: ExprId,
        owner: &TypeDescriptor,
        name: &str,
    ) -> Result<ExprId, GraphError> {
        let tag = owner.tag();
        self.check_operand(receiver, "property", ExprType::Typed(tag))?;
        let property = *owner
            .property(name)
            .ok_or_else(|| GraphError::UnknownProperty {
                type_name: owner.name(),
                property: name.to_string(),
            })?;
        self.alloc(
            ExprKind::Property {
                receiver,
                owner: tag,
                property,
            },
            ExprType::Value,
        )
    }

    pub fn to_string(&mut self, operand: ExprId) -> Result<ExprId, GraphError> {
        self.check_operand(operand, "to_string", ExprType::Value)?;
        self.alloc(ExprKind::ToString { operand }, ExprType::Str)
    }

    pub fn concat(&mut self, left: ExprId, right: ExprId) -> Result<ExprId, GraphError> {
        self.check_operand(left, "concat", ExprType::Str)?;
        self.check_operand(right, "concat", ExprType::Str)?;
        self.alloc(ExprKind::Concat { left, right }, ExprType::Str)
    }
}

#[cfg(test)]
mod tests;
