//! Compiled analyzer units.
//!
//! A [`CompiledUnit`] is the lowered form of one `analyzer` declaration: a
//! flat op list over string locals. Property reads are pre-resolved
//! accessors, so running a unit does no name lookup and no discovery.

use std::fmt;

use refract_analyzer::{append_property, AnalyzeResult};
use refract_ir::{PropertyDescriptor, Reflect, TypeTag};
use smallvec::SmallVec;

/// Index of a string local within its unit.
pub type Slot = u16;

/// One lowered statement.
#[derive(Clone, Debug)]
pub enum Op {
    /// `let LOCAL = "text";`
    Init { slot: Slot, text: Box<str> },
    /// `LOCAL += input.PROPERTY.to_string();`
    AppendProperty {
        slot: Slot,
        property: PropertyDescriptor,
    },
    /// `LOCAL += "text";`
    AppendLiteral { slot: Slot, text: Box<str> },
    /// `return LOCAL;`
    Return { slot: Slot },
}

/// Lowered analyzer, ready to run against instances of `target`.
#[derive(Clone, Debug)]
pub struct CompiledUnit {
    name: String,
    target: TypeTag,
    locals: SmallVec<[Box<str>; 2]>,
    ops: Vec<Op>,
}

impl CompiledUnit {
    /// Assemble a unit. Every slot in `ops` must index into `locals`, and
    /// the last op must be `Return`.
    pub(crate) fn new(
        name: String,
        target: TypeTag,
        locals: SmallVec<[Box<str>; 2]>,
        ops: Vec<Op>,
    ) -> Self {
        debug_assert!(matches!(ops.last(), Some(Op::Return { .. })));
        CompiledUnit {
            name,
            target,
            locals,
            ops,
        }
    }

    /// Name of the `analyzer` declaration.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Type the unit reads properties from.
    pub fn target(&self) -> TypeTag {
        self.target
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn local_count(&self) -> usize {
        self.locals.len()
    }

    /// Run the unit against `object`.
    ///
    /// Does not check the object's type up front; an accessor that rejects
    /// the object reports `TypeMismatch`.
    pub fn execute(&self, object: &dyn Reflect) -> AnalyzeResult<String> {
        let mut locals: SmallVec<[String; 2]> = SmallVec::new();
        locals.resize(self.locals.len(), String::new());
        let type_name = self.target.name();

        for op in &self.ops {
            match op {
                Op::Init { slot, text } => {
                    let local = &mut locals[usize::from(*slot)];
                    local.clear();
                    local.push_str(text);
                }
                Op::AppendProperty { slot, property } => {
                    append_property(&mut locals[usize::from(*slot)], object, type_name, property)?;
                }
                Op::AppendLiteral { slot, text } => {
                    locals[usize::from(*slot)].push_str(text);
                }
                Op::Return { slot } => {
                    return Ok(std::mem::take(&mut locals[usize::from(*slot)]));
                }
            }
        }
        // Lowering always ends a unit with `Return`.
        Ok(String::new())
    }
}

impl fmt::Display for CompiledUnit {
    /// Disassembly, one op per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unit {} for {}", self.name, self.target)?;
        let local = |slot: Slot| {
            self.locals
                .get(usize::from(slot))
                .map_or("?", |name| &**name)
        };
        for (index, op) in self.ops.iter().enumerate() {
            write!(f, "\n  {index:>3}: ")?;
            match op {
                Op::Init { slot, text } => write!(f, "init {} = {text:?}", local(*slot))?,
                Op::AppendProperty { slot, property } => {
                    write!(f, "append {} += .{}", local(*slot), property.name())?;
                }
                Op::AppendLiteral { slot, text } => {
                    write!(f, "append {} += {text:?}", local(*slot))?;
                }
                Op::Return { slot } => write!(f, "return {}", local(*slot))?,
            }
        }
        Ok(())
    }
}
