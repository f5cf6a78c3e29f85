//! Name resolution and lowering.
//!
//! Resolves the parameter type against the [`TypeRegistry`], property names
//! against that type's descriptor, and locals against their `let`s, then
//! lowers the body to a [`CompiledUnit`]. Every resolution problem in the
//! body is reported; a unit is produced only when there are none.

use refract_diagnostic::{Diagnostic, ErrorCode};
use refract_ir::{PropertyDescriptor, Span, TypeDescriptor, TypeRegistry};
use smallvec::SmallVec;

use crate::ast::{AnalyzerDecl, AppendValue, Ident, Stmt};
use crate::unit::{CompiledUnit, Op, Slot};

/// Lowered unit (when resolution succeeded) plus resolution diagnostics.
#[derive(Debug)]
pub struct LowerOutput {
    pub unit: Option<CompiledUnit>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Resolve and lower `decl` against `registry`.
pub fn lower(decl: &AnalyzerDecl<'_>, registry: &TypeRegistry) -> LowerOutput {
    let Some(descriptor) = registry.lookup(decl.param_type.name) else {
        let mut diag = Diagnostic::error(ErrorCode::E2001)
            .with_message(format!("unknown type `{}`", decl.param_type.name))
            .with_label(decl.param_type.span, "not a registered type");
        let known = registry.type_names();
        if !known.is_empty() {
            diag = diag.with_note(format!("registered types: {}", known.join(", ")));
        }
        return LowerOutput {
            unit: None,
            diagnostics: vec![diag],
        };
    };

    let mut lowerer = Lowerer {
        decl,
        descriptor: &descriptor,
        locals: SmallVec::new(),
        ops: Vec::with_capacity(decl.body.len()),
        diagnostics: Vec::new(),
    };
    let returned = lowerer.body();

    if !returned {
        lowerer.diagnostics.push(
            Diagnostic::error(ErrorCode::E2005)
                .with_message(format!("analyzer `{}` does not return", decl.name.name))
                .with_label(decl.close, "expected `return` before the end of the body")
                .with_secondary_label(decl.name.span, "declared here"),
        );
    }

    let Lowerer {
        locals,
        ops,
        diagnostics,
        ..
    } = lowerer;
    let unit = diagnostics.is_empty().then(|| {
        let names = locals.into_iter().map(|local| local.name.into()).collect();
        CompiledUnit::new(decl.name.name.to_string(), descriptor.tag(), names, ops)
    });
    LowerOutput { unit, diagnostics }
}

struct Lowerer<'a, 'src> {
    decl: &'a AnalyzerDecl<'src>,
    descriptor: &'a TypeDescriptor,
    /// Declared locals; the index is the slot.
    locals: SmallVec<[Ident<'src>; 2]>,
    ops: Vec<Op>,
    diagnostics: Vec<Diagnostic>,
}

impl<'src> Lowerer<'_, 'src> {
    /// Lower every statement; returns whether the body returns.
    fn body(&mut self) -> bool {
        let decl = self.decl;
        let mut returned = false;
        for stmt in &decl.body {
            match stmt {
                Stmt::Let { name, init } => {
                    if let Some(slot) = self.declare(name) {
                        self.ops.push(Op::Init {
                            slot,
                            text: init.value.as_ref().into(),
                        });
                    }
                }
                Stmt::Append { target, value } => {
                    let slot = self.assignable(target);
                    let op = match value {
                        AppendValue::Literal(lit) => slot.map(|slot| Op::AppendLiteral {
                            slot,
                            text: lit.value.as_ref().into(),
                        }),
                        AppendValue::Property { receiver, property } => self
                            .property(receiver, property)
                            .zip(slot)
                            .map(|(property, slot)| Op::AppendProperty { slot, property }),
                    };
                    self.ops.extend(op);
                }
                Stmt::Return { name } => {
                    returned = true;
                    if let Some(slot) = self.returnable(name) {
                        self.ops.push(Op::Return { slot });
                    }
                }
            }
        }
        returned
    }

    fn is_param(&self, ident: &Ident<'_>) -> bool {
        ident.name == self.decl.param.name
    }

    /// Slot and definition span of a local.
    fn find_local(&self, name: &str) -> Option<(Slot, Span)> {
        self.locals
            .iter()
            .position(|local| local.name == name)
            .and_then(|index| {
                let slot = Slot::try_from(index).ok()?;
                Some((slot, self.locals[index].span))
            })
    }

    fn declare(&mut self, name: &Ident<'src>) -> Option<Slot> {
        if self.is_param(name) {
            self.diagnostics.push(
                Diagnostic::error(ErrorCode::E2004)
                    .with_message(format!(
                        "`{}` is already defined as the input parameter",
                        name.name
                    ))
                    .with_label(name.span, "redefined here")
                    .with_secondary_label(self.decl.param.span, "parameter defined here"),
            );
            return None;
        }
        if let Some((_, first)) = self.find_local(name.name) {
            self.diagnostics.push(
                Diagnostic::error(ErrorCode::E2004)
                    .with_message(format!("duplicate local `{}`", name.name))
                    .with_label(name.span, "redefined here")
                    .with_secondary_label(first, "first defined here"),
            );
            return None;
        }

        let Ok(slot) = Slot::try_from(self.locals.len()) else {
            self.diagnostics.push(
                Diagnostic::error(ErrorCode::E2004)
                    .with_message("too many locals in one analyzer")
                    .with_label(name.span, "limit exceeded here"),
            );
            return None;
        };
        self.locals.push(name.clone());
        Some(slot)
    }

    fn unknown_variable(&mut self, ident: &Ident<'_>) {
        self.diagnostics.push(
            Diagnostic::error(ErrorCode::E2003)
                .with_message(format!("unknown variable `{}`", ident.name))
                .with_label(ident.span, "not declared with `let`"),
        );
    }

    /// Slot of an append target.
    fn assignable(&mut self, target: &Ident<'_>) -> Option<Slot> {
        if self.is_param(target) {
            self.diagnostics.push(
                Diagnostic::error(ErrorCode::E2006)
                    .with_message(format!(
                        "cannot assign to the input parameter `{}`",
                        target.name
                    ))
                    .with_label(target.span, "assignment to the input parameter")
                    .with_suggestion("append to a local declared with `let` instead"),
            );
            return None;
        }
        let slot = self.find_local(target.name).map(|(slot, _)| slot);
        if slot.is_none() {
            self.unknown_variable(target);
        }
        slot
    }

    /// Slot of a `return` operand.
    fn returnable(&mut self, name: &Ident<'_>) -> Option<Slot> {
        if self.is_param(name) {
            self.diagnostics.push(
                Diagnostic::error(ErrorCode::E2003)
                    .with_message(format!(
                        "`{}` is the input parameter, not a string local",
                        name.name
                    ))
                    .with_label(name.span, "expected a local declared with `let`"),
            );
            return None;
        }
        let slot = self.find_local(name.name).map(|(slot, _)| slot);
        if slot.is_none() {
            self.unknown_variable(name);
        }
        slot
    }

    /// Resolve `receiver.property` to the property's descriptor.
    fn property(
        &mut self,
        receiver: &Ident<'_>,
        property: &Ident<'_>,
    ) -> Option<PropertyDescriptor> {
        if !self.is_param(receiver) {
            if let Some((_, def)) = self.find_local(receiver.name) {
                self.diagnostics.push(
                    Diagnostic::error(ErrorCode::E2002)
                        .with_message(format!(
                            "`{}` is a string local and has no property `{}`",
                            receiver.name, property.name
                        ))
                        .with_label(property.span, "no such property")
                        .with_secondary_label(def, "local defined here"),
                );
            } else {
                self.unknown_variable(receiver);
            }
            return None;
        }

        if let Some(found) = self.descriptor.property(property.name) {
            return Some(*found);
        }

        let type_name = self.descriptor.name();
        let mut diag = Diagnostic::error(ErrorCode::E2002)
            .with_message(format!(
                "unknown property `{}` on `{type_name}`",
                property.name
            ))
            .with_label(property.span, format!("not a property of `{type_name}`"));
        diag = if self.descriptor.is_empty() {
            diag.with_note(format!("`{type_name}` has no properties"))
        } else {
            let names: Vec<_> = self
                .descriptor
                .properties()
                .iter()
                .map(PropertyDescriptor::name)
                .collect();
            diag.with_note(format!("available properties: {}", names.join(", ")))
        };
        self.diagnostics.push(diag);
        None
    }
}
