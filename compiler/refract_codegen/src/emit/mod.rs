//! Source emitter.
//!
//! Writes a type-specialized analyzer in the analyzer language:
//!
//! ```text
//! // generated analyzer for `UnknownType`
//! analyzer UnknownTypeAnalyzer(input: UnknownType) {
//!     let result = "";
//!     result += input.Prop1.to_string();
//!     result += input.Prop2.to_string();
//!     return result;
//! }
//! ```

use std::fmt;

use refract_ir::TypeDescriptor;

/// Name of the parameter bound to the analyzed object.
pub const INPUT_PARAM: &str = "input";

/// Name of the accumulator local.
pub const RESULT_LOCAL: &str = "result";

/// Emitted analyzer source for one type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedSource {
    type_name: &'static str,
    analyzer_name: String,
    text: String,
}

impl GeneratedSource {
    /// Name of the type the analyzer is specialized to.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Name of the emitted `analyzer` declaration.
    pub fn analyzer_name(&self) -> &str {
        &self.analyzer_name
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for GeneratedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Emit analyzer source reading every property of `descriptor` in order.
///
/// Property and type names are written verbatim. A name that is not an
/// identifier in the analyzer language surfaces later as a compile
/// diagnostic.
pub fn emit_source(descriptor: &TypeDescriptor) -> GeneratedSource {
    let type_name = descriptor.name();
    let analyzer_name = format!("{type_name}Analyzer");

    let mut text = String::with_capacity(128 + descriptor.len() * 48);
    text.push_str("// generated analyzer for `");
    text.push_str(type_name);
    text.push_str("`\n");

    text.push_str("analyzer ");
    text.push_str(&analyzer_name);
    text.push('(');
    text.push_str(INPUT_PARAM);
    text.push_str(": ");
    text.push_str(type_name);
    text.push_str(") {\n");

    text.push_str("    let ");
    text.push_str(RESULT_LOCAL);
    text.push_str(" = \"\";\n");

    for property in descriptor.properties() {
        text.push_str("    ");
        text.push_str(RESULT_LOCAL);
        text.push_str(" += ");
        text.push_str(INPUT_PARAM);
        text.push('.');
        text.push_str(property.name());
        text.push_str(".to_string();\n");
    }

    text.push_str("    return ");
    text.push_str(RESULT_LOCAL);
    text.push_str(";\n}\n");

    GeneratedSource {
        type_name,
        analyzer_name,
        text,
    }
}

#[cfg(test)]
mod tests;
