//! Reflection with discovery on every call.

use refract_ir::Reflect;

use crate::{concat_properties, AnalyzeResult, Analyzer, Strategy};

/// Discovers the object's properties on every call.
///
/// Stateless; the baseline every other strategy is measured against.
#[derive(Copy, Clone, Debug, Default)]
pub struct NaiveReflectionAnalyzer;

impl NaiveReflectionAnalyzer {
    pub fn new() -> Self {
        NaiveReflectionAnalyzer
    }
}

impl Analyzer for NaiveReflectionAnalyzer {
    fn strategy(&self) -> Strategy {
        Strategy::NaiveReflection
    }

    fn analyze(&self, object: &dyn Reflect) -> AnalyzeResult<String> {
        let descriptor = object.discover();
        concat_properties(object, &descriptor)
    }
}

#[cfg(test)]
mod tests;
