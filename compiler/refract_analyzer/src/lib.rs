//! The analyzer capability.
//!
//! An analyzer turns an opaque object into the concatenation of its
//! property values, in declaration order, with no separator. Every strategy
//! implements [`Analyzer`] and must agree with every other strategy on the
//! output for the same object state.
//!
//! This crate holds the shared pieces and the two reflection strategies:
//!
//! - [`NaiveReflectionAnalyzer`]: discovers properties on every call
//! - [`CachedReflectionAnalyzer`]: discovers once, reuses the descriptor
//!
//! The generated-code and compiled-expression strategies live in
//! `refract_codegen` and `refract_expr`; they reuse [`append_property`] so
//! all four stringify and fail identically.

mod cached;
mod errors;
mod naive;
mod render;
mod strategy;

pub use cached::CachedReflectionAnalyzer;
pub use errors::{AnalyzeError, AnalyzeResult};
pub use naive::NaiveReflectionAnalyzer;
pub use render::{append_property, concat_properties};
pub use strategy::{ParseStrategyError, Strategy};

use refract_ir::Reflect;

/// Produce the concatenated property string of an object.
///
/// Implementations never mutate the object.
pub trait Analyzer: Send + Sync {
    /// Which strategy this analyzer implements.
    fn strategy(&self) -> Strategy;

    fn analyze(&self, object: &dyn Reflect) -> AnalyzeResult<String>;
}

impl<A: Analyzer + ?Sized> Analyzer for Box<A> {
    fn strategy(&self) -> Strategy {
        (**self).strategy()
    }

    #[inline]
    fn analyze(&self, object: &dyn Reflect) -> AnalyzeResult<String> {
        (**self).analyze(object)
    }
}

impl<A: Analyzer + ?Sized> Analyzer for std::sync::Arc<A> {
    fn strategy(&self) -> Strategy {
        (**self).strategy()
    }

    #[inline]
    fn analyze(&self, object: &dyn Reflect) -> AnalyzeResult<String> {
        (**self).analyze(object)
    }
}
