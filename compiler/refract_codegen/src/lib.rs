//! Generated-code analyzers.
//!
//! For a type `T`, the generator writes the source of an analyzer that
//! reads every property of `T` in declaration order, compiles that source
//! in-process against a [`TypeRegistry`](refract_ir::TypeRegistry), loads
//! the result, and returns it behind the shared
//! [`Analyzer`](refract_analyzer::Analyzer) trait.
//!
//! # Pipeline
//!
//! | Stage | Module | Output |
//! |-------|--------|--------|
//! | emit | `emit` | [`GeneratedSource`] |
//! | lex | [`lexer`] | [`Token`](lexer::Token)s |
//! | parse | [`parser`] | [`AnalyzerDecl`](ast::AnalyzerDecl) |
//! | resolve + lower | `lower` | [`CompiledUnit`] |
//! | load | `loader` | `Arc<CompiledUnit>` in the [`UnitLoader`] |
//!
//! Every stage reports problems as [`Diagnostic`](refract_diagnostic::Diagnostic)s.
//! A build that produced any error fails with
//! [`AnalyzeError::CodeGeneration`](refract_analyzer::AnalyzeError::CodeGeneration)
//! carrying all of them.

pub mod ast;
mod emit;
mod generator;
pub mod lexer;
mod loader;
mod lower;
pub mod parser;
mod unit;

pub use emit::{emit_source, GeneratedSource, INPUT_PARAM, RESULT_LOCAL};
pub use generator::{compile, CodeGenerator, Compilation, GeneratedAnalyzer};
pub use loader::UnitLoader;
pub use lower::{lower, LowerOutput};
pub use unit::{CompiledUnit, Op, Slot};
