//! Code generator: emit, compile, load.
//!
//! [`compile`] runs the in-process pipeline over analyzer source:
//!
//! ```text
//! source ──► lex ──► parse ──► lower ──► CompiledUnit
//!             │        │         │
//!             └────────┴─────────┴──► Vec<Diagnostic>
//! ```
//!
//! Lowering only runs when lexing and parsing were clean, so a syntax error
//! is never followed by resolution errors that are just its echo.
//!
//! [`CodeGenerator`] ties the pipeline to a [`TypeRegistry`] and a
//! [`UnitLoader`] and hands out [`GeneratedAnalyzer`]s.

use std::sync::Arc;

use refract_analyzer::{AnalyzeError, AnalyzeResult, Analyzer, Strategy};
use refract_diagnostic::{has_errors, Diagnostic, ErrorCode};
use refract_ir::{Described, Reflect, TypeDescriptor, TypeRegistry, TypeTag};

use crate::emit::emit_source;
use crate::lexer::lex;
use crate::loader::UnitLoader;
use crate::lower::lower;
use crate::parser::parse;
use crate::unit::CompiledUnit;

/// Result of compiling one piece of analyzer source.
#[derive(Debug)]
pub struct Compilation {
    /// Present only when `diagnostics` holds no errors.
    pub unit: Option<CompiledUnit>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Compilation {
    pub fn is_ok(&self) -> bool {
        self.unit.is_some()
    }
}

/// Compile analyzer source against the types in `registry`.
pub fn compile(source: &str, registry: &TypeRegistry) -> Compilation {
    let lexed = lex(source);
    let parsed = parse(&lexed.tokens);

    let mut diagnostics = lexed.diagnostics;
    diagnostics.extend(parsed.diagnostics);

    let unit = match parsed.decl {
        Some(decl) if !has_errors(&diagnostics) => {
            let lowered = lower(&decl, registry);
            diagnostics.extend(lowered.diagnostics);
            lowered.unit
        }
        _ => None,
    };

    tracing::trace!(
        source_len = source.len(),
        diagnostics = diagnostics.len(),
        "compiled analyzer source"
    );
    Compilation { unit, diagnostics }
}

/// Builds generated-code analyzers.
///
/// Every unit it compiles stays loaded in its [`UnitLoader`] for the
/// generator's lifetime.
#[derive(Debug, Default)]
pub struct CodeGenerator {
    registry: Arc<TypeRegistry>,
    loader: UnitLoader,
}

impl CodeGenerator {
    /// Generator over a fresh, empty registry.
    pub fn new() -> Self {
        CodeGenerator::default()
    }

    /// Generator resolving type names against a shared registry.
    pub fn with_registry(registry: Arc<TypeRegistry>) -> Self {
        CodeGenerator {
            registry,
            loader: UnitLoader::new(),
        }
    }

    pub fn registry(&self) -> &Arc<TypeRegistry> {
        &self.registry
    }

    pub fn loader(&self) -> &UnitLoader {
        &self.loader
    }

    /// Emit, compile and load an analyzer specialized to `descriptor`.
    ///
    /// The type must already be registered under its name, or compilation
    /// fails with an unknown-type diagnostic.
    #[tracing::instrument(level = "debug", skip_all, fields(type_name = %descriptor.name()))]
    pub fn build(&self, descriptor: &TypeDescriptor) -> AnalyzeResult<GeneratedAnalyzer> {
        // Compiling would resolve against whichever type owns the name.
        if let Some(registered) = self.registry.lookup(descriptor.name()) {
            if registered.tag() != descriptor.tag() {
                return Err(foreign_registration(descriptor.name()));
            }
        }

        let source = emit_source(descriptor);
        tracing::debug!(
            analyzer = source.analyzer_name(),
            source_len = source.text().len(),
            "emitted analyzer source"
        );

        let Compilation { unit, diagnostics } = compile(source.text(), &self.registry);
        let Some(unit) = unit else {
            tracing::debug!(
                diagnostics = diagnostics.len(),
                "generated analyzer failed to compile"
            );
            return Err(AnalyzeError::CodeGeneration {
                type_name: descriptor.name().to_string(),
                diagnostics,
            });
        };

        Ok(self.instantiate(unit, source.text().into()))
    }

    /// Register `T` in the generator's registry, then [`build`](Self::build).
    pub fn build_for<T: Described>(&self) -> AnalyzeResult<GeneratedAnalyzer> {
        let descriptor = self.registry.register::<T>().map_err(|err| {
            AnalyzeError::CodeGeneration {
                type_name: T::tag().name().to_string(),
                diagnostics: vec![Diagnostic::error(ErrorCode::E2001)
                    .with_message(err.to_string())
                    .with_note("type names in one registry must be unique")],
            }
        })?;
        self.build(&descriptor)
    }

    /// Compile and load hand-written analyzer source.
    ///
    /// On failure, returns every diagnostic the pipeline produced.
    #[tracing::instrument(level = "debug", skip_all, fields(source_len = source.len()))]
    pub fn compile_source(&self, source: &str) -> Result<GeneratedAnalyzer, Vec<Diagnostic>> {
        let Compilation { unit, diagnostics } = compile(source, &self.registry);
        match unit {
            Some(unit) => Ok(self.instantiate(unit, source.into())),
            None => Err(diagnostics),
        }
    }

    fn instantiate(&self, unit: CompiledUnit, source: Arc<str>) -> GeneratedAnalyzer {
        GeneratedAnalyzer {
            unit: self.loader.load(unit),
            source,
        }
    }
}

#[cold]
fn foreign_registration(type_name: &str) -> AnalyzeError {
    AnalyzeError::CodeGeneration {
        type_name: type_name.to_string(),
        diagnostics: vec![Diagnostic::error(ErrorCode::E2001)
            .with_message(format!(
                "type name `{type_name}` resolves to a different type in the registry"
            ))
            .with_note("the registry maps each name to the first type registered under it")],
    }
}

/// Analyzer backed by a loaded [`CompiledUnit`].
#[derive(Clone, Debug)]
pub struct GeneratedAnalyzer {
    unit: Arc<CompiledUnit>,
    source: Arc<str>,
}

impl GeneratedAnalyzer {
    pub fn unit(&self) -> &Arc<CompiledUnit> {
        &self.unit
    }

    /// Source text the unit was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> TypeTag {
        self.unit.target()
    }
}

impl Analyzer for GeneratedAnalyzer {
    fn strategy(&self) -> Strategy {
        Strategy::GeneratedCode
    }

    fn analyze(&self, object: &dyn Reflect) -> AnalyzeResult<String> {
        let target = self.unit.target();
        let found = object.type_tag();
        if found != target {
            return Err(AnalyzeError::type_mismatch(target.name(), found.name()));
        }
        self.unit.execute(object)
    }
}
