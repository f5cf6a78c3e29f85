//! Phase runner.
//!
//! Each phase builds its analyzer outside the timed region, optionally
//! checks it against direct access, then times `iterations` rounds of
//! mutate-then-analyze on [`UnknownType`]. A failing phase is recorded and
//! the remaining phases still run.

use std::fmt;
use std::hint::black_box;
use std::io::Write;
use std::time::{Duration, Instant};

use refract_analyzer::{AnalyzeError, Analyzer, CachedReflectionAnalyzer, NaiveReflectionAnalyzer};
use refract_codegen::{emit_source, CodeGenerator, GeneratedSource};
use refract_diagnostic::emitter::TerminalEmitter;
use refract_diagnostic::{Diagnostic, ErrorCode};
use refract_expr::build_expression_analyzer;
use refract_ir::Described;

use crate::config::{BenchConfig, Phase};
use crate::sample::UnknownType;

/// Why a phase produced no measurement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PhaseError {
    /// Building the analyzer failed.
    Build(AnalyzeError),
    /// An `analyze` call failed.
    Analyze(AnalyzeError),
    /// `--verify` found output that differs from direct access.
    Mismatch { expected: String, found: String },
}

impl PhaseError {
    pub fn analyze_error(&self) -> Option<&AnalyzeError> {
        match self {
            PhaseError::Build(err) | PhaseError::Analyze(err) => Some(err),
            PhaseError::Mismatch { .. } => None,
        }
    }

    pub fn to_diagnostic(&self, phase: Phase) -> Diagnostic {
        match self {
            PhaseError::Build(err) | PhaseError::Analyze(err) => err
                .to_diagnostic()
                .with_note(format!("in phase `{phase}`")),
            PhaseError::Mismatch { expected, found } => Diagnostic::error(ErrorCode::E3007)
                .with_message(self.to_string())
                .with_note(format!("in phase `{phase}`"))
                .with_note(format!("expected `{expected}`"))
                .with_note(format!("found    `{found}`")),
        }
    }
}

impl fmt::Display for PhaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhaseError::Build(err) => write!(f, "failed to build analyzer: {err}"),
            PhaseError::Analyze(err) => fmt::Display::fmt(err, f),
            PhaseError::Mismatch { .. } => {
                f.write_str("analyzer output differs from direct access")
            }
        }
    }
}

impl std::error::Error for PhaseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.analyze_error()
            .map(|err| err as &(dyn std::error::Error + 'static))
    }
}

impl From<AnalyzeError> for PhaseError {
    fn from(err: AnalyzeError) -> Self {
        PhaseError::Analyze(err)
    }
}

/// Result of one phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhaseOutcome {
    pub phase: Phase,
    pub result: Result<Duration, PhaseError>,
}

impl PhaseOutcome {
    /// Whole elapsed milliseconds, if the phase completed.
    pub fn millis(&self) -> Option<u128> {
        self.result.as_ref().ok().map(Duration::as_millis)
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Process exit code for a finished run: 0 when every phase completed,
/// 1 otherwise.
pub fn exit_code(outcomes: &[PhaseOutcome]) -> i32 {
    if outcomes.iter().all(PhaseOutcome::is_ok) {
        0
    } else {
        1
    }
}

/// Runs the configured phases against [`UnknownType`].
pub struct Bench<'c> {
    config: &'c BenchConfig,
    generator: CodeGenerator,
    source: GeneratedSource,
}

impl<'c> Bench<'c> {
    pub fn new(config: &'c BenchConfig) -> Self {
        Bench {
            config,
            generator: CodeGenerator::new(),
            source: emit_source(&UnknownType::descriptor()),
        }
    }

    /// Source the generated-code phase compiles.
    pub fn generated_source(&self) -> &GeneratedSource {
        &self.source
    }

    /// Run every configured phase, in order.
    pub fn run(&self) -> Vec<PhaseOutcome> {
        self.config
            .phases
            .iter()
            .map(|&phase| self.run_phase(phase))
            .collect()
    }

    pub fn run_phase(&self, phase: Phase) -> PhaseOutcome {
        let span = tracing::debug_span!("phase", phase = phase.name());
        let _guard = span.enter();

        let result = self.time_phase(phase);
        match &result {
            Ok(elapsed) => tracing::debug!(millis = elapsed.as_millis(), "phase done"),
            Err(err) => tracing::debug!(%err, "phase failed"),
        }
        PhaseOutcome { phase, result }
    }

    fn build_analyzer(&self, phase: Phase) -> Result<Option<Box<dyn Analyzer>>, AnalyzeError> {
        let analyzer: Box<dyn Analyzer> = match phase {
            Phase::Direct => return Ok(None),
            Phase::Naive => Box::new(NaiveReflectionAnalyzer::new()),
            Phase::Cached => {
                let analyzer = CachedReflectionAnalyzer::new();
                analyzer.initialize(UnknownType::descriptor());
                Box::new(analyzer)
            }
            Phase::Generated => Box::new(self.generator.build_for::<UnknownType>()?),
            Phase::Expression => Box::new(build_expression_analyzer(&UnknownType::descriptor())?),
        };
        Ok(Some(analyzer))
    }

    fn time_phase(&self, phase: Phase) -> Result<Duration, PhaseError> {
        let iterations = self.config.iterations;
        let mut object = UnknownType::sample();

        let Some(analyzer) = self.build_analyzer(phase).map_err(PhaseError::Build)? else {
            let start = Instant::now();
            for iteration in 0..iterations {
                object.churn(iteration);
                black_box(black_box(&object).direct());
            }
            return Ok(start.elapsed());
        };

        if self.config.verify {
            verify(analyzer.as_ref(), &object)?;
        }

        let start = Instant::now();
        for iteration in 0..iterations {
            object.churn(iteration);
            black_box(analyzer.analyze(black_box(&object))?);
        }
        Ok(start.elapsed())
    }

    /// Write a diagnostic for every failed phase.
    ///
    /// Compile diagnostics of the generated-code phase follow their phase's
    /// diagnostic and are rendered against the generated source.
    pub fn report<W: Write>(&self, outcomes: &[PhaseOutcome], writer: W, colors: bool) -> W {
        let mut emitter = TerminalEmitter::new(writer, colors).with_source(self.source.text());
        let mut errors = 0;
        for outcome in outcomes {
            let Err(err) = &outcome.result else {
                continue;
            };
            emitter.emit(&err.to_diagnostic(outcome.phase));
            errors += 1;

            if let Some(AnalyzeError::CodeGeneration { diagnostics, .. }) = err.analyze_error() {
                for diagnostic in diagnostics {
                    emitter.emit(diagnostic);
                }
                errors += diagnostics.len();
            }
        }
        if errors > 0 {
            emitter.emit_summary(errors, 0);
        }
        emitter.flush();
        emitter.into_inner()
    }
}

/// Check `analyzer` against direct access on `object`.
pub fn verify(analyzer: &dyn Analyzer, object: &UnknownType) -> Result<(), PhaseError> {
    let expected = object.direct();
    let found = analyzer.analyze(object)?;
    if found == expected {
        Ok(())
    } else {
        Err(PhaseError::Mismatch { expected, found })
    }
}
