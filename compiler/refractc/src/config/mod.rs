//! Command-line configuration.
//!
//! Parsed by hand, one `--flag` or `--flag=value` per argument.

use std::fmt;
use std::str::FromStr;

use refract_analyzer::Strategy;

/// Iterations per phase when `--iterations` is not given.
pub const DEFAULT_ITERATIONS: u64 = 1_000_000;

pub const USAGE: &str = "\
Usage: refract [options]

Times each analyzer strategy and prints one line per phase with the elapsed
milliseconds, in this order: direct, naive, cached, generated, expression.

Options:
  --iterations=<N>    Iterations per phase (default: 1000000)
  --only=<list>       Comma-separated phases to run
                      (direct, naive, cached, generated, expression)
  --verify            Check every analyzer against direct access first
  --show-source       Print the generated analyzer source to stderr
  -h, --help          Show this help";

/// One timed section of a run, in output order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Direct field access, the baseline.
    Direct,
    Naive,
    Cached,
    Generated,
    Expression,
}

impl Phase {
    pub const ALL: [Phase; 5] = [
        Phase::Direct,
        Phase::Naive,
        Phase::Cached,
        Phase::Generated,
        Phase::Expression,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Phase::Direct => "direct",
            Phase::Naive => "naive",
            Phase::Cached => "cached",
            Phase::Generated => "generated",
            Phase::Expression => "expression",
        }
    }

    /// The analyzer strategy this phase times; `None` for the baseline.
    pub fn strategy(self) -> Option<Strategy> {
        match self {
            Phase::Direct => None,
            Phase::Naive => Some(Strategy::NaiveReflection),
            Phase::Cached => Some(Strategy::CachedReflection),
            Phase::Generated => Some(Strategy::GeneratedCode),
            Phase::Expression => Some(Strategy::CompiledExpression),
        }
    }
}

impl From<Strategy> for Phase {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::NaiveReflection => Phase::Naive,
            Strategy::CachedReflection => Phase::Cached,
            Strategy::GeneratedCode => Phase::Generated,
            Strategy::CompiledExpression => Phase::Expression,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Phase {
    type Err = ConfigError;

    /// Accepts `direct` and every strategy name, short or long.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "direct" {
            return Ok(Phase::Direct);
        }
        s.parse::<Strategy>()
            .map(Phase::from)
            .map_err(|_| ConfigError::UnknownPhase(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    UnknownFlag(String),
    /// `--iterations` value that is not a positive integer.
    InvalidIterations(String),
    UnknownPhase(String),
    /// `--only=` with nothing selected.
    NoPhases,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownFlag(flag) => write!(f, "unknown option `{flag}`"),
            ConfigError::InvalidIterations(value) => write!(
                f,
                "invalid iteration count `{value}`: expected a positive integer"
            ),
            ConfigError::UnknownPhase(name) => write!(
                f,
                "unknown phase `{name}`: expected direct, naive, cached, generated or expression"
            ),
            ConfigError::NoPhases => f.write_str("`--only` selects no phases"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// What the command line asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run(BenchConfig),
    Help,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchConfig {
    pub iterations: u64,
    /// Phases to run, always in [`Phase::ALL`] order.
    pub phases: Vec<Phase>,
    pub verify: bool,
    pub show_source: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            iterations: DEFAULT_ITERATIONS,
            phases: Phase::ALL.to_vec(),
            verify: false,
            show_source: false,
        }
    }
}

impl BenchConfig {
    /// Parse arguments, not including the program name.
    pub fn from_args<I, S>(args: I) -> Result<Command, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = BenchConfig::default();

        for arg in args {
            let arg = arg.as_ref();
            if arg == "-h" || arg == "--help" {
                return Ok(Command::Help);
            } else if let Some(value) = arg.strip_prefix("--iterations=") {
                config.iterations = parse_iterations(value)?;
            } else if let Some(list) = arg.strip_prefix("--only=") {
                config.phases = parse_phases(list)?;
            } else if arg == "--verify" {
                config.verify = true;
            } else if arg == "--show-source" {
                config.show_source = true;
            } else {
                return Err(ConfigError::UnknownFlag(arg.to_string()));
            }
        }

        Ok(Command::Run(config))
    }

    pub fn runs(&self, phase: Phase) -> bool {
        self.phases.contains(&phase)
    }
}

fn parse_iterations(value: &str) -> Result<u64, ConfigError> {
    match value.replace('_', "").parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidIterations(value.to_string())),
    }
}

fn parse_phases(list: &str) -> Result<Vec<Phase>, ConfigError> {
    let mut selected = Vec::new();
    for name in list.split(',').map(str::trim).filter(|name| !name.is_empty()) {
        selected.push(name.parse::<Phase>()?);
    }
    if selected.is_empty() {
        return Err(ConfigError::NoPhases);
    }
    Ok(Phase::ALL
        .into_iter()
        .filter(|phase| selected.contains(phase))
        .collect())
}
