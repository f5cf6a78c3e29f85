//! Analyzer strategies.

use std::fmt;
use std::str::FromStr;

/// The four interchangeable analyzer strategies.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Strategy {
    /// Property discovery on every call.
    NaiveReflection,
    /// Property discovery once; descriptor reused.
    CachedReflection,
    /// Source emitted per type, compiled in-process.
    GeneratedCode,
    /// Typed expression graph compiled into closures.
    CompiledExpression,
}

impl Strategy {
    /// All strategies, in benchmark order.
    pub const ALL: [Strategy; 4] = [
        Strategy::NaiveReflection,
        Strategy::CachedReflection,
        Strategy::GeneratedCode,
        Strategy::CompiledExpression,
    ];

    /// Descriptive name used in logs and reports.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::NaiveReflection => "naive-reflection",
            Strategy::CachedReflection => "cached-reflection",
            Strategy::GeneratedCode => "generated-code",
            Strategy::CompiledExpression => "compiled-expression",
        }
    }

    /// Short name accepted on the command line.
    pub fn short_name(self) -> &'static str {
        match self {
            Strategy::NaiveReflection => "naive",
            Strategy::CachedReflection => "cached",
            Strategy::GeneratedCode => "generated",
            Strategy::CompiledExpression => "expression",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no strategy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseStrategyError {
    input: String,
}

impl ParseStrategyError {
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown strategy `{}`", self.input)
    }
}

impl std::error::Error for ParseStrategyError {}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    /// Accepts both the short and the descriptive name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.short_name() == s || strategy.name() == s)
            .ok_or_else(|| ParseStrategyError {
                input: s.to_string(),
            })
    }
}
