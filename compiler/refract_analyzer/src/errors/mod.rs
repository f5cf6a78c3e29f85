//! Analyzer error taxonomy.

use refract_diagnostic::{Diagnostic, ErrorCode};

/// Result alias used by every analyzer and builder.
pub type AnalyzeResult<T> = Result<T, AnalyzeError>;

/// Errors raised while building or running an analyzer.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AnalyzeError {
    /// Generated analyzer source did not compile.
    #[error(
        "failed to compile generated analyzer for `{type_name}` (errors: {})",
        .diagnostics.len()
    )]
    CodeGeneration {
        type_name: String,
        diagnostics: Vec<Diagnostic>,
    },

    /// The object is not an instance of the type the analyzer was built for.
    #[error("expected an instance of `{expected}`, found `{found}`")]
    TypeMismatch { expected: String, found: String },

    /// A property read produced a null value.
    #[error("property `{property}` of `{type_name}` is null")]
    NullValue { type_name: String, property: String },

    /// The type has no properties to fold into an expression.
    #[error("type `{type_name}` has no properties to concatenate")]
    EmptyType { type_name: String },

    /// The analyzer was used before it was given a descriptor.
    #[error("analyzer used before initialization")]
    Uninitialized,

    /// An expression node was constructed with operands of the wrong kind.
    #[error("invalid expression: {message}")]
    InvalidExpression { message: String },
}

impl AnalyzeError {
    #[cold]
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        AnalyzeError::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    #[cold]
    pub fn null_value(type_name: &str, property: &str) -> Self {
        AnalyzeError::NullValue {
            type_name: type_name.to_string(),
            property: property.to_string(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AnalyzeError::CodeGeneration { .. } => ErrorCode::E3005,
            AnalyzeError::TypeMismatch { .. } => ErrorCode::E3001,
            AnalyzeError::NullValue { .. } => ErrorCode::E3002,
            AnalyzeError::EmptyType { .. } => ErrorCode::E3003,
            AnalyzeError::Uninitialized => ErrorCode::E3004,
            AnalyzeError::InvalidExpression { .. } => ErrorCode::E3006,
        }
    }

    /// Convert into a diagnostic for reporting.
    ///
    /// Compile diagnostics carried by `CodeGeneration` become notes; callers
    /// that want them rendered in full should emit them directly.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            AnalyzeError::CodeGeneration { diagnostics, .. } => diagnostics
                .iter()
                .fold(diag, |diag, inner| {
                    diag.with_note(format!("{}: {}", inner.code, inner.message))
                }),
            AnalyzeError::Uninitialized => {
                diag.with_suggestion("call `initialize` with a type descriptor first")
            }
            AnalyzeError::NullValue { property, .. } => {
                diag.with_note(format!("`{property}` has no string form"))
            }
            AnalyzeError::TypeMismatch { .. }
            | AnalyzeError::EmptyType { .. }
            | AnalyzeError::InvalidExpression { .. } => diag,
        }
    }
}

#[cfg(test)]
mod tests;
