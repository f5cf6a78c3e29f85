//! Diagnostic system for rich error reporting.
//!
//! Used by the analyzer source compiler (lexing, parsing, resolution) and
//! by runtime analyzer errors when they are reported to a user:
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)
//! - Context labels and notes (why it's wrong)
//! - Suggestions (how to fix)

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{has_errors, Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
