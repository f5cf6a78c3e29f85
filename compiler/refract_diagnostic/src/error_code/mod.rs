//! Error codes for all diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first
//! digit indicating the phase that reported it.

use std::fmt;

/// Error codes for all diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors (analyzer source)
/// - E1xxx: Parser errors (analyzer source)
/// - E2xxx: Resolution errors (types, properties, locals)
/// - E3xxx: Analyzer runtime errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Invalid character in source
    E0002,
    /// Invalid escape sequence
    E0003,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected identifier
    E1002,
    /// Unexpected end of input
    E1003,

    // Resolution Errors (E2xxx)
    /// Unknown type
    E2001,
    /// Unknown property
    E2002,
    /// Unknown variable
    E2003,
    /// Duplicate local
    E2004,
    /// Missing `return`
    E2005,
    /// Assignment to the input parameter
    E2006,

    // Analyzer Errors (E3xxx)
    /// Object is not an instance of the analyzed type
    E3001,
    /// Null property value cannot be stringified
    E3002,
    /// Type has no properties to concatenate
    E3003,
    /// Analyzer used before initialization
    E3004,
    /// Generated analyzer failed to compile
    E3005,
    /// Malformed expression graph
    E3006,
    /// Analyzer output differs from direct access
    E3007,
}

impl ErrorCode {
    /// All codes, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        ErrorCode::E2005,
        ErrorCode::E2006,
        ErrorCode::E3001,
        ErrorCode::E3002,
        ErrorCode::E3003,
        ErrorCode::E3004,
        ErrorCode::E3005,
        ErrorCode::E3006,
        ErrorCode::E3007,
    ];

    /// Get the string representation (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
            ErrorCode::E3004 => "E3004",
            ErrorCode::E3005 => "E3005",
            ErrorCode::E3006 => "E3006",
            ErrorCode::E3007 => "E3007",
        }
    }

    /// One-line description, for `--explain`-style listings.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "invalid character in source",
            ErrorCode::E0003 => "invalid escape sequence",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected identifier",
            ErrorCode::E1003 => "unexpected end of input",
            ErrorCode::E2001 => "unknown type",
            ErrorCode::E2002 => "unknown property",
            ErrorCode::E2003 => "unknown variable",
            ErrorCode::E2004 => "duplicate local",
            ErrorCode::E2005 => "analyzer body does not return",
            ErrorCode::E2006 => "cannot assign to the input parameter",
            ErrorCode::E3001 => "object is not an instance of the analyzed type",
            ErrorCode::E3002 => "null property value",
            ErrorCode::E3003 => "type has no properties",
            ErrorCode::E3004 => "analyzer used before initialization",
            ErrorCode::E3005 => "generated analyzer failed to compile",
            ErrorCode::E3006 => "malformed expression graph",
            ErrorCode::E3007 => "analyzer output differs from direct access",
        }
    }

    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    pub fn is_resolve_error(&self) -> bool {
        self.as_str().starts_with("E2")
    }

    /// Errors raised while analyzing an object rather than compiling source.
    pub fn is_analyzer_error(&self) -> bool {
        self.as_str().starts_with("E3")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;
