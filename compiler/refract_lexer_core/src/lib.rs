//! Low-level scanner for the analyzer source language.
//!
//! Produces `(RawTag, len)` pairs over a sentinel-terminated buffer. Keyword
//! resolution, escape validation and spans are left to the cooking layer in
//! `refract_codegen`.
//!
//! # Example
//!
//! ```
//! use refract_lexer_core::{RawScanner, RawTag, SourceBuffer};
//!
//! let buf = SourceBuffer::new("result += \"x\";");
//! let tags: Vec<_> = RawScanner::new(buf.cursor())
//!     .map(|tok| tok.tag)
//!     .filter(|tag| !tag.is_trivia())
//!     .collect();
//! assert_eq!(
//!     tags,
//!     [RawTag::Ident, RawTag::PlusEqual, RawTag::String, RawTag::Semicolon]
//! );
//! ```

mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::RawScanner;
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
