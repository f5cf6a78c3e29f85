//! Benchmark driver for the refract analyzer strategies.
//!
//! The `refract` binary times direct field access against the four
//! [`Strategy`](refract_analyzer::Strategy) implementations on
//! [`UnknownType`](sample::UnknownType) and prints one elapsed-milliseconds
//! line per phase.
//!
//! - [`config`]: command-line parsing
//! - [`sample`]: the benchmarked object
//! - [`bench`]: phase runner and failure reporting

pub mod bench;
pub mod config;
pub mod sample;
mod tracing_setup;

pub use tracing_setup::init_tracing;
