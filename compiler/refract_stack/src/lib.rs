//! Stack growth for deep recursion.
//!
//! Expression graphs built over wide types fold into a left-deep chain of
//! `Concat` nodes, one level per property. Type checking, interpretation and
//! closure compilation all walk that chain recursively, so a type with tens
//! of thousands of properties would otherwise overflow the thread stack.
//!
//! Native targets grow the stack with `stacker`; WASM calls through.

/// Grow the stack when less than this much remains (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each new stack segment (1MB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if the red zone has been reached.
///
/// Wrap the body of any function that recurses once per graph node:
///
/// ```text
/// fn eval(&self, id: ExprId) -> AnalyzeResult<Evaluated> {
///     ensure_sufficient_stack(|| match self.arena.kind(id) { .. })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
