//! Stack growth for deep recursion.
//!
//! The parser recurses once per nesting level of the source and the
//! evaluator recurses once per AST level plus once per Monkey function call.
//! Both wrap their recursive entry points in [`ensure_sufficient_stack`] so a
//! deeply nested program grows the native stack instead of overflowing it.
//! Rendering an expression goes through the same guard; dropping one is
//! iterative and needs none.
//!
//! - **Native targets**: `stacker` allocates a new segment when the red zone is hit.
//! - **WASM targets**: passthrough.

/// Grow the stack when less than this remains (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if the remaining space is below the red zone.
///
/// ```text
/// fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
///     ensure_sufficient_stack(|| self.parse_expression_inner(precedence))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
