//! Stack growth for recursive descent and tree walking.
//!
//! Both the parser (nested expressions and blocks) and the interpreter
//! (user-level recursion such as `fact(n - 1)`) recurse on the host stack.
//! Wrapping each recursive step in [`ensure_sufficient_stack`] lets that
//! recursion go as deep as memory allows instead of overflowing the main
//! thread's fixed-size stack.
//!
//! On `wasm32` the wrapper is a plain call.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
