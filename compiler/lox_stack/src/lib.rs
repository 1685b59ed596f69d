//! Stack growth for recursive tree walks.
//!
//! Printing and evaluation recurse once per nesting level of the syntax
//! tree. Wrapping each recursive step in [`ensure_sufficient_stack`] lets a
//! deeply nested tree run on a grown stack instead of overflowing the
//! thread's native one.
//!
//! Growth is skipped on WASM, where the runtime owns the stack.

/// Grow the stack when less than this much remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if the remaining space is below the red zone.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    let _ = (RED_ZONE, SEGMENT_SIZE);
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn depth(n: u64) -> u64 {
        if n == 0 {
            0
        } else {
            ensure_sufficient_stack(|| 1 + depth(n - 1))
        }
    }

    #[test]
    fn passes_through_result() {
        assert_eq!(ensure_sufficient_stack(|| 6 * 7), 42);
    }

    #[test]
    fn deep_recursion_completes() {
        assert_eq!(depth(200_000), 200_000);
    }
}
