//! Last-element broadcast for per-agent parameter lists.
//!
//! Every behavior that takes per-agent parameters (distance domains, counts,
//! multipliers, seeds) resolves index `i` beyond the end of the list to the
//! *last* element — a single-element list broadcasts to every agent.  This is
//! a deliberate, load-bearing API convention: do not replace it with cyclic
//! indexing or length validation.

/// Clamp `i` into `0..len`.  `len` must be non-zero.
#[inline]
pub fn clamp_index(len: usize, i: usize) -> usize {
    debug_assert!(len > 0, "clamp_index on an empty list");
    i.min(len - 1)
}

/// Look up `list[i]`, reusing the last element when `i` runs past the end.
///
/// Panics on an empty list; behaviors short-circuit to empty output before
/// indexing, so an empty required list never reaches this point.
#[inline]
pub fn clamped<T: Copy>(list: &[T], i: usize) -> T {
    list[clamp_index(list.len(), i)]
}
