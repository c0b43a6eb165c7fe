//! Provide shared, pure helpers for the `reflection` derive macro and runtime.
//!
//! This crate is intentionally small and dependency-free. It contains deterministic helpers that both:
//! - the derive macro uses while expanding a type definition (the member ceiling), and
//! - the runtime uses when slicing rendered signatures and resolving member pointers.
//!
//! ## Notes
//!
//! - This is a “semantic core” crate: **no IO**, no global state, and no compiler-specific types.
//! - Everything that can be a `const fn` is one, so lookups resolve during constant evaluation when the caller is in a
//!   `const` context.

pub mod paths;
pub mod slicing;

/// Maximum number of members a reflected aggregate may declare.
///
/// ## Notes
/// - The fixed-shape tuple table in the runtime crate is generated up to exactly this arity. Raising the ceiling means
///   extending that table by the same amount.
pub const MAX_MEMBER_COUNT: usize = 50;

/// Compare two strings for equality during constant evaluation.
///
/// ## Parameters
/// - `lhs`: First string.
/// - `rhs`: Second string.
///
/// ## Returns
/// - `bool`: `true` if both strings contain the same bytes.
pub const fn str_eq(lhs: &str, rhs: &str) -> bool {
    let lhs = lhs.as_bytes();
    let rhs = rhs.as_bytes();
    if lhs.len() != rhs.len() {
        return false;
    }
    let mut i = 0;
    while i < lhs.len() {
        if lhs[i] != rhs[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Find the position of `name` in a declaration-ordered name table.
///
/// ## Parameters
/// - `names`: Member (or enumerator) names in declaration order.
/// - `name`: The identifier to look up.
///
/// ## Returns
/// - `Option<usize>`: index of the first exact match, or `None` when no entry matches.
///
/// ## Notes
/// - This is a linear scan; name tables are bounded by [`MAX_MEMBER_COUNT`].
pub const fn position_of(names: &[&str], name: &str) -> Option<usize> {
    let mut i = 0;
    while i < names.len() {
        if str_eq(names[i], name) {
            return Some(i);
        }
        i += 1;
    }
    None
}
