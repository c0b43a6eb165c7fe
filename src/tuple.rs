//! Fixed-arity tuple shapes used to decompose aggregates.
//!
//! Every reflected aggregate decomposes into a tuple with one element per member (by value, by shared reference, or by
//! mutable reference). [`MemberTuple`] is implemented for exactly one tuple shape per supported arity, from `()` up to
//! [`MAX_MEMBER_COUNT`](crate::MAX_MEMBER_COUNT) elements, so an aggregate whose member count exceeds the ceiling has
//! no shape to decompose into and fails to compile.

/// A tuple shape produced by decomposing an aggregate.
pub trait MemberTuple {
    /// Number of elements in the tuple.
    const ARITY: usize;
}

impl MemberTuple for () {
    const ARITY: usize = 0;
}

// One impl per arity: peel the first type parameter off and recurse on the rest.
macro_rules! member_tuples {
    ($head:ident $(, $tail:ident)*) => {
        impl<$head $(, $tail)*> MemberTuple for ($head, $($tail,)*) {
            const ARITY: usize = 1 + <($($tail,)*) as MemberTuple>::ARITY;
        }

        member_tuples!($($tail),*);
    };
    () => {};
}

member_tuples!(
    T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, T17, T18, T19, T20, T21, T22, T23, T24,
    T25, T26, T27, T28, T29, T30, T31, T32, T33, T34, T35, T36, T37, T38, T39, T40, T41, T42, T43, T44, T45, T46, T47,
    T48, T49
);

const _: () = assert!(
    <(
        u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
        u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
    ) as MemberTuple>::ARITY
        == reflection_core::MAX_MEMBER_COUNT
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_counts_elements() {
        assert_eq!(<() as MemberTuple>::ARITY, 0);
        assert_eq!(<(u8,) as MemberTuple>::ARITY, 1);
        assert_eq!(<(&str, String, u32) as MemberTuple>::ARITY, 3);
        assert_eq!(<(&mut u8, &mut [u8; 4]) as MemberTuple>::ARITY, 2);
    }
}
