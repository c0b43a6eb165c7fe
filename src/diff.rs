//! Member-wise comparison of two values of the same aggregate type.
//!
//! Each member is compared in one of two ways, chosen per member when the aggregate is derived:
//! - members whose type is `PartialEq` are compared with `==`;
//! - members that are not comparable but are aggregates themselves are walked recursively.
//!
//! A member that is neither does not stop the aggregate from being derived or reflected; the comparison itself fails to
//! build once `collect_differences` (or a sibling) is instantiated for that aggregate.

use crate::aggregate::DiffMembers;
use crate::reflect::Reflect;

/// One differing member.
#[derive(Debug, Clone, Copy)]
pub struct Difference<'a> {
    /// Position of the member inside the aggregate that declares it.
    pub index: usize,
    /// The member's identifier.
    pub name: &'static str,
    pub lhs: &'a dyn Reflect,
    pub rhs: &'a dyn Reflect,
}

/// Report every member whose value differs between `lhs` and `rhs` as `(name, lhs value, rhs value)`, in ascending
/// member order. Equal values produce no calls.
#[tracing::instrument(level = "trace", skip_all, fields(ty = T::TYPE_NAME))]
pub fn collect_differences<'a, T, F>(lhs: &'a T, rhs: &'a T, mut callback: F)
where
    T: DiffMembers,
    F: FnMut(&'static str, &'a dyn Reflect, &'a dyn Reflect),
{
    lhs.diff_members(rhs, &mut |difference| {
        tracing::trace!(member = difference.name, "member differs");
        callback(difference.name, difference.lhs, difference.rhs);
    });
}

/// Like [`collect_differences`], reporting the member index instead of its name.
///
/// For members reached through a nested aggregate, the index is the member's position inside that nested aggregate.
#[tracing::instrument(level = "trace", skip_all, fields(ty = T::TYPE_NAME))]
pub fn collect_differences_by_index<'a, T, F>(lhs: &'a T, rhs: &'a T, mut callback: F)
where
    T: DiffMembers,
    F: FnMut(usize, &'a dyn Reflect, &'a dyn Reflect),
{
    lhs.diff_members(rhs, &mut |difference| {
        tracing::trace!(index = difference.index, "member differs");
        callback(difference.index, difference.lhs, difference.rhs);
    });
}

/// All differing members of `lhs` and `rhs`, in ascending member order.
pub fn differences<'a, T: DiffMembers>(lhs: &'a T, rhs: &'a T) -> Vec<Difference<'a>> {
    let mut found = Vec::new();
    lhs.diff_members(rhs, &mut |difference| found.push(difference));
    found
}

/// Per-member comparison strategy selection, used by derived `diff_members`.
///
/// `(&&&DiffProbe(&member)).diff_tag()` resolves to [`ViaPartialEq`](probe::ViaPartialEq) when the member type is
/// `PartialEq + Reflect`. Otherwise auto-deref falls through to [`ViaMembers`](probe::ViaMembers), which requires a
/// [`DiffMembers`] aggregate, and finally to [`Unsupported`](probe::Unsupported), whose `diff` fails constant
/// evaluation when it is instantiated.
pub mod probe {
    use std::marker::PhantomData;

    use super::Difference;
    use crate::aggregate::DiffMembers;
    use crate::reflect::Reflect;

    pub struct DiffProbe<'p, T: ?Sized>(pub &'p T);

    /// Compare with `==`.
    pub struct LeafTag;

    /// Recurse into the members.
    pub struct NestedTag;

    /// Neither comparable nor an aggregate.
    pub struct UnsupportedTag;

    pub trait ViaPartialEq {
        fn diff_tag(&self) -> LeafTag;
    }

    impl<T: PartialEq + Reflect> ViaPartialEq for &&DiffProbe<'_, T> {
        fn diff_tag(&self) -> LeafTag {
            LeafTag
        }
    }

    pub trait ViaMembers {
        fn diff_tag(&self) -> NestedTag;
    }

    impl<T: DiffMembers> ViaMembers for &DiffProbe<'_, T> {
        fn diff_tag(&self) -> NestedTag {
            NestedTag
        }
    }

    pub trait Unsupported {
        fn diff_tag(&self) -> UnsupportedTag;
    }

    impl<T: ?Sized> Unsupported for DiffProbe<'_, T> {
        fn diff_tag(&self) -> UnsupportedTag {
            UnsupportedTag
        }
    }

    impl LeafTag {
        pub fn diff<'a, T, S>(self, index: usize, name: &'static str, lhs: &'a T, rhs: &'a T, sink: &mut S)
        where
            T: PartialEq + Reflect,
            S: FnMut(Difference<'a>) + ?Sized,
        {
            if lhs != rhs {
                sink(Difference { index, name, lhs, rhs });
            }
        }
    }

    impl NestedTag {
        pub fn diff<'a, T, S>(self, _index: usize, _name: &'static str, lhs: &'a T, rhs: &'a T, sink: &mut S)
        where
            T: DiffMembers,
            S: FnMut(Difference<'a>) + ?Sized,
        {
            lhs.diff_members(rhs, sink);
        }
    }

    struct Uncomparable<T: ?Sized>(PhantomData<T>);

    impl<T: ?Sized> Uncomparable<T> {
        const MEMBER: () = panic!("a diffed member must be `PartialEq + Reflect` or a reflected aggregate");
    }

    impl UnsupportedTag {
        pub fn diff<'a, T, S>(self, _index: usize, _name: &'static str, _lhs: &'a T, _rhs: &'a T, _sink: &mut S)
        where
            T: ?Sized,
            S: FnMut(Difference<'a>) + ?Sized,
        {
            #[allow(clippy::let_unit_value)]
            let () = Uncomparable::<T>::MEMBER;
        }
    }
}
