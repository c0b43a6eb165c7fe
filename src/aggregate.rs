//! Member counting, decomposition and per-index member metadata.
//!
//! These traits are implemented by `#[derive(Reflect)]` and are not meant to be written by hand. They are split by what
//! they ask of the member types:
//! - [`Aggregate`] and [`MemberAt`] are purely structural (counts, names, types, decomposition) and place no bounds on
//!   members, so every plain aggregate gets them;
//! - [`MemberValues`] views members as `&dyn Reflect` for enumeration, folds and rendering;
//! - [`DiffMembers`] compares two values member by member.

use crate::diff::Difference;
use crate::reflect::Reflect;
use crate::tuple::MemberTuple;
use crate::visit::MemberTypeVisitor;

/// A plain aggregate: a record whose values decompose member by member, in declaration order.
///
/// The member count is the arity of [`Aggregate::Tuple`], the fixed-arity shape the type decomposes into, and is
/// bounded by [`MAX_MEMBER_COUNT`](crate::MAX_MEMBER_COUNT). Types implementing `Drop` with non-`Copy` members cannot be
/// derived, since [`Aggregate::into_tuple`] moves members out of the value.
pub trait Aggregate: Sized {
    /// The type's identifier, as written in its definition.
    const TYPE_NAME: &'static str;
    /// Number of direct data members.
    const MEMBER_COUNT: usize;
    /// Member identifiers in declaration order. Tuple-struct members are named by position (`"0"`, `"1"`, ...).
    const MEMBER_NAMES: &'static [&'static str];

    /// Members by value.
    type Tuple: MemberTuple;
    /// Members by shared reference.
    type Refs<'a>: MemberTuple
    where
        Self: 'a;
    /// Members by mutable reference.
    type RefsMut<'a>: MemberTuple
    where
        Self: 'a;

    fn to_tuple(&self) -> Self::Refs<'_>;
    fn to_tuple_mut(&mut self) -> Self::RefsMut<'_>;
    fn into_tuple(self) -> Self::Tuple;

    /// Call `visitor` once per member with the member index and the aggregate as type arguments.
    fn visit_member_types<V: MemberTypeVisitor>(visitor: &mut V);
}

/// Typed access to the member at index `I`.
///
/// Implemented once for every index below [`Aggregate::MEMBER_COUNT`]; naming an index past the last member is a
/// compile error.
pub trait MemberAt<const I: usize>: Aggregate {
    /// The member's declared type.
    type Type;
    /// The member's identifier.
    const NAME: &'static str;

    fn get(&self) -> &Self::Type;
    fn get_mut(&mut self) -> &mut Self::Type;
}

/// The declared type of member `I` of `T`.
pub type MemberTypeOf<T, const I: usize> = <T as MemberAt<I>>::Type;

/// Member values viewed through [`Reflect`].
///
/// Members whose type does not implement `Reflect` are still visited; they show up as an opaque value rendered
/// `<opaque>`. Type parameters of a generic aggregate must implement `Reflect` for this view to exist.
pub trait MemberValues: Aggregate {
    /// Dynamic access to the member at `index`, or `None` past the last member.
    fn member(&self, index: usize) -> Option<&dyn Reflect>;
}

/// Member-wise comparison.
///
/// Members whose type is `PartialEq` (and `Reflect`) are compared with `==`. Members that are not comparable but are
/// aggregates themselves are compared member by member, and their own differences are reported. A member that is
/// neither makes `diff_members` fail to build as soon as a comparison of the aggregate is compiled. Type parameters of
/// a generic aggregate must be `Reflect + PartialEq` for this impl to exist.
pub trait DiffMembers: Aggregate {
    /// Report members whose values differ between `self` and `other` to `sink`, in ascending index order.
    fn diff_members<'a, S>(&'a self, other: &'a Self, sink: &mut S)
    where
        S: FnMut(Difference<'a>) + ?Sized;
}

/// Object-safe view of an aggregate, used for recursive traversal through `&dyn Reflect`.
pub trait DynAggregate {
    fn aggregate_name(&self) -> &'static str;
    fn member_count(&self) -> usize;
    fn member_names(&self) -> &'static [&'static str];
    fn member_at(&self, index: usize) -> Option<&dyn Reflect>;
}

impl<T: MemberValues> DynAggregate for T {
    fn aggregate_name(&self) -> &'static str {
        T::TYPE_NAME
    }

    fn member_count(&self) -> usize {
        T::MEMBER_COUNT
    }

    fn member_names(&self) -> &'static [&'static str] {
        T::MEMBER_NAMES
    }

    fn member_at(&self, index: usize) -> Option<&dyn Reflect> {
        self.member(index)
    }
}

impl<'a> dyn DynAggregate + 'a {
    /// Iterate `(index, name, value)` for every member, in declaration order.
    pub fn members(&self) -> Members<'_> {
        Members {
            aggregate: self,
            next: 0,
        }
    }
}

/// Iterator over the members of an aggregate, created by `members()` on `dyn DynAggregate`.
pub struct Members<'a> {
    aggregate: &'a dyn DynAggregate,
    next: usize,
}

impl<'a> Iterator for Members<'a> {
    type Item = (usize, &'static str, &'a dyn Reflect);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next;
        let name = *self.aggregate.member_names().get(index)?;
        let value = self.aggregate.member_at(index)?;
        self.next += 1;
        Some((index, name, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.aggregate.member_count().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Members<'_> {}

/// Number of direct data members of `T`.
pub const fn count_members<T: Aggregate>() -> usize {
    T::MEMBER_COUNT
}

/// All member identifiers of `T`, in declaration order.
pub const fn member_names<T: Aggregate>() -> &'static [&'static str] {
    T::MEMBER_NAMES
}

/// Identifier of member `I` of `T`.
pub const fn member_name<T: MemberAt<I>, const I: usize>() -> &'static str {
    <T as MemberAt<I>>::NAME
}

/// Decompose `object` into a tuple of shared references to its members.
pub fn to_tuple<T: Aggregate>(object: &T) -> T::Refs<'_> {
    object.to_tuple()
}

/// Decompose `object` into a tuple of mutable references to its members.
pub fn to_tuple_mut<T: Aggregate>(object: &mut T) -> T::RefsMut<'_> {
    object.to_tuple_mut()
}

/// Move `object` apart into a tuple of its members.
pub fn into_tuple<T: Aggregate>(object: T) -> T::Tuple {
    object.into_tuple()
}

/// Borrow member `I` of `object`.
pub fn get_member_at<const I: usize, T: MemberAt<I>>(object: &T) -> &T::Type {
    object.get()
}

/// Mutably borrow member `I` of `object`.
pub fn get_member_at_mut<const I: usize, T: MemberAt<I>>(object: &mut T) -> &mut T::Type {
    object.get_mut()
}
