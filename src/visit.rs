//! Member enumeration and folds.
//!
//! Two flavours of traversal are offered. Value traversal walks the members of an object as `&dyn Reflect`. Type
//! traversal walks a bare type, either through the typed [`MemberTypeVisitor`] (which sees every member type as a type
//! argument) or through [`MemberType`] descriptors. Both always visit every selected index in ascending order, or in
//! mask order when an [`IndexMask`] is given.

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use crate::aggregate::{Aggregate, DynAggregate, MemberAt, MemberValues};
use crate::name::type_name_of;
use crate::reflect::Reflect;

/// A visitor instantiated once per member of an aggregate, with the member's index and the aggregate as type
/// arguments. The member type is available as `<T as MemberAt<I>>::Type`.
pub trait MemberTypeVisitor {
    fn visit<const I: usize, T: MemberAt<I>>(&mut self);
}

/// Descriptor of one member of a type, for type-only enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberType {
    pub index: usize,
    pub name: &'static str,
    /// Short rendering of the member's declared type, e.g. `Vec<Person>`.
    pub type_name: Cow<'static, str>,
}

/// A caller-chosen subset of member indices of `T`, visited in the order given.
///
/// ```compile_fail
/// #[derive(reflection::Reflect)]
/// struct Pair { a: u8, b: u8 }
///
/// // Index 2 does not exist on `Pair`.
/// const MASK: reflection::IndexMask<Pair, 2> = reflection::IndexMask::new([0, 2]);
/// ```
pub struct IndexMask<T, const K: usize> {
    indices: [usize; K],
    marker: PhantomData<fn() -> T>,
}

impl<T: Aggregate, const K: usize> IndexMask<T, K> {
    /// ## Panics
    /// - If any index is not below `T::MEMBER_COUNT`. In a `const` item this is a compile error.
    pub const fn new(indices: [usize; K]) -> Self {
        let mut i = 0;
        while i < K {
            assert!(indices[i] < T::MEMBER_COUNT, "mask index out of range");
            i += 1;
        }
        Self {
            indices,
            marker: PhantomData,
        }
    }

    pub const fn indices(&self) -> &[usize; K] {
        &self.indices
    }
}

impl<T, const K: usize> Clone for IndexMask<T, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const K: usize> Copy for IndexMask<T, K> {}

impl<T, const K: usize> fmt::Debug for IndexMask<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IndexMask").field(&self.indices).finish()
    }
}

/// Call `callback(index, value)` for every member of `object`.
pub fn enumerate_members<T, F>(object: &T, mut callback: F)
where
    T: MemberValues,
    F: FnMut(usize, &dyn Reflect),
{
    for (index, _, value) in (object as &dyn DynAggregate).members() {
        callback(index, value);
    }
}

/// Call `callback(index, value)` for the members of `object` selected by `mask`, in mask order.
pub fn enumerate_members_in<T, F, const K: usize>(object: &T, mask: IndexMask<T, K>, mut callback: F)
where
    T: MemberValues,
    F: FnMut(usize, &dyn Reflect),
{
    for index in mask.indices {
        // In range: checked by `IndexMask::new`.
        if let Some(value) = object.member(index) {
            callback(index, value);
        }
    }
}

/// Call `visitor` once per member type of `T`.
pub fn visit_member_types<T: Aggregate, V: MemberTypeVisitor>(visitor: &mut V) {
    T::visit_member_types(visitor);
}

struct CollectTypes(Vec<MemberType>);

impl MemberTypeVisitor for CollectTypes {
    fn visit<const I: usize, T: MemberAt<I>>(&mut self) {
        self.0.push(MemberType {
            index: I,
            name: <T as MemberAt<I>>::NAME,
            type_name: type_name_of::<<T as MemberAt<I>>::Type>(),
        });
    }
}

/// Descriptors of every member of `T`, in declaration order.
pub fn member_types<T: Aggregate>() -> Vec<MemberType> {
    let mut collect = CollectTypes(Vec::with_capacity(T::MEMBER_COUNT));
    T::visit_member_types(&mut collect);
    collect.0
}

/// Call `callback` with the descriptor of every member of `T`.
pub fn enumerate_member_types<T, F>(callback: F)
where
    T: Aggregate,
    F: FnMut(MemberType),
{
    member_types::<T>().into_iter().for_each(callback);
}

/// Call `callback` with the descriptors of the members of `T` selected by `mask`, in mask order.
pub fn enumerate_member_types_in<T, F, const K: usize>(mask: IndexMask<T, K>, mut callback: F)
where
    T: Aggregate,
    F: FnMut(MemberType),
{
    let all = member_types::<T>();
    for index in mask.indices {
        if let Some(member) = all.get(index) {
            callback(member.clone());
        }
    }
}

/// Call `callback(name, value)` for every member of `object`.
pub fn call_on_members<T, F>(object: &T, mut callback: F)
where
    T: MemberValues,
    F: FnMut(&'static str, &dyn Reflect),
{
    for (_, name, value) in (object as &dyn DynAggregate).members() {
        callback(name, value);
    }
}

/// Fold over the member types of `T`, starting from `init`.
///
/// ```
/// #[derive(reflection::Reflect)]
/// struct Five { a: u8, b: u8, c: u8, d: u8, e: u8 }
///
/// let sum = reflection::fold_member_types::<Five, usize, _>(0, |acc, member| acc + member.index);
/// assert_eq!(sum, 10);
/// ```
///
/// The closure must return the accumulator type:
///
/// ```compile_fail
/// #[derive(reflection::Reflect)]
/// struct One { a: u8 }
///
/// let _ = reflection::fold_member_types::<One, usize, _>(0, |_, member| member.name);
/// ```
pub fn fold_member_types<T, R, F>(init: R, mut fold: F) -> R
where
    T: Aggregate,
    F: FnMut(R, &MemberType) -> R,
{
    member_types::<T>().iter().fold(init, |acc, member| fold(acc, member))
}

/// Fold over the members of `object` as `(accumulator, name, value)`, starting from `init`.
pub fn fold_members<T, R, F>(object: &T, init: R, mut fold: F) -> R
where
    T: MemberValues,
    F: FnMut(R, &'static str, &dyn Reflect) -> R,
{
    (object as &dyn DynAggregate)
        .members()
        .fold(init, |acc, (_, name, value)| fold(acc, name, value))
}
