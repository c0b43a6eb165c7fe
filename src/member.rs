//! Member pointers: a typed handle on one member of an aggregate.
//!
//! Rust has no `&Class::member` syntax, so [`member!`](crate::member!) builds a [`MemberPtr`] from an aggregate type and
//! a member identifier. The pointer carries the identifier as written plus accessor fns; its position inside the
//! declaring aggregate is recovered by scanning the aggregate's member names for that identifier.

use std::fmt;

use reflection_core::position_of;

use crate::aggregate::Aggregate;
use crate::errors::ReflectionError;

/// A pointer to member `M` of class `C`.
pub struct MemberPtr<C: ?Sized, M: ?Sized> {
    name: &'static str,
    get: fn(&C) -> &M,
    get_mut: fn(&mut C) -> &mut M,
}

impl<C: ?Sized, M: ?Sized> Clone for MemberPtr<C, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized, M: ?Sized> Copy for MemberPtr<C, M> {}

impl<C: ?Sized, M: ?Sized> fmt::Debug for MemberPtr<C, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberPtr")
            .field("class", &std::any::type_name::<C>())
            .field("name", &self.name)
            .finish()
    }
}

impl<C: ?Sized, M: ?Sized> MemberPtr<C, M> {
    /// Build a member pointer from an identifier and accessors. Prefer [`member!`](crate::member!), which derives all
    /// three from the member itself.
    pub const fn new(name: &'static str, get: fn(&C) -> &M, get_mut: fn(&mut C) -> &mut M) -> Self {
        Self { name, get, get_mut }
    }

    /// The member identifier this pointer was built from.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Borrow the member of `object`.
    pub fn get<'o>(&self, object: &'o C) -> &'o M {
        (self.get)(object)
    }

    /// Mutably borrow the member of `object`.
    pub fn get_mut<'o>(&self, object: &'o mut C) -> &'o mut M {
        (self.get_mut)(object)
    }
}

impl<C: Aggregate, M: ?Sized> MemberPtr<C, M> {
    /// Position of the member inside `C`, found by matching the pointer's identifier against `C`'s member names.
    pub const fn index(&self) -> Option<usize> {
        position_of(C::MEMBER_NAMES, self.name)
    }
}

/// Type-level view of a member pointer.
pub trait MemberPointer {
    /// The aggregate declaring the member.
    type Class: ?Sized;
    /// The member's type.
    type Member: ?Sized;

    fn member_name(&self) -> &'static str;
}

impl<C: ?Sized, M: ?Sized> MemberPointer for MemberPtr<C, M> {
    type Class = C;
    type Member = M;

    fn member_name(&self) -> &'static str {
        self.name
    }
}

/// The aggregate declaring the member `P` points to.
pub type MemberClassOf<P> = <P as MemberPointer>::Class;

/// The type of the member `P` points to.
pub type MemberOf<P> = <P as MemberPointer>::Member;

/// Identifier of the member `ptr` points to.
pub fn name_of<P: MemberPointer>(ptr: &P) -> &'static str {
    ptr.member_name()
}

/// Position of the member `ptr` points to inside its declaring aggregate.
///
/// ## Errors
/// - [`ReflectionError::MemberNotFound`] when the pointer's identifier is not one of `C`'s member names (only possible
///   for pointers built by hand with [`MemberPtr::new`]).
pub fn member_index_of<C: Aggregate, M: ?Sized>(ptr: &MemberPtr<C, M>) -> Result<usize, ReflectionError> {
    ptr.index().ok_or(ReflectionError::MemberNotFound {
        class: C::TYPE_NAME,
        member: ptr.name,
    })
}

/// Build a [`MemberPtr`] to a member of an aggregate: `member!(Person, age)`, or `member!(Point, 0)` for tuple structs.
///
/// Usable in `const` items.
#[macro_export]
macro_rules! member {
    ($class:ty, $member:tt) => {
        $crate::MemberPtr::<$class, _>::new(
            ::core::stringify!($member),
            |object| &object.$member,
            |object| &mut object.$member,
        )
    };
}

/// Position of a member inside its aggregate, evaluated at compile time: `member_index!(Person, age)`.
#[macro_export]
macro_rules! member_index {
    ($class:ty, $member:tt) => {
        const {
            match $crate::member!($class, $member).index() {
                ::core::option::Option::Some(index) => index,
                ::core::option::Option::None => ::core::panic!("member is not declared by its aggregate"),
            }
        }
    };
}
