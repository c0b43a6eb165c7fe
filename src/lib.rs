#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
//! Compile-time structural reflection for plain aggregates.
//!
//! `#[derive(Reflect)]` on a struct records its member count, member names and member types. On a fieldless enum it
//! records its constants' names. Everything structural is an associated constant or type, so it resolves at compile
//! time. The runtime layer built on top enumerates, folds, compares and renders members.
//!
//! ```
//! use reflection::{Reflect, count_members, member_name, get_member_at};
//!
//! #[derive(Reflect)]
//! struct Person {
//!     name: &'static str,
//!     email: String,
//!     age: u32,
//! }
//!
//! const COUNT: usize = count_members::<Person>();
//! assert_eq!(COUNT, 3);
//! assert_eq!(member_name::<Person, 1>(), "email");
//!
//! let person = Person { name: "John Doe", email: "john@doe.com".into(), age: 42 };
//! assert_eq!(*get_member_at::<2, _>(&person), 42);
//! assert_eq!(reflection::inspect(&person), r#"name="John Doe" email="john@doe.com" age=42"#);
//! ```
//!
//! ## Compile-time errors
//!
//! Naming a member index past the last member:
//!
//! ```compile_fail
//! #[derive(reflection::Reflect)]
//! struct Pair { a: u8, b: u8 }
//!
//! let _ = reflection::member_name::<Pair, 2>();
//! ```
//!
//! Pointing at a member the aggregate does not declare:
//!
//! ```compile_fail
//! #[derive(reflection::Reflect)]
//! struct Pair { a: u8, b: u8 }
//!
//! let _ = reflection::member_index!(Pair, c);
//! ```
//!
//! Unions and enums carrying data have no reflected shape:
//!
//! ```compile_fail
//! #[derive(reflection::Reflect)]
//! enum Message { Quit, Write(String) }
//! ```
//!
//! Members only need to be reflectable for the operations that look at their values. Counting, naming and
//! decomposition work for any member type, and a type parameter that is not `PartialEq` only rules out diffing:
//!
//! ```compile_fail
//! #[derive(reflection::Reflect)]
//! struct Tagged<T> { value: T }
//!
//! #[derive(reflection::Reflect, Clone, Copy)]
//! enum Mode { Fast, Slow }
//!
//! assert_eq!(reflection::count_members::<Tagged<Mode>>(), 1);
//! let value = Tagged { value: Mode::Fast };
//! let _ = reflection::differences(&value, &value);
//! ```
//!
//! ## Logging
//!
//! The crate emits `tracing` events (signature calibration at `debug`, renderer fallbacks at `warn`, differences at
//! `trace`) and never installs a subscriber.

// Derive output names `::reflection::...`, including when expanded inside this crate's own tests.
extern crate self as reflection;

pub mod aggregate;
pub mod diff;
pub mod enums;
pub mod errors;
pub mod inspect;
pub mod member;
pub mod name;
pub mod reflect;
pub mod tuple;
pub mod visit;

pub use reflection_core::MAX_MEMBER_COUNT;
pub use reflection_derive::Reflect;

pub use aggregate::{
    Aggregate, DiffMembers, DynAggregate, MemberAt, MemberTypeOf, MemberValues, Members, count_members, get_member_at, get_member_at_mut,
    into_tuple, member_name, member_names, to_tuple, to_tuple_mut,
};
pub use diff::{Difference, collect_differences, collect_differences_by_index, differences};
pub use enums::{EnumReflect, enum_name, enum_variant_names};
pub use errors::ReflectionError;
pub use inspect::{inspect, inspect_all};
pub use member::{MemberClassOf, MemberOf, MemberPointer, MemberPtr, member_index_of, name_of};
pub use name::{full_type_name_of, try_type_name_of, type_name_of};
pub use reflect::{Reflect, Shape};
pub use tuple::MemberTuple;
pub use visit::{
    IndexMask, MemberType, MemberTypeVisitor, call_on_members, enumerate_member_types, enumerate_member_types_in,
    enumerate_members, enumerate_members_in, fold_member_types, fold_members, member_types, visit_member_types,
};

#[doc(hidden)]
pub mod __private {
    pub use crate::diff::probe::{DiffProbe, Unsupported, ViaMembers, ViaPartialEq};
    pub use crate::reflect::probe::{ValueProbe, ViaOpaque, ViaReflect};
}
