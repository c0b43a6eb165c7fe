//! Runtime view of reflected values.
//!
//! Member values are handed to visitors, folds and diff callbacks as `&dyn Reflect`. The [`Shape`] of a value decides
//! how it is rendered: string-like values are quoted, scalars use their `Display` text, enumerators print their name,
//! and aggregates recurse into their own members.

use std::any::Any;
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::marker::PhantomData;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::num::{NonZeroI32, NonZeroI64, NonZeroU8, NonZeroU16, NonZeroU32, NonZeroU64, NonZeroUsize};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use crate::aggregate::DynAggregate;

/// A value that can be viewed through reflection.
///
/// Derived aggregates and enums implement this through `#[derive(Reflect)]`. Primitive scalars, strings, paths, smart
/// pointers, `Option`, tuples, sequences, sets and maps are covered here; other `Display` types can opt in with
/// [`reflect_leaf!`](crate::reflect_leaf).
pub trait Reflect {
    /// How this value is structured.
    fn shape(&self) -> Shape<'_>;

    /// Fully qualified type name as rendered by the compiler.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// `'static` leaf values expose themselves for downcasting; everything else returns `None`.
    fn as_any(&self) -> Option<&dyn Any> {
        None
    }
}

/// Structural classification of a reflected value.
pub enum Shape<'a> {
    /// String-like text, rendered quoted.
    Text(&'a str),
    /// A single character, rendered quoted.
    Char(char),
    /// Any other formattable scalar, rendered through `Display`.
    Scalar(&'a dyn fmt::Display),
    /// An enumeration constant, rendered as its name.
    Enumerator(&'static str),
    /// A nested aggregate, rendered member by member.
    Aggregate(&'a dyn DynAggregate),
    /// A homogeneous sequence or set, rendered `[a, b]`.
    Sequence(Vec<&'a dyn Reflect>),
    /// A tuple, rendered `(a, b)`.
    Tuple(Vec<&'a dyn Reflect>),
    /// Key/value pairs, rendered `{k: v, ..}`.
    Map(Vec<(&'a dyn Reflect, &'a dyn Reflect)>),
    /// An optional value.
    Optional(Option<&'a dyn Reflect>),
    /// A value with only a `Debug` rendering, such as `Duration`.
    Debug(&'a dyn fmt::Debug),
    /// A member whose type does not implement `Reflect`.
    Opaque,
}

impl dyn Reflect + '_ {
    /// Downcast a `'static` leaf value to its concrete type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any()?.downcast_ref::<T>()
    }

    /// The aggregate view of this value, if it is one.
    pub fn as_aggregate(&self) -> Option<&dyn DynAggregate> {
        match self.shape() {
            Shape::Aggregate(aggregate) => Some(aggregate),
            _ => None,
        }
    }
}

impl fmt::Display for dyn Reflect + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::inspect::write_value(f, self)
    }
}

impl fmt::Debug for dyn Reflect + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::inspect::write_value(f, self)
    }
}

/// Implement [`Reflect`] for `'static` types rendered through their `Display` impl.
///
/// ```
/// use std::fmt;
///
/// #[derive(PartialEq)]
/// struct Celsius(f32);
///
/// impl fmt::Display for Celsius {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{}°C", self.0)
///     }
/// }
///
/// reflection::reflect_leaf!(Celsius);
///
/// #[derive(reflection::Reflect)]
/// struct Reading {
///     sensor: &'static str,
///     value: Celsius,
/// }
///
/// let reading = Reading { sensor: "attic", value: Celsius(21.5) };
/// assert_eq!(reflection::inspect(&reading), r#"sensor="attic" value=21.5°C"#);
/// ```
#[macro_export]
macro_rules! reflect_leaf {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Reflect for $ty {
                fn shape(&self) -> $crate::Shape<'_> {
                    $crate::Shape::Scalar(self)
                }

                fn as_any(&self) -> ::core::option::Option<&dyn ::core::any::Any> {
                    ::core::option::Option::Some(self)
                }
            }
        )*
    };
}

reflect_leaf!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool
);

reflect_leaf!(
    NonZeroU8, NonZeroU16, NonZeroU32, NonZeroU64, NonZeroUsize, NonZeroI32, NonZeroI64, IpAddr, Ipv4Addr, Ipv6Addr,
    SocketAddr
);

impl Reflect for char {
    fn shape(&self) -> Shape<'_> {
        Shape::Char(*self)
    }

    fn as_any(&self) -> Option<&dyn Any> {
        Some(self)
    }
}

impl Reflect for str {
    fn shape(&self) -> Shape<'_> {
        Shape::Text(self)
    }
}

impl Reflect for String {
    fn shape(&self) -> Shape<'_> {
        Shape::Text(self)
    }

    fn as_any(&self) -> Option<&dyn Any> {
        Some(self)
    }
}

impl Reflect for Cow<'_, str> {
    fn shape(&self) -> Shape<'_> {
        Shape::Text(self)
    }
}

// Pointers are transparent: they render and downcast as their pointee.
macro_rules! reflect_pointer {
    ($($ptr:ty),*) => {
        $(
            impl<T: Reflect + ?Sized> Reflect for $ptr {
                fn shape(&self) -> Shape<'_> {
                    (**self).shape()
                }

                fn as_any(&self) -> Option<&dyn Any> {
                    (**self).as_any()
                }
            }
        )*
    };
}

reflect_pointer!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

impl<T: Reflect> Reflect for Option<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Optional(self.as_ref().map(|value| value as &dyn Reflect))
    }
}

impl<T: Reflect> Reflect for [T] {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(self.iter().map(|value| value as &dyn Reflect).collect())
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn shape(&self) -> Shape<'_> {
        self.as_slice().shape()
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        self.as_slice().shape()
    }
}

impl Reflect for Path {
    fn shape(&self) -> Shape<'_> {
        match self.to_str() {
            Some(text) => Shape::Text(text),
            None => Shape::Opaque,
        }
    }
}

impl Reflect for PathBuf {
    fn shape(&self) -> Shape<'_> {
        self.as_path().shape()
    }

    fn as_any(&self) -> Option<&dyn Any> {
        Some(self)
    }
}

impl Reflect for Duration {
    fn shape(&self) -> Shape<'_> {
        Shape::Debug(self)
    }

    fn as_any(&self) -> Option<&dyn Any> {
        Some(self)
    }
}

impl<T: ?Sized> Reflect for PhantomData<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Tuple(Vec::new())
    }
}

impl<T: Reflect> Reflect for VecDeque<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(self.iter().map(|value| value as &dyn Reflect).collect())
    }
}

impl<T: Reflect, S> Reflect for HashSet<T, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(self.iter().map(|value| value as &dyn Reflect).collect())
    }
}

impl<T: Reflect> Reflect for BTreeSet<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(self.iter().map(|value| value as &dyn Reflect).collect())
    }
}

impl<K: Reflect, V: Reflect, S> Reflect for HashMap<K, V, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Map(self.iter().map(|(k, v)| (k as &dyn Reflect, v as &dyn Reflect)).collect())
    }
}

impl<K: Reflect, V: Reflect> Reflect for BTreeMap<K, V> {
    fn shape(&self) -> Shape<'_> {
        Shape::Map(self.iter().map(|(k, v)| (k as &dyn Reflect, v as &dyn Reflect)).collect())
    }
}

impl Reflect for () {
    fn shape(&self) -> Shape<'_> {
        Shape::Tuple(Vec::new())
    }
}

// One impl per tuple arity up to 12, like the std trait impls on tuples.
macro_rules! reflect_tuples {
    ($($name:ident)+) => {
        impl<$($name: Reflect),+> Reflect for ($($name,)+) {
            #[allow(non_snake_case)]
            fn shape(&self) -> Shape<'_> {
                let ($($name,)+) = self;
                Shape::Tuple(vec![$($name as &dyn Reflect),+])
            }
        }
    };
}

reflect_tuples!(A);
reflect_tuples!(A B);
reflect_tuples!(A B C);
reflect_tuples!(A B C D);
reflect_tuples!(A B C D E);
reflect_tuples!(A B C D E F);
reflect_tuples!(A B C D E F G);
reflect_tuples!(A B C D E F G H);
reflect_tuples!(A B C D E F G H I);
reflect_tuples!(A B C D E F G H I J);
reflect_tuples!(A B C D E F G H I J K);
reflect_tuples!(A B C D E F G H I J K L);

/// Stand-in for members whose type does not implement [`Reflect`].
struct Opaque;

static OPAQUE: Opaque = Opaque;

impl Reflect for Opaque {
    fn shape(&self) -> Shape<'_> {
        Shape::Opaque
    }
}

/// Per-member value view selection, used by derived `MemberValues` impls.
///
/// `(&&ValueProbe(&member)).member_value()` resolves to [`ViaReflect`](probe::ViaReflect) when the member type
/// implements [`Reflect`]; otherwise auto-deref falls through to [`ViaOpaque`](probe::ViaOpaque).
pub mod probe {
    use super::{OPAQUE, Reflect};

    pub struct ValueProbe<'p, T: ?Sized>(pub &'p T);

    pub trait ViaReflect<'p> {
        fn member_value(&self) -> &'p dyn Reflect;
    }

    impl<'p, T: Reflect> ViaReflect<'p> for &ValueProbe<'p, T> {
        fn member_value(&self) -> &'p dyn Reflect {
            self.0
        }
    }

    pub trait ViaOpaque {
        fn member_value(&self) -> &'static dyn Reflect;
    }

    impl<T: ?Sized> ViaOpaque for ValueProbe<'_, T> {
        fn member_value(&self) -> &'static dyn Reflect {
            &OPAQUE
        }
    }
}
