//! Names of enumeration constants.

use reflection_core::position_of;

use crate::reflect::Reflect;

/// A fieldless enum whose constants are known by name.
///
/// Implemented by `#[derive(Reflect)]`.
pub trait EnumReflect: Reflect + Sized + 'static {
    /// The enum's identifier.
    const TYPE_NAME: &'static str;
    /// Enumerator identifiers in declaration order.
    const VARIANT_NAMES: &'static [&'static str];
    /// Every constant, in declaration order.
    const VARIANTS: &'static [Self];

    /// Identifier of this constant.
    fn variant_name(&self) -> &'static str;

    /// Declaration position of this constant (not its discriminant).
    fn variant_index(&self) -> usize;

    /// Look a constant up by its identifier.
    fn from_variant_name(name: &str) -> Option<&'static Self> {
        Self::VARIANTS.get(position_of(Self::VARIANT_NAMES, name)?)
    }
}

/// Identifier of an enumeration constant, e.g. `"Red"` for `Color::Red`.
pub fn enum_name<E: EnumReflect>(value: &E) -> &'static str {
    value.variant_name()
}

/// All enumerator identifiers of `E`, in declaration order.
pub const fn enum_variant_names<E: EnumReflect>() -> &'static [&'static str] {
    E::VARIANT_NAMES
}
