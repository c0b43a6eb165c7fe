//! Derive macro for the `reflection` crate.
//!
//! `#[derive(Reflect)]` reads a type definition once and emits everything the runtime needs to reflect over it at
//! compile time:
//! - on structs: an `Aggregate` impl (type name, member count, member names, the tuple shapes used to decompose a value
//!   by reference/mutable reference/value, type-level visiting) and one `MemberAt<I>` impl per member, none of which ask
//!   anything of the member types; then `MemberValues` and `Reflect` impls that view members as `&dyn Reflect`, and a
//!   `DiffMembers` impl for member-wise comparison;
//! - on fieldless enums: an `EnumReflect` impl (enumerator names, indices, the list of constants) and a `Reflect` impl
//!   that presents the value as its enumerator name.
//!
//! Unions and enums with data-carrying variants are rejected with a spanned compile error.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use syn::{Data, DeriveInput, parse_macro_input};

mod aggregate;
mod enums;

/// Generates compile-time reflection metadata for a plain aggregate or a fieldless enum.
///
/// # Example
/// ```ignore
/// #[derive(Reflect)]
/// struct Person {
///     name: &'static str,
///     email: String,
///     age: u32,
/// }
///
/// // Generates (abridged):
/// impl ::reflection::Aggregate for Person {
///     const TYPE_NAME: &'static str = "Person";
///     const MEMBER_NAMES: &'static [&'static str] = &["name", "email", "age"];
///     type Tuple = (&'static str, String, u32);
///     // ...
/// }
/// impl ::reflection::MemberAt<2usize> for Person {
///     type Type = u32;
///     const NAME: &'static str = "age";
///     // ...
/// }
/// impl ::reflection::MemberValues for Person { /* members as `&dyn Reflect` */ }
/// impl ::reflection::Reflect for Person { /* `Shape::Aggregate` */ }
/// impl ::reflection::DiffMembers for Person { /* compare or recurse, per member */ }
/// ```
#[proc_macro_derive(Reflect)]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_reflect(&input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

fn expand_reflect(input: &DeriveInput) -> syn::Result<TokenStream2> {
    match &input.data {
        Data::Struct(data) => aggregate::expand(input, data),
        Data::Enum(data) => enums::expand(input, data),
        Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "`Reflect` cannot be derived for unions: only one member is live at a time",
        )),
    }
}
