//! Expansion of `#[derive(Reflect)]` for structs.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{DataStruct, DeriveInput, Generics, Index, Member, Type, parse_quote};

use reflection_core::MAX_MEMBER_COUNT;

/// One declared member, in declaration order.
struct MemberDecl<'a> {
    member: Member,
    name: String,
    ty: &'a Type,
}

fn member_decls(data: &DataStruct) -> Vec<MemberDecl<'_>> {
    data.fields
        .iter()
        .enumerate()
        .map(|(i, field)| match &field.ident {
            Some(ident) => MemberDecl {
                member: Member::Named(ident.clone()),
                name: ident.unraw().to_string(),
                ty: &field.ty,
            },
            None => MemberDecl {
                member: Member::Unnamed(Index::from(i)),
                name: i.to_string(),
                ty: &field.ty,
            },
        })
        .collect()
}

/// Add `bound` to every type parameter. Structural impls use the definition's generics as written; only the value
/// view and the diff impl need their members to be reflectable or comparable.
fn bounded_generics(generics: &Generics, bound: TokenStream) -> Generics {
    let mut generics = generics.clone();
    let params: Vec<_> = generics.type_params().map(|param| param.ident.clone()).collect();
    let where_clause = generics.make_where_clause();
    for ident in params {
        where_clause.predicates.push(parse_quote!(#ident: #bound));
    }
    generics
}

pub(crate) fn expand(input: &DeriveInput, data: &DataStruct) -> syn::Result<TokenStream> {
    let decls = member_decls(data);
    if decls.len() > MAX_MEMBER_COUNT {
        return Err(syn::Error::new_spanned(
            &data.fields,
            format!(
                "`Reflect` supports aggregates with at most {MAX_MEMBER_COUNT} members, `{}` declares {}",
                input.ident,
                decls.len()
            ),
        ));
    }

    let name = &input.ident;
    let type_name = name.unraw().to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let value_generics = bounded_generics(&input.generics, quote!(::reflection::Reflect));
    let (value_impl_generics, _, value_where_clause) = value_generics.split_for_impl();
    let diff_generics = bounded_generics(
        &input.generics,
        quote!(::reflection::Reflect + ::core::cmp::PartialEq),
    );
    let (diff_impl_generics, _, diff_where_clause) = diff_generics.split_for_impl();

    let members: Vec<_> = decls.iter().map(|decl| &decl.member).collect();
    let names: Vec<_> = decls.iter().map(|decl| decl.name.as_str()).collect();
    let types: Vec<_> = decls.iter().map(|decl| decl.ty).collect();
    let indices: Vec<_> = (0..decls.len()).collect();
    let bindings: Vec<_> = indices.iter().map(|i| format_ident!("__member{}", i)).collect();

    let into_tuple = if decls.is_empty() {
        quote! {
            let _ = self;
        }
    } else {
        quote! {
            let Self { #(#members: #bindings),* } = self;
            (#(#bindings,)*)
        }
    };

    let member_at = decls.iter().enumerate().map(|(index, decl)| {
        let MemberDecl { member, name: member_name, ty } = decl;
        quote! {
            impl #impl_generics ::reflection::MemberAt<#index> for #name #ty_generics #where_clause {
                type Type = #ty;
                const NAME: &'static str = #member_name;

                fn get(&self) -> &Self::Type {
                    &self.#member
                }

                fn get_mut(&mut self) -> &mut Self::Type {
                    &mut self.#member
                }
            }
        }
    });

    Ok(quote! {
        impl #impl_generics ::reflection::Aggregate for #name #ty_generics #where_clause {
            const TYPE_NAME: &'static str = #type_name;
            const MEMBER_COUNT: usize =
                <<Self as ::reflection::Aggregate>::Tuple as ::reflection::MemberTuple>::ARITY;
            const MEMBER_NAMES: &'static [&'static str] = &[#(#names),*];

            type Tuple = (#(#types,)*);
            type Refs<'__reflection> = (#(&'__reflection #types,)*)
            where
                Self: '__reflection;
            type RefsMut<'__reflection> = (#(&'__reflection mut #types,)*)
            where
                Self: '__reflection;

            fn to_tuple(&self) -> Self::Refs<'_> {
                (#(&self.#members,)*)
            }

            fn to_tuple_mut(&mut self) -> Self::RefsMut<'_> {
                (#(&mut self.#members,)*)
            }

            fn into_tuple(self) -> Self::Tuple {
                #into_tuple
            }

            #[allow(unused_variables)]
            fn visit_member_types<V: ::reflection::MemberTypeVisitor>(visitor: &mut V) {
                #(visitor.visit::<#indices, Self>();)*
            }
        }

        #(#member_at)*

        impl #value_impl_generics ::reflection::MemberValues for #name #ty_generics #value_where_clause {
            #[allow(unused_imports)]
            fn member(&self, index: usize) -> ::core::option::Option<&dyn ::reflection::Reflect> {
                use ::reflection::__private::{ViaOpaque as _, ViaReflect as _};
                match index {
                    #(#indices => ::core::option::Option::Some(
                        (&&::reflection::__private::ValueProbe(&self.#members)).member_value()
                    ),)*
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl #value_impl_generics ::reflection::Reflect for #name #ty_generics #value_where_clause {
            fn shape(&self) -> ::reflection::Shape<'_> {
                ::reflection::Shape::Aggregate(self)
            }
        }

        impl #diff_impl_generics ::reflection::DiffMembers for #name #ty_generics #diff_where_clause {
            #[allow(unused_imports, unused_variables)]
            fn diff_members<'__reflection, __S>(
                &'__reflection self,
                other: &'__reflection Self,
                sink: &mut __S,
            ) where
                __S: ::core::ops::FnMut(::reflection::Difference<'__reflection>) + ?Sized,
            {
                use ::reflection::__private::{Unsupported as _, ViaMembers as _, ViaPartialEq as _};
                #(
                    (&&&::reflection::__private::DiffProbe(&self.#members))
                        .diff_tag()
                        .diff(#indices, #names, &self.#members, &other.#members, sink);
                )*
            }
        }
    })
}
