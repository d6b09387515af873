//! Derive macro for classgen model reflection.
//!
//! Rust has no runtime field reflection, so the structure a traversal
//! engine needs is captured at compile time: `#[derive(Reflect)]` emits a
//! `classgen_reflect::Reflect` implementation describing the struct's
//! fields in declaration order.
//!
//! # Example
//! ```ignore
//! #[derive(Reflect)]
//! struct WeightedVariation {
//!     #[reflect(rename = "ID")]
//!     id: String,
//!     #[reflect(rename = "Weight")]
//!     weight: i64,
//! }
//! ```
//!
//! `#[reflect(rename = "...")]` overrides the emitted name: on a field it
//! renames the generated field declaration, on the struct it renames the
//! generated class. Only structs with named fields are supported.

use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, LitStr, parse_macro_input};

/// Derives `classgen_reflect::Reflect` for a struct with named fields.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let class_name = rename_attr(&input.attrs)?.unwrap_or_else(|| name.to_string());

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Reflect requires named fields; tuple and unit structs have no field names to emit",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "Reflect can only be derived for structs",
            ));
        }
    };

    let mut field_descriptors = Vec::with_capacity(fields.len());
    let mut field_values = Vec::with_capacity(fields.len());
    for field in fields {
        let ident = field.ident.as_ref().expect("named field");
        let ty = &field.ty;
        let field_name = rename_attr(&field.attrs)?.unwrap_or_else(|| ident.to_string());
        field_descriptors.push(quote! {
            classgen_reflect::FieldDescriptor::new(
                #field_name,
                <#ty as classgen_reflect::Reflect>::descriptor,
            )
        });
        field_values.push(quote! {
            classgen_reflect::Reflect::to_value(&self.#ident)
        });
    }

    // Type parameters need to be reflectable themselves, and TypeId demands
    // 'static.
    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(syn::parse_quote!(classgen_reflect::Reflect));
        param.bounds.push(syn::parse_quote!('static));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics classgen_reflect::Reflect for #name #ty_generics #where_clause {
            fn descriptor() -> classgen_reflect::TypeDescriptor {
                classgen_reflect::TypeDescriptor::record(
                    #class_name,
                    ::std::any::TypeId::of::<Self>(),
                    ::std::vec![#(#field_descriptors),*],
                )
            }

            fn to_value(&self) -> classgen_reflect::Value {
                classgen_reflect::Value::Record(
                    <Self as classgen_reflect::Reflect>::descriptor(),
                    ::std::vec![#(#field_values),*],
                )
            }
        }
    })
}

/// Extract `#[reflect(rename = "...")]` from an attribute list.
fn rename_attr(attrs: &[syn::Attribute]) -> syn::Result<Option<String>> {
    let mut rename = None;
    for attr in attrs {
        if !attr.path().is_ident("reflect") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                rename = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("unsupported reflect attribute, expected `rename`"))
            }
        })?;
    }
    Ok(rename)
}
