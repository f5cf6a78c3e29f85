//! Reflect derive macro implementation.
//!
//! Generates `Described` and `Reflect` implementations. The generated code
//! references `::refract_ir` by absolute path, so the deriving crate must
//! depend on `refract_ir` directly.

use std::collections::HashSet;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, DeriveInput};

use crate::utils::{parse_reflect_options, type_text, validate_struct_fields};

/// Main entry point for the Reflect derive macro.
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_reflect_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_reflect_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Reflect derive does not support generic structs",
        ));
    }

    let struct_options = parse_reflect_options(&input.attrs, false)?;
    let type_name = struct_options
        .name
        .map_or_else(|| ident.to_string(), |lit| lit.value());

    let fields = validate_struct_fields(input, "Reflect")?;

    let mut properties = Vec::with_capacity(fields.len());
    let mut seen = HashSet::new();

    for field in fields {
        let options = parse_reflect_options(&field.attrs, true)?;
        if options.skip {
            continue;
        }

        let field_ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected named field"))?;

        let property_name = match &options.name {
            Some(lit) => lit.value(),
            None => field_ident.unraw().to_string(),
        };
        if !seen.insert(property_name.clone()) {
            let message = format!("duplicate reflected property name `{property_name}`");
            return Err(match options.name {
                Some(lit) => syn::Error::new_spanned(lit, message),
                None => syn::Error::new_spanned(field_ident, message),
            });
        }

        let index = properties.len();
        let ty = &field.ty;
        let type_label = type_text(ty);

        properties.push(quote! {
            ::refract_ir::PropertyDescriptor::new(
                #property_name,
                #index,
                #type_label,
                {
                    fn read(
                        object: &dyn ::core::any::Any,
                    ) -> ::core::option::Option<::refract_ir::Value<'_>> {
                        object
                            .downcast_ref::<#ident>()
                            .map(|this| ::refract_ir::PropertyValue::to_value(&this.#field_ident))
                    }
                    read
                },
            )
        });
    }

    Ok(quote! {
        impl ::refract_ir::Described for #ident {
            fn tag() -> ::refract_ir::TypeTag {
                ::refract_ir::TypeTag::of::<#ident>(#type_name)
            }

            fn descriptor() -> ::refract_ir::TypeDescriptor {
                ::refract_ir::TypeDescriptor::new(
                    <Self as ::refract_ir::Described>::tag(),
                    ::std::vec![#(#properties),*],
                )
            }
        }

        impl ::refract_ir::Reflect for #ident {
            fn type_tag(&self) -> ::refract_ir::TypeTag {
                <Self as ::refract_ir::Described>::tag()
            }

            fn discover(&self) -> ::refract_ir::TypeDescriptor {
                <Self as ::refract_ir::Described>::descriptor()
            }

            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }
        }
    })
}
