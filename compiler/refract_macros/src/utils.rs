//! Shared utilities for derive macros.

use quote::ToTokens;
use syn::{punctuated::Punctuated, token::Comma, Attribute, Data, DeriveInput, Field, Fields, LitStr};

/// Validate that the input is a struct with named fields, returning the fields.
///
/// Unit structs are accepted and yield an empty field list.
pub fn validate_struct_fields<'a>(
    input: &'a DeriveInput,
    macro_name: &str,
) -> syn::Result<Vec<&'a Field>> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(named(&fields.named)),
            Fields::Unit => Ok(Vec::new()),
            Fields::Unnamed(_) => Err(syn::Error::new_spanned(
                input,
                format!("{macro_name} derive only supports structs with named fields"),
            )),
        },
        _ => Err(syn::Error::new_spanned(
            input,
            format!("{macro_name} derive only supports structs"),
        )),
    }
}

fn named(fields: &Punctuated<Field, Comma>) -> Vec<&Field> {
    fields.iter().collect()
}

/// Options parsed from `#[reflect(...)]` attributes.
#[derive(Default)]
pub struct ReflectOptions {
    pub name: Option<LitStr>,
    pub skip: bool,
}

/// Parse every `#[reflect(...)]` attribute in `attrs`.
///
/// `allow_skip` is false at struct level, where `skip` has no meaning.
pub fn parse_reflect_options(attrs: &[Attribute], allow_skip: bool) -> syn::Result<ReflectOptions> {
    let mut options = ReflectOptions::default();
    for attr in attrs {
        if !attr.path().is_ident("reflect") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                if lit.value().is_empty() {
                    return Err(meta.error("reflected name cannot be empty"));
                }
                options.name = Some(lit);
                Ok(())
            } else if meta.path.is_ident("skip") && allow_skip {
                options.skip = true;
                Ok(())
            } else {
                Err(meta.error("unknown reflect attribute"))
            }
        })?;
    }
    Ok(options)
}

/// Render a type the way it is usually written (`Option<String>`, not
/// `Option < String >`).
///
/// Token streams print with a space between every token; only spaces
/// separating two word characters are kept.
pub fn type_text(ty: &syn::Type) -> String {
    let raw = ty.to_token_stream().to_string();
    let chars: Vec<char> = raw.chars().collect();
    let is_word = |c: char| c.is_alphanumeric() || c == '_';

    let mut out = String::with_capacity(raw.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == ' ' {
            let prev = i.checked_sub(1).and_then(|p| chars.get(p)).copied();
            let next = chars.get(i + 1).copied();
            if !matches!((prev, next), (Some(a), Some(b)) if is_word(a) && is_word(b)) {
                continue;
            }
        }
        out.push(c);
    }
    out
}
