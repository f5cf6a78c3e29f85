//! Procedural macros for refract.
//!
//! # Reflect Derive
//!
//! The `Reflect` derive macro generates `refract_ir::Reflect` and
//! `refract_ir::Described` implementations for a struct with named fields:
//!
//! ```text
//! #[derive(Reflect)]
//! #[reflect(name = "UnknownType")]
//! pub struct UnknownType {
//!     #[reflect(name = "Prop1")]
//!     pub prop1: String,
//!     #[reflect(name = "Prop2")]
//!     pub prop2: String,
//!     #[reflect(skip)]
//!     pub scratch: Vec<u8>,
//! }
//! ```
//!
//! Each reflected field becomes a `PropertyDescriptor` whose accessor is a
//! monomorphic `fn` that downcasts the object and reads the field directly.
//! Fields keep declaration order. Every reflected field type must implement
//! `refract_ir::PropertyValue`.

mod reflect;
mod utils;

use proc_macro::TokenStream;

/// Derive macro implementing `Reflect` and `Described`.
///
/// # Attributes
///
/// ## Struct-level
/// - `#[reflect(name = "...")]` - Published type name (defaults to the struct name).
///
/// ## Field-level
/// - `#[reflect(name = "...")]` - Published property name (defaults to the field name).
/// - `#[reflect(skip)]` - Exclude the field from discovery.
///
/// Generic structs are rejected: reflected types must be `'static` and have
/// a single runtime identity.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    reflect::derive_reflect(input)
}
