//! Core type model for refract.
//!
//! Everything an analyzer needs to know about an object without static
//! knowledge of its shape lives here:
//!
//! - [`TypeTag`]: runtime identity of a concrete type plus its short name
//! - [`Value`]: a borrowed, opaque property value
//! - [`PropertyDescriptor`]: name, declaration index and typed accessor
//! - [`TypeDescriptor`]: the ordered property list of one type
//! - [`Reflect`] / [`Described`]: object-safe and static introspection
//! - [`TypeRegistry`]: shared tag → descriptor cache
//!
//! # Architecture
//!
//! ```text
//! #[derive(Reflect)] struct T { .. }
//!     │
//!     ▼
//! T::descriptor() ──► TypeDescriptor { tag, [PropertyDescriptor; N] }
//!     │
//!     ▼
//! TypeRegistry::register ──► Arc<TypeDescriptor> (looked up by tag or name)
//! ```
//!
//! Accessors are plain `fn` pointers generated per field, so reading a
//! property never goes through name lookup once a descriptor is in hand.

mod descriptor;
mod reflect;
mod registry;
mod span;
mod value;

pub use descriptor::{Accessor, PropertyDescriptor, TypeDescriptor, TypeTag};
pub use reflect::{Described, Reflect};
pub use registry::{RegistryError, TypeRegistry};
pub use span::Span;
pub use value::{NullValue, PropertyValue, Value};
