//! Introspection traits.

use std::any::Any;

use crate::{TypeDescriptor, TypeTag};

/// Object-safe runtime introspection.
///
/// This is the "opaque object" every analyzer accepts. Implement it with
/// `#[derive(Reflect)]`, which also implements [`Described`].
pub trait Reflect: Any {
    /// Tag of the concrete runtime type.
    fn type_tag(&self) -> TypeTag;

    /// Discover this object's properties.
    ///
    /// Builds a fresh descriptor on every call. Callers that analyze many
    /// objects of one type should cache the result (see
    /// [`TypeRegistry`](crate::TypeRegistry)).
    fn discover(&self) -> TypeDescriptor;

    fn as_any(&self) -> &dyn Any;
}

/// Static introspection for a known type.
pub trait Described: Reflect + Sized {
    fn tag() -> TypeTag;

    fn descriptor() -> TypeDescriptor;
}
