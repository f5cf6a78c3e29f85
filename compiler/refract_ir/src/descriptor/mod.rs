//! Type tags and property descriptors.
//!
//! A [`TypeDescriptor`] is the result of property discovery: the ordered
//! list of readable properties of one concrete type. Descriptors are built
//! by `#[derive(Reflect)]` and never mutated afterwards.

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::Value;

/// Runtime identity of a concrete type.
///
/// Equality and hashing use only the [`TypeId`]; the name is carried for
/// diagnostics and for resolving type names in generated source.
#[derive(Copy, Clone)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    /// Tag for `T`, published under `name`.
    #[inline]
    pub fn of<T: Any>(name: &'static str) -> Self {
        TypeTag {
            id: TypeId::of::<T>(),
            name,
        }
    }

    #[inline]
    pub fn id(&self) -> TypeId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Check whether `object` is an instance of this tag's type.
    #[inline]
    pub fn matches(&self, object: &dyn Any) -> bool {
        object.type_id() == self.id
    }
}

impl PartialEq for TypeTag {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeTag {}

impl Hash for TypeTag {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeTag({})", self.name)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Typed getter for one property.
///
/// Returns `None` when `object` is not an instance of the declaring type.
pub type Accessor = for<'a> fn(&'a dyn Any) -> Option<Value<'a>>;

/// One discovered property: name, position and accessor.
#[derive(Copy, Clone)]
pub struct PropertyDescriptor {
    name: &'static str,
    index: usize,
    type_name: &'static str,
    accessor: Accessor,
}

impl PropertyDescriptor {
    pub fn new(
        name: &'static str,
        index: usize,
        type_name: &'static str,
        accessor: Accessor,
    ) -> Self {
        PropertyDescriptor {
            name,
            index,
            type_name,
            accessor,
        }
    }

    /// Published property name (what generated source refers to).
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declaration index within the owning type.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Declared field type, as written in the source struct.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[inline]
    pub fn accessor(&self) -> Accessor {
        self.accessor
    }

    /// Read this property from `object`.
    #[inline]
    pub fn read<'a>(&self, object: &'a dyn Any) -> Option<Value<'a>> {
        (self.accessor)(object)
    }
}

impl fmt::Debug for PropertyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("name", &self.name)
            .field("index", &self.index)
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// The ordered property list of one type.
#[derive(Clone, Debug)]
pub struct TypeDescriptor {
    tag: TypeTag,
    properties: Vec<PropertyDescriptor>,
}

impl TypeDescriptor {
    pub fn new(tag: TypeTag, properties: Vec<PropertyDescriptor>) -> Self {
        TypeDescriptor { tag, properties }
    }

    #[inline]
    pub fn tag(&self) -> TypeTag {
        self.tag
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.tag.name
    }

    /// Properties in declaration order.
    #[inline]
    pub fn properties(&self) -> &[PropertyDescriptor] {
        &self.properties
    }

    /// Find a property by its published name.
    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name == name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
