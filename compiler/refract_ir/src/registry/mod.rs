//! Shared type registry.
//!
//! Maps a [`TypeTag`] to its discovered [`TypeDescriptor`], built once per
//! type and read many times afterwards. A second index maps the published
//! type name to its tag so generated source can refer to types by name.
//!
//! # Thread Safety
//!
//! The registry is internally synchronized with a `parking_lot::RwLock`.
//! Registration takes the write lock; lookups take the read lock and hand
//! out `Arc<TypeDescriptor>` so no lock is held while a caller reads
//! properties.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::{Described, TypeDescriptor, TypeTag};

/// Error returned by [`TypeRegistry::register_descriptor`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// A different type is already registered under this name.
    DuplicateName {
        name: &'static str,
        existing: TypeTag,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateName { name, existing } => write!(
                f,
                "type name `{name}` is already registered for a different type ({existing:?})"
            ),
        }
    }
}

impl std::error::Error for RegistryError {}

#[derive(Default)]
struct RegistryInner {
    by_tag: FxHashMap<TypeTag, Arc<TypeDescriptor>>,
    by_name: FxHashMap<&'static str, TypeTag>,
}

/// Tag → descriptor cache shared by analyzers and the code generator.
#[derive(Default)]
pub struct TypeRegistry {
    inner: RwLock<RegistryInner>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `T`, discovering its properties if not already present.
    ///
    /// Idempotent: registering the same type twice returns the cached
    /// descriptor.
    pub fn register<T: Described>(&self) -> Result<Arc<TypeDescriptor>, RegistryError> {
        if let Some(existing) = self.get(&T::tag()) {
            return Ok(existing);
        }
        self.register_descriptor(T::descriptor())
    }

    /// Register an already discovered descriptor.
    pub fn register_descriptor(
        &self,
        descriptor: TypeDescriptor,
    ) -> Result<Arc<TypeDescriptor>, RegistryError> {
        let tag = descriptor.tag();
        let mut inner = self.inner.write();

        if let Some(&existing) = inner.by_name.get(tag.name()) {
            if existing != tag {
                return Err(RegistryError::DuplicateName {
                    name: tag.name(),
                    existing,
                });
            }
        }
        if let Some(existing) = inner.by_tag.get(&tag) {
            return Ok(Arc::clone(existing));
        }

        tracing::debug!(
            type_name = tag.name(),
            properties = descriptor.len(),
            "registering type"
        );
        let descriptor = Arc::new(descriptor);
        inner.by_name.insert(tag.name(), tag);
        inner.by_tag.insert(tag, Arc::clone(&descriptor));
        Ok(descriptor)
    }

    pub fn get(&self, tag: &TypeTag) -> Option<Arc<TypeDescriptor>> {
        self.inner.read().by_tag.get(tag).cloned()
    }

    /// Look up a registered type by its published name.
    pub fn lookup(&self, name: &str) -> Option<Arc<TypeDescriptor>> {
        let inner = self.inner.read();
        let tag = inner.by_name.get(name)?;
        inner.by_tag.get(tag).cloned()
    }

    /// Names of all registered types, sorted.
    pub fn type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.inner.read().by_name.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn contains(&self, tag: &TypeTag) -> bool {
        self.inner.read().by_tag.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.inner.read().by_tag.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().by_tag.is_empty()
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("types", &self.type_names())
            .finish()
    }
}
