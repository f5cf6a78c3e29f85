//! Reflection with the property list discovered once.

use std::sync::Arc;

use parking_lot::RwLock;
use refract_ir::{Reflect, TypeDescriptor, TypeRegistry, TypeTag};

use crate::{concat_properties, AnalyzeError, AnalyzeResult, Analyzer, Strategy};

/// Analyzer holding a single cached descriptor.
///
/// The slot is empty until [`initialize`](Self::initialize) is called.
/// Re-initializing replaces the cached descriptor. The lock keeps concurrent
/// use memory-safe; ordering `initialize` before `analyze` is the caller's
/// job.
#[derive(Debug, Default)]
pub struct CachedReflectionAnalyzer {
    slot: RwLock<Option<Arc<TypeDescriptor>>>,
}

impl CachedReflectionAnalyzer {
    /// An uninitialized analyzer.
    pub fn new() -> Self {
        Self::default()
    }

    /// An analyzer already initialized with `descriptor`.
    pub fn with_descriptor(descriptor: impl Into<Arc<TypeDescriptor>>) -> Self {
        CachedReflectionAnalyzer {
            slot: RwLock::new(Some(descriptor.into())),
        }
    }

    /// Initialize from the registry entry for `tag`.
    ///
    /// Returns `None` if `tag` was never registered.
    pub fn from_registry(registry: &TypeRegistry, tag: &TypeTag) -> Option<Self> {
        registry.get(tag).map(Self::with_descriptor)
    }

    /// Store the ordered property list, replacing any previous one.
    #[tracing::instrument(level = "debug", skip_all, fields(type_name = %descriptor.name(), properties = descriptor.len()))]
    pub fn initialize(&self, descriptor: TypeDescriptor) {
        self.install(Arc::new(descriptor));
    }

    /// Like [`initialize`](Self::initialize), sharing an existing descriptor.
    pub fn initialize_shared(&self, descriptor: Arc<TypeDescriptor>) {
        tracing::debug!(type_name = %descriptor.name(), "initialize cached analyzer (shared)");
        self.install(descriptor);
    }

    fn install(&self, descriptor: Arc<TypeDescriptor>) {
        let previous = self.slot.write().replace(descriptor);
        if let Some(previous) = previous {
            tracing::trace!(type_name = %previous.name(), "replaced cached descriptor");
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.slot.read().is_some()
    }

    /// The cached descriptor, if any.
    pub fn descriptor(&self) -> Option<Arc<TypeDescriptor>> {
        self.slot.read().clone()
    }
}

impl Analyzer for CachedReflectionAnalyzer {
    fn strategy(&self) -> Strategy {
        Strategy::CachedReflection
    }

    fn analyze(&self, object: &dyn Reflect) -> AnalyzeResult<String> {
        let slot = self.slot.read();
        let descriptor = slot.as_deref().ok_or(AnalyzeError::Uninitialized)?;

        let found = object.type_tag();
        if found != descriptor.tag() {
            return Err(AnalyzeError::type_mismatch(descriptor.name(), found.name()));
        }
        concat_properties(object, descriptor)
    }
}
