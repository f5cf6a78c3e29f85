//! Append-only store of compiled units.
//!
//! Units are never unloaded. Loading a second unit under a name that is
//! already present keeps both; each stays usable through the `Arc` handed
//! out when it was loaded.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::unit::CompiledUnit;

/// Units loaded by one [`CodeGenerator`](crate::CodeGenerator).
#[derive(Debug, Default)]
pub struct UnitLoader {
    units: Mutex<Vec<Arc<CompiledUnit>>>,
}

impl UnitLoader {
    pub fn new() -> Self {
        UnitLoader::default()
    }

    /// Load `unit` and return a shared handle to it.
    pub fn load(&self, unit: CompiledUnit) -> Arc<CompiledUnit> {
        let unit = Arc::new(unit);
        let mut units = self.units.lock();
        units.push(Arc::clone(&unit));
        tracing::debug!(
            unit = unit.name(),
            target = unit.target().name(),
            ops = unit.ops().len(),
            loaded = units.len(),
            "loaded compiled unit"
        );
        unit
    }

    pub fn len(&self) -> usize {
        self.units.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.lock().is_empty()
    }
}
