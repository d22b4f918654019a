use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::OnceCell;

use crate::error::{MeterwireError, Result};

use super::application::{Application, Factory, Instance};

struct Slot {
    factory: Factory,
    instance: OnceCell<Instance>,
}

/// In-memory binding table.
///
/// Singletons are built on first `make` and cached. Concurrent `make` calls on
/// a cold key wait for a single factory run; a factory that fails is retried
/// on the next `make`. A factory must not resolve its own key.
#[derive(Default)]
pub struct Container {
    slots: DashMap<String, Arc<Slot>>,
    tags: DashMap<String, Vec<String>>,
}

impl Container {
    pub fn new() -> Self {
        Self {
            slots: DashMap::new(),
            tags: DashMap::new(),
        }
    }

    pub fn bound_keys(&self) -> Vec<String> {
        self.slots.iter().map(|e| e.key().clone()).collect()
    }
}

impl Application for Container {
    fn singleton(&self, key: &str, factory: Factory) -> Result<()> {
        if key.trim().is_empty() {
            return Err(MeterwireError::InvalidBinding("binding key must not be empty".into()));
        }
        // rebinding drops any instance built by the previous factory
        let slot = Slot {
            factory,
            instance: OnceCell::new(),
        };
        self.slots.insert(key.to_string(), Arc::new(slot));
        Ok(())
    }

    fn bound(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    fn make(&self, key: &str) -> Result<Instance> {
        // Clone the slot out so no shard lock is held while the factory runs;
        // factories may resolve other bindings.
        let slot = self
            .slots
            .get(key)
            .map(|s| Arc::clone(s.value()))
            .ok_or_else(|| MeterwireError::NotBound(key.to_string()))?;

        let inst = slot.instance.get_or_try_init(|| {
            let built = (slot.factory)().map_err(|e| MeterwireError::Resolve {
                key: key.to_string(),
                reason: e.to_string(),
            })?;
            tracing::debug!(%key, "singleton constructed");
            Ok::<_, MeterwireError>(built)
        })?;
        Ok(Arc::clone(inst))
    }

    fn tag(&self, tag: &str, key: &str) {
        let mut keys = self.tags.entry(tag.to_string()).or_default();
        if !keys.iter().any(|k| k == key) {
            keys.push(key.to_string());
        }
    }

    fn tagged(&self, tag: &str) -> Vec<String> {
        self.tags
            .get(tag)
            .map(|keys| keys.value().clone())
            .unwrap_or_default()
    }
}
