//! Per-type descriptor cache.
//!
//! [`NodeClass::describe`] is meant to be cheap, but a binder walking a large
//! document may call it once per node. Each type's descriptor is computed at
//! most once and kept behind its own [`OnceLock`], so concurrent binds of the
//! same node class never race to rebuild it.

use std::any::TypeId;
use std::sync::{OnceLock, RwLock};

use rustc_hash::FxHashMap;

use crate::node_class::NodeClass;
use crate::schema::SchemaDescriptor;

static DESCRIPTOR_CACHE: OnceLock<RwLock<FxHashMap<TypeId, OnceLock<SchemaDescriptor>>>> = OnceLock::new();

/// Returns `T::describe()`, computing and caching it on first use.
pub fn cached_descriptor<T: NodeClass>() -> SchemaDescriptor {
    let registry = DESCRIPTOR_CACHE.get_or_init(|| RwLock::new(FxHashMap::default()));
    let type_id = TypeId::of::<T>();

    {
        let read = registry.read().unwrap();
        if let Some(slot) = read.get(&type_id) {
            if let Some(descriptor) = slot.get() {
                return descriptor.clone();
            }
        }
    }

    let mut write = registry.write().unwrap();
    let slot = write.entry(type_id).or_insert_with(OnceLock::new);
    slot.get_or_init(T::describe).clone()
}
