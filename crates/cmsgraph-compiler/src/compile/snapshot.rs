//! Per-compilation copy of the registry.

use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};

use cmsgraph_core::{BaseType, ContentType, Registry};

/// Immutable registry view captured at the start of a root compile call.
///
/// Registry changes made while a compilation runs are not observed by it.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    types: IndexMap<String, Arc<ContentType>>,
    media_keys: IndexSet<String>,
}

impl Snapshot {
    pub fn capture<R: Registry + ?Sized>(registry: &R) -> Self {
        let types: IndexMap<String, Arc<ContentType>> = registry
            .all_content_types()
            .into_iter()
            .map(|ct| (ct.key.clone(), Arc::new(ct.clone())))
            .collect();
        let media_keys = registry
            .media_type_keys()
            .into_iter()
            .map(str::to_string)
            .collect();
        tracing::trace!(types = types.len(), "captured registry snapshot");
        Self { types, media_keys }
    }

    /// Shared handle to a declaration, detached from the snapshot borrow.
    pub fn get(&self, key: &str) -> Option<Arc<ContentType>> {
        self.types.get(key).cloned()
    }

    /// Base type of a registered image, video or media type.
    pub fn media_base(&self, key: &str) -> Option<BaseType> {
        if !self.media_keys.contains(key) {
            return None;
        }
        self.types.get(key).map(|ct| ct.base_type)
    }
}

impl Registry for Snapshot {
    fn all_content_types(&self) -> Vec<&ContentType> {
        self.types.values().map(Arc::as_ref).collect()
    }

    fn content_type(&self, key: &str) -> Option<&ContentType> {
        self.types.get(key).map(Arc::as_ref)
    }

    fn media_type_keys(&self) -> Vec<&str> {
        self.media_keys.iter().map(String::as_str).collect()
    }
}
