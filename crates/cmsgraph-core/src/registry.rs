//! Read-only access to declared content types.

use indexmap::IndexMap;

use crate::{BaseType, ContentType, parse_content_types};

/// Read operations the compiler needs from a content type registry.
///
/// Registries are populated elsewhere; consumers never mutate them.
/// Iteration order is registration order.
pub trait Registry {
    fn all_content_types(&self) -> Vec<&ContentType>;

    fn content_type(&self, key: &str) -> Option<&ContentType>;

    fn content_types_by_base_type(&self, base_type: BaseType) -> Vec<&ContentType> {
        self.all_content_types()
            .into_iter()
            .filter(|ct| ct.base_type == base_type)
            .collect()
    }

    /// Keys of every registered image, video or media type.
    fn media_type_keys(&self) -> Vec<&str> {
        self.all_content_types()
            .into_iter()
            .filter(|ct| ct.base_type.is_media())
            .map(|ct| ct.key.as_str())
            .collect()
    }
}

impl<T: Registry + ?Sized> Registry for &T {
    fn all_content_types(&self) -> Vec<&ContentType> {
        (*self).all_content_types()
    }
    fn content_type(&self, key: &str) -> Option<&ContentType> {
        (*self).content_type(key)
    }
    fn content_types_by_base_type(&self, base_type: BaseType) -> Vec<&ContentType> {
        (*self).content_types_by_base_type(base_type)
    }
    fn media_type_keys(&self) -> Vec<&str> {
        (*self).media_type_keys()
    }
}

/// In-memory registry keyed by content type key.
///
/// Registering a key twice replaces the earlier declaration but keeps its
/// original position.
#[derive(Debug, Clone, Default)]
pub struct ContentTypes {
    types: IndexMap<String, ContentType>,
}

impl ContentTypes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a JSON manifest (see [`parse_content_types`]).
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(parse_content_types(json)?.into_iter().collect())
    }

    pub fn register(&mut self, content_type: ContentType) {
        self.types.insert(content_type.key.clone(), content_type);
    }

    pub fn get(&self, key: &str) -> Option<&ContentType> {
        self.types.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.types.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContentType> {
        self.types.values()
    }
}

impl FromIterator<ContentType> for ContentTypes {
    fn from_iter<I: IntoIterator<Item = ContentType>>(iter: I) -> Self {
        let mut registry = Self::new();
        for content_type in iter {
            registry.register(content_type);
        }
        registry
    }
}

impl Registry for ContentTypes {
    fn all_content_types(&self) -> Vec<&ContentType> {
        self.types.values().collect()
    }

    fn content_type(&self, key: &str) -> Option<&ContentType> {
        self.types.get(key)
    }
}
