#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for cmsgraph content type declarations.
//!
//! Two layers:
//! - **Declaration layer**: 1:1 mapping to the content type manifest (JSON)
//! - **Registry layer**: read-only lookups over a set of declarations
//!
//! Declarations are created once when the registry is populated and are
//! treated as immutable afterwards.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

mod registry;


pub use registry::{ContentTypes, Registry};

/// Prefix shared by all built-in base type tags (`_image`, `_component`, ...).
pub const BASE_TYPE_PREFIX: char = '_';

/// Reference token meaning "the content type currently being compiled".
pub const SELF_REF: &str = "_self";

// ============================================================================
// Base Types
// ============================================================================

/// Built-in kind that every content type declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseType {
    #[serde(rename = "_component")]
    Component,
    #[serde(rename = "_experience")]
    Experience,
    #[serde(rename = "_section")]
    Section,
    #[serde(rename = "_image")]
    Image,
    #[serde(rename = "_video")]
    Video,
    #[serde(rename = "_media")]
    Media,
    #[serde(rename = "_page")]
    Page,
    #[serde(rename = "_folder")]
    Folder,
    #[serde(rename = "_element")]
    Element,
}

impl BaseType {
    pub const ALL: [BaseType; 9] = [
        BaseType::Component,
        BaseType::Experience,
        BaseType::Section,
        BaseType::Image,
        BaseType::Video,
        BaseType::Media,
        BaseType::Page,
        BaseType::Folder,
        BaseType::Element,
    ];

    /// The reserved tag used in manifests and type references.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Component => "_component",
            Self::Experience => "_experience",
            Self::Section => "_section",
            Self::Image => "_image",
            Self::Video => "_video",
            Self::Media => "_media",
            Self::Page => "_page",
            Self::Folder => "_folder",
            Self::Element => "_element",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|base| base.tag() == tag)
    }

    /// Image, video and generic media assets.
    pub fn is_media(self) -> bool {
        matches!(self, Self::Image | Self::Video | Self::Media)
    }

    /// Structural markers that are never queried directly.
    pub fn is_abstract(self) -> bool {
        matches!(self, Self::Component | Self::Experience | Self::Section)
    }

    /// Kinds whose fields are emitted without a type-key alias.
    pub fn is_component_hierarchy(self) -> bool {
        matches!(self, Self::Component | Self::Experience)
    }

    /// Type condition of the remote schema's interface for this kind.
    pub fn graph_type(self) -> &'static str {
        match self {
            Self::Component => "_IComponent",
            Self::Experience => "_IExperience",
            Self::Section => "_ISection",
            Self::Image => "_Image",
            Self::Video => "_Video",
            Self::Media => "_Media",
            Self::Page => "_IPage",
            Self::Folder => "_IFolder",
            Self::Element => "_IElement",
        }
    }
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// ============================================================================
// Declaration Layer
// ============================================================================

/// Reference to a content type: a key (base tag, `_self`, or user key) or an
/// inline declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeRef {
    Key(String),
    Type(Box<ContentType>),
}

impl TypeRef {
    /// Canonical key of the referenced type.
    pub fn key(&self) -> &str {
        match self {
            TypeRef::Key(key) => key,
            TypeRef::Type(ct) => &ct.key,
        }
    }
}

impl From<&str> for TypeRef {
    fn from(key: &str) -> Self {
        TypeRef::Key(key.to_string())
    }
}

impl From<String> for TypeRef {
    fn from(key: String) -> Self {
        TypeRef::Key(key)
    }
}

impl From<BaseType> for TypeRef {
    fn from(base: BaseType) -> Self {
        TypeRef::Key(base.tag().to_string())
    }
}

impl From<&ContentType> for TypeRef {
    fn from(ct: &ContentType) -> Self {
        TypeRef::Type(Box::new(ct.clone()))
    }
}

/// Search indexing mode of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IndexingType {
    Disabled,
    Queryable,
    Searchable,
}

/// Placement of a content type inside an experience composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompositionBehavior {
    SectionEnabled,
    ElementEnabled,
    FormsElementEnabled,
}

/// Shape of a property value, discriminated by the manifest's `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PropertyKind {
    String,
    Boolean,
    Integer,
    Float,
    Binary,
    Json,
    DateTime,
    RichText,
    Url,
    Link,
    ContentReference,
    /// Exactly one instance of the referenced type.
    #[serde(rename_all = "camelCase")]
    Component { content_type: TypeRef },
    /// Any instance of the candidate types.
    #[serde(rename_all = "camelCase")]
    Content {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        allowed_types: Option<Vec<TypeRef>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        restricted_types: Option<Vec<TypeRef>>,
    },
    /// Zero or more values of `items`.
    Array { items: Box<PropertyDef> },
}

/// A declared property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDef {
    #[serde(flatten)]
    pub kind: PropertyKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexing_type: Option<IndexingType>,
}

impl PropertyDef {
    pub fn new(kind: PropertyKind) -> Self {
        Self {
            kind,
            indexing_type: None,
        }
    }

    pub fn string() -> Self {
        Self::new(PropertyKind::String)
    }

    pub fn boolean() -> Self {
        Self::new(PropertyKind::Boolean)
    }

    pub fn integer() -> Self {
        Self::new(PropertyKind::Integer)
    }

    pub fn rich_text() -> Self {
        Self::new(PropertyKind::RichText)
    }

    pub fn url() -> Self {
        Self::new(PropertyKind::Url)
    }

    pub fn link() -> Self {
        Self::new(PropertyKind::Link)
    }

    pub fn content_reference() -> Self {
        Self::new(PropertyKind::ContentReference)
    }

    pub fn component(content_type: impl Into<TypeRef>) -> Self {
        Self::new(PropertyKind::Component {
            content_type: content_type.into(),
        })
    }

    /// Unconstrained polymorphic property.
    pub fn content() -> Self {
        Self::new(PropertyKind::Content {
            allowed_types: None,
            restricted_types: None,
        })
    }

    pub fn array(items: PropertyDef) -> Self {
        Self::new(PropertyKind::Array {
            items: Box::new(items),
        })
    }

    /// Set `allowedTypes`. Ignored for non-`content` properties.
    pub fn allowed<I, T>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeRef>,
    {
        if let PropertyKind::Content { allowed_types, .. } = &mut self.kind {
            *allowed_types = Some(types.into_iter().map(Into::into).collect());
        }
        self
    }

    /// Set `restrictedTypes`. Ignored for non-`content` properties.
    pub fn restricted<I, T>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeRef>,
    {
        if let PropertyKind::Content {
            restricted_types, ..
        } = &mut self.kind
        {
            *restricted_types = Some(types.into_iter().map(Into::into).collect());
        }
        self
    }

    pub fn indexing(mut self, indexing_type: IndexingType) -> Self {
        self.indexing_type = Some(indexing_type);
        self
    }

    /// Disabled properties are left out of compiled selections.
    pub fn is_disabled(&self) -> bool {
        self.indexing_type == Some(IndexingType::Disabled)
    }
}

/// A content type declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentType {
    pub key: String,
    pub base_type: BaseType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default)]
    pub properties: IndexMap<String, PropertyDef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub composition_behaviors: Vec<CompositionBehavior>,
    /// Advisory list of child types; not consumed by the compiler.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub may_contain_types: Vec<TypeRef>,
}

impl ContentType {
    pub fn new(key: impl Into<String>, base_type: BaseType) -> Self {
        Self {
            key: key.into(),
            base_type,
            display_name: None,
            properties: IndexMap::new(),
            composition_behaviors: Vec::new(),
            may_contain_types: Vec::new(),
        }
    }

    /// Append a property, keeping declaration order.
    pub fn property(mut self, name: impl Into<String>, def: PropertyDef) -> Self {
        self.properties.insert(name.into(), def);
        self
    }

    pub fn behavior(mut self, behavior: CompositionBehavior) -> Self {
        if !self.composition_behaviors.contains(&behavior) {
            self.composition_behaviors.push(behavior);
        }
        self
    }

    /// Whether the type may be placed inside an experience composition.
    pub fn is_composition_eligible(&self) -> bool {
        !self.composition_behaviors.is_empty()
    }

    pub fn is_form_element(&self) -> bool {
        self.composition_behaviors
            .contains(&CompositionBehavior::FormsElementEnabled)
    }
}

/// Parse a content type manifest.
///
/// Accepts either a bare array of declarations or an object with a
/// `contentTypes` array.
pub fn parse_content_types(json: &str) -> Result<Vec<ContentType>, serde_json::Error> {
    let manifest: Manifest = serde_json::from_str(json)?;
    Ok(match manifest {
        Manifest::List(types) | Manifest::Wrapped { content_types: types } => types,
    })
}

/// Accepted manifest shapes. Deserialized directly so `properties` keep
/// their declaration order.
#[derive(Deserialize)]
#[serde(untagged)]
enum Manifest {
    List(Vec<ContentType>),
    #[serde(rename_all = "camelCase")]
    Wrapped { content_types: Vec<ContentType> },
}
