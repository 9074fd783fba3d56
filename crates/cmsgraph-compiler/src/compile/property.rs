//! Per-property selection expansion.

use indexmap::IndexSet;

use cmsgraph_core::{PropertyDef, PropertyKind, Registry, TypeRef};

use super::compiler::Compiler;
use super::fragment::{self, COMPONENT_SUFFIX, Fragment, URL_SHAPE};
use crate::Result;
use crate::analyze::{canonical_keys, key_of, resolve_candidates, resolve_self};

/// Selection field for one property plus the fragments it newly introduced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    pub field: String,
    pub fragments: Vec<Fragment>,
}

impl Expansion {
    fn leaf(field: String) -> Self {
        Self {
            field,
            fragments: Vec::new(),
        }
    }
}

impl<R: Registry + ?Sized> Compiler<'_, R> {
    pub(super) fn expand_property(&mut self, name: &str, property: &PropertyDef) -> Result<Expansion> {
        let expansion = match &property.kind {
            PropertyKind::String
            | PropertyKind::Boolean
            | PropertyKind::Integer
            | PropertyKind::Float
            | PropertyKind::Binary
            | PropertyKind::Json
            | PropertyKind::DateTime => Expansion::leaf(name.to_string()),
            PropertyKind::RichText => Expansion::leaf(format!("{name} {{ html json }}")),
            PropertyKind::Url => Expansion::leaf(format!("{name} {URL_SHAPE}")),
            PropertyKind::Link => {
                Expansion::leaf(format!("{name} {{ text title target url {URL_SHAPE} }}"))
            }
            PropertyKind::ContentReference => {
                Expansion::leaf(format!("{name} {{ url {URL_SHAPE} }}"))
            }
            PropertyKind::Component { content_type } => self.expand_component(name, content_type)?,
            PropertyKind::Content {
                allowed_types,
                restricted_types,
            } => self.expand_content(name, allowed_types.as_deref(), restricted_types.as_deref())?,
            // List-ness does not change the selection shape.
            PropertyKind::Array { items } => self.expand_property(name, items)?,
        };
        Ok(expansion)
    }

    fn expand_component(&mut self, name: &str, content_type: &TypeRef) -> Result<Expansion> {
        let key = resolve_self(key_of(content_type), &self.root).to_string();
        let fragments = self.compile_type(&key, COMPONENT_SUFFIX)?;
        Ok(Expansion {
            field: format!("{name} {{ ...{key}{COMPONENT_SUFFIX} }}"),
            fragments,
        })
    }

    fn expand_content(
        &mut self,
        name: &str,
        allowed: Option<&[TypeRef]>,
        restricted: Option<&[TypeRef]>,
    ) -> Result<Expansion> {
        let allowed = canonical_keys(allowed, &self.root);
        let restricted = canonical_keys(restricted, &self.root);
        let candidates = resolve_candidates(&self.snapshot, &allowed, &restricted);

        let mut fragments = Vec::new();
        let mut spreads: IndexSet<String> = IndexSet::new();
        for candidate in candidates {
            fragments.extend(self.compile_type(&candidate, "")?);
            spreads.insert(fragment::spread(&candidate));

            if let Some(base) = self.snapshot.media_base(&candidate) {
                fragments.extend(self.compile_type(base.tag(), "")?);
                spreads.insert(fragment::spread(base.tag()));
            }
        }

        Ok(Expansion {
            field: format!("{name} {{ {} }}", fragment::typed_body(&spreads)),
            fragments,
        })
    }
}
