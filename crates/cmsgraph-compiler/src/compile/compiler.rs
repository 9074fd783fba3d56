//! Recursive fragment compilation over the content type graph.

use indexmap::{IndexMap, IndexSet};

use cmsgraph_core::{BaseType, Registry};

use super::fragment::{self, Fragment, MEDIA_METADATA, MEDIA_METADATA_FIELD};
use super::snapshot::Snapshot;
use crate::analyze::{builtin_base_type, check_fan_out};
use crate::config::Config;
use crate::diagnostics::Diagnostics;
use crate::{Error, PassResult, Result};

/// Builder-pattern compiler for one root content type.
///
/// Owns the visited set and registry snapshot of a single compilation;
/// neither is shared between compilers.
pub struct Compiler<'a, R: Registry + ?Sized> {
    pub(super) registry: &'a R,
    pub(super) config: &'a Config,
    pub(super) snapshot: Snapshot,
    /// Type named by the outermost call; target of `_self` references.
    pub(super) root: String,
    pub(super) visited: IndexSet<String>,
    pub(super) diagnostics: Diagnostics,
}

impl<'a, R: Registry + ?Sized> Compiler<'a, R> {
    pub fn new(registry: &'a R, config: &'a Config) -> Self {
        Self {
            registry,
            config,
            snapshot: Snapshot::default(),
            root: String::new(),
            visited: IndexSet::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Compile `type_name` and everything it references.
    ///
    /// Fragments come back dependencies first, each name exactly once.
    pub fn compile(mut self, type_name: &str) -> PassResult<Vec<Fragment>> {
        let fragments = self.compile_type(type_name, "")?;
        tracing::debug!(
            root = type_name,
            fragments = fragments.len(),
            warnings = self.diagnostics.warning_count(),
            "compiled content type"
        );
        Ok((fragments, self.diagnostics))
    }

    /// Compile one fragment (`type_name` + `suffix`) and its not yet visited dependencies.
    ///
    /// Returns nothing when the fragment name was already visited: the caller
    /// only needs the spread.
    pub(super) fn compile_type(&mut self, type_name: &str, suffix: &str) -> Result<Vec<Fragment>> {
        let fragment_name = format!("{type_name}{suffix}");
        if self.visited.contains(&fragment_name) {
            return Ok(Vec::new());
        }

        if self.visited.is_empty() {
            self.snapshot = Snapshot::capture(self.registry);
            self.root = type_name.to_string();
            tracing::debug!(root = type_name, "starting root compile");
        }
        self.visited.insert(fragment_name.clone());

        if let Some(base) = builtin_base_type(type_name) {
            return Ok(self.base_fragments(base, fragment_name));
        }

        let Some(content_type) = self.snapshot.get(type_name) else {
            return Err(Error::MissingContentType(type_name.to_string()));
        };

        let base = content_type.base_type;
        let aliased = !base.is_component_hierarchy();
        let mut fields: IndexSet<String> = IndexSet::new();
        let mut deps: IndexMap<String, Fragment> = IndexMap::new();

        if base.is_media()
            && let Some(metadata) = self.media_metadata()
        {
            deps.insert(metadata.name().to_string(), metadata);
        }

        for (name, property) in &content_type.properties {
            if property.is_disabled() {
                tracing::trace!(content_type = type_name, property = %name, "skipping disabled property");
                continue;
            }

            let expansion = self.expand_property(name, property)?;
            check_fan_out(
                &self.root,
                name,
                property,
                expansion.fragments.len(),
                self.config.threshold(),
                &mut self.diagnostics,
            );

            let field = if aliased {
                format!("{}__{name}: {}", content_type.key, expansion.field)
            } else {
                expansion.field
            };
            fields.insert(field);
            collect(&mut deps, expansion.fragments);
        }

        if base.is_media() {
            fields.insert(MEDIA_METADATA_FIELD.to_string());
        }

        if base == BaseType::Experience {
            fields.insert(fragment::spread(super::composition::EXPERIENCE_DATA));
            let composition = self.composition_fragments()?;
            collect(&mut deps, composition);
        }

        let own = Fragment::new(
            fragment_name,
            content_type.key.clone(),
            fragment::typed_body(&fields),
        );
        tracing::trace!(fragment = own.name(), deps = deps.len(), "emitted fragment");

        let mut fragments: Vec<Fragment> = deps.into_values().collect();
        fragments.push(own);
        Ok(fragments)
    }

    /// Fixed selection for a built-in base type; no registry lookup.
    fn base_fragments(&mut self, base: BaseType, fragment_name: String) -> Vec<Fragment> {
        let mut fragments = Vec::new();
        let body = if base.is_media() {
            fragments.extend(self.media_metadata());
            fragment::typed_body([MEDIA_METADATA_FIELD])
        } else {
            fragment::typed_body::<_, &str>([])
        };
        fragments.push(Fragment::new(fragment_name, base.graph_type(), body));
        fragments
    }

    /// The metadata fragment, unless this compile already produced it.
    fn media_metadata(&mut self) -> Option<Fragment> {
        self.visited
            .insert(MEDIA_METADATA.to_string())
            .then(fragment::media_metadata_fragment)
    }
}

fn collect(deps: &mut IndexMap<String, Fragment>, fragments: Vec<Fragment>) {
    for fragment in fragments {
        deps.entry(fragment.name().to_string()).or_insert(fragment);
    }
}
