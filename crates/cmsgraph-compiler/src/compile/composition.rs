//! Experience composition fragments.
//!
//! An experience carries a tree of composition nodes. Structure nodes recurse
//! into child nodes; component nodes hold one instance of any type that may be
//! placed in a composition.

use indexmap::IndexSet;

use cmsgraph_core::{BaseType, Registry};

use super::compiler::Compiler;
use super::fragment::{self, Fragment};
use crate::Result;

pub const EXPERIENCE_DATA: &str = "ExperienceData";
pub const COMPOSITION_NODE_DATA: &str = "CompositionNodeData";
pub const COMPOSITION_COMPONENT_DATA: &str = "CompositionComponentData";

const NODE_FIELDS: &str = "key type nodeType layoutType displayName displayTemplateKey \
                           displaySettings { key value }";

impl<R: Registry + ?Sized> Compiler<'_, R> {
    /// Fragments every experience spreads through `...ExperienceData`.
    ///
    /// Emitted once per compile, after the fragments of all eligible types.
    pub(super) fn composition_fragments(&mut self) -> Result<Vec<Fragment>> {
        if self.visited.contains(EXPERIENCE_DATA) {
            return Ok(Vec::new());
        }
        for name in [EXPERIENCE_DATA, COMPOSITION_NODE_DATA, COMPOSITION_COMPONENT_DATA] {
            self.visited.insert(name.to_string());
        }

        let include_forms = self.config.includes_form_elements();
        let eligible: Vec<String> = self
            .snapshot
            .all_content_types()
            .into_iter()
            .filter(|ct| ct.is_composition_eligible())
            .filter(|ct| include_forms || !ct.is_form_element())
            .map(|ct| ct.key.clone())
            .collect();
        tracing::trace!(eligible = eligible.len(), include_forms, "building composition fragments");

        let mut fragments = Vec::new();
        let mut spreads: IndexSet<String> = IndexSet::new();
        for key in &eligible {
            fragments.extend(self.compile_type(key, "")?);
            spreads.insert(fragment::spread(key));
        }

        fragments.push(Fragment::new(
            COMPOSITION_COMPONENT_DATA,
            BaseType::Component.graph_type(),
            fragment::typed_body(&spreads),
        ));
        fragments.push(Fragment::new(
            COMPOSITION_NODE_DATA,
            "ICompositionNode",
            format!(
                "__typename {NODE_FIELDS} \
                 ... on CompositionStructureNode {{ nodes @recursive }} \
                 ... on CompositionComponentNode {{ component {{ ...{COMPOSITION_COMPONENT_DATA} }} }}"
            ),
        ));
        fragments.push(Fragment::new(
            EXPERIENCE_DATA,
            BaseType::Experience.graph_type(),
            format!("composition {{ ...{COMPOSITION_NODE_DATA} }}"),
        ));
        Ok(fragments)
    }
}
