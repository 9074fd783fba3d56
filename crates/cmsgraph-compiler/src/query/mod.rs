//! Query document assembly.
//!
//! Wraps the fragment closure of a root type in the fixed `FetchContent`
//! query, which filters content items and spreads the root fragment.

use std::fmt;

use cmsgraph_core::Registry;

use crate::compile::{Compiler, Fragment};
use crate::config::Config;
use crate::PassResult;


/// Name of the emitted query operation.
pub const QUERY_NAME: &str = "FetchContent";

/// An executable query document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: String,
    fragments: Vec<Fragment>,
}

impl Document {
    pub fn new(root: impl Into<String>, fragments: Vec<Fragment>) -> Self {
        Self {
            root: root.into(),
            fragments,
        }
    }

    /// Fragment spread inside the item selection.
    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn fragment_names(&self) -> impl Iterator<Item = &str> {
        self.fragments.iter().map(Fragment::name)
    }

    pub fn contains_fragment(&self, name: &str) -> bool {
        self.fragment_names().any(|n| n == name)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            writeln!(f, "{fragment}")?;
        }
        writeln!(f, "query {QUERY_NAME}($where: _ContentWhereInput) {{")?;
        writeln!(f, "  _Content(where: $where) {{")?;
        writeln!(f, "    item {{")?;
        writeln!(f, "      __typename")?;
        writeln!(f, "      ...{}", self.root)?;
        writeln!(f, "    }}")?;
        writeln!(f, "  }}")?;
        write!(f, "}}")
    }
}

/// Builds query documents against a registry.
pub struct Assembler<'a, R: Registry + ?Sized> {
    registry: &'a R,
    config: Config,
}

impl<'a, R: Registry + ?Sized> Assembler<'a, R> {
    pub fn new(registry: &'a R) -> Self {
        Self {
            registry,
            config: Config::default(),
        }
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Compile `root` and wrap its fragments in the query template.
    pub fn assemble(&self, root: &str) -> PassResult<Document> {
        self.assemble_with(root, &self.config)
    }

    /// Like [`Self::assemble`], overriding the composition form element toggle.
    pub fn assemble_with_form_elements(&self, root: &str, form_elements: bool) -> PassResult<Document> {
        let config = self.config.clone().form_elements(form_elements);
        self.assemble_with(root, &config)
    }

    fn assemble_with(&self, root: &str, config: &Config) -> PassResult<Document> {
        let (fragments, diagnostics) = Compiler::new(self.registry, config).compile(root)?;
        tracing::debug!(root, fragments = fragments.len(), "assembled query document");
        Ok((Document::new(root, fragments), diagnostics))
    }
}
