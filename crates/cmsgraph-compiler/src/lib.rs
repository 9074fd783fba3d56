//! cmsgraph compiler: content type declarations to graph query text.
//!
//! This crate turns a registry of content type declarations into named query
//! fragments and executable query documents:
//! - `analyze` - type reference resolution, candidate sets for polymorphic
//!   properties, fan-out constraint checks
//! - `compile` - recursive fragment compilation over the type graph
//! - `query` - query document assembly
//! - `diagnostics` - advisory messages collected during compilation
//! - `config` - compiler settings

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod analyze;
pub mod compile;
pub mod config;
pub mod diagnostics;
pub mod query;

#[cfg(test)]
pub mod test_utils;

use indexmap::IndexMap;

use cmsgraph_core::Registry;

pub use compile::{Compiler, Fragment, Snapshot};
pub use config::Config;
pub use diagnostics::{DiagnosticKind, Diagnostics, Severity};
pub use query::{Assembler, Document};

/// Result type for passes that produce both output and diagnostics.
///
/// Each pass returns its typed output alongside any diagnostics it collected.
/// Fatal errors (like a missing content type) use the outer `Result`.
pub type PassResult<T> = std::result::Result<(T, Diagnostics), Error>;

/// Errors that stop compilation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A reference names neither a registered content type nor a base type.
    #[error("missing content type: `{0}`")]
    MissingContentType(String),
}

impl Error {
    /// Record this error as a diagnostic attributed to the compile of `root`.
    pub fn report(&self, root: &str, diagnostics: &mut Diagnostics) {
        match self {
            Self::MissingContentType(name) => diagnostics
                .report(DiagnosticKind::MissingContentType)
                .root(root)
                .message(format!("`{name}`"))
                .emit(),
        }
    }
}

/// Result type for compiler operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Compile the fragment closure of `type_name`, dependencies first.
pub fn compile<R>(registry: &R, type_name: &str, config: &Config) -> PassResult<Vec<Fragment>>
where
    R: Registry + ?Sized,
{
    Compiler::new(registry, config).compile(type_name)
}

/// Assemble an executable query document rooted at `type_name`.
pub fn assemble<R>(registry: &R, type_name: &str, config: &Config) -> PassResult<Document>
where
    R: Registry + ?Sized,
{
    Assembler::new(registry)
        .config(config.clone())
        .assemble(type_name)
}

/// Compile every registered content type, each as an independent root.
pub fn compile_all<R>(registry: &R, config: &Config) -> IndexMap<String, PassResult<Vec<Fragment>>>
where
    R: Registry + ?Sized,
{
    registry
        .all_content_types()
        .into_iter()
        .map(|ct| (ct.key.clone(), compile(registry, &ct.key, config)))
        .collect()
}
