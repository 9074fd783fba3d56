//! Fragment compilation.
//!
//! Walks the content type graph from one root type and emits a named fragment
//! per reachable type. A visited set scoped to the compilation guards against
//! cycles and guarantees one definition per fragment name.

mod composition;
mod compiler;
mod fragment;
mod property;
mod snapshot;

#[cfg(test)]
mod compile_tests;

pub use composition::{COMPOSITION_COMPONENT_DATA, COMPOSITION_NODE_DATA, EXPERIENCE_DATA};
pub use compiler::Compiler;
pub use fragment::{COMPONENT_SUFFIX, Fragment, MEDIA_METADATA};
pub use property::Expansion;
pub use snapshot::Snapshot;
