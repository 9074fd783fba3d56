//! Analysis helpers used by the fragment compiler.
//!
//! - `refs`: canonical keys for type references, base type classification
//! - `candidates`: concrete candidate sets for polymorphic properties
//! - `constraints`: advisory fan-out checks

pub mod candidates;
pub mod constraints;
pub mod refs;


pub use candidates::resolve_candidates;
pub use constraints::{check_fan_out, is_unconstrained};
pub use refs::{builtin_base_type, canonical_keys, is_base_type, key_of, resolve_self};
