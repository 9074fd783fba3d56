//! Candidate sets for polymorphic `content` properties.
//!
//! A property's `allowedTypes` selects the baseline (everything registered
//! when absent or empty), `restrictedTypes` removes entries from it. Base type
//! tags expand to their registered subtypes on both sides:
//!
//! - allowing `_image` yields every registered image type, then `_image` itself
//! - restricting `_image` removes `_image` and every registered image type
//!
//! Abstract composition tags (`_component`, `_experience`, `_section`) only
//! expand; they are never candidates themselves.

use std::collections::HashSet;

use indexmap::IndexSet;

use cmsgraph_core::Registry;

use super::refs::builtin_base_type;

/// Resolve the ordered, duplicate-free candidate keys for a polymorphic property.
///
/// `allowed` and `restricted` must already be canonical keys with `_self` resolved.
pub fn resolve_candidates<R>(registry: &R, allowed: &[String], restricted: &[String]) -> Vec<String>
where
    R: Registry + ?Sized,
{
    let baseline: Vec<String> = if allowed.is_empty() {
        registry
            .all_content_types()
            .into_iter()
            .map(|ct| ct.key.clone())
            .collect()
    } else {
        allowed.to_vec()
    };

    let skip = skip_set(registry, restricted);
    let mut emitted: IndexSet<String> = IndexSet::new();

    for entry in baseline {
        let Some(base) = builtin_base_type(&entry) else {
            if !skip.contains(&entry) {
                emitted.insert(entry);
            }
            continue;
        };

        for ct in registry.content_types_by_base_type(base) {
            if !skip.contains(&ct.key) && !emitted.contains(&ct.key) {
                emitted.insert(ct.key.clone());
            }
        }

        if !base.is_abstract() && !skip.contains(&entry) {
            emitted.insert(entry);
        }
    }

    emitted.into_iter().collect()
}

/// Keys excluded by `restricted`, with base tags expanded to their subtypes.
fn skip_set<R>(registry: &R, restricted: &[String]) -> HashSet<String>
where
    R: Registry + ?Sized,
{
    let mut skip = HashSet::new();
    for key in restricted {
        skip.insert(key.clone());
        if let Some(base) = builtin_base_type(key) {
            skip.extend(
                registry
                    .content_types_by_base_type(base)
                    .into_iter()
                    .map(|ct| ct.key.clone()),
            );
        }
    }
    skip
}
