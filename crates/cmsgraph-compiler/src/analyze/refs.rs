//! Utilities for normalizing type references.

use cmsgraph_core::{BASE_TYPE_PREFIX, BaseType, SELF_REF, TypeRef};

/// Canonical key of a reference.
pub fn key_of(type_ref: &TypeRef) -> &str {
    type_ref.key()
}

/// Check if a key uses the reserved base type prefix.
///
/// Prefix-only: unknown tags like `_widget` also count, and fail later when
/// they cannot be synthesized.
pub fn is_base_type(key: &str) -> bool {
    key.starts_with(BASE_TYPE_PREFIX)
}

/// Built-in base type named by `key`, if it is one.
///
/// Registered keys never carry the base type prefix, so anything else is
/// looked up in the registry.
pub fn builtin_base_type(key: &str) -> Option<BaseType> {
    if !is_base_type(key) {
        return None;
    }
    BaseType::from_tag(key)
}

/// Replace the self-reference token with the root type name.
pub fn resolve_self<'a>(key: &'a str, root: &'a str) -> &'a str {
    if key == SELF_REF { root } else { key }
}

/// Normalize an optional reference list into owned keys, resolving `_self`.
pub fn canonical_keys(refs: Option<&[TypeRef]>, root: &str) -> Vec<String> {
    refs.unwrap_or_default()
        .iter()
        .map(|r| resolve_self(key_of(r), root).to_string())
        .collect()
}
