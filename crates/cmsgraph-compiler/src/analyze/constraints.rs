//! Advisory checks on polymorphic fan-out.
//!
//! Never fails compilation: findings are logged and recorded as warnings.

use cmsgraph_core::{PropertyDef, PropertyKind, TypeRef};

use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Whether a property lets its candidate set grow with the registry.
///
/// - `content`: neither `allowedTypes` nor `restrictedTypes` is given
/// - `array` of `content`: no `allowedTypes`, or `restrictedTypes` present but empty
pub fn is_unconstrained(property: &PropertyDef) -> bool {
    match &property.kind {
        PropertyKind::Content {
            allowed_types,
            restricted_types,
        } => is_unset(allowed_types) && is_unset(restricted_types),
        PropertyKind::Array { items } => match &items.kind {
            PropertyKind::Content {
                allowed_types,
                restricted_types,
            } => {
                is_unset(allowed_types) || restricted_types.as_ref().is_some_and(Vec::is_empty)
            }
            _ => false,
        },
        _ => false,
    }
}

fn is_unset(list: &Option<Vec<TypeRef>>) -> bool {
    list.as_ref().is_none_or(Vec::is_empty)
}

/// Report an unconstrained property whose expansion produced more than
/// `threshold` fragments. Returns whether a warning was emitted.
pub fn check_fan_out(
    root: &str,
    name: &str,
    property: &PropertyDef,
    count: usize,
    threshold: usize,
    diagnostics: &mut Diagnostics,
) -> bool {
    if count <= threshold || !is_unconstrained(property) {
        return false;
    }

    tracing::warn!(
        root,
        property = name,
        count,
        threshold,
        "content type `{root}` generated {count} fragments (threshold {threshold}); \
         add allowedTypes or restrictedTypes to `{name}`"
    );

    diagnostics
        .report(DiagnosticKind::FragmentFanOut)
        .root(root)
        .message(format!(
            "content type `{root}` generated {count} fragments for property `{name}` \
             (threshold {threshold})"
        ))
        .emit();

    true
}
