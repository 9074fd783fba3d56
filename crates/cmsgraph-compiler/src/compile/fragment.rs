//! Emitted query fragments and the fixed selection shapes they are built from.

use std::fmt;

/// A named, reusable selection block: `fragment <name> on <type> { <body> }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    name: String,
    type_condition: String,
    body: String,
}

impl Fragment {
    pub fn new(
        name: impl Into<String>,
        type_condition: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_condition: type_condition.into(),
            body: body.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_condition(&self) -> &str {
        &self.type_condition
    }

    /// Selection set between the braces.
    pub fn body(&self) -> &str {
        &self.body
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fragment {} on {} {{ {} }}",
            self.name, self.type_condition, self.body
        )
    }
}

/// Fragment spread syntax.
pub(crate) fn spread(name: &str) -> String {
    format!("...{name}")
}

/// Join a `__typename`-led selection body.
pub(crate) fn typed_body<I, S>(fields: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut body = String::from("__typename");
    for field in fields {
        body.push(' ');
        body.push_str(field.as_ref());
    }
    body
}

/// Suffix giving single-component references their own fragment identity.
pub const COMPONENT_SUFFIX: &str = "Property";

pub const MEDIA_METADATA: &str = "MediaMetadata";
pub(crate) const MEDIA_METADATA_FIELD: &str = "_metadata { ...MediaMetadata }";

pub(crate) fn media_metadata_fragment() -> Fragment {
    Fragment::new(MEDIA_METADATA, "MediaMetadata", "mimeType thumbnail content")
}

pub(crate) const URL_SHAPE: &str = "{ type default }";
