//! Test utilities and snapshot macros.

use cmsgraph_core::{ContentType, ContentTypes, Registry};

use crate::{Config, Diagnostics, Fragment, compile};

/// Registry fixture in the given registration order.
pub fn registry<I>(types: I) -> ContentTypes
where
    I: IntoIterator<Item = ContentType>,
{
    types.into_iter().collect()
}

/// Compile with default config, panicking on fatal errors.
pub fn compile_ok<R: Registry + ?Sized>(registry: &R, root: &str) -> (Vec<Fragment>, Diagnostics) {
    compile_with(registry, root, &Config::default())
}

pub fn compile_with<R: Registry + ?Sized>(
    registry: &R,
    root: &str,
    config: &Config,
) -> (Vec<Fragment>, Diagnostics) {
    match compile(registry, root, config) {
        Ok(result) => result,
        Err(err) => panic!("compile `{root}` failed: {err}"),
    }
}

/// Fragment texts, dependencies first.
pub fn fragment_texts<R: Registry + ?Sized>(registry: &R, root: &str) -> Vec<String> {
    compile_ok(registry, root)
        .0
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Fragment names in emission order.
pub fn fragment_names<R: Registry + ?Sized>(registry: &R, root: &str) -> Vec<String> {
    compile_ok(registry, root)
        .0
        .iter()
        .map(|f| f.name().to_string())
        .collect()
}

/// One fragment per line.
pub fn render_fragments<R: Registry + ?Sized>(registry: &R, root: &str) -> String {
    fragment_texts(registry, root).join("\n")
}

/// Inline snapshot of the fragments compiled for a root type.
#[macro_export]
macro_rules! shot_fragments {
    ($registry:expr, $root:literal, @$snapshot:literal) => {{
        let output = $crate::test_utils::render_fragments(&$registry, $root);
        insta::assert_snapshot!(output, @$snapshot);
    }};
}

/// Inline snapshot of the query document assembled for a root type.
#[macro_export]
macro_rules! shot_query {
    ($registry:expr, $root:literal, @$snapshot:literal) => {{
        let output = match $crate::assemble(&$registry, $root, &$crate::Config::default()) {
            Ok((document, _)) => document.to_string(),
            Err(err) => panic!("assemble `{}` failed: {err}", $root),
        };
        insta::assert_snapshot!(output, @$snapshot);
    }};
}
