//! Fragment compiler tests: closure shape, cycles, deduplication, errors.

use cmsgraph_core::{BaseType, ContentType, ContentTypes, IndexingType, PropertyDef};
use indoc::indoc;
use tracing_test::traced_test;

use crate::test_utils::{compile_ok, compile_with, fragment_names, fragment_texts, registry};
use crate::{Config, Error, compile, shot_fragments};

#[test]
fn scalar_properties_in_declaration_order() {
    let types = registry([ContentType::new("ct1", BaseType::Component)
        .property("p1", PropertyDef::string())
        .property("p2", PropertyDef::boolean())]);

    assert_eq!(
        fragment_texts(&types, "ct1"),
        ["fragment ct1 on ct1 { __typename p1 p2 }"]
    );
}

#[test]
fn type_without_properties() {
    let types = registry([ContentType::new("Empty", BaseType::Component)]);

    shot_fragments!(types, "Empty", @"fragment Empty on Empty { __typename }");
}

#[test]
fn plain_content_fields_are_aliased() {
    let types = registry([ContentType::new("ArticlePage", BaseType::Page)
        .property("title", PropertyDef::string())
        .property("views", PropertyDef::integer())]);

    shot_fragments!(
        types,
        "ArticlePage",
        @"fragment ArticlePage on ArticlePage { __typename ArticlePage__title: title ArticlePage__views: views }"
    );
}

#[test]
fn disabled_properties_are_skipped() {
    let types = registry([ContentType::new("Card", BaseType::Component)
        .property("title", PropertyDef::string().indexing(IndexingType::Searchable))
        .property("secret", PropertyDef::string().indexing(IndexingType::Disabled))
        .property("body", PropertyDef::rich_text().indexing(IndexingType::Queryable))]);

    assert_eq!(
        fragment_texts(&types, "Card"),
        ["fragment Card on Card { __typename title body { html json } }"]
    );
}

#[test]
fn disabled_polymorphic_property_compiles_nothing() {
    let types = registry([
        ContentType::new("Card", BaseType::Component).property(
            "related",
            PropertyDef::content()
                .allowed(["Ghost"])
                .indexing(IndexingType::Disabled),
        ),
    ]);

    assert_eq!(
        fragment_texts(&types, "Card"),
        ["fragment Card on Card { __typename }"]
    );
}

#[test]
fn missing_root_type() {
    let types = registry([ContentType::new("Card", BaseType::Component)]);

    let err = compile(&types, "Nope", &Config::default()).unwrap_err();

    assert_eq!(err, Error::MissingContentType("Nope".to_string()));
    assert_eq!(err.to_string(), "missing content type: `Nope`");
}

#[test]
fn missing_referenced_type() {
    let types = registry([ContentType::new("Card", BaseType::Component)
        .property("hero", PropertyDef::component("Hero"))]);

    let err = compile(&types, "Card", &Config::default()).unwrap_err();

    assert_eq!(err, Error::MissingContentType("Hero".to_string()));
}

#[test]
fn unknown_base_tag_is_missing() {
    let types = registry([ContentType::new("Card", BaseType::Component)
        .property("widget", PropertyDef::content().allowed(["_widget"]))]);

    let err = compile(&types, "Card", &Config::default()).unwrap_err();

    assert_eq!(err, Error::MissingContentType("_widget".to_string()));
}

#[test]
fn self_reference_compiles_once() {
    let types = registry([ContentType::new("Node", BaseType::Component)
        .property("next", PropertyDef::content().allowed(["_self"]))]);

    assert_eq!(
        fragment_texts(&types, "Node"),
        ["fragment Node on Node { __typename next { __typename ...Node } }"]
    );
}

#[test]
fn self_reference_resolves_to_root() {
    let types = registry([
        ContentType::new("Outer", BaseType::Component)
            .property("inner", PropertyDef::component("Inner")),
        ContentType::new("Inner", BaseType::Component)
            .property("back", PropertyDef::content().allowed(["_self"])),
    ]);

    assert_eq!(
        fragment_texts(&types, "Outer"),
        [
            "fragment InnerProperty on Inner { __typename back { __typename ...Outer } }",
            "fragment Outer on Outer { __typename inner { ...InnerProperty } }",
        ]
    );
}

#[test]
fn mutual_recursion_terminates() {
    let types = registry([
        ContentType::new("A", BaseType::Component)
            .property("b", PropertyDef::content().allowed(["B"])),
        ContentType::new("B", BaseType::Component)
            .property("a", PropertyDef::content().allowed(["A"])),
    ]);

    assert_eq!(
        fragment_texts(&types, "A"),
        [
            "fragment B on B { __typename a { __typename ...A } }",
            "fragment A on A { __typename b { __typename ...B } }",
        ]
    );
}

#[test]
fn component_cycle_through_suffix() {
    let types = registry([
        ContentType::new("A", BaseType::Component).property("b", PropertyDef::component("B")),
        ContentType::new("B", BaseType::Component)
            .property("a", PropertyDef::content().allowed(["A"])),
    ]);

    assert_eq!(fragment_names(&types, "A"), ["BProperty", "A"]);
}

#[test]
fn shared_type_emitted_once() {
    let types = registry([
        ContentType::new("Root", BaseType::Component)
            .property("first", PropertyDef::content().allowed(["X"]))
            .property("second", PropertyDef::array(PropertyDef::content().allowed(["X"]))),
        ContentType::new("X", BaseType::Component).property("name", PropertyDef::string()),
    ]);

    shot_fragments!(types, "Root", @r"
    fragment X on X { __typename name }
    fragment Root on Root { __typename first { __typename ...X } second { __typename ...X } }
    ");
}

#[test]
fn shared_type_across_nested_types() {
    let types = registry([
        ContentType::new("Root", BaseType::Component)
            .property("left", PropertyDef::component("Left"))
            .property("right", PropertyDef::component("Right")),
        ContentType::new("Left", BaseType::Component)
            .property("x", PropertyDef::content().allowed(["X"])),
        ContentType::new("Right", BaseType::Component)
            .property("x", PropertyDef::content().allowed(["X"])),
        ContentType::new("X", BaseType::Component),
    ]);

    let texts = fragment_texts(&types, "Root");

    assert_eq!(
        fragment_names(&types, "Root"),
        ["X", "LeftProperty", "RightProperty", "Root"]
    );
    assert_eq!(texts.iter().filter(|t| t.starts_with("fragment X ")).count(), 1);
    assert!(texts[1].contains("x { __typename ...X }"));
    assert!(texts[2].contains("x { __typename ...X }"));
}

#[test]
fn empty_candidate_set_keeps_typename() {
    let types = registry([ContentType::new("ct1", BaseType::Page)
        .property("p1", PropertyDef::content().allowed(["_component"]))]);

    assert_eq!(
        fragment_texts(&types, "ct1"),
        ["fragment ct1 on ct1 { __typename ct1__p1: p1 { __typename } }"]
    );
}

#[test]
fn restricted_base_type_removes_subtypes() {
    let types = registry([
        ContentType::new("Home", BaseType::Page)
            .property("teaser", PropertyDef::content().restricted(["_image"])),
        ContentType::new("Photo", BaseType::Image),
        ContentType::new("Banner", BaseType::Image),
        ContentType::new("Clip", BaseType::Video),
        ContentType::new("Card", BaseType::Component),
    ]);

    shot_fragments!(types, "Home", @r"
    fragment MediaMetadata on MediaMetadata { mimeType thumbnail content }
    fragment Clip on Clip { __typename _metadata { ...MediaMetadata } }
    fragment _video on _Video { __typename _metadata { ...MediaMetadata } }
    fragment Card on Card { __typename }
    fragment Home on Home { __typename Home__teaser: teaser { __typename ...Home ...Clip ..._video ...Card } }
    ");
}

#[test]
fn base_type_root() {
    let types = registry([]);

    assert_eq!(
        fragment_texts(&types, "_image"),
        [
            "fragment MediaMetadata on MediaMetadata { mimeType thumbnail content }",
            "fragment _image on _Image { __typename _metadata { ...MediaMetadata } }",
        ]
    );
    assert_eq!(
        fragment_texts(&types, "_page"),
        ["fragment _page on _IPage { __typename }"]
    );
}

#[test]
#[traced_test]
fn fan_out_above_threshold_warns_once() {
    let mut types = vec![ContentType::new("Root", BaseType::Page).property("related", PropertyDef::content())];
    types.extend((1..=5).map(|i| ContentType::new(format!("C{i}"), BaseType::Component)));
    let types = registry(types);
    let config = Config::new().fragment_threshold(3);

    let (fragments, diagnostics) = compile_with(&types, "Root", &config);

    assert_eq!(fragments.len(), 6);
    assert_eq!(diagnostics.warning_count(), 1);
    assert!(!diagnostics.has_errors());
    let message = diagnostics.iter().next().map(ToString::to_string).unwrap_or_default();
    assert!(message.contains("Root"));
    assert!(message.contains('5'));
    assert!(message.contains('3'));
    logs_assert(|lines: &[&str]| {
        let warnings: Vec<_> = lines.iter().filter(|line| line.contains(" WARN ")).collect();
        match warnings.as_slice() {
            [line] if line.contains("`Root` generated 5 fragments (threshold 3)") => Ok(()),
            other => Err(format!("expected one fan-out warning, got {other:?}")),
        }
    });
}

#[test]
#[traced_test]
fn fan_out_at_threshold_is_silent() {
    let mut types = vec![ContentType::new("Root", BaseType::Page).property("related", PropertyDef::content())];
    types.extend((1..=5).map(|i| ContentType::new(format!("C{i}"), BaseType::Component)));
    let types = registry(types);
    let config = Config::new().fragment_threshold(5);

    let (_, diagnostics) = compile_with(&types, "Root", &config);

    assert!(diagnostics.is_empty());
    assert!(!logs_contain("fragments (threshold"));
}

#[test]
fn constrained_fan_out_is_silent() {
    let mut types = vec![ContentType::new("Root", BaseType::Page)
        .property("related", PropertyDef::content().restricted(["Root"]))];
    types.extend((1..=5).map(|i| ContentType::new(format!("C{i}"), BaseType::Component)));
    let types = registry(types);
    let config = Config::new().fragment_threshold(1);

    let (fragments, diagnostics) = compile_with(&types, "Root", &config);

    assert_eq!(fragments.len(), 6);
    assert!(diagnostics.is_empty());
}

#[test]
fn repeated_compiles_are_independent() {
    let types = registry([
        ContentType::new("A", BaseType::Component)
            .property("x", PropertyDef::content().allowed(["X"])),
        ContentType::new("X", BaseType::Component),
    ]);

    let first = compile_ok(&types, "A").0;
    let second = compile_ok(&types, "A").0;

    assert_eq!(first, second);
    assert_eq!(fragment_names(&types, "X"), ["X"]);
}

#[test]
fn compile_all_reports_per_type() {
    let types = registry([
        ContentType::new("Good", BaseType::Component).property("title", PropertyDef::string()),
        ContentType::new("Broken", BaseType::Component)
            .property("hero", PropertyDef::component("Hero")),
    ]);

    let results = crate::compile_all(&types, &Config::default());

    assert_eq!(results.keys().collect::<Vec<_>>(), ["Good", "Broken"]);
    assert!(results["Good"].is_ok());
    assert_eq!(
        results["Broken"].as_ref().unwrap_err(),
        &Error::MissingContentType("Hero".to_string())
    );
}

#[test]
fn compiles_parsed_manifest() {
    let manifest = indoc! {r#"
        {
          "contentTypes": [
            {
              "key": "ArticlePage",
              "baseType": "_page",
              "properties": {
                "title": { "type": "string", "indexingType": "searchable" },
                "internal": { "type": "string", "indexingType": "disabled" },
                "image": { "type": "contentReference" },
                "blocks": {
                  "type": "array",
                  "items": { "type": "content", "allowedTypes": ["Quote"] }
                }
              }
            },
            {
              "key": "Quote",
              "baseType": "_component",
              "properties": { "text": { "type": "richText" } }
            }
          ]
        }
    "#};
    let types = ContentTypes::from_json(manifest).unwrap();

    shot_fragments!(types, "ArticlePage", @r"
    fragment Quote on Quote { __typename text { html json } }
    fragment ArticlePage on ArticlePage { __typename ArticlePage__title: title ArticlePage__image: image { url { type default } } ArticlePage__blocks: blocks { __typename ...Quote } }
    ");
}

#[test]
fn parsed_properties_compile_in_declaration_order() {
    let manifest = indoc! {r#"
        [
          {
            "key": "ct1",
            "baseType": "_component",
            "properties": {
              "p2": { "type": "string" },
              "p1": { "type": "boolean" }
            }
          }
        ]
    "#};
    let types = ContentTypes::from_json(manifest).unwrap();

    assert_eq!(
        fragment_texts(&types, "ct1"),
        ["fragment ct1 on ct1 { __typename p2 p1 }"]
    );
}
