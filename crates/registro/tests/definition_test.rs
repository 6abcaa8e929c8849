#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Declarative definition integration tests.
//!
//! Content models loaded from configuration data and registered
//! through the fake platform.

use registro::definition::{ContentTypeDefinition, TaxonomyDefinition};
use registro::generator::Generator;
use registro::platform::Platform;
use registro_test_utils::{FakePlatform, assert as check};
use serde_json::json;

#[test]
fn content_type_definition_registers_through_platform() {
    let definition: ContentTypeDefinition = serde_json::from_value(json!({
        "name": "event",
        "plural": "Events",
        "options": { "has_archive": true, "menu_icon": "dashicons-calendar" },
        "labels": { "menu_name": "Agenda" },
        "supports": ["thumbnail"],
        "taxonomies": ["event_type"]
    }))
    .unwrap();

    let mut platform = FakePlatform::new();
    definition.into_builder().finalize(&mut platform).unwrap();

    let options = platform.options_for("event").unwrap();
    check::option_eq(options, "has_archive", &json!(true));
    check::option_eq(options, "supports", &json!(["thumbnail"]));
    check::label_eq(options, "name", "Events");
    check::label_eq(options, "menu_name", "Agenda");
    assert_eq!(platform.filters().len(), 1);
}

#[test]
fn taxonomy_definition_extends_existing_taxonomy() {
    let definition: TaxonomyDefinition = serde_json::from_value(json!({
        "name": "category",
        "mode": "extend",
        "labels": { "name": "Sections" },
        "object_types": ["event"]
    }))
    .unwrap();

    let mut platform = FakePlatform::new().with_taxonomy("category");
    definition.into_builder().finalize(&mut platform).unwrap();

    let registered = platform.taxonomy_for("category").unwrap();
    assert_eq!(registered.object_types, ["event"]);
    check::label_eq(&registered.options, "name", "Sections");
}

#[test]
fn definition_mode_defaults_to_create() {
    let definition: TaxonomyDefinition = serde_json::from_value(json!({
        "name": "genre",
        "object_types": ["book"]
    }))
    .unwrap();

    let mut platform = FakePlatform::new();
    definition.into_builder().finalize(&mut platform).unwrap();

    assert!(platform.taxonomy_exists("genre"));
    let registered = platform.taxonomy_for("genre").unwrap();
    check::option_eq(&registered.options, "hierarchical", &json!(false));
}
