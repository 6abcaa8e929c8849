#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Taxonomy builder integration tests.

use registro::columns::ColumnSpec;
use registro::error::RegistroError;
use registro::generator::Generator;
use registro::labels::LabelKey;
use registro::query::{ListQuery, QueryView, params};
use registro::Taxonomy;
use registro_test_utils::{FakePlatform, assert as check, base_columns};
use serde_json::json;
use uuid::Uuid;

// -------------------------------------------------------------------------
// Create mode
// -------------------------------------------------------------------------

#[test]
fn create_registers_with_object_types() {
    let mut platform = FakePlatform::new();
    let mut genres = Taxonomy::add("genre")
        .hierarchical(true)
        .show_admin_column(true)
        .object_types(["book", "album"]);

    genres.finalize(&mut platform).unwrap();

    let registered = platform.taxonomy_for("genre").unwrap();
    assert_eq!(registered.object_types, ["book", "album"]);
    check::option_eq(&registered.options, "hierarchical", &json!(true));
    check::option_eq(&registered.options, "show_admin_column", &json!(true));
    check::label_eq(&registered.options, "name", "Genres");
    check::label_eq(&registered.options, "new_item_name", "New Genre Name");
}

#[test]
fn create_fails_when_name_taken() {
    let mut platform = FakePlatform::new().with_taxonomy("genre");
    let mut genres = Taxonomy::add("genre");

    let err = genres.finalize(&mut platform).unwrap_err();
    assert!(matches!(err, RegistroError::AlreadyExists { .. }));
}

#[test]
fn second_finalize_fails() {
    let mut platform = FakePlatform::new();
    let mut genres = Taxonomy::add("genre");

    genres.finalize(&mut platform).unwrap();
    let err = genres.finalize(&mut platform).unwrap_err();

    assert!(matches!(err, RegistroError::AlreadyFinalized { .. }));
}

// -------------------------------------------------------------------------
// Extend mode
// -------------------------------------------------------------------------

#[test]
fn extend_missing_taxonomy_fails() {
    let mut platform = FakePlatform::new();
    let mut categories = Taxonomy::extend("category");

    let err = categories.finalize(&mut platform).unwrap_err();
    assert!(matches!(err, RegistroError::NotFound { .. }));
}

#[test]
fn extend_associates_types_and_pushes_labels() {
    let mut platform = FakePlatform::new().with_taxonomy("category");
    let mut categories = Taxonomy::extend("category")
        .label(LabelKey::Name, "Sections")
        .object_type("book");

    categories.finalize(&mut platform).unwrap();

    let registered = platform.taxonomy_for("category").unwrap();
    assert_eq!(registered.object_types, ["book"]);
    check::label_eq(&registered.options, "name", "Sections");
}

#[test]
fn extend_installs_term_filter_for_associated_types() {
    let mut platform = FakePlatform::new().with_taxonomy("category");
    let mut categories = Taxonomy::extend("category").object_types(["book", "album"]);

    categories.finalize(&mut platform).unwrap();
    assert_eq!(platform.filters().len(), 1);

    let mut category_view = ListQuery::new(QueryView::Category);
    platform.run_filters(&mut category_view);
    assert_eq!(
        category_view.get(params::ITEM_TYPE),
        Some(&json!(["book", "album"]))
    );

    let mut tag_view = ListQuery::new(QueryView::Tag);
    platform.run_filters(&mut tag_view);
    assert_eq!(
        tag_view.get(params::ITEM_TYPE),
        Some(&json!(["book", "album"]))
    );

    let mut search = ListQuery::new(QueryView::Search);
    platform.run_filters(&mut search);
    assert!(search.get(params::ITEM_TYPE).is_none());
}

#[test]
fn extend_term_filter_predicate_is_overridable() {
    let mut platform = FakePlatform::new().with_taxonomy("category");
    let mut categories = Taxonomy::extend("category")
        .object_type("book")
        .filter_terms_when(|query| query.view() == QueryView::Archive);

    categories.finalize(&mut platform).unwrap();

    let mut archive = ListQuery::new(QueryView::Archive);
    platform.run_filters(&mut archive);
    assert_eq!(archive.get(params::ITEM_TYPE), Some(&json!(["book"])));

    let mut category_view = ListQuery::new(QueryView::Category);
    platform.run_filters(&mut category_view);
    assert!(category_view.get(params::ITEM_TYPE).is_none());
}

#[test]
fn extend_without_associations_installs_no_filter() {
    let mut platform = FakePlatform::new().with_taxonomy("category");
    let mut categories = Taxonomy::extend("category").label(LabelKey::Name, "Sections");

    categories.finalize(&mut platform).unwrap();

    assert!(platform.filters().is_empty());
}

// -------------------------------------------------------------------------
// Term list columns
// -------------------------------------------------------------------------

#[test]
fn term_columns_compute_and_transform_cells() {
    let mut platform = FakePlatform::new();
    let mut genres = Taxonomy::add("genre");
    genres
        .columns()
        .add(ColumnSpec::new("usage").position(1))
        .set_populate(
            "usage",
            Box::new(|content: String, _column: &str, _term: Uuid| format!("<b>{content}</b>")),
        );

    genres.finalize(&mut platform).unwrap();

    let hooks = platform.term_hooks_for("genre").unwrap();
    let columns = hooks.columns(&base_columns());
    let ids: Vec<&str> = columns.keys().map(String::as_str).collect();
    assert_eq!(ids, ["title", "usage", "author", "date"]);

    let term = Uuid::now_v7();
    assert_eq!(hooks.filter_cell("12".to_string(), "usage", term), "<b>12</b>");
    assert_eq!(hooks.filter_cell("12".to_string(), "title", term), "12");
}
