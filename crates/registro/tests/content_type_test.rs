#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Content type builder integration tests.
//!
//! Drives both lifecycle modes against the recording fake platform.

use registro::columns::{ColumnSpec, SortKey};
use registro::error::RegistroError;
use registro::generator::Generator;
use registro::labels::LabelKey;
use registro::platform::Platform;
use registro::query::{ListQuery, QueryView, params};
use registro::ContentType;
use registro_test_utils::{FakePlatform, assert as check, base_columns};
use serde_json::json;
use uuid::Uuid;

// -------------------------------------------------------------------------
// Create mode
// -------------------------------------------------------------------------

#[test]
fn create_registers_assembled_options() {
    let mut platform = FakePlatform::new();
    let mut books = ContentType::add("book")
        .menu_icon("dashicons-book-alt")
        .has_archive(true)
        .supports("thumbnail")
        .supports("excerpt");

    books.finalize(&mut platform).unwrap();

    assert!(platform.content_type_exists("book"));
    let options = platform.options_for("book").unwrap();
    check::option_eq(options, "public", &json!(true));
    check::option_eq(options, "menu_icon", &json!("dashicons-book-alt"));
    check::option_eq(options, "supports", &json!(["thumbnail", "excerpt"]));
    check::option_eq(options, "rewrite", &json!({ "slug": "book" }));
    check::label_eq(options, "name", "Books");
    check::label_eq(options, "add_new_item", "Add New Book");
}

#[test]
fn create_honors_name_and_label_overrides() {
    let mut platform = FakePlatform::new();
    let mut people = ContentType::add("person")
        .plural("People")
        .label(LabelKey::MenuName, "Team");

    people.finalize(&mut platform).unwrap();

    let options = platform.options_for("person").unwrap();
    check::label_eq(options, "name", "People");
    check::label_eq(options, "menu_name", "Team");
    check::label_eq(options, "singular_name", "Person");
}

#[test]
fn create_fails_when_name_taken() {
    let mut platform = FakePlatform::new().with_content_type("book");
    let mut books = ContentType::add("book").has_archive(true);

    let err = books.finalize(&mut platform).unwrap_err();
    assert!(matches!(err, RegistroError::AlreadyExists { .. }));

    // The pre-seeded entry is untouched: no registration call went out.
    assert!(platform.options_for("book").unwrap().is_empty());
}

#[test]
fn second_finalize_fails() {
    let mut platform = FakePlatform::new();
    let mut books = ContentType::add("book");

    books.finalize(&mut platform).unwrap();
    let err = books.finalize(&mut platform).unwrap_err();

    assert!(matches!(err, RegistroError::AlreadyFinalized { .. }));
}

#[test]
fn failed_finalize_still_consumes_the_attempt() {
    let mut platform = FakePlatform::new().with_content_type("book");
    let mut books = ContentType::add("book");

    let first = books.finalize(&mut platform).unwrap_err();
    assert!(matches!(first, RegistroError::AlreadyExists { .. }));

    let second = books.finalize(&mut platform).unwrap_err();
    assert!(matches!(second, RegistroError::AlreadyFinalized { .. }));
}

// -------------------------------------------------------------------------
// Extend mode
// -------------------------------------------------------------------------

#[test]
fn extend_missing_type_fails() {
    let mut platform = FakePlatform::new();
    let mut pages = ContentType::extend("page");

    let err = pages.finalize(&mut platform).unwrap_err();
    assert!(matches!(err, RegistroError::NotFound { .. }));
}

#[test]
fn extend_pushes_labels_supports_and_taxonomies() {
    let mut platform = FakePlatform::new()
        .with_content_type("page")
        .with_taxonomy("genre")
        .with_taxonomy("topic");
    platform
        .add_taxonomy_to_type("topic", "page")
        .unwrap();

    let mut pages = ContentType::extend("page")
        .label(LabelKey::Name, "Pages")
        .supports("thumbnail")
        .remove_support("comments")
        .taxonomy("genre")
        .remove_taxonomy("topic");

    pages.finalize(&mut platform).unwrap();

    let options = platform.options_for("page").unwrap();
    check::label_eq(options, "name", "Pages");
    assert_eq!(platform.supports_for("page"), ["thumbnail"]);
    assert_eq!(
        platform.removed_supports,
        [("page".to_string(), vec!["comments".to_string()])]
    );
    assert_eq!(
        platform.taxonomy_for("genre").unwrap().object_types,
        ["page"]
    );
    assert!(platform.taxonomy_for("topic").unwrap().object_types.is_empty());
}

#[test]
fn extend_without_label_overrides_sends_no_update() {
    let mut platform = FakePlatform::new().with_content_type("page");
    let mut pages = ContentType::extend("page").supports("thumbnail");

    pages.finalize(&mut platform).unwrap();

    assert!(platform.label_updates.is_empty());
}

// -------------------------------------------------------------------------
// Admin columns
// -------------------------------------------------------------------------

#[test]
fn column_hooks_compute_final_mapping() {
    let mut platform = FakePlatform::new();
    let mut books = ContentType::add("book");
    books
        .columns()
        .add(ColumnSpec::new("price").position(1))
        .hide(["author"]);

    books.finalize(&mut platform).unwrap();

    let hooks = platform.item_hooks_for("book").unwrap();
    let columns = hooks.columns(&base_columns());
    let ids: Vec<&str> = columns.keys().map(String::as_str).collect();
    assert_eq!(ids, ["title", "price", "date"]);
}

#[test]
fn column_hooks_inject_sort_ordering() {
    let mut platform = FakePlatform::new();
    let mut books = ContentType::add("book");
    books
        .columns()
        .set_sortable([("price", SortKey::Numeric("meta_price".to_string()))]);

    books.finalize(&mut platform).unwrap();

    let hooks = platform.item_hooks_for("book").unwrap();
    assert!(hooks.is_sortable("price"));
    assert!(hooks.is_sortable("meta_price"));

    let mut query = ListQuery::new(QueryView::AdminList);
    query.set(params::ORDER_BY, "price");
    hooks.apply_sort(&mut query);

    assert_eq!(query.get(params::META_KEY), Some(&json!("meta_price")));
    assert_eq!(
        query.get(params::ORDER_BY),
        Some(&json!(params::META_VALUE_NUM))
    );
}

#[test]
fn column_hooks_render_cells_through_populate() {
    let mut platform = FakePlatform::new();
    let mut books = ContentType::add("book");
    books.columns().add(
        ColumnSpec::new("price").populate(Box::new(|column, item| format!("{column}:{item}"))),
    );

    books.finalize(&mut platform).unwrap();

    let hooks = platform.item_hooks_for("book").unwrap();
    let item = Uuid::now_v7();
    assert_eq!(hooks.render_cell("price", item), Some(format!("price:{item}")));
    assert_eq!(hooks.render_cell("title", item), None);
}

#[test]
fn untouched_registry_installs_no_hooks() {
    let mut platform = FakePlatform::new();
    let mut books = ContentType::add("book");

    books.finalize(&mut platform).unwrap();

    assert!(platform.item_hooks_for("book").is_none());
}

// -------------------------------------------------------------------------
// Archive query filter
// -------------------------------------------------------------------------

#[test]
fn declared_taxonomies_install_archive_filter() {
    let mut platform = FakePlatform::new();
    let mut books = ContentType::add("book").taxonomy("genre");

    books.finalize(&mut platform).unwrap();
    assert_eq!(platform.filters().len(), 1);

    let mut search = ListQuery::new(QueryView::Search);
    platform.run_filters(&mut search);
    assert_eq!(search.get(params::ITEM_TYPE), Some(&json!(["book"])));

    let mut suppressed = ListQuery::new(QueryView::Search).suppress_filters(true);
    platform.run_filters(&mut suppressed);
    assert!(suppressed.get(params::ITEM_TYPE).is_none());

    let mut admin = ListQuery::new(QueryView::AdminList);
    platform.run_filters(&mut admin);
    assert!(admin.get(params::ITEM_TYPE).is_none());
}

#[test]
fn archive_filter_extends_existing_type_list() {
    let mut platform = FakePlatform::new();
    let mut books = ContentType::add("book").taxonomy("genre");
    books.finalize(&mut platform).unwrap();

    let mut query = ListQuery::new(QueryView::Archive);
    query.set(params::ITEM_TYPE, "page");
    platform.run_filters(&mut query);

    assert_eq!(query.get(params::ITEM_TYPE), Some(&json!(["page", "book"])));
}

#[test]
fn no_taxonomies_means_no_filter() {
    let mut platform = FakePlatform::new();
    let mut books = ContentType::add("book");

    books.finalize(&mut platform).unwrap();

    assert!(platform.filters().is_empty());
}
