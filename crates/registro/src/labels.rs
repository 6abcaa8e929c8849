//! Admin label slots.
//!
//! The host admin UI shows entity labels in a fixed set of slots. The
//! builders generate a default set from the entity's names and merge
//! caller overrides on top; the merged result travels in the options
//! payload under the `labels` key.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::names::Names;
use crate::options::Options;

/// A label slot in the host admin UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelKey {
    Name,
    SingularName,
    MenuName,
    AllItems,
    AddNew,
    AddNewItem,
    EditItem,
    UpdateItem,
    NewItem,
    NewItemName,
    ViewItem,
    ViewItems,
    SearchItems,
    PopularItems,
    NotFound,
    NotFoundInTrash,
    ParentItem,
    ParentItemColon,
    FeaturedImage,
    SetFeaturedImage,
    RemoveFeaturedImage,
    UseFeaturedImage,
    Archives,
    InsertIntoItem,
    UploadedToThisItem,
    FilterItemsList,
    ItemsListNavigation,
    ItemsList,
    AddOrRemoveItems,
    ChooseFromMostUsed,
    SeparateItemsWithCommas,
}

impl LabelKey {
    /// Slot name as stored in the options payload.
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelKey::Name => "name",
            LabelKey::SingularName => "singular_name",
            LabelKey::MenuName => "menu_name",
            LabelKey::AllItems => "all_items",
            LabelKey::AddNew => "add_new",
            LabelKey::AddNewItem => "add_new_item",
            LabelKey::EditItem => "edit_item",
            LabelKey::UpdateItem => "update_item",
            LabelKey::NewItem => "new_item",
            LabelKey::NewItemName => "new_item_name",
            LabelKey::ViewItem => "view_item",
            LabelKey::ViewItems => "view_items",
            LabelKey::SearchItems => "search_items",
            LabelKey::PopularItems => "popular_items",
            LabelKey::NotFound => "not_found",
            LabelKey::NotFoundInTrash => "not_found_in_trash",
            LabelKey::ParentItem => "parent_item",
            LabelKey::ParentItemColon => "parent_item_colon",
            LabelKey::FeaturedImage => "featured_image",
            LabelKey::SetFeaturedImage => "set_featured_image",
            LabelKey::RemoveFeaturedImage => "remove_featured_image",
            LabelKey::UseFeaturedImage => "use_featured_image",
            LabelKey::Archives => "archives",
            LabelKey::InsertIntoItem => "insert_into_item",
            LabelKey::UploadedToThisItem => "uploaded_to_this_item",
            LabelKey::FilterItemsList => "filter_items_list",
            LabelKey::ItemsListNavigation => "items_list_navigation",
            LabelKey::ItemsList => "items_list",
            LabelKey::AddOrRemoveItems => "add_or_remove_items",
            LabelKey::ChooseFromMostUsed => "choose_from_most_used",
            LabelKey::SeparateItemsWithCommas => "separate_items_with_commas",
        }
    }
}

/// Label overrides keyed by slot, in declaration order.
pub type Labels = IndexMap<LabelKey, String>;

/// Default content type labels generated from the entity's names.
pub fn content_type_labels(names: &Names) -> Labels {
    let singular = &names.singular;
    let plural = &names.plural;
    let singular_lower = singular.to_lowercase();
    let plural_lower = plural.to_lowercase();

    Labels::from_iter([
        (LabelKey::Name, plural.clone()),
        (LabelKey::SingularName, singular.clone()),
        (LabelKey::MenuName, plural.clone()),
        (LabelKey::AllItems, format!("All {plural}")),
        (LabelKey::AddNew, "Add New".to_string()),
        (LabelKey::AddNewItem, format!("Add New {singular}")),
        (LabelKey::EditItem, format!("Edit {singular}")),
        (LabelKey::NewItem, format!("New {singular}")),
        (LabelKey::ViewItem, format!("View {singular}")),
        (LabelKey::ViewItems, format!("View {plural}")),
        (LabelKey::SearchItems, format!("Search {plural}")),
        (LabelKey::NotFound, format!("No {plural_lower} found")),
        (
            LabelKey::NotFoundInTrash,
            format!("No {plural_lower} found in trash"),
        ),
        (LabelKey::Archives, format!("{singular} Archives")),
        (
            LabelKey::InsertIntoItem,
            format!("Insert into {singular_lower}"),
        ),
        (
            LabelKey::UploadedToThisItem,
            format!("Uploaded to this {singular_lower}"),
        ),
        (
            LabelKey::FilterItemsList,
            format!("Filter {plural_lower} list"),
        ),
        (
            LabelKey::ItemsListNavigation,
            format!("{plural} list navigation"),
        ),
        (LabelKey::ItemsList, format!("{plural} list")),
    ])
}

/// Default taxonomy labels generated from the entity's names.
pub fn taxonomy_labels(names: &Names) -> Labels {
    let singular = &names.singular;
    let plural = &names.plural;
    let plural_lower = plural.to_lowercase();

    Labels::from_iter([
        (LabelKey::Name, plural.clone()),
        (LabelKey::SingularName, singular.clone()),
        (LabelKey::MenuName, plural.clone()),
        (LabelKey::AllItems, format!("All {plural}")),
        (LabelKey::EditItem, format!("Edit {singular}")),
        (LabelKey::UpdateItem, format!("Update {singular}")),
        (LabelKey::AddNewItem, format!("Add New {singular}")),
        (LabelKey::NewItemName, format!("New {singular} Name")),
        (LabelKey::ViewItem, format!("View {singular}")),
        (LabelKey::ParentItem, format!("Parent {singular}")),
        (LabelKey::ParentItemColon, format!("Parent {singular}:")),
        (LabelKey::SearchItems, format!("Search {plural}")),
        (LabelKey::PopularItems, format!("Popular {plural}")),
        (
            LabelKey::SeparateItemsWithCommas,
            format!("Separate {plural_lower} with commas"),
        ),
        (
            LabelKey::AddOrRemoveItems,
            format!("Add or remove {plural_lower}"),
        ),
        (
            LabelKey::ChooseFromMostUsed,
            format!("Choose from the most used {plural_lower}"),
        ),
        (LabelKey::NotFound, format!("No {plural_lower} found")),
    ])
}

/// Fill label slots of `options` that were never set from `defaults`.
pub(crate) fn fill_label_defaults(options: &mut Options, defaults: Labels) {
    let slot = options
        .entry("labels")
        .or_insert_with(|| Value::Object(Map::new()));
    if let Value::Object(labels) = slot {
        for (key, text) in defaults {
            labels.entry(key.as_str()).or_insert_with(|| Value::String(text));
        }
    }
}
