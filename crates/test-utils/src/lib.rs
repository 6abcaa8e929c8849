//! Registro test utilities.
//!
//! A recording [`FakePlatform`] adapter plus fixtures and assertion
//! helpers for integration-testing builders without a real host CMS.

use std::collections::HashMap;

use anyhow::Result;
use indexmap::IndexMap;
use serde_json::Value;

use registro::hooks::{ItemColumnHooks, TermColumnHooks};
use registro::options::Options;
use registro::platform::Platform;
use registro::query::{ListQuery, QueryFilter};

/// A taxonomy as the fake platform knows it.
#[derive(Debug, Clone, Default)]
pub struct RegisteredTaxonomy {
    pub object_types: Vec<String>,
    pub options: Options,
}

/// In-memory platform adapter that records every call a builder makes.
///
/// Existence checks read the registered maps, so tests can pre-seed
/// entities with [`with_content_type`](Self::with_content_type) /
/// [`with_taxonomy`](Self::with_taxonomy) and drive both create and
/// extend flows.
#[derive(Default)]
pub struct FakePlatform {
    content_types: IndexMap<String, Options>,
    taxonomies: IndexMap<String, RegisteredTaxonomy>,
    supports: HashMap<String, Vec<String>>,
    item_hooks: HashMap<String, ItemColumnHooks>,
    term_hooks: HashMap<String, TermColumnHooks>,
    filters: Vec<QueryFilter>,
    /// (entity name, label overrides) in call order, both entity kinds.
    pub label_updates: Vec<(String, Options)>,
    /// (type name, features) removals in call order.
    pub removed_supports: Vec<(String, Vec<String>)>,
    /// (taxonomy, type name) dissociations in call order.
    pub removed_associations: Vec<(String, String)>,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed an existing content type with empty options.
    pub fn with_content_type(mut self, name: impl Into<String>) -> Self {
        self.content_types.insert(name.into(), Options::new());
        self
    }

    /// Pre-seed an existing taxonomy with no associations.
    pub fn with_taxonomy(mut self, name: impl Into<String>) -> Self {
        self.taxonomies
            .insert(name.into(), RegisteredTaxonomy::default());
        self
    }

    /// Options a content type was registered with.
    pub fn options_for(&self, name: &str) -> Option<&Options> {
        self.content_types.get(name)
    }

    /// A registered taxonomy's associations and options.
    pub fn taxonomy_for(&self, name: &str) -> Option<&RegisteredTaxonomy> {
        self.taxonomies.get(name)
    }

    /// Features currently enabled on a content type.
    pub fn supports_for(&self, type_name: &str) -> &[String] {
        self.supports
            .get(type_name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Column hooks installed for a content type's list table.
    pub fn item_hooks_for(&self, type_name: &str) -> Option<&ItemColumnHooks> {
        self.item_hooks.get(type_name)
    }

    /// Column hooks installed for a taxonomy's list table.
    pub fn term_hooks_for(&self, taxonomy: &str) -> Option<&TermColumnHooks> {
        self.term_hooks.get(taxonomy)
    }

    /// Installed query filters.
    pub fn filters(&self) -> &[QueryFilter] {
        &self.filters
    }

    /// Pass a query through every installed filter, in install order.
    pub fn run_filters(&self, query: &mut ListQuery) {
        for filter in &self.filters {
            filter.apply(query);
        }
    }
}

impl Platform for FakePlatform {
    fn content_type_exists(&self, name: &str) -> bool {
        self.content_types.contains_key(name)
    }

    fn taxonomy_exists(&self, name: &str) -> bool {
        self.taxonomies.contains_key(name)
    }

    fn register_content_type(&mut self, name: &str, options: &Options) -> Result<()> {
        self.content_types.insert(name.to_string(), options.clone());
        Ok(())
    }

    fn register_taxonomy(
        &mut self,
        name: &str,
        object_types: &[String],
        options: &Options,
    ) -> Result<()> {
        self.taxonomies.insert(
            name.to_string(),
            RegisteredTaxonomy {
                object_types: object_types.to_vec(),
                options: options.clone(),
            },
        );
        Ok(())
    }

    fn update_content_type_labels(&mut self, name: &str, labels: &Options) -> Result<()> {
        if let Some(options) = self.content_types.get_mut(name) {
            merge_labels(options, labels);
        }
        self.label_updates.push((name.to_string(), labels.clone()));
        Ok(())
    }

    fn update_taxonomy_labels(&mut self, name: &str, labels: &Options) -> Result<()> {
        if let Some(taxonomy) = self.taxonomies.get_mut(name) {
            merge_labels(&mut taxonomy.options, labels);
        }
        self.label_updates.push((name.to_string(), labels.clone()));
        Ok(())
    }

    fn add_type_support(&mut self, type_name: &str, features: &[String]) -> Result<()> {
        let enabled = self.supports.entry(type_name.to_string()).or_default();
        for feature in features {
            if !enabled.contains(feature) {
                enabled.push(feature.clone());
            }
        }
        Ok(())
    }

    fn remove_type_support(&mut self, type_name: &str, features: &[String]) -> Result<()> {
        if let Some(enabled) = self.supports.get_mut(type_name) {
            enabled.retain(|feature| !features.contains(feature));
        }
        self.removed_supports
            .push((type_name.to_string(), features.to_vec()));
        Ok(())
    }

    fn add_taxonomy_to_type(&mut self, taxonomy: &str, type_name: &str) -> Result<()> {
        if let Some(registered) = self.taxonomies.get_mut(taxonomy) {
            if !registered.object_types.iter().any(|t| t == type_name) {
                registered.object_types.push(type_name.to_string());
            }
        }
        Ok(())
    }

    fn remove_taxonomy_from_type(&mut self, taxonomy: &str, type_name: &str) -> Result<()> {
        if let Some(registered) = self.taxonomies.get_mut(taxonomy) {
            registered.object_types.retain(|t| t != type_name);
        }
        self.removed_associations
            .push((taxonomy.to_string(), type_name.to_string()));
        Ok(())
    }

    fn install_item_columns(&mut self, type_name: &str, hooks: ItemColumnHooks) -> Result<()> {
        self.item_hooks.insert(type_name.to_string(), hooks);
        Ok(())
    }

    fn install_term_columns(&mut self, taxonomy: &str, hooks: TermColumnHooks) -> Result<()> {
        self.term_hooks.insert(taxonomy.to_string(), hooks);
        Ok(())
    }

    fn install_query_filter(&mut self, filter: QueryFilter) -> Result<()> {
        self.filters.push(filter);
        Ok(())
    }
}

fn merge_labels(options: &mut Options, overrides: &Options) {
    let slot = options
        .entry("labels")
        .or_insert_with(|| Value::Object(Options::new()));
    if let Value::Object(labels) = slot {
        for (key, text) in overrides {
            labels.insert(key.clone(), text.clone());
        }
    }
}

/// The host's default admin list-table columns.
pub fn base_columns() -> IndexMap<String, String> {
    IndexMap::from([
        ("title".to_string(), "Title".to_string()),
        ("author".to_string(), "Author".to_string()),
        ("date".to_string(), "Date".to_string()),
    ])
}

/// Assertion helpers for options payloads.
pub mod assert {
    use serde_json::Value;

    use registro::options::Options;

    /// Assert an option key holds the expected value.
    pub fn option_eq(options: &Options, key: &str, expected: &Value) {
        assert_eq!(
            options.get(key),
            Some(expected),
            "option '{key}' mismatch in {options:?}"
        );
    }

    /// Assert a label slot holds the expected text.
    pub fn label_eq(options: &Options, slot: &str, expected: &str) {
        let labels = options.get("labels").and_then(Value::as_object);
        assert_eq!(
            labels.and_then(|labels| labels.get(slot)),
            Some(&Value::String(expected.to_string())),
            "label '{slot}' mismatch in {labels:?}"
        );
    }
}
