//! Platform adapter.
//!
//! The library never calls host globals; every registration, label
//! update, and hook installation goes through this trait. Embedding
//! code supplies the real adapter, tests a recording fake.

use anyhow::Result;

use crate::hooks::{ItemColumnHooks, TermColumnHooks};
use crate::options::Options;
use crate::query::QueryFilter;

/// Capabilities the host content-management platform exposes.
pub trait Platform {
    /// Whether a content type with this name is registered.
    fn content_type_exists(&self, name: &str) -> bool;

    /// Whether a taxonomy with this name is registered.
    fn taxonomy_exists(&self, name: &str) -> bool;

    /// Register a new content type with the assembled options.
    fn register_content_type(&mut self, name: &str, options: &Options) -> Result<()>;

    /// Register a new taxonomy for the given content types.
    fn register_taxonomy(
        &mut self,
        name: &str,
        object_types: &[String],
        options: &Options,
    ) -> Result<()>;

    /// Merge label overrides onto an existing content type.
    fn update_content_type_labels(&mut self, name: &str, labels: &Options) -> Result<()>;

    /// Merge label overrides onto an existing taxonomy.
    fn update_taxonomy_labels(&mut self, name: &str, labels: &Options) -> Result<()>;

    /// Enable features on an existing content type.
    fn add_type_support(&mut self, type_name: &str, features: &[String]) -> Result<()>;

    /// Disable features on an existing content type.
    fn remove_type_support(&mut self, type_name: &str, features: &[String]) -> Result<()>;

    /// Associate a taxonomy with a content type.
    fn add_taxonomy_to_type(&mut self, taxonomy: &str, type_name: &str) -> Result<()>;

    /// Remove a taxonomy association from a content type.
    fn remove_taxonomy_from_type(&mut self, taxonomy: &str, type_name: &str) -> Result<()>;

    /// Install the column hooks for a content type's list table.
    fn install_item_columns(&mut self, type_name: &str, hooks: ItemColumnHooks) -> Result<()>;

    /// Install the column hooks for a taxonomy's list table.
    fn install_term_columns(&mut self, taxonomy: &str, hooks: TermColumnHooks) -> Result<()>;

    /// Install a query-rewriting filter.
    fn install_query_filter(&mut self, filter: QueryFilter) -> Result<()>;
}
