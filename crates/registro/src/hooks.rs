//! Column hook bundle.
//!
//! At finalize a builder hands its column registry to the platform
//! wrapped in a [`ColumnHooks`], covering the host's three column hook
//! points: the final column mapping, per-cell content, and the
//! sortable-column mapping (with ordering injection for sorted
//! requests).

use indexmap::IndexMap;
use uuid::Uuid;

use crate::columns::{ColumnRegistry, SortKey};
use crate::query::{ListQuery, params};

/// Cell renderer for content type list tables: (column id, item id) to
/// cell content.
pub type ItemCellFn = Box<dyn Fn(&str, Uuid) -> String + Send + Sync>;

/// Cell filter for taxonomy list tables: (current content, column id,
/// term id) to replacement content.
pub type TermCellFn = Box<dyn Fn(String, &str, Uuid) -> String + Send + Sync>;

/// A finalized column registry, packaged for the host's column hook
/// points.
pub struct ColumnHooks<F> {
    registry: ColumnRegistry<F>,
}

impl<F> ColumnHooks<F> {
    pub fn new(registry: ColumnRegistry<F>) -> Self {
        Self { registry }
    }

    /// Final ordered column mapping for the host's default columns.
    pub fn columns(&self, base: &IndexMap<String, String>) -> IndexMap<String, String> {
        self.registry.compute(base)
    }

    /// Sortable columns, by column id.
    pub fn sortable_columns(&self) -> &IndexMap<String, SortKey> {
        self.registry.sortable_columns()
    }

    /// Whether the requested sort key is sortable on this table.
    pub fn is_sortable(&self, request_key: &str) -> bool {
        self.registry.is_sortable(request_key)
    }

    /// Inject meta ordering into a query requesting a sortable column.
    /// Queries without a matching orderby are left untouched.
    pub fn apply_sort(&self, query: &mut ListQuery) {
        let Some(requested) = query.get_str(params::ORDER_BY).map(str::to_owned) else {
            return;
        };
        let Some(sort) = self.registry.sort_key(&requested) else {
            return;
        };
        query.set(params::META_KEY, sort.meta_key());
        let order = if sort.is_numeric() {
            params::META_VALUE_NUM
        } else {
            params::META_VALUE
        };
        query.set(params::ORDER_BY, order);
    }
}

impl ColumnHooks<ItemCellFn> {
    /// Render the cell for (column, item). None when the column has no
    /// populate callback.
    pub fn render_cell(&self, column: &str, item: Uuid) -> Option<String> {
        self.registry
            .populate_fn(column)
            .map(|populate| populate(column, item))
    }
}

impl ColumnHooks<TermCellFn> {
    /// Filter the cell content for (column, term). Columns without a
    /// populate callback keep the current content.
    pub fn filter_cell(&self, content: String, column: &str, term: Uuid) -> String {
        match self.registry.populate_fn(column) {
            Some(populate) => populate(content, column, term),
            None => content,
        }
    }
}

/// Hooks for a content type list table.
pub type ItemColumnHooks = ColumnHooks<ItemCellFn>;

/// Hooks for a taxonomy list table.
pub type TermColumnHooks = ColumnHooks<TermCellFn>;
