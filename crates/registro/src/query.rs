//! List query model.
//!
//! Finalize installs query filters with the platform; the host hands
//! each list query through them before running it. A query is a
//! named-parameter bag plus the view marker and suppress flag the
//! default predicates test.

use serde_json::{Map, Value};

/// Well-known query parameter names and values.
pub mod params {
    /// Requested sort column or meta key.
    pub const ORDER_BY: &str = "orderby";
    /// Meta key injected for sortable columns.
    pub const META_KEY: &str = "meta_key";
    /// Content types the query targets.
    pub const ITEM_TYPE: &str = "item_type";
    /// Textual meta ordering.
    pub const META_VALUE: &str = "meta_value";
    /// Numeric meta ordering.
    pub const META_VALUE_NUM: &str = "meta_value_num";
}

/// Which listing the host is building.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryView {
    Search,
    Archive,
    Category,
    Tag,
    AdminList,
    Other,
}

/// A host list query.
#[derive(Debug, Clone)]
pub struct ListQuery {
    view: QueryView,
    suppress_filters: bool,
    params: Map<String, Value>,
}

impl ListQuery {
    pub fn new(view: QueryView) -> Self {
        Self {
            view,
            suppress_filters: false,
            params: Map::new(),
        }
    }

    /// Mark the query as opting out of installed filters.
    pub fn suppress_filters(mut self, suppress: bool) -> Self {
        self.suppress_filters = suppress;
        self
    }

    pub fn view(&self) -> QueryView {
        self.view
    }

    pub fn is_suppressing_filters(&self) -> bool {
        self.suppress_filters
    }

    /// Read a parameter.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.params.get(name)
    }

    /// Read a string parameter.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.params.get(name).and_then(Value::as_str)
    }

    /// Set a parameter, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.params.insert(name.into(), value.into());
    }

    /// Append to a list parameter. A scalar value already present is
    /// promoted to a list first.
    pub fn append(&mut self, name: &str, value: impl Into<Value>) {
        let value = value.into();
        match self.params.get_mut(name) {
            Some(Value::Array(list)) => list.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None => {
                self.params
                    .insert(name.to_string(), Value::Array(vec![value]));
            }
        }
    }
}

/// Predicate deciding whether a filter applies to a query.
pub type QueryPredicate = Box<dyn Fn(&ListQuery) -> bool + Send + Sync>;

/// Mutation applied to a query the filter matched.
pub type QueryAction = Box<dyn Fn(&mut ListQuery) + Send + Sync>;

/// A query-rewriting hook: a predicate plus a mutation.
pub struct QueryFilter {
    predicate: QueryPredicate,
    action: QueryAction,
}

impl QueryFilter {
    pub fn new(
        predicate: impl Fn(&ListQuery) -> bool + Send + Sync + 'static,
        action: impl Fn(&mut ListQuery) + Send + Sync + 'static,
    ) -> Self {
        Self {
            predicate: Box::new(predicate),
            action: Box::new(action),
        }
    }

    pub fn from_parts(predicate: QueryPredicate, action: QueryAction) -> Self {
        Self { predicate, action }
    }

    /// Whether the filter's predicate holds for this query.
    pub fn applies_to(&self, query: &ListQuery) -> bool {
        (self.predicate)(query)
    }

    /// Mutate the query when the predicate holds.
    pub fn apply(&self, query: &mut ListQuery) {
        if self.applies_to(query) {
            (self.action)(query);
        }
    }
}

impl std::fmt::Debug for QueryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryFilter").finish_non_exhaustive()
    }
}
