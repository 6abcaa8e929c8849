//! Admin list-table column registry.
//!
//! Collects replace/add/hide/reorder/sortable/populate instructions for
//! one list screen and computes the final ordered column mapping from
//! the host's defaults. Malformed instructions (repositioning a column
//! that was hidden, hiding an id the host never supplied) are tolerated
//! as no-ops; errors surface only at finalize time.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::options::humanize;

/// Sort specification for one column: the meta key the host orders by,
/// textually or numerically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortKey {
    /// Order values as text.
    Text(String),
    /// Order values numerically.
    Numeric(String),
}

impl SortKey {
    /// The meta key the ordering reads.
    pub fn meta_key(&self) -> &str {
        match self {
            SortKey::Text(key) | SortKey::Numeric(key) => key,
        }
    }

    /// Whether the ordering is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, SortKey::Numeric(_))
    }
}

/// One column to add to a list screen.
pub struct ColumnSpec<F> {
    pub(crate) id: String,
    pub(crate) label: Option<String>,
    pub(crate) position: Option<usize>,
    pub(crate) populate: Option<F>,
}

impl<F> ColumnSpec<F> {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            position: None,
            populate: None,
        }
    }

    /// Display label. Defaults to the humanized id.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Zero-based position in the final ordering.
    pub fn position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    /// Callback producing the cell content for this column.
    pub fn populate(mut self, populate: F) -> Self {
        self.populate = Some(populate);
        self
    }
}

/// Registry of column instructions for one admin list screen.
///
/// `F` is the populate-callback type; content type and taxonomy tables
/// use different callback shapes.
pub struct ColumnRegistry<F> {
    replace: Option<IndexMap<String, String>>,
    added: IndexMap<String, String>,
    hidden: Vec<String>,
    positions: IndexMap<String, usize>,
    sortable: IndexMap<String, SortKey>,
    populate: HashMap<String, F>,
}

impl<F> Default for ColumnRegistry<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> std::fmt::Debug for ColumnRegistry<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnRegistry")
            .field("replace", &self.replace)
            .field("added", &self.added)
            .field("hidden", &self.hidden)
            .field("positions", &self.positions)
            .field("sortable", &self.sortable)
            .field("populate", &self.populate.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<F> ColumnRegistry<F> {
    pub fn new() -> Self {
        Self {
            replace: None,
            added: IndexMap::new(),
            hidden: Vec::new(),
            positions: IndexMap::new(),
            sortable: IndexMap::new(),
            populate: HashMap::new(),
        }
    }

    /// Replace the entire column set. Takes precedence over add, hide,
    /// and reorder instructions in [`compute`](Self::compute).
    pub fn set_all<I, K, V>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.replace = Some(
            columns
                .into_iter()
                .map(|(id, label)| (id.into(), label.into()))
                .collect(),
        );
        self
    }

    /// Add a column.
    pub fn add(&mut self, spec: ColumnSpec<F>) -> &mut Self {
        let label = spec.label.unwrap_or_else(|| humanize(&spec.id));
        if let Some(position) = spec.position {
            self.positions.insert(spec.id.clone(), position);
        }
        if let Some(populate) = spec.populate {
            self.populate.insert(spec.id.clone(), populate);
        }
        self.added.insert(spec.id, label);
        self
    }

    /// Add several columns at once.
    pub fn add_all<I>(&mut self, specs: I) -> &mut Self
    where
        I: IntoIterator<Item = ColumnSpec<F>>,
    {
        for spec in specs {
            self.add(spec);
        }
        self
    }

    /// Hide columns from the final mapping.
    pub fn hide<I, S>(&mut self, ids: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hidden.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Register the populate callback for a column.
    pub fn set_populate(&mut self, id: impl Into<String>, populate: F) -> &mut Self {
        self.populate.insert(id.into(), populate);
        self
    }

    /// Bulk position overrides. Later calls overwrite earlier ones per
    /// column id.
    pub fn set_order<I, S>(&mut self, positions: I) -> &mut Self
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        for (id, position) in positions {
            self.positions.insert(id.into(), position);
        }
        self
    }

    /// Declare sortable columns.
    pub fn set_sortable<I, S>(&mut self, sortable: I) -> &mut Self
    where
        I: IntoIterator<Item = (S, SortKey)>,
        S: Into<String>,
    {
        for (id, key) in sortable {
            self.sortable.insert(id.into(), key);
        }
        self
    }

    /// Whether a request key refers to a sortable column, either by
    /// column id or by the meta key of a declared sort.
    pub fn is_sortable(&self, request_key: &str) -> bool {
        self.sortable.contains_key(request_key)
            || self.sortable.values().any(|key| key.meta_key() == request_key)
    }

    /// Resolve a request key to its sort specification.
    pub fn sort_key(&self, request_key: &str) -> Option<&SortKey> {
        self.sortable.get(request_key).or_else(|| {
            self.sortable
                .values()
                .find(|key| key.meta_key() == request_key)
        })
    }

    /// Declared sortable columns, by column id.
    pub fn sortable_columns(&self) -> &IndexMap<String, SortKey> {
        &self.sortable
    }

    /// Populate callback for a column, if one was registered.
    pub fn populate_fn(&self, id: &str) -> Option<&F> {
        self.populate.get(id)
    }

    /// Whether any instruction was recorded.
    pub fn is_empty(&self) -> bool {
        self.replace.is_none()
            && self.added.is_empty()
            && self.hidden.is_empty()
            && self.positions.is_empty()
            && self.sortable.is_empty()
            && self.populate.is_empty()
    }

    /// Compute the final ordered column mapping from the host defaults.
    ///
    /// A full replacement set wins outright. Otherwise added columns
    /// merge into the defaults (new ids append at the end, existing ids
    /// keep their position), hidden ids are removed, and position
    /// overrides splice each column to its target index in turn, each
    /// step seeing the previous result. Out-of-range positions clamp to
    /// append; ids no longer present are skipped.
    pub fn compute(&self, base: &IndexMap<String, String>) -> IndexMap<String, String> {
        if let Some(replace) = &self.replace {
            return replace.clone();
        }

        let mut columns = base.clone();
        for (id, label) in &self.added {
            columns.insert(id.clone(), label.clone());
        }
        for id in &self.hidden {
            columns.shift_remove(id);
        }
        for (id, position) in &self.positions {
            if let Some(label) = columns.shift_remove(id) {
                let index = (*position).min(columns.len());
                columns.shift_insert(index, id.clone(), label);
            }
        }
        columns
    }
}
