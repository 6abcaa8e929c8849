//! Taxonomy builder.
//!
//! Same two-mode protocol as the content type builder: [`Taxonomy::add`]
//! registers a new classification scheme, [`Taxonomy::extend`] attaches
//! to and modifies an existing one. Term list tables use transformer
//! populate callbacks: the callback receives the current cell content
//! and returns the replacement.

use serde_json::Value;
use tracing::{debug, info};

use crate::columns::ColumnRegistry;
use crate::error::{EntityKind, RegistroError, RegistroResult};
use crate::generator::{Generator, GeneratorCore, Mode};
use crate::hooks::{ColumnHooks, TermCellFn};
use crate::labels::{self, LabelKey, Labels};
use crate::names::Names;
use crate::options::Options;
use crate::platform::Platform;
use crate::query::{ListQuery, QueryFilter, QueryPredicate, QueryView, params};

/// Fluent builder for a host taxonomy.
///
/// ```
/// use registro::taxonomy::Taxonomy;
///
/// let genres = Taxonomy::add("genre")
///     .hierarchical(true)
///     .object_type("book")
///     .show_admin_column(true);
/// ```
pub struct Taxonomy {
    core: GeneratorCore<TermCellFn>,
    names: Names,
    object_types: Vec<String>,
    term_predicate: Option<QueryPredicate>,
}

impl Taxonomy {
    /// Start a builder that registers a new taxonomy at finalize.
    pub fn add(name: impl Into<String>) -> Self {
        Self::with_mode(name.into(), Mode::Create)
    }

    /// Start a builder that modifies an already registered taxonomy at
    /// finalize.
    pub fn extend(name: impl Into<String>) -> Self {
        Self::with_mode(name.into(), Mode::Extend)
    }

    fn with_mode(name: String, mode: Mode) -> Self {
        let names = Names::new(&name);
        let mut core = GeneratorCore::new(name, mode);
        if mode == Mode::Create {
            core.merge_options(Options::from_iter([(
                "hierarchical".to_string(),
                Value::Bool(false),
            )]));
        }
        Self {
            core,
            names,
            object_types: Vec::new(),
            term_predicate: None,
        }
    }

    /// Override the singular display form.
    pub fn singular(mut self, singular: impl Into<String>) -> Self {
        self.names = self.names.singular(singular);
        self
    }

    /// Override the plural display form.
    pub fn plural(mut self, plural: impl Into<String>) -> Self {
        self.names = self.names.plural(plural);
        self
    }

    /// Override the URL slug.
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.names = self.names.slug(slug);
        self
    }

    /// Whether terms nest under parent terms.
    pub fn hierarchical(self, hierarchical: bool) -> Self {
        self.option("hierarchical", hierarchical)
    }

    /// Whether the taxonomy is publicly queryable and visible.
    pub fn public(self, public: bool) -> Self {
        self.option("public", public)
    }

    /// Admin-facing description.
    pub fn description(self, description: impl Into<String>) -> Self {
        self.option("description", description.into())
    }

    /// Whether terms appear in the host's tag-cloud widget.
    pub fn show_tagcloud(self, show: bool) -> Self {
        self.option("show_tagcloud", show)
    }

    /// Whether attached content types grow an admin list column for
    /// this taxonomy.
    pub fn show_admin_column(self, show: bool) -> Self {
        self.option("show_admin_column", show)
    }

    /// Whether the taxonomy is exposed over the host's REST surface.
    pub fn show_in_rest(self, show: bool) -> Self {
        self.option("show_in_rest", show)
    }

    /// Term assigned to items that get no explicit term.
    pub fn default_term(self, term: impl Into<Value>) -> Self {
        self.option("default_term", term.into())
    }

    /// Host callback name invoked when term usage counts change.
    pub fn update_count_callback(self, callback: impl Into<String>) -> Self {
        self.option("update_count_callback", callback.into())
    }

    /// URL rewrite configuration. Accepts a bool or a settings object.
    pub fn rewrite(self, rewrite: impl Into<Value>) -> Self {
        self.option("rewrite", rewrite.into())
    }

    /// Set a single option by key.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.core
            .merge_options(Options::from_iter([(key.into(), value.into())]));
        self
    }

    /// Merge options over the current payload; call-time values win.
    pub fn set_options(mut self, options: Options) -> Self {
        self.core.merge_options(options);
        self
    }

    /// Merge label overrides; call-time values win.
    pub fn set_labels(mut self, labels: Labels) -> Self {
        self.core.merge_labels(labels);
        self
    }

    /// Override a single label slot.
    pub fn label(self, key: LabelKey, text: impl Into<String>) -> Self {
        self.set_labels(Labels::from_iter([(key, text.into())]))
    }

    /// Associate the taxonomy with a content type.
    pub fn object_type(mut self, type_name: impl Into<String>) -> Self {
        self.object_types.push(type_name.into());
        self
    }

    /// Associate the taxonomy with several content types.
    pub fn object_types<I, S>(mut self, type_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.object_types
            .extend(type_names.into_iter().map(Into::into));
        self
    }

    /// Replace the predicate deciding which queries the term filter
    /// rewrites. The default matches category and tag views that are
    /// not suppressing filters.
    pub fn filter_terms_when(
        mut self,
        predicate: impl Fn(&ListQuery) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.term_predicate = Some(Box::new(predicate));
        self
    }

    /// The naming forms the generated labels derive from.
    pub fn names(&self) -> &Names {
        &self.names
    }

    fn assemble_options(&self) -> Options {
        let mut options = self.core.options().clone();
        labels::fill_label_defaults(&mut options, labels::taxonomy_labels(&self.names));
        options
            .entry("rewrite")
            .or_insert_with(|| serde_json::json!({ "slug": self.names.slug }));
        options
    }

    fn install_columns(&mut self, platform: &mut dyn Platform) -> RegistroResult<()> {
        match self.core.take_columns() {
            Some(registry) => {
                platform.install_term_columns(self.core.name(), ColumnHooks::new(registry))?;
                Ok(())
            }
            None => {
                debug!(taxonomy = %self.core.name(), "no column instructions, skipping hooks");
                Ok(())
            }
        }
    }

    fn term_filter(&mut self) -> QueryFilter {
        let type_names = self.object_types.clone();
        let predicate: QueryPredicate = self.term_predicate.take().unwrap_or_else(|| {
            Box::new(|query: &ListQuery| {
                matches!(query.view(), QueryView::Category | QueryView::Tag)
                    && !query.is_suppressing_filters()
            })
        });
        QueryFilter::from_parts(
            predicate,
            Box::new(move |query: &mut ListQuery| {
                for type_name in &type_names {
                    query.append(params::ITEM_TYPE, type_name.as_str());
                }
            }),
        )
    }

    fn finalize_create(&mut self, platform: &mut dyn Platform) -> RegistroResult<()> {
        if platform.taxonomy_exists(self.core.name()) {
            return Err(RegistroError::AlreadyExists {
                kind: EntityKind::Taxonomy,
                name: self.core.name().to_string(),
            });
        }
        let options = self.assemble_options();
        platform.register_taxonomy(self.core.name(), &self.object_types, &options)?;
        info!(taxonomy = %self.core.name(), "registered taxonomy");

        self.install_columns(platform)
    }

    fn finalize_extend(&mut self, platform: &mut dyn Platform) -> RegistroResult<()> {
        if !platform.taxonomy_exists(self.core.name()) {
            return Err(RegistroError::NotFound {
                kind: EntityKind::Taxonomy,
                name: self.core.name().to_string(),
            });
        }
        if let Some(overrides) = self.core.labels_object() {
            if !overrides.is_empty() {
                platform.update_taxonomy_labels(self.core.name(), overrides)?;
            }
        }
        for type_name in &self.object_types {
            platform.add_taxonomy_to_type(self.core.name(), type_name)?;
        }
        info!(taxonomy = %self.core.name(), "extended taxonomy");

        self.install_columns(platform)?;

        if self.object_types.is_empty() {
            return Ok(());
        }
        let filter = self.term_filter();
        platform.install_query_filter(filter)?;
        Ok(())
    }
}

impl Generator for Taxonomy {
    type Cell = TermCellFn;

    fn name(&self) -> &str {
        self.core.name()
    }

    fn mode(&self) -> Mode {
        self.core.mode()
    }

    fn options(&self) -> &Options {
        self.core.options()
    }

    fn columns(&mut self) -> &mut ColumnRegistry<TermCellFn> {
        self.core.columns()
    }

    fn is_finalized(&self) -> bool {
        self.core.is_finalized()
    }

    fn finalize(&mut self, platform: &mut dyn Platform) -> RegistroResult<()> {
        self.core.mark_finalized()?;
        match self.core.mode() {
            Mode::Create => self.finalize_create(platform),
            Mode::Extend => self.finalize_extend(platform),
        }
    }
}

impl std::fmt::Debug for Taxonomy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Taxonomy")
            .field("name", &self.core.name())
            .field("mode", &self.core.mode())
            .field("object_types", &self.object_types)
            .field("finalized", &self.core.is_finalized())
            .finish_non_exhaustive()
    }
}
