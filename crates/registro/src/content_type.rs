//! Content type builder.
//!
//! Assembles the registration payload for a content type and forwards
//! it, once, through the platform adapter. Two lifecycle modes:
//! [`ContentType::add`] registers a new type, [`ContentType::extend`]
//! modifies one the host already knows about.

use serde_json::Value;
use tracing::{debug, info};

use crate::columns::ColumnRegistry;
use crate::error::{EntityKind, RegistroError, RegistroResult};
use crate::generator::{Generator, GeneratorCore, Mode};
use crate::hooks::{ColumnHooks, ItemCellFn};
use crate::labels::{self, LabelKey, Labels};
use crate::names::Names;
use crate::options::Options;
use crate::platform::Platform;
use crate::query::{ListQuery, QueryFilter, QueryPredicate, QueryView, params};

/// Fluent builder for a host content type.
///
/// ```
/// use registro::content_type::ContentType;
/// use registro::generator::Generator;
///
/// let mut books = ContentType::add("book")
///     .plural("Books")
///     .menu_icon("dashicons-book-alt")
///     .has_archive(true)
///     .taxonomy("genre");
/// books.columns().hide(["date"]);
/// ```
pub struct ContentType {
    core: GeneratorCore<ItemCellFn>,
    names: Names,
    supports: Vec<String>,
    removed_supports: Vec<String>,
    taxonomies: Vec<String>,
    removed_taxonomies: Vec<String>,
    archive_predicate: Option<QueryPredicate>,
}

impl ContentType {
    /// Start a builder that registers a new content type at finalize.
    pub fn add(name: impl Into<String>) -> Self {
        Self::with_mode(name.into(), Mode::Create)
    }

    /// Start a builder that modifies an already registered content type
    /// at finalize.
    pub fn extend(name: impl Into<String>) -> Self {
        Self::with_mode(name.into(), Mode::Extend)
    }

    fn with_mode(name: String, mode: Mode) -> Self {
        let names = Names::new(&name);
        let mut core = GeneratorCore::new(name, mode);
        if mode == Mode::Create {
            core.merge_options(Options::from_iter([(
                "public".to_string(),
                Value::Bool(true),
            )]));
        }
        Self {
            core,
            names,
            supports: Vec::new(),
            removed_supports: Vec::new(),
            taxonomies: Vec::new(),
            removed_taxonomies: Vec::new(),
            archive_predicate: None,
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

    /// Whether the type is publicly queryable and visible.
    pub fn public(self, public: bool) -> Self {
        self.option("public", public)
    }

    /// Whether items nest under parent items.
    pub fn hierarchical(self, hierarchical: bool) -> Self {
        self.option("hierarchical", hierarchical)
    }

    /// Admin-facing description.
    pub fn description(self, description: impl Into<String>) -> Self {
        self.option("description", description.into())
    }

    /// Admin menu icon identifier.
    pub fn menu_icon(self, icon: impl Into<String>) -> Self {
        self.option("menu_icon", icon.into())
    }

    /// Admin menu position.
    pub fn menu_position(self, position: i64) -> Self {
        self.option("menu_position", position)
    }

    /// Whether the type gets an archive listing.
    pub fn has_archive(self, has_archive: bool) -> Self {
        self.option("has_archive", has_archive)
    }

    /// Whether the type is exposed over the host's REST surface.
    pub fn show_in_rest(self, show: bool) -> Self {
        self.option("show_in_rest", show)
    }

    /// URL rewrite configuration. Accepts a bool or a settings object.
    pub fn rewrite(self, rewrite: impl Into<Value>) -> Self {
        self.option("rewrite", rewrite.into())
    }

    /// Capability scheme the host checks permissions against.
    pub fn capability_type(self, capability_type: impl Into<String>) -> Self {
        self.option("capability_type", capability_type.into())
    }

    /// Whether items are excluded from front-end search.
    pub fn exclude_from_search(self, exclude: bool) -> Self {
        self.option("exclude_from_search", exclude)
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

    /// Declare a supported feature, e.g. "thumbnail".
    pub fn supports(mut self, feature: impl Into<String>) -> Self {
        self.supports.push(feature.into());
        self
    }

    /// Remove a feature from the existing type (extend mode).
    pub fn remove_support(mut self, feature: impl Into<String>) -> Self {
        self.removed_supports.push(feature.into());
        self
    }

    /// Attach a taxonomy to this type.
    pub fn taxonomy(mut self, taxonomy: impl Into<String>) -> Self {
        self.taxonomies.push(taxonomy.into());
        self
    }

    /// Detach a taxonomy from the existing type (extend mode).
    pub fn remove_taxonomy(mut self, taxonomy: impl Into<String>) -> Self {
        self.removed_taxonomies.push(taxonomy.into());
        self
    }

    /// Replace the predicate deciding which queries the archive filter
    /// rewrites. The default matches search and archive views that are
    /// not suppressing filters.
    pub fn filter_archives_when(
        mut self,
        predicate: impl Fn(&ListQuery) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.archive_predicate = Some(Box::new(predicate));
        self
    }

    /// The naming forms the generated labels derive from.
    pub fn names(&self) -> &Names {
        &self.names
    }

    fn assemble_options(&self) -> Options {
        let mut options = self.core.options().clone();
        labels::fill_label_defaults(&mut options, labels::content_type_labels(&self.names));
        if !self.supports.is_empty() {
            options.entry("supports").or_insert_with(|| {
                Value::Array(self.supports.iter().cloned().map(Value::String).collect())
            });
        }
        if !self.taxonomies.is_empty() {
            options.entry("taxonomies").or_insert_with(|| {
                Value::Array(self.taxonomies.iter().cloned().map(Value::String).collect())
            });
        }
        options
            .entry("rewrite")
            .or_insert_with(|| serde_json::json!({ "slug": self.names.slug }));
        options
    }

    fn install_columns(&mut self, platform: &mut dyn Platform) -> RegistroResult<()> {
        match self.core.take_columns() {
            Some(registry) => {
                platform.install_item_columns(self.core.name(), ColumnHooks::new(registry))?;
                Ok(())
            }
            None => {
                debug!(type_name = %self.core.name(), "no column instructions, skipping hooks");
                Ok(())
            }
        }
    }

    fn archive_filter(&mut self) -> QueryFilter {
        let type_name = self.core.name().to_string();
        let predicate: QueryPredicate = self.archive_predicate.take().unwrap_or_else(|| {
            Box::new(|query: &ListQuery| {
                matches!(query.view(), QueryView::Search | QueryView::Archive)
                    && !query.is_suppressing_filters()
            })
        });
        QueryFilter::from_parts(
            predicate,
            Box::new(move |query: &mut ListQuery| {
                query.append(params::ITEM_TYPE, type_name.as_str());
            }),
        )
    }

    fn finalize_create(&mut self, platform: &mut dyn Platform) -> RegistroResult<()> {
        if platform.content_type_exists(self.core.name()) {
            return Err(RegistroError::AlreadyExists {
                kind: EntityKind::ContentType,
                name: self.core.name().to_string(),
            });
        }
        let options = self.assemble_options();
        platform.register_content_type(self.core.name(), &options)?;
        info!(type_name = %self.core.name(), "registered content type");

        self.install_columns(platform)?;

        if self.taxonomies.is_empty() {
            return Ok(());
        }
        let filter = self.archive_filter();
        platform.install_query_filter(filter)?;
        Ok(())
    }

    fn finalize_extend(&mut self, platform: &mut dyn Platform) -> RegistroResult<()> {
        if !platform.content_type_exists(self.core.name()) {
            return Err(RegistroError::NotFound {
                kind: EntityKind::ContentType,
                name: self.core.name().to_string(),
            });
        }
        if let Some(overrides) = self.core.labels_object() {
            if !overrides.is_empty() {
                platform.update_content_type_labels(self.core.name(), overrides)?;
            }
        }
        if !self.removed_supports.is_empty() {
            platform.remove_type_support(self.core.name(), &self.removed_supports)?;
        }
        if !self.supports.is_empty() {
            platform.add_type_support(self.core.name(), &self.supports)?;
        }
        for taxonomy in &self.removed_taxonomies {
            platform.remove_taxonomy_from_type(taxonomy, self.core.name())?;
        }
        for taxonomy in &self.taxonomies {
            platform.add_taxonomy_to_type(taxonomy, self.core.name())?;
        }
        info!(type_name = %self.core.name(), "extended content type");

        self.install_columns(platform)
    }
}

impl Generator for ContentType {
    type Cell = ItemCellFn;

    fn name(&self) -> &str {
        self.core.name()
    }

    fn mode(&self) -> Mode {
        self.core.mode()
    }

    fn options(&self) -> &Options {
        self.core.options()
    }

    fn columns(&mut self) -> &mut ColumnRegistry<ItemCellFn> {
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

impl std::fmt::Debug for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentType")
            .field("name", &self.core.name())
            .field("mode", &self.core.mode())
            .field("finalized", &self.core.is_finalized())
            .finish_non_exhaustive()
    }
}
