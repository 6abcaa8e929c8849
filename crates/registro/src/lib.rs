//! Registro
//!
//! Fluent builders for registering content types and taxonomies with a
//! host content-management platform, plus a column registry for the
//! host's admin list tables.
//!
//! The library never touches host globals. A builder accumulates an
//! options payload through fluent setters; [`Generator::finalize`]
//! performs the one-time registration or extension through an injected
//! [`Platform`] adapter supplied by the embedding application, which
//! also decides when finalize runs.
//!
//! ```
//! use registro::prelude::*;
//!
//! fn register(platform: &mut dyn Platform) -> RegistroResult<()> {
//!     let mut books = ContentType::add("book")
//!         .has_archive(true)
//!         .taxonomy("genre")
//!         .supports("thumbnail");
//!     books
//!         .columns()
//!         .add(ColumnSpec::new("price").position(2))
//!         .set_sortable([("price", SortKey::Numeric("meta_price".into()))]);
//!     books.finalize(platform)?;
//!
//!     Taxonomy::add("genre")
//!         .hierarchical(true)
//!         .object_type("book")
//!         .finalize(platform)
//! }
//! ```

pub mod columns;
pub mod content_type;
pub mod definition;
pub mod error;
pub mod generator;
pub mod hooks;
pub mod labels;
pub mod names;
pub mod options;
pub mod platform;
pub mod query;
pub mod taxonomy;

pub use columns::{ColumnRegistry, ColumnSpec, SortKey};
pub use content_type::ContentType;
pub use definition::{ContentTypeDefinition, TaxonomyDefinition};
pub use error::{EntityKind, RegistroError, RegistroResult};
pub use generator::{Generator, Mode};
pub use hooks::{ColumnHooks, ItemCellFn, ItemColumnHooks, TermCellFn, TermColumnHooks};
pub use labels::{LabelKey, Labels};
pub use names::Names;
pub use options::Options;
pub use platform::Platform;
pub use query::{ListQuery, QueryFilter, QueryView};
pub use taxonomy::Taxonomy;

pub mod prelude {
    pub use crate::columns::{ColumnSpec, SortKey};
    pub use crate::content_type::ContentType;
    pub use crate::error::{RegistroError, RegistroResult};
    pub use crate::generator::Generator;
    pub use crate::labels::LabelKey;
    pub use crate::platform::Platform;
    pub use crate::query::{ListQuery, QueryView};
    pub use crate::taxonomy::Taxonomy;
}
