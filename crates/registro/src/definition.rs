//! Declarative content-model definitions.
//!
//! A host application can declare its content model in configuration
//! files (JSON or anything serde reads) and convert each definition into
//! a builder instead of chaining setters in code.

use serde::{Deserialize, Serialize};

use crate::content_type::ContentType;
use crate::generator::Mode;
use crate::labels::Labels;
use crate::options::Options;
use crate::taxonomy::Taxonomy;

/// A content type declared as data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentTypeDefinition {
    pub name: String,
    #[serde(default)]
    pub singular: Option<String>,
    #[serde(default)]
    pub plural: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub options: Options,
    #[serde(default)]
    pub labels: Labels,
    #[serde(default)]
    pub supports: Vec<String>,
    #[serde(default)]
    pub taxonomies: Vec<String>,
}

impl ContentTypeDefinition {
    /// Convert the definition into a ready-to-finalize builder.
    pub fn into_builder(self) -> ContentType {
        let mut builder = match self.mode {
            Mode::Create => ContentType::add(self.name),
            Mode::Extend => ContentType::extend(self.name),
        };
        if let Some(singular) = self.singular {
            builder = builder.singular(singular);
        }
        if let Some(plural) = self.plural {
            builder = builder.plural(plural);
        }
        if let Some(slug) = self.slug {
            builder = builder.slug(slug);
        }
        builder = builder.set_options(self.options).set_labels(self.labels);
        for feature in self.supports {
            builder = builder.supports(feature);
        }
        for taxonomy in self.taxonomies {
            builder = builder.taxonomy(taxonomy);
        }
        builder
    }
}

/// A taxonomy declared as data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyDefinition {
    pub name: String,
    #[serde(default)]
    pub singular: Option<String>,
    #[serde(default)]
    pub plural: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub options: Options,
    #[serde(default)]
    pub labels: Labels,
    #[serde(default)]
    pub object_types: Vec<String>,
}

impl TaxonomyDefinition {
    /// Convert the definition into a ready-to-finalize builder.
    pub fn into_builder(self) -> Taxonomy {
        let mut builder = match self.mode {
            Mode::Create => Taxonomy::add(self.name),
            Mode::Extend => Taxonomy::extend(self.name),
        };
        if let Some(singular) = self.singular {
            builder = builder.singular(singular);
        }
        if let Some(plural) = self.plural {
            builder = builder.plural(plural);
        }
        if let Some(slug) = self.slug {
            builder = builder.slug(slug);
        }
        builder
            .set_options(self.options)
            .set_labels(self.labels)
            .object_types(self.object_types)
    }
}
