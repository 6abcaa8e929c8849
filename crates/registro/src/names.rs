//! Entity naming.
//!
//! A builder's name is its registration key; the singular, plural, and
//! slug forms feed the generated labels and URL paths. All three derive
//! from the name and can be overridden individually.

use serde::{Deserialize, Serialize};

use crate::options::humanize;

/// The four naming forms of a content type or taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Names {
    /// Registration key. Never reassigned after construction.
    pub name: String,
    /// Singular display form.
    pub singular: String,
    /// Plural display form.
    pub plural: String,
    /// URL slug.
    pub slug: String,
}

impl Names {
    /// Derive all forms from a registration key.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let singular = humanize(&name);
        let plural = pluralize(&singular);
        let slug = name.replace('_', "-");
        Self {
            name,
            singular,
            plural,
            slug,
        }
    }

    /// Override the singular form.
    pub fn singular(mut self, singular: impl Into<String>) -> Self {
        self.singular = singular.into();
        self
    }

    /// Override the plural form.
    pub fn plural(mut self, plural: impl Into<String>) -> Self {
        self.plural = plural.into();
        self
    }

    /// Override the slug.
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }
}

/// Naive English pluralization, enough for generated label defaults.
fn pluralize(singular: &str) -> String {
    if let Some(stem) = singular.strip_suffix('y') {
        if !stem.ends_with(['a', 'e', 'i', 'o', 'u']) && !stem.is_empty() {
            return format!("{stem}ies");
        }
    }
    if singular.ends_with(['s', 'x', 'z']) || singular.ends_with("ch") || singular.ends_with("sh") {
        return format!("{singular}es");
    }
    format!("{singular}s")
}
