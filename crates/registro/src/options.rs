//! Options map handling.
//!
//! The configuration payload handed to the platform is a JSON object.
//! Merging is last-explicit-value-wins per key; defaults only fill keys
//! the caller never set.

use serde_json::{Map, Value};

/// The configuration payload for a registration call.
pub type Options = Map<String, Value>;

/// Merge `overrides` into `base`. Call-time values win per key.
pub fn merge(base: &mut Options, overrides: Options) {
    for (key, value) in overrides {
        base.insert(key, value);
    }
}

/// Copy `defaults` into `options` for keys that were never set.
pub fn fill_defaults(options: &mut Options, defaults: Options) {
    for (key, value) in defaults {
        options.entry(key).or_insert(value);
    }
}

/// Turn an identifier into a display label: separators become spaces,
/// first letter upper-cased ("book_author" -> "Book author").
pub fn humanize(id: &str) -> String {
    let spaced = id.replace(['_', '-'], " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => spaced,
    }
}
