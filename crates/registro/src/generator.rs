//! Shared builder state and the generator contract.
//!
//! Both builders embed a [`GeneratorCore`]: the immutable registration
//! name, the merged options payload, the lazily created column
//! registry, and the one-shot finalize guard.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::columns::ColumnRegistry;
use crate::error::{RegistroError, RegistroResult};
use crate::labels::Labels;
use crate::options::{self, Options};
use crate::platform::Platform;

/// Builder lifecycle mode, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Finalize registers a new entity.
    #[default]
    Create,
    /// Finalize modifies an already registered entity.
    Extend,
}

/// Contract every builder fulfills: identity, accumulated options,
/// column access, and one-shot finalization against the platform.
pub trait Generator {
    /// Populate-callback type for this builder's list table.
    type Cell;

    /// Registration name. Immutable for the builder's lifetime.
    fn name(&self) -> &str;

    /// Lifecycle mode.
    fn mode(&self) -> Mode;

    /// Accumulated options payload.
    fn options(&self) -> &Options;

    /// The column registry, created on first access.
    fn columns(&mut self) -> &mut ColumnRegistry<Self::Cell>;

    /// Whether finalize already ran.
    fn is_finalized(&self) -> bool;

    /// Perform the one-time registration or extension. Must be called
    /// explicitly; a second call fails with
    /// [`RegistroError::AlreadyFinalized`].
    fn finalize(&mut self, platform: &mut dyn Platform) -> RegistroResult<()>;
}

pub(crate) struct GeneratorCore<F> {
    name: String,
    mode: Mode,
    options: Options,
    columns: Option<ColumnRegistry<F>>,
    finalized: bool,
}

impl<F> GeneratorCore<F> {
    pub(crate) fn new(name: String, mode: Mode) -> Self {
        Self {
            name,
            mode,
            options: Options::new(),
            columns: None,
            finalized: false,
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn mode(&self) -> Mode {
        self.mode
    }

    pub(crate) fn options(&self) -> &Options {
        &self.options
    }

    pub(crate) fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Merge options over the current payload; call-time values win.
    pub(crate) fn merge_options(&mut self, overrides: Options) {
        options::merge(&mut self.options, overrides);
    }

    /// Merge labels into the labels slot of the options payload.
    pub(crate) fn merge_labels(&mut self, labels: Labels) {
        let slot = self
            .options
            .entry("labels")
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(existing) = slot {
            for (key, text) in labels {
                existing.insert(key.as_str().to_string(), Value::String(text));
            }
        }
    }

    /// Label overrides currently in the payload.
    pub(crate) fn labels_object(&self) -> Option<&Options> {
        match self.options.get("labels") {
            Some(Value::Object(labels)) => Some(labels),
            _ => None,
        }
    }

    /// The column registry, created on first access and kept for the
    /// builder's lifetime.
    pub(crate) fn columns(&mut self) -> &mut ColumnRegistry<F> {
        self.columns.get_or_insert_with(ColumnRegistry::new)
    }

    /// Move the registry out for hook installation. None when no
    /// instruction was ever recorded.
    pub(crate) fn take_columns(&mut self) -> Option<ColumnRegistry<F>> {
        self.columns.take().filter(|registry| !registry.is_empty())
    }

    /// Flip the one-shot finalize guard.
    pub(crate) fn mark_finalized(&mut self) -> RegistroResult<()> {
        if self.finalized {
            return Err(RegistroError::AlreadyFinalized {
                name: self.name.clone(),
            });
        }
        self.finalized = true;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::labels::LabelKey;
    use serde_json::json;

    #[test]
    fn mark_finalized_is_one_shot() {
        let mut core: GeneratorCore<()> = GeneratorCore::new("book".to_string(), Mode::Create);
        assert!(!core.is_finalized());

        core.mark_finalized().unwrap();
        assert!(core.is_finalized());

        let err = core.mark_finalized().unwrap_err();
        assert!(matches!(err, RegistroError::AlreadyFinalized { .. }));
    }

    #[test]
    fn merge_labels_accumulates_into_slot() {
        let mut core: GeneratorCore<()> = GeneratorCore::new("book".to_string(), Mode::Create);
        core.merge_labels(Labels::from_iter([(LabelKey::Name, "Books".to_string())]));
        core.merge_labels(Labels::from_iter([(
            LabelKey::MenuName,
            "Library".to_string(),
        )]));

        let labels = core.labels_object().unwrap();
        assert_eq!(labels.get("name"), Some(&json!("Books")));
        assert_eq!(labels.get("menu_name"), Some(&json!("Library")));
    }

    #[test]
    fn column_registry_is_lazy_and_persistent() {
        let mut core: GeneratorCore<()> = GeneratorCore::new("book".to_string(), Mode::Create);
        assert!(core.take_columns().is_none());

        core.columns().hide(["date"]);
        let registry = core.take_columns().unwrap();
        assert!(!registry.is_empty());
    }

    #[test]
    fn mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Mode::Extend).unwrap(), "\"extend\"");
        let parsed: Mode = serde_json::from_str("\"create\"").unwrap();
        assert_eq!(parsed, Mode::Create);
    }
}
