//! Picker configuration.

use serde::{Deserialize, Serialize};

use crate::error::{PickerError, Result};
use crate::locale::DEFAULT_LANGUAGE;

/// Default name of the hidden form field carrying the ISO value.
pub const DEFAULT_FIELD_NAME: &str = "date_picker";

/// How a [`DateTimePicker`](crate::DateTimePicker) behaves and presents itself.
///
/// Every field has a default, so an empty JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PickerConfig {
    /// Show captions next to the sub-pickers and the "select a day" prompt.
    pub label: bool,
    /// Offer hour/minute selection after a day is picked.
    pub show_time_select: bool,
    /// Name of the hidden form field.
    pub name: String,
    /// Language tag passed to the translation service.
    pub lang: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            label: false,
            show_time_select: false,
            name: DEFAULT_FIELD_NAME.to_string(),
            lang: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl PickerConfig {
    /// Parse a config from JSON; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::InvalidConfig`] on malformed JSON, unknown keys
    /// or an empty field name.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: PickerConfig =
            serde_json::from_str(json).map_err(|e| PickerError::InvalidConfig(e.to_string()))?;
        if config.name.trim().is_empty() {
            return Err(PickerError::InvalidConfig(
                "field name must not be empty".to_string(),
            ));
        }
        Ok(config)
    }

    pub fn with_time(mut self, show_time_select: bool) -> Self {
        self.show_time_select = show_time_select;
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    pub fn with_label(mut self, label: bool) -> Self {
        self.label = label;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
