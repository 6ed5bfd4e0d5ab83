//! Translation tables and locale resolution.
//!
//! The picker never looks up text itself: it asks a [`TranslationService`]
//! for the table of a language tag and then applies two rules of its own.
//!
//! - An unknown tag silently falls back to [`DEFAULT_LANGUAGE`].
//! - A table without years gets a synthesized range of
//!   `2 * YEAR_SPAN + 1` years centered on the current year.
//!
//! [`BuiltinTranslations`] ships the `us` and `fr` tables.

use std::collections::BTreeMap;

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar::MONTHS_PER_YEAR;
use crate::error::{PickerError, Result};

/// Language used when the requested tag has no table.
pub const DEFAULT_LANGUAGE: &str = "us";

/// Years on each side of the current year in a synthesized year range.
pub const YEAR_SPAN: i32 = 50;

const US_TABLE: &str = include_str!("locales/us.json");
const FR_TABLE: &str = include_str!("locales/fr.json");

/// Captions shown next to the sub-pickers when labels are enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    pub year: String,
    pub month: String,
    pub day: String,
    pub hour: String,
    pub minute: String,
    #[serde(rename = "selectADay")]
    pub select_a_day: String,
}

/// One language's table as returned by a [`TranslationService`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationTable {
    /// Twelve month names, January first.
    pub months: Vec<String>,
    pub labels: Labels,
    /// Selectable years; may be empty, in which case a range is synthesized.
    #[serde(default)]
    pub years: Vec<i32>,
}

impl TranslationTable {
    /// Parse a table from its JSON form and check it has twelve month names.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::InvalidLocaleTable`] on malformed JSON or a
    /// month list of the wrong length.
    pub fn from_json(lang: &str, json: &str) -> Result<Self> {
        let table: TranslationTable =
            serde_json::from_str(json).map_err(|e| PickerError::InvalidLocaleTable {
                lang: lang.to_string(),
                reason: e.to_string(),
            })?;
        table.validate(lang)?;
        Ok(table)
    }

    fn validate(&self, lang: &str) -> Result<()> {
        if self.months.len() != MONTHS_PER_YEAR as usize {
            return Err(PickerError::InvalidLocaleTable {
                lang: lang.to_string(),
                reason: format!("expected 12 month names, got {}", self.months.len()),
            });
        }
        Ok(())
    }
}

/// Source of translation tables, keyed by language tag.
pub trait TranslationService {
    /// The table for exactly `lang`, or `None` if there is none.
    fn lookup(&self, lang: &str) -> Option<TranslationTable>;
}

/// In-memory tables, seeded with the bundled `us` and `fr` locales.
#[derive(Debug, Clone)]
pub struct BuiltinTranslations {
    tables: BTreeMap<String, TranslationTable>,
}

impl BuiltinTranslations {
    pub fn new() -> Self {
        let mut tables = BTreeMap::new();
        for (lang, json) in [("us", US_TABLE), ("fr", FR_TABLE)] {
            let table = TranslationTable::from_json(lang, json)
                .expect("bundled locale tables are valid");
            tables.insert(lang.to_string(), table);
        }
        Self { tables }
    }

    /// A service with no tables at all.
    pub fn empty() -> Self {
        Self {
            tables: BTreeMap::new(),
        }
    }

    /// Add or replace the table for `lang`.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::InvalidLocaleTable`] if the table does not have
    /// twelve month names.
    pub fn insert(&mut self, lang: &str, table: TranslationTable) -> Result<()> {
        table.validate(lang)?;
        self.tables.insert(lang.to_string(), table);
        Ok(())
    }

    /// Parse `json` and add it as the table for `lang`.
    pub fn insert_json(&mut self, lang: &str, json: &str) -> Result<()> {
        let table = TranslationTable::from_json(lang, json)?;
        self.tables.insert(lang.to_string(), table);
        Ok(())
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }
}

impl Default for BuiltinTranslations {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslationService for BuiltinTranslations {
    fn lookup(&self, lang: &str) -> Option<TranslationTable> {
        self.tables.get(lang).cloned()
    }
}

/// A locale after fallback and year synthesis, ready for the sub-pickers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedLocale {
    /// The language whose table was used (the default on fallback).
    pub language: String,
    pub month_names: Vec<String>,
    pub years: Vec<i32>,
    pub labels: Labels,
}

impl ResolvedLocale {
    /// Name of the 0-based `month0`, if in range.
    pub fn month_name(&self, month0: u32) -> Option<&str> {
        self.month_names.get(month0 as usize).map(String::as_str)
    }

    /// 0-based index of an exact month name.
    pub fn month_index(&self, name: &str) -> Option<u32> {
        self.month_names
            .iter()
            .position(|m| m == name)
            .map(|i| i as u32)
    }
}

/// Resolve `lang` through `service`, applying fallback and year synthesis.
///
/// `current_year` anchors the synthesized year range; pass the year from the
/// picker's clock so results stay deterministic under test.
///
/// # Errors
///
/// Returns [`PickerError::MissingDefaultLocale`] only when the service has
/// neither `lang` nor [`DEFAULT_LANGUAGE`]. An unknown tag alone is never an
/// error.
///
/// # Examples
///
/// ```
/// use datepick_engine::locale::{resolve_locale, BuiltinTranslations};
///
/// let locale = resolve_locale(&BuiltinTranslations::new(), "fr", 2026).unwrap();
/// assert_eq!(locale.month_names[7], "Août");
/// assert_eq!(locale.years.len(), 101);
/// ```
pub fn resolve_locale(
    service: &dyn TranslationService,
    lang: &str,
    current_year: i32,
) -> Result<ResolvedLocale> {
    let (language, table) = match service.lookup(lang) {
        Some(table) => (lang.to_string(), table),
        None => {
            debug!(requested = %lang, fallback = DEFAULT_LANGUAGE, "no translation table, using default");
            let table = service
                .lookup(DEFAULT_LANGUAGE)
                .ok_or_else(|| PickerError::MissingDefaultLocale(DEFAULT_LANGUAGE.to_string()))?;
            (DEFAULT_LANGUAGE.to_string(), table)
        }
    };

    let years = if table.years.is_empty() {
        debug!(current_year, "synthesizing year range");
        synthesize_years(current_year)
    } else {
        table.years
    };

    Ok(ResolvedLocale {
        language,
        month_names: table.months,
        years,
        labels: table.labels,
    })
}

/// [`resolve_locale`] anchored on the local wall clock's year.
pub fn resolve_locale_now(service: &dyn TranslationService, lang: &str) -> Result<ResolvedLocale> {
    resolve_locale(service, lang, Local::now().year())
}

fn synthesize_years(current_year: i32) -> Vec<i32> {
    (current_year - YEAR_SPAN..=current_year + YEAR_SPAN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> BuiltinTranslations {
        BuiltinTranslations::new()
    }

    #[test]
    fn test_bundled_tables_parse() {
        let service = builtin();
        let langs: Vec<&str> = service.languages().collect();
        assert_eq!(langs, vec!["fr", "us"]);
    }

    #[test]
    fn test_resolve_us() {
        let locale = resolve_locale(&builtin(), "us", 2026).unwrap();
        assert_eq!(locale.language, "us");
        assert_eq!(locale.month_names[0], "January");
        assert_eq!(locale.labels.select_a_day, "Select a day");
    }

    #[test]
    fn test_resolve_fr() {
        let locale = resolve_locale(&builtin(), "fr", 2026).unwrap();
        assert_eq!(locale.month_names[11], "Décembre");
        assert_eq!(locale.labels.year, "Année");
    }

    #[test]
    fn test_unknown_tag_falls_back_to_default() {
        let fallback = resolve_locale(&builtin(), "xx", 2026).unwrap();
        let us = resolve_locale(&builtin(), "us", 2026).unwrap();
        assert_eq!(fallback.language, DEFAULT_LANGUAGE);
        assert_eq!(fallback.month_names, us.month_names);
        assert_eq!(fallback.labels, us.labels);
    }

    #[test]
    fn test_lookup_is_exact_match() {
        // "US" is not "us"
        let locale = resolve_locale(&builtin(), "US", 2026).unwrap();
        assert_eq!(locale.language, "us");
        let locale = resolve_locale(&builtin(), "fr-FR", 2026).unwrap();
        assert_eq!(locale.language, "us");
    }

    #[test]
    fn test_empty_years_synthesized_around_current_year() {
        let locale = resolve_locale(&builtin(), "us", 2026).unwrap();
        assert_eq!(locale.years.len(), 101);
        assert_eq!(locale.years[50], 2026);
        assert_eq!(locale.years.first(), Some(&1976));
        assert_eq!(locale.years.last(), Some(&2076));
    }

    #[test]
    fn test_explicit_years_kept() {
        let mut service = builtin();
        let mut table = service.lookup("us").unwrap();
        table.years = vec![2020, 2021, 2022];
        service.insert("gb", table).unwrap();
        let locale = resolve_locale(&service, "gb", 2026).unwrap();
        assert_eq!(locale.years, vec![2020, 2021, 2022]);
    }

    #[test]
    fn test_missing_years_key_is_empty() {
        let json = r#"{
            "months": ["1","2","3","4","5","6","7","8","9","10","11","12"],
            "labels": {"year":"y","month":"m","day":"d","hour":"h","minute":"mi","selectADay":"s"}
        }"#;
        let table = TranslationTable::from_json("num", json).unwrap();
        assert!(table.years.is_empty());
    }

    #[test]
    fn test_wrong_month_count_rejected() {
        let mut service = builtin();
        let mut table = service.lookup("us").unwrap();
        table.months.pop();
        let err = service.insert("bad", table).unwrap_err();
        assert!(err.to_string().contains("expected 12 month names"), "got: {err}");
    }

    #[test]
    fn test_malformed_json_rejected() {
        let result = TranslationTable::from_json("bad", "{ not json");
        assert!(matches!(
            result,
            Err(PickerError::InvalidLocaleTable { .. })
        ));
    }

    #[test]
    fn test_inserted_json_table_is_resolved() {
        let json = r#"{
            "months": ["Januar","Februar","März","April","Mai","Juni",
                       "Juli","August","September","Oktober","November","Dezember"],
            "labels": {"year":"Jahr","month":"Monat","day":"Tag","hour":"Stunde",
                       "minute":"Minute","selectADay":"Tag wählen"},
            "years": [2024, 2025]
        }"#;
        let mut service = builtin();
        service.insert_json("de", json).unwrap();
        assert!(service.languages().any(|lang| lang == "de"));

        let locale = resolve_locale(&service, "de", 2026).unwrap();
        assert_eq!(locale.language, "de");
        assert_eq!(locale.month_index("März"), Some(2));
        assert_eq!(locale.years, vec![2024, 2025]);
        assert_eq!(locale.labels.select_a_day, "Tag wählen");
    }

    #[test]
    fn test_insert_json_rejects_short_month_list() {
        let mut service = builtin();
        let json = r#"{"months": ["a"], "labels": {"year":"y","month":"m","day":"d",
            "hour":"h","minute":"mi","selectADay":"s"}}"#;
        assert!(matches!(
            service.insert_json("short", json),
            Err(PickerError::InvalidLocaleTable { .. })
        ));
        assert!(service.lookup("short").is_none());
    }

    #[test]
    fn test_missing_default_is_error() {
        let result = resolve_locale(&BuiltinTranslations::empty(), "xx", 2026);
        assert_eq!(
            result,
            Err(PickerError::MissingDefaultLocale("us".to_string()))
        );
    }

    #[test]
    fn test_month_index_round_trip() {
        let locale = resolve_locale(&builtin(), "fr", 2026).unwrap();
        assert_eq!(locale.month_index("Août"), Some(7));
        assert_eq!(locale.month_name(7), Some("Août"));
        assert_eq!(locale.month_index("August"), None);
        assert_eq!(locale.month_name(12), None);
    }
}
