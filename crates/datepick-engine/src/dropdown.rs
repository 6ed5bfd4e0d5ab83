//! Option lists for the year, month, hour and minute sub-pickers.
//!
//! Each dropdown shows labels and hands back whichever label was clicked.
//! [`Dropdown::resolve`] turns that label into a typed [`Selection`] by exact
//! match against the same list the dropdown displayed.

use std::fmt;

use serde::Serialize;

use crate::error::{PickerError, Result};
use crate::locale::ResolvedLocale;

const HOURS_PER_DAY: u32 = 24;
const MINUTES_PER_HOUR: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DropdownKind {
    Year,
    Month,
    Hour,
    Minute,
}

impl DropdownKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DropdownKind::Year => "year",
            DropdownKind::Month => "month",
            DropdownKind::Hour => "hour",
            DropdownKind::Minute => "minute",
        }
    }
}

impl fmt::Display for DropdownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved dropdown pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Year(i32),
    /// 0-based month.
    Month(u32),
    Hour(u32),
    Minute(u32),
}

/// One sub-picker's options and currently displayed label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dropdown {
    kind: DropdownKind,
    /// Caption from the locale, present only when labels are enabled.
    caption: Option<String>,
    options: Vec<String>,
    value: String,
    #[serde(skip)]
    years: Vec<i32>,
}

impl Dropdown {
    /// Year options from the locale's year range.
    pub fn years(locale: &ResolvedLocale, year: i32) -> Self {
        Self {
            kind: DropdownKind::Year,
            caption: None,
            options: locale.years.iter().map(i32::to_string).collect(),
            value: year.to_string(),
            years: locale.years.clone(),
        }
    }

    /// Month options from the locale's month names.
    pub fn months(locale: &ResolvedLocale, month0: u32) -> Self {
        Self {
            kind: DropdownKind::Month,
            caption: None,
            options: locale.month_names.clone(),
            value: locale.month_name(month0).unwrap_or_default().to_string(),
            years: Vec::new(),
        }
    }

    /// Hours `00`..`23`.
    pub fn hours(hour: u32) -> Self {
        Self::numeric(DropdownKind::Hour, HOURS_PER_DAY, hour)
    }

    /// Minutes `00`..`59`.
    pub fn minutes(minute: u32) -> Self {
        Self::numeric(DropdownKind::Minute, MINUTES_PER_HOUR, minute)
    }

    fn numeric(kind: DropdownKind, count: u32, value: u32) -> Self {
        Self {
            kind,
            caption: None,
            options: (0..count).map(two_digits).collect(),
            value: two_digits(value),
            years: Vec::new(),
        }
    }

    /// Attach the locale caption for this kind of dropdown.
    pub fn with_caption(mut self, locale: &ResolvedLocale) -> Self {
        let labels = &locale.labels;
        let caption = match self.kind {
            DropdownKind::Year => &labels.year,
            DropdownKind::Month => &labels.month,
            DropdownKind::Hour => &labels.hour,
            DropdownKind::Minute => &labels.minute,
        };
        self.caption = Some(caption.clone());
        self
    }

    pub fn kind(&self) -> DropdownKind {
        self.kind
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// The label currently shown on the dropdown button.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Map an option label back to its value.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::UnknownOption`] if `label` is not one of
    /// [`options`](Self::options).
    pub fn resolve(&self, label: &str) -> Result<Selection> {
        let position = self
            .options
            .iter()
            .position(|option| option == label)
            .ok_or_else(|| PickerError::UnknownOption {
                kind: self.kind.as_str(),
                label: label.to_string(),
            })?;
        let selection = match self.kind {
            DropdownKind::Year => Selection::Year(self.years[position]),
            DropdownKind::Month => Selection::Month(position as u32),
            DropdownKind::Hour => Selection::Hour(position as u32),
            DropdownKind::Minute => Selection::Minute(position as u32),
        };
        Ok(selection)
    }
}

fn two_digits(n: u32) -> String {
    format!("{n:02}")
}
