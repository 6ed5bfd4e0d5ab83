//! Presentation of the picker: text field, form value and surface view.
//!
//! - [`format_display`]: the read-only text field (`DD/MM/YYYY[ HH:mm]`)
//! - [`to_iso`] / [`parse_iso`]: the machine-readable form value
//! - [`FormField`]: the hidden input submitted with a form
//! - [`SurfaceSnapshot`] / [`render_grid`]: what the open surface shows

use chrono::{DateTime, NaiveDateTime};
use serde::Serialize;

use crate::dropdown::{Dropdown, DropdownKind};
use crate::error::{PickerError, Result};
use crate::picker::{CommitSink, DateTimePicker, PickerState};
use crate::value::DateValue;

const DISPLAY_DATE: &str = "%d/%m/%Y";
const DISPLAY_DATE_TIME: &str = "%d/%m/%Y %H:%M";
const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";
// `%Y...Z` covers signed years outside 0000-9999.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.fZ",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];
const GRID_COLUMNS: usize = 7;

/// Text shown in the picker's field.
///
/// # Examples
///
/// ```
/// use datepick_engine::{present::format_display, DateValue};
///
/// let v = DateValue::new(2025, 5, 15, 14, 5).unwrap();
/// assert_eq!(format_display(&v, false), "15/06/2025");
/// assert_eq!(format_display(&v, true), "15/06/2025 14:05");
/// ```
pub fn format_display(value: &DateValue, with_time: bool) -> String {
    let pattern = if with_time {
        DISPLAY_DATE_TIME
    } else {
        DISPLAY_DATE
    };
    value.as_naive().format(pattern).to_string()
}

/// ISO 8601 form value, `YYYY-MM-DDTHH:mm:ss.sssZ`.
///
/// The wall-clock fields are written as-is with a `Z` designator; no zone
/// conversion happens.
pub fn to_iso(value: &DateValue) -> String {
    value.as_naive().format(ISO_FORMAT).to_string()
}

/// Parse a form value back into a [`DateValue`].
///
/// Accepts the [`to_iso`] format (including signed years beyond four
/// digits), any RFC 3339 string (its wall-clock fields are kept as written)
/// and offset-less `YYYY-MM-DDTHH:mm[:ss[.fff]]`.
///
/// # Errors
///
/// Returns [`PickerError::InvalidDatetime`] if none of these match.
pub fn parse_iso(s: &str) -> Result<DateValue> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(DateValue::from_naive(dt.naive_local()));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(DateValue::from_naive)
        .ok_or_else(|| PickerError::InvalidDatetime(format!("'{s}': expected ISO 8601")))
}

/// The hidden input carrying the value in a form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub name: String,
    pub value: String,
}

/// Everything the open surface displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurfaceSnapshot {
    pub state: PickerState,
    pub year: i32,
    pub month0: u32,
    pub month_name: String,
    pub days: Vec<u32>,
    pub selected_day: Option<u32>,
    pub hovered_day: Option<u32>,
    /// "Select a day" prompt, when labels are enabled.
    pub prompt: Option<String>,
    pub year_dropdown: Dropdown,
    pub month_dropdown: Dropdown,
    pub hour_dropdown: Option<Dropdown>,
    pub minute_dropdown: Option<Dropdown>,
}

impl SurfaceSnapshot {
    /// Snapshot `picker`'s surface, or `None` while it is closed.
    pub fn capture<S: CommitSink>(picker: &DateTimePicker<S>) -> Option<Self> {
        let grid = picker.grid()?;
        let highlight = picker.highlight()?;
        let locale = picker.locale();
        let time_visible = picker.time_picker_visible();
        Some(Self {
            state: picker.state(),
            year: grid.year(),
            month0: grid.month0(),
            month_name: locale.month_name(grid.month0())?.to_string(),
            days: grid.days().ok()?,
            selected_day: highlight.selected_day(),
            hovered_day: highlight.hovered_day(),
            prompt: picker
                .config()
                .label
                .then(|| locale.labels.select_a_day.clone()),
            year_dropdown: picker.dropdown(DropdownKind::Year).ok()?,
            month_dropdown: picker.dropdown(DropdownKind::Month).ok()?,
            hour_dropdown: time_visible
                .then(|| picker.dropdown(DropdownKind::Hour).ok())
                .flatten(),
            minute_dropdown: time_visible
                .then(|| picker.dropdown(DropdownKind::Minute).ok())
                .flatten(),
        })
    }
}

/// Plain-text rendering of a surface snapshot.
///
/// The selected day is bracketed (`[15]`) and the hovered day marked with
/// angle brackets (`<16>`).
pub fn render_grid(snapshot: &SurfaceSnapshot) -> String {
    let mut out = String::new();
    out.push_str(&dropdown_line(&snapshot.year_dropdown));
    out.push_str("  ");
    out.push_str(&dropdown_line(&snapshot.month_dropdown));
    out.push('\n');
    if let Some(prompt) = &snapshot.prompt {
        out.push_str(prompt);
        out.push('\n');
    }
    for week in snapshot.days.chunks(GRID_COLUMNS) {
        let row: String = week
            .iter()
            .map(|&day| {
                if snapshot.selected_day == Some(day) {
                    format!("[{day:>2}]")
                } else if snapshot.hovered_day == Some(day) {
                    format!("<{day:>2}>")
                } else {
                    format!(" {day:>2} ")
                }
            })
            .collect();
        out.push_str(row.trim_end());
        out.push('\n');
    }
    if let (Some(hour), Some(minute)) = (&snapshot.hour_dropdown, &snapshot.minute_dropdown) {
        out.push_str(&dropdown_line(hour));
        out.push_str("  ");
        out.push_str(&dropdown_line(minute));
        out.push('\n');
    }
    out
}

fn dropdown_line(dropdown: &Dropdown) -> String {
    match dropdown.caption() {
        Some(caption) => format!("{caption}: {}", dropdown.value()),
        None => dropdown.value().to_string(),
    }
}

impl<S: CommitSink> DateTimePicker<S> {
    /// The field text, with the time when time selection is enabled.
    pub fn display_text(&self) -> String {
        format_display(&self.value(), self.config().show_time_select)
    }

    pub fn iso_value(&self) -> String {
        to_iso(&self.value())
    }

    pub fn form_field(&self) -> FormField {
        FormField {
            name: self.config().name.clone(),
            value: self.iso_value(),
        }
    }

    pub fn snapshot(&self) -> Option<SurfaceSnapshot> {
        SurfaceSnapshot::capture(self)
    }
}
