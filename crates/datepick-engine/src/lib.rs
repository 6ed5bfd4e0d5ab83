//! # datepick-engine
//!
//! The calendar state machine behind a date/time picker widget.
//!
//! A picker shows a read-only text field. Activating it opens a surface with
//! year and month dropdowns, a day grid and, optionally, hour and minute
//! dropdowns. This crate holds everything except the drawing: which days a
//! month has, which month the grid shows, how day/hour/minute picks merge
//! into one value, and when the owner is told about it.
//!
//! ## Modules
//!
//! - [`calendar`]: Month lengths and day lists
//! - [`locale`]: Translation tables, language fallback, year ranges
//! - [`value`]: The composite date-time value under edit
//! - [`navigation`]: Navigated year/month and day highlighting
//! - [`dropdown`]: Sub-picker option lists and label resolution
//! - [`surface`]: Open/closed surface and its per-open session
//! - [`picker`]: The top-level picker state machine
//! - [`present`]: Display text, ISO form value, surface snapshots
//! - [`clock`]: Source of the current moment
//! - [`config`]: Picker configuration
//! - [`error`]: Error types
//!
//! ## Example
//!
//! ```
//! use datepick_engine::{CommitLog, DateTimePicker, DateValue, PickerConfig, PickerState};
//!
//! let initial = DateValue::new(2025, 5, 1, 9, 0).unwrap();
//! let config = PickerConfig::default().with_time(true);
//! let mut picker = DateTimePicker::new(config, Some(initial), CommitLog::new()).unwrap();
//!
//! picker.activate();
//! picker.pick_day(15).unwrap();
//! picker.pick_hour(14).unwrap();
//! picker.pick_minute(30).unwrap();
//!
//! assert_eq!(picker.state(), PickerState::Closed);
//! assert_eq!(picker.display_text(), "15/06/2025 14:30");
//! assert_eq!(picker.sink().len(), 3);
//! ```

pub mod calendar;
pub mod clock;
pub mod config;
pub mod dropdown;
pub mod error;
pub mod locale;
pub mod navigation;
pub mod picker;
pub mod present;
pub mod surface;
pub mod value;

pub use calendar::{days_in_month, is_leap_year, month_length};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::PickerConfig;
pub use dropdown::{Dropdown, DropdownKind, Selection};
pub use error::PickerError;
pub use locale::{
    resolve_locale, resolve_locale_now, BuiltinTranslations, Labels, ResolvedLocale,
    TranslationService, TranslationTable,
};
pub use navigation::{GridNavigation, Highlight};
pub use picker::{CommitLog, CommitSink, DateTimePicker, PickerState};
pub use present::{format_display, parse_iso, render_grid, to_iso, FormField, SurfaceSnapshot};
pub use surface::{Phase, Session, Surface};
pub use value::DateValue;
