//! Scripted picker events for `datepick run`.

use std::fmt;
use std::str::FromStr;

use datepick_engine::{CommitSink, DateTimePicker, DateValue, DropdownKind, PickerError};

/// One host notification or user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Click on the text field.
    Activate,
    /// Pointer activity outside the picker.
    Dismiss,
    /// Pointer activity inside the picker.
    Inside,
    /// Pick a dropdown option by its label.
    Select(DropdownKind, String),
    Day(u32),
    Hover(Option<u32>),
}

impl FromStr for Event {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "activate" => return Ok(Event::Activate),
            "dismiss" => return Ok(Event::Dismiss),
            "inside" => return Ok(Event::Inside),
            "unhover" => return Ok(Event::Hover(None)),
            _ => {}
        }

        let (key, arg) = s
            .split_once('=')
            .ok_or_else(|| format!("unknown event '{s}'"))?;
        let kind = match key {
            "year" => DropdownKind::Year,
            "month" => DropdownKind::Month,
            "hour" => DropdownKind::Hour,
            "minute" => DropdownKind::Minute,
            "day" => return parse_day(arg).map(Event::Day),
            "hover" => return parse_day(arg).map(|d| Event::Hover(Some(d))),
            _ => return Err(format!("unknown event '{key}'")),
        };
        Ok(Event::Select(kind, arg.to_string()))
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Activate => f.write_str("activate"),
            Event::Dismiss => f.write_str("dismiss"),
            Event::Inside => f.write_str("inside"),
            Event::Select(kind, label) => write!(f, "{kind}={label}"),
            Event::Day(day) => write!(f, "day={day}"),
            Event::Hover(Some(day)) => write!(f, "hover={day}"),
            Event::Hover(None) => f.write_str("unhover"),
        }
    }
}

fn parse_day(arg: &str) -> Result<u32, String> {
    arg.parse()
        .map_err(|_| format!("day must be a number, got '{arg}'"))
}

/// Apply `event`, returning the committed value if it produced one.
pub fn apply<S: CommitSink>(
    picker: &mut DateTimePicker<S>,
    event: &Event,
) -> Result<Option<DateValue>, PickerError> {
    match event {
        Event::Activate => {
            picker.activate();
            Ok(None)
        }
        Event::Dismiss => {
            picker.notify_external_interaction(true);
            Ok(None)
        }
        Event::Inside => {
            picker.notify_external_interaction(false);
            Ok(None)
        }
        Event::Select(kind, label) => picker.select_option(*kind, label),
        Event::Day(day) => picker.pick_day(*day).map(Some),
        Event::Hover(day) => picker.hover_day(*day).map(|()| None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_events() {
        assert_eq!("activate".parse::<Event>().unwrap(), Event::Activate);
        assert_eq!("dismiss".parse::<Event>().unwrap(), Event::Dismiss);
        assert_eq!("unhover".parse::<Event>().unwrap(), Event::Hover(None));
    }

    #[test]
    fn test_parse_dropdown_events_keep_label() {
        assert_eq!(
            "month=Février".parse::<Event>().unwrap(),
            Event::Select(DropdownKind::Month, "Février".to_string())
        );
        assert_eq!(
            "hour=07".parse::<Event>().unwrap(),
            Event::Select(DropdownKind::Hour, "07".to_string())
        );
    }

    #[test]
    fn test_parse_day() {
        assert_eq!("day=15".parse::<Event>().unwrap(), Event::Day(15));
        assert_eq!("hover=3".parse::<Event>().unwrap(), Event::Hover(Some(3)));
        assert!("day=x".parse::<Event>().is_err());
    }

    #[test]
    fn test_parse_unknown() {
        assert!("second=3".parse::<Event>().is_err());
        assert!("close".parse::<Event>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for raw in ["activate", "year=2024", "day=9", "hover=2", "unhover"] {
            assert_eq!(raw.parse::<Event>().unwrap().to_string(), raw);
        }
    }
}
