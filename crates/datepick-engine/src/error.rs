//! Error types for datepick-engine operations.

use thiserror::Error;

use crate::picker::PickerState;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PickerError {
    #[error("Invalid month: {0} (expected 0-11)")]
    InvalidMonth(u32),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),

    #[error("Unknown option '{label}' for {kind} dropdown")]
    UnknownOption { kind: &'static str, label: String },

    #[error("Invalid locale table '{lang}': {reason}")]
    InvalidLocaleTable { lang: String, reason: String },

    #[error("Translation service has no table for default language '{0}'")]
    MissingDefaultLocale(String),

    #[error("Time selection is disabled for this picker")]
    TimeSelectionDisabled,

    #[error("Cannot {event} while {state:?}")]
    InvalidTransition {
        event: &'static str,
        state: PickerState,
    },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, PickerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_month_message() {
        assert_eq!(
            PickerError::InvalidMonth(12).to_string(),
            "Invalid month: 12 (expected 0-11)"
        );
    }

    #[test]
    fn test_invalid_transition_message() {
        let e = PickerError::InvalidTransition {
            event: "pick a day",
            state: PickerState::Closed,
        };
        assert_eq!(e.to_string(), "Cannot pick a day while Closed");
    }

    #[test]
    fn test_unknown_option_message() {
        let e = PickerError::UnknownOption {
            kind: "month",
            label: "Smarch".to_string(),
        };
        assert_eq!(e.to_string(), "Unknown option 'Smarch' for month dropdown");
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<PickerError>();
    }
}
