/// Thai Buddhist-era date formatting
///
/// The formatter is a pure function: locale configuration (month names and
/// the era offset) is passed in explicitly instead of being set up as
/// process-global state, so the same code path is used by the UI and by
/// tests without any ambient setup.

use chrono::{Datelike, NaiveDate};

/// Locale configuration for Buddhist-era date display.
///
/// The Buddhist era numbers years as Gregorian year + 543. `Default`
/// provides the standard Thai-language month table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThaiBuddhistLocale {
    /// Full month names, January first
    pub month_names: [&'static str; 12],
    /// Years to add to the Gregorian year (543 for the Buddhist era)
    pub era_offset: i32,
}

impl Default for ThaiBuddhistLocale {
    fn default() -> Self {
        Self {
            month_names: [
                "มกราคม",
                "กุมภาพันธ์",
                "มีนาคม",
                "เมษายน",
                "พฤษภาคม",
                "มิถุนายน",
                "กรกฎาคม",
                "สิงหาคม",
                "กันยายน",
                "ตุลาคม",
                "พฤศจิกายน",
                "ธันวาคม",
            ],
            era_offset: 543,
        }
    }
}

/// Format a calendar date as "<day> <month name> <era year>".
///
/// Example with the default locale: 2024-06-15 becomes "15 มิถุนายน 2567".
pub fn format_date(date: NaiveDate, locale: &ThaiBuddhistLocale) -> String {
    let month = locale.month_names[date.month0() as usize];
    format!("{} {} {}", date.day(), month, date.year() + locale.era_offset)
}

/// Produce the display text for the form's date field.
///
/// A cleared or unrepresentable picker value arrives as `None` and yields
/// an empty string; that is a normal state, not an error.
pub fn display_date(date: Option<NaiveDate>, locale: &ThaiBuddhistLocale) -> String {
    match date {
        Some(date) => format_date(date, locale),
        None => String::new(),
    }
}
