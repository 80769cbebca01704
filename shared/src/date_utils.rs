//! Date parsing and formatting shared by the form, the list screens and the
//! HTTP wire format.

use chrono::{DateTime, Duration, NaiveDate};

const DISPLAY_FORMAT: &str = "%Y-%m-%d";

/// Formats accepted from user input, tried in order before falling back to RFC 3339
const INPUT_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Format a date as YYYY-MM-DD
pub fn format_for_display(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Parse a user-typed date. Returns `None` for anything unparseable, which
/// the form treats as an invalid date.
pub fn parse_date_input(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|timestamp| timestamp.date_naive())
        })
}

/// The date `days` days before `date`
pub fn date_minus_days(date: NaiveDate, days: i64) -> NaiveDate {
    date - Duration::days(days)
}

/// True when `date` lies in the `days`-day window ending at `today` (inclusive)
pub fn is_within_last_days(date: NaiveDate, today: NaiveDate, days: i64) -> bool {
    date > date_minus_days(today, days) && date <= today
}

/// Serde adapter: writes YYYY-MM-DD, reads anything `parse_date_input` accepts
pub mod flexible_date {
    use super::{format_for_display, parse_date_input};
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_for_display(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_date_input(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid expense date: {}", raw)))
    }
}
