//! Date formats used by the client.
//!
//! `DD/MM/YY` is what people see and type; ISO 8601 `YYYY-MM-DD` is the only
//! format sent to the backend. Conversion happens here and nowhere else.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// On-screen format, e.g. `15/03/25`
pub const DISPLAY_FORMAT: &str = "%d/%m/%y";

/// Wire format, e.g. `2025-03-15`
pub const WIRE_FORMAT: &str = "%Y-%m-%d";

/// Today's date in the browser's local time zone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn format_display(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

pub fn format_wire(date: NaiveDate) -> String {
    date.format(WIRE_FORMAT).to_string()
}

/// Parse `DD/MM/YY` or `DD/MM/YYYY`. Two-digit years are taken as 20YY.
pub fn parse_display(input: &str) -> Option<NaiveDate> {
    let mut parts = input.trim().split('/');
    let day = parts.next()?.trim();
    let month = parts.next()?.trim();
    let year = parts.next()?.trim();
    if parts.next().is_some() {
        return None;
    }

    let day: u32 = day.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let year: i32 = match year.len() {
        2 => format!("20{}", year).parse().ok()?,
        4 => year.parse().ok()?,
        _ => return None,
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parse any date shape the client may be handed: the display format, ISO
/// dates, RFC 3339 timestamps and naive `YYYY-MM-DDTHH:MM:SS` timestamps.
pub fn parse_flexible(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if input.contains('/') {
        return parse_display(input);
    }

    NaiveDate::parse_from_str(input, WIRE_FORMAT)
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(input).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
}

/// Resolve an optional caller-supplied date, falling back to `today` when
/// it is missing or unreadable.
pub fn seed_date(seed: Option<&str>, today: NaiveDate) -> NaiveDate {
    match seed.and_then(parse_flexible) {
        Some(date) => date,
        None => {
            if let Some(raw) = seed.filter(|raw| !raw.trim().is_empty()) {
                log::debug!("unreadable date `{}`, using today", raw);
            }
            today
        }
    }
}

/// `DD/MM/YY` (or any other accepted shape) to `YYYY-MM-DD`
pub fn display_to_wire(input: &str) -> Option<String> {
    parse_flexible(input).map(format_wire)
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Invalid Month",
    }
}

/// Serde adapter: writes ISO dates, reads any shape `parse_flexible` accepts.
pub mod wire_date {
    use super::{format_wire, parse_flexible};
    use chrono::NaiveDate;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_wire(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_flexible(&raw).ok_or_else(|| D::Error::custom(format!("unrecognised date `{}`", raw)))
    }
}
