//! Discovery Date Helpers
//!
//! Lenient parsing of `find_date` values plus the two string renderings
//! the list needs: the locale date string the search matches against and
//! the label shown on each row.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Deserializer};

/// Date string format used when matching the search query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateLocale {
    /// `2024/1/5`
    #[default]
    Ja,
    /// `1/5/2024`
    EnUs,
    /// `2024-01-05`
    Iso,
}

impl DateLocale {
    /// Map a BCP 47 language tag (or `iso`) to a locale.
    /// Unrecognised tags fall back to `Ja`.
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim().to_ascii_lowercase();
        if tag == "iso" {
            DateLocale::Iso
        } else if tag == "en" || tag == "en-us" || tag == "en_us" {
            DateLocale::EnUs
        } else {
            DateLocale::Ja
        }
    }

    pub fn format(&self, date: NaiveDate) -> String {
        match self {
            DateLocale::Ja => format!("{}/{}/{}", date.year(), date.month(), date.day()),
            DateLocale::EnUs => format!("{}/{}/{}", date.month(), date.day(), date.year()),
            DateLocale::Iso => date.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Parse a backend date value in the browser's local time zone.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and naive
/// `YYYY-MM-DDTHH:MM:SS[.f]` timestamps.
pub fn parse_find_date(raw: &str) -> Option<NaiveDate> {
    parse_find_date_in(raw, &Local)
}

/// Plain dates and naive timestamps are taken as-is; timestamps with an
/// offset are converted to `tz` before taking the calendar date.
fn parse_find_date_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(tz).date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|ts| ts.date())
}

/// Serde adapter: anything that is not a parsable date string becomes `None`.
pub fn deserialize_find_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(parse_find_date))
}

/// Row label, e.g. `発見日：2024年1月5日`
pub fn discovery_label(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => format!("発見日：{}年{}月{}日", d.year(), d.month(), d.day()),
        None => "発見日：不明".to_string(),
    }
}
