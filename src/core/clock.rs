//! Europe/Belgrade wall-clock conversions.
//!
//! Only UTC instants are persisted. The Belgrade form exists at the edges:
//! parsing what an admin typed into a `datetime-local` field, and printing
//! stored instants for people.

use chrono::format::{Item, StrftimeItems};
use chrono::{
    DateTime, Locale, NaiveDate, NaiveDateTime, Offset, TimeDelta, TimeZone, Timelike, Utc,
};
use chrono_tz::Europe::Belgrade;
use std::fmt::Write;

/// Formats accepted for a naive local date-time.
const LOCAL_INPUT_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Output format for [`to_zoned_display`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayFormat {
    /// `18:30`
    Time,
    /// `15 June 2024`
    Date,
    /// `15 June 2024, 18:30`
    DateTime,
    /// `Saturday, 15 June 2024`
    WeekdayDate,
    /// Any strftime pattern.
    Pattern(String),
}

impl DisplayFormat {
    pub fn pattern(&self) -> &str {
        match self {
            DisplayFormat::Time => "%H:%M",
            DisplayFormat::Date => "%-d %B %Y",
            DisplayFormat::DateTime => "%-d %B %Y, %H:%M",
            DisplayFormat::WeekdayDate => "%A, %-d %B %Y",
            DisplayFormat::Pattern(p) => p.as_str(),
        }
    }

    /// False when the pattern holds a specifier chrono cannot format.
    pub fn is_valid(&self) -> bool {
        !StrftimeItems::new(self.pattern()).any(|item| matches!(item, Item::Error))
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "time" => Some(DisplayFormat::Time),
            "date" => Some(DisplayFormat::Date),
            "datetime" | "date-time" => Some(DisplayFormat::DateTime),
            "weekday" | "weekday-date" => Some(DisplayFormat::WeekdayDate),
            _ => None,
        }
    }
}

/// Map a language tag (`sr`, `sr-Latn`, `ru`, `en`, ...) to a chrono locale.
/// Unknown tags fall back to English.
pub fn locale_for(tag: &str) -> Locale {
    let tag = tag.trim().to_lowercase().replace('_', "-");
    match tag.as_str() {
        "sr-latn" | "sr-latn-rs" | "sr-rs@latin" | "sr-rs-latin" => Locale::sr_RS_latin,
        "sr" | "sr-cyrl" | "sr-rs" | "sr-cyrl-rs" => Locale::sr_RS,
        "ru" | "ru-ru" => Locale::ru_RU,
        _ => Locale::en_US,
    }
}

/// Belgrade's UTC offset at `instant`, in whole minutes.
pub fn belgrade_offset_minutes(instant: DateTime<Utc>) -> i32 {
    Belgrade
        .offset_from_utc_datetime(&instant.naive_utc())
        .fix()
        .local_minus_utc()
        / 60
}

/// Format a UTC instant as Belgrade civil time with localized names.
/// A pattern chrono cannot render gives an empty string.
pub fn to_zoned_display(instant: DateTime<Utc>, locale: &str, format: &DisplayFormat) -> String {
    if !format.is_valid() {
        return String::new();
    }

    let zoned = instant.with_timezone(&Belgrade);
    let mut out = String::new();
    match write!(out, "{}", zoned.format_localized(format.pattern(), locale_for(locale))) {
        Ok(()) => out,
        Err(_) => String::new(),
    }
}

/// Like [`to_zoned_display`] for a stored text value. Missing or
/// unparseable input gives an empty string.
pub fn display_iso(input: Option<&str>, locale: &str, format: &DisplayFormat) -> String {
    input
        .and_then(parse_utc)
        .map(|dt| to_zoned_display(dt, locale, format))
        .unwrap_or_default()
}

/// Parse a stored instant: RFC 3339, or a naive `YYYY-MM-DD HH:MM:SS`
/// (SQLite `datetime('now')`) taken as UTC.
pub fn parse_utc(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(input, f).ok())
        .map(|n| n.and_utc())
}

/// Parse a naive local date-time as produced by an HTML `datetime-local`
/// input. Impossible calendar values (Feb 30, 25:00) give `None`.
pub fn parse_local_input(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    LOCAL_INPUT_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(input, f).ok())
}

/// Resolve a Belgrade wall-clock reading to the UTC instant it denotes.
///
/// The offset depends on the instant being resolved, so it is looked up
/// twice: once at the naive reading taken as UTC, then again at the
/// corrected candidate. If the two lookups disagree (the reading sits next
/// to a DST switch) the second offset wins.
///
/// A reading inside the spring-forward gap keeps the pre-switch offset and
/// so lands after the gap (02:30 → 03:30 CEST). A reading inside the
/// autumn overlap resolves to the later, standard-time occurrence.
/// Readings too close to chrono's date range to shift give `None`.
pub fn local_wall_clock_to_utc(input: &str) -> Option<DateTime<Utc>> {
    let naive = parse_local_input(input)?.with_nanosecond(0)?;
    let guess = naive.and_utc();

    let first = belgrade_offset_minutes(guess);
    let mut resolved = guess.checked_sub_signed(TimeDelta::minutes(first as i64))?;

    let second = belgrade_offset_minutes(resolved);
    if second != first {
        resolved = guess.checked_sub_signed(TimeDelta::minutes(second as i64))?;
    }

    Some(resolved)
}

/// [`local_wall_clock_to_utc`] rendered for storage.
pub fn local_to_utc_iso(input: &str) -> Option<String> {
    local_wall_clock_to_utc(input).map(|dt| dt.to_rfc3339())
}

/// Prefill value for a `datetime-local` field.
pub fn to_local_input(instant: DateTime<Utc>) -> String {
    instant
        .with_timezone(&Belgrade)
        .format("%Y-%m-%dT%H:%M")
        .to_string()
}

/// Belgrade civil date of an instant.
pub fn belgrade_date(instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&Belgrade).date_naive()
}
