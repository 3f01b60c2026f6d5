use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Canonical wire layout for a calendar date.
pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// Day-first layouts found in the raw price and event CSVs.
const DAY_FIRST_FORMATS: [&str; 4] = ["%d/%m/%Y", "%d-%m-%Y", "%d-%b-%Y", "%d-%b-%y"];

/// A trading / event date with daily granularity.
///
/// All three datasets (prices, events, change points) are keyed by this
/// type. Every value entering the crate goes through [`CalendarDate::parse`],
/// so two records refer to the same day exactly when their `CalendarDate`s
/// are equal, whatever string layout the source used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Build from year/month/day. Returns `None` for impossible dates.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Normalize a date string from any upstream source.
    ///
    /// Accepted layouts:
    /// - `2020-03-01` (ISO, what the service emits)
    /// - `2020-03-01T00:00:00Z`, `2020-03-01 00:00:00` (time part dropped)
    /// - `01/03/2020`, `01-03-2020` (day-first)
    /// - `01-Mar-2020`, `01-Mar-20` (day-first, month abbreviation)
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let s = raw.trim();

        if let Some(date) = parse_with(s, ISO_FORMAT) {
            return Ok(Self(date));
        }

        // Timestamps: keep the leading ISO date.
        if s.len() > 10 && s.is_char_boundary(10) && matches!(s.as_bytes()[10], b'T' | b' ') {
            if let Some(date) = parse_with(&s[..10], ISO_FORMAT) {
                return Ok(Self(date));
            }
        }

        DAY_FIRST_FORMATS
            .iter()
            .find_map(|fmt| parse_with(s, fmt))
            .map(Self)
            .ok_or_else(|| CoreError::InvalidDate(raw.to_string()))
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for CalendarDate {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_FORMAT))
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// `%Y` happily reads `20` as the year 20 AD; only four-digit years count.
fn parse_with(s: &str, fmt: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, fmt)
        .ok()
        .filter(|date| date.year() >= 1000)
}

/// Anything carrying a calendar date that can be keyed by it.
pub trait Dated {
    fn date(&self) -> CalendarDate;
}

impl<T: Dated + ?Sized> Dated for &T {
    fn date(&self) -> CalendarDate {
        (**self).date()
    }
}
