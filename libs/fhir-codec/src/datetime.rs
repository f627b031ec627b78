//! Partial-precision FHIR date and time primitives.
//!
//! Each type keeps the text it was parsed from, so `2024`, `2024-03` and
//! `2024-03-01T10:00:00+01:00` encode back unchanged. Values are checked
//! against the FHIR R4 lexical rules and against the calendar (`2023-02-29`
//! is rejected).

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, SecondsFormat, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

const YEAR: &str = r"([0-9]([0-9]([0-9][1-9]|[1-9]0)|[1-9]00)|[1-9]000)";
const MONTH: &str = r"(0[1-9]|1[0-2])";
const DAY: &str = r"(0[1-9]|[1-2][0-9]|3[0-1])";
const TIME: &str = r"([01][0-9]|2[0-3]):[0-5][0-9]:([0-5][0-9]|60)(\.[0-9]+)?";
const ZONE: &str = r"(Z|(\+|-)((0[0-9]|1[0-3]):[0-5][0-9]|14:00))";

static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^{YEAR}(-{MONTH}(-{DAY})?)?$")).expect("valid date regex")
});

static DATE_TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^{YEAR}(-{MONTH}(-{DAY}(T{TIME}{ZONE})?)?)?$"))
        .expect("valid dateTime regex")
});

static INSTANT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^{YEAR}-{MONTH}-{DAY}T{TIME}{ZONE}$")).expect("valid instant regex")
});

static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^{TIME}$")).expect("valid time regex"));

/// How much of a date/time was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precision {
    Year,
    Month,
    Day,
    Second,
    Fraction,
}

fn precision_of(text: &str) -> Precision {
    match text.find('T') {
        Some(t) if text[t..].contains('.') => Precision::Fraction,
        Some(_) => Precision::Second,
        None => match text.len() {
            4 => Precision::Year,
            7 => Precision::Month,
            _ => Precision::Day,
        },
    }
}

/// The calendar date at the start of `text`, when it has day precision.
fn leading_date(text: &str) -> Option<NaiveDate> {
    let date = text.get(..10)?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// A full date in `text` must exist on the calendar.
fn calendar_valid(text: &str) -> bool {
    text.len() < 10 || leading_date(text).is_some()
}

/// FHIR `date`: `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FhirDate {
    text: String,
}

impl FhirDate {
    pub fn parse(text: &str) -> Option<Self> {
        (DATE_RE.is_match(text) && calendar_valid(text)).then(|| Self {
            text: text.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn precision(&self) -> Precision {
        precision_of(&self.text)
    }

    /// The calendar date, when the value has day precision.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        leading_date(&self.text)
    }
}

impl From<NaiveDate> for FhirDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            text: date.format("%Y-%m-%d").to_string(),
        }
    }
}

/// FHIR `dateTime`: a partial date, or a full date with time and zone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FhirDateTime {
    text: String,
}

impl FhirDateTime {
    pub fn parse(text: &str) -> Option<Self> {
        (DATE_TIME_RE.is_match(text) && calendar_valid(text)).then(|| Self {
            text: text.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn precision(&self) -> Precision {
        precision_of(&self.text)
    }

    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        leading_date(&self.text)
    }

    /// The point in time, when the value carries a time of day.
    pub fn to_datetime(&self) -> Option<DateTime<FixedOffset>> {
        if self.precision() < Precision::Second {
            return None;
        }
        DateTime::parse_from_rfc3339(&self.text).ok()
    }
}

impl From<NaiveDate> for FhirDateTime {
    fn from(date: NaiveDate) -> Self {
        Self {
            text: date.format("%Y-%m-%d").to_string(),
        }
    }
}

impl From<DateTime<FixedOffset>> for FhirDateTime {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self {
            text: value.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        }
    }
}

/// FHIR `instant`: always a full timestamp with zone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FhirInstant {
    text: String,
}

impl FhirInstant {
    pub fn parse(text: &str) -> Option<Self> {
        (INSTANT_RE.is_match(text) && calendar_valid(text)).then(|| Self {
            text: text.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn precision(&self) -> Precision {
        precision_of(&self.text)
    }

    pub fn to_datetime(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.text).ok()
    }
}

impl From<DateTime<Utc>> for FhirInstant {
    fn from(value: DateTime<Utc>) -> Self {
        Self {
            text: value.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// FHIR `time`: a time of day without zone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FhirTime {
    text: String,
}

impl FhirTime {
    pub fn parse(text: &str) -> Option<Self> {
        TIME_RE.is_match(text).then(|| Self {
            text: text.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(&self.text, "%H:%M:%S%.f").ok()
    }
}

impl From<NaiveTime> for FhirTime {
    fn from(time: NaiveTime) -> Self {
        Self {
            text: time.format("%H:%M:%S").to_string(),
        }
    }
}

macro_rules! display_text {
    ($($ty:ty),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.text)
                }
            }
        )+
    };
}

display_text!(FhirDate, FhirDateTime, FhirInstant, FhirTime);
