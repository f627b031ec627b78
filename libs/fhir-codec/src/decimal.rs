//! FHIR `decimal` with its lexical form preserved.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

static DECIMAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?$").expect("valid decimal regex")
});

/// A decimal that writes back exactly the digits it was read with.
///
/// `1.10` and `1.1` are different values here: FHIR treats trailing zeros as
/// precision. Equality and hashing compare the text. [`value`](Self::value)
/// gives the numeric view, which is `None` when the number is outside what
/// `rust_decimal` can hold.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreciseDecimal {
    text: String,
    value: Option<Decimal>,
}

impl PreciseDecimal {
    /// Parse a FHIR decimal literal.
    pub fn parse(text: &str) -> Option<Self> {
        if !DECIMAL_RE.is_match(text) {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            value: parse_numeric(text),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> Option<Decimal> {
        self.value
    }

    /// Number of digits after the decimal point as written.
    pub fn scale(&self) -> usize {
        let mantissa = self.text.split(['e', 'E']).next().unwrap_or_default();
        mantissa
            .split_once('.')
            .map(|(_, fraction)| fraction.len())
            .unwrap_or(0)
    }
}

fn parse_numeric(text: &str) -> Option<Decimal> {
    if text.contains(['e', 'E']) {
        Decimal::from_scientific(&text.replace('E', "e")).ok()
    } else {
        Decimal::from_str(text).ok()
    }
}

impl From<Decimal> for PreciseDecimal {
    fn from(value: Decimal) -> Self {
        Self {
            text: value.to_string(),
            value: Some(value),
        }
    }
}

impl From<i32> for PreciseDecimal {
    fn from(value: i32) -> Self {
        Decimal::from(value).into()
    }
}

impl FromStr for PreciseDecimal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid decimal '{}'", s))
    }
}

impl fmt::Display for PreciseDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_zeros_are_kept() {
        let d = PreciseDecimal::parse("1.10").unwrap();
        assert_eq!(d.as_str(), "1.10");
        assert_eq!(d.scale(), 2);
        assert_eq!(d.value(), Some(Decimal::new(110, 2)));
        assert_ne!(d, PreciseDecimal::parse("1.1").unwrap());
    }

    #[test]
    fn test_scientific() {
        let d = PreciseDecimal::parse("1.5E3").unwrap();
        assert_eq!(d.value(), Some(Decimal::new(1500, 0)));
        assert_eq!(d.to_string(), "1.5E3");
        assert_eq!(d.scale(), 1);
    }

    #[test]
    fn test_rejects_non_fhir_forms() {
        for bad in ["", "01", "1.", ".5", "+1", "1e", "NaN", "1 000"] {
            assert!(PreciseDecimal::parse(bad).is_none(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_out_of_range_keeps_text() {
        let text = "123456789012345678901234567890123456789.5";
        let d = PreciseDecimal::parse(text).unwrap();
        assert_eq!(d.as_str(), text);
        assert_eq!(d.value(), None);
    }

    #[test]
    fn test_from_decimal() {
        let d = PreciseDecimal::from(Decimal::new(12340, 3));
        assert_eq!(d.as_str(), "12.340");
        assert_eq!(PreciseDecimal::from(7).as_str(), "7");
    }
}
