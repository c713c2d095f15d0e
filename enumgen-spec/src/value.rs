//! Numeric constant values as written in the spec file.

use std::fmt;

use serde::Deserialize;

/// A constant value before it is checked to fit a 64-bit signed integer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
    /// Arrays, tables and dates
    Other(toml::Value),
}

/// Why a raw value could not be converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueError {
    /// Not a number at all
    NonNumeric,
    /// A number that does not fit `i64`
    OutOfRange,
}

impl RawValue {
    /// Convert to `i64` without losing information.
    pub fn to_i64(&self) -> Result<i64, ValueError> {
        match self {
            RawValue::Int(v) => Ok(*v),
            RawValue::Float(f) => float_to_i64(*f),
            RawValue::Text(s) => parse_integer(s),
            RawValue::Bool(_) | RawValue::Other(_) => Err(ValueError::NonNumeric),
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Int(v) => write!(f, "{}", v),
            RawValue::Float(v) => write!(f, "{}", v),
            RawValue::Text(s) => write!(f, "\"{}\"", s),
            RawValue::Bool(b) => write!(f, "{}", b),
            RawValue::Other(v) => write!(f, "{}", v),
        }
    }
}

// 2^63, the first float past i64::MAX
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

fn float_to_i64(f: f64) -> Result<i64, ValueError> {
    if !f.is_finite() || f.fract() != 0.0 {
        return Err(ValueError::NonNumeric);
    }
    if !(-I64_BOUND..I64_BOUND).contains(&f) {
        return Err(ValueError::OutOfRange);
    }
    Ok(f as i64)
}

/// Parse an integer literal such as `-42`, `0x1F`, `0b1010`, `0o17`,
/// `1_000` or `200L`.
pub(crate) fn parse_integer(text: &str) -> Result<i64, ValueError> {
    let mut s = text.trim();
    if let Some(stripped) = s.strip_suffix(['L', 'l']) {
        s = stripped;
    }

    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        Some("0b") | Some("0B") => (2, &s[2..]),
        Some("0o") | Some("0O") => (8, &s[2..]),
        _ => (10, s),
    };

    let digits: String = digits.chars().filter(|c| *c != '_').collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(ValueError::NonNumeric);
    }

    let magnitude = u128::from_str_radix(&digits, radix).map_err(|_| ValueError::OutOfRange)?;
    if magnitude > u64::MAX as u128 {
        return Err(ValueError::OutOfRange);
    }
    let value = if negative {
        -(magnitude as i128)
    } else {
        magnitude as i128
    };
    i64::try_from(value).map_err(|_| ValueError::OutOfRange)
}
