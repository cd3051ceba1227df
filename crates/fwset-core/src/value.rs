//! # Setting Values
//!
//! A candidate value arrives either as text or as a bare integer.
//! [`SettingValue`] keeps whichever form it was given. The text form is
//! always available; the integer form is a fallible conversion used only
//! where a schema asks for an integer. A bare integer and its decimal text
//! have the same text form, so they validate identically.

use std::borrow::Cow;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FwsetError;

/// A candidate value for a firmware setting.
///
/// Deserializes untagged from a JSON/YAML integer or string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    /// Value supplied as a number.
    Int(i64),
    /// Value supplied as text.
    Text(String),
}

impl SettingValue {
    /// The canonical text form. Integers render in decimal.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Int(n) => Cow::Owned(n.to_string()),
            Self::Text(s) => Cow::Borrowed(s),
        }
    }

    /// The integer form. Text is parsed as a base-10 `i64`.
    ///
    /// # Errors
    ///
    /// Returns the parse error if text does not hold a valid integer.
    pub fn to_integer(&self) -> Result<i64, ParseIntError> {
        match self {
            Self::Int(n) => Ok(*n),
            Self::Text(s) => s.parse(),
        }
    }

    /// True if the value was supplied as a number.
    pub fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for SettingValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for SettingValue {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<String> for SettingValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for SettingValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// A requested write: `NAME=VALUE`.
///
/// The name is everything before the first `=` and may contain spaces.
/// The value is kept as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingAssignment {
    pub name: String,
    pub value: SettingValue,
}

impl FromStr for SettingAssignment {
    type Err = FwsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((name, value)) if !name.is_empty() => Ok(Self {
                name: name.to_string(),
                value: SettingValue::Text(value.to_string()),
            }),
            _ => Err(FwsetError::InvalidAssignment(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_and_decimal_text_share_text_form() {
        assert_eq!(SettingValue::from(5).as_text(), SettingValue::from("5").as_text());
        assert_eq!(SettingValue::from(-12).as_text(), "-12");
    }

    #[test]
    fn text_to_integer() {
        assert_eq!(SettingValue::from("42").to_integer().unwrap(), 42);
        assert_eq!(SettingValue::from("-7").to_integer().unwrap(), -7);
        assert!(SettingValue::from("abc").to_integer().is_err());
        assert!(SettingValue::from("").to_integer().is_err());
        assert!(SettingValue::from(" 4").to_integer().is_err());
        assert!(SettingValue::from("99999999999999999999").to_integer().is_err());
    }

    #[test]
    fn deserializes_untagged() {
        let v: SettingValue = serde_json::from_str("8").unwrap();
        assert_eq!(v, SettingValue::Int(8));
        assert!(v.is_int());
        let v: SettingValue = serde_json::from_str("\"8\"").unwrap();
        assert_eq!(v, SettingValue::Text("8".into()));
        assert!(!v.is_int());
    }

    #[test]
    fn display_matches_text_form() {
        assert_eq!(SettingValue::from(3).to_string(), "3");
        assert_eq!(SettingValue::from("UEFI").to_string(), "UEFI");
    }

    #[test]
    fn parses_assignment() {
        let a: SettingAssignment = "Boot Order=Legacy".parse().unwrap();
        assert_eq!(a.name, "Boot Order");
        assert_eq!(a.value, SettingValue::from("Legacy"));

        let a: SettingAssignment = "Banner=a=b".parse().unwrap();
        assert_eq!(a.name, "Banner");
        assert_eq!(a.value, SettingValue::from("a=b"));

        let a: SettingAssignment = "Banner=".parse().unwrap();
        assert_eq!(a.value, SettingValue::from(""));
    }

    #[test]
    fn rejects_malformed_assignment() {
        assert!(matches!(
            "NoEquals".parse::<SettingAssignment>(),
            Err(FwsetError::InvalidAssignment(_))
        ));
        assert!(matches!(
            "=value".parse::<SettingAssignment>(),
            Err(FwsetError::InvalidAssignment(_))
        ));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every integer converts back to itself through its text form.
        #[test]
        fn int_text_form_parses_back(n in any::<i64>()) {
            let text = SettingValue::Text(SettingValue::Int(n).as_text().into_owned());
            prop_assert_eq!(text.to_integer().unwrap(), n);
        }

        /// Integer conversion of arbitrary text never panics.
        #[test]
        fn to_integer_never_panics(s in ".*") {
            let _ = SettingValue::Text(s).to_integer();
        }
    }
}
