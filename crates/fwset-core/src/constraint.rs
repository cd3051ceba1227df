//! # Constraints: Per-Type Setting Rules
//!
//! A firmware setting declares one attribute type, and the type decides
//! which constraint fields mean anything. [`Constraint`] models that as a
//! sum type: each variant carries exactly the fields its type consults.
//!
//! ## Invariants
//!
//! - Range and length checks are active only when both ends are configured.
//!   A half-specified pair is stored as `None` (unconstrained); no default
//!   bound is ever inferred.
//! - Bounds are inclusive at both ends and kept in the order configured.
//!   A pair with `lower > upper` is kept as-is and contains nothing.
//! - An attribute type name that is neither empty nor a known type is kept
//!   verbatim in [`Constraint::Unrecognized`] so the validator can report it
//!   as a schema-integrity fault.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The attribute types a firmware schema may declare.
///
/// Names are matched case-sensitively against the serialized
/// `attribute_type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeType {
    /// One of a fixed list of string values.
    Enumeration,
    /// Free text, optionally length-bounded.
    String,
    /// Whole number, optionally range-bounded.
    Integer,
    /// Literal `true` or `false`.
    Boolean,
    /// Secret value; never writable through validation.
    Password,
}

impl AttributeType {
    /// Returns all known attribute types.
    pub fn all() -> &'static [AttributeType] {
        &[
            Self::Enumeration,
            Self::String,
            Self::Integer,
            Self::Boolean,
            Self::Password,
        ]
    }

    /// Returns the serialized name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enumeration => "Enumeration",
            Self::String => "String",
            Self::Integer => "Integer",
            Self::Boolean => "Boolean",
            Self::Password => "Password",
        }
    }

    /// Look up a type by its serialized name. Exact, case-sensitive match.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|t| t.as_str() == name)
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An inclusive `lower..=upper` pair, in configured order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    lower: i64,
    upper: i64,
}

impl Bounds {
    /// Create a bound pair. The order is preserved even if `lower > upper`.
    pub fn new(lower: i64, upper: i64) -> Self {
        Self { lower, upper }
    }

    /// Build bounds from two optional ends. Returns `None` unless both are set.
    pub fn pair(lower: Option<i64>, upper: Option<i64>) -> Option<Self> {
        match (lower, upper) {
            (Some(lower), Some(upper)) => Some(Self::new(lower, upper)),
            _ => None,
        }
    }

    /// The configured lower end.
    pub fn lower(&self) -> i64 {
        self.lower
    }

    /// The configured upper end.
    pub fn upper(&self) -> i64 {
        self.upper
    }

    /// Inclusive containment check.
    pub fn contains(&self, v: i64) -> bool {
        self.lower <= v && v <= self.upper
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.lower, self.upper)
    }
}

/// The constraint a setting's value must satisfy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// Value must byte-exactly equal one of `allowable_values`.
    /// An empty list accepts nothing.
    Enumeration {
        /// Permitted values, in schema order.
        allowable_values: Vec<String>,
    },
    /// Value must parse as an integer within `bounds` when bounds are set.
    Integer {
        /// Inclusive range, or `None` for unconstrained.
        bounds: Option<Bounds>,
    },
    /// Byte length of the value must fall within `length` when set.
    String {
        /// Inclusive length range, or `None` for unconstrained.
        length: Option<Bounds>,
    },
    /// Value must be exactly `true` or `false`.
    Boolean,
    /// Never writable.
    Password,
    /// No type information; any value is accepted.
    Unset,
    /// A type name this crate does not know.
    Unrecognized(String),
}

impl Constraint {
    /// Build a constraint from a serialized type name and the flat optional
    /// fields of a schema entry. Fields that the type does not consult are
    /// dropped.
    pub fn from_parts(
        attribute_type: &str,
        allowable_values: Option<Vec<String>>,
        lower_bound: Option<i64>,
        upper_bound: Option<i64>,
        min_length: Option<i64>,
        max_length: Option<i64>,
    ) -> Self {
        if attribute_type.is_empty() {
            return Self::Unset;
        }
        match AttributeType::from_name(attribute_type) {
            Some(AttributeType::Enumeration) => Self::Enumeration {
                allowable_values: allowable_values.unwrap_or_default(),
            },
            Some(AttributeType::Integer) => Self::Integer {
                bounds: Bounds::pair(lower_bound, upper_bound),
            },
            Some(AttributeType::String) => Self::String {
                length: Bounds::pair(min_length, max_length),
            },
            Some(AttributeType::Boolean) => Self::Boolean,
            Some(AttributeType::Password) => Self::Password,
            None => Self::Unrecognized(attribute_type.to_string()),
        }
    }

    /// The known attribute type, or `None` for unset and unrecognized types.
    pub fn attribute_type(&self) -> Option<AttributeType> {
        match self {
            Self::Enumeration { .. } => Some(AttributeType::Enumeration),
            Self::Integer { .. } => Some(AttributeType::Integer),
            Self::String { .. } => Some(AttributeType::String),
            Self::Boolean => Some(AttributeType::Boolean),
            Self::Password => Some(AttributeType::Password),
            Self::Unset | Self::Unrecognized(_) => None,
        }
    }

    /// The serialized type name: empty for [`Constraint::Unset`], verbatim
    /// for [`Constraint::Unrecognized`].
    pub fn type_name(&self) -> &str {
        match self {
            Self::Unset => "",
            Self::Unrecognized(name) => name,
            other => other.attribute_type().map_or("", |t| t.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        let b = Bounds::new(1, 8);
        assert!(b.contains(1));
        assert!(b.contains(8));
        assert!(!b.contains(0));
        assert!(!b.contains(9));
    }

    #[test]
    fn inverted_bounds_contain_nothing() {
        let b = Bounds::new(8, 1);
        assert!(!b.contains(1));
        assert!(!b.contains(5));
        assert!(!b.contains(8));
        assert_eq!(b.to_string(), "8 - 1");
    }

    #[test]
    fn half_specified_pair_is_unconstrained() {
        assert_eq!(Bounds::pair(Some(1), None), None);
        assert_eq!(Bounds::pair(None, Some(8)), None);
        assert_eq!(Bounds::pair(None, None), None);
        assert_eq!(Bounds::pair(Some(1), Some(8)), Some(Bounds::new(1, 8)));
    }

    #[test]
    fn from_parts_drops_irrelevant_fields() {
        let c = Constraint::from_parts(
            "Boolean",
            Some(vec!["x".into()]),
            Some(1),
            Some(2),
            Some(3),
            Some(4),
        );
        assert_eq!(c, Constraint::Boolean);

        let c = Constraint::from_parts(
            "Integer",
            Some(vec!["x".into()]),
            Some(1),
            Some(8),
            Some(3),
            Some(4),
        );
        assert_eq!(
            c,
            Constraint::Integer {
                bounds: Some(Bounds::new(1, 8))
            }
        );
    }

    #[test]
    fn empty_type_is_unset() {
        let c = Constraint::from_parts("", None, Some(1), Some(2), None, None);
        assert_eq!(c, Constraint::Unset);
        assert_eq!(c.type_name(), "");
        assert_eq!(c.attribute_type(), None);
    }

    #[test]
    fn type_names_are_case_sensitive() {
        let c = Constraint::from_parts("integer", None, None, None, None, None);
        assert_eq!(c, Constraint::Unrecognized("integer".into()));
        assert_eq!(c.type_name(), "integer");
    }

    #[test]
    fn enumeration_without_values_has_empty_list() {
        let c = Constraint::from_parts("Enumeration", None, None, None, None, None);
        assert_eq!(
            c,
            Constraint::Enumeration {
                allowable_values: vec![]
            }
        );
    }

    #[test]
    fn attribute_type_names_roundtrip() {
        for t in AttributeType::all() {
            assert_eq!(AttributeType::from_name(t.as_str()), Some(*t));
            assert_eq!(t.to_string(), t.as_str());
        }
        assert_eq!(AttributeType::from_name("Foo"), None);
    }
}
