//! # Setting Validation
//!
//! Checks a candidate value for one named setting against the schema
//! table before the value is written to the machine.
//!
//! ## Decision Order
//!
//! 1. A name with no schema entry is rejected.
//! 2. A read-only entry is rejected, whatever its type.
//! 3. The entry's [`Constraint`] decides the rest:
//!
//! | Constraint | Accepts |
//! |------------|---------|
//! | Enumeration | text form byte-equal to an allowable value |
//! | Integer | any value if unbounded, else an integer in `lower..=upper` |
//! | String | any value if unbounded, else byte length in `min..=max` |
//! | Boolean | exactly `true` or `false` |
//! | Password | nothing |
//! | Unset | anything |
//! | Unrecognized | nothing (schema-integrity fault) |
//!
//! Rejection messages name both bounds in configured order, so downstream
//! diagnostics are deterministic.

use fwset_core::{Bounds, Constraint, SchemaTable, SettingValue};
use serde::Serialize;
use thiserror::Error;

/// Why a value may not be written to a setting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingRejection {
    /// The setting has no entry in the schema table.
    #[error("Setting {name} is not in the schema")]
    UnknownSetting {
        /// Setting name.
        name: String,
    },

    /// The schema marks the setting read-only.
    #[error("Setting {name} is ReadOnly")]
    ReadOnlySetting {
        /// Setting name.
        name: String,
    },

    /// The value is not one of the enumeration's allowable values.
    #[error("Setting {name} uses invalid enum {value}")]
    InvalidEnumValue {
        /// Setting name.
        name: String,
        /// Offending value, in text form.
        value: String,
        /// The allowable values, in schema order.
        allowed: Vec<String>,
    },

    /// The value is outside the integer bounds, or is not an integer while
    /// bounds are configured.
    #[error("Setting {name} integer {value} is out of range, {lower} - {upper}")]
    OutOfRangeInteger {
        /// Setting name.
        name: String,
        /// Offending value, in text form.
        value: String,
        /// Configured lower bound.
        lower: i64,
        /// Configured upper bound.
        upper: i64,
    },

    /// The value's length is outside the configured length bounds.
    #[error("Setting {name} string {value} length is out of range, {min} - {max}")]
    OutOfRangeLength {
        /// Setting name.
        name: String,
        /// Offending value.
        value: String,
        /// Configured minimum length.
        min: i64,
        /// Configured maximum length.
        max: i64,
    },

    /// The value is not literally `true` or `false`.
    #[error("Setting {name} is not a boolean - {value}")]
    InvalidBoolean {
        /// Setting name.
        name: String,
        /// Offending value.
        value: String,
    },

    /// Password settings are never writable here.
    #[error("Setting {name} is a Password type")]
    PasswordNotWritable {
        /// Setting name.
        name: String,
    },

    /// The schema declares a type this validator does not know.
    #[error("Setting {name} has an unexpected attribute type {attribute_type}")]
    UnexpectedAttributeType {
        /// Setting name.
        name: String,
        /// The type name as declared.
        attribute_type: String,
    },
}

/// Field-free discriminant of [`SettingRejection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionKind {
    UnknownSetting,
    ReadOnlySetting,
    InvalidEnumValue,
    OutOfRangeInteger,
    OutOfRangeLength,
    InvalidBoolean,
    PasswordNotWritable,
    UnexpectedAttributeType,
}

impl RejectionKind {
    /// Returns the snake_case identifier for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnknownSetting => "unknown_setting",
            Self::ReadOnlySetting => "read_only_setting",
            Self::InvalidEnumValue => "invalid_enum_value",
            Self::OutOfRangeInteger => "out_of_range_integer",
            Self::OutOfRangeLength => "out_of_range_length",
            Self::InvalidBoolean => "invalid_boolean",
            Self::PasswordNotWritable => "password_not_writable",
            Self::UnexpectedAttributeType => "unexpected_attribute_type",
        }
    }
}

impl std::fmt::Display for RejectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SettingRejection {
    /// The setting the rejection is about.
    pub fn setting_name(&self) -> &str {
        match self {
            Self::UnknownSetting { name }
            | Self::ReadOnlySetting { name }
            | Self::InvalidEnumValue { name, .. }
            | Self::OutOfRangeInteger { name, .. }
            | Self::OutOfRangeLength { name, .. }
            | Self::InvalidBoolean { name, .. }
            | Self::PasswordNotWritable { name }
            | Self::UnexpectedAttributeType { name, .. } => name,
        }
    }

    pub fn kind(&self) -> RejectionKind {
        match self {
            Self::UnknownSetting { .. } => RejectionKind::UnknownSetting,
            Self::ReadOnlySetting { .. } => RejectionKind::ReadOnlySetting,
            Self::InvalidEnumValue { .. } => RejectionKind::InvalidEnumValue,
            Self::OutOfRangeInteger { .. } => RejectionKind::OutOfRangeInteger,
            Self::OutOfRangeLength { .. } => RejectionKind::OutOfRangeLength,
            Self::InvalidBoolean { .. } => RejectionKind::InvalidBoolean,
            Self::PasswordNotWritable { .. } => RejectionKind::PasswordNotWritable,
            Self::UnexpectedAttributeType { .. } => RejectionKind::UnexpectedAttributeType,
        }
    }

    /// True when the schema itself is at fault rather than the value.
    pub fn is_schema_fault(&self) -> bool {
        matches!(self, Self::UnexpectedAttributeType { .. })
    }
}

/// Validate one candidate value for the named setting.
///
/// Consults exactly one entry of `table` and never mutates it.
///
/// # Errors
///
/// Returns a [`SettingRejection`] describing why the value may not be
/// written. Malformed input always yields a rejection, never a panic.
pub fn validate_setting(
    name: &str,
    value: &SettingValue,
    table: &SchemaTable,
) -> Result<(), SettingRejection> {
    let outcome = check(name, value, table);
    // Values are never logged; a setting may hold a secret.
    match &outcome {
        Ok(()) => tracing::trace!(setting = name, "setting value accepted"),
        Err(rejection) => tracing::debug!(
            setting = name,
            kind = %rejection.kind(),
            "setting value rejected"
        ),
    }
    outcome
}

fn check(name: &str, value: &SettingValue, table: &SchemaTable) -> Result<(), SettingRejection> {
    let definition = table
        .get(name)
        .ok_or_else(|| SettingRejection::UnknownSetting {
            name: name.to_string(),
        })?;

    if definition.is_read_only() {
        return Err(SettingRejection::ReadOnlySetting {
            name: name.to_string(),
        });
    }

    match definition.constraint() {
        Constraint::Enumeration { allowable_values } => {
            let text = value.as_text();
            if allowable_values.iter().any(|av| av.as_str() == text) {
                Ok(())
            } else {
                Err(SettingRejection::InvalidEnumValue {
                    name: name.to_string(),
                    value: text.into_owned(),
                    allowed: allowable_values.clone(),
                })
            }
        }

        // No range configured: nothing to check.
        Constraint::Integer { bounds: None } => Ok(()),
        Constraint::Integer { bounds: Some(bounds) } => check_integer(name, value, bounds),

        Constraint::String { length: None } => Ok(()),
        Constraint::String { length: Some(bounds) } => {
            let text = value.as_text();
            let len = i64::try_from(text.len()).unwrap_or(i64::MAX);
            if bounds.contains(len) {
                Ok(())
            } else {
                Err(SettingRejection::OutOfRangeLength {
                    name: name.to_string(),
                    value: text.into_owned(),
                    min: bounds.lower(),
                    max: bounds.upper(),
                })
            }
        }

        Constraint::Boolean => match value.as_text().as_ref() {
            "true" | "false" => Ok(()),
            other => Err(SettingRejection::InvalidBoolean {
                name: name.to_string(),
                value: other.to_string(),
            }),
        },

        Constraint::Password => Err(SettingRejection::PasswordNotWritable {
            name: name.to_string(),
        }),

        // Vendor registries may not publish type information for every setting.
        Constraint::Unset => Ok(()),

        Constraint::Unrecognized(attribute_type) => {
            Err(SettingRejection::UnexpectedAttributeType {
                name: name.to_string(),
                attribute_type: attribute_type.clone(),
            })
        }
    }
}

fn check_integer(name: &str, value: &SettingValue, bounds: &Bounds) -> Result<(), SettingRejection> {
    match value.to_integer() {
        Ok(v) if bounds.contains(v) => Ok(()),
        _ => Err(SettingRejection::OutOfRangeInteger {
            name: name.to_string(),
            value: value.as_text().into_owned(),
            lower: bounds.lower(),
            upper: bounds.upper(),
        }),
    }
}

/// A validator bound to one schema table.
///
/// Holds only a shared borrow, so it is `Send + Sync` whenever the table
/// is, and any number of callers may use it at once.
#[derive(Debug, Clone, Copy)]
pub struct SettingValidator<'a> {
    table: &'a SchemaTable,
}

impl<'a> SettingValidator<'a> {
    pub fn new(table: &'a SchemaTable) -> Self {
        Self { table }
    }

    /// Validate one candidate value. See [`validate_setting`].
    ///
    /// # Errors
    ///
    /// Returns the [`SettingRejection`] for the value, if any.
    pub fn validate(&self, name: &str, value: &SettingValue) -> Result<(), SettingRejection> {
        validate_setting(name, value, self.table)
    }

    /// The table this validator consults.
    pub fn table(&self) -> &'a SchemaTable {
        self.table
    }
}
