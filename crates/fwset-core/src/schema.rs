//! # Schema Entries
//!
//! [`SettingSchema`] is the flat serialized form of one schema entry, with
//! the field names used by firmware schema resources. [`SettingDefinition`]
//! is the validated model built from it: a [`Constraint`] plus the flags
//! that apply to every type.
//!
//! `SettingDefinition` serializes and deserializes through `SettingSchema`,
//! so a JSON or YAML schema map loads directly into a [`SchemaTable`].
//! Serializing a definition emits only the fields its type consults.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constraint::{Bounds, Constraint};

/// Schema lookup table: setting name to definition.
pub type SchemaTable = BTreeMap<String, SettingDefinition>;

/// Serialized form of a single setting's schema entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingSchema {
    /// The type of setting. Empty or absent means unknown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_type: Option<String>,

    /// The allowable values for an Enumeration setting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowable_values: Option<Vec<String>>,

    /// The lowest value for an Integer setting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower_bound: Option<i64>,

    /// The highest value for an Integer setting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper_bound: Option<i64>,

    /// Minimum length for a String setting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,

    /// Maximum length for a String setting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,

    /// Whether the setting is read only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,

    /// Whether a reset is required after changing the setting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_required: Option<bool>,

    /// Whether the setting's value is unique to this machine, e.g. a
    /// serial number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique: Option<bool>,
}

/// A validated schema entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SettingSchema", into = "SettingSchema")]
pub struct SettingDefinition {
    constraint: Constraint,
    read_only: bool,
    reset_required: Option<bool>,
    unique: Option<bool>,
}

impl SettingDefinition {
    /// A writable definition with the given constraint and no metadata.
    pub fn new(constraint: Constraint) -> Self {
        Self {
            constraint,
            read_only: false,
            reset_required: None,
            unique: None,
        }
    }

    /// Mark the setting read-only.
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Record whether a reset is needed after a write.
    pub fn with_reset_required(mut self, reset_required: bool) -> Self {
        self.reset_required = Some(reset_required);
        self
    }

    /// Record whether the value is unique to the machine.
    pub fn with_unique(mut self, unique: bool) -> Self {
        self.unique = Some(unique);
        self
    }

    pub fn constraint(&self) -> &Constraint {
        &self.constraint
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// True only when the schema explicitly says a reset is required.
    pub fn reset_required(&self) -> bool {
        self.reset_required == Some(true)
    }

    /// True only when the schema explicitly marks the value unique.
    pub fn is_unique(&self) -> bool {
        self.unique == Some(true)
    }
}

impl From<SettingSchema> for SettingDefinition {
    fn from(wire: SettingSchema) -> Self {
        let constraint = Constraint::from_parts(
            wire.attribute_type.as_deref().unwrap_or(""),
            wire.allowable_values,
            wire.lower_bound,
            wire.upper_bound,
            wire.min_length,
            wire.max_length,
        );
        Self {
            constraint,
            read_only: wire.read_only == Some(true),
            reset_required: wire.reset_required,
            unique: wire.unique,
        }
    }
}

impl From<SettingDefinition> for SettingSchema {
    fn from(def: SettingDefinition) -> Self {
        let mut wire = SettingSchema {
            read_only: def.read_only.then_some(true),
            reset_required: def.reset_required,
            unique: def.unique,
            ..Default::default()
        };
        match def.constraint {
            Constraint::Enumeration { allowable_values } => {
                wire.attribute_type = Some("Enumeration".to_string());
                wire.allowable_values = Some(allowable_values);
            }
            Constraint::Integer { bounds } => {
                wire.attribute_type = Some("Integer".to_string());
                wire.lower_bound = bounds.map(|b| b.lower());
                wire.upper_bound = bounds.map(|b| b.upper());
            }
            Constraint::String { length } => {
                wire.attribute_type = Some("String".to_string());
                wire.min_length = length.map(|b| b.lower());
                wire.max_length = length.map(|b| b.upper());
            }
            Constraint::Boolean => wire.attribute_type = Some("Boolean".to_string()),
            Constraint::Password => wire.attribute_type = Some("Password".to_string()),
            Constraint::Unset => {}
            Constraint::Unrecognized(name) => wire.attribute_type = Some(name),
        }
        wire
    }
}

impl From<Constraint> for SettingDefinition {
    fn from(constraint: Constraint) -> Self {
        Self::new(constraint)
    }
}

impl SettingDefinition {
    /// Shorthand for an integer definition with inclusive bounds.
    pub fn integer(lower: i64, upper: i64) -> Self {
        Self::new(Constraint::Integer {
            bounds: Some(Bounds::new(lower, upper)),
        })
    }

    /// Shorthand for a string definition with inclusive length bounds.
    pub fn string(min_length: i64, max_length: i64) -> Self {
        Self::new(Constraint::String {
            length: Some(Bounds::new(min_length, max_length)),
        })
    }

    /// Shorthand for an enumeration definition.
    pub fn enumeration<I, S>(allowable_values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Constraint::Enumeration {
            allowable_values: allowable_values.into_iter().map(Into::into).collect(),
        })
    }
}
