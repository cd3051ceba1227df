//! # Firmware Schema Resource
//!
//! A [`FirmwareSchema`] is the schema table for one class of machine,
//! tagged with the hardware vendor and model it was discovered on. Vendor
//! and model are descriptive; picking the right schema for a machine is
//! the caller's job.
//!
//! The serialized form uses camelCase keys at the top level
//! (`hardwareVendor`, `hardwareModel`, `schema`) and the snake_case entry
//! fields of [`SettingSchema`](fwset_core::SettingSchema) inside `schema`.

use std::path::Path;

use fwset_core::{FwsetError, SchemaTable, SettingDefinition, SettingValue};
use serde::{Deserialize, Serialize};

use crate::validate::{validate_setting, SettingRejection, SettingValidator};

/// Schema table for one hardware vendor/model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirmwareSchema {
    /// The hardware vendor associated with this schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware_vendor: Option<String>,

    /// The hardware model associated with this schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware_model: Option<String>,

    /// Map of setting name to schema entry.
    pub schema: SchemaTable,
}

impl FirmwareSchema {
    /// Wrap a schema table with no hardware identity.
    pub fn new(schema: SchemaTable) -> Self {
        Self {
            hardware_vendor: None,
            hardware_model: None,
            schema,
        }
    }

    /// Attach a hardware vendor and model.
    pub fn with_hardware(mut self, vendor: impl Into<String>, model: impl Into<String>) -> Self {
        self.hardware_vendor = Some(vendor.into());
        self.hardware_model = Some(model.into());
        self
    }

    /// Check whether `value` may be written to the named setting.
    ///
    /// # Errors
    ///
    /// Returns the [`SettingRejection`] for the value, if any.
    pub fn check_setting(&self, name: &str, value: &SettingValue) -> Result<(), SettingRejection> {
        validate_setting(name, value, &self.schema)
    }

    /// A validator borrowing this schema's table.
    pub fn validator(&self) -> SettingValidator<'_> {
        SettingValidator::new(&self.schema)
    }

    pub fn setting_count(&self) -> usize {
        self.schema.len()
    }

    pub fn get(&self, name: &str) -> Option<&SettingDefinition> {
        self.schema.get(name)
    }

    /// Of the given settings, those whose schema entry requires a reset
    /// after a write, in the order given. Unknown names are skipped.
    pub fn settings_requiring_reset<'n, I>(&self, names: I) -> Vec<&'n str>
    where
        I: IntoIterator<Item = &'n str>,
    {
        names
            .into_iter()
            .filter(|name| self.schema.get(*name).is_some_and(SettingDefinition::reset_required))
            .collect()
    }

    /// Parse a schema resource from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `FwsetError::Serialization` if the text is not a valid resource.
    pub fn from_json_str(content: &str) -> Result<Self, FwsetError> {
        serde_json::from_str(content)
            .map_err(|e| FwsetError::Serialization(format!("invalid JSON: {e}")))
    }

    /// Parse a schema resource from YAML text.
    ///
    /// # Errors
    ///
    /// Returns `FwsetError::Serialization` if the text is not a valid resource.
    pub fn from_yaml_str(content: &str) -> Result<Self, FwsetError> {
        serde_yaml::from_str(content)
            .map_err(|e| FwsetError::Serialization(format!("invalid YAML: {e}")))
    }

    /// Load a schema resource from a file.
    ///
    /// The format is chosen by extension: `.yaml`/`.yml` for YAML,
    /// anything else for JSON.
    ///
    /// # Errors
    ///
    /// Returns `FwsetError::SchemaLoad` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, FwsetError> {
        let content = std::fs::read_to_string(path).map_err(|e| FwsetError::SchemaLoad {
            path: path.display().to_string(),
            reason: format!("cannot read file: {e}"),
        })?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        let parsed = match ext {
            "yaml" | "yml" => Self::from_yaml_str(&content),
            _ => Self::from_json_str(&content),
        };

        let schema = parsed.map_err(|e| FwsetError::SchemaLoad {
            path: path.display().to_string(),
            reason: match e {
                FwsetError::Serialization(reason) => reason,
                other => other.to_string(),
            },
        })?;

        tracing::debug!(
            path = %path.display(),
            settings = schema.setting_count(),
            "loaded firmware schema"
        );
        Ok(schema)
    }
}

impl From<SchemaTable> for FirmwareSchema {
    fn from(schema: SchemaTable) -> Self {
        Self::new(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::RejectionKind;
    use fwset_core::Constraint;
    use serde_json::json;

    fn sample() -> FirmwareSchema {
        FirmwareSchema::from_json_str(
            &json!({
                "hardwareVendor": "HPE",
                "hardwareModel": "ProLiant DL380 Gen9",
                "schema": {
                    "BootMode": {
                        "attribute_type": "Enumeration",
                        "allowable_values": ["LegacyBios", "Uefi"],
                        "reset_required": true
                    },
                    "NumCores": {
                        "attribute_type": "Integer",
                        "lower_bound": 0,
                        "upper_bound": 24,
                        "reset_required": false
                    },
                    "ServerAssetTag": {
                        "attribute_type": "String",
                        "min_length": 0,
                        "max_length": 16
                    }
                }
            })
            .to_string(),
        )
        .unwrap()
    }

    #[test]
    fn parses_resource_with_hardware_identity() {
        let fw = sample();
        assert_eq!(fw.hardware_vendor.as_deref(), Some("HPE"));
        assert_eq!(fw.hardware_model.as_deref(), Some("ProLiant DL380 Gen9"));
        assert_eq!(fw.setting_count(), 3);
        assert!(matches!(
            fw.get("BootMode").map(SettingDefinition::constraint),
            Some(Constraint::Enumeration { .. })
        ));
    }

    #[test]
    fn hardware_identity_is_optional() {
        let fw = FirmwareSchema::from_json_str(r#"{"schema": {}}"#).unwrap();
        assert_eq!(fw.hardware_vendor, None);
        assert_eq!(fw.setting_count(), 0);
        let out = serde_json::to_value(&fw).unwrap();
        assert_eq!(out, json!({"schema": {}}));
    }

    #[test]
    fn schema_map_is_required() {
        let err = FirmwareSchema::from_json_str(r#"{"hardwareVendor": "HPE"}"#).unwrap_err();
        assert!(matches!(err, FwsetError::Serialization(_)), "got: {err}");
    }

    #[test]
    fn check_setting_uses_own_table() {
        let fw = sample();
        assert!(fw.check_setting("BootMode", &"Uefi".into()).is_ok());
        assert!(fw.check_setting("NumCores", &SettingValue::Int(24)).is_ok());
        let err = fw.check_setting("NumCores", &"25".into()).unwrap_err();
        assert_eq!(err.kind(), RejectionKind::OutOfRangeInteger);
        assert_eq!(err.to_string(), "Setting NumCores integer 25 is out of range, 0 - 24");
        assert_eq!(
            fw.validator().validate("Missing", &"x".into()).unwrap_err().kind(),
            RejectionKind::UnknownSetting
        );
    }

    #[test]
    fn reset_required_filter_keeps_order() {
        let fw = sample();
        let names = ["NumCores", "BootMode", "Missing", "ServerAssetTag"];
        assert_eq!(fw.settings_requiring_reset(names), vec!["BootMode"]);
    }

    #[test]
    fn yaml_and_json_agree() {
        let yaml = r#"
hardwareVendor: HPE
hardwareModel: ProLiant DL380 Gen9
schema:
  BootMode:
    attribute_type: Enumeration
    allowable_values: [LegacyBios, Uefi]
    reset_required: true
  NumCores:
    attribute_type: Integer
    lower_bound: 0
    upper_bound: 24
    reset_required: false
  ServerAssetTag:
    attribute_type: String
    min_length: 0
    max_length: 16
"#;
        assert_eq!(FirmwareSchema::from_yaml_str(yaml).unwrap(), sample());
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = FirmwareSchema::load(Path::new("/nonexistent/schema.json")).unwrap_err();
        match err {
            FwsetError::SchemaLoad { path, reason } => {
                assert_eq!(path, "/nonexistent/schema.json");
                assert!(reason.starts_with("cannot read file"));
            }
            other => panic!("Expected SchemaLoad, got: {other}"),
        }
    }

    #[test]
    fn builder_sets_identity() {
        let fw = FirmwareSchema::new(SchemaTable::new()).with_hardware("Dell", "R640");
        assert_eq!(fw.hardware_vendor.as_deref(), Some("Dell"));
        assert_eq!(fw.hardware_model.as_deref(), Some("R640"));
    }
}
