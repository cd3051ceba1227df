//! # Describe Subcommand
//!
//! Summarizes a firmware schema resource: hardware identity, setting
//! count, and how many settings of each attribute type it declares.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use fwset_validate::FirmwareSchema;
use serde::Serialize;

/// Arguments for the describe subcommand.
#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// Firmware schema resource (YAML for .yaml/.yml, JSON otherwise).
    #[arg(long)]
    pub schema: PathBuf,

    /// Print a JSON summary instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Counts over a schema table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaSummary {
    pub hardware_vendor: Option<String>,
    pub hardware_model: Option<String>,
    pub settings: usize,
    pub read_only: usize,
    /// Settings per declared type; untyped entries count under `(unset)`.
    pub by_type: BTreeMap<String, usize>,
}

impl SchemaSummary {
    pub fn of(schema: &FirmwareSchema) -> Self {
        let mut by_type = BTreeMap::new();
        let mut read_only = 0;
        for def in schema.schema.values() {
            let name = match def.constraint().type_name() {
                "" => "(unset)",
                other => other,
            };
            *by_type.entry(name.to_string()).or_insert(0) += 1;
            if def.is_read_only() {
                read_only += 1;
            }
        }
        Self {
            hardware_vendor: schema.hardware_vendor.clone(),
            hardware_model: schema.hardware_model.clone(),
            settings: schema.setting_count(),
            read_only,
            by_type,
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} {}",
            self.hardware_vendor.as_deref().unwrap_or("(unknown vendor)"),
            self.hardware_model.as_deref().unwrap_or("(unknown model)")
        );
        let _ = writeln!(
            out,
            "{} settings, {} read-only",
            self.settings, self.read_only
        );
        for (type_name, count) in &self.by_type {
            let _ = writeln!(out, "  {type_name}: {count}");
        }
        out
    }
}

pub fn run_describe(args: &DescribeArgs) -> anyhow::Result<SchemaSummary> {
    let schema = FirmwareSchema::load(&args.schema)
        .with_context(|| format!("loading firmware schema {}", args.schema.display()))?;
    Ok(SchemaSummary::of(&schema))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fwset_core::{Constraint, SchemaTable, SettingDefinition};

    #[test]
    fn test_summary_counts() {
        let mut table = SchemaTable::new();
        table.insert("A".to_string(), SettingDefinition::integer(0, 1));
        table.insert("B".to_string(), SettingDefinition::integer(0, 1).read_only(true));
        table.insert("C".to_string(), SettingDefinition::new(Constraint::Unset));
        table.insert(
            "D".to_string(),
            SettingDefinition::new(Constraint::Unrecognized("Toggle".to_string())),
        );
        let fw = FirmwareSchema::new(table).with_hardware("HPE", "DL380");

        let summary = SchemaSummary::of(&fw);
        assert_eq!(summary.settings, 4);
        assert_eq!(summary.read_only, 1);
        assert_eq!(summary.by_type["Integer"], 2);
        assert_eq!(summary.by_type["(unset)"], 1);
        assert_eq!(summary.by_type["Toggle"], 1);
        assert_eq!(
            summary.render_text(),
            "HPE DL380\n4 settings, 1 read-only\n  (unset): 1\n  Integer: 2\n  Toggle: 1\n"
        );
    }

    #[test]
    fn test_summary_without_identity() {
        let summary = SchemaSummary::of(&FirmwareSchema::default());
        assert_eq!(summary.settings, 0);
        assert!(summary.render_text().starts_with("(unknown vendor) (unknown model)\n"));
    }
}
