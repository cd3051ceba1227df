//! # Check Subcommand
//!
//! Validates requested setting writes against a firmware schema, one
//! setting at a time, and reports the outcome of each.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use fwset_core::SettingAssignment;
use fwset_validate::{FirmwareSchema, RejectionKind};
use serde::Serialize;

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Firmware schema resource (YAML for .yaml/.yml, JSON otherwise).
    #[arg(long)]
    pub schema: PathBuf,

    /// Setting to write, as NAME=VALUE. Repeat for several settings.
    #[arg(long = "set", value_name = "NAME=VALUE", required = true)]
    pub assignments: Vec<SettingAssignment>,

    /// Print a JSON report instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Outcome for one requested setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingOutcome {
    pub name: String,
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<RejectionKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Result of checking a batch of settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub outcomes: Vec<SettingOutcome>,
    /// Accepted settings that need a reset once written.
    pub reset_required: Vec<String>,
}

impl CheckReport {
    pub fn rejected_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.accepted).count()
    }

    pub fn all_accepted(&self) -> bool {
        self.rejected_count() == 0
    }

    /// One line per setting, then the reset list if non-empty.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for outcome in &self.outcomes {
            match &outcome.reason {
                None => {
                    let _ = writeln!(out, "ok       {}", outcome.name);
                }
                Some(reason) => {
                    let _ = writeln!(out, "rejected {}: {reason}", outcome.name);
                }
            }
        }
        if !self.reset_required.is_empty() {
            let _ = writeln!(
                out,
                "reset required after write: {}",
                self.reset_required.join(", ")
            );
        }
        out
    }
}

/// Check every assignment against `schema`. Each setting is validated on
/// its own; a rejection does not stop the rest.
pub fn check_settings(schema: &FirmwareSchema, assignments: &[SettingAssignment]) -> CheckReport {
    let validator = schema.validator();

    let outcomes: Vec<SettingOutcome> = assignments
        .iter()
        .map(|a| match validator.validate(&a.name, &a.value) {
            Ok(()) => SettingOutcome {
                name: a.name.clone(),
                accepted: true,
                kind: None,
                reason: None,
            },
            Err(rejection) => SettingOutcome {
                name: a.name.clone(),
                accepted: false,
                kind: Some(rejection.kind()),
                reason: Some(rejection.to_string()),
            },
        })
        .collect();

    let reset_required = schema
        .settings_requiring_reset(
            outcomes
                .iter()
                .filter(|o| o.accepted)
                .map(|o| o.name.as_str()),
        )
        .into_iter()
        .map(str::to_string)
        .collect();

    CheckReport {
        outcomes,
        reset_required,
    }
}

/// Load the schema named in `args` and check its assignments.
pub fn run_check(args: &CheckArgs) -> anyhow::Result<CheckReport> {
    let schema = FirmwareSchema::load(&args.schema)
        .with_context(|| format!("loading firmware schema {}", args.schema.display()))?;

    let report = check_settings(&schema, &args.assignments);
    tracing::info!(
        requested = report.outcomes.len(),
        rejected = report.rejected_count(),
        "checked setting writes"
    );
    Ok(report)
}
