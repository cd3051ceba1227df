//! # fwset-validate: Firmware Setting Validation
//!
//! Decides whether a candidate value may be written to a named firmware
//! setting, given the schema table for the machine.
//!
//! ## Setting Validation (`validate`)
//!
//! - [`validate_setting`]: checks one `(name, value)` pair against a
//!   [`SchemaTable`](fwset_core::SchemaTable). Returns `Ok(())` when the
//!   value may be written, or a [`SettingRejection`] naming the setting
//!   and the reason.
//! - [`SettingValidator`]: the same check bound to a borrowed table.
//!
//! ## Firmware Schema Resource (`resource`)
//!
//! [`FirmwareSchema`] pairs a schema table with the hardware vendor and
//! model it describes, and loads from serialized JSON or YAML.
//!
//! ## Crate Policy
//!
//! - Depends only on `fwset-core` internally.
//! - Validation is pure: no I/O, no shared state, never panics.
//! - Each setting is validated on its own. Batch policy (reject all, or
//!   apply the valid subset) belongs to the caller.

pub mod resource;
pub mod validate;

pub use resource::FirmwareSchema;
pub use validate::{validate_setting, RejectionKind, SettingRejection, SettingValidator};
