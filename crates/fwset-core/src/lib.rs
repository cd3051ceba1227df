//! # fwset-core: Foundational Types for Firmware Setting Validation
//!
//! Defines the data model consumed by the setting validator. Every other
//! crate in the workspace depends on `fwset-core`; it depends on nothing
//! internal.
//!
//! ## Key Design Principles
//!
//! 1. **One sum type per constraint.** [`Constraint`] carries only the fields
//!    relevant to its attribute type. A `Boolean` setting cannot carry a
//!    length bound, and an `Integer` setting with a single bound configured
//!    is represented as unconstrained at construction.
//!
//! 2. **Wire form is separate from the model.** [`SettingSchema`] is the flat
//!    serialized entry with every field optional. [`SettingDefinition`]
//!    serializes through it, so a schema table deserializes straight into
//!    the sum-typed model.
//!
//! 3. **Dual-typed values.** [`SettingValue`] is either text or an integer.
//!    Its text form is always available; its integer form is an explicit,
//!    fallible conversion.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `fwset-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod constraint;
pub mod error;
pub mod schema;
pub mod value;

pub use constraint::{AttributeType, Bounds, Constraint};
pub use error::FwsetError;
pub use schema::{SchemaTable, SettingDefinition, SettingSchema};
pub use value::{SettingAssignment, SettingValue};
