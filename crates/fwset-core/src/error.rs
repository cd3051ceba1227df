//! # Error Types
//!
//! Errors raised on the collaborator side of validation: loading a
//! serialized firmware schema and parsing `NAME=VALUE` assignments.
//!
//! Value rejections are not errors of this kind. They live in
//! `fwset-validate` as `SettingRejection`, because a rejected value is an
//! expected outcome rather than a fault.

use thiserror::Error;

/// Top-level error type for firmware schema handling.
#[derive(Error, Debug)]
pub enum FwsetError {
    /// A firmware schema file could not be read or parsed.
    #[error("schema load error for '{path}': {reason}")]
    SchemaLoad {
        /// Path to the schema file.
        path: String,
        /// Reason the schema could not be loaded.
        reason: String,
    },

    /// A setting assignment was not of the form `NAME=VALUE`.
    #[error("invalid setting assignment {0:?}: expected NAME=VALUE")]
    InvalidAssignment(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
