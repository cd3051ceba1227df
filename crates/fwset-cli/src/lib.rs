//! # fwset-cli: Firmware Setting Command-Line Interface
//!
//! The write-path front end: loads a firmware schema resource, checks each
//! requested setting write against it, and reports which writes may go
//! ahead and which of those need a reset afterwards.
//!
//! ## Subcommands
//!
//! - `check`: validate `NAME=VALUE` assignments against a schema
//! - `describe`: summarize a schema resource
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers.
//! - Handlers delegate every decision to `fwset-validate`.
//! - Batch policy lives here: every setting is checked, and the command
//!   fails if any one is rejected.

pub mod check;
pub mod describe;
