//! Testing infrastructure for the jepsen event crates.
//!
//! - `fixtures`: canonical harness records and sample histories
//! - `assertions`: round-trip and rejection checks with readable failures

pub mod assertions;
pub mod fixtures;
