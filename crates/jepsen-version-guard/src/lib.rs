//! Storage-engine version guard.
//!
//! Runs once at startup, independently of the event codec: unsupported
//! versions only produce a warning, versions inside a known-buggy range are a
//! hard error.

pub mod config;
pub mod error;
pub mod guard;
pub mod version;

pub use config::{BuggyRange, GuardConfig};
pub use error::{Result, VersionGuardError};
pub use guard::{VersionStatus, check_database_version};
pub use version::Version;
