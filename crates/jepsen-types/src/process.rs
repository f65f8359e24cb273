use serde::{Deserialize, Serialize};
use std::fmt;

use crate::harness::NEMESIS_PROCESS;

/// Identifier of the actor that produced an event
///
/// Ordinary client processes are small integers; harness-internal actors
/// (the nemesis, for instance) use a reserved name. Both forms are kept
/// exactly as they appeared on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Process {
    /// Regular client process
    Numeric(i64),
    /// Named harness actor
    Named(String),
}

impl Process {
    pub fn as_numeric(&self) -> Option<i64> {
        match self {
            Process::Numeric(n) => Some(*n),
            Process::Named(_) => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Process::Numeric(_) => None,
            Process::Named(name) => Some(name),
        }
    }

    /// True for the fault-injection controller
    pub fn is_nemesis(&self) -> bool {
        self.as_name() == Some(NEMESIS_PROCESS)
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Process::Numeric(n) => write!(f, "{}", n),
            Process::Named(name) => write!(f, "{}", name),
        }
    }
}

impl From<i64> for Process {
    fn from(n: i64) -> Self {
        Process::Numeric(n)
    }
}

impl From<i32> for Process {
    fn from(n: i32) -> Self {
        Process::Numeric(i64::from(n))
    }
}

impl From<&str> for Process {
    fn from(name: &str) -> Self {
        Process::Named(name.to_string())
    }
}

impl From<String> for Process {
    fn from(name: String) -> Self {
        Process::Named(name)
    }
}
