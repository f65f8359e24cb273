use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Three-way state of an info event's value on the wire
///
/// The harness may omit the key, send it with a nil marker, or send a real
/// value. Only `Present` counts as having a value, but the other two are kept
/// apart so the record can be reproduced with the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValuePresence {
    /// Key not in the record
    #[default]
    Absent,
    /// Key present, holding nil
    Null,
    Present(Value),
}

impl ValuePresence {
    pub fn is_present(&self) -> bool {
        matches!(self, ValuePresence::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, ValuePresence::Absent)
    }

    /// Fold `Present(Value::Nil)` into `Null`; a nil is never a value
    pub fn normalized(self) -> Self {
        match self {
            ValuePresence::Present(Value::Nil) => ValuePresence::Null,
            other => other,
        }
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            ValuePresence::Present(value) => Some(value),
            ValuePresence::Absent | ValuePresence::Null => None,
        }
    }
}

impl From<Value> for ValuePresence {
    fn from(value: Value) -> Self {
        match value {
            Value::Nil => ValuePresence::Null,
            value => ValuePresence::Present(value),
        }
    }
}

impl From<Option<Value>> for ValuePresence {
    fn from(slot: Option<Value>) -> Self {
        slot.map_or(ValuePresence::Absent, ValuePresence::from)
    }
}
