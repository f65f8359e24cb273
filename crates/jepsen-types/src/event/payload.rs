use serde::{Deserialize, Serialize};

use super::presence::ValuePresence;
use crate::error::{ConstructionError, Result, require};
use crate::process::Process;
use crate::value::Value;

// Each variant keeps its fields private: the builders are the only way in,
// so a value that exists has already passed the mandatory-field checks.

/// A process began an operation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvokeEvent {
    process: Process,
    time: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    function: Option<String>,
}

/// An operation completed successfully with a result
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "OkEventFields")]
pub struct OkEvent {
    process: Process,
    time: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    function: Option<String>,
    /// Never `Value::Nil`
    value: Value,
}

/// An operation definitely did not take effect
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FailEvent {
    process: Process,
    time: i64,
    error: String,
}

/// Out-of-band marker, e.g. a nemesis action or an indeterminate completion
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "InfoEventFields")]
pub struct InfoEvent {
    process: Process,
    time: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    function: Option<String>,
    /// Never `Present(Value::Nil)`
    #[serde(skip_serializing_if = "ValuePresence::is_absent")]
    value: ValuePresence,
}

impl InvokeEvent {
    pub fn builder() -> InvokeEventBuilder {
        InvokeEventBuilder::default()
    }

    pub fn process(&self) -> &Process {
        &self.process
    }

    pub fn time(&self) -> i64 {
        self.time
    }

    pub fn function(&self) -> Option<&str> {
        self.function.as_deref()
    }
}

impl OkEvent {
    pub fn builder() -> OkEventBuilder {
        OkEventBuilder::default()
    }

    pub fn process(&self) -> &Process {
        &self.process
    }

    pub fn time(&self) -> i64 {
        self.time
    }

    pub fn function(&self) -> Option<&str> {
        self.function.as_deref()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl FailEvent {
    pub fn builder() -> FailEventBuilder {
        FailEventBuilder::default()
    }

    pub fn process(&self) -> &Process {
        &self.process
    }

    pub fn time(&self) -> i64 {
        self.time
    }

    pub fn error(&self) -> &str {
        &self.error
    }
}

impl InfoEvent {
    pub fn builder() -> InfoEventBuilder {
        InfoEventBuilder::default()
    }

    pub fn process(&self) -> &Process {
        &self.process
    }

    pub fn time(&self) -> i64 {
        self.time
    }

    pub fn function(&self) -> Option<&str> {
        self.function.as_deref()
    }

    /// The value, if one was actually given (an explicit nil is not a value)
    pub fn value(&self) -> Option<&Value> {
        self.value.as_value()
    }

    pub fn value_presence(&self) -> &ValuePresence {
        &self.value
    }
}

// --- Builders ---

#[derive(Debug, Clone, Default)]
pub struct InvokeEventBuilder {
    process: Option<Process>,
    time: Option<i64>,
    function: Option<String>,
}

impl InvokeEventBuilder {
    pub fn process(mut self, process: impl Into<Process>) -> Self {
        self.process = Some(process.into());
        self
    }

    pub fn time(mut self, time: i64) -> Self {
        self.time = Some(time);
        self
    }

    pub fn function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }

    pub fn build(self) -> Result<InvokeEvent> {
        Ok(InvokeEvent {
            process: require(self.process, "process")?,
            time: require(self.time, "time")?,
            function: self.function,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct OkEventBuilder {
    process: Option<Process>,
    time: Option<i64>,
    function: Option<String>,
    value: Option<Value>,
}

impl OkEventBuilder {
    pub fn process(mut self, process: impl Into<Process>) -> Self {
        self.process = Some(process.into());
        self
    }

    pub fn time(mut self, time: i64) -> Self {
        self.time = Some(time);
        self
    }

    pub fn function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }

    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn build(self) -> Result<OkEvent> {
        let process = require(self.process, "process")?;
        let time = require(self.time, "time")?;
        let value = require(self.value, "value")?;
        if value.is_nil() {
            return Err(ConstructionError::NullValue("value"));
        }
        Ok(OkEvent {
            process,
            time,
            function: self.function,
            value,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct FailEventBuilder {
    process: Option<Process>,
    time: Option<i64>,
    error: Option<String>,
}

impl FailEventBuilder {
    pub fn process(mut self, process: impl Into<Process>) -> Self {
        self.process = Some(process.into());
        self
    }

    pub fn time(mut self, time: i64) -> Self {
        self.time = Some(time);
        self
    }

    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn build(self) -> Result<FailEvent> {
        Ok(FailEvent {
            process: require(self.process, "process")?,
            time: require(self.time, "time")?,
            error: require(self.error, "error")?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct InfoEventBuilder {
    process: Option<Process>,
    time: Option<i64>,
    function: Option<String>,
    value: ValuePresence,
}

impl InfoEventBuilder {
    pub fn process(mut self, process: impl Into<Process>) -> Self {
        self.process = Some(process.into());
        self
    }

    pub fn time(mut self, time: i64) -> Self {
        self.time = Some(time);
        self
    }

    pub fn function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }

    /// Passing `Value::Nil` records an explicit null rather than a value
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = ValuePresence::from(value.into());
        self
    }

    /// `Present(Value::Nil)` is recorded as `Null`
    pub fn value_presence(mut self, presence: ValuePresence) -> Self {
        self.value = presence.normalized();
        self
    }

    pub fn build(self) -> Result<InfoEvent> {
        Ok(InfoEvent {
            process: require(self.process, "process")?,
            time: require(self.time, "time")?,
            function: self.function,
            value: self.value,
        })
    }
}

/// Unvalidated serde shape of [`OkEvent`]; goes through the builder
#[derive(Deserialize)]
struct OkEventFields {
    process: Process,
    time: i64,
    #[serde(default)]
    function: Option<String>,
    value: Value,
}

impl TryFrom<OkEventFields> for OkEvent {
    type Error = ConstructionError;

    fn try_from(fields: OkEventFields) -> Result<Self> {
        let builder = OkEvent::builder()
            .process(fields.process)
            .time(fields.time)
            .value(fields.value);
        match fields.function {
            Some(function) => builder.function(function).build(),
            None => builder.build(),
        }
    }
}

/// Unvalidated serde shape of [`InfoEvent`]; goes through the builder
#[derive(Deserialize)]
struct InfoEventFields {
    process: Process,
    time: i64,
    #[serde(default)]
    function: Option<String>,
    #[serde(default)]
    value: ValuePresence,
}

impl TryFrom<InfoEventFields> for InfoEvent {
    type Error = ConstructionError;

    fn try_from(fields: InfoEventFields) -> Result<Self> {
        let builder = InfoEvent::builder()
            .process(fields.process)
            .time(fields.time)
            .value_presence(fields.value);
        match fields.function {
            Some(function) => builder.function(function).build(),
            None => builder.build(),
        }
    }
}
