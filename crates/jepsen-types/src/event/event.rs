use serde::{Deserialize, Serialize};
use std::fmt;

use super::payload::{FailEvent, InfoEvent, InvokeEvent, OkEvent};
use crate::process::Process;

/// Single observed action in a test run
///
/// Closed set: an operation is invoked, then completes as `Ok` or `Fail`, or
/// is reported through `Info` when its outcome is unknown. Nemesis actions
/// are also `Info`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    Invoke(InvokeEvent),
    Ok(OkEvent),
    Fail(FailEvent),
    Info(InfoEvent),
}

/// Discriminant of [`Event`], spelled as the wire `type` token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Invoke,
    Ok,
    Fail,
    Info,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::Invoke,
        EventKind::Ok,
        EventKind::Fail,
        EventKind::Info,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Invoke => "invoke",
            EventKind::Ok => "ok",
            EventKind::Fail => "fail",
            EventKind::Info => "info",
        }
    }

    /// Match a wire token; anything outside the four kinds is `None`
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == token)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Invoke(_) => EventKind::Invoke,
            Event::Ok(_) => EventKind::Ok,
            Event::Fail(_) => EventKind::Fail,
            Event::Info(_) => EventKind::Info,
        }
    }

    pub fn process(&self) -> &Process {
        match self {
            Event::Invoke(e) => e.process(),
            Event::Ok(e) => e.process(),
            Event::Fail(e) => e.process(),
            Event::Info(e) => e.process(),
        }
    }

    pub fn time(&self) -> i64 {
        match self {
            Event::Invoke(e) => e.time(),
            Event::Ok(e) => e.time(),
            Event::Fail(e) => e.time(),
            Event::Info(e) => e.time(),
        }
    }

    /// Operation name; fail events do not carry one
    pub fn function(&self) -> Option<&str> {
        match self {
            Event::Invoke(e) => e.function(),
            Event::Ok(e) => e.function(),
            Event::Fail(_) => None,
            Event::Info(e) => e.function(),
        }
    }

    /// Check if this event closes an invocation with a definite outcome
    pub fn is_completion(&self) -> bool {
        matches!(self, Event::Ok(_) | Event::Fail(_))
    }
}

impl From<InvokeEvent> for Event {
    fn from(event: InvokeEvent) -> Self {
        Event::Invoke(event)
    }
}

impl From<OkEvent> for Event {
    fn from(event: OkEvent) -> Self {
        Event::Ok(event)
    }
}

impl From<FailEvent> for Event {
    fn from(event: FailEvent) -> Self {
        Event::Fail(event)
    }
}

impl From<InfoEvent> for Event {
    fn from(event: InfoEvent) -> Self {
        Event::Info(event)
    }
}
