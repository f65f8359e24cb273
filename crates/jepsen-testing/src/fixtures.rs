//! Records shaped like the ones the harness actually emits.
//!
//! The harness sends `type`, `f` and reserved process names as keywords and
//! timestamps as longs; the helpers here follow that so tests exercise the
//! real wire shape rather than what `encode` would produce.

use jepsen_types::harness::{NEMESIS_PROCESS, START_FUNCTION, STOP_FUNCTION};
use jepsen_types::{Event, FailEvent, InfoEvent, InvokeEvent, KeywordMap, OkEvent, Value, keys};

pub const SOME_VALUE: i64 = 136;
pub const SOME_TIME: i64 = 3029699376;
pub const SOME_PROCESS: i64 = 1;
pub const READ_OPERATION: &str = "read-operation";

/// Record with only the `type` keyword set
pub fn record(kind: &str) -> KeywordMap {
    KeywordMap::new().with(keys::TYPE, Value::keyword(kind))
}

/// Client record for `kind` from [`SOME_PROCESS`] at [`SOME_TIME`]
pub fn client_record(kind: &str) -> KeywordMap {
    record(kind)
        .with(keys::PROCESS, SOME_PROCESS)
        .with(keys::TIME, SOME_TIME)
}

/// Nemesis `info` record announcing the start of a fault, without a value
pub fn nemesis_start_record() -> KeywordMap {
    record("info")
        .with(keys::F, Value::keyword(START_FUNCTION))
        .with(keys::PROCESS, Value::keyword(NEMESIS_PROCESS))
        .with(keys::TIME, SOME_TIME)
}

/// Successful read returning [`SOME_VALUE`]
pub fn ok_read_record() -> KeywordMap {
    client_record("ok")
        .with(keys::F, Value::keyword(READ_OPERATION))
        .with(keys::VALUE, SOME_VALUE)
}

/// Failed completion carrying `error` exactly as given
pub fn fail_record(error: impl Into<Value>) -> KeywordMap {
    client_record("fail").with(keys::ERROR, error)
}

/// A short, well-formed history touching every event variant
pub fn sample_history() -> Vec<Event> {
    vec![
        InvokeEvent::builder()
            .process(SOME_PROCESS)
            .time(SOME_TIME)
            .function(READ_OPERATION)
            .build()
            .map(Event::from),
        OkEvent::builder()
            .process(SOME_PROCESS)
            .time(SOME_TIME + 10)
            .function(READ_OPERATION)
            .value(SOME_VALUE)
            .build()
            .map(Event::from),
        InfoEvent::builder()
            .process(NEMESIS_PROCESS)
            .time(SOME_TIME + 20)
            .function(START_FUNCTION)
            .build()
            .map(Event::from),
        InvokeEvent::builder()
            .process(2)
            .time(SOME_TIME + 30)
            .function("write")
            .build()
            .map(Event::from),
        FailEvent::builder()
            .process(2)
            .time(SOME_TIME + 40)
            .error("timeout")
            .build()
            .map(Event::from),
        InfoEvent::builder()
            .process(NEMESIS_PROCESS)
            .time(SOME_TIME + 50)
            .function(STOP_FUNCTION)
            .value(Value::from(vec![Value::from("n1"), Value::from("n2")]))
            .build()
            .map(Event::from),
    ]
    .into_iter()
    .collect::<Result<_, _>>()
    .unwrap_or_else(|err| panic!("sample history must be well formed: {err}"))
}
