use jepsen_types::{Event, KeywordMap, Process, Value, ValuePresence, keys};

/// Project an event into a harness record
///
/// Optional fields that are not set are left out entirely; an info event
/// that recorded an explicit nil gets its nil back. Cannot fail: the variant
/// builders already enforced everything the record needs.
pub fn encode(event: &Event) -> KeywordMap {
    let mut record = KeywordMap::new()
        .with(keys::TYPE, Value::keyword(event.kind().as_str()))
        .with(keys::PROCESS, process_value(event.process()))
        .with(keys::TIME, event.time());

    if let Some(function) = event.function() {
        record.insert(keys::F, function);
    }

    match event {
        Event::Invoke(_) => {}
        Event::Ok(ok) => {
            record.insert(keys::VALUE, ok.value().clone());
        }
        Event::Fail(fail) => {
            record.insert(keys::ERROR, fail.error());
        }
        Event::Info(info) => match info.value_presence() {
            ValuePresence::Absent => {}
            ValuePresence::Null => {
                record.insert(keys::VALUE, Value::Nil);
            }
            ValuePresence::Present(value) => {
                record.insert(keys::VALUE, value.clone());
            }
        },
    }

    record
}

fn process_value(process: &Process) -> Value {
    match process {
        Process::Numeric(n) => Value::Int(*n),
        Process::Named(name) => Value::String(name.clone()),
    }
}

/// Encode a sequence of events, preserving order
pub fn encode_all<'a>(events: impl IntoIterator<Item = &'a Event>) -> Vec<KeywordMap> {
    events.into_iter().map(encode).collect()
}
