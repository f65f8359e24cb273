use jepsen_types::harness::TIMEOUT_ERROR;
use jepsen_types::{
    ConstructionError, Event, EventKind, FailEvent, InfoEvent, InvokeEvent, KeywordMap, OkEvent,
    Process, Value, ValuePresence, keys,
};

use crate::error::{DecodeError, Result};

/// Decode one harness record into its event variant
///
/// The variant is chosen by the `type` field alone. `process` and `time` are
/// mandatory for every variant; `ok` additionally needs a non-nil `value` and
/// `fail` an `error`. Unknown keys are ignored.
pub fn decode(record: &KeywordMap) -> Result<Event> {
    let kind = read_kind(record)?;
    let fields = Fields { record, kind };

    match kind {
        EventKind::Invoke => decode_invoke(&fields),
        EventKind::Ok => decode_ok(&fields),
        EventKind::Fail => decode_fail(&fields),
        EventKind::Info => decode_info(&fields),
    }
}

fn read_kind(record: &KeywordMap) -> Result<EventKind> {
    let raw = record
        .get(keys::TYPE)
        .ok_or_else(|| DecodeError::UnrecognizedType("<absent>".to_string()))?;

    raw.as_text()
        .and_then(EventKind::parse)
        .ok_or_else(|| DecodeError::UnrecognizedType(raw.to_string()))
}

fn decode_invoke(fields: &Fields<'_>) -> Result<Event> {
    // Invocations may carry the operation's argument under `value`; it is not
    // part of the invoke model and is ignored, nil or not.
    let mut builder = InvokeEvent::builder()
        .process(fields.process()?)
        .time(fields.time()?);
    if let Some(function) = fields.function()? {
        builder = builder.function(function);
    }
    builder.build().map(Event::from).map_err(|e| fields.construction(e))
}

fn decode_ok(fields: &Fields<'_>) -> Result<Event> {
    let mut builder = OkEvent::builder()
        .process(fields.process()?)
        .time(fields.time()?);
    if let Some(function) = fields.function()? {
        builder = builder.function(function);
    }

    // A successful operation has to report its result: absent and nil are
    // both rejected as invalid arguments rather than malformed records.
    let value = match fields.record.get(keys::VALUE) {
        None => {
            return Err(DecodeError::invalid(keys::VALUE, "ok event must carry a value"));
        }
        Some(Value::Nil) => {
            return Err(DecodeError::invalid(
                keys::VALUE,
                "ok event value must not be nil",
            ));
        }
        Some(value) => value.clone(),
    };

    builder
        .value(value)
        .build()
        .map(Event::from)
        .map_err(|e| fields.construction(e))
}

fn decode_fail(fields: &Fields<'_>) -> Result<Event> {
    let raw = fields.mandatory(keys::ERROR)?;
    let error = match raw {
        Value::Keyword(k) if k.name() == TIMEOUT_ERROR => TIMEOUT_ERROR.to_string(),
        // Other tokens pass through in their printed form (`:name`)
        other => other.to_string(),
    };

    FailEvent::builder()
        .process(fields.process()?)
        .time(fields.time()?)
        .error(error)
        .build()
        .map(Event::from)
        .map_err(|e| fields.construction(e))
}

fn decode_info(fields: &Fields<'_>) -> Result<Event> {
    let mut builder = InfoEvent::builder()
        .process(fields.process()?)
        .time(fields.time()?)
        .value_presence(ValuePresence::from(fields.record.get(keys::VALUE).cloned()));
    if let Some(function) = fields.function()? {
        builder = builder.function(function);
    }
    builder.build().map(Event::from).map_err(|e| fields.construction(e))
}

/// Typed field access for a record whose kind is already known
struct Fields<'a> {
    record: &'a KeywordMap,
    kind: EventKind,
}

impl Fields<'_> {
    /// A field that must be present and non-nil
    fn mandatory(&self, field: &'static str) -> Result<&Value> {
        match self.record.get(field) {
            None => Err(DecodeError::MalformedRecord {
                kind: self.kind,
                field,
            }),
            Some(Value::Nil) => Err(DecodeError::invalid(field, "must not be nil")),
            Some(value) => Ok(value),
        }
    }

    fn process(&self) -> Result<Process> {
        match self.mandatory(keys::PROCESS)? {
            Value::Int(n) => Ok(Process::Numeric(*n)),
            Value::String(name) => Ok(Process::Named(name.clone())),
            Value::Keyword(k) => Ok(Process::Named(k.name().to_string())),
            other => Err(unexpected_type(keys::PROCESS, "an integer or a name", other)),
        }
    }

    fn time(&self) -> Result<i64> {
        let raw = self.mandatory(keys::TIME)?;
        raw.as_int()
            .ok_or_else(|| unexpected_type(keys::TIME, "an integer", raw))
    }

    /// Optional operation name; a nil `f` counts as not given
    fn function(&self) -> Result<Option<String>> {
        match self.record.get(keys::F) {
            None | Some(Value::Nil) => Ok(None),
            Some(raw) => raw
                .as_text()
                .map(|name| Some(name.to_string()))
                .ok_or_else(|| unexpected_type(keys::F, "a name", raw)),
        }
    }

    /// Builders re-check what the reads above already enforced; map their
    /// verdict onto the decode taxonomy instead of panicking.
    fn construction(&self, err: ConstructionError) -> DecodeError {
        match err {
            ConstructionError::MissingField(field) => DecodeError::MalformedRecord {
                kind: self.kind,
                field,
            },
            ConstructionError::NullValue(field) => DecodeError::invalid(field, "must not be nil"),
        }
    }
}

fn unexpected_type(field: &'static str, expected: &str, got: &Value) -> DecodeError {
    DecodeError::invalid(
        field,
        format!("expected {}, got {} `{}`", expected, got.type_name(), got),
    )
}
