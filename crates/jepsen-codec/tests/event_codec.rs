use jepsen_codec::{DecodeError, decode, decode_all, encode};
use jepsen_testing::assertions::{
    assert_history_round_trip, assert_reencodes_identically, assert_rejected, assert_round_trip,
};
use jepsen_testing::fixtures::{
    self, READ_OPERATION, SOME_PROCESS, SOME_TIME, SOME_VALUE, client_record, fail_record,
    nemesis_start_record, ok_read_record,
};
use jepsen_types::{
    Event, FailEvent, InfoEvent, InvokeEvent, KeywordMap, OkEvent, Process, Value, ValuePresence,
    keys,
};

#[test]
fn test_info_with_nil_value_has_no_value() {
    let record = nemesis_start_record().with(keys::VALUE, Value::Nil);

    match decode(&record).unwrap() {
        Event::Info(info) => {
            assert!(info.value().is_none());
            assert!(!info.value_presence().is_present());
            assert!(info.process().is_nemesis());
            assert_eq!(info.function(), Some("start"));
        }
        other => panic!("Expected info event, got {:?}", other),
    }
}

#[test]
fn test_info_without_value() {
    match decode(&nemesis_start_record()).unwrap() {
        Event::Info(info) => assert_eq!(info.value_presence(), &ValuePresence::Absent),
        other => panic!("Expected info event, got {:?}", other),
    }
}

#[test]
fn test_info_with_value() {
    let token = Value::keyword(SOME_VALUE.to_string());
    let record = nemesis_start_record().with(keys::VALUE, token.clone());

    match decode(&record).unwrap() {
        Event::Info(info) => assert_eq!(info.value(), Some(&token)),
        other => panic!("Expected info event, got {:?}", other),
    }
}

#[test]
fn test_invoke_ignores_nil_value() {
    let record = client_record("invoke")
        .with(keys::F, Value::keyword(READ_OPERATION))
        .with(keys::VALUE, Value::Nil);

    let expected: Event = InvokeEvent::builder()
        .process(SOME_PROCESS)
        .time(SOME_TIME)
        .function(READ_OPERATION)
        .build()
        .unwrap()
        .into();
    assert_eq!(decode(&record).unwrap(), expected);
}

#[test]
fn test_ok_read() {
    let expected: Event = OkEvent::builder()
        .process(SOME_PROCESS)
        .time(SOME_TIME)
        .function(READ_OPERATION)
        .value(SOME_VALUE)
        .build()
        .unwrap()
        .into();
    assert_eq!(decode(&ok_read_record()).unwrap(), expected);
}

#[test]
fn test_ok_read_reencodes_to_equal_record() {
    let record = KeywordMap::new()
        .with(keys::TYPE, Value::keyword("ok"))
        .with(keys::F, READ_OPERATION)
        .with(keys::VALUE, SOME_VALUE)
        .with(keys::PROCESS, SOME_PROCESS)
        .with(keys::TIME, SOME_TIME);

    let event = assert_reencodes_identically(&record).unwrap();
    match event {
        Event::Ok(ok) => {
            assert_eq!(ok.value(), &Value::Int(SOME_VALUE));
            assert_eq!(ok.process(), &Process::Numeric(SOME_PROCESS));
            assert_eq!(ok.time(), SOME_TIME);
        }
        other => panic!("Expected ok event, got {:?}", other),
    }
}

#[test]
fn test_fail_with_stacktrace() {
    let message = "java.lang.RuntimeException: Error";

    let expected: Event = FailEvent::builder()
        .process(SOME_PROCESS)
        .time(SOME_TIME)
        .error(message)
        .build()
        .unwrap()
        .into();
    assert_eq!(decode(&fail_record(message)).unwrap(), expected);
}

#[test]
fn test_fail_with_timeout_keyword() {
    let expected: Event = FailEvent::builder()
        .process(SOME_PROCESS)
        .time(SOME_TIME)
        .error("timeout")
        .build()
        .unwrap()
        .into();

    assert_eq!(
        decode(&fail_record(Value::keyword("timeout"))).unwrap(),
        expected
    );
    // The plain string decodes to the same event
    assert_eq!(decode(&fail_record("timeout")).unwrap(), expected);
}

#[test]
fn test_fail_without_error_is_malformed() {
    let err = assert_rejected(&client_record("fail")).unwrap();
    assert!(matches!(
        err,
        DecodeError::MalformedRecord { field: "error", .. }
    ));
}

#[test]
fn test_ok_without_value_is_invalid() {
    let mut record = ok_read_record();
    record.remove(keys::VALUE);

    let err = assert_rejected(&record).unwrap();
    assert!(matches!(
        err,
        DecodeError::InvalidArgument { field: "value", .. }
    ));
}

#[test]
fn test_ok_with_nil_value_is_invalid() {
    let record = ok_read_record().with(keys::VALUE, Value::Nil);

    let err = assert_rejected(&record).unwrap();
    assert!(matches!(
        err,
        DecodeError::InvalidArgument { field: "value", .. }
    ));
}

#[test]
fn test_unknown_type_is_rejected() {
    for token in ["crash", "invoked", "OK", ""] {
        let record = fixtures::record(token)
            .with(keys::PROCESS, SOME_PROCESS)
            .with(keys::TIME, SOME_TIME);
        let err = assert_rejected(&record).unwrap();
        assert!(
            matches!(err, DecodeError::UnrecognizedType(_)),
            "{token}: {err}"
        );
    }
}

#[test]
fn test_process_representation_survives_round_trip() {
    for process in [Process::from(1), Process::from("1"), Process::from("nemesis")] {
        let event: Event = InfoEvent::builder()
            .process(process.clone())
            .time(SOME_TIME)
            .build()
            .unwrap()
            .into();
        assert_round_trip(&event).unwrap();
        assert_eq!(decode(&encode(&event)).unwrap().process(), &process);
    }
}

#[test]
fn test_serialise_info_with_value() {
    let event: Event = InfoEvent::builder()
        .function("foo")
        .process(SOME_PROCESS.to_string())
        .time(SOME_TIME)
        .value("bar")
        .build()
        .unwrap()
        .into();

    let expected = KeywordMap::new()
        .with(keys::TYPE, Value::keyword("info"))
        .with(keys::F, "foo")
        .with(keys::PROCESS, SOME_PROCESS.to_string())
        .with(keys::TIME, SOME_TIME)
        .with(keys::VALUE, "bar");
    assert_eq!(encode(&event), expected);
}

#[test]
fn test_serialise_info_without_value() {
    let event: Event = InfoEvent::builder()
        .function("foo")
        .process(SOME_PROCESS.to_string())
        .time(SOME_TIME)
        .build()
        .unwrap()
        .into();

    let expected = KeywordMap::new()
        .with(keys::TYPE, Value::keyword("info"))
        .with(keys::F, "foo")
        .with(keys::PROCESS, SOME_PROCESS.to_string())
        .with(keys::TIME, SOME_TIME);
    assert_eq!(encode(&event), expected);
}

#[test]
fn test_sample_history_round_trips() {
    let history = fixtures::sample_history();
    assert_history_round_trip(&history).unwrap();

    let records: Vec<KeywordMap> = history.iter().map(encode).collect();
    assert_eq!(decode_all(&records).unwrap(), history);
}

#[test]
fn test_encoded_record_snapshot() {
    let event: Event = OkEvent::builder()
        .process(SOME_PROCESS)
        .time(SOME_TIME)
        .function(READ_OPERATION)
        .value(SOME_VALUE)
        .build()
        .unwrap()
        .into();

    let json = serde_json::to_string_pretty(&encode(&event)).unwrap();
    insta::assert_snapshot!("ok_read_record", json);
}

#[test]
fn test_info_present_nil_round_trips() {
    let event: Event = InfoEvent::builder()
        .process("nemesis")
        .time(SOME_TIME)
        .value_presence(ValuePresence::Present(Value::Nil))
        .build()
        .unwrap()
        .into();

    assert_round_trip(&event).unwrap();
    assert_eq!(encode(&event).get(keys::VALUE), Some(&Value::Nil));
}

#[test]
fn test_info_present_nil_from_json_round_trips() {
    let json = r#"{"type":"info","process":1,"time":1,"value":{"present":"nil"}}"#;
    let event: Event = serde_json::from_str(json).unwrap();

    assert_round_trip(&event).unwrap();
}
