use std::borrow::Borrow;

use jepsen_types::{Event, KeywordMap};

use crate::decode::decode;
use crate::error::{DecodeError, Result};

/// Lazily decode a sequence of records
///
/// Each item carries the record's position so the caller can report or skip
/// corrupt entries; nothing is dropped here.
pub fn decode_records<I>(records: I) -> impl Iterator<Item = (usize, Result<Event>)>
where
    I: IntoIterator,
    I::Item: Borrow<KeywordMap>,
{
    records.into_iter().enumerate().map(|(index, record)| {
        let decoded = decode(record.borrow());
        if let Err(err) = &decoded {
            tracing::debug!(index, error = %err, "rejected harness record");
        }
        (index, decoded)
    })
}

/// Decode every record, stopping at the first corrupt one
pub fn decode_all<I>(records: I) -> Result<Vec<Event>>
where
    I: IntoIterator,
    I::Item: Borrow<KeywordMap>,
{
    decode_records(records)
        .map(|(index, decoded)| decoded.map_err(|err| DecodeError::at_record(index, err)))
        .collect()
}
