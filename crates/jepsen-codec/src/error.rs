use jepsen_types::EventKind;
use thiserror::Error;

/// Result type for decoding operations
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Reasons a record cannot be turned into an event
///
/// All of these mean the record is corrupt; whether to skip it or abort the
/// whole history is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A field mandatory for the declared event type is missing
    #[error("malformed {kind} record: missing mandatory field `{field}`")]
    MalformedRecord {
        kind: EventKind,
        field: &'static str,
    },

    /// A field is present but holds a disallowed value (nil, wrong type)
    #[error("invalid argument for field `{field}`: {reason}")]
    InvalidArgument { field: &'static str, reason: String },

    /// The `type` token is missing or not one of invoke/ok/fail/info
    #[error("unrecognized event type: {0}")]
    UnrecognizedType(String),

    /// Failure while decoding a sequence, tagged with the record position
    #[error("record {index}: {source}")]
    AtRecord {
        index: usize,
        #[source]
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        DecodeError::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn at_record(index: usize, source: DecodeError) -> Self {
        DecodeError::AtRecord {
            index,
            source: Box::new(source),
        }
    }

    /// The underlying error, looking through [`DecodeError::AtRecord`]
    pub fn root(&self) -> &DecodeError {
        match self {
            DecodeError::AtRecord { source, .. } => source.root(),
            other => other,
        }
    }
}
