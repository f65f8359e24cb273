use thiserror::Error;

/// Result type for event construction
pub type Result<T> = std::result::Result<T, ConstructionError>;

/// Raised by the event builders when a mandatory field is not supplied.
///
/// This is a producer-side programming error, not something a decoded
/// record can trigger on its own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// A mandatory field was never set on the builder
    #[error("cannot build event: missing mandatory field `{0}`")]
    MissingField(&'static str),

    /// A mandatory field was set to the nil marker
    #[error("cannot build event: field `{0}` must not be nil")]
    NullValue(&'static str),
}

/// Unwrap a mandatory builder slot or report which field was missing
pub(crate) fn require<T>(slot: Option<T>, field: &'static str) -> Result<T> {
    slot.ok_or(ConstructionError::MissingField(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_field() {
        let missing = ConstructionError::MissingField("time");
        assert_eq!(
            missing.to_string(),
            "cannot build event: missing mandatory field `time`"
        );

        let null = ConstructionError::NullValue("value");
        assert!(null.to_string().contains("`value` must not be nil"));
    }

    #[test]
    fn test_require() {
        assert_eq!(require(Some(3), "time"), Ok(3));
        assert_eq!(
            require::<i64>(None, "time"),
            Err(ConstructionError::MissingField("time"))
        );
    }
}
