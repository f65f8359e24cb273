//! Translation between typed [`Event`]s and the harness's [`KeywordMap`] records.
//!
//! Both directions are pure functions over a single record:
//! - [`decode`]: validate a record and build the matching event variant
//! - [`encode`]: project an event back into a record
//! - [`decode_records`] / [`decode_all`]: convenience over a record sequence
//!
//! For every event `e` built through the variant builders,
//! `decode(&encode(&e)) == Ok(e)`.

pub mod decode;
pub mod encode;
pub mod error;
pub mod stream;

pub use decode::decode;
pub use encode::{encode, encode_all};
pub use error::{DecodeError, Result};
pub use stream::{decode_all, decode_records};

pub use jepsen_types::{Event, EventKind, KeywordMap};
