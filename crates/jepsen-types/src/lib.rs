pub mod error;
pub mod event;
pub mod harness;
pub mod process;
pub mod record;
pub mod value;

pub use error::{ConstructionError, Result};
pub use event::*;
pub use process::Process;
pub use record::{KeywordMap, keys};
pub use value::{Keyword, Value};
