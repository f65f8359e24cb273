pub mod event;
pub mod payload;
pub mod presence;

pub use event::*;
pub use payload::*;
pub use presence::*;
