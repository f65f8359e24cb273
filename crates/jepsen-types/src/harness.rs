//! Well-known identifiers used by the consistency-checking harness.

/// Process name reserved for the fault-injection controller
pub const NEMESIS_PROCESS: &str = "nemesis";

/// Function name the nemesis uses when it starts injecting a fault
pub const START_FUNCTION: &str = "start";

/// Function name the nemesis uses when it heals a fault
pub const STOP_FUNCTION: &str = "stop";

/// Normalized error text for operations the harness timed out
pub const TIMEOUT_ERROR: &str = "timeout";
