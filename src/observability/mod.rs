//! Structured logging for scholardb
//!
//! One JSON object per line, deterministic key ordering, synchronous
//! writes. The containers never log; logging belongs to the boot and
//! command paths.

mod logger;

pub use logger::{Logger, Severity};
