//! Object lifetimes under three ownership disciplines: a local value, an
//! exclusively owned heap value, and a reference-counted shared value.
//!
//! Every [`Record`] reports its construction and destruction to a
//! [`TraceSink`], so the order of those events can be printed or asserted on.

pub mod config;
pub mod drivers;
pub mod error;
pub mod raw;
pub mod record;
pub mod trace;

pub use config::DemoConfig;
pub use drivers::{run_all, Driver};
pub use error::{ConfigError, OwnershipError};
pub use raw::RawSlot;
pub use record::Record;
pub use trace::{ConsoleSink, RecordingSink, TraceEvent, TraceSink};
