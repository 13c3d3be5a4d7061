//! Persisted-store side of the vault: dedup ledger, record assembly, sinks.

pub mod builder;
pub mod ledger;
pub mod sink;

pub use builder::build_record;
pub use ledger::Ledger;
pub use sink::{JsonlSink, RecordSink};
