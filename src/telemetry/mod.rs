//! Battery telemetry collection.
//!
//! A [`TelemetrySource`] produces a [`TelemetrySnapshot`]: a flat map of the
//! labels the power utility prints to the values it prints next to them.
//! The production source is [`CommandCollector`], which runs the utility as a
//! subprocess; tests substitute their own sources.

pub mod collector;
pub mod snapshot;

pub use collector::{CommandCollector, TelemetrySource};
pub use snapshot::{parse_snapshot, TelemetrySnapshot};
