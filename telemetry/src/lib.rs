pub mod geo;
pub mod record;
pub mod report;

pub use geo::{FixError, GeoPosition, compute_fix};
pub use record::{Field, RecordError, TelemetryRecord, UNKNOWN_SENTINEL};
