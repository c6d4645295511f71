use std::fmt;
use thiserror::Error;

/// Raw text the payload writes in place of a value it failed to acquire.
pub const UNKNOWN_SENTINEL: &str = "?";

/// Number of comma separated fields a record line must carry.
pub const FIELD_COUNT: usize = 10;

// Positions within the record line. Index 0 and index 8 carry nothing we read.
const PRESSURE: usize = 1;
const HUMIDITY: usize = 2;
const HUMIDITY_TEMP: usize = 3;
const PRESSURE_TEMP: usize = 4;
const ALTITUDE: usize = 5;
const TIMESTAMP: usize = 6;
const LATITUDE: usize = 7;
const LONGITUDE: usize = 9;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("malformed record: expected at least 10 fields, found {found}")]
    TooFewFields { found: usize },
}

/// A single telemetry value that is either present or explicitly unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    Present(T),
    Unknown,
}

impl<T> Field<T> {
    pub fn is_unknown(&self) -> bool {
        matches!(self, Field::Unknown)
    }
}

impl Field<String> {
    fn from_raw(raw: &str) -> Self {
        if raw == UNKNOWN_SENTINEL {
            Field::Unknown
        } else {
            Field::Present(raw.to_string())
        }
    }
}

impl<T: fmt::Display> fmt::Display for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Present(value) => write!(f, "{}", value),
            Field::Unknown => f.write_str(UNKNOWN_SENTINEL),
        }
    }
}

/// One telemetry line as downlinked by the balloon payload.
///
/// Every value is kept as the text the payload sent. Coordinates are in
/// thousandths of an arcsecond and are only interpreted once a fix is
/// computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryRecord {
    pub pressure: Field<String>,
    pub humidity: Field<String>,
    pub humidity_temp: Field<String>,
    pub pressure_temp: Field<String>,
    pub altitude: Field<String>,
    pub timestamp: String,
    pub latitude_raw: Field<String>,
    pub longitude_raw: Field<String>,
}

impl TelemetryRecord {
    /// Parses one comma separated record line.
    ///
    /// Fields are taken by position. Anything past index 9 is ignored.
    ///
    /// # Errors
    /// Returns [`RecordError::TooFewFields`] when index 9 is not reachable.
    pub fn parse(line: &str) -> Result<Self, RecordError> {
        let fields: Vec<&str> = line.split(',').collect();

        if fields.len() < FIELD_COUNT {
            return Err(RecordError::TooFewFields {
                found: fields.len(),
            });
        }

        Ok(TelemetryRecord {
            pressure: Field::from_raw(fields[PRESSURE]),
            humidity: Field::from_raw(fields[HUMIDITY]),
            humidity_temp: Field::from_raw(fields[HUMIDITY_TEMP]),
            pressure_temp: Field::from_raw(fields[PRESSURE_TEMP]),
            altitude: Field::from_raw(fields[ALTITUDE]),
            timestamp: fields[TIMESTAMP].to_string(),
            latitude_raw: Field::from_raw(fields[LATITUDE]),
            longitude_raw: Field::from_raw(fields[LONGITUDE]),
        })
    }

    /// Parses the first line of a downlinked attachment.
    pub fn from_attachment(bytes: &[u8]) -> Result<Self, RecordError> {
        let text = String::from_utf8_lossy(bytes);
        let line = text.lines().next().unwrap_or_default().trim();

        log::debug!("record line: {}", line);

        Self::parse(line)
    }

    /// Names of the fields the payload reported as unknown, in wire order.
    pub fn unknown_fields(&self) -> Vec<&'static str> {
        let flags = [
            ("pressure", self.pressure.is_unknown()),
            ("humidity", self.humidity.is_unknown()),
            ("humidity_temp", self.humidity_temp.is_unknown()),
            ("pressure_temp", self.pressure_temp.is_unknown()),
            ("altitude", self.altitude.is_unknown()),
            ("latitude_raw", self.latitude_raw.is_unknown()),
            ("longitude_raw", self.longitude_raw.is_unknown()),
        ];

        flags
            .into_iter()
            .filter_map(|(name, unknown)| unknown.then_some(name))
            .collect()
    }
}
