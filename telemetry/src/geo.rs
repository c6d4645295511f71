use crate::record::{Field, TelemetryRecord};
use thiserror::Error;

pub type Degrees = f64;

/// Raw coordinate units per degree (thousandths of an arcsecond).
pub const RAW_UNITS_PER_DEGREE: f64 = 3_600_000.0;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FixError {
    #[error("{field} `{value}` is not a signed integer")]
    InvalidCoordinate { field: &'static str, value: String },
}

/// Position of the payload derived from a valid fix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPosition {
    /// Latitude, in degrees.
    pub latitude: Degrees,
    /// Longitude, in degrees. Positive raw values are west of Greenwich, so
    /// the sign is inverted on conversion.
    pub longitude: Degrees,
}

impl GeoPosition {
    pub fn from_raw(latitude_raw: i64, longitude_raw: i64) -> Self {
        Self {
            latitude: latitude_raw as f64 / RAW_UNITS_PER_DEGREE,
            longitude: -(longitude_raw as f64) / RAW_UNITS_PER_DEGREE,
        }
    }
}

/// Computes the payload position, or `Ok(None)` when the record carries no
/// fix.
///
/// Coordinates are only read as integers once both are known, so an unknown
/// latitude means no fix whatever the longitude field holds.
///
/// # Errors
/// Returns [`FixError::InvalidCoordinate`] when both coordinates are present
/// but one of them is not a signed integer.
pub fn compute_fix(record: &TelemetryRecord) -> Result<Option<GeoPosition>, FixError> {
    let (Field::Present(latitude), Field::Present(longitude)) =
        (&record.latitude_raw, &record.longitude_raw)
    else {
        return Ok(None);
    };

    let latitude = coordinate("latitude", latitude)?;
    let longitude = coordinate("longitude", longitude)?;

    Ok(Some(GeoPosition::from_raw(latitude, longitude)))
}

fn coordinate(field: &'static str, raw: &str) -> Result<i64, FixError> {
    raw.parse().map_err(|_| FixError::InvalidCoordinate {
        field,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(latitude: &str, longitude: &str) -> TelemetryRecord {
        let line = format!("X,1013,45,22,23,1500,12:00:00,{},X,{}", latitude, longitude);
        TelemetryRecord::parse(&line).unwrap()
    }

    fn fix(latitude: &str, longitude: &str) -> Option<GeoPosition> {
        compute_fix(&record(latitude, longitude)).unwrap()
    }

    #[test]
    fn test_fix_from_example_line() {
        let fix = fix("36000000", "-118800000").unwrap();

        assert_eq!(fix.latitude, 10.0);
        assert_eq!(fix.longitude, 33.0);
    }

    #[test]
    fn test_positive_raw_longitude_is_western() {
        let fix = fix("-1800000", "1800000").unwrap();

        assert_eq!(fix.latitude, -0.5);
        assert_eq!(fix.longitude, -0.5);
    }

    #[test]
    fn test_fractional_degrees() {
        // 45°30'00" N, 122°15'00" W
        let fix = fix("163800000", "440100000").unwrap();

        assert_eq!(fix.latitude, 45.5);
        assert_eq!(fix.longitude, -122.25);
    }

    #[test]
    fn test_no_fix_when_latitude_unknown() {
        assert_eq!(fix("?", "-118800000"), None);
        assert_eq!(fix("?", "?"), None);
    }

    #[test]
    fn test_no_fix_when_longitude_unknown() {
        assert_eq!(fix("36000000", "?"), None);
    }

    #[test]
    fn test_unknown_latitude_ignores_garbage_longitude() {
        assert_eq!(fix("?", "--"), None);
        assert_eq!(fix("nan", "?"), None);
    }

    #[test]
    fn test_garbage_coordinate_with_both_present() {
        assert_eq!(
            compute_fix(&record("12.5", "1")),
            Err(FixError::InvalidCoordinate {
                field: "latitude",
                value: "12.5".to_string()
            })
        );
        assert_eq!(
            compute_fix(&record("1", "west")),
            Err(FixError::InvalidCoordinate {
                field: "longitude",
                value: "west".to_string()
            })
        );
    }
}
