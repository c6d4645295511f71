//! Operator facing text for a fetched record.

use crate::{geo::GeoPosition, record::TelemetryRecord};

const NOT_ACQUIRED: &str = "Unknown, data not acquired properly";

pub fn gps_section(record: &TelemetryRecord, fix: Option<&GeoPosition>) -> String {
    match fix {
        Some(position) => format!(
            "GPS Data:\n\
             GPS Timestamp: {}\n\
             GPS Altitude: {}\n\
             GPS Latitude: {:.6}\n\
             GPS Longitude: {:.6}",
            record.timestamp, record.altitude, position.latitude, position.longitude
        ),
        None => "GPS Data: Unknown location, no fix".to_string(),
    }
}

pub fn pressure_section(record: &TelemetryRecord) -> String {
    if record.pressure.is_unknown() {
        return format!("Pressure Sensor Data: \n{}", NOT_ACQUIRED);
    }

    format!(
        "Pressure Sensor Data: \nPressure: {}\nTemperature: {}",
        record.pressure, record.pressure_temp
    )
}

pub fn humidity_section(record: &TelemetryRecord) -> String {
    if record.humidity.is_unknown() {
        return format!("Humidity Sensor Data: \n{}", NOT_ACQUIRED);
    }

    format!(
        "Humidity Sensor Data: \nHumidity: {}\nTemperature: {}",
        record.humidity, record.humidity_temp
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::compute_fix;

    #[test]
    fn test_gps_section_with_fix() {
        let record =
            TelemetryRecord::parse("X,1013,45,22,23,1500,12:00:00,36000000,X,-118800000").unwrap();
        let fix = compute_fix(&record).unwrap();

        assert_eq!(
            gps_section(&record, fix.as_ref()),
            "GPS Data:\nGPS Timestamp: 12:00:00\nGPS Altitude: 1500\n\
             GPS Latitude: 10.000000\nGPS Longitude: 33.000000"
        );
    }

    #[test]
    fn test_gps_section_without_fix() {
        let record = TelemetryRecord::parse("X,1013,45,22,23,1500,12:00:00,?,X,1").unwrap();

        assert_eq!(
            gps_section(&record, None),
            "GPS Data: Unknown location, no fix"
        );
    }

    #[test]
    fn test_sensor_sections() {
        let record = TelemetryRecord::parse("X,1013,?,22,23,1500,12:00:00,?,X,?").unwrap();

        assert_eq!(
            pressure_section(&record),
            "Pressure Sensor Data: \nPressure: 1013\nTemperature: 23"
        );
        assert_eq!(
            humidity_section(&record),
            "Humidity Sensor Data: \nUnknown, data not acquired properly"
        );
    }
}
