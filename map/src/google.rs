use crate::{MapError, MapRenderer, ZOOM};
use std::{
    fs,
    path::{Path, PathBuf},
};
use telemetry::GeoPosition;

/// Writes a standalone Google Maps page with one filled circle on it.
pub struct GoogleMapPlotter {
    api_key: String,
    /// Marker colour, as a CSS hex string.
    pub color: String,
    /// Marker radius, in meters.
    pub size: u32,
}

impl GoogleMapPlotter {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            color: "#FF0000".to_string(),
            size: 100,
        }
    }

    pub fn page(&self, position: &GeoPosition) -> String {
        format!(
            r#"<html>
<head>
<meta name="viewport" content="initial-scale=1.0, user-scalable=no" />
<meta http-equiv="content-type" content="text/html; charset=UTF-8" />
<title>Payload position</title>
<script type="text/javascript" src="https://maps.googleapis.com/maps/api/js?key={key}"></script>
<script type="text/javascript">
function initialize() {{
    var centerlatlng = new google.maps.LatLng({lat:.6}, {lng:.6});
    var map = new google.maps.Map(document.getElementById("map_canvas"), {{
        zoom: {zoom},
        center: centerlatlng,
        mapTypeId: google.maps.MapTypeId.ROADMAP
    }});
    new google.maps.Circle({{
        clickable: false,
        geodesic: true,
        fillColor: "{color}",
        fillOpacity: 0.3,
        strokeColor: "{color}",
        strokeOpacity: 1.0,
        strokeWeight: 1,
        map: map,
        center: new google.maps.LatLng({lat:.6}, {lng:.6}),
        radius: {size}
    }});
}}
</script>
</head>
<body style="margin:0px; padding:0px;" onload="initialize()">
<div id="map_canvas" style="width: 100%; height: 100%;"></div>
</body>
</html>
"#,
            key = self.api_key,
            lat = position.latitude,
            lng = position.longitude,
            zoom = ZOOM,
            color = self.color,
            size = self.size,
        )
    }
}

impl MapRenderer for GoogleMapPlotter {
    fn render(&self, position: &GeoPosition, path: &Path) -> Result<PathBuf, MapError> {
        fs::write(path, self.page(position)).map_err(|source| MapError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        log::info!(
            "Map of ({:.6}, {:.6}) written to {}",
            position.latitude,
            position.longitude,
            path.display()
        );

        Ok(path.to_path_buf())
    }
}
