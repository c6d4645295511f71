pub mod google;
pub mod viewer;

pub use google::GoogleMapPlotter;
pub use viewer::{BrowserViewer, NoViewer, Viewer};

use std::path::{Path, PathBuf};
use telemetry::GeoPosition;
use thiserror::Error;

/// Zoom level every map is drawn at.
pub const ZOOM: u8 = 15;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("could not write map to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Produces a viewable map marking a single position.
pub trait MapRenderer {
    /// Draws `position` into `path` and returns where the artifact ended up.
    fn render(&self, position: &GeoPosition, path: &Path) -> Result<PathBuf, MapError>;
}
