use crate::MapError;
use std::path::Path;

/// Shows a rendered map to the operator.
pub trait Viewer {
    fn open(&self, path: &Path) -> Result<(), MapError>;
}

/// Opens maps in the system's default browser.
pub struct BrowserViewer;

impl Viewer for BrowserViewer {
    fn open(&self, path: &Path) -> Result<(), MapError> {
        let target = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        webbrowser::open(&target.to_string_lossy()).map_err(|source| MapError::Open {
            path: target,
            source,
        })
    }
}

/// Leaves the map on disk without opening it.
pub struct NoViewer;

impl Viewer for NoViewer {
    fn open(&self, path: &Path) -> Result<(), MapError> {
        log::debug!("Not opening {}", path.display());
        Ok(())
    }
}
