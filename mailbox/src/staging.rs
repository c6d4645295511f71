use std::{
    fs, io,
    path::{Path, PathBuf},
};

const ATTACHMENT_FILE: &str = "rb_newest";
const MAP_FILE: &str = "rb_map.html";

/// Local directory holding the latest downlinked attachment and map.
///
/// Each store replaces the previous file; nothing is kept across fetches.
#[derive(Debug, Clone)]
pub struct Staging {
    dir: PathBuf,
}

impl Staging {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn attachment_path(&self) -> PathBuf {
        self.dir.join(ATTACHMENT_FILE)
    }

    pub fn map_path(&self) -> PathBuf {
        self.dir.join(MAP_FILE)
    }

    /// Replaces the staged attachment with `data`.
    pub fn store_attachment(&self, data: &[u8]) -> io::Result<PathBuf> {
        let path = self.attachment_path();
        replace(&path, data)?;

        log::debug!("Staged {} bytes at {}", data.len(), path.display());
        Ok(path)
    }

    pub fn read_attachment(&self) -> io::Result<Vec<u8>> {
        fs::read(self.attachment_path())
    }
}

fn replace(path: &Path, data: &[u8]) -> io::Result<()> {
    match fs::remove_file(path) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }

    fs::write(path, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_overwrites_previous_attachment() {
        let dir = tempfile::tempdir().unwrap();
        let staging = Staging::new(dir.path());

        staging.store_attachment(b"a much longer first attachment").unwrap();
        let path = staging.store_attachment(b"short").unwrap();

        assert_eq!(path, dir.path().join("rb_newest"));
        assert_eq!(staging.read_attachment().unwrap(), b"short");
    }

    #[test]
    fn test_read_before_store_fails() {
        let dir = tempfile::tempdir().unwrap();
        let staging = Staging::new(dir.path());

        let err = staging.read_attachment().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_map_path_sits_next_to_attachment() {
        let staging = Staging::new("/var/lib/balloon");

        assert_eq!(staging.map_path(), Path::new("/var/lib/balloon/rb_map.html"));
    }
}
