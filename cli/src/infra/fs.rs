//! Filesystem infrastructure: implements `FileProbe`.

use std::path::Path;

use crate::application::ports::FileProbe;
use crate::domain::PathKind;

/// Production filesystem implementation of `FileProbe`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl FileProbe for LocalFs {
    fn kind(&self, path: &Path) -> std::io::Result<PathKind> {
        let meta = std::fs::metadata(path)?;
        Ok(if meta.is_file() {
            PathKind::File
        } else if meta.is_dir() {
            PathKind::Directory
        } else {
            PathKind::Other
        })
    }
}
