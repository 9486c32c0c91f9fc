use crate::codec::Codec;
use crate::error::Result;
use crate::storage::Storage;
use std::path::{Path, PathBuf};

/// One row of the `--list` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub size: u64,
    pub width: u32,
    pub height: u32,
    pub format: String,
}

/// Reads file size and image dimensions for existing images.
pub struct ImageInspector<'a, S: Storage, C: Codec> {
    storage: &'a S,
    codec: &'a C,
}

impl<'a, S: Storage, C: Codec> ImageInspector<'a, S, C> {
    pub fn new(storage: &'a S, codec: &'a C) -> Self {
        Self { storage, codec }
    }

    pub fn get_info(&self, path: &Path) -> Result<ImageInfo> {
        let size = self.storage.file_size(path)?;
        let metadata = self.codec.read_metadata(path)?;

        Ok(ImageInfo {
            path: path.to_path_buf(),
            size,
            width: metadata.width,
            height: metadata.height,
            format: metadata.format,
        })
    }

    /// Inspects `paths` in order, stopping at the first unreadable image.
    pub fn get_info_batch<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Vec<ImageInfo>> {
        paths.iter().map(|path| self.get_info(path.as_ref())).collect()
    }
}
