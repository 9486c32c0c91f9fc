use crate::error::Result;
use crate::formats::matches_extension;
use crate::storage::Storage;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Matched case-insensitively against the last extension of each file.
    pub extensions: Vec<String>,
    pub recursive: bool,
}

impl ScanOptions {
    pub fn new<S: AsRef<str>>(extensions: &[S], recursive: bool) -> Self {
        Self {
            extensions: extensions
                .iter()
                .map(|ext| ext.as_ref().to_lowercase())
                .collect(),
            recursive,
        }
    }
}

/// Enumerates files under a root directory that match an extension allow-list.
pub struct DirectoryScanner<'a, S: Storage> {
    storage: &'a S,
}

impl<'a, S: Storage> DirectoryScanner<'a, S> {
    pub fn new(storage: &'a S) -> Self {
        Self { storage }
    }

    /// Returns the paths under `root` whose extension is in `options.extensions`.
    ///
    /// Non-recursive scans join each matching entry name onto `root`; recursive
    /// scans return the storage's full paths as-is.
    ///
    /// # Errors
    /// Propagates the storage failure when `root` is missing or is not a
    /// directory.
    pub fn scan(&self, root: &Path, options: &ScanOptions) -> Result<Vec<PathBuf>> {
        if options.recursive {
            let files = self.storage.list_entries_recursive(root)?;
            return Ok(files
                .into_iter()
                .filter(|path| matches_extension(path, &options.extensions))
                .collect());
        }

        let names = self.storage.list_entries(root)?;
        Ok(names
            .into_iter()
            .filter(|name| matches_extension(Path::new(name), &options.extensions))
            .map(|name| root.join(name))
            .collect())
    }

    pub fn is_dir(&self, path: &Path) -> bool {
        self.storage.is_dir(path)
    }

    pub fn exists(&self, path: &Path) -> bool {
        self.storage.exists(path)
    }
}
