//! Filesystem access behind a trait so the scanner and converter can run
//! against an in-memory double in tests.

use crate::error::{Result, WebpifyError};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub trait Storage {
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// Names of the immediate entries of `dir`.
    ///
    /// Fails with [`WebpifyError::DirectoryNotFound`] when `dir` is missing or
    /// is not a directory.
    fn list_entries(&self, dir: &Path) -> Result<Vec<OsString>>;

    /// Full paths of every file below `dir`, at any depth.
    fn list_entries_recursive(&self, dir: &Path) -> Result<Vec<PathBuf>>;

    /// Creates `dir` and any missing parents. An existing directory is not an
    /// error.
    fn create_dir_all(&self, dir: &Path) -> Result<()>;

    fn file_size(&self, path: &Path) -> Result<u64>;
}

/// [`Storage`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStorage;

impl FsStorage {
    pub fn new() -> Self {
        Self
    }

    fn ensure_dir(dir: &Path) -> Result<()> {
        if !dir.is_dir() {
            return Err(WebpifyError::DirectoryNotFound(dir.to_path_buf()));
        }
        Ok(())
    }
}

impl Storage for FsStorage {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_entries(&self, dir: &Path) -> Result<Vec<OsString>> {
        Self::ensure_dir(dir)?;

        let mut names = fs::read_dir(dir)?
            .map(|entry| entry.map(|e| e.file_name()))
            .collect::<std::io::Result<Vec<_>>>()?;
        names.sort();
        Ok(names)
    }

    fn list_entries_recursive(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        Self::ensure_dir(dir)?;

        let mut files = Vec::new();
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_dir() {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    fn create_dir_all(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)?;
        Ok(())
    }

    fn file_size(&self, path: &Path) -> Result<u64> {
        if !path.exists() {
            return Err(WebpifyError::FileNotFound(path.to_path_buf()));
        }
        Ok(fs::metadata(path)?.len())
    }
}
