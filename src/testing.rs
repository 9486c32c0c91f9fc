//! In-memory doubles for the storage and codec traits.

use crate::codec::{Codec, EncodeOptions, ImageMetadata};
use crate::error::{Result, WebpifyError};
use crate::storage::Storage;
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Default)]
pub struct MemoryStorage {
    files: RefCell<BTreeMap<PathBuf, u64>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
    created_dirs: RefCell<Vec<PathBuf>>,
    failing_dirs: RefCell<HashMap<PathBuf, String>>,
    failing_stats: RefCell<HashMap<PathBuf, String>>,
    calls: Cell<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&self, path: impl Into<PathBuf>, size: u64) {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.files.borrow_mut().insert(path, size);
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.as_ref().ancestors() {
            if !ancestor.as_os_str().is_empty() {
                dirs.insert(ancestor.to_path_buf());
            }
        }
    }

    /// Makes `create_dir_all(dir)` fail with an I/O error carrying `message`.
    pub fn fail_create_dir(&self, dir: impl Into<PathBuf>, message: &str) {
        self.failing_dirs
            .borrow_mut()
            .insert(dir.into(), message.to_string());
    }

    /// Makes `file_size(path)` fail with an I/O error carrying `message`.
    pub fn fail_file_size(&self, path: impl Into<PathBuf>, message: &str) {
        self.failing_stats
            .borrow_mut()
            .insert(path.into(), message.to_string());
    }

    /// Directories passed to `create_dir_all`, in call order.
    pub fn created_dirs(&self) -> Vec<PathBuf> {
        self.created_dirs.borrow().clone()
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    fn touch(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

impl Storage for MemoryStorage {
    fn exists(&self, path: &Path) -> bool {
        self.touch();
        self.files.borrow().contains_key(path) || self.dirs.borrow().contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.touch();
        self.dirs.borrow().contains(path)
    }

    fn list_entries(&self, dir: &Path) -> Result<Vec<OsString>> {
        self.touch();
        if !self.dirs.borrow().contains(dir) {
            return Err(WebpifyError::DirectoryNotFound(dir.to_path_buf()));
        }

        let files = self.files.borrow();
        let dirs = self.dirs.borrow();
        let names: BTreeSet<OsString> = files
            .keys()
            .chain(dirs.iter())
            .filter(|path| path.parent() == Some(dir))
            .filter_map(|path| path.file_name().map(|name| name.to_os_string()))
            .collect();
        Ok(names.into_iter().collect())
    }

    fn list_entries_recursive(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        self.touch();
        if !self.dirs.borrow().contains(dir) {
            return Err(WebpifyError::DirectoryNotFound(dir.to_path_buf()));
        }

        Ok(self
            .files
            .borrow()
            .keys()
            .filter(|path| path.starts_with(dir))
            .cloned()
            .collect())
    }

    fn create_dir_all(&self, dir: &Path) -> Result<()> {
        self.touch();
        self.created_dirs.borrow_mut().push(dir.to_path_buf());
        if let Some(message) = self.failing_dirs.borrow().get(dir) {
            return Err(io::Error::other(message.clone()).into());
        }
        self.add_dir(dir);
        Ok(())
    }

    fn file_size(&self, path: &Path) -> Result<u64> {
        self.touch();
        if let Some(message) = self.failing_stats.borrow().get(path) {
            return Err(io::Error::other(message.clone()).into());
        }
        self.files
            .borrow()
            .get(path)
            .copied()
            .ok_or_else(|| WebpifyError::FileNotFound(path.to_path_buf()))
    }
}

/// Records every encode request and answers with a fixed output size, unless
/// the input was registered as failing.
pub struct StubCodec {
    output_size: u64,
    failures: RefCell<HashMap<PathBuf, String>>,
    metadata: RefCell<HashMap<PathBuf, ImageMetadata>>,
    encodes: RefCell<Vec<(PathBuf, PathBuf, EncodeOptions)>>,
    calls: Cell<usize>,
}

impl StubCodec {
    pub fn new(output_size: u64) -> Self {
        Self {
            output_size,
            failures: RefCell::new(HashMap::new()),
            metadata: RefCell::new(HashMap::new()),
            encodes: RefCell::new(Vec::new()),
            calls: Cell::new(0),
        }
    }

    pub fn fail_on(&self, input: impl Into<PathBuf>, message: &str) {
        self.failures
            .borrow_mut()
            .insert(input.into(), message.to_string());
    }

    pub fn set_metadata(&self, path: impl Into<PathBuf>, width: u32, height: u32, format: &str) {
        self.metadata.borrow_mut().insert(
            path.into(),
            ImageMetadata {
                width,
                height,
                format: format.to_string(),
            },
        );
    }

    pub fn encodes(&self) -> Vec<(PathBuf, PathBuf, EncodeOptions)> {
        self.encodes.borrow().clone()
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Codec for StubCodec {
    fn encode_to_webp(&self, input: &Path, output: &Path, options: &EncodeOptions) -> Result<u64> {
        self.calls.set(self.calls.get() + 1);
        self.encodes
            .borrow_mut()
            .push((input.to_path_buf(), output.to_path_buf(), *options));

        if let Some(message) = self.failures.borrow().get(input) {
            return Err(WebpifyError::Encode(message.clone()));
        }
        Ok(self.output_size)
    }

    fn read_metadata(&self, path: &Path) -> Result<ImageMetadata> {
        self.calls.set(self.calls.get() + 1);
        self.metadata
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| WebpifyError::Metadata(path.to_path_buf()))
    }
}
