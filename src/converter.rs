use crate::codec::{Codec, EncodeOptions};
use crate::constants::{
    DEFAULT_QUALITY, MAX_QUALITY, MIN_QUALITY, SUPPORTED_EXTENSIONS, WEBP_EXTENSION,
};
use crate::error::{ConversionError, Result, WebpifyError};
use crate::formats::{extension_of, is_supported_format};
use crate::storage::Storage;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Directory for the `.webp` files. Defaults to each input's own directory.
    pub output_dir: Option<PathBuf>,
    pub quality: u8,
    pub force: bool,
    pub lossless: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            output_dir: None,
            quality: DEFAULT_QUALITY,
            force: false,
            lossless: false,
        }
    }
}

impl ConvertOptions {
    pub fn new(
        output_dir: Option<PathBuf>,
        quality: Option<u8>,
        force: bool,
        lossless: bool,
    ) -> Result<Self> {
        let quality = quality.unwrap_or(DEFAULT_QUALITY);
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
            return Err(WebpifyError::InvalidQuality(quality));
        }

        Ok(Self {
            output_dir,
            quality,
            force,
            lossless,
        })
    }

    fn encode_options(&self) -> EncodeOptions {
        EncodeOptions {
            quality: self.quality,
            lossless: self.lossless,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionStatus {
    Converted,
    /// The output already existed and `force` was not set.
    Skipped,
    Failed(ConversionError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub input_size: u64,
    pub output_size: u64,
    pub status: ConversionStatus,
}

impl ConversionResult {
    fn failed(
        input_path: &Path,
        output_path: PathBuf,
        error: ConversionError,
        input_size: u64,
    ) -> Self {
        Self {
            input_path: input_path.to_path_buf(),
            output_path,
            input_size,
            output_size: 0,
            status: ConversionStatus::Failed(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ConversionStatus::Converted
    }

    pub fn is_skipped(&self) -> bool {
        self.status == ConversionStatus::Skipped
    }

    pub fn error(&self) -> Option<&ConversionError> {
        match &self.status {
            ConversionStatus::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Totals for one batch. `total_files` always equals the sum of the three
/// counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    pub total_files: usize,
    pub success_count: usize,
    pub skipped_count: usize,
    pub error_count: usize,
    pub total_input_size: u64,
    pub total_output_size: u64,
}

impl ConversionStats {
    fn record(&mut self, result: &ConversionResult) {
        self.total_input_size += result.input_size;
        self.total_output_size += result.output_size;

        match result.status {
            ConversionStatus::Converted => self.success_count += 1,
            ConversionStatus::Skipped => self.skipped_count += 1,
            ConversionStatus::Failed(_) => self.error_count += 1,
        }
    }
}

/// Derives where the WebP for `input` goes: the file stem plus `.webp`, inside
/// `output_dir` when given or next to the input otherwise.
///
/// Only the last extension is replaced, so `photo.backup.png` becomes
/// `photo.backup.webp`.
pub fn resolve_output_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let mut file_name = input.file_stem().unwrap_or_default().to_os_string();
    file_name.push(".");
    file_name.push(WEBP_EXTENSION);

    match output_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}

/// Converts images to WebP through a [`Storage`] and a [`Codec`].
pub struct Converter<'a, S: Storage, C: Codec> {
    storage: &'a S,
    codec: &'a C,
}

impl<'a, S: Storage, C: Codec> Converter<'a, S, C> {
    pub fn new(storage: &'a S, codec: &'a C) -> Self {
        Self { storage, codec }
    }

    pub fn is_supported_format(&self, path: &Path) -> bool {
        is_supported_format(path)
    }

    /// Converts a single image.
    ///
    /// Never fails: a missing input, an unsupported extension or a codec error
    /// all come back as [`ConversionStatus::Failed`].
    pub fn convert(&self, input: &Path, options: &ConvertOptions) -> ConversionResult {
        let output_path = resolve_output_path(input, options.output_dir.as_deref());

        if !self.storage.exists(input) {
            return ConversionResult::failed(
                input,
                output_path,
                ConversionError::NotFound(input.to_path_buf()),
                0,
            );
        }

        if !is_supported_format(input) {
            return ConversionResult::failed(
                input,
                output_path,
                ConversionError::UnsupportedFormat(extension_of(input)),
                0,
            );
        }

        if self.storage.exists(&output_path) && !options.force {
            return match self.storage.file_size(input) {
                Ok(input_size) => ConversionResult {
                    input_path: input.to_path_buf(),
                    output_path,
                    input_size,
                    output_size: 0,
                    status: ConversionStatus::Skipped,
                },
                Err(e) => ConversionResult::failed(
                    input,
                    output_path,
                    ConversionError::Storage(e.detail()),
                    0,
                ),
            };
        }

        if let Err(e) = self.ensure_parent_dir(&output_path) {
            return ConversionResult::failed(
                input,
                output_path,
                ConversionError::Storage(e.detail()),
                0,
            );
        }

        let input_size = match self.storage.file_size(input) {
            Ok(size) => size,
            Err(e) => {
                return ConversionResult::failed(
                    input,
                    output_path,
                    ConversionError::Storage(e.detail()),
                    0,
                )
            }
        };

        match self
            .codec
            .encode_to_webp(input, &output_path, &options.encode_options())
        {
            Ok(output_size) => ConversionResult {
                input_path: input.to_path_buf(),
                output_path,
                input_size,
                output_size,
                status: ConversionStatus::Converted,
            },
            Err(e) => ConversionResult::failed(
                input,
                output_path,
                ConversionError::Processing(e.detail()),
                input_size,
            ),
        }
    }

    pub fn convert_batch<P: AsRef<Path>>(
        &self,
        inputs: &[P],
        options: &ConvertOptions,
    ) -> ConversionStats {
        self.convert_batch_with_progress(inputs, options, |_, _, _| {})
    }

    /// Converts `inputs` one after another, in order.
    ///
    /// `on_progress` receives each result with its index and the batch size,
    /// after the stats have been updated for that item.
    pub fn convert_batch_with_progress<P, F>(
        &self,
        inputs: &[P],
        options: &ConvertOptions,
        mut on_progress: F,
    ) -> ConversionStats
    where
        P: AsRef<Path>,
        F: FnMut(&ConversionResult, usize, usize),
    {
        let total = inputs.len();
        let mut stats = ConversionStats {
            total_files: total,
            ..ConversionStats::default()
        };

        for (index, input) in inputs.iter().enumerate() {
            let result = self.convert(input.as_ref(), options);
            stats.record(&result);
            on_progress(&result, index, total);
        }

        stats
    }

    fn ensure_parent_dir(&self, output_path: &Path) -> Result<()> {
        match output_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() && !self.storage.exists(dir) => {
                self.storage.create_dir_all(dir)
            }
            _ => Ok(()),
        }
    }
}

/// Comma-separated list used in help text and messages.
pub fn supported_formats_list() -> String {
    SUPPORTED_EXTENSIONS.join(", ")
}
