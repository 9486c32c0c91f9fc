pub mod cli;
pub mod codec;
pub mod constants;
pub mod converter;
pub mod error;
pub mod formats;
pub mod inspector;
pub mod logger;
pub mod report;
pub mod scanner;
pub mod storage;

#[cfg(test)]
mod testing;

pub use codec::{Codec, EncodeOptions, ImageCodec, ImageMetadata};
pub use converter::{
    resolve_output_path, ConversionResult, ConversionStats, ConversionStatus, ConvertOptions,
    Converter,
};
pub use error::{ConversionError, Result, WebpifyError};
pub use formats::is_supported_format;
pub use inspector::{ImageInfo, ImageInspector};
pub use scanner::{DirectoryScanner, ScanOptions};
pub use storage::{FsStorage, Storage};
