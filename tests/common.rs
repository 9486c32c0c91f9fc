#![allow(dead_code)]

use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::cell::Cell;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use webpify::{Codec, EncodeOptions, ImageMetadata, Result, WebpifyError};

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}

fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 5 % 256) as u8, (y * 9 % 256) as u8, ((x * y) % 256) as u8])
    })
}

/// Writes a small real image in the format implied by the extension of `path`.
pub fn create_test_image(path: &Path, width: u32, height: u32) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }

    let format = ImageFormat::from_path(path).unwrap();
    match format {
        ImageFormat::Gif => {
            let img = RgbaImage::from_fn(width, height, |x, _| Rgba([(x % 256) as u8, 0, 0, 255]));
            img.save_with_format(path, format).unwrap();
        }
        _ => gradient(width, height).save_with_format(path, format).unwrap(),
    }
    path.to_path_buf()
}

/// Creates a file with an image extension but garbage contents.
pub fn create_fake_image(path: &Path) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    File::create(path)
        .unwrap()
        .write_all(b"fake image data")
        .unwrap();
    path.to_path_buf()
}

/// Mixed directory: three convertible images, an existing WebP, a text file
/// and a nested directory with one more PNG.
pub fn create_mixed_directory(root: &Path) -> Vec<PathBuf> {
    vec![
        create_test_image(&root.join("a.png"), 32, 32),
        create_test_image(&root.join("b.jpg"), 32, 24),
        create_test_image(&root.join("c.gif"), 16, 16),
        create_test_image(&root.join("existing.webp"), 8, 8),
        create_fake_image(&root.join("notes.txt")),
        create_test_image(&root.join("nested").join("d.png"), 20, 20),
    ]
}

/// Codec that writes a fixed number of bytes instead of encoding.
pub struct FixedSizeCodec {
    pub output_size: u64,
    pub calls: Cell<usize>,
}

impl FixedSizeCodec {
    pub fn new(output_size: u64) -> Self {
        Self {
            output_size,
            calls: Cell::new(0),
        }
    }
}

impl Codec for FixedSizeCodec {
    fn encode_to_webp(&self, input: &Path, output: &Path, _options: &EncodeOptions) -> Result<u64> {
        self.calls.set(self.calls.get() + 1);
        if fs::read(input)? == b"fake image data" {
            return Err(WebpifyError::Encode("not an image".to_string()));
        }
        fs::write(output, vec![0u8; self.output_size as usize])?;
        Ok(self.output_size)
    }

    fn read_metadata(&self, path: &Path) -> Result<ImageMetadata> {
        Err(WebpifyError::Metadata(path.to_path_buf()))
    }
}
