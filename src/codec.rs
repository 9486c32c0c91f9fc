use crate::error::{Result, WebpifyError};
use image::{DynamicImage, ImageReader};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// 1-100, ignored when `lossless` is set.
    pub quality: u8,
    pub lossless: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMetadata {
    pub width: u32,
    pub height: u32,
    /// Lower-case format name, e.g. `webp` or `png`.
    pub format: String,
}

/// Image decode/encode behind a trait so the converter never touches pixels.
pub trait Codec {
    /// Encodes `input` as WebP into `output` and returns the written size in
    /// bytes.
    fn encode_to_webp(&self, input: &Path, output: &Path, options: &EncodeOptions) -> Result<u64>;

    fn read_metadata(&self, path: &Path) -> Result<ImageMetadata>;
}

/// [`Codec`] using the `image` crate for decoding and libwebp for encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCodec;

impl ImageCodec {
    pub fn new() -> Self {
        Self
    }
}

/// libwebp only accepts 8-bit RGB or RGBA buffers.
fn to_webp_layout(img: DynamicImage) -> DynamicImage {
    match img {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => img,
        other if other.color().has_alpha() => DynamicImage::ImageRgba8(other.to_rgba8()),
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    }
}

impl Codec for ImageCodec {
    fn encode_to_webp(&self, input: &Path, output: &Path, options: &EncodeOptions) -> Result<u64> {
        let img = ImageReader::open(input)?.with_guessed_format()?.decode()?;
        let img = to_webp_layout(img);

        let encoder = webp::Encoder::from_image(&img)
            .map_err(|e| WebpifyError::Encode(e.to_string()))?;
        let memory = encoder
            .encode_simple(options.lossless, f32::from(options.quality))
            .map_err(|e| WebpifyError::Encode(format!("{:?}", e)))?;

        fs::write(output, &*memory)?;
        Ok(fs::metadata(output)?.len())
    }

    fn read_metadata(&self, path: &Path) -> Result<ImageMetadata> {
        let reader = ImageReader::open(path)?.with_guessed_format()?;
        let format = reader
            .format()
            .ok_or_else(|| WebpifyError::Metadata(path.to_path_buf()))?;
        let (width, height) = reader.into_dimensions()?;

        if width == 0 || height == 0 {
            return Err(WebpifyError::Metadata(path.to_path_buf()));
        }

        Ok(ImageMetadata {
            width,
            height,
            format: format!("{:?}", format).to_lowercase(),
        })
    }
}
