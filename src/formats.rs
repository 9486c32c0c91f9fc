//! Extension handling shared by the scanner and the converter.

use crate::constants::SUPPORTED_EXTENSIONS;
use std::path::Path;

/// Returns the last extension of `path`, lower-cased, or an empty string when
/// the file name has none.
///
/// Only the final dot-segment counts: `photo.backup.PNG` yields `png`, and a
/// dot file such as `.bashrc` has no extension.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Case-insensitive membership test of the last extension of `path` against
/// `extensions`. Files without an extension never match.
pub fn matches_extension<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    let ext = extension_of(path);
    if ext.is_empty() {
        return false;
    }
    extensions
        .iter()
        .any(|candidate| candidate.as_ref().to_lowercase() == ext)
}

/// Whether `path` names an image the converter can turn into WebP.
///
/// `webp` itself is not a convertible input.
///
/// # Example
/// ```
/// use std::path::Path;
/// use webpify::is_supported_format;
///
/// assert!(is_supported_format(Path::new("holiday.JPG")));
/// assert!(!is_supported_format(Path::new("already.webp")));
/// ```
pub fn is_supported_format(path: &Path) -> bool {
    matches_extension(path, SUPPORTED_EXTENSIONS)
}
