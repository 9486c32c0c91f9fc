pub const DEFAULT_QUALITY: u8 = 80;
pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 100;

/// Input extensions the converter accepts, in the order they are reported.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpeg", "jpg", "gif"];
pub const WEBP_EXTENSION: &str = "webp";

pub const LIST_PATH_COLUMN_MIN: usize = 20;
pub const LIST_PATH_COLUMN_MAX: usize = 60;
pub const LIST_SIZE_COLUMN: usize = 12;
pub const LIST_DIMENSION_COLUMN: usize = 8;

pub const PROGRESS_BAR_TEMPLATE: &str =
    "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {wide_msg}";
pub const PROGRESS_BAR_CHARS: &str = "=>-";

// Common output message prefixes
pub const SUCCESS_PREFIX: &str = "✅";
pub const SKIPPED_PREFIX: &str = "⏭️ ";
pub const ERROR_PREFIX: &str = "❌";
pub const PROGRESS_PREFIX: &str = "🔄";
pub const SUMMARY_PREFIX: &str = "📊";
pub const LIST_PREFIX: &str = "📋";
