//! Human-readable rendering of conversion results, batch summaries and the
//! WebP listing. Everything here returns strings; printing is left to the
//! caller so quiet mode stays in one place.

use crate::constants::{
    LIST_DIMENSION_COLUMN, LIST_PATH_COLUMN_MAX, LIST_PATH_COLUMN_MIN, LIST_SIZE_COLUMN,
};
use crate::converter::{ConversionResult, ConversionStats, ConversionStatus};
use crate::inspector::ImageInfo;
use std::path::Path;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Formats a byte count as `B`, `KB` or `MB`.
///
/// # Example
/// ```
/// use webpify::report::format_size;
///
/// assert_eq!(format_size(512), "512 B");
/// assert_eq!(format_size(10 * 1024), "10.00 KB");
/// ```
pub fn format_size(bytes: u64) -> String {
    if bytes < KIB {
        format!("{} B", bytes)
    } else if bytes < MIB {
        format!("{:.2} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.2} MB", bytes as f64 / MIB as f64)
    }
}

/// Size reduction as a percentage. Growth is shown with a leading `+`.
pub fn format_reduction(input_size: u64, output_size: u64) -> String {
    if input_size == 0 {
        return "0.0%".to_string();
    }

    let reduction = (input_size as f64 - output_size as f64) / input_size as f64 * 100.0;
    if reduction < 0.0 {
        format!("+{:.1}%", reduction.abs())
    } else {
        format!("{:.1}%", reduction)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn conversion_line(result: &ConversionResult) -> String {
    let name = file_name(&result.input_path);

    match &result.status {
        ConversionStatus::Failed(err) => format!("Error: {} - {}", name, err),
        ConversionStatus::Skipped => format!("Skipped: {} (file already exists)", name),
        ConversionStatus::Converted => format!(
            "Converted: {} ({} -> {}, {})",
            name,
            format_size(result.input_size),
            format_size(result.output_size),
            format_reduction(result.input_size, result.output_size)
        ),
    }
}

pub fn progress_line(current: usize, total: usize, path: &Path) -> String {
    format!("[{}/{}] Processing: {}", current, total, path.display())
}

pub fn summary_lines(stats: &ConversionStats) -> Vec<String> {
    let mut lines = vec![
        "--- Conversion Summary ---".to_string(),
        format!("Total files: {}", stats.total_files),
        format!("Converted: {}", stats.success_count),
        format!("Skipped: {}", stats.skipped_count),
        format!("Errors: {}", stats.error_count),
    ];

    if stats.success_count > 0 && stats.total_input_size > 0 {
        lines.push(format!(
            "Total size: {} -> {} ({})",
            format_size(stats.total_input_size),
            format_size(stats.total_output_size),
            format_reduction(stats.total_input_size, stats.total_output_size)
        ));
    }

    lines
}

/// `path` relative to `base`, or as-is when no base is given. A path equal to
/// its base collapses to the file name.
pub fn display_path(path: &Path, base: Option<&Path>) -> String {
    let Some(base) = base else {
        return path.display().to_string();
    };

    match pathdiff::diff_paths(path, base) {
        Some(relative) if relative.as_os_str().is_empty() => file_name(path),
        Some(relative) => relative.display().to_string(),
        None => path.display().to_string(),
    }
}

fn truncate_front(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width.saturating_sub(2) {
        return text.to_string();
    }

    let keep = width.saturating_sub(5);
    let tail: String = text.chars().skip(len - keep).collect();
    format!("...{}", tail)
}

pub fn image_list_lines(items: &[ImageInfo], base: Option<&Path>) -> Vec<String> {
    if items.is_empty() {
        return vec!["No WebP files found".to_string()];
    }

    let paths: Vec<String> = items
        .iter()
        .map(|item| display_path(&item.path, base))
        .collect();
    let longest = paths.iter().map(|p| p.chars().count()).max().unwrap_or(0);
    let width = (longest + 2).clamp(LIST_PATH_COLUMN_MIN, LIST_PATH_COLUMN_MAX);

    let mut lines = vec![
        "--- WebP File List ---".to_string(),
        format!(
            "{:<width$} {:<size$} {:<dim$} {}",
            "File",
            "Size",
            "Width",
            "Height",
            width = width,
            size = LIST_SIZE_COLUMN,
            dim = LIST_DIMENSION_COLUMN
        ),
        "-".repeat(width + 30),
    ];

    for (item, path) in items.iter().zip(&paths) {
        lines.push(format!(
            "{:<width$} {:<size$} {:<dim$} {}",
            truncate_front(path, width),
            format_size(item.size),
            item.width,
            item.height,
            width = width,
            size = LIST_SIZE_COLUMN,
            dim = LIST_DIMENSION_COLUMN
        ));
    }

    lines
}
