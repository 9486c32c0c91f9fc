use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::process::ExitCode;
use webpify::cli::Args;
use webpify::constants::{
    LIST_PREFIX, PROGRESS_BAR_CHARS, PROGRESS_BAR_TEMPLATE, PROGRESS_PREFIX, SKIPPED_PREFIX,
    SUCCESS_PREFIX, SUMMARY_PREFIX, SUPPORTED_EXTENSIONS, WEBP_EXTENSION,
};
use webpify::converter::supported_formats_list;
use webpify::report::{conversion_line, image_list_lines, progress_line, summary_lines};
use webpify::{error, info, logger, verbose, warn};
use webpify::{
    ConversionResult, ConversionStatus, ConvertOptions, Converter, DirectoryScanner, FsStorage,
    ImageCodec, ImageInspector, ScanOptions,
};

fn main() -> ExitCode {
    let args = Args::parse();
    logger::set_quiet_mode(args.quiet);
    logger::set_verbose_mode(args.verbose);

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            error!("Fatal error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let Some(input) = args.input.clone() else {
        Args::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    let storage = FsStorage::new();
    let codec = ImageCodec::new();
    let scanner = DirectoryScanner::new(&storage);

    if !scanner.exists(&input) {
        error!("File not found: {}", input.display());
        return Ok(ExitCode::FAILURE);
    }

    if args.lossless && args.quality.is_some() {
        warn!("--lossless and --quality were both given; quality is ignored in lossless mode");
    }

    if args.list {
        return list_webp_files(&args, &input, &storage, &codec);
    }

    let options =
        ConvertOptions::new(args.output.clone(), args.quality, args.force, args.lossless)?;
    verbose!("Options: {:?}", options);
    let converter = Converter::new(&storage, &codec);

    if scanner.is_dir(&input) {
        verbose!("Directory mode: {}", input.display());
        let scan_options = ScanOptions::new(SUPPORTED_EXTENSIONS, args.recursive);
        let files = scanner
            .scan(&input, &scan_options)
            .with_context(|| format!("failed to scan {}", input.display()))?;

        if files.is_empty() {
            warn!(
                "No convertible files found (supported: {})",
                supported_formats_list()
            );
            return Ok(ExitCode::SUCCESS);
        }

        verbose!("Found {} convertible files", files.len());
        let progress = batch_progress_bar(files.len() as u64);
        let stats = converter.convert_batch_with_progress(&files, &options, |result, index, total| {
            progress.suspend(|| {
                let line = progress_line(index + 1, total, &result.input_path);
                info!("{} {}", PROGRESS_PREFIX, line);
                report_result(result);
            });
            progress.inc(1);
        });
        progress.finish_and_clear();

        info!();
        for (i, line) in summary_lines(&stats).iter().enumerate() {
            if i == 0 {
                info!("{} {}", SUMMARY_PREFIX, line);
            } else {
                info!("  {}", line);
            }
        }

        return Ok(if stats.error_count > 0 {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        });
    }

    verbose!("Single file mode: {}", input.display());
    let result = converter.convert(&input, &options);
    report_result(&result);

    Ok(if result.error().is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn report_result(result: &ConversionResult) {
    if logger::is_quiet() {
        return;
    }

    match result.status {
        ConversionStatus::Converted => info!("{} {}", SUCCESS_PREFIX, conversion_line(result)),
        ConversionStatus::Skipped => info!("{} {}", SKIPPED_PREFIX, conversion_line(result)),
        ConversionStatus::Failed(_) => error!("{}", conversion_line(result)),
    }
}

fn batch_progress_bar(len: u64) -> ProgressBar {
    if logger::is_quiet() {
        return ProgressBar::hidden();
    }

    let style = ProgressStyle::with_template(PROGRESS_BAR_TEMPLATE)
        .map(|style| style.progress_chars(PROGRESS_BAR_CHARS))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    let progress = ProgressBar::new(len);
    progress.set_style(style);
    progress
}

fn list_webp_files(
    args: &Args,
    input: &Path,
    storage: &FsStorage,
    codec: &ImageCodec,
) -> Result<ExitCode> {
    let root = std::path::absolute(input)
        .with_context(|| format!("failed to resolve {}", input.display()))?;
    let scanner = DirectoryScanner::new(storage);
    let inspector = ImageInspector::new(storage, codec);

    let (infos, base) = if scanner.is_dir(&root) {
        let files = scanner
            .scan(&root, &ScanOptions::new(&[WEBP_EXTENSION], args.recursive))
            .with_context(|| format!("failed to scan {}", root.display()))?;
        verbose!("Inspecting {} WebP files", files.len());
        (inspector.get_info_batch(&files)?, Some(root.as_path()))
    } else {
        (vec![inspector.get_info(&root)?], root.parent())
    };

    let base = if args.absolute_path { None } else { base };
    println!();
    for (i, line) in image_list_lines(&infos, base).iter().enumerate() {
        if i == 0 && !infos.is_empty() {
            println!("{} {}", LIST_PREFIX, line);
        } else {
            println!("{}", line);
        }
    }

    Ok(ExitCode::SUCCESS)
}
