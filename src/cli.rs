use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "webpify",
    about = "Convert PNG, JPEG and GIF images to WebP",
    long_about = "webpify converts PNG, JPEG and GIF images to WebP, either a single file or every \
                  convertible image in a directory. Existing outputs are skipped unless --force is \
                  given, and --list shows the size and dimensions of WebP files already on disk.",
    version,
    disable_version_flag = true,
    after_help = "EXAMPLES:\n  \
    webpify photo.png\n  \
    webpify ./images -r -q 75 -o ./webp\n  \
    webpify ./images --lossless --force\n  \
    webpify ./webp --list -r"
)]
pub struct Args {
    #[arg(help = "Input file or directory path")]
    pub input: Option<PathBuf>,

    #[arg(
        short = 'o',
        long,
        help = "Output directory",
        long_help = "Directory that receives the .webp files. \
                     Defaults to the directory of each input file. Created if missing."
    )]
    pub output: Option<PathBuf>,

    #[arg(
        short = 'q',
        long,
        value_parser = clap::value_parser!(u8).range(1..=100),
        help = "Quality level (1-100, default: 80)",
        long_help = "WebP quality from 1 (smallest) to 100 (best). Ignored with --lossless."
    )]
    pub quality: Option<u8>,

    #[arg(short = 'r', long, help = "Process directories recursively")]
    pub recursive: bool,

    #[arg(short = 'f', long, help = "Overwrite existing files")]
    pub force: bool,

    #[arg(
        long,
        help = "Encode without quality loss",
        long_help = "Use lossless WebP encoding. Any --quality value is ignored."
    )]
    pub lossless: bool,

    #[arg(long, help = "Silent mode (no output)")]
    pub quiet: bool,

    #[arg(long, help = "Print each processing step")]
    pub verbose: bool,

    #[arg(long, help = "List WebP files with size information")]
    pub list: bool,

    #[arg(
        long,
        help = "Show absolute paths in --list output",
        long_help = "Show absolute paths in --list output instead of paths relative to the input."
    )]
    pub absolute_path: bool,

    #[arg(short = 'v', long, action = ArgAction::Version, help = "Show version number")]
    pub version: Option<bool>,
}
