//! reformat-labels: bounding-box label conversion.
//!
//! Reads object-detection annotations from a directory of Pascal VOC XML
//! files or from one flat CSV file, and writes a single text file with one
//! line per image:
//!
//! ```text
//! images/cat.jpg 10,10,50,30,0 60,5,90,40,2
//! ```
//!
//! # Modules
//!
//! - [`ir`]: canonical records, box geometry, class index, readers and writer
//! - [`conversion`]: the conversion pipeline and its report
//! - [`logging`]: verbosity-driven log subscriber
//! - [`error`]: error type

pub mod conversion;
pub mod error;
pub mod ir;
pub mod logging;

use std::path::PathBuf;

use clap::{ArgGroup, Parser, ValueEnum};

pub use error::ReformatError;

use conversion::{ConvertOptions, InputFormat};
use ir::CoordMode;

/// The reformat-labels CLI application.
#[derive(Parser)]
#[command(name = "reformat-labels")]
#[command(version, about)]
#[command(group(
    ArgGroup::new("input_format")
        .required(true)
        .args(["xml", "csv", "vgg", "yolo"])
))]
struct Cli {
    /// Folder path of images, used as the prefix of every output line.
    #[arg(short, long, env = "REFORMAT_LABELS_IMAGES")]
    images: PathBuf,

    /// Folder of XML labels, or the CSV labels file.
    #[arg(short, long, env = "REFORMAT_LABELS_LABELS")]
    labels: PathBuf,

    /// File containing classes (one class per line).
    #[arg(short, long, env = "REFORMAT_LABELS_CLASSES")]
    classes: PathBuf,

    /// File path for the result.
    #[arg(short, long, env = "REFORMAT_LABELS_OUTPUT")]
    output: PathBuf,

    /// Input labels are Pascal VOC XML files.
    #[arg(long)]
    xml: bool,

    /// Input labels are a single CSV file.
    #[arg(long)]
    csv: bool,

    /// Input labels are VGG Image Annotator JSON (not implemented).
    #[arg(long)]
    vgg: bool,

    /// Input labels are YOLO text files (not implemented).
    #[arg(long)]
    yolo: bool,

    /// Write coordinates divided by the image size.
    #[arg(long)]
    normalize: bool,

    /// Write center x, center y, width, height instead of corners.
    #[arg(long)]
    centered: bool,

    /// Log every parsed file and object.
    #[arg(short, long)]
    verbose: bool,

    /// How to print the conversion summary.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    report: ReportFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

impl Cli {
    fn input_format(&self) -> InputFormat {
        if self.xml {
            InputFormat::Voc
        } else if self.csv {
            InputFormat::Csv
        } else if self.vgg {
            InputFormat::Vgg
        } else {
            InputFormat::Yolo
        }
    }

    fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            format: self.input_format(),
            labels: self.labels.clone(),
            images: self.images.clone(),
            classes: self.classes.clone(),
            output: self.output.clone(),
            mode: CoordMode::from_flags(self.normalize, self.centered),
        }
    }
}

/// Run the reformat-labels CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), ReformatError> {
    let cli = Cli::parse();
    let subscriber = logging::subscriber(cli.verbose);
    tracing::subscriber::with_default(subscriber, || run_convert(&cli))
}

fn run_convert(cli: &Cli) -> Result<(), ReformatError> {
    tracing::info!(
        "Logging set to {}",
        logging::level_for(cli.verbose).to_string().to_uppercase()
    );

    let opts = cli.convert_options();
    let report = conversion::convert(&opts)?;

    match cli.report {
        ReportFormat::Json => println!("{}", report.to_json()?),
        ReportFormat::Text => print!("{}", report),
    }

    Ok(())
}
