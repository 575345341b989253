//! One-shot conversion pipeline.
//!
//! [`convert`] reads the classes file, runs exactly one input reader, builds
//! a [`ConversionReport`] and writes the line file. Readers and the writer
//! only share the `Vec<AnnotationRecord>` handed between them.

pub mod report;

pub use report::{
    ConversionCounts, ConversionIssue, ConversionIssueCode, ConversionReport, ConversionSeverity,
};

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::ReformatError;
use crate::ir::io_label_csv::read_label_csv;
use crate::ir::io_line_txt::write_line_txt;
use crate::ir::io_voc_xml::read_voc_dir;
use crate::ir::{records_per_image, AnnotationRecord, ClassIndex, CoordMode};

/// Input label format.
///
/// This mirrors the CLI's format flags but is decoupled from clap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputFormat {
    /// A directory of Pascal VOC XML files.
    Voc,
    /// A single flat CSV file.
    Csv,
    /// VGG Image Annotator JSON. Not implemented.
    Vgg,
    /// YOLO text labels. Not implemented.
    Yolo,
}

impl InputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            InputFormat::Voc => "voc",
            InputFormat::Csv => "csv",
            InputFormat::Vgg => "vgg",
            InputFormat::Yolo => "yolo",
        }
    }
}

/// Everything one conversion run needs.
#[derive(Clone, Debug)]
pub struct ConvertOptions {
    pub format: InputFormat,
    /// VOC label directory, or the CSV file.
    pub labels: PathBuf,
    /// Prefix for the image paths written to the output.
    pub images: PathBuf,
    pub classes: PathBuf,
    pub output: PathBuf,
    pub mode: CoordMode,
}

type Reader = fn(&Path, &Path) -> Result<Vec<AnnotationRecord>, ReformatError>;

/// Run one conversion.
///
/// Unsupported formats fail before anything is read. The classes file and
/// the labels are fully read before the output file is created.
pub fn convert(opts: &ConvertOptions) -> Result<ConversionReport, ReformatError> {
    let reader: Reader = match opts.format {
        InputFormat::Voc => read_voc_dir,
        InputFormat::Csv => read_label_csv,
        InputFormat::Vgg | InputFormat::Yolo => {
            return Err(ReformatError::NotImplemented(format!(
                "'{}' labels cannot be read yet",
                opts.format.name()
            )));
        }
    };
    tracing::info!("Handling {} format", opts.format.name());

    let classes = ClassIndex::from_path(&opts.classes)?;
    let records = reader(&opts.labels, &opts.images)?;

    let report = build_conversion_report(&records, &classes, opts.format, opts.mode);
    for issue in report.warnings() {
        tracing::warn!("{}", issue.message);
    }

    write_line_txt(&opts.output, &records, &classes, opts.mode)?;

    Ok(report)
}

/// Summarize parsed records without touching the output.
pub fn build_conversion_report(
    records: &[AnnotationRecord],
    classes: &ClassIndex,
    format: InputFormat,
    mode: CoordMode,
) -> ConversionReport {
    let mut report = ConversionReport::new(format.name(), mode.name());

    let per_image = records_per_image(records);
    report.counts = ConversionCounts {
        records: records.len(),
        images: per_image.len(),
        objects: records.iter().map(|r| r.objects.len()).sum(),
        classes: classes.len(),
    };

    let split: Vec<(&str, usize)> = per_image
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .collect();
    if !split.is_empty() {
        let (sample, count) = split[0];
        report.add(ConversionIssue::warning(
            ConversionIssueCode::SplitImageGroups,
            format!(
                "{} image(s) appear on more than one line, e.g. {} on {} lines; sort the input by image to merge them",
                split.len(),
                sample,
                count
            ),
        ));
    }

    let objects = || records.iter().flat_map(|r| r.objects.iter().map(move |o| (r, o)));

    let unordered = objects()
        .filter(|(_, obj)| !obj.bbox.corners.is_ordered())
        .count();
    if unordered > 0 {
        report.add(ConversionIssue::warning(
            ConversionIssueCode::UnorderedCorners,
            format!("{unordered} object(s) have min/max corners swapped; corner modes write them as given"),
        ));
    }

    let out_of_bounds = objects()
        .filter(|(record, obj)| {
            !obj.bbox.corners.is_within(
                f64::from(record.image_width),
                f64::from(record.image_height),
            )
        })
        .count();
    if out_of_bounds > 0 {
        report.add(ConversionIssue::warning(
            ConversionIssueCode::OutOfBounds,
            format!("{out_of_bounds} object(s) extend outside their image"),
        ));
    }

    let used: BTreeSet<&str> = objects().map(|(_, obj)| obj.class_name.as_str()).collect();
    let unused: Vec<&str> = classes
        .iter()
        .map(|(name, _)| name)
        .filter(|name| !used.contains(name))
        .collect();
    if !unused.is_empty() {
        report.add(ConversionIssue::info(
            ConversionIssueCode::UnusedClasses,
            format!(
                "{} class(es) from the classes file are never used: {}",
                unused.len(),
                unused.join(", ")
            ),
        ));
    }

    report
}
