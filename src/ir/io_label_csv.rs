//! Flat label CSV reader.
//!
//! # Format
//!
//! One object per line, no header row:
//!
//! ```text
//! class_name,xmin,ymin,xmax,ymax,image_filename,image_width,image_height
//! ```
//!
//! Coordinates are absolute pixels. Whitespace around fields is ignored.
//!
//! # Grouping
//!
//! Rows are grouped into records by *contiguous runs* of the same
//! `image_filename`. Rows for one image that are interrupted by another image
//! start a new record, so inputs should be sorted by image to get exactly one
//! output line per image.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use super::model::{AnnotationRecord, ObjectAnnotation};
use super::{compute_derived, BBoxXYXY, Pixel};
use crate::error::ReformatError;

/// Columns per row.
const FIELD_COUNT: usize = 8;

/// The CSV carries no channel count; records assume RGB.
pub const DEFAULT_IMAGE_DEPTH: u32 = 3;

#[derive(Debug, Deserialize)]
struct LabelCsvRow {
    class_name: String,
    xmin: f64,
    ymin: f64,
    xmax: f64,
    ymax: f64,
    image_filename: String,
    image_width: u32,
    image_height: u32,
}

/// Reads records from a label CSV file.
///
/// Output image paths are `images_dir` joined with each row's
/// `image_filename`.
///
/// # Errors
/// Fails on a missing file, a row without exactly eight fields, a
/// non-numeric coordinate or dimension, or a zero image dimension.
pub fn read_label_csv(
    path: &Path,
    images_dir: &Path,
) -> Result<Vec<AnnotationRecord>, ReformatError> {
    if !path.is_file() {
        return Err(ReformatError::InputNotFound {
            what: "label CSV file",
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(ReformatError::Io)?;
    let records = read_rows(BufReader::new(file), path, images_dir)?;
    tracing::info!(
        "Read {} record(s) from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

/// Reads records from label CSV text.
pub fn from_label_csv_str(
    csv_str: &str,
    images_dir: &Path,
) -> Result<Vec<AnnotationRecord>, ReformatError> {
    read_rows(csv_str.as_bytes(), Path::new("<string>"), images_dir)
}

/// Reads records from label CSV bytes.
///
/// Useful for fuzzing raw input without requiring UTF-8 upfront.
pub fn from_label_csv_slice(bytes: &[u8]) -> Result<Vec<AnnotationRecord>, ReformatError> {
    read_rows(bytes, Path::new("<bytes>"), Path::new(""))
}

fn read_rows<R: Read>(
    reader: R,
    path: &Path,
    images_dir: &Path,
) -> Result<Vec<AnnotationRecord>, ReformatError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records: Vec<AnnotationRecord> = Vec::new();
    let mut current_image: Option<String> = None;

    for result in csv_reader.records() {
        let raw = result.map_err(|source| ReformatError::LabelCsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        let line = raw.position().map_or(0, csv::Position::line);

        if raw.len() != FIELD_COUNT {
            return Err(ReformatError::LabelCsvInvalid {
                path: path.to_path_buf(),
                line,
                message: format!("expected {FIELD_COUNT} fields, found {}", raw.len()),
            });
        }

        let row: LabelCsvRow =
            raw.deserialize(None)
                .map_err(|source| ReformatError::LabelCsvParse {
                    path: path.to_path_buf(),
                    source,
                })?;

        let corners = BBoxXYXY::<Pixel>::from_xyxy(row.xmin, row.ymin, row.xmax, row.ymax);
        if !corners.is_finite() {
            return Err(ReformatError::LabelCsvInvalid {
                path: path.to_path_buf(),
                line,
                message: format!("coordinates must be finite, got {:?}", corners.to_array()),
            });
        }
        let bbox = compute_derived(
            corners,
            f64::from(row.image_width),
            f64::from(row.image_height),
        )?;

        if current_image.as_deref() != Some(row.image_filename.as_str()) {
            tracing::debug!("Starting record for {} at line {}", row.image_filename, line);
            records.push(AnnotationRecord::new(
                images_dir
                    .join(&row.image_filename)
                    .to_string_lossy()
                    .into_owned(),
                row.image_width,
                row.image_height,
                DEFAULT_IMAGE_DEPTH,
            ));
            current_image = Some(row.image_filename);
        }

        let annotation = ObjectAnnotation::new(row.class_name, bbox);
        tracing::debug!("{:?}", annotation);
        if let Some(record) = records.last_mut() {
            record.objects.push(annotation);
        }
    }

    Ok(records)
}
