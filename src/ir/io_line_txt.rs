//! Line-oriented label writer.
//!
//! Each record becomes one line:
//!
//! ```text
//! <file_path> <c1>,<c2>,<c3>,<c4>,<class_id> <c1>,<c2>,<c3>,<c4>,<class_id> \n
//! ```
//!
//! Every object group, including the last one, is followed by a space. The
//! four values depend on [`CoordMode`].

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use super::classes::ClassIndex;
use super::geometry::BoundingBox;
use super::model::AnnotationRecord;
use crate::error::ReformatError;

/// Which four values are written per object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoordMode {
    /// `xmin,ymin,xmax,ymax` in pixels, truncated to integers.
    PixelCorners,
    /// `xmin,ymin,xmax,ymax` divided by the image size.
    NormalizedCorners,
    /// `center_x,center_y,width,height` in pixels, truncated to integers.
    PixelCenter,
    /// `center_x,center_y,width,height` divided by the image size.
    NormalizedCenter,
}

impl CoordMode {
    /// Combines the two independent `normalized` / `centered` switches.
    pub fn from_flags(normalized: bool, centered: bool) -> Self {
        match (normalized, centered) {
            (true, true) => CoordMode::NormalizedCenter,
            (true, false) => CoordMode::NormalizedCorners,
            (false, true) => CoordMode::PixelCenter,
            (false, false) => CoordMode::PixelCorners,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CoordMode::PixelCorners => "pixel-corners",
            CoordMode::NormalizedCorners => "normalized-corners",
            CoordMode::PixelCenter => "pixel-center",
            CoordMode::NormalizedCenter => "normalized-center",
        }
    }

    pub fn is_normalized(&self) -> bool {
        matches!(
            self,
            CoordMode::NormalizedCorners | CoordMode::NormalizedCenter
        )
    }

    fn values(&self, bbox: &BoundingBox) -> [f64; 4] {
        match self {
            CoordMode::PixelCorners => bbox.corners.to_array(),
            CoordMode::NormalizedCorners => bbox.corners_n.to_array(),
            CoordMode::PixelCenter => bbox.center.to_array(),
            CoordMode::NormalizedCenter => bbox.center_n.to_array(),
        }
    }
}

/// Writes all records to `path`, replacing any existing file.
///
/// The file is created before the first line is rendered. If a class lookup
/// fails part way through, the lines written so far stay on disk.
pub fn write_line_txt(
    path: &Path,
    records: &[AnnotationRecord],
    classes: &ClassIndex,
    mode: CoordMode,
) -> Result<(), ReformatError> {
    let file = File::create(path).map_err(ReformatError::Io)?;
    let mut writer = BufWriter::new(file);

    write_lines(&mut writer, records, classes, mode)?;
    writer.flush().map_err(ReformatError::Io)?;

    tracing::info!("Wrote {} line(s) to {}", records.len(), path.display());
    Ok(())
}

/// Renders all records to a string.
pub fn to_line_txt_string(
    records: &[AnnotationRecord],
    classes: &ClassIndex,
    mode: CoordMode,
) -> Result<String, ReformatError> {
    let mut buffer = Vec::new();
    write_lines(&mut buffer, records, classes, mode)?;

    String::from_utf8(buffer)
        .map_err(|e| ReformatError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Renders one record as a newline-terminated line.
pub fn render_line(
    record: &AnnotationRecord,
    classes: &ClassIndex,
    mode: CoordMode,
) -> Result<String, ReformatError> {
    let mut line = String::with_capacity(record.file_path.len() + 24 * record.objects.len() + 2);
    line.push_str(&record.file_path);
    line.push(' ');

    for object in &record.objects {
        let class_id = classes.resolve(&object.class_name, &record.file_path)?;
        for value in mode.values(&object.bbox) {
            if mode.is_normalized() {
                line.push_str(&format_normalized(value));
            } else {
                line.push_str(&truncate(value).to_string());
            }
            line.push(',');
        }
        line.push_str(&class_id.to_string());
        line.push(' ');
    }

    line.push('\n');
    Ok(line)
}

fn write_lines<W: Write>(
    writer: &mut W,
    records: &[AnnotationRecord],
    classes: &ClassIndex,
    mode: CoordMode,
) -> Result<(), ReformatError> {
    for record in records {
        let line = render_line(record, classes, mode)?;
        writer
            .write_all(line.as_bytes())
            .map_err(ReformatError::Io)?;
    }
    Ok(())
}

/// Shortest round-trip formatting, always with a decimal point.
fn format_normalized(value: f64) -> String {
    let mut text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        text.push_str(".0");
    }
    text
}

/// Drops the fractional part, rounding toward zero.
fn truncate(value: f64) -> i64 {
    value.trunc() as i64
}
