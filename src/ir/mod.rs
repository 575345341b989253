//! Canonical in-memory representation of annotations.
//!
//! Readers (`io_voc_xml`, `io_label_csv`) turn their input into a
//! `Vec<AnnotationRecord>`; the writer (`io_line_txt`) renders that vector.
//! Boxes are stored with every coordinate form precomputed so that the
//! writer only has to pick one.
//!
//! Coordinate values are tagged with [`Pixel`] or [`Normalized`] at the type
//! level so the two spaces cannot be mixed by accident.
//!
//! # Example
//!
//! ```
//! use reformat_labels::ir::{compute_derived, AnnotationRecord, BBoxXYXY, ObjectAnnotation, Pixel};
//!
//! let bbox = compute_derived(BBoxXYXY::<Pixel>::from_xyxy(10.0, 10.0, 50.0, 30.0), 100.0, 50.0)?;
//! assert_eq!(bbox.center_x_n(), 0.3);
//!
//! let record = AnnotationRecord::new("images/cat.jpg", 100, 50, 3)
//!     .with_object(ObjectAnnotation::new("cat", bbox));
//! assert_eq!(record.objects.len(), 1);
//! # Ok::<(), reformat_labels::ReformatError>(())
//! ```

mod bbox;
mod classes;
mod coord;
mod geometry;
pub mod io_label_csv;
pub mod io_line_txt;
pub mod io_voc_xml;
mod model;
mod space;

pub use bbox::{BBoxCxCyWh, BBoxXYXY};
pub use classes::ClassIndex;
pub use coord::Coord;
pub use geometry::{compute_derived, BoundingBox};
pub use io_line_txt::CoordMode;
pub use model::{records_per_image, AnnotationRecord, ObjectAnnotation};
pub use space::{CoordSpace, Normalized, Pixel};
