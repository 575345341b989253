//! Canonical per-image annotation records.
//!
//! Every reader produces a `Vec<AnnotationRecord>` and the line writer
//! consumes one. Nothing else passes between them.

use std::collections::BTreeMap;

use super::geometry::BoundingBox;

/// One labelled object inside an image.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectAnnotation {
    /// Human-readable class name, resolved to an id only when writing.
    pub class_name: String,
    pub bbox: BoundingBox,
}

impl ObjectAnnotation {
    pub fn new(class_name: impl Into<String>, bbox: BoundingBox) -> Self {
        Self {
            class_name: class_name.into(),
            bbox,
        }
    }
}

/// All annotations for one image, in source order.
#[derive(Clone, Debug, PartialEq)]
pub struct AnnotationRecord {
    /// Path of the image as it should appear in the output.
    pub file_path: String,
    pub image_width: u32,
    pub image_height: u32,
    pub image_depth: u32,
    pub objects: Vec<ObjectAnnotation>,
}

impl AnnotationRecord {
    pub fn new(
        file_path: impl Into<String>,
        image_width: u32,
        image_height: u32,
        image_depth: u32,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            image_width,
            image_height,
            image_depth,
            objects: Vec::new(),
        }
    }

    /// Adds an object, keeping insertion order.
    pub fn with_object(mut self, object: ObjectAnnotation) -> Self {
        self.objects.push(object);
        self
    }
}

/// Number of records per `file_path`.
///
/// A count above one means an image was split across several records.
pub fn records_per_image(records: &[AnnotationRecord]) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.file_path.as_str()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{compute_derived, BBoxXYXY};

    #[test]
    fn with_object_keeps_insertion_order() {
        let bbox = compute_derived(BBoxXYXY::from_xyxy(1.0, 1.0, 2.0, 2.0), 10.0, 10.0)
            .expect("derive box");
        let record = AnnotationRecord::new("img.jpg", 10, 10, 3)
            .with_object(ObjectAnnotation::new("zebra", bbox))
            .with_object(ObjectAnnotation::new("ant", bbox));

        let names: Vec<&str> = record
            .objects
            .iter()
            .map(|obj| obj.class_name.as_str())
            .collect();
        assert_eq!(names, ["zebra", "ant"]);
    }

    #[test]
    fn records_per_image_counts_split_images() {
        let records = vec![
            AnnotationRecord::new("a.jpg", 1, 1, 3),
            AnnotationRecord::new("b.jpg", 1, 1, 3),
            AnnotationRecord::new("a.jpg", 1, 1, 3),
        ];
        let counts = records_per_image(&records);
        assert_eq!(counts.get("a.jpg"), Some(&2));
        assert_eq!(counts.get("b.jpg"), Some(&1));
    }
}
