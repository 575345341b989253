//! Derivation of every coordinate representation of a box.
//!
//! Parsers only ever see absolute corners. [`compute_derived`] turns those
//! into a [`BoundingBox`] that carries the normalized corners and both
//! center+size forms, so the serializer never does arithmetic of its own.

use super::bbox::{BBoxCxCyWh, BBoxXYXY};
use super::{Normalized, Pixel};
use crate::error::ReformatError;

/// One object's location in all four representations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub corners: BBoxXYXY<Pixel>,
    pub corners_n: BBoxXYXY<Normalized>,
    pub center: BBoxCxCyWh<Pixel>,
    pub center_n: BBoxCxCyWh<Normalized>,
}

impl BoundingBox {
    pub fn xmin(&self) -> f64 {
        self.corners.xmin()
    }

    pub fn ymin(&self) -> f64 {
        self.corners.ymin()
    }

    pub fn xmax(&self) -> f64 {
        self.corners.xmax()
    }

    pub fn ymax(&self) -> f64 {
        self.corners.ymax()
    }

    pub fn xmin_n(&self) -> f64 {
        self.corners_n.xmin()
    }

    pub fn ymin_n(&self) -> f64 {
        self.corners_n.ymin()
    }

    pub fn xmax_n(&self) -> f64 {
        self.corners_n.xmax()
    }

    pub fn ymax_n(&self) -> f64 {
        self.corners_n.ymax()
    }

    pub fn center_x(&self) -> f64 {
        self.center.center_x()
    }

    pub fn center_y(&self) -> f64 {
        self.center.center_y()
    }

    pub fn width(&self) -> f64 {
        self.center.width
    }

    pub fn height(&self) -> f64 {
        self.center.height
    }

    pub fn center_x_n(&self) -> f64 {
        self.center_n.center_x()
    }

    pub fn center_y_n(&self) -> f64 {
        self.center_n.center_y()
    }

    pub fn width_n(&self) -> f64 {
        self.center_n.width
    }

    pub fn height_n(&self) -> f64 {
        self.center_n.height
    }
}

/// Derives all representations of `corners` for an image of the given size.
///
/// Corners may be given in any order: sizes are absolute distances and
/// centers are means. The normalized size is taken from the absolute size
/// divided by the image dimension, which equals `|xmax_n - xmin_n|` without
/// the cancellation error of subtracting two rounded quotients.
///
/// # Errors
/// Returns [`ReformatError::DegenerateImageSize`] if either dimension is not
/// a positive finite number.
pub fn compute_derived(
    corners: BBoxXYXY<Pixel>,
    image_width: f64,
    image_height: f64,
) -> Result<BoundingBox, ReformatError> {
    if !is_usable_dimension(image_width) || !is_usable_dimension(image_height) {
        return Err(ReformatError::DegenerateImageSize {
            width: image_width,
            height: image_height,
        });
    }

    let corners_n = corners.to_normalized(image_width, image_height);
    let center = corners.to_cxcywh();
    let center_n = BBoxCxCyWh {
        center: corners_n.min.midpoint(&corners_n.max),
        width: center.width / image_width,
        height: center.height / image_height,
    };

    Ok(BoundingBox {
        corners,
        corners_n,
        center,
        center_n,
    })
}

fn is_usable_dimension(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
