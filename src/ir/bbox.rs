//! Bounding box shapes: corner form (XYXY) and center form (CxCyWh).

use super::coord::Coord;
use super::space::CoordSpace;
use super::{Normalized, Pixel};

/// An axis-aligned bounding box given by two corners.
///
/// The constructor does NOT enforce `min <= max`. Annotation tools export
/// boxes with swapped corners often enough that the derived center/size
/// values are computed order-independently instead (see
/// [`compute_derived`](super::compute_derived)).
#[derive(Clone, Copy, PartialEq)]
pub struct BBoxXYXY<TSpace> {
    pub min: Coord<TSpace>,
    pub max: Coord<TSpace>,
}

impl<TSpace> BBoxXYXY<TSpace> {
    #[inline]
    pub fn new(min: Coord<TSpace>, max: Coord<TSpace>) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn from_xyxy(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self {
            min: Coord::new(xmin, ymin),
            max: Coord::new(xmax, ymax),
        }
    }

    #[inline]
    pub fn xmin(&self) -> f64 {
        self.min.x
    }

    #[inline]
    pub fn ymin(&self) -> f64 {
        self.min.y
    }

    #[inline]
    pub fn xmax(&self) -> f64 {
        self.max.x
    }

    #[inline]
    pub fn ymax(&self) -> f64 {
        self.max.y
    }

    /// Returns the corners as `[xmin, ymin, xmax, ymax]`.
    #[inline]
    pub fn to_array(&self) -> [f64; 4] {
        [self.min.x, self.min.y, self.max.x, self.max.y]
    }

    /// Returns true if all coordinates are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Returns true if min <= max on both axes.
    #[inline]
    pub fn is_ordered(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }

    /// Converts to center form.
    ///
    /// The center is the mean of the corners and the size is the absolute
    /// corner distance, so swapped corners give the same result.
    #[inline]
    pub fn to_cxcywh(&self) -> BBoxCxCyWh<TSpace> {
        let (width, height) = self.min.abs_delta(&self.max);
        BBoxCxCyWh {
            center: self.min.midpoint(&self.max),
            width,
            height,
        }
    }
}

impl<TSpace: CoordSpace> std::fmt::Debug for BBoxXYXY<TSpace> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BBoxXYXY")
            .field("space", &TSpace::NAME)
            .field("xmin", &self.min.x)
            .field("ymin", &self.min.y)
            .field("xmax", &self.max.x)
            .field("ymax", &self.max.y)
            .finish()
    }
}

impl BBoxXYXY<Pixel> {
    /// Divides every coordinate by the matching image dimension.
    ///
    /// Callers must make sure both dimensions are positive.
    pub fn to_normalized(&self, image_width: f64, image_height: f64) -> BBoxXYXY<Normalized> {
        BBoxXYXY::from_xyxy(
            self.min.x / image_width,
            self.min.y / image_height,
            self.max.x / image_width,
            self.max.y / image_height,
        )
    }

    /// Returns true if both corners lie within `[0, width] x [0, height]`.
    pub fn is_within(&self, image_width: f64, image_height: f64) -> bool {
        [self.min, self.max].iter().all(|corner| {
            (0.0..=image_width).contains(&corner.x) && (0.0..=image_height).contains(&corner.y)
        })
    }
}

/// A bounding box given by its center point and its (non-negative) size.
#[derive(Clone, Copy, PartialEq)]
pub struct BBoxCxCyWh<TSpace> {
    pub center: Coord<TSpace>,
    pub width: f64,
    pub height: f64,
}

impl<TSpace> BBoxCxCyWh<TSpace> {
    #[inline]
    pub fn new(center_x: f64, center_y: f64, width: f64, height: f64) -> Self {
        Self {
            center: Coord::new(center_x, center_y),
            width,
            height,
        }
    }

    #[inline]
    pub fn center_x(&self) -> f64 {
        self.center.x
    }

    #[inline]
    pub fn center_y(&self) -> f64 {
        self.center.y
    }

    /// Returns the box as `[center_x, center_y, width, height]`.
    #[inline]
    pub fn to_array(&self) -> [f64; 4] {
        [self.center.x, self.center.y, self.width, self.height]
    }
}

impl BBoxCxCyWh<Normalized> {
    /// Multiplies every value back by the matching image dimension.
    pub fn to_pixel(&self, image_width: f64, image_height: f64) -> BBoxCxCyWh<Pixel> {
        BBoxCxCyWh::new(
            self.center.x * image_width,
            self.center.y * image_height,
            self.width * image_width,
            self.height * image_height,
        )
    }
}

impl<TSpace: CoordSpace> std::fmt::Debug for BBoxCxCyWh<TSpace> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BBoxCxCyWh")
            .field("space", &TSpace::NAME)
            .field("center_x", &self.center.x)
            .field("center_y", &self.center.y)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}
