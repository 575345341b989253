//! Coordinate space marker types.
//!
//! These are uninhabited types used as type parameters so that absolute
//! (pixel) values and values divided by the image size cannot be mixed up.

use std::fmt;

/// Implemented by every coordinate space marker.
pub trait CoordSpace {
    /// Short name used in `Debug` output.
    const NAME: &'static str;
}

/// Marker type for absolute pixel coordinates.
///
/// (0, 0) is the top-left corner of the image.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pixel {}

/// Marker type for coordinates divided by the image width/height.
///
/// In-bounds boxes land in 0.0..=1.0.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Normalized {}

impl CoordSpace for Pixel {
    const NAME: &'static str = "px";
}

impl CoordSpace for Normalized {
    const NAME: &'static str = "norm";
}

impl fmt::Debug for Pixel {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl fmt::Debug for Normalized {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}
