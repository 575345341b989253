//! Typed 2D points.

use std::marker::PhantomData;

use super::space::CoordSpace;

/// A 2D point tagged with its coordinate space.
///
/// `TSpace` is either [`Pixel`](super::Pixel) or
/// [`Normalized`](super::Normalized).
#[derive(Clone, Copy, PartialEq)]
pub struct Coord<TSpace> {
    pub x: f64,
    pub y: f64,
    _space: PhantomData<TSpace>,
}

impl<TSpace> Coord<TSpace> {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            _space: PhantomData,
        }
    }

    /// Returns true if both components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Arithmetic mean of two points. Independent of argument order.
    #[inline]
    pub fn midpoint(&self, other: &Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Per-axis absolute distance between two points.
    #[inline]
    pub fn abs_delta(&self, other: &Self) -> (f64, f64) {
        ((other.x - self.x).abs(), (other.y - self.y).abs())
    }
}

impl<TSpace: CoordSpace> std::fmt::Debug for Coord<TSpace> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Coord<{}>({}, {})", TSpace::NAME, self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Pixel;

    #[test]
    fn midpoint_is_order_independent() {
        let a: Coord<Pixel> = Coord::new(10.0, 40.0);
        let b: Coord<Pixel> = Coord::new(50.0, 20.0);
        assert_eq!(a.midpoint(&b), b.midpoint(&a));
        assert_eq!(a.midpoint(&b), Coord::new(30.0, 30.0));
    }

    #[test]
    fn abs_delta_is_never_negative() {
        let a: Coord<Pixel> = Coord::new(50.0, 30.0);
        let b: Coord<Pixel> = Coord::new(10.0, 10.0);
        assert_eq!(a.abs_delta(&b), (40.0, 20.0));
        assert_eq!(b.abs_delta(&a), (40.0, 20.0));
    }

    #[test]
    fn is_finite_rejects_nan_and_inf() {
        assert!(Coord::<Pixel>::new(1.0, 2.0).is_finite());
        assert!(!Coord::<Pixel>::new(f64::NAN, 2.0).is_finite());
        assert!(!Coord::<Pixel>::new(1.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn debug_names_the_space() {
        let c: Coord<Pixel> = Coord::new(1.5, 2.0);
        assert_eq!(format!("{c:?}"), "Coord<px>(1.5, 2)");
    }
}
