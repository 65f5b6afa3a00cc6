//! Las points.

mod format;

pub use self::format::Format;

use crate::{Color, Transform, Vector, raw};

/// A point is the basic unit of information in LAS data.
///
/// Its coordinates are real-world values: the raw integers with the header's scale and offset
/// applied.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// The x coordinate, as a float.
    pub x: f64,
    /// The y coordinate, as a float.
    pub y: f64,
    /// The z coordinate, as a float.
    pub z: f64,
    /// This point's color, if the point format has one.
    pub color: Option<Color>,
}

impl Point {
    /// Creates a point from a raw point and the header's transforms.
    ///
    /// # Examples
    ///
    /// ```
    /// use las2ply::{Point, Transform, Vector, raw};
    /// let raw_point = raw::Point { x: 12345, ..Default::default() };
    /// let transform = Transform { scale: 0.01, offset: 0. };
    /// let point = Point::new(raw_point, &Vector::new(transform, transform, transform));
    /// assert!((point.x - 123.45).abs() < 1e-9);
    /// ```
    pub fn new(raw_point: raw::Point, transforms: &Vector<Transform>) -> Point {
        Point {
            x: transforms.x.direct(raw_point.x),
            y: transforms.y.direct(raw_point.y),
            z: transforms.z.direct(raw_point.z),
            color: raw_point.color,
        }
    }

    /// Returns this point's position.
    pub fn position(&self) -> Vector<f64> {
        Vector::new(self.x, self.y, self.z)
    }

    /// Returns the first axis whose coordinate is NaN or infinite, with that coordinate.
    ///
    /// # Examples
    ///
    /// ```
    /// use las2ply::Point;
    /// let point = Point { y: f64::NAN, ..Default::default() };
    /// assert_eq!(Some('y'), point.non_finite_axis().map(|(axis, _)| axis));
    /// assert!(Point::default().non_finite_axis().is_none());
    /// ```
    pub fn non_finite_axis(&self) -> Option<(char, f64)> {
        self.position()
            .axes()
            .into_iter()
            .find(|(_, value)| !value.is_finite())
            .map(|(axis, value)| (axis, *value))
    }
}
