use crate::{Bounds, Error, Point, Result};
use std::slice;

/// An ordered, in-memory collection of points.
///
/// Either every point has a color or none does. The decoder decides this once, from the point
/// format, so the ply encoder never has to look at individual points to know what to write.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointCloud {
    points: Vec<Point>,
    has_color: bool,
}

impl PointCloud {
    /// Creates an empty point cloud.
    ///
    /// # Examples
    ///
    /// ```
    /// use las2ply::PointCloud;
    /// let cloud = PointCloud::new(true);
    /// assert!(cloud.is_empty());
    /// assert!(cloud.has_color());
    /// ```
    pub fn new(has_color: bool) -> PointCloud {
        PointCloud::with_capacity(has_color, 0)
    }

    /// Creates an empty point cloud with room for `capacity` points.
    pub fn with_capacity(has_color: bool, capacity: usize) -> PointCloud {
        PointCloud {
            points: Vec::with_capacity(capacity),
            has_color,
        }
    }

    /// Appends a point.
    ///
    /// Returns an error if the point's color presence doesn't match the cloud's.
    ///
    /// # Examples
    ///
    /// ```
    /// use las2ply::{Color, Point, PointCloud};
    /// let mut cloud = PointCloud::new(false);
    /// cloud.push(Point::default()).unwrap();
    /// let colored = Point { color: Some(Color::new(1, 2, 3)), ..Default::default() };
    /// assert!(cloud.push(colored).is_err());
    /// ```
    pub fn push(&mut self, point: Point) -> Result<()> {
        if point.color.is_some() != self.has_color {
            return Err(Error::ColorMismatch {
                index: self.points.len(),
                expected: self.has_color,
            });
        }
        self.points.push(point);
        Ok(())
    }

    /// Do the points carry color?
    pub fn has_color(&self) -> bool {
        self.has_color
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if there are no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the points, in file order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns an iterator over the points, in file order.
    pub fn iter(&self) -> slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Computes the bounds of the points.
    ///
    /// # Examples
    ///
    /// ```
    /// use las2ply::{Point, PointCloud};
    /// let mut cloud = PointCloud::new(false);
    /// cloud.push(Point { x: 1., y: 2., z: 3., color: None }).unwrap();
    /// cloud.push(Point { x: -1., y: 5., z: 0., color: None }).unwrap();
    /// let bounds = cloud.bounds();
    /// assert_eq!(-1., bounds.min.x);
    /// assert_eq!(5., bounds.max.y);
    /// ```
    pub fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::default();
        for point in &self.points {
            bounds.grow(point);
        }
        bounds
    }

    /// Consumes the cloud, returning its points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl<'a> IntoIterator for &'a PointCloud {
    type Item = &'a Point;
    type IntoIter = slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
