use crate::{Point, Vector};

/// Minimum and maximum bounds in three dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// The minimum values.
    pub min: Vector<f64>,

    /// The maximum values.
    pub max: Vector<f64>,
}

impl Bounds {
    /// Grows the bounds to encompass this point in xyz space.
    ///
    /// # Examples
    ///
    /// ```
    /// use las2ply::{Bounds, Point};
    /// let point = Point { x: 1., y: 2., z: 3., ..Default::default() };
    /// let mut bounds = Bounds::default();
    /// bounds.grow(&point);
    /// assert_eq!(1., bounds.min.x);
    /// assert_eq!(3., bounds.max.z);
    /// ```
    pub fn grow(&mut self, point: &Point) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    /// Returns true if no point has been added to these bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use las2ply::Bounds;
    /// assert!(Bounds::default().is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }
}

impl Default for Bounds {
    fn default() -> Bounds {
        Bounds {
            min: Vector::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Vector::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }
}
