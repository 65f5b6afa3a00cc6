/// An xyz collection.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector<T> {
    /// X
    pub x: T,
    /// Y
    pub y: T,
    /// Z
    pub z: T,
}

impl<T> Vector<T> {
    /// Creates a new vector.
    pub fn new(x: T, y: T, z: T) -> Vector<T> {
        Vector { x, y, z }
    }

    /// Returns each component paired with its axis name.
    ///
    /// # Examples
    ///
    /// ```
    /// use las2ply::Vector;
    /// let vector = Vector::new(1, 2, 3);
    /// assert_eq!([('x', &1), ('y', &2), ('z', &3)], vector.axes());
    /// ```
    pub fn axes(&self) -> [(char, &T); 3] {
        [('x', &self.x), ('y', &self.y), ('z', &self.z)]
    }
}
