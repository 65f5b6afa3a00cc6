/// A scale and an offset that transforms xyz coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// The scale.
    pub scale: f64,

    /// The offset.
    pub offset: f64,
}

impl Transform {
    /// Applies this transform to an i32, returning a float.
    ///
    /// # Examples
    ///
    /// ```
    /// use las2ply::Transform;
    /// let transform = Transform { scale: 2., offset: 1. };
    /// assert_eq!(3., transform.direct(1));
    /// ```
    pub fn direct(&self, n: i32) -> f64 {
        self.scale * f64::from(n) + self.offset
    }
}

impl Default for Transform {
    fn default() -> Transform {
        Transform {
            scale: 0.001,
            offset: 0.,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_recovers_sub_integer_precision() {
        let transform = Transform {
            scale: 0.01,
            offset: 0.,
        };
        assert!((transform.direct(12345) - 123.45).abs() < 1e-9);
    }

    #[test]
    fn direct_applies_offset() {
        let transform = Transform {
            scale: 0.001,
            offset: 500_000.,
        };
        assert!((transform.direct(-1500) - 499_998.5).abs() < 1e-9);
    }
}
