use crate::{Error, Result, feature::Feature};
use std::fmt;

/// LAS version.
///
/// Only major version 1, minor versions 0 through 4, are defined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    /// The major version.
    ///
    /// For now, always 1.
    pub major: u8,

    /// The minor version.
    pub minor: u8,
}

impl Version {
    /// Creates a new version.
    ///
    /// # Examples
    ///
    /// ```
    /// use las2ply::Version;
    /// let version = Version::new(1, 2);
    /// ```
    pub fn new(major: u8, minor: u8) -> Version {
        Version { major, minor }
    }

    /// Returns true if this version's header layout is known.
    ///
    /// # Examples
    ///
    /// ```
    /// use las2ply::Version;
    /// assert!(Version::new(1, 4).is_supported());
    /// assert!(!Version::new(1, 5).is_supported());
    /// assert!(!Version::new(2, 0).is_supported());
    /// ```
    pub fn is_supported(&self) -> bool {
        self.major == 1 && self.minor <= 4
    }

    /// Returns this version, or an error if its layout is unknown.
    pub fn verify_supported(self) -> Result<Version> {
        if self.is_supported() {
            Ok(self)
        } else {
            Err(Error::UnsupportedVersion(self))
        }
    }

    /// Checks whether this version supports the feature.
    ///
    /// # Examples
    ///
    /// ```
    /// use las2ply::{Version, feature::LargeFiles};
    /// assert!(!Version::new(1, 2).supports::<LargeFiles>());
    /// assert!(Version::new(1, 4).supports::<LargeFiles>());
    /// ```
    pub fn supports<F: Feature>(&self) -> bool {
        F::is_supported_by(*self)
    }

    /// Returns the size of the public header block defined by this version.
    ///
    /// # Examples
    ///
    /// ```
    /// use las2ply::Version;
    /// assert_eq!(227, Version::new(1, 2).header_size());
    /// assert_eq!(235, Version::new(1, 3).header_size());
    /// assert_eq!(375, Version::new(1, 4).header_size());
    /// ```
    pub fn header_size(&self) -> u16 {
        match self.minor {
            0..=2 => 227,
            3 => 235,
            _ => 375,
        }
    }
}

impl From<(u8, u8)> for Version {
    fn from((major, minor): (u8, u8)) -> Version {
        Version { major, minor }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_sizes() {
        assert_eq!(227, Version::new(1, 0).header_size());
        assert_eq!(227, Version::new(1, 1).header_size());
        assert_eq!(227, Version::new(1, 2).header_size());
        assert_eq!(235, Version::new(1, 3).header_size());
        assert_eq!(375, Version::new(1, 4).header_size());
    }

    #[test]
    fn unsupported() {
        assert!(Version::new(1, 4).verify_supported().is_ok());
        assert!(matches!(
            Version::new(2, 0).verify_supported(),
            Err(Error::UnsupportedVersion(_))
        ));
    }

    #[test]
    fn display() {
        assert_eq!("1.3", Version::new(1, 3).to_string());
    }
}
