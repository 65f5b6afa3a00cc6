use crate::{Error, Result, Version};
use std::fmt;

const COMPRESSED_BIT: u8 = 0x80;

/// A point data record format.
///
/// The format code decides the size of each point record and where (if anywhere) its color is.
///
/// | Code | Length | Color offset | Gps time | Waveform | Since |
/// | ---- | ------ | ------------ | -------- | -------- | ----- |
/// | 0 | 20 | | | | 1.0 |
/// | 1 | 28 | | yes | | 1.0 |
/// | 2 | 26 | 20 | | | 1.2 |
/// | 3 | 34 | 28 | yes | | 1.2 |
/// | 4 | 57 | | yes | yes | 1.3 |
/// | 5 | 63 | 28 | yes | yes | 1.3 |
/// | 6 | 30 | | yes | | 1.4 |
/// | 7 | 36 | 30 | yes | | 1.4 |
/// | 8 | 38 | 30 | yes | | 1.4 |
/// | 9 | 59 | | yes | yes | 1.4 |
/// | 10 | 67 | 30 | yes | yes | 1.4 |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Format(u8);

impl Format {
    /// Creates a format from its code.
    ///
    /// Codes with the high bit set (laszip-compressed data) are not supported.
    ///
    /// # Examples
    ///
    /// ```
    /// use las2ply::point::Format;
    /// assert!(Format::new(0).is_ok());
    /// assert!(Format::new(10).is_ok());
    /// assert!(Format::new(11).is_err());
    /// assert!(Format::new(131).is_err());
    /// ```
    pub fn new(code: u8) -> Result<Format> {
        if code & COMPRESSED_BIT == 0 && code <= 10 {
            Ok(Format(code))
        } else {
            Err(Error::UnsupportedPointFormat(code))
        }
    }

    /// Returns this format's code.
    pub fn to_u8(self) -> u8 {
        self.0
    }

    /// Does this format use the las 1.4 point layout?
    ///
    /// # Examples
    ///
    /// ```
    /// use las2ply::point::Format;
    /// assert!(!Format::new(5).unwrap().is_extended());
    /// assert!(Format::new(6).unwrap().is_extended());
    /// ```
    pub fn is_extended(&self) -> bool {
        self.0 >= 6
    }

    /// Does this format have a gps time field?
    pub fn has_gps_time(&self) -> bool {
        self.0 != 0 && self.0 != 2
    }

    /// Does this format have color fields?
    ///
    /// # Examples
    ///
    /// ```
    /// use las2ply::point::Format;
    /// assert!(!Format::new(0).unwrap().has_color());
    /// assert!(Format::new(2).unwrap().has_color());
    /// ```
    pub fn has_color(&self) -> bool {
        matches!(self.0, 2 | 3 | 5 | 7 | 8 | 10)
    }

    /// Does this format carry a waveform packet?
    pub fn has_waveform(&self) -> bool {
        matches!(self.0, 4 | 5 | 9 | 10)
    }

    /// Does this format carry a near infrared channel?
    pub fn has_nir(&self) -> bool {
        matches!(self.0, 8 | 10)
    }

    /// The byte offset of the red channel within a point record, if this format has color.
    ///
    /// Green and blue follow red, two bytes each.
    ///
    /// # Examples
    ///
    /// ```
    /// use las2ply::point::Format;
    /// assert_eq!(None, Format::new(1).unwrap().color_offset());
    /// assert_eq!(Some(20), Format::new(2).unwrap().color_offset());
    /// assert_eq!(Some(28), Format::new(3).unwrap().color_offset());
    /// ```
    pub fn color_offset(&self) -> Option<usize> {
        if !self.has_color() {
            None
        } else if self.is_extended() {
            Some(30)
        } else if self.has_gps_time() {
            Some(28)
        } else {
            Some(20)
        }
    }

    /// The length of a standard point record in this format.
    ///
    /// Records may be longer than this; the rest are extra bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use las2ply::point::Format;
    /// assert_eq!(20, Format::new(0).unwrap().len());
    /// assert_eq!(67, Format::new(10).unwrap().len());
    /// ```
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> u16 {
        let mut len = if self.is_extended() { 30 } else { 20 };
        if self.has_gps_time() && !self.is_extended() {
            len += 8;
        }
        if self.has_color() {
            len += 6;
        }
        if self.has_nir() {
            len += 2;
        }
        if self.has_waveform() {
            len += 29;
        }
        len
    }

    /// The first las version that defines this format.
    ///
    /// # Examples
    ///
    /// ```
    /// use las2ply::{Version, point::Format};
    /// assert_eq!(Version::new(1, 2), Format::new(3).unwrap().minimum_version());
    /// ```
    pub fn minimum_version(&self) -> Version {
        match self.0 {
            0 | 1 => Version::new(1, 0),
            2 | 3 => Version::new(1, 2),
            4 | 5 => Version::new(1, 3),
            _ => Version::new(1, 4),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "point format {}", self.0)
    }
}
