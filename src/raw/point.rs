//! Raw las point records.

use crate::{Color, Result, point::Format};
use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use std::io::Write;

/// A raw point: the fields of a point record that we decode.
///
/// Every format starts with the three scaled integer coordinates. Where a format has color, it
/// sits at [Format::color_offset]. Everything else in the record (intensity, classification,
/// gps time, waveform packets, extra bytes) is skipped.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// The X, Y, and Z values are stored as long integers.
    ///
    /// They are turned into coordinates by the scale and offset values in the header.
    pub x: i32,
    #[allow(missing_docs)]
    pub y: i32,
    #[allow(missing_docs)]
    pub z: i32,

    /// The color, if the format has one.
    pub color: Option<Color>,
}

impl Point {
    /// Decodes a raw point from one point record.
    ///
    /// `bytes` must hold at least `format.len()` bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use las2ply::raw::Point;
    /// use las2ply::point::Format;
    /// let format = Format::new(0).unwrap();
    /// let mut bytes = vec![0; 20];
    /// bytes[0] = 1;
    /// let point = Point::from_bytes(&bytes, format);
    /// assert_eq!(1, point.x);
    /// assert!(point.color.is_none());
    /// ```
    pub fn from_bytes(bytes: &[u8], format: Format) -> Point {
        let color = format.color_offset().map(|offset| {
            let bytes = &bytes[offset..offset + 6];
            Color {
                red: LittleEndian::read_u16(&bytes[0..2]),
                green: LittleEndian::read_u16(&bytes[2..4]),
                blue: LittleEndian::read_u16(&bytes[4..6]),
            }
        });
        Point {
            x: LittleEndian::read_i32(&bytes[0..4]),
            y: LittleEndian::read_i32(&bytes[4..8]),
            z: LittleEndian::read_i32(&bytes[8..12]),
            color,
        }
    }

    /// Writes one point record of `record_length` bytes, zero-filling every field we don't decode.
    ///
    /// A missing color is written as zeros if the format has color, and a color is dropped if the
    /// format has none.
    ///
    /// # Examples
    ///
    /// ```
    /// use las2ply::raw::Point;
    /// use las2ply::point::Format;
    /// let mut bytes = Vec::new();
    /// Point::default().write_to(&mut bytes, Format::new(3).unwrap(), 34).unwrap();
    /// assert_eq!(34, bytes.len());
    /// ```
    pub fn write_to<W: Write>(&self, mut write: W, format: Format, record_length: u16) -> Result<()> {
        let mut bytes = vec![0; usize::from(record_length.max(format.len()))];
        LittleEndian::write_i32(&mut bytes[0..4], self.x);
        LittleEndian::write_i32(&mut bytes[4..8], self.y);
        LittleEndian::write_i32(&mut bytes[8..12], self.z);
        if let Some(offset) = format.color_offset() {
            let color = self.color.unwrap_or_default();
            let mut field = &mut bytes[offset..offset + 6];
            field.write_u16::<LittleEndian>(color.red)?;
            field.write_u16::<LittleEndian>(color.green)?;
            field.write_u16::<LittleEndian>(color.blue)?;
        }
        write.write_all(&bytes[..usize::from(record_length)])?;
        Ok(())
    }
}
