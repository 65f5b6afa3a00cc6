use crate::Result;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Write};

/// A raw variable length record, as stored between the header and the point records.
#[derive(Clone, Debug, Default, PartialEq)]
#[allow(missing_docs)]
pub struct Vlr {
    pub reserved: u16,
    pub user_id: [u8; 16],
    pub record_id: u16,
    pub record_length_after_header: u16,
    pub description: [u8; 32],
    pub data: Vec<u8>,
}

impl Vlr {
    /// The size of a vlr's header, i.e. everything but its data.
    pub const HEADER_SIZE: u16 = 54;

    /// Reads a raw VLR.
    ///
    /// Exactly `record_length_after_header` bytes of data are read; a source that ends before
    /// then is an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::Cursor;
    /// use las2ply::raw::Vlr;
    /// let mut cursor = Cursor::new(Vec::new());
    /// Vlr::default().write_to(&mut cursor).unwrap();
    /// cursor.set_position(0);
    /// let vlr = Vlr::read_from(cursor).unwrap();
    /// ```
    pub fn read_from<R: Read>(mut read: R) -> Result<Vlr> {
        let reserved = read.read_u16::<LittleEndian>()?;
        let mut user_id = [0; 16];
        read.read_exact(&mut user_id)?;
        let record_id = read.read_u16::<LittleEndian>()?;
        let record_length_after_header = read.read_u16::<LittleEndian>()?;
        let mut description = [0; 32];
        read.read_exact(&mut description)?;
        let mut data = vec![0; usize::from(record_length_after_header)];
        read.read_exact(&mut data)?;
        Ok(Vlr {
            reserved,
            user_id,
            record_id,
            record_length_after_header,
            description,
            data,
        })
    }

    /// Writes a raw VLR.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::Cursor;
    /// use las2ply::raw::Vlr;
    /// let mut cursor = Cursor::new(Vec::new());
    /// Vlr::default().write_to(&mut cursor).unwrap();
    /// assert_eq!(54, cursor.into_inner().len());
    /// ```
    pub fn write_to<W: Write>(&self, mut write: W) -> Result<()> {
        write.write_u16::<LittleEndian>(self.reserved)?;
        write.write_all(&self.user_id)?;
        write.write_u16::<LittleEndian>(self.record_id)?;
        write.write_u16::<LittleEndian>(self.record_length_after_header)?;
        write.write_all(&self.description)?;
        write.write_all(&self.data)?;
        Ok(())
    }

    /// Returns the total number of bytes this vlr occupies in a file.
    ///
    /// # Examples
    ///
    /// ```
    /// use las2ply::raw::Vlr;
    /// let vlr = Vlr { record_length_after_header: 10, data: vec![0; 10], ..Default::default() };
    /// assert_eq!(64, vlr.size_in_file());
    /// ```
    pub fn size_in_file(&self) -> u64 {
        u64::from(Vlr::HEADER_SIZE) + u64::from(self.record_length_after_header)
    }
}
