use crate::{
    Error, Result, Version,
    feature::{Evlrs, LargeFiles, Waveforms},
    raw::LASF,
};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Write};

/// A las public header block, field for field.
///
/// Fields only present in some versions are `Option`s (or version-gated structs) and are read and
/// written according to [Header::version].
#[derive(Clone, Debug, PartialEq)]
pub struct Header {
    /// Always "LASF".
    pub file_signature: [u8; 4],

    /// The flight line or merge source, zero if unassigned.
    pub file_source_id: u16,

    /// Bit field of global properties (gps time type, waveform location, wkt).
    pub global_encoding: u16,

    /// The project id, stored in the byte order of a Microsoft GUID.
    pub guid: [u8; 16],

    /// The las version the file claims to follow.
    pub version: Version,

    /// The hardware system or the operation that produced the file.
    pub system_identifier: [u8; 32],

    /// The software that produced the file.
    pub generating_software: [u8; 32],

    /// GMT day of the year the file was created, January 1 is day 1.
    pub file_creation_day_of_year: u16,

    /// Four digit year the file was created.
    pub file_creation_year: u16,

    /// The size of this header block, including any padding past the standard fields.
    pub header_size: u16,

    /// The byte offset from the start of the file to the first point record.
    pub offset_to_point_data: u32,

    /// The number of variable length records between the header and the points.
    pub number_of_variable_length_records: u32,

    /// The point data record format code.
    ///
    /// The two high bits are not part of the code; laszip sets the high bit for compressed data.
    pub point_data_format_id: u8,

    /// The size, in bytes, of one point record.
    pub point_data_record_length: u16,

    /// The legacy 32-bit point count.
    ///
    /// In las 1.4 this may be zero, with the real count in [LargeFile].
    pub number_of_point_records: u32,

    /// The legacy per-return point counts.
    pub number_of_points_by_return: [u32; 5],

    #[allow(missing_docs)]
    pub x_scale_factor: f64,
    #[allow(missing_docs)]
    pub y_scale_factor: f64,
    #[allow(missing_docs)]
    pub z_scale_factor: f64,

    #[allow(missing_docs)]
    pub x_offset: f64,
    #[allow(missing_docs)]
    pub y_offset: f64,
    #[allow(missing_docs)]
    pub z_offset: f64,

    #[allow(missing_docs)]
    pub max_x: f64,
    #[allow(missing_docs)]
    pub min_x: f64,
    #[allow(missing_docs)]
    pub max_y: f64,
    #[allow(missing_docs)]
    pub min_y: f64,
    #[allow(missing_docs)]
    pub max_z: f64,
    #[allow(missing_docs)]
    pub min_z: f64,

    /// **las 1.3 and 1.4**: Byte offset of the waveform data packet record, if any.
    pub start_of_waveform_data_packet_record: Option<u64>,

    /// **las 1.4**: Where the extended variable length records are.
    pub evlr: Option<Evlr>,

    /// **las 1.4**: 64-bit point counts.
    pub large_file: Option<LargeFile>,

    /// Bytes between the end of the standard fields and `header_size`.
    pub padding: Vec<u8>,
}

/// The extended variable length record fields of a las 1.4 header.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Evlr {
    /// Byte offset of the first evlr.
    pub start_of_first_evlr: u64,

    /// Number of evlrs after the point records.
    pub number_of_evlrs: u32,
}

/// The 64-bit point counts of a las 1.4 header.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LargeFile {
    /// The total number of point records.
    pub number_of_point_records: u64,

    /// The point counts for returns one through fifteen.
    pub number_of_points_by_return: [u64; 15],
}

impl Header {
    /// Reads a raw header from a `Read`.
    ///
    /// The signature is checked first: anything but "LASF", including a source too short to hold
    /// a signature at all, is [Error::NotALasFile]. The version is checked next, since it decides
    /// the layout of the rest of the header.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::Cursor;
    /// use las2ply::raw::Header;
    /// let mut cursor = Cursor::new(Vec::new());
    /// Header::default().write_to(&mut cursor).unwrap();
    /// cursor.set_position(0);
    /// let header = Header::read_from(cursor).unwrap();
    /// ```
    pub fn read_from<R: Read>(mut read: R) -> Result<Header> {
        let mut signature = Vec::with_capacity(LASF.len());
        let _ = (&mut read)
            .take(LASF.len() as u64)
            .read_to_end(&mut signature)?;
        if signature != LASF {
            return Err(Error::NotALasFile(signature));
        }
        let file_source_id = read.read_u16::<LittleEndian>()?;
        let global_encoding = read.read_u16::<LittleEndian>()?;
        let mut guid = [0; 16];
        read.read_exact(&mut guid)?;
        let version_major = read.read_u8()?;
        let version_minor = read.read_u8()?;
        let version = Version::new(version_major, version_minor).verify_supported()?;
        let mut system_identifier = [0; 32];
        read.read_exact(&mut system_identifier)?;
        let mut generating_software = [0; 32];
        read.read_exact(&mut generating_software)?;
        let file_creation_day_of_year = read.read_u16::<LittleEndian>()?;
        let file_creation_year = read.read_u16::<LittleEndian>()?;
        let header_size = read.read_u16::<LittleEndian>()?;
        let offset_to_point_data = read.read_u32::<LittleEndian>()?;
        let number_of_variable_length_records = read.read_u32::<LittleEndian>()?;
        let point_data_format_id = read.read_u8()?;
        let point_data_record_length = read.read_u16::<LittleEndian>()?;
        let number_of_point_records = read.read_u32::<LittleEndian>()?;
        let mut number_of_points_by_return = [0; 5];
        for n in &mut number_of_points_by_return {
            *n = read.read_u32::<LittleEndian>()?;
        }
        let x_scale_factor = read.read_f64::<LittleEndian>()?;
        let y_scale_factor = read.read_f64::<LittleEndian>()?;
        let z_scale_factor = read.read_f64::<LittleEndian>()?;
        let x_offset = read.read_f64::<LittleEndian>()?;
        let y_offset = read.read_f64::<LittleEndian>()?;
        let z_offset = read.read_f64::<LittleEndian>()?;
        let max_x = read.read_f64::<LittleEndian>()?;
        let min_x = read.read_f64::<LittleEndian>()?;
        let max_y = read.read_f64::<LittleEndian>()?;
        let min_y = read.read_f64::<LittleEndian>()?;
        let max_z = read.read_f64::<LittleEndian>()?;
        let min_z = read.read_f64::<LittleEndian>()?;
        let start_of_waveform_data_packet_record = if version.supports::<Waveforms>() {
            match read.read_u64::<LittleEndian>()? {
                0 => None,
                n => Some(n),
            }
        } else {
            None
        };
        let evlr = if version.supports::<Evlrs>() {
            Evlr::read_from(&mut read)?.into_option()
        } else {
            None
        };
        let large_file = if version.supports::<LargeFiles>() {
            Some(LargeFile::read_from(&mut read)?)
        } else {
            None
        };
        let padding = if header_size > version.header_size() {
            let mut bytes = vec![0; usize::from(header_size - version.header_size())];
            read.read_exact(&mut bytes)?;
            bytes
        } else {
            Vec::new()
        };
        Ok(Header {
            file_signature: LASF,
            file_source_id,
            global_encoding,
            guid,
            version,
            system_identifier,
            generating_software,
            file_creation_day_of_year,
            file_creation_year,
            header_size,
            offset_to_point_data,
            number_of_variable_length_records,
            point_data_format_id,
            point_data_record_length,
            number_of_point_records,
            number_of_points_by_return,
            x_scale_factor,
            y_scale_factor,
            z_scale_factor,
            x_offset,
            y_offset,
            z_offset,
            max_x,
            min_x,
            max_y,
            min_y,
            max_z,
            min_z,
            start_of_waveform_data_packet_record,
            evlr,
            large_file,
            padding,
        })
    }

    /// Returns true if this raw header is for compressed las data.
    ///
    /// # Examples
    ///
    /// ```
    /// use las2ply::raw::Header;
    /// let mut header = Header::default();
    /// assert!(!header.is_compressed());
    /// header.point_data_format_id = 131;
    /// assert!(header.is_compressed());
    /// ```
    pub fn is_compressed(&self) -> bool {
        self.point_data_format_id & 0x80 == 0x80
    }

    /// Returns the number of point records, preferring the 64-bit count when the legacy count is
    /// zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use las2ply::raw::{Header, LargeFile};
    /// let header = Header {
    ///     number_of_point_records: 0,
    ///     large_file: Some(LargeFile { number_of_point_records: 42, ..Default::default() }),
    ///     ..Default::default()
    /// };
    /// assert_eq!(42, header.number_of_points());
    /// ```
    pub fn number_of_points(&self) -> u64 {
        match self.large_file {
            Some(large_file) if self.number_of_point_records == 0 => {
                large_file.number_of_point_records
            }
            _ => u64::from(self.number_of_point_records),
        }
    }

    /// Writes a raw header to a `Write`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::Cursor;
    /// use las2ply::raw::Header;
    /// let mut cursor = Cursor::new(Vec::new());
    /// Header::default().write_to(&mut cursor).unwrap();
    /// assert_eq!(227, cursor.into_inner().len());
    /// ```
    pub fn write_to<W: Write>(&self, mut write: W) -> Result<()> {
        write.write_all(&self.file_signature)?;
        write.write_u16::<LittleEndian>(self.file_source_id)?;
        write.write_u16::<LittleEndian>(self.global_encoding)?;
        write.write_all(&self.guid)?;
        write.write_u8(self.version.major)?;
        write.write_u8(self.version.minor)?;
        write.write_all(&self.system_identifier)?;
        write.write_all(&self.generating_software)?;
        write.write_u16::<LittleEndian>(self.file_creation_day_of_year)?;
        write.write_u16::<LittleEndian>(self.file_creation_year)?;
        write.write_u16::<LittleEndian>(self.header_size)?;
        write.write_u32::<LittleEndian>(self.offset_to_point_data)?;
        write.write_u32::<LittleEndian>(self.number_of_variable_length_records)?;
        write.write_u8(self.point_data_format_id)?;
        write.write_u16::<LittleEndian>(self.point_data_record_length)?;
        write.write_u32::<LittleEndian>(self.number_of_point_records)?;
        for n in &self.number_of_points_by_return {
            write.write_u32::<LittleEndian>(*n)?;
        }
        write.write_f64::<LittleEndian>(self.x_scale_factor)?;
        write.write_f64::<LittleEndian>(self.y_scale_factor)?;
        write.write_f64::<LittleEndian>(self.z_scale_factor)?;
        write.write_f64::<LittleEndian>(self.x_offset)?;
        write.write_f64::<LittleEndian>(self.y_offset)?;
        write.write_f64::<LittleEndian>(self.z_offset)?;
        write.write_f64::<LittleEndian>(self.max_x)?;
        write.write_f64::<LittleEndian>(self.min_x)?;
        write.write_f64::<LittleEndian>(self.max_y)?;
        write.write_f64::<LittleEndian>(self.min_y)?;
        write.write_f64::<LittleEndian>(self.max_z)?;
        write.write_f64::<LittleEndian>(self.min_z)?;
        if self.version.supports::<Waveforms>() {
            write.write_u64::<LittleEndian>(
                self.start_of_waveform_data_packet_record.unwrap_or(0),
            )?;
        }
        if self.version.supports::<Evlrs>() {
            let evlr = self.evlr.unwrap_or_default();
            write.write_u64::<LittleEndian>(evlr.start_of_first_evlr)?;
            write.write_u32::<LittleEndian>(evlr.number_of_evlrs)?;
        }
        if self.version.supports::<LargeFiles>() {
            let large_file = self.large_file.unwrap_or_default();
            write.write_u64::<LittleEndian>(large_file.number_of_point_records)?;
            for n in &large_file.number_of_points_by_return {
                write.write_u64::<LittleEndian>(*n)?;
            }
        }
        write.write_all(&self.padding)?;
        Ok(())
    }
}

impl Default for Header {
    fn default() -> Header {
        let version = Version::new(1, 2);
        Header {
            file_signature: LASF,
            file_source_id: 0,
            global_encoding: 0,
            guid: [0; 16],
            version,
            system_identifier: [0; 32],
            generating_software: [0; 32],
            file_creation_day_of_year: 0,
            file_creation_year: 0,
            header_size: version.header_size(),
            offset_to_point_data: u32::from(version.header_size()),
            number_of_variable_length_records: 0,
            point_data_format_id: 0,
            point_data_record_length: 20,
            number_of_point_records: 0,
            number_of_points_by_return: [0; 5],
            x_scale_factor: 0.001,
            y_scale_factor: 0.001,
            z_scale_factor: 0.001,
            x_offset: 0.,
            y_offset: 0.,
            z_offset: 0.,
            max_x: 0.,
            min_x: 0.,
            max_y: 0.,
            min_y: 0.,
            max_z: 0.,
            min_z: 0.,
            start_of_waveform_data_packet_record: None,
            evlr: None,
            large_file: None,
            padding: Vec::new(),
        }
    }
}

impl Evlr {
    fn read_from<R: Read>(mut read: R) -> Result<Evlr> {
        Ok(Evlr {
            start_of_first_evlr: read.read_u64::<LittleEndian>()?,
            number_of_evlrs: read.read_u32::<LittleEndian>()?,
        })
    }

    fn into_option(self) -> Option<Evlr> {
        if self.start_of_first_evlr == 0 && self.number_of_evlrs == 0 {
            None
        } else {
            Some(self)
        }
    }
}

impl LargeFile {
    fn read_from<R: Read>(mut read: R) -> Result<LargeFile> {
        let number_of_point_records = read.read_u64::<LittleEndian>()?;
        let mut number_of_points_by_return = [0; 15];
        for n in &mut number_of_points_by_return {
            *n = read.read_u64::<LittleEndian>()?;
        }
        Ok(LargeFile {
            number_of_point_records,
            number_of_points_by_return,
        })
    }
}
