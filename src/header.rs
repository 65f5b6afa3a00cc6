//! A validated las header.
//!
//! The [Header] is decoded from a [raw::Header] and the variable length records that follow it.
//! Decoding checks that the header is consistent with itself (sizes, offsets, point format);
//! checking it against the length of the file is up to the [crate::Reader].

use crate::{
    Bounds, Error, Result, Transform, Vector, Version, Vlr,
    error::Section,
    point::Format,
    raw,
    utils::AsLasStr,
};
use chrono::NaiveDate;
use log::{debug, warn};
use std::io::{Read, Seek, SeekFrom};
use uuid::Uuid;

/// Metadata describing the layout and interpretation of the points.
#[derive(Clone, Debug, PartialEq)]
pub struct Header {
    bounds: Bounds,
    date: Option<NaiveDate>,
    file_source_id: u16,
    generating_software: String,
    guid: Uuid,
    number_of_points: u64,
    offset_to_point_data: u32,
    point_data_record_length: u16,
    point_format: Format,
    system_identifier: String,
    transforms: Vector<Transform>,
    version: Version,
    vlrs: Vec<Vlr>,
}

impl Header {
    /// Creates a validated header from a raw header and its vlrs.
    ///
    /// # Examples
    ///
    /// ```
    /// use las2ply::{Header, raw};
    /// let header = Header::from_raw(raw::Header::default(), Vec::new()).unwrap();
    /// assert_eq!(0, header.number_of_points());
    /// ```
    pub fn from_raw(raw_header: raw::Header, vlrs: Vec<Vlr>) -> Result<Header> {
        let version = raw_header.version.verify_supported()?;
        if raw_header.header_size < version.header_size() {
            return Err(Error::HeaderSizeTooSmall(raw_header.header_size));
        }
        let vlr_len: u64 = vlrs
            .iter()
            .map(|vlr| u64::from(raw::Vlr::HEADER_SIZE) + vlr.data.len() as u64)
            .sum();
        if u64::from(raw_header.offset_to_point_data) < u64::from(raw_header.header_size) + vlr_len
        {
            return Err(Error::OffsetToPointDataTooSmall(
                raw_header.offset_to_point_data,
            ));
        }
        if raw_header.is_compressed() {
            warn!("point data is laszip-compressed, decompress it (e.g. with laszip) first");
        }
        let point_format = Format::new(raw_header.point_data_format_id)?;
        if raw_header.point_data_record_length < point_format.len() {
            return Err(Error::InvalidPointDataRecordLength {
                format: point_format,
                len: raw_header.point_data_record_length,
            });
        }
        if point_format.minimum_version() > version {
            warn!(
                "{} was introduced in las {}, but the file claims to be las {}",
                point_format,
                point_format.minimum_version(),
                version
            );
        }
        Ok(Header {
            number_of_points: raw_header.number_of_points(),
            bounds: Bounds {
                min: Vector::new(raw_header.min_x, raw_header.min_y, raw_header.min_z),
                max: Vector::new(raw_header.max_x, raw_header.max_y, raw_header.max_z),
            },
            date: NaiveDate::from_yo_opt(
                i32::from(raw_header.file_creation_year),
                u32::from(raw_header.file_creation_day_of_year),
            ),
            file_source_id: raw_header.file_source_id,
            generating_software: raw_header.generating_software.as_las_string(),
            guid: Uuid::from_bytes_le(raw_header.guid),
            offset_to_point_data: raw_header.offset_to_point_data,
            point_data_record_length: raw_header.point_data_record_length,
            point_format,
            system_identifier: raw_header.system_identifier.as_las_string(),
            transforms: Vector {
                x: Transform {
                    scale: raw_header.x_scale_factor,
                    offset: raw_header.x_offset,
                },
                y: Transform {
                    scale: raw_header.y_scale_factor,
                    offset: raw_header.y_offset,
                },
                z: Transform {
                    scale: raw_header.z_scale_factor,
                    offset: raw_header.z_offset,
                },
            },
            version,
            vlrs,
        })
    }

    /// Reads the header and vlrs of a las file that begins at `start` and is `available` bytes
    /// long.
    ///
    /// On success the source is positioned right after the last vlr.
    pub(crate) fn read_from<R: Read + Seek>(
        read: &mut R,
        start: u64,
        available: u64,
    ) -> Result<Header> {
        let raw_header = match raw::Header::read_from(&mut *read) {
            Ok(raw_header) => raw_header,
            Err(err) => {
                let end = expected_header_size(read, start);
                return Err(err.truncated_if_eof(Section::Header, end, available));
            }
        };
        debug!(
            "las {} header: {} bytes, {} vlrs, point format {} with {} byte records",
            raw_header.version,
            raw_header.header_size,
            raw_header.number_of_variable_length_records,
            raw_header.point_data_format_id,
            raw_header.point_data_record_length,
        );
        if let Some(evlr) = raw_header.evlr {
            debug!(
                "skipping {} evlrs at byte {}",
                evlr.number_of_evlrs, evlr.start_of_first_evlr
            );
        }

        let mut position = u64::from(raw_header.header_size);
        let mut vlrs = Vec::new();
        for index in 0..raw_header.number_of_variable_length_records {
            let raw_vlr = match raw::Vlr::read_from(&mut *read) {
                Ok(raw_vlr) => raw_vlr,
                Err(err) => {
                    let end = expected_vlr_end(read, start, position);
                    return Err(err.truncated_if_eof(Section::Vlr(index), end, available));
                }
            };
            position += raw_vlr.size_in_file();
            let vlr = Vlr::new(raw_vlr);
            debug!(
                "vlr {}: {} {} ({} bytes) {}",
                index,
                vlr.user_id,
                vlr.record_id,
                vlr.data.len(),
                vlr.description
            );
            vlrs.push(vlr);
        }
        Header::from_raw(raw_header, vlrs)
    }

    /// Returns the las version.
    pub fn version(&self) -> Version {
        self.version
    }

    /// Returns the point format.
    ///
    /// # Examples
    ///
    /// ```
    /// use las2ply::{Header, raw};
    /// let raw_header = raw::Header {
    ///     point_data_format_id: 2,
    ///     point_data_record_length: 26,
    ///     ..Default::default()
    /// };
    /// let header = Header::from_raw(raw_header, Vec::new()).unwrap();
    /// assert!(header.point_format().has_color());
    /// ```
    pub fn point_format(&self) -> Format {
        self.point_format
    }

    /// Returns the number of points the header declares.
    pub fn number_of_points(&self) -> u64 {
        self.number_of_points
    }

    /// Returns the byte offset of the first point record from the start of the file.
    pub fn offset_to_point_data(&self) -> u32 {
        self.offset_to_point_data
    }

    /// Returns the size of each point record, which may be larger than the point format's
    /// standard length.
    pub fn point_data_record_length(&self) -> u16 {
        self.point_data_record_length
    }

    /// Returns the scale and offset for each axis.
    pub fn transforms(&self) -> &Vector<Transform> {
        &self.transforms
    }

    /// Returns the bounds declared by the header.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Returns the file creation date, if it is set and valid.
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Returns the file source id.
    pub fn file_source_id(&self) -> u16 {
        self.file_source_id
    }

    /// Returns the generating software.
    pub fn generating_software(&self) -> &str {
        &self.generating_software
    }

    /// Returns the system identifier.
    pub fn system_identifier(&self) -> &str {
        &self.system_identifier
    }

    /// Returns the project id.
    pub fn guid(&self) -> Uuid {
        self.guid
    }

    /// Returns the variable length records.
    pub fn vlrs(&self) -> &[Vlr] {
        &self.vlrs
    }
}

/// Works out how long the header should have been, from whatever of it is there.
///
/// The version (bytes 24 and 25) decides the standard size, and the header size field (bytes 94
/// and 95) may ask for more.
fn expected_header_size<R: Read + Seek>(read: &mut R, start: u64) -> u64 {
    let version = peek::<_, 2>(read, start + 24)
        .map(|[major, minor]| Version::new(major, minor))
        .unwrap_or_default();
    let standard = if version.is_supported() {
        version.header_size()
    } else {
        Version::new(1, 0).header_size()
    };
    let declared = peek::<_, 2>(read, start + 94)
        .map(u16::from_le_bytes)
        .unwrap_or(0);
    u64::from(standard.max(declared))
}

/// Works out where the vlr at `position` should have ended.
///
/// The record length after header sits at bytes 20 and 21 of the vlr.
fn expected_vlr_end<R: Read + Seek>(read: &mut R, start: u64, position: u64) -> u64 {
    let data_len = peek::<_, 2>(read, start + position + 20)
        .map(u16::from_le_bytes)
        .unwrap_or(0);
    position + u64::from(raw::Vlr::HEADER_SIZE) + u64::from(data_len)
}

fn peek<R: Read + Seek, const N: usize>(read: &mut R, position: u64) -> Option<[u8; N]> {
    let _ = read.seek(SeekFrom::Start(position)).ok()?;
    let mut bytes = [0; N];
    read.read_exact(&mut bytes).ok()?;
    Some(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn bytes(raw_header: &raw::Header, raw_vlrs: &[raw::Vlr]) -> Vec<u8> {
        let mut bytes = Vec::new();
        raw_header.write_to(&mut bytes).unwrap();
        for raw_vlr in raw_vlrs {
            raw_vlr.write_to(&mut bytes).unwrap();
        }
        bytes
    }

    fn read(bytes: Vec<u8>) -> Result<Header> {
        let available = bytes.len() as u64;
        Header::read_from(&mut Cursor::new(bytes), 0, available)
    }

    #[test]
    fn from_raw() {
        let raw_header = raw::Header {
            x_scale_factor: 0.01,
            y_offset: 5.,
            number_of_point_records: 42,
            file_creation_year: 2017,
            file_creation_day_of_year: 32,
            system_identifier: crate::utils::las_bytes("EXTRACTION"),
            ..Default::default()
        };
        let header = Header::from_raw(raw_header, Vec::new()).unwrap();
        assert_eq!(42, header.number_of_points());
        assert_eq!(0.01, header.transforms().x.scale);
        assert_eq!(5., header.transforms().y.offset);
        assert_eq!(NaiveDate::from_ymd_opt(2017, 2, 1), header.date());
        assert_eq!("EXTRACTION", header.system_identifier());
        assert_eq!(Version::new(1, 2), header.version());
    }

    #[test]
    fn guid_is_stored_little_endian() {
        let raw_header = raw::Header {
            guid: [
                0x33, 0x22, 0x11, 0x00, 0x55, 0x44, 0x77, 0x66, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd,
                0xee, 0xff,
            ],
            ..Default::default()
        };
        let header = Header::from_raw(raw_header, Vec::new()).unwrap();
        assert_eq!(
            "00112233-4455-6677-8899-aabbccddeeff",
            header.guid().hyphenated().to_string()
        );
        assert!(
            Header::from_raw(raw::Header::default(), Vec::new())
                .unwrap()
                .guid()
                .is_nil()
        );
    }

    #[test]
    fn large_file_point_count() {
        let raw_header = raw::Header {
            version: Version::new(1, 4),
            header_size: 375,
            offset_to_point_data: 375,
            number_of_point_records: 0,
            large_file: Some(raw::LargeFile {
                number_of_point_records: 5_000_000_000,
                ..Default::default()
            }),
            ..Default::default()
        };
        let header = Header::from_raw(raw_header, Vec::new()).unwrap();
        assert_eq!(5_000_000_000, header.number_of_points());
    }

    #[test]
    fn header_size_too_small() {
        let raw_header = raw::Header {
            header_size: 200,
            ..Default::default()
        };
        assert!(matches!(
            Header::from_raw(raw_header, Vec::new()),
            Err(Error::HeaderSizeTooSmall(200))
        ));
    }

    #[test]
    fn offset_to_point_data_inside_vlrs() {
        let raw_header = raw::Header {
            number_of_variable_length_records: 1,
            offset_to_point_data: 227 + 10,
            ..Default::default()
        };
        assert!(matches!(
            Header::from_raw(raw_header, vec![Vlr::default()]),
            Err(Error::OffsetToPointDataTooSmall(237))
        ));
    }

    #[test]
    fn record_length_too_short() {
        let raw_header = raw::Header {
            point_data_format_id: 3,
            point_data_record_length: 30,
            ..Default::default()
        };
        assert!(matches!(
            Header::from_raw(raw_header, Vec::new()),
            Err(Error::InvalidPointDataRecordLength { len: 30, .. })
        ));
    }

    #[test]
    fn unsupported_point_format() {
        let raw_header = raw::Header {
            point_data_format_id: 11,
            ..Default::default()
        };
        assert!(matches!(
            Header::from_raw(raw_header, Vec::new()),
            Err(Error::UnsupportedPointFormat(11))
        ));
    }

    #[test]
    fn reads_vlrs() {
        let raw_vlr = Vlr {
            user_id: "LASF_Projection".to_string(),
            record_id: 2112,
            description: String::new(),
            data: vec![1, 2, 3, 4],
        }
        .into_raw();
        let raw_header = raw::Header {
            number_of_variable_length_records: 1,
            offset_to_point_data: 227 + 58,
            ..Default::default()
        };
        let header = read(bytes(&raw_header, &[raw_vlr])).unwrap();
        assert_eq!(1, header.vlrs().len());
        assert_eq!("LASF_Projection", header.vlrs()[0].user_id);
        assert_eq!(vec![1, 2, 3, 4], header.vlrs()[0].data);
    }

    #[test]
    fn truncated_header() {
        let mut bytes = bytes(&raw::Header::default(), &[]);
        bytes.truncate(150);
        assert!(matches!(
            read(bytes),
            Err(Error::TruncatedData {
                section: Section::Header,
                end: 227,
                available: 150
            })
        ));
    }

    #[test]
    fn truncated_1_4_header() {
        let raw_header = raw::Header {
            version: Version::new(1, 4),
            header_size: 375,
            offset_to_point_data: 375,
            ..Default::default()
        };
        let mut bytes = bytes(&raw_header, &[]);
        bytes.truncate(300);
        assert!(matches!(
            read(bytes),
            Err(Error::TruncatedData {
                section: Section::Header,
                end: 375,
                available: 300
            })
        ));
    }

    #[test]
    fn truncated_vlr() {
        let raw_vlr = Vlr {
            data: vec![0; 100],
            ..Default::default()
        }
        .into_raw();
        let raw_header = raw::Header {
            number_of_variable_length_records: 2,
            offset_to_point_data: 227 + 2 * 154,
            ..Default::default()
        };
        let mut bytes = bytes(&raw_header, &[raw_vlr.clone(), raw_vlr]);
        bytes.truncate(227 + 154 + 60);
        assert!(matches!(
            read(bytes),
            Err(Error::TruncatedData {
                section: Section::Vlr(1),
                end: 535,
                available: 441
            })
        ));
    }
}
