//! Read las points.
//!
//! `Reader::from_path` wraps the file in a `BufReader`:
//!
//! ```no_run
//! use las2ply::Reader;
//! let reader = Reader::from_path("points.las").unwrap();
//! ```
//!
//! Anything that implements `Read + Seek` works too, e.g. bytes already in memory. Use
//! `Reader::read_point` to read one point, `Reader::points` to get an iterator over
//! `Result<Point>`, or `Reader::read_cloud` to read everything into a [PointCloud]:
//!
//! ```
//! use std::io::Cursor;
//! use las2ply::{Reader, raw};
//!
//! let raw_header = raw::Header { number_of_point_records: 1, ..Default::default() };
//! let mut bytes = Vec::new();
//! raw_header.write_to(&mut bytes).unwrap();
//! raw::Point { x: 1000, ..Default::default() }
//!     .write_to(&mut bytes, Default::default(), 20)
//!     .unwrap();
//!
//! let reader = Reader::new(Cursor::new(bytes)).unwrap();
//! let cloud = reader.read_cloud().unwrap();
//! assert_eq!(1, cloud.len());
//! assert_eq!(1., cloud.points()[0].x);
//! ```
//!
//! All of the checks that can be made against the header are made when the reader is created:
//! a reader that was created successfully has a header whose point records fit in the source.

use crate::{Error, Header, Point, PointCloud, Result, error::Section, raw};
use log::debug;
use std::{
    fs::File,
    io::{self, BufReader, ErrorKind, Read, Seek, SeekFrom},
    path::Path,
};

/// Reads LAS data.
#[derive(Debug)]
pub struct Reader<R: Read + Seek> {
    read: R,
    header: Header,
    index: u64,
    buffer: Vec<u8>,
}

/// An iterator over of the points in a `Reader`.
///
/// This struct is generally created by calling `points()` on `Reader`.
#[derive(Debug)]
pub struct PointIterator<'a, R: Read + Seek> {
    reader: &'a mut Reader<R>,
}

impl Reader<BufReader<File>> {
    /// Creates a new reader from a path.
    ///
    /// The underlying `File` is wrapped in a `BufReader` for performance reasons.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Reader<BufReader<File>>> {
        File::open(path)
            .map_err(Error::from)
            .and_then(|file| Reader::new(BufReader::new(file)))
    }
}

impl<R: Read + Seek> Reader<R> {
    /// Creates a new reader.
    ///
    /// The source must be positioned at the start of the las data. The header and vlrs are read,
    /// and the declared point records are checked against the number of bytes in the source.
    pub fn new(mut read: R) -> Result<Reader<R>> {
        let start = read.stream_position()?;
        let available = read.seek(SeekFrom::End(0))?.saturating_sub(start);
        let _ = read.seek(SeekFrom::Start(start))?;

        let header = Header::read_from(&mut read, start, available)?;
        let record_length = u64::from(header.point_data_record_length());
        let offset_to_point_data = u64::from(header.offset_to_point_data());
        let end = header
            .number_of_points()
            .checked_mul(record_length)
            .and_then(|len| len.checked_add(offset_to_point_data));
        match end {
            Some(end) if end <= available => {}
            end => {
                return Err(Error::TruncatedData {
                    section: Section::PointRecords,
                    end: end.unwrap_or(u64::MAX),
                    available,
                });
            }
        }
        debug!(
            "{} points of {} bytes each at byte {}",
            header.number_of_points(),
            record_length,
            offset_to_point_data
        );

        let _ = read.seek(SeekFrom::Start(start + offset_to_point_data))?;
        Ok(Reader {
            read,
            buffer: vec![0; usize::from(header.point_data_record_length())],
            header,
            index: 0,
        })
    }

    /// Returns a reference to this reader's header.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Reads a point.
    ///
    /// Returns `Ok(None)` once every declared point has been read.
    pub fn read_point(&mut self) -> Result<Option<Point>> {
        if self.index >= self.header.number_of_points() {
            return Ok(None);
        }
        let index = self.index;
        let filled = read_record(&mut self.read, &mut self.buffer)?;
        if filled < self.buffer.len() {
            let record_length = u64::from(self.header.point_data_record_length());
            let record_start = u64::from(self.header.offset_to_point_data()) + index * record_length;
            return Err(Error::TruncatedData {
                section: Section::Point(index),
                end: record_start + record_length,
                available: record_start + filled as u64,
            });
        }
        self.index += 1;
        let raw_point = raw::Point::from_bytes(&self.buffer, self.header.point_format());
        let point = Point::new(raw_point, self.header.transforms());
        if let Some((axis, value)) = point.non_finite_axis() {
            return Err(Error::NonFiniteCoordinate { index, axis, value });
        }
        Ok(Some(point))
    }

    /// Returns an iterator over this reader's points.
    pub fn points(&mut self) -> PointIterator<'_, R> {
        PointIterator { reader: self }
    }

    /// Reads all of the remaining points into a point cloud.
    ///
    /// Either every declared point is read or an error is returned; there are no partial clouds.
    pub fn read_cloud(mut self) -> Result<PointCloud> {
        let remaining = self.header.number_of_points() - self.index;
        let mut cloud = PointCloud::with_capacity(
            self.header.point_format().has_color(),
            usize::try_from(remaining).unwrap_or(0),
        );
        while let Some(point) = self.read_point()? {
            cloud.push(point)?;
        }
        Ok(cloud)
    }

    /// Consumes this reader, returning the underlying source.
    pub fn into_inner(self) -> R {
        self.read
    }
}

/// Fills as much of `buffer` as the source holds, returning the number of bytes read.
fn read_record<R: Read>(read: &mut R, buffer: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buffer.len() {
        match read.read(&mut buffer[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => {}
            Err(err) => return Err(err),
        }
    }
    Ok(filled)
}

impl<R: Read + Seek> Iterator for PointIterator<'_, R> {
    type Item = Result<Point>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.read_point().transpose()
    }
}
