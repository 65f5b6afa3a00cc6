use crate::{Version, point::Format};
use std::{fmt, io, path::PathBuf};
use thiserror::Error;

/// Crate-specific error enum.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The file signature was not "LASF".
    #[error("not a las file: the signature must be LASF, found {0:?}")]
    NotALasFile(Vec<u8>),

    /// The declared sizes need more bytes than the source has.
    #[error("{section} is truncated: it needs the data up to byte {end}, but only {available} bytes are available")]
    TruncatedData {
        /// The part of the file that ran out.
        section: Section,
        /// The byte offset (from the start of the file) the section should end at.
        end: u64,
        /// The number of bytes actually available.
        available: u64,
    },

    /// The point data format is not one we know how to decode.
    #[error("point data format {0} is not supported")]
    UnsupportedPointFormat(u8),

    /// The las version is not one we know how to decode.
    #[error("las version {0} is not supported")]
    UnsupportedVersion(Version),

    /// A coordinate was NaN or infinite after applying the scale and offset.
    #[error("point {index} has a non-finite {axis} coordinate ({value})")]
    NonFiniteCoordinate {
        /// The zero-based point index.
        index: u64,
        /// The axis, `'x'`, `'y'` or `'z'`.
        axis: char,
        /// The offending value.
        value: f64,
    },

    /// The header size is smaller than the version requires.
    #[error("the header size is too small: {0}")]
    HeaderSizeTooSmall(u16),

    /// The offset to the point data lies inside the header.
    #[error("the offset to the point data is too small: {0}")]
    OffsetToPointDataTooSmall(u32),

    /// The point data record length is less than the point format demands.
    #[error("{format} (with length {}) cannot have a point data record length of {len}", .format.len())]
    InvalidPointDataRecordLength {
        /// The point format.
        format: Format,
        /// The declared record length.
        len: u16,
    },

    /// A point's color presence differs from the rest of its point cloud.
    #[error("point {index} does not match the color presence of its point cloud (cloud has color: {expected})")]
    ColorMismatch {
        /// The index the point would have had.
        index: usize,
        /// Whether the cloud's points have color.
        expected: bool,
    },

    /// The ply destination could not be created or written.
    #[error("could not write ply data to {}", .path.display())]
    Encode {
        /// The destination path.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// [std::io::Error]
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// The part of a las file a [Error::TruncatedData] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    /// The public header block.
    Header,
    /// The variable length record with this index.
    Vlr(u32),
    /// All of the point records, as declared by the header.
    PointRecords,
    /// The point record with this index.
    Point(u64),
}

impl Error {
    /// Turns an unexpected end of file into [Error::TruncatedData].
    pub(crate) fn truncated_if_eof(self, section: Section, end: u64, available: u64) -> Error {
        match self {
            Error::Io(ref err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                Error::TruncatedData {
                    section,
                    end,
                    available,
                }
            }
            err => err,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Section::Header => write!(f, "the header"),
            Section::Vlr(index) => write!(f, "vlr {}", index),
            Section::PointRecords => write!(f, "the point data"),
            Section::Point(index) => write!(f, "point {}", index),
        }
    }
}
