//! Raw structures that map directly onto structures as defined in the las format specifications.
//!
//! In general, these structures are "dumb", meaning that they do the least amount of validity
//! checking. The one exception is the file signature, which [Header::read_from] checks before
//! reading anything else:
//!
//! ```
//! use std::io::Cursor;
//! use las2ply::{Error, raw};
//! let result = raw::Header::read_from(Cursor::new(b"PLY\n".to_vec()));
//! assert!(matches!(result, Err(Error::NotALasFile(_))));
//! ```
//!
//! The validated versions, e.g. [crate::Header] over [Header], are what the rest of the crate
//! works with.

mod header;
mod point;
mod vlr;

pub use self::header::{Evlr, Header, LargeFile};
pub use self::point::Point;
pub use self::vlr::Vlr;

/// The file magic number used for all las files.
pub const LASF: [u8; 4] = *b"LASF";
