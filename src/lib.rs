//! Convert [ASPRS LAS](https://www.asprs.org/committee-general/laser-las-file-format-exchange-activities.html)
//! point clouds to ascii [ply](https://paulbourke.net/dataformats/ply/).
//!
//! # Converting
//!
//! The simplest thing is to convert one file to another:
//!
//! ```no_run
//! let summary = las2ply::convert("points.las", "points.ply").unwrap();
//! assert_eq!("points.ply", summary.output.to_str().unwrap());
//! ```
//!
//! # Reading
//!
//! The las decoder reads the header, the variable length records, and the point records straight
//! from their binary layout. Create a `Reader` from a `Path`, or from anything that implements
//! `Read + Seek`:
//!
//! ```no_run
//! use las2ply::Reader;
//! let reader = Reader::from_path("points.las").unwrap();
//! let cloud = reader.read_cloud().unwrap();
//! for point in &cloud {
//!     println!("Point coordinates: ({}, {}, {})", point.x, point.y, point.z);
//!     if let Some(color) = point.color {
//!         println!("Point color: red={}, green={}, blue={}",
//!             color.red,
//!             color.green,
//!             color.blue,
//!         );
//!     }
//! }
//! ```
//!
//! Coordinates are real-world values: las stores them as integers, which are multiplied by the
//! header's scale and added to its offset. Point data formats 0 through 10 are supported;
//! compressed (laz) data is not.
//!
//! # Writing
//!
//! Write a `PointCloud` to anything that implements `Write` with a `ply::Writer`, or to a path
//! with `ply::write_to_path`, which never leaves a half-written file behind.

#![deny(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]

pub mod color;
pub mod feature;
pub mod header;
pub mod ply;
pub mod point;
pub mod raw;
pub mod reader;
pub mod vlr;

mod bounds;
mod cloud;
mod convert;
mod error;
mod transform;
mod utils;
mod vector;
mod version;

pub use crate::{
    bounds::Bounds,
    cloud::PointCloud,
    color::{Color, Rgb8},
    convert::{Summary, convert, default_output_path},
    error::{Error, Section},
    header::Header,
    point::Point,
    reader::Reader,
    transform::Transform,
    vector::Vector,
    version::Version,
    vlr::Vlr,
};

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, Error>;
