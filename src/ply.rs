//! Write ascii ply.
//!
//! Every file gets the same header, with one `vertex` element holding float coordinates and
//! `uchar` colors:
//!
//! ```text
//! ply
//! format ascii 1.0
//! element vertex <N>
//! property float x
//! property float y
//! property float z
//! property uchar red
//! property uchar green
//! property uchar blue
//! end_header
//! ```
//!
//! followed by one `<x> <y> <z> <red> <green> <blue>` line per point. Coordinates are written
//! with six digits after the decimal point. Points without color are written white.
//!
//! # Failure
//!
//! [write_to_path] writes into a temporary file next to the destination and renames it into
//! place only after every line has been written and flushed. If anything fails, the temporary
//! file is removed and the destination is left as it was, so a ply file never declares more
//! vertices than it holds.

use crate::{Error, Point, PointCloud, Result, Rgb8, color};
use log::debug;
use ply_rs::{
    ply::{
        Addable, DefaultElement, ElementDef, Encoding, Header, PropertyDef, PropertyType,
        ScalarType,
    },
    writer::Writer as HeaderWriter,
};
use std::{
    fs,
    io::{self, BufWriter, Write},
    path::Path,
};

const PROPERTIES: [(&str, ScalarType); 6] = [
    ("x", ScalarType::Float),
    ("y", ScalarType::Float),
    ("z", ScalarType::Float),
    ("red", ScalarType::UChar),
    ("green", ScalarType::UChar),
    ("blue", ScalarType::UChar),
];

/// The ascii ply header for `count` vertices.
fn vertex_header(count: usize) -> Header {
    let mut element = ElementDef::new("vertex".to_string());
    element.count = count;
    for (name, scalar) in PROPERTIES {
        element.properties.add(PropertyDef::new(
            name.to_string(),
            PropertyType::Scalar(scalar),
        ));
    }
    let mut header = Header::new();
    header.encoding = Encoding::Ascii;
    header.elements.add(element);
    header
}

/// One line of a ply file.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    /// The x coordinate.
    pub x: f64,
    /// The y coordinate.
    pub y: f64,
    /// The z coordinate.
    pub z: f64,
    /// The 8-bit color.
    pub color: Rgb8,
}

impl From<&Point> for Vertex {
    fn from(point: &Point) -> Vertex {
        Vertex {
            x: point.x,
            y: point.y,
            z: point.z,
            color: color::normalize(point.color),
        }
    }
}

/// Writes ascii ply to any `Write`.
///
/// ```
/// use las2ply::{Point, PointCloud, ply::Writer};
/// let mut cloud = PointCloud::new(false);
/// cloud.push(Point { x: 1., y: 2., z: 3., color: None }).unwrap();
///
/// let mut writer = Writer::new(Vec::new());
/// writer.write_cloud(&cloud).unwrap();
/// let text = String::from_utf8(writer.into_inner()).unwrap();
/// assert!(text.ends_with("end_header\n1.000000 2.000000 3.000000 255 255 255\n"));
/// ```
#[derive(Debug)]
pub struct Writer<W: Write> {
    write: W,
}

impl<W: Write> Writer<W> {
    /// Creates a new writer.
    ///
    /// This does *not* wrap the `Write` in a `BufWriter`.
    pub fn new(write: W) -> Writer<W> {
        Writer { write }
    }

    /// Writes a header and one line per point.
    ///
    /// The vertex count in the header is the length of `cloud`.
    pub fn write_cloud(&mut self, cloud: &PointCloud) -> io::Result<()> {
        self.write_header(cloud.len())?;
        for point in cloud {
            self.write_vertex(&Vertex::from(point))?;
        }
        self.write.flush()
    }

    fn write_header(&mut self, count: usize) -> io::Result<()> {
        let header = vertex_header(count);
        let _ = HeaderWriter::<DefaultElement>::new().write_header(&mut self.write, &header)?;
        Ok(())
    }

    fn write_vertex(&mut self, vertex: &Vertex) -> io::Result<()> {
        writeln!(
            self.write,
            "{:.6} {:.6} {:.6} {} {} {}",
            vertex.x, vertex.y, vertex.z, vertex.color.red, vertex.color.green, vertex.color.blue
        )
    }

    /// Consumes this writer, returning the underlying `Write`.
    pub fn into_inner(self) -> W {
        self.write
    }
}

/// Writes a point cloud to a ply file, replacing any existing file only on success.
///
/// # Examples
///
/// ```
/// use las2ply::{PointCloud, ply};
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join("empty.ply");
/// ply::write_to_path(&PointCloud::new(false), &path).unwrap();
/// assert!(std::fs::read_to_string(&path).unwrap().contains("element vertex 0\n"));
/// ```
pub fn write_to_path<P: AsRef<Path>>(cloud: &PointCloud, path: P) -> Result<()> {
    let path = path.as_ref();
    let encode = |source: io::Error| Error::Encode {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    let _ = builder.prefix(".las2ply-").suffix(".ply.tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = builder.permissions(fs::Permissions::from_mode(0o644));
    }
    let mut temp = builder.tempfile_in(dir).map_err(encode)?;
    debug!("writing {} vertices to {}", cloud.len(), temp.path().display());
    {
        let mut writer = Writer::new(BufWriter::new(temp.as_file_mut()));
        writer.write_cloud(cloud).map_err(encode)?;
    }
    temp.as_file().sync_all().map_err(encode)?;
    let _ = temp.persist(path).map_err(|err| encode(err.error))?;
    Ok(())
}
