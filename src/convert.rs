//! The las to ply pipeline.
//!
//! The whole input is decoded before the output is touched, so an input that can't be decoded
//! never leaves a ply file behind.

use crate::{Reader, Result, ply};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// What a conversion produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    /// The number of vertices written.
    pub number_of_points: usize,

    /// Whether the colors came from the las file, as opposed to being filled in white.
    pub has_color: bool,

    /// Where the ply file was written.
    pub output: PathBuf,
}

/// Converts the las file at `input` to an ascii ply file at `output`.
///
/// # Examples
///
/// ```no_run
/// let summary = las2ply::convert("points.las", "points.ply").unwrap();
/// println!("{} points", summary.number_of_points);
/// ```
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<Summary> {
    let input = input.as_ref();
    let output = output.as_ref();

    info!("reading las file: {}", input.display());
    let reader = Reader::from_path(input)?;
    let header = reader.header();
    debug!(
        "las {}, {}, {} points, generated by '{}' on {}",
        header.version(),
        header.point_format(),
        header.number_of_points(),
        header.generating_software(),
        header
            .date()
            .map(|date| date.to_string())
            .unwrap_or_else(|| "an unknown date".to_string()),
    );
    if !header.guid().is_nil() {
        debug!("project id: {}", header.guid());
    }
    let cloud = reader.read_cloud()?;
    if !cloud.has_color() {
        info!("the point format has no color, writing all points white");
    }
    if !cloud.is_empty() {
        let bounds = cloud.bounds();
        debug!(
            "bounds: ({}, {}, {}) to ({}, {}, {})",
            bounds.min.x, bounds.min.y, bounds.min.z, bounds.max.x, bounds.max.y, bounds.max.z
        );
    }

    info!("writing ply file: {}", output.display());
    ply::write_to_path(&cloud, output)?;
    Ok(Summary {
        number_of_points: cloud.len(),
        has_color: cloud.has_color(),
        output: output.to_path_buf(),
    })
}

/// Returns the path a ply file is written to when none is given: the input with a `.ply`
/// extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use las2ply::default_output_path;
/// assert_eq!(Path::new("data/points.ply"), default_output_path("data/points.las"));
/// assert_eq!(Path::new("points.ply"), default_output_path("points"));
/// ```
pub fn default_output_path<P: AsRef<Path>>(input: P) -> PathBuf {
    input.as_ref().with_extension("ply")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_path_replaces_last_extension() {
        assert_eq!(
            PathBuf::from("tile.copc.ply"),
            default_output_path("tile.copc.las")
        );
        assert_eq!(PathBuf::from("/tmp/a.ply"), default_output_path("/tmp/a.LAS"));
    }

    #[test]
    fn missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.ply");
        assert!(matches!(
            convert(dir.path().join("missing.las"), &output),
            Err(crate::Error::Io(_))
        ));
        assert!(!output.exists());
    }
}
