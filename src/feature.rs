//! Programmatically determine whether a las version carries a header field.
//!
//! Features are structures that implement the [Feature] trait, and are usually
//! checked via [Version::supports]:
//!
//! ```
//! use las2ply::feature::Waveforms;
//! use las2ply::Version;
//!
//! assert!(!Version::new(1, 2).supports::<Waveforms>());
//! assert!(Version::new(1, 3).supports::<Waveforms>());
//! ```

use crate::Version;

const MAJOR: u8 = 1;

/// A trait implemented by each feature.
pub trait Feature {
    /// Is this feature supported by this version?
    ///
    /// # Examples
    ///
    /// ```
    /// use las2ply::feature::{Feature, LargeFiles};
    /// use las2ply::Version;
    /// assert!(!LargeFiles::is_supported_by(Version::new(1, 3)));
    /// assert!(LargeFiles::is_supported_by(Version::new(1, 4)));
    /// ```
    fn is_supported_by(version: Version) -> bool;
}

macro_rules! features {
    (   $(
            $(#[$meta:meta])*
            $name:ident ($($versions:expr),+);
        )+
    ) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug)]
            pub struct $name {}

            impl Feature for $name {
                fn is_supported_by(version: Version) -> bool {
                    [$($versions),+]
                        .into_iter()
                        .map(|minor| Version::new(MAJOR, minor))
                        .any(|v| version == v)
                }
            }
        )+
    }
}

features! {
    /// Does the header carry the start of the waveform data packet record?
    Waveforms(3, 4);
    /// Does the header carry the start and count of extended variable length records?
    Evlrs(4);
    /// Does the header carry 64-bit point counts?
    LargeFiles(4);
}
