//! Variable length records are used to store additional metadata not defined in the header.
//!
//! "Regular" vlrs are stored right after the header, before the point records. The coordinate
//! reference system usually lives here. Nothing in a vlr changes how points are decoded, so they
//! are kept for inspection only.

use crate::{raw, utils::AsLasStr};

/// A variable length record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vlr {
    /// The user that created this record.
    ///
    /// This value is often an official, "registered" user_id, such as "LASF_Spec" or
    /// "LASF_Projection".
    pub user_id: String,

    /// This value specifies the type of record, and depends on the user id.
    pub record_id: u16,

    /// Textual description of these data.
    pub description: String,

    /// The data themselves.
    pub data: Vec<u8>,
}

impl Vlr {
    /// Creates a vlr from a raw vlr.
    ///
    /// # Examples
    ///
    /// ```
    /// use las2ply::{Vlr, raw};
    /// let raw_vlr = raw::Vlr { user_id: *b"LASF_Spec\0\0\0\0\0\0\0", ..Default::default() };
    /// let vlr = Vlr::new(raw_vlr);
    /// assert_eq!("LASF_Spec", vlr.user_id);
    /// ```
    pub fn new(raw_vlr: raw::Vlr) -> Vlr {
        Vlr {
            user_id: raw_vlr.user_id.as_las_string(),
            record_id: raw_vlr.record_id,
            description: raw_vlr.description.as_las_string(),
            data: raw_vlr.data,
        }
    }

    /// Converts this vlr to a raw vlr.
    ///
    /// Strings too long for their fields are cut, and data longer than `u16::MAX` bytes is cut
    /// as well, since a regular vlr can't hold more.
    ///
    /// # Examples
    ///
    /// ```
    /// use las2ply::Vlr;
    /// let raw_vlr = Vlr { data: vec![1, 2, 3], ..Default::default() }.into_raw();
    /// assert_eq!(3, raw_vlr.record_length_after_header);
    /// ```
    pub fn into_raw(self) -> raw::Vlr {
        let mut data = self.data;
        data.truncate(usize::from(u16::MAX));
        raw::Vlr {
            reserved: 0,
            user_id: crate::utils::las_bytes(&self.user_id),
            record_id: self.record_id,
            record_length_after_header: data.len() as u16,
            description: crate::utils::las_bytes(&self.description),
            data,
        }
    }
}
