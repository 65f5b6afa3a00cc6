//! Helpers for the fixed-size, nul-filled ASCII fields of the las format.

use std::iter;

/// Interprets a nul-filled byte field as a string.
///
/// LAS specifies that all string fields should be ASCII and nul filled, but not all LAS data in
/// the wild follows these rules. Everything from the first nul on is dropped, and invalid UTF-8 is
/// replaced rather than rejected, since these fields are only descriptive.
pub(crate) trait AsLasStr {
    fn as_las_string(&self) -> String;
}

impl AsLasStr for [u8] {
    fn as_las_string(&self) -> String {
        let end = self.iter().position(|&n| n == 0).unwrap_or(self.len());
        String::from_utf8_lossy(&self[..end]).into_owned()
    }
}

/// Fills a fixed-size byte field from a string, nul-padding the rest.
///
/// Strings longer than the field are cut at the field's length.
pub(crate) fn las_bytes<const N: usize>(s: &str) -> [u8; N] {
    let mut bytes = [0; N];
    for (a, b) in bytes.iter_mut().zip(s.bytes().chain(iter::repeat(0))) {
        *a = b;
    }
    bytes
}
