//! Point colors, as stored in las and as written to ply.
//!
//! Las stores each channel as a `u16`; ply gets a `u8`. Channels are assumed to use the full
//! 16-bit range, so `65535` maps to `255`. Files that store 8-bit values in the 16-bit fields
//! come out nearly black; no attempt is made to detect them.

const LAS_CHANNEL_MAX: f64 = u16::MAX as f64;
const PLY_CHANNEL_MAX: f64 = u8::MAX as f64;

/// A RGB color value, as stored in a las point record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub red: u16,

    /// Green channel.
    pub green: u16,

    /// Blue channel.
    pub blue: u16,
}

/// An 8-bit RGB color, as written to ply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb8 {
    /// Red channel.
    pub red: u8,

    /// Green channel.
    pub green: u8,

    /// Blue channel.
    pub blue: u8,
}

impl Color {
    /// Creates a new color.
    ///
    /// # Examples
    ///
    /// ```
    /// use las2ply::Color;
    /// let color = Color::new(1, 2, 3);
    /// assert_eq!(1, color.red);
    /// assert_eq!(2, color.green);
    /// assert_eq!(3, color.blue);
    /// ```
    pub fn new(red: u16, green: u16, blue: u16) -> Color {
        Color { red, green, blue }
    }
}

impl Rgb8 {
    /// The color used for points without color.
    pub const WHITE: Rgb8 = Rgb8 {
        red: u8::MAX,
        green: u8::MAX,
        blue: u8::MAX,
    };

    /// Creates a new 8-bit color.
    pub fn new(red: u8, green: u8, blue: u8) -> Rgb8 {
        Rgb8 { red, green, blue }
    }
}

impl From<Color> for Rgb8 {
    fn from(color: Color) -> Rgb8 {
        Rgb8 {
            red: channel(color.red),
            green: channel(color.green),
            blue: channel(color.blue),
        }
    }
}

impl Default for Rgb8 {
    fn default() -> Rgb8 {
        Rgb8::WHITE
    }
}

/// Resolves a point's optional las color into the 8-bit color written to ply.
///
/// Missing colors become white.
///
/// # Examples
///
/// ```
/// use las2ply::{Color, Rgb8, color::normalize};
/// assert_eq!(Rgb8::WHITE, normalize(None));
/// assert_eq!(Rgb8::new(255, 128, 0), normalize(Some(Color::new(65535, 32768, 0))));
/// ```
pub fn normalize(color: Option<Color>) -> Rgb8 {
    color.map(Rgb8::from).unwrap_or(Rgb8::WHITE)
}

fn channel(value: u16) -> u8 {
    (f64::from(value) / LAS_CHANNEL_MAX * PLY_CHANNEL_MAX)
        .round()
        .clamp(0., PLY_CHANNEL_MAX) as u8
}
