//! Terminal color representations.
//!
//! This module offers [`AnsiColor`] for the 16 named terminal colors, [`Rgb`]
//! for 24-bit "true" colors, and [`Color`] as the wrapper used by styles.
//! `Color` has a variant for each of the three terminal color formats, i.e.,
//! ANSI colors, 8-bit indexed colors, and 24-bit RGB colors.
//!
//! Colors never change once created. Adjusting a color to a terminal's
//! capabilities with [`Color::cap`] always produces a new color.
#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{ansi256_to_ansi16, hex_to_rgb, rgb_to_ansi16, rgb_to_ansi256};
use crate::error::{ColorFormatError, OutOfBoundsError};
use crate::style::{Layer, Level};

// ====================================================================================================================
// Ansi Color
// ====================================================================================================================

/// The 16 extended ANSI colors.
///
/// Rust code converts between 8-bit color codes and enumeration variants with
/// [`AnsiColor as
/// TryFrom<u8>`](enum.AnsiColor.html#impl-TryFrom%3Cu8%3E-for-AnsiColor) and
/// [`u8 as
/// From<AnsiColor>`](enum.AnsiColor.html#impl-From%3CAnsiColor%3E-for-u8).
/// [`AnsiColor::sgr`] and [`AnsiColor::try_from_sgr`] convert to and from the
/// SGR parameters for foreground colors, i.e., `30..=37` and `90..=97`.
///
/// The ANSI colors are ordered because they are ordered as indexed colors.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, ord, module = "prettychalk.termco")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnsiColor {
    #[default]
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl AnsiColor {
    /// Get an iterator over all ANSI colors in order.
    pub fn all() -> AnsiColorIterator {
        AnsiColorIterator::new()
    }

    /// Instantiate an ANSI color from the SGR parameter for setting it as
    /// foreground color.
    pub fn try_from_sgr(code: u8) -> Result<Self, OutOfBoundsError> {
        match code {
            30..=37 => Self::try_from(code - 30),
            90..=97 => Self::try_from(code - 90 + 8),
            _ => Err(OutOfBoundsError::new(code, 30..=97)),
        }
    }
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl AnsiColor {
    /// Get the SGR parameter for setting this ANSI color as foreground color.
    ///
    /// The parameter for the background color is 10 larger.
    pub fn sgr(&self) -> u8 {
        let index = *self as u8;
        if index < 8 {
            30 + index
        } else {
            90 + index - 8
        }
    }

    /// Get this ANSI color's name.
    ///
    /// This method returns the snake-cased name used by style chains, e.g.,
    /// `"green_bright"` for [`AnsiColor::BrightGreen`].
    pub fn name(&self) -> &'static str {
        use AnsiColor::*;

        match self {
            Black => "black",
            Red => "red",
            Green => "green",
            Yellow => "yellow",
            Blue => "blue",
            Magenta => "magenta",
            Cyan => "cyan",
            White => "white",
            BrightBlack => "black_bright",
            BrightRed => "red_bright",
            BrightGreen => "green_bright",
            BrightYellow => "yellow_bright",
            BrightBlue => "blue_bright",
            BrightMagenta => "magenta_bright",
            BrightCyan => "cyan_bright",
            BrightWhite => "white_bright",
        }
    }

    /// Get a debug representation. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("AnsiColor.{:?}", self)
    }
}

impl TryFrom<u8> for AnsiColor {
    type Error = OutOfBoundsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let ansi = match value {
            0 => AnsiColor::Black,
            1 => AnsiColor::Red,
            2 => AnsiColor::Green,
            3 => AnsiColor::Yellow,
            4 => AnsiColor::Blue,
            5 => AnsiColor::Magenta,
            6 => AnsiColor::Cyan,
            7 => AnsiColor::White,
            8 => AnsiColor::BrightBlack,
            9 => AnsiColor::BrightRed,
            10 => AnsiColor::BrightGreen,
            11 => AnsiColor::BrightYellow,
            12 => AnsiColor::BrightBlue,
            13 => AnsiColor::BrightMagenta,
            14 => AnsiColor::BrightCyan,
            15 => AnsiColor::BrightWhite,
            _ => return Err(OutOfBoundsError::new(value, 0..=15)),
        };

        Ok(ansi)
    }
}

impl From<AnsiColor> for u8 {
    fn from(value: AnsiColor) -> u8 {
        value as u8
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A helper for iterating over ANSI colors.
///
/// This iterator is fused, i.e., after returning `None` once, it will keep
/// returning `None`. This iterator also is exact, i.e., its `size_hint()`
/// returns the exact number of remaining items.
#[derive(Debug)]
pub struct AnsiColorIterator {
    index: u8,
}

impl AnsiColorIterator {
    fn new() -> Self {
        Self { index: 0 }
    }
}

impl Iterator for AnsiColorIterator {
    type Item = AnsiColor;

    fn next(&mut self) -> Option<Self::Item> {
        let color = AnsiColor::try_from(self.index).ok()?;
        self.index += 1;
        Some(color)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len();
        (remaining, Some(remaining))
    }
}

impl std::iter::ExactSizeIterator for AnsiColorIterator {
    fn len(&self) -> usize {
        16_usize.saturating_sub(self.index as usize)
    }
}

impl std::iter::FusedIterator for AnsiColorIterator {}

// ====================================================================================================================
// Rgb ("True Color")
// ====================================================================================================================

/// A "true," 24-bit RGB color.
///
/// Rust code can create a new true color with [`Rgb::new`] or parse one from
/// hashed hexadecimal notation with [`Rgb as
/// FromStr`](struct.Rgb.html#impl-FromStr-for-Rgb). Its display is the hashed
/// hexadecimal notation again.
///
/// ```
/// # use prettychalk::termco::Rgb;
/// # use prettychalk::error::ColorFormatError;
/// let orange: Rgb = "#FFA500".parse()?;
/// assert_eq!(orange, Rgb::new(255, 165, 0));
/// assert_eq!(orange[1], 165);
/// assert_eq!(format!("{}", orange), "#ffa500");
/// # Ok::<(), ColorFormatError>(())
/// ```
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, module = "prettychalk.termco")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb([u8; 3]);

#[cfg(feature = "pyffi")]
#[pymethods]
impl Rgb {
    /// Create a new true color from its coordinates. <i
    /// class=python-only>Python only!</i>
    #[new]
    pub fn py_new(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b)
    }

    /// Parse a true color from hashed hexadecimal notation. <i
    /// class=python-only>Python only!</i>
    #[staticmethod]
    pub fn from_hex(s: &str) -> Result<Self, ColorFormatError> {
        s.parse()
    }

    /// Get the coordinates. <i class=python-only>Python only!</i>
    pub fn coordinates(&self) -> [u8; 3] {
        self.0
    }

    /// Convert this true color to its debug representation. <i
    /// class=python-only>Python only!</i>
    pub fn __repr__(&self) -> String {
        format!("Rgb({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }

    /// Convert this true color to hashed hexadecimal notation. <i
    /// class=python-only>Python only!</i>
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl Rgb {
    /// Create a new true color from its coordinates.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }
}

impl AsRef<[u8; 3]> for Rgb {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl std::ops::Index<usize> for Rgb {
    type Output = u8;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Rgb(value)
    }
}

impl std::str::FromStr for Rgb {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_rgb(s).map(Rgb)
    }
}

impl core::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = *self.as_ref();
        f.write_fmt(format_args!("#{:02x}{:02x}{:02x}", r, g, b))
    }
}

// ====================================================================================================================
// Color
// ====================================================================================================================

/// A terminal color in one of the three terminal color formats.
///
/// [`Color::Ansi16`] holds one of the 16 ANSI colors, [`Color::Ansi256`] an
/// 8-bit color index, and [`Color::Rgb`] a true color.
///
/// ```
/// # use prettychalk::style::{Layer, Level};
/// # use prettychalk::termco::{AnsiColor, Color, Rgb};
/// let red = Color::from(Rgb::new(255, 0, 0));
/// assert_eq!(red.cap(Level::Ansi256), Color::Ansi256(196));
/// assert_eq!(red.cap(Level::Ansi16), Color::from(AnsiColor::BrightRed));
/// assert_eq!(format!("{}", red.display(Layer::Background)), "\x1b[48;2;255;0;0m");
/// ```
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, module = "prettychalk.termco")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Ansi16(AnsiColor),
    Ansi256(u8),
    Rgb(Rgb),
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Color {
    /// Cap this color to the given level.
    ///
    /// If the level covers the color, this method returns the color as is.
    /// Otherwise, it downsamples the color: true colors become 8-bit colors
    /// for [`Level::Ansi256`], and true colors as well as 8-bit colors become
    /// ANSI colors for [`Level::Ansi16`]. ANSI colors are never downsampled,
    /// not even for [`Level::NoColors`], since that level suppresses all
    /// styles anyway.
    pub fn cap(&self, level: Level) -> Self {
        let capped = match (level, *self) {
            (Level::Ansi16, Self::Rgb(c)) => {
                Self::Ansi16(from_sgr(rgb_to_ansi16(c[0], c[1], c[2])))
            }
            (Level::Ansi16, Self::Ansi256(code)) => Self::Ansi16(from_sgr(ansi256_to_ansi16(code))),
            (Level::Ansi256, Self::Rgb(c)) => Self::Ansi256(rgb_to_ansi256(c[0], c[1], c[2])),
            (_, color) => return color,
        };

        tracing::trace!(from = ?self, to = ?capped, ?level, "downsampled color");
        capped
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

impl Color {
    /// Write this color's SGR parameters for the given layer with the given
    /// formatter.
    pub fn write_sgr_params(
        &self,
        layer: Layer,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Self::Ansi16(color) => write!(f, "{}", color.sgr() + layer.offset()),
            Self::Ansi256(code) => write!(f, "{};5;{}", 38 + layer.offset(), code),
            Self::Rgb(c) => write!(f, "{};2;{};{};{}", 38 + layer.offset(), c[0], c[1], c[2]),
        }
    }

    /// Provide a layer to make this color displayable as a complete ANSI
    /// escape sequence.
    pub fn display(&self, layer: Layer) -> impl std::fmt::Display + '_ {
        LayeredColor { layer, color: self }
    }
}

impl From<AnsiColor> for Color {
    fn from(value: AnsiColor) -> Self {
        Self::Ansi16(value)
    }
}

impl From<u8> for Color {
    fn from(value: u8) -> Self {
        Self::Ansi256(value)
    }
}

impl From<[u8; 3]> for Color {
    fn from(value: [u8; 3]) -> Self {
        Self::Rgb(Rgb(value))
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Self::Rgb(value)
    }
}

// The downsampling functions only produce codes in 30..=37 and 90..=97.
fn from_sgr(code: u8) -> AnsiColor {
    AnsiColor::try_from_sgr(code).unwrap_or_default()
}

struct LayeredColor<'a> {
    layer: Layer,
    color: &'a Color,
}

impl std::fmt::Display for LayeredColor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("\x1b[")?;
        self.color.write_sgr_params(self.layer, f)?;
        f.write_str("m")
    }
}
