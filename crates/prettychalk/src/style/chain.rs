#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyAttributeError, prelude::*, types::PyTuple};

use super::{palette, Directive, Level, LevelCell, Modifier};
use crate::core::hex_to_rgb;
use crate::error::ColorFormatError;
use crate::termco::{AnsiColor, Color, Rgb};

/// A chain of terminal styles.
///
/// A style chain comprises an ordered sequence of [`Directive`]s, a handle to
/// a shared [`LevelCell`], and a flag for visibility. Every method that adds
/// a style returns a new chain and leaves the receiver untouched. Since
/// instances are immutable, chains can be stored as themes and arbitrarily
/// reused.
///
/// The directives' order is the order in which styles are applied. It
/// determines the order of escape sequences in rendered text.
///
/// ```
/// # use prettychalk::style::{Level, StyleChain};
/// let chalk = StyleChain::new(Level::TrueColor);
/// let error = chalk.bold().red();
/// let warning = chalk.hex("#FFA500")?;
///
/// assert_eq!(error.paint("Error!"), "\x1b[1m\x1b[31mError!\x1b[39m\x1b[22m");
/// assert_eq!(warning.paint("Warning!"), "\x1b[38;2;255;165;0mWarning!\x1b[39m");
/// # Ok::<(), prettychalk::error::ColorFormatError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyclass(frozen, module = "prettychalk.style"))]
#[derive(Clone, Debug, Default)]
pub struct StyleChain {
    directives: Vec<Directive>,
    level: LevelCell,
    visible: bool,
}

impl StyleChain {
    /// Create a new, empty chain with its own level cell holding the given
    /// level.
    pub fn new(level: Level) -> Self {
        Self::with_level_cell(LevelCell::new(level))
    }

    /// Create a new, empty chain sharing the given level cell.
    pub fn with_level_cell(level: LevelCell) -> Self {
        Self {
            directives: Vec::new(),
            level,
            visible: false,
        }
    }

    /// Get this chain's directives in application order.
    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// Determine whether this chain has been marked as visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Get the level of this chain's level cell.
    pub fn level(&self) -> Level {
        self.level.get()
    }

    /// Update the level of this chain's level cell.
    ///
    /// The cell is shared with the chain this chain was derived from as well
    /// as all chains derived from it. Hence the update is visible to all of
    /// them.
    pub fn set_level(&self, level: Level) {
        self.level.set(level)
    }

    /// Get this chain's level cell.
    pub fn level_cell(&self) -> &LevelCell {
        &self.level
    }

    /// Create a new chain with the given directive appended.
    #[must_use = "method returns a new chain and does not mutate original value"]
    pub fn with_directive(&self, directive: Directive) -> Self {
        let mut directives = Vec::with_capacity(self.directives.len() + 1);
        directives.extend_from_slice(&self.directives);
        directives.push(directive);

        Self {
            directives,
            level: self.level.clone(),
            visible: self.visible,
        }
    }

    /// Create a new chain with the given modifier appended.
    #[must_use = "method returns a new chain and does not mutate original value"]
    pub fn with_modifier(&self, modifier: Modifier) -> Self {
        self.with_directive(Directive::Modifier(modifier))
    }

    /// Create a new chain with the given foreground color appended.
    #[must_use = "method returns a new chain and does not mutate original value"]
    pub fn with_foreground(&self, color: impl Into<Color>) -> Self {
        self.with_directive(Directive::foreground(color))
    }

    /// Create a new chain with the given background color appended.
    #[must_use = "method returns a new chain and does not mutate original value"]
    pub fn with_background(&self, color: impl Into<Color>) -> Self {
        self.with_directive(Directive::background(color))
    }

    /// Create a new chain with the named style appended.
    ///
    /// This method accepts the names of all accessor methods for modifiers
    /// and ANSI colors, e.g., `"underline"`, `"cyan_bright"`, or
    /// `"bg_grey"`. It returns `None` for unknown names.
    pub fn with_style(&self, name: &str) -> Option<Self> {
        palette::lookup(name).map(|directive| self.with_directive(directive))
    }

    /// Create a new chain that renders text even if colors are disabled.
    ///
    /// More precisely, a visible chain renders nothing at all when its level
    /// is [`Level::NoColors`], instead of rendering unstyled text. That makes
    /// it suitable for text that only makes sense when styled.
    #[must_use = "method returns a new chain and does not mutate original value"]
    pub fn visible(&self) -> Self {
        Self {
            directives: self.directives.clone(),
            level: self.level.clone(),
            visible: true,
        }
    }

    /// Create a new chain with the given 8-bit foreground color appended.
    #[must_use = "method returns a new chain and does not mutate original value"]
    pub fn ansi256(&self, code: u8) -> Self {
        self.with_foreground(Color::Ansi256(code))
    }

    /// Create a new chain with the given hashed hexadecimal foreground color
    /// appended.
    pub fn hex(&self, hex: &str) -> Result<Self, ColorFormatError> {
        Ok(self.with_foreground(hex_to_rgb(hex)?))
    }

    /// Create a new chain with the given true foreground color appended.
    #[must_use = "method returns a new chain and does not mutate original value"]
    pub fn rgb(&self, r: u8, g: u8, b: u8) -> Self {
        self.with_foreground(Rgb::new(r, g, b))
    }

    /// Create a new chain with the given 8-bit background color appended.
    #[must_use = "method returns a new chain and does not mutate original value"]
    pub fn bg_ansi256(&self, code: u8) -> Self {
        self.with_background(Color::Ansi256(code))
    }

    /// Create a new chain with the given hashed hexadecimal background color
    /// appended.
    pub fn bg_hex(&self, hex: &str) -> Result<Self, ColorFormatError> {
        Ok(self.with_background(hex_to_rgb(hex)?))
    }

    /// Create a new chain with the given true background color appended.
    #[must_use = "method returns a new chain and does not mutate original value"]
    pub fn bg_rgb(&self, r: u8, g: u8, b: u8) -> Self {
        self.with_background(Rgb::new(r, g, b))
    }
}

macro_rules! modifier_accessors {
    ($($name:ident => $modifier:ident),* $(,)?) => {
        impl StyleChain {
            $(
                #[doc = concat!("Create a new chain with `", stringify!($name), "` appended.")]
                #[must_use = "method returns a new chain and does not mutate original value"]
                pub fn $name(&self) -> Self {
                    self.with_modifier(Modifier::$modifier)
                }
            )*
        }
    };
}

macro_rules! color_accessors {
    ($($name:ident, $bg_name:ident => $color:ident),* $(,)?) => {
        impl StyleChain {
            $(
                #[doc = concat!("Create a new chain with foreground `", stringify!($name), "` appended.")]
                #[must_use = "method returns a new chain and does not mutate original value"]
                pub fn $name(&self) -> Self {
                    self.with_foreground(AnsiColor::$color)
                }

                #[doc = concat!("Create a new chain with background `", stringify!($name), "` appended.")]
                #[must_use = "method returns a new chain and does not mutate original value"]
                pub fn $bg_name(&self) -> Self {
                    self.with_background(AnsiColor::$color)
                }
            )*
        }
    };
}

modifier_accessors! {
    reset => Reset,
    bold => Bold,
    dim => Dim,
    italic => Italic,
    underline => Underline,
    overline => Overline,
    inverse => Inverse,
    hidden => Hidden,
    strikethrough => Strikethrough,
}

color_accessors! {
    black, bg_black => Black,
    red, bg_red => Red,
    green, bg_green => Green,
    yellow, bg_yellow => Yellow,
    blue, bg_blue => Blue,
    magenta, bg_magenta => Magenta,
    cyan, bg_cyan => Cyan,
    white, bg_white => White,
    gray, bg_gray => BrightBlack,
    grey, bg_grey => BrightBlack,
    black_bright, bg_black_bright => BrightBlack,
    red_bright, bg_red_bright => BrightRed,
    green_bright, bg_green_bright => BrightGreen,
    yellow_bright, bg_yellow_bright => BrightYellow,
    blue_bright, bg_blue_bright => BrightBlue,
    magenta_bright, bg_magenta_bright => BrightMagenta,
    cyan_bright, bg_cyan_bright => BrightCyan,
    white_bright, bg_white_bright => BrightWhite,
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl StyleChain {
    /// Create a new, empty chain. Without a level, the level is determined
    /// from the environment. <i class=python-only>Python only!</i>
    #[new]
    #[pyo3(signature = (level=None))]
    pub fn py_new(level: Option<Level>) -> Self {
        Self::new(level.unwrap_or_else(Level::from_environment))
    }

    /// Look up a named style. <i class=python-only>Python only!</i>
    ///
    /// Python only calls this method for attributes that do not exist
    /// otherwise, which makes `chain.red.bold` work.
    pub fn __getattr__(&self, name: &str) -> PyResult<Self> {
        if name == "visible" {
            return Ok(self.visible());
        }

        self.with_style(name)
            .ok_or_else(|| PyAttributeError::new_err(format!("unknown style {:?}", name)))
    }

    /// Get the level. <i class=python-only>Python only!</i>
    #[getter(level)]
    pub fn py_level(&self) -> Level {
        self.level()
    }

    /// Set the level for all chains sharing this chain's level cell. <i
    /// class=python-only>Python only!</i>
    #[setter(level)]
    pub fn py_assign_level(&self, level: Level) {
        self.set_level(level)
    }

    /// Update the level for all chains sharing this chain's level cell. <i
    /// class=python-only>Python only!</i>
    #[pyo3(name = "set_level")]
    pub fn py_set_level(&self, level: Level) {
        self.set_level(level)
    }

    /// Add an 8-bit foreground color. <i class=python-only>Python only!</i>
    #[pyo3(name = "ansi256")]
    pub fn py_ansi256(&self, code: u8) -> Self {
        self.ansi256(code)
    }

    /// Add a hashed hexadecimal foreground color. <i
    /// class=python-only>Python only!</i>
    #[pyo3(name = "hex")]
    pub fn py_hex(&self, hex: &str) -> Result<Self, ColorFormatError> {
        self.hex(hex)
    }

    /// Add a true foreground color. <i class=python-only>Python only!</i>
    #[pyo3(name = "rgb")]
    pub fn py_rgb(&self, red: u8, green: u8, blue: u8) -> Self {
        self.rgb(red, green, blue)
    }

    /// Add an 8-bit background color. <i class=python-only>Python only!</i>
    #[pyo3(name = "bg_ansi256")]
    pub fn py_bg_ansi256(&self, code: u8) -> Self {
        self.bg_ansi256(code)
    }

    /// Add a hashed hexadecimal background color. <i
    /// class=python-only>Python only!</i>
    #[pyo3(name = "bg_hex")]
    pub fn py_bg_hex(&self, hex: &str) -> Result<Self, ColorFormatError> {
        self.bg_hex(hex)
    }

    /// Add a true background color. <i class=python-only>Python only!</i>
    #[pyo3(name = "bg_rgb")]
    pub fn py_bg_rgb(&self, red: u8, green: u8, blue: u8) -> Self {
        self.bg_rgb(red, green, blue)
    }

    /// Render the string representations of the values, separated by `sep`.
    /// <i class=python-only>Python only!</i>
    #[pyo3(signature = (*values, sep = " "))]
    pub fn __call__(&self, values: &Bound<'_, PyTuple>, sep: &str) -> PyResult<String> {
        let values = values
            .iter()
            .map(|value| value.str().map(|s| s.to_string()))
            .collect::<PyResult<Vec<_>>>()?;
        Ok(self.render_with(values, sep))
    }

    /// Get a debug representation. <i class=python-only>Python only!</i>
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

#[cfg(test)]
mod test {
    use super::StyleChain;
    use crate::error::ColorFormatError;
    use crate::style::{Directive, Level, Modifier};
    use crate::termco::{AnsiColor, Color, Rgb};

    #[test]
    fn test_immutability() {
        let chalk = StyleChain::new(Level::TrueColor);
        let red = chalk.red();
        let bold_red = red.bold();

        assert!(chalk.directives().is_empty());
        assert_eq!(red.directives(), &[Directive::foreground(AnsiColor::Red)]);
        assert_eq!(
            bold_red.directives(),
            &[
                Directive::foreground(AnsiColor::Red),
                Directive::from(Modifier::Bold)
            ]
        );
        assert_eq!(red.paint("foo"), "\x1b[31mfoo\x1b[39m");

        let visible = red.visible();
        assert!(visible.is_visible());
        assert!(!red.is_visible());
        assert!(bold_red.visible().bold().is_visible());
    }

    #[test]
    fn test_directive_order() {
        let chalk = StyleChain::new(Level::TrueColor);
        let chain = chalk.underline().bg_green().red_bright().ansi256(99);
        assert_eq!(
            chain.directives(),
            &[
                Directive::from(Modifier::Underline),
                Directive::background(AnsiColor::Green),
                Directive::foreground(AnsiColor::BrightRed),
                Directive::foreground(Color::Ansi256(99)),
            ]
        );
    }

    #[test]
    fn test_colors() -> Result<(), ColorFormatError> {
        let chalk = StyleChain::new(Level::TrueColor);

        assert_eq!(
            chalk.hex("#DEADED")?.directives(),
            &[Directive::foreground(Rgb::new(0xde, 0xad, 0xed))]
        );
        assert_eq!(
            chalk.bg_hex("#abc")?.directives(),
            &[Directive::background(Rgb::new(0xaa, 0xbb, 0xcc))]
        );
        assert_eq!(
            chalk.rgb(1, 2, 3).directives(),
            &[Directive::foreground(Rgb::new(1, 2, 3))]
        );
        assert_eq!(
            chalk.bg_rgb(1, 2, 3).directives(),
            &[Directive::background(Rgb::new(1, 2, 3))]
        );
        assert_eq!(
            chalk.bg_ansi256(255).directives(),
            &[Directive::background(Color::Ansi256(255))]
        );
        assert_eq!(chalk.gray().directives(), chalk.black_bright().directives());
        assert_eq!(chalk.bg_grey().directives(), chalk.bg_black_bright().directives());

        assert_eq!(
            chalk.hex("#GGGGGG").map(|c| c.directives().len()),
            Err(ColorFormatError::InvalidColorFormat("#GGGGGG".to_string()))
        );
        assert!(chalk.bg_hex("red").is_err());
        Ok(())
    }

    #[test]
    fn test_with_style() {
        let chalk = StyleChain::new(Level::Ansi16);
        let styled = chalk
            .with_style("bold")
            .and_then(|c| c.with_style("bg_cyan_bright"));

        assert_eq!(
            styled.as_ref().map(|c| c.directives()),
            Some(chalk.bold().bg_cyan_bright().directives())
        );
        assert!(chalk.with_style("sparkly").is_none());
    }

    #[test]
    fn test_level_propagation() {
        let chalk = StyleChain::new(Level::Ansi16);
        let red = chalk.red();
        assert_eq!(red.level(), Level::Ansi16);
        assert!(red.level_cell().is_shared_with(chalk.level_cell()));

        red.set_level(Level::NoColors);
        assert_eq!(chalk.level(), Level::NoColors);

        let bold = chalk.bold();
        assert_eq!(bold.level(), Level::NoColors);
        bold.set_level(Level::TrueColor);
        assert_eq!(red.level(), Level::TrueColor);

        let independent = StyleChain::new(Level::Ansi256);
        assert_eq!(independent.level(), Level::Ansi256);
        assert_eq!(chalk.level(), Level::TrueColor);

        let sharing = StyleChain::with_level_cell(chalk.level_cell().clone());
        sharing.set_level(Level::Ansi16);
        assert_eq!(red.level(), Level::Ansi16);
    }
}
