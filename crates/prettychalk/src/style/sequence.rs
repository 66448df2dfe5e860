use super::{Layer, Level, Modifier};
use crate::termco::Color;

/// Wrap the SGR parameters in a complete ANSI escape sequence.
///
/// ```
/// # use prettychalk::style::esc;
/// assert_eq!(esc(1), "\x1b[1m");
/// assert_eq!(esc("38;5;196"), "\x1b[38;5;196m");
/// ```
pub fn esc(params: impl std::fmt::Display) -> String {
    format!("\x1b[{}m", params)
}

/// A pair of ANSI escape sequences, one for enabling a style and one for
/// disabling it again.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ControlSequence {
    open: String,
    close: String,
}

impl ControlSequence {
    /// Get the escape sequence that enables the style.
    pub fn open(&self) -> &str {
        &self.open
    }

    /// Get the escape sequence that disables the style.
    pub fn close(&self) -> &str {
        &self.close
    }
}

/// A single style instruction.
///
/// A directive either is a text [`Modifier`] or a [`Color`] for the
/// foreground or background layer. Modifiers have fixed escape sequences.
/// The sequence for enabling a color depends on the [`Level`] it is rendered
/// at, whereas the sequence for disabling it only depends on the layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Directive {
    Modifier(Modifier),
    Color(Layer, Color),
}

impl Directive {
    /// Create a new directive setting the foreground color.
    pub fn foreground(color: impl Into<Color>) -> Self {
        Self::Color(Layer::Foreground, color.into())
    }

    /// Create a new directive setting the background color.
    pub fn background(color: impl Into<Color>) -> Self {
        Self::Color(Layer::Background, color.into())
    }

    /// Cap this directive's color to the given level. Modifiers are returned
    /// as is.
    pub fn cap(&self, level: Level) -> Self {
        match *self {
            Self::Modifier(_) => *self,
            Self::Color(layer, color) => Self::Color(layer, color.cap(level)),
        }
    }

    /// Resolve this directive to the control sequence for the given level.
    ///
    /// ```
    /// # use prettychalk::style::{Directive, Level, Modifier};
    /// # use prettychalk::termco::Rgb;
    /// let orange = Directive::background(Rgb::new(255, 165, 0));
    /// let sequence = orange.sequence(Level::Ansi256);
    /// assert_eq!(sequence.open(), "\x1b[48;5;214m");
    /// assert_eq!(sequence.close(), "\x1b[49m");
    ///
    /// let bold = Directive::from(Modifier::Bold).sequence(Level::Ansi256);
    /// assert_eq!(bold.open(), "\x1b[1m");
    /// assert_eq!(bold.close(), "\x1b[22m");
    /// ```
    pub fn sequence(&self, level: Level) -> ControlSequence {
        match self.cap(level) {
            Self::Modifier(modifier) => ControlSequence {
                open: esc(modifier.enable_sgr()),
                close: esc(modifier.disable_sgr()),
            },
            Self::Color(layer, color) => ControlSequence {
                open: color.display(layer).to_string(),
                close: esc(layer.default_sgr()),
            },
        }
    }
}

impl From<Modifier> for Directive {
    fn from(value: Modifier) -> Self {
        Self::Modifier(value)
    }
}

#[cfg(test)]
mod test {
    use super::{esc, Directive};
    use crate::style::{Layer, Level, Modifier};
    use crate::termco::{AnsiColor, Color, Rgb};

    #[test]
    fn test_esc() {
        assert_eq!(esc(0), "\x1b[0m");
        assert_eq!(esc("48;2;1;2;3"), "\x1b[48;2;1;2;3m");
    }

    #[test]
    fn test_modifier_sequence() {
        for level in [Level::Ansi16, Level::TrueColor] {
            let underline = Directive::from(Modifier::Underline).sequence(level);
            assert_eq!(underline.open(), "\x1b[4m");
            assert_eq!(underline.close(), "\x1b[24m");
        }

        let overline = Directive::from(Modifier::Overline).sequence(Level::Ansi16);
        assert_eq!(overline.open(), "\x1b[53m");
        assert_eq!(overline.close(), "\x1b[55m");
    }

    #[test]
    fn test_color_sequence() {
        let red = Directive::foreground(Rgb::new(255, 0, 0));
        let bg_red = Directive::background(Rgb::new(255, 0, 0));

        let expected = [
            (Level::TrueColor, "\x1b[38;2;255;0;0m", "\x1b[48;2;255;0;0m"),
            (Level::Ansi256, "\x1b[38;5;196m", "\x1b[48;5;196m"),
            (Level::Ansi16, "\x1b[91m", "\x1b[101m"),
        ];

        for (level, fg, bg) in expected {
            let sequence = red.sequence(level);
            assert_eq!(sequence.open(), fg);
            assert_eq!(sequence.close(), "\x1b[39m");

            let sequence = bg_red.sequence(level);
            assert_eq!(sequence.open(), bg);
            assert_eq!(sequence.close(), "\x1b[49m");
        }

        let indexed = Directive::foreground(208_u8);
        assert_eq!(indexed.sequence(Level::TrueColor).open(), "\x1b[38;5;208m");
        assert_eq!(indexed.sequence(Level::Ansi16).open(), "\x1b[91m");

        let ansi = Directive::background(AnsiColor::Blue);
        assert_eq!(ansi.sequence(Level::TrueColor).open(), "\x1b[44m");
        assert_eq!(ansi.sequence(Level::Ansi16).open(), "\x1b[44m");
    }

    #[test]
    fn test_ansi_background_bounds() {
        let levels = [
            Level::NoColors,
            Level::Ansi16,
            Level::Ansi256,
            Level::TrueColor,
        ];

        for level in levels {
            let black = Directive::Color(Layer::Background, Color::Ansi16(AnsiColor::Black));
            assert_eq!(black.sequence(level).open(), "\x1b[40m");

            let white = Directive::Color(Layer::Background, Color::Ansi16(AnsiColor::BrightWhite));
            assert_eq!(white.sequence(level).open(), "\x1b[107m");
            assert_eq!(white.sequence(level).close(), "\x1b[49m");
        }

        let indexed = Directive::background(Color::Ansi256(250));
        assert_eq!(indexed.sequence(Level::Ansi16).open(), "\x1b[40m");
        assert_eq!(indexed.sequence(Level::Ansi256).open(), "\x1b[48;5;250m");
    }

    #[test]
    fn test_cap() {
        let rgb = Directive::foreground(Rgb::new(0, 0, 255));
        assert_eq!(rgb.cap(Level::Ansi256), Directive::foreground(21_u8));
        assert_eq!(rgb.cap(Level::TrueColor), rgb);

        let bold = Directive::from(Modifier::Bold);
        assert_eq!(bold.cap(Level::Ansi16), bold);
    }
}
