#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use crate::termco::Color;
use crate::util::{Env, Environment};

/// The targeted display layer: Foreground or background.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "prettychalk.style")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// The foreground or text layer.
    Foreground,
    /// The background layer.
    Background,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Layer {
    /// Determine the offset for this layer.
    ///
    /// The offset is added to the SGR parameter values for foreground colors
    /// and therefore zero for [`Layer::Foreground`].
    pub fn offset(&self) -> u8 {
        match self {
            Self::Foreground => 0,
            Self::Background => 10,
        }
    }

    /// Determine the SGR parameter for restoring this layer's default color.
    pub fn default_sgr(&self) -> u8 {
        39 + self.offset()
    }
}

/// The color capability level of terminal output.
///
/// This enumeration captures the maximum color fidelity a terminal supports.
/// Levels are ordered, with [`Level::NoColors`] being the smallest and
/// [`Level::TrueColor`] being the largest level. Styles are rendered at one
/// level, with colors exceeding that level downsampled with
/// [`Color::cap`](crate::termco::Color::cap).
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, ord, module = "prettychalk.style")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    /// No colors and no other styles either
    #[default]
    NoColors,
    /// The 16 ANSI colors
    Ansi16,
    /// 8-bit indexed colors including the ANSI colors
    Ansi256,
    /// 24-bit RGB colors
    TrueColor,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Level {
    /// Determine the level for terminal output based on environment
    /// variables.
    ///
    /// This method honors `FORCE_COLOR` with values `0` through `3` before
    /// inspecting `COLORTERM` and `TERM`. Any other non-empty `FORCE_COLOR`
    /// disables colors.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_environment() -> Self {
        detect_level()
    }

    /// Determine the level for terminal output based on environment
    /// variables.
    ///
    /// This method honors `FORCE_COLOR` with values `0` through `3` before
    /// inspecting `COLORTERM` and `TERM`. Any other non-empty `FORCE_COLOR`
    /// disables colors.
    #[cfg(not(feature = "pyffi"))]
    pub fn from_environment() -> Self {
        detect_level()
    }

    /// Determine whether this level suffices for rendering the color as is,
    /// without downsampling. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "covers")]
    pub fn py_covers(&self, color: Color) -> bool {
        self.covers(color)
    }

    /// Get a debug representation. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("Level.{:?}", self)
    }
}

impl Level {
    /// Determine whether this level suffices for rendering the color as is,
    /// without downsampling.
    pub fn covers(&self, color: impl Into<Color>) -> bool {
        Level::from(color.into()) <= *self
    }

    const fn from_bits(bits: u8) -> Self {
        match bits {
            0 => Self::NoColors,
            1 => Self::Ansi16,
            2 => Self::Ansi256,
            _ => Self::TrueColor,
        }
    }

    const fn bits(&self) -> u8 {
        *self as u8
    }
}

impl From<&Color> for Level {
    fn from(value: &Color) -> Self {
        match value {
            Color::Ansi16(_) => Self::Ansi16,
            Color::Ansi256(_) => Self::Ansi256,
            Color::Rgb(_) => Self::TrueColor,
        }
    }
}

impl From<Color> for Level {
    fn from(value: Color) -> Self {
        Level::from(&value)
    }
}

// ----------------------------------------------------------------------------------------------------------

/// A shared, mutable cell holding a [`Level`].
///
/// Cloning a cell does not copy the level but creates another handle to the
/// same cell. Hence, setting the level through one handle changes it for all
/// handles. The cell uses relaxed atomics, i.e., the last write wins, and
/// coordinating concurrent writers is up to the caller.
#[derive(Clone, Debug, Default)]
pub struct LevelCell(Arc<AtomicU8>);

impl LevelCell {
    /// Create a new cell with the given level.
    pub fn new(level: Level) -> Self {
        Self(Arc::new(AtomicU8::new(level.bits())))
    }

    /// Get the current level.
    pub fn get(&self) -> Level {
        Level::from_bits(self.0.load(Ordering::Relaxed))
    }

    /// Replace the current level.
    pub fn set(&self, level: Level) {
        let previous = Level::from_bits(self.0.swap(level.bits(), Ordering::Relaxed));
        if previous != level {
            tracing::debug!(?previous, ?level, "changed color level");
        }
    }

    /// Determine whether both cells are handles to the same level.
    pub fn is_shared_with(&self, other: &LevelCell) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

fn detect_level() -> Level {
    let level = level_from_environment(&Env::default());
    tracing::debug!(?level, "detected color level from environment");
    level
}

// A non-empty FORCE_COLOR decides on its own, with unknown values disabling
// colors. Otherwise, a 256color TERM wins over any COLORTERM.
pub(crate) fn level_from_environment(env: &impl Environment) -> Level {
    if let Ok(force) = env.read("FORCE_COLOR") {
        match force.as_str() {
            "" => (),
            "1" => return Level::Ansi16,
            "2" => return Level::Ansi256,
            "3" => return Level::TrueColor,
            _ => return Level::NoColors,
        }
    }

    let mut level = Level::NoColors;

    if let Some(colorterm) = env.read_lowercase("COLORTERM") {
        if colorterm.contains("truecolor") || colorterm.contains("24bit") {
            level = Level::TrueColor;
        } else if !colorterm.is_empty() {
            level = Level::Ansi16;
        }
    }

    if env
        .read_lowercase("TERM")
        .is_some_and(|term| term.contains("256color"))
    {
        level = Level::Ansi256;
    }

    level
}
