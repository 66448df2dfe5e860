#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// A text modifier, i.e., a style other than a color.
///
/// Each modifier has a fixed pair of SGR parameters, one for enabling and
/// one for disabling the modifier. Bold and dim share the parameter for
/// disabling them, since terminals treat them as two settings of the same
/// font weight.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "prettychalk.style")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Modifier {
    Reset,
    Bold,
    Dim,
    Italic,
    Underline,
    Overline,
    Inverse,
    Hidden,
    Strikethrough,
}

impl Modifier {
    /// All modifiers in declaration order.
    pub const ALL: [Modifier; 9] = [
        Modifier::Reset,
        Modifier::Bold,
        Modifier::Dim,
        Modifier::Italic,
        Modifier::Underline,
        Modifier::Overline,
        Modifier::Inverse,
        Modifier::Hidden,
        Modifier::Strikethrough,
    ];
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Modifier {
    /// Get the SGR parameter for enabling this modifier.
    pub const fn enable_sgr(&self) -> u8 {
        use self::Modifier::*;

        match self {
            Reset => 0,
            Bold => 1,
            Dim => 2,
            Italic => 3,
            Underline => 4,
            Overline => 53,
            Inverse => 7,
            Hidden => 8,
            Strikethrough => 9,
        }
    }

    /// Get the SGR parameter for disabling this modifier.
    pub const fn disable_sgr(&self) -> u8 {
        use self::Modifier::*;

        match self {
            Reset => 0,
            Bold => 22,
            Dim => 22,
            Italic => 23,
            Underline => 24,
            Overline => 55,
            Inverse => 27,
            Hidden => 28,
            Strikethrough => 29,
        }
    }

    /// Get this modifier's name as used by style chains.
    pub const fn name(&self) -> &'static str {
        use self::Modifier::*;

        match self {
            Reset => "reset",
            Bold => "bold",
            Dim => "dim",
            Italic => "italic",
            Underline => "underline",
            Overline => "overline",
            Inverse => "inverse",
            Hidden => "hidden",
            Strikethrough => "strikethrough",
        }
    }

    /// Get a debug representation.  <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("Modifier.{:?}", self)
    }
}
