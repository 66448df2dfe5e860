//! # Pretty 🖍️ Chalk
//!
//! Prettychalk styles terminal output with chainable, immutable styles.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. Enable the `pyffi` feature for a version that also covers the Python
extension module."
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**."
)]
//!
//!
//! ## 1. Overview
//!
//! Prettychalk's main abstractions are:
//!
//!   * [`StyleChain`](style::StyleChain) is an **immutable chain of styles**.
//!     Each accessor, e.g., [`red`](style::StyleChain::red) or
//!     [`bold`](style::StyleChain::bold), returns a new chain with one more
//!     [`Directive`](style::Directive). Rendering text wraps every line in
//!     the directives' escape sequences and restores outer styles that nested
//!     text disables.
//!   * The [`termco`] module offers the **terminal-specific color formats**
//!     [`AnsiColor`](termco::AnsiColor), 8-bit indexed colors, and
//!     [`Rgb`](termco::Rgb), unified by [`Color`](termco::Color).
//!   * [`Level`](style::Level) captures a terminal's **level of color
//!     support**. Chains derived from the same root share a
//!     [`LevelCell`](style::LevelCell), so that changing the level through
//!     one chain changes it for all of them. Colors beyond the current level
//!     are downsampled with [`rgb_to_ansi256`], [`ansi256_to_ansi16`], and
//!     [`rgb_to_ansi16`].
//!
//!
//! ## 2. Chaining Styles
//!
//! [`chalk`] returns the process-wide root chain, whose level is determined
//! from the environment the first time it is used. It honors `FORCE_COLOR`,
//! `COLORTERM`, and `TERM`.
//!
//! ```
//! # use prettychalk::style::{Level, StyleChain};
//! let chalk = StyleChain::new(Level::Ansi256);
//! let warning = chalk.bold().hex("#FFA500")?;
//!
//! assert_eq!(
//!     warning.paint("careful"),
//!     "\x1b[1m\x1b[38;5;214mcareful\x1b[39m\x1b[22m"
//! );
//!
//! let disk = warning.paint("disk");
//! let error = chalk.red().render(["failed:", disk.as_str(), "full"]);
//! assert_eq!(
//!     error,
//!     "\x1b[31mfailed: \x1b[1m\x1b[38;5;214mdisk\x1b[39m\x1b[31m\x1b[22m full\x1b[39m"
//! );
//! # Ok::<(), prettychalk::error::ColorFormatError>(())
//! ```
//!
//! Chains marked as [visible](style::StyleChain::visible) produce no output
//! at all when colors are disabled:
//!
//! ```
//! # use prettychalk::style::{Level, StyleChain};
//! let chalk = StyleChain::new(Level::NoColors);
//! assert_eq!(chalk.red().paint("plain"), "plain");
//! assert_eq!(chalk.red().visible().paint("decoration"), "");
//! ```

use once_cell::sync::Lazy;

mod core;
pub mod error;
pub mod style;
pub mod termco;
mod util;

pub use core::{ansi256_to_ansi16, hex_to_rgb, rgb_to_ansi16, rgb_to_ansi256};

use style::{Level, StyleChain};

static ROOT: Lazy<StyleChain> = Lazy::new(|| StyleChain::new(Level::from_environment()));

/// Get the root style chain.
///
/// The root chain is created on first use, with its level determined by
/// [`Level::from_environment`]. All chains derived from it share its level
/// cell.
pub fn chalk() -> &'static StyleChain {
    &ROOT
}

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;
#[cfg(feature = "pyffi")]
use pyo3::types::PyDict;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn prettychalk(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let modchalk_name = m.name()?;
    let modchalk_name = modchalk_name.to_str()?;
    let modstyle_name = format!("{}.style", modchalk_name);
    let modtermco_name = format!("{}.termco", modchalk_name);

    // -------------------------------------------------------------------- prettychalk
    m.add("chalk", chalk().clone())?;

    // -------------------------------------------------------------- prettychalk.style
    let modstyle = PyModule::new(m.py(), "style")?;
    modstyle.add("__package__", modchalk_name)?;
    modstyle.add_class::<style::Layer>()?;
    modstyle.add_class::<style::Level>()?;
    modstyle.add_class::<style::Modifier>()?;
    modstyle.add_class::<style::StyleChain>()?;
    m.add_submodule(&modstyle)?;

    // Only change __name__ attribute after submodule has been added.
    modstyle.setattr("__name__", &modstyle_name)?;

    // ------------------------------------------------------------- prettychalk.termco
    let modtermco = PyModule::new(m.py(), "termco")?;
    modtermco.add("__package__", modchalk_name)?;
    modtermco.add_class::<termco::AnsiColor>()?;
    modtermco.add_class::<termco::AnsiColorIterator>()?;
    modtermco.add_class::<termco::Color>()?;
    modtermco.add_class::<termco::Rgb>()?;
    m.add_submodule(&modtermco)?;

    // Only change __name__ attribute after submodule has been added.
    modtermco.setattr("__name__", &modtermco_name)?;

    // -------------------------------------------------------------------- sys.modules
    let py_modules: Bound<'_, PyDict> = PyModule::import(m.py(), "sys")?
        .getattr("modules")?
        .downcast_into()?;
    py_modules.set_item(&modstyle_name, modstyle)?;
    py_modules.set_item(&modtermco_name, modtermco)?;

    Ok(())
}
