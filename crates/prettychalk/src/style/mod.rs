//! Terminal styles as chains of directives.
//!
//! This module supports styling terminal output with ANSI SGR escape
//! sequences through [`StyleChain`]s. A chain is an immutable sequence of
//! [`Directive`]s, each either a text [`Modifier`] or a foreground or
//! background [`Color`](crate::termco::Color), plus a handle to a shared
//! [`LevelCell`] that determines the [`Level`] of color support when text is
//! rendered.
//!
//!
//! # Chaining Styles
//!
//! The three steps for using styles are:
//!
//!  1. Fluently assemble a chain by calling one accessor per style.
//!  2. Optionally adjust the level of color support, which applies to all
//!     chains sharing the same level cell.
//!  3. Render text with [`StyleChain::paint`] or [`StyleChain::render`].
//!
//! ```
//! # use prettychalk::style::{Level, StyleChain};
//! let chalk = StyleChain::new(Level::TrueColor);
//! let header = chalk.bold().rgb(255, 40, 39);
//! assert_eq!(
//!     header.paint("Wow!"),
//!     "\x1b[1m\x1b[38;2;255;40;39mWow!\x1b[39m\x1b[22m"
//! );
//!
//! chalk.set_level(Level::Ansi16);
//! assert_eq!(header.paint("Wow!"), "\x1b[1m\x1b[91mWow!\x1b[39m\x1b[22m");
//! ```
//!
//! Unlike with a single combined style, every directive contributes its own
//! escape sequences. When a color is set more than once, the terminal honors
//! the last one.

mod chain;
mod context;
mod format;
pub mod palette;
mod render;
mod sequence;

pub use chain::StyleChain;
pub use context::{Layer, Level, LevelCell};
pub use format::Modifier;
pub use sequence::{esc, ControlSequence, Directive};
