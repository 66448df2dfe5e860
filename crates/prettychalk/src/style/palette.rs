//! The named styles.
//!
//! Style chains expose every entry of this table as an accessor method of
//! the same name. [`lookup`] resolves the names at runtime, e.g., for styles
//! read from configuration files.

use super::{Directive, Modifier};
use crate::termco::AnsiColor;

/// Resolve a style name to its directive.
///
/// Names are the modifier names such as `bold`, the color names such as
/// `red` or `red_bright`, and the background color names such as `bg_red`
/// or `bg_red_bright`. `gray` and `grey` are aliases for `black_bright`.
///
/// ```
/// # use prettychalk::style::{palette, Directive, Modifier};
/// # use prettychalk::termco::AnsiColor;
/// assert_eq!(palette::lookup("bold"), Some(Directive::from(Modifier::Bold)));
/// assert_eq!(
///     palette::lookup("bg_grey"),
///     Some(Directive::background(AnsiColor::BrightBlack))
/// );
/// assert_eq!(palette::lookup("teal"), None);
/// ```
pub fn lookup(name: &str) -> Option<Directive> {
    if let Some(modifier) = Modifier::ALL.iter().find(|m| m.name() == name) {
        return Some(Directive::from(*modifier));
    }

    match name.strip_prefix("bg_") {
        Some(color) => lookup_color(color).map(Directive::background),
        None => lookup_color(name).map(Directive::foreground),
    }
}

fn lookup_color(name: &str) -> Option<AnsiColor> {
    if name == "gray" || name == "grey" {
        return Some(AnsiColor::BrightBlack);
    }

    AnsiColor::all().find(|c| c.name() == name)
}

#[cfg(test)]
mod test {
    use super::lookup;
    use crate::style::{Directive, Level, Modifier};
    use crate::termco::AnsiColor;

    #[test]
    fn test_lookup() {
        for modifier in Modifier::ALL {
            assert_eq!(lookup(modifier.name()), Some(Directive::from(modifier)));
        }

        for color in AnsiColor::all() {
            assert_eq!(lookup(color.name()), Some(Directive::foreground(color)));
            assert_eq!(
                lookup(&format!("bg_{}", color.name())),
                Some(Directive::background(color))
            );
        }

        for name in ["gray", "grey"] {
            let fg = lookup(name).map(|d| d.sequence(Level::TrueColor));
            assert_eq!(fg.as_ref().map(|s| s.open()), Some("\x1b[90m"));

            let bg = lookup(&format!("bg_{}", name)).map(|d| d.sequence(Level::TrueColor));
            assert_eq!(bg.as_ref().map(|s| s.open()), Some("\x1b[100m"));
        }

        for name in ["", "bg_", "bg_bold", "bright_red", "Red", "bg_bg_red", "visible"] {
            assert_eq!(lookup(name), None, "{:?} should not be a style", name);
        }
    }
}
