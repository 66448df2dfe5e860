use std::fmt::Display;

use super::{ControlSequence, Level, StyleChain};

impl StyleChain {
    /// Render the value with this chain's styles.
    ///
    /// This method is equivalent to [`StyleChain::render`] with a single
    /// value.
    pub fn paint(&self, value: impl Display) -> String {
        self.render_with([value], " ")
    }

    /// Render the values, separated by spaces, with this chain's styles.
    pub fn render<I, T>(&self, values: I) -> String
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        self.render_with(values, " ")
    }

    /// Render the values, separated by the given separator, with this chain's
    /// styles.
    ///
    /// Text already styled by another chain may be nested inside. Whenever
    /// the nested text disables a style that this chain also uses, this
    /// method re-enables the style right after. Every line of the text gets
    /// its own pair of opening and closing sequences, so that styles neither
    /// bleed across line breaks nor get lost when text is printed line by
    /// line. Both `\n` and `\r\n` are preserved.
    ///
    /// Rendering results in the empty string if the joined text is empty or
    /// if this chain is [visible](StyleChain::visible) and the level is
    /// [`Level::NoColors`]. Otherwise, a chain at level `NoColors` produces
    /// the joined text without escape sequences.
    ///
    /// ```
    /// # use prettychalk::style::{Level, StyleChain};
    /// let chalk = StyleChain::new(Level::Ansi16);
    /// let inner = chalk.underline().paint("bar");
    /// assert_eq!(
    ///     chalk.red().render(["foo", inner.as_str(), "!"]),
    ///     "\x1b[31mfoo \x1b[4mbar\x1b[24m !\x1b[39m"
    /// );
    /// ```
    pub fn render_with<I, T>(&self, values: I, separator: &str) -> String
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        let text = join(values, separator);
        if text.is_empty() {
            return text;
        }

        let level = self.level();
        if level == Level::NoColors {
            return if self.is_visible() { String::new() } else { text };
        }

        let sequences: Vec<ControlSequence> = self
            .directives()
            .iter()
            .map(|directive| directive.sequence(level))
            .collect();

        apply(&sequences, text)
    }
}

fn join<I, T>(values: I, separator: &str) -> String
where
    I: IntoIterator<Item = T>,
    T: Display,
{
    let mut text = String::new();
    for (index, value) in values.into_iter().enumerate() {
        if 0 < index {
            text.push_str(separator);
        }
        text.push_str(&value.to_string());
    }
    text
}

fn apply(sequences: &[ControlSequence], mut text: String) -> String {
    if sequences.is_empty() {
        return text;
    }

    // Innermost directive first, so that re-opened sequences nest properly.
    for sequence in sequences.iter().rev() {
        let reopened = format!("{}{}", sequence.close(), sequence.open());
        text = text.replace(sequence.close(), &reopened);
    }

    let prefix: String = sequences.iter().map(ControlSequence::open).collect();
    let suffix: String = sequences.iter().rev().map(ControlSequence::close).collect();

    let mut output = String::with_capacity(text.len() + prefix.len() + suffix.len());
    output.push_str(&prefix);

    let mut rest = text.as_str();
    while let Some(index) = rest.find('\n') {
        let (line, remainder) = rest.split_at(index);
        let (line, line_break) = match line.strip_suffix('\r') {
            Some(line) => (line, "\r\n"),
            None => (line, "\n"),
        };

        output.push_str(line);
        output.push_str(&suffix);
        output.push_str(line_break);
        output.push_str(&prefix);
        rest = &remainder[1..];
    }

    output.push_str(rest);
    output.push_str(&suffix);
    output
}
