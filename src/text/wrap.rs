use std::fmt;

use crate::text::measure::{TextExtent, TextMeasure};

/// Text broken into width-constrained lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrappedText {
    lines: Vec<String>,
}

impl WrappedText {
    /// Lines in reading order. Never empty: blank input yields one empty line.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Lines joined with `\n`.
    pub fn joined(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for WrappedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}

/// Greedily wrap `text` at whitespace so each line measures at most `max_width`.
///
/// Words are never split. A word wider than `max_width` on its own goes on a line by
/// itself and overflows.
pub fn wrap_text<M>(measure: &mut M, text: &str, size_px: f32, max_width: f32) -> WrappedText
where
    M: TextMeasure + ?Sized,
{
    let mut lines = Vec::new();
    let mut words = text.split_whitespace().peekable();

    while words.peek().is_some() {
        let mut line = String::new();
        while let Some(&word) = words.peek() {
            let candidate = if line.is_empty() {
                word.to_owned()
            } else {
                format!("{line} {word}")
            };
            if measure.measure(&candidate, size_px).width > max_width {
                break;
            }
            line = candidate;
            words.next();
        }

        if line.is_empty()
            && let Some(word) = words.next()
        {
            line.push_str(word);
        }
        lines.push(line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    WrappedText { lines }
}

/// Largest wrapped width and height over `texts` at one size.
pub fn max_block_extent<M, S>(measure: &mut M, texts: &[S], size_px: f32, max_width: f32) -> TextExtent
where
    M: TextMeasure + ?Sized,
    S: AsRef<str>,
{
    texts.iter().fold(TextExtent::default(), |acc, text| {
        let wrapped = wrap_text(measure, text.as_ref(), size_px, max_width);
        let extent = measure.measure(&wrapped.joined(), size_px);
        TextExtent {
            width: acc.width.max(extent.width),
            height: acc.height.max(extent.height),
        }
    })
}

#[cfg(test)]
#[path = "../../tests/unit/text/wrap.rs"]
mod tests;
