use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The unit of comparison a `Sequence` is split into.
/// Chosen once per diff, both sides always use the same one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// every character is a token, there are no gaps
    Char,
    /// maximal runs of anything but space, tab, `\n` and `\r`
    Word,
    /// maximal runs of anything but `\n` and `\r`
    #[default]
    Line,
}

impl Granularity {
    pub(crate) fn is_separator(self, c: char) -> bool {
        match self {
            Granularity::Char => false,
            Granularity::Word => matches!(c, ' ' | '\t' | '\n' | '\r'),
            Granularity::Line => matches!(c, '\n' | '\r'),
        }
    }
}

/// Lookup failures on a `Sequence`. These are expected at the edges and
/// callers decide whether to abort.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("token index {index} out of range for sequence of length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("inverted span: start {start} is after end {end}")]
    InvertedRange { start: usize, end: usize },
}
