mod types;
pub use types::*;

/// A string split into tokens at some `Granularity`.
///
/// Only the byte offsets of each token are stored, the text itself stays
/// borrowed. Whatever lies between two tokens is the gap, and
/// `leading_gap` followed by every token and its `gap_following`
/// gives back the original string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence<'a> {
    raw: &'a str,
    runs: Vec<(usize, usize)>,
    granularity: Granularity,
}

impl Granularity {
    /// Splits `raw` into a `Sequence` of this granularity.
    pub fn sequence(self, raw: &str) -> Sequence<'_> {
        Sequence::new(raw, self)
    }
}

impl<'a> Sequence<'a> {
    /// Tokenizes `raw` in a single left to right scan.
    ///
    /// # Examples
    ///
    /// ```
    /// use tokendiff::sequence::{Granularity, Sequence};
    ///
    /// let seq = Sequence::new("  hello \t world\n", Granularity::Word);
    /// assert_eq!(seq.len(), 2);
    /// assert_eq!(seq.leading_gap(), "  ");
    /// assert_eq!(seq.token_at(1), Ok("world"));
    /// assert_eq!(seq.gap_following(0), Ok(" \t "));
    /// assert_eq!(seq.gap_following(1), Ok("\n"));
    /// ```
    pub fn new(raw: &'a str, granularity: Granularity) -> Self {
        Sequence {
            raw,
            runs: tokenize(raw, granularity),
            granularity,
        }
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn token_at(&self, i: usize) -> Result<&'a str, SequenceError> {
        self.check(i)?;
        Ok(self.token(i))
    }

    /// Text of tokens `start` through `end` (inclusive) with the gaps between
    /// them, but without the gap before `start` or after `end`.
    pub fn span_inclusive(&self, start: usize, end: usize) -> Result<&'a str, SequenceError> {
        self.check_span(start, end)?;
        Ok(&self.raw[self.runs[start].0..self.runs[end].1])
    }

    /// Like `span_inclusive`, plus the gap following `end`.
    pub fn span_with_trailing_gap(
        &self,
        start: usize,
        end: usize,
    ) -> Result<&'a str, SequenceError> {
        self.check_span(start, end)?;
        Ok(&self.raw[self.runs[start].0..self.next_start(end)])
    }

    /// The gap between token `i` and token `i + 1`. For the last token this is
    /// whatever trails it in the input, possibly nothing. `i == len()` also
    /// names that tail, which for a sequence without tokens is the whole input.
    pub fn gap_following(&self, i: usize) -> Result<&'a str, SequenceError> {
        if i == self.len() {
            let start = self.runs.last().map_or(0, |&(_, end)| end);
            return Ok(&self.raw[start..]);
        }
        self.check(i)?;
        Ok(&self.raw[self.runs[i].1..self.next_start(i)])
    }

    /// The gap in front of token `i`: `leading_gap` for the first token,
    /// `gap_following(i - 1)` otherwise.
    pub fn gap_before(&self, i: usize) -> Result<&'a str, SequenceError> {
        match i.checked_sub(1) {
            None => Ok(self.leading_gap()),
            Some(prev) => self.gap_following(prev),
        }
    }

    /// Everything before the first token. A sequence without tokens is all
    /// leading gap.
    pub fn leading_gap(&self) -> &'a str {
        match self.runs.first() {
            Some(&(start, _)) => &self.raw[..start],
            None => self.raw,
        }
    }

    pub fn tokens(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.runs.iter().map(move |&(s, e)| &self.raw[s..e])
    }

    // callers guarantee `i < len`
    pub(crate) fn token(&self, i: usize) -> &'a str {
        let (s, e) = self.runs[i];
        &self.raw[s..e]
    }

    fn next_start(&self, i: usize) -> usize {
        self.runs.get(i + 1).map_or(self.raw.len(), |&(s, _)| s)
    }

    fn check(&self, i: usize) -> Result<(), SequenceError> {
        if i >= self.len() {
            return Err(SequenceError::OutOfRange {
                index: i,
                len: self.len(),
            });
        }
        Ok(())
    }

    fn check_span(&self, start: usize, end: usize) -> Result<(), SequenceError> {
        if start > end {
            return Err(SequenceError::InvertedRange { start, end });
        }
        self.check(start)?;
        self.check(end)
    }
}

fn tokenize(raw: &str, granularity: Granularity) -> Vec<(usize, usize)> {
    if granularity == Granularity::Char {
        return raw
            .char_indices()
            .map(|(i, c)| (i, i + c.len_utf8()))
            .collect();
    }

    let mut runs = vec![];
    let mut start = None;
    for (i, c) in raw.char_indices() {
        match (granularity.is_separator(c), start) {
            (true, Some(s)) => {
                runs.push((s, i));
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        runs.push((s, raw.len()));
    }
    runs
}
