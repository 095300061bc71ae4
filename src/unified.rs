use crate::diff::{Diff, Op};
use crate::myers::EditKind;
use crate::sequence::SequenceError;
use std::io::{self, Write};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("range lookup failed: {0}")]
    Range(#[from] SequenceError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Writes `diff` to `sink`, returning `false` if rendering had to stop.
/// Whatever was written before the failure stays written.
///
/// Unchanged text is written as is, deleted spans of the old text are
/// prefixed with `-` and inserted spans of the new text with `+`. The gap
/// written before each piece comes from the side that piece is read from:
/// the new text before an insertion and before context that follows one, the
/// old text everywhere else. Dropping the `+` spans leaves the old tokens,
/// dropping the `-` spans leaves the new ones.
///
/// Context is flushed before insertions as well as before deletions, so an
/// insertion is always printed after the unchanged text it follows.
///
/// # Examples
///
/// ```
/// use tokendiff::{diff_lines, render_unified};
///
/// let diff = diff_lines("a\nb", "a\nb\nc");
/// let mut out = vec![];
/// assert!(render_unified(&diff, &mut out));
/// assert_eq!(out, b"a\nb\n+c");
/// ```
pub fn render_unified<W: Write>(diff: &Diff, sink: &mut W) -> bool {
    match diff.write_unified(sink) {
        Ok(()) => true,
        Err(err) => {
            warn!(%err, "unified rendering aborted");
            false
        }
    }
}

impl Diff<'_> {
    pub fn write_unified<W: Write>(&self, w: &mut W) -> Result<(), FormatError> {
        self.replay(|chunk| w.write_all(chunk.as_bytes()))
    }

    /// # Examples
    ///
    /// ```
    /// use tokendiff::diff_words;
    ///
    /// let diff = diff_words("a man, a plan, a canal", "a man, a plan, my canal");
    /// assert_eq!(diff.to_unified().unwrap(), "a man, a plan, -a +my canal");
    /// ```
    pub fn to_unified(&self) -> Result<String, FormatError> {
        let mut out = String::with_capacity(self.a().raw().len() + self.b().raw().len());
        self.replay(|chunk| {
            out.push_str(chunk);
            Ok(())
        })?;
        Ok(out)
    }

    fn replay<F>(&self, mut emit: F) -> Result<(), FormatError>
    where
        F: FnMut(&str) -> io::Result<()>,
    {
        let (a, b) = (self.a(), self.b());
        let mut last_inserted = false;
        for op in self.ops() {
            match op {
                Op::Equal {
                    old_start,
                    new_start,
                    len,
                } => {
                    let gap = if last_inserted {
                        b.gap_before(new_start)?
                    } else {
                        a.gap_before(old_start)?
                    };
                    emit(gap)?;
                    emit(a.span_inclusive(old_start, old_start + len - 1)?)?;
                }
                Op::Edit(edit) => {
                    let (marker, side) = match edit.kind {
                        EditKind::Delete => ("-", a),
                        EditKind::Insert => ("+", b),
                    };
                    emit(side.gap_before(edit.start)?)?;
                    emit(marker)?;
                    emit(side.span_inclusive(edit.start, edit.end)?)?;
                }
            }
            last_inserted = matches!(op, Op::Edit(e) if e.kind == EditKind::Insert);
        }
        let side = if last_inserted { b } else { a };
        emit(side.gap_following(side.len())?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::{compute_diff, diff_chars, diff_lines, diff_words};
    use crate::sequence::Granularity;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    // drops every `kind` run with its marker, keeps the other run's text
    // without its marker; only valid when no token contains `+` or `-`
    fn strip(rendered: &str, diff: &Diff, kind: EditKind) -> String {
        let mut out = String::new();
        let mut rest = rendered;
        for op in diff.ops() {
            let Op::Edit(e) = op else { continue };
            let (marker, side) = match e.kind {
                EditKind::Delete => ('-', diff.a()),
                EditKind::Insert => ('+', diff.b()),
            };
            let at = rest.find(marker).unwrap();
            let span = side.span_inclusive(e.start, e.end).unwrap();
            assert!(rest[at + 1..].starts_with(span));
            out.push_str(&rest[..at]);
            if e.kind != kind {
                out.push_str(span);
            }
            rest = &rest[at + 1 + span.len()..];
        }
        out.push_str(rest);
        out
    }

    fn tokens(raw: &str, g: Granularity) -> Vec<&str> {
        g.sequence(raw).tokens().collect()
    }

    proptest! {
        #[test]
        fn test_rendering_keeps_old_tokens(old in "[ab \n]{0,24}", new in "[ab \n]{0,24}") {
            for g in [Granularity::Char, Granularity::Word, Granularity::Line] {
                let diff = compute_diff(&old, &new, g);
                let rendered = diff.to_unified().unwrap();
                let kept = strip(&rendered, &diff, EditKind::Insert);
                prop_assert_eq!(tokens(&kept, g), tokens(&old, g));
            }
        }

        #[test]
        fn test_rendering_keeps_new_tokens(old in "[ab \n]{0,24}", new in "[ab \n]{0,24}") {
            for g in [Granularity::Char, Granularity::Word, Granularity::Line] {
                let diff = compute_diff(&old, &new, g);
                let rendered = diff.to_unified().unwrap();
                let kept = strip(&rendered, &diff, EditKind::Delete);
                prop_assert_eq!(tokens(&kept, g), tokens(&new, g));
            }
        }
    }

    #[rstest]
    #[case::word_swap(
        Granularity::Word,
        "a man, a plan, a canal: panama",
        "a man, a plan, my canal: panama",
        "a man, a plan, -a +my canal: panama"
    )]
    #[case::insert_only(Granularity::Word, "a c", "a b c", "a +b c")]
    #[case::lines(Granularity::Line, "a\nb\nc\n", "a\nc\nd\n", "a\n-b\nc\n+d\n")]
    #[case::chars(Granularity::Char, "kitten", "sitting", "-k+sitt-e+in+g")]
    #[case::leading_gap(Granularity::Word, "  lead a", "  lead b\n", "  lead -a +b\n")]
    #[case::all_inserted(Granularity::Char, "", "abc", "+abc")]
    #[case::all_deleted(Granularity::Char, "abc", "", "-abc")]
    #[case::appended_line(Granularity::Line, "a\nb", "a\nb\nc", "a\nb\n+c")]
    #[case::new_leading_gap(Granularity::Line, "x\n", "\n\ny\nx\n", "\n\n+y\nx\n")]
    #[case::insert_at_start(Granularity::Word, "b", "a b", "+a b")]
    #[case::identical(Granularity::Line, "x\ny", "x\ny", "x\ny")]
    #[case::gaps_only(Granularity::Word, "   ", "  ", "   ")]
    fn test_render(
        #[case] g: Granularity,
        #[case] old: &str,
        #[case] new: &str,
        #[case] expected: &str,
    ) {
        let diff = compute_diff(old, new, g);
        let mut sink = vec![];
        assert!(render_unified(&diff, &mut sink));
        assert_eq!(String::from_utf8(sink).unwrap(), expected);
    }

    #[test]
    fn test_write_unified_matches_to_unified() {
        let diff = diff_lines("one\ntwo\nthree\n", "one\n2\nthree\nfour\n");
        let mut sink = vec![];
        diff.write_unified(&mut sink).unwrap();
        assert_eq!(sink, diff.to_unified().unwrap().into_bytes());
    }

    struct FailingSink {
        written: usize,
        budget: usize,
    }

    impl Write for FailingSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.written + buf.len() > self.budget {
                return Err(io::Error::new(io::ErrorKind::WriteZero, "sink full"));
            }
            self.written += buf.len();
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_sink_failure_keeps_partial_output() {
        let diff = diff_words("a b c", "a x c");
        let mut sink = FailingSink {
            written: 0,
            budget: 2,
        };
        assert!(!render_unified(&diff, &mut sink));
        assert_eq!(sink.written, 2);
        assert!(matches!(
            diff.write_unified(&mut FailingSink {
                written: 0,
                budget: 0
            }),
            Err(FormatError::Io(_))
        ));
    }

    #[test]
    fn test_chars_render_without_gaps() {
        let diff = diff_chars("abc", "abd");
        assert_eq!(diff.to_unified().unwrap(), "ab-c+d");
    }
}
