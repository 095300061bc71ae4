use crate::config::DiffOptions;
use crate::myers::{self, Edit, EditKind};
use crate::sequence::{Granularity, Sequence};
use serde::{Deserialize, Serialize};

/// Algorithms able to produce a `Diff`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    #[default]
    Myers,
}

impl Algorithm {
    pub fn diff<'a>(self, a: Sequence<'a>, b: Sequence<'a>) -> Diff<'a> {
        match self {
            Algorithm::Myers => {
                let path = myers::search(&a, &b);
                let edits = myers::coalesce(&path.points);
                Diff {
                    edits,
                    a,
                    b,
                    distance: path.distance,
                }
            }
        }
    }
}

/// The edit runs turning one text into another, together with the two
/// tokenized texts they index into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diff<'a> {
    edits: Vec<Edit>,
    a: Sequence<'a>,
    b: Sequence<'a>,
    distance: usize,
}

/// A step of a `Diff` positioned on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// `len` tokens that match, starting at `old_start` in a and `new_start` in b
    Equal {
        old_start: usize,
        new_start: usize,
        len: usize,
    },
    Edit(Edit),
}

/// Diffs `a` against `b` with the Myers algorithm.
///
/// # Examples
///
/// ```
/// use tokendiff::{compute_diff, Edit, EditKind, Granularity};
///
/// let diff = compute_diff(
///     "a man, a plan, a canal: panama",
///     "a man, a plan, my canal: panama",
///     Granularity::Word,
/// );
/// assert_eq!(diff.edits(), &[
///     Edit::new(EditKind::Delete, 4, 4),
///     Edit::new(EditKind::Insert, 4, 4),
/// ]);
/// ```
pub fn compute_diff<'a>(a: &'a str, b: &'a str, granularity: Granularity) -> Diff<'a> {
    Algorithm::Myers.diff(granularity.sequence(a), granularity.sequence(b))
}

pub fn diff_chars<'a>(a: &'a str, b: &'a str) -> Diff<'a> {
    compute_diff(a, b, Granularity::Char)
}

pub fn diff_words<'a>(a: &'a str, b: &'a str) -> Diff<'a> {
    compute_diff(a, b, Granularity::Word)
}

pub fn diff_lines<'a>(a: &'a str, b: &'a str) -> Diff<'a> {
    compute_diff(a, b, Granularity::Line)
}

impl<'a> Diff<'a> {
    pub fn with_options(a: &'a str, b: &'a str, options: &DiffOptions) -> Self {
        let granularity = options.granularity;
        options
            .algorithm
            .diff(granularity.sequence(a), granularity.sequence(b))
    }

    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    pub fn a(&self) -> &Sequence<'a> {
        &self.a
    }

    pub fn b(&self) -> &Sequence<'a> {
        &self.b
    }

    pub fn granularity(&self) -> Granularity {
        self.a.granularity()
    }

    /// Number of single token insertions and deletions.
    pub fn distance(&self) -> usize {
        self.distance
    }

    pub fn is_identical(&self) -> bool {
        self.edits.is_empty()
    }

    /// The edit runs interleaved with the matching stretches between them.
    pub fn ops(&self) -> Vec<Op> {
        let mut ops = Vec::with_capacity(self.edits.len() * 2 + 1);
        let (mut old, mut new) = (0, 0);

        for edit in &self.edits {
            let matched = match edit.kind {
                EditKind::Delete => edit.start - old,
                EditKind::Insert => edit.start - new,
            };
            if matched > 0 {
                ops.push(Op::Equal {
                    old_start: old,
                    new_start: new,
                    len: matched,
                });
                old += matched;
                new += matched;
            }
            match edit.kind {
                EditKind::Delete => old = edit.end + 1,
                EditKind::Insert => new = edit.end + 1,
            }
            ops.push(Op::Edit(*edit));
        }

        if old < self.a.len() {
            ops.push(Op::Equal {
                old_start: old,
                new_start: new,
                len: self.a.len() - old,
            });
        }
        ops
    }

    /// Changed tokens, counting a deletion directly followed or preceded by an
    /// insertion as substitutions. Between matches this is
    /// `max(deleted, inserted)`.
    ///
    /// ```
    /// use tokendiff::diff_chars;
    ///
    /// let diff = diff_chars("kitten", "sitting");
    /// assert_eq!(diff.distance(), 5);
    /// assert_eq!(diff.change_count(), 3);
    /// ```
    pub fn change_count(&self) -> usize {
        let mut total = 0;
        let (mut deleted, mut inserted) = (0, 0);
        for op in self.ops() {
            match op {
                Op::Equal { .. } => {
                    total += deleted.max(inserted);
                    deleted = 0;
                    inserted = 0;
                }
                Op::Edit(edit) => match edit.kind {
                    EditKind::Delete => deleted += edit.len(),
                    EditKind::Insert => inserted += edit.len(),
                },
            }
        }
        total + deleted.max(inserted)
    }
}
