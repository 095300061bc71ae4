use std::ops::RangeInclusive;

/// Which side an edit run refers to.
/// `Delete` indexes into the old sequence, `Insert` into the new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditKind {
    Insert,
    Delete,
}

/// A contiguous run of insertions or deletions.
/// `start` and `end` are inclusive token indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edit {
    pub start: usize,
    pub end: usize,
    pub kind: EditKind,
}

#[allow(clippy::len_without_is_empty)]
impl Edit {
    pub fn new(kind: EditKind, start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Edit { start, end, kind }
    }

    /// Number of tokens the run covers.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn range(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

/// The shortest route through the edit graph, from `(0, 0)` to `(m, n)`.
/// Consecutive points differ by one insertion, one deletion or a snake of
/// matches. Identical inputs give an empty path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Path {
    pub points: Vec<(usize, usize)>,
    /// number of non-diagonal steps on `points`
    pub distance: usize,
}

/// A point of the edit graph. `parent` indexes the arena of the search that
/// produced it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Vertex {
    pub x: usize,
    pub y: usize,
    pub parent: Option<usize>,
}
