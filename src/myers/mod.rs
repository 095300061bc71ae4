pub mod types;
pub use types::*;

use crate::sequence::Sequence;
use tracing::{debug, trace};

/// One slot per diagonal `k` in `-size..=size`.
#[derive(Clone)]
struct V<T> {
    data: Vec<T>,
    offset: isize,
}

impl<T: Copy + Default> V<T> {
    fn new(size: usize) -> Self {
        V {
            data: vec![T::default(); 2 * size + 1],
            offset: size as isize,
        }
    }

    fn get(&self, k: isize) -> T {
        self.data[(k + self.offset) as usize]
    }

    fn set(&mut self, k: isize, val: T) {
        self.data[(k + self.offset) as usize] = val;
    }
}

/// Finds the shortest edit path between two sequences with the Myers
/// algorithm.
///
/// Every vertex reached is kept in an arena until the search returns, each one
/// pointing at the vertex it was reached from. The winning path is read back
/// from the terminal vertex.
///
/// # Examples
///
/// ```
/// use tokendiff::myers::search;
/// use tokendiff::sequence::Granularity;
///
/// let a = Granularity::Char.sequence("abc");
/// let b = Granularity::Char.sequence("abd");
/// let path = search(&a, &b);
/// assert_eq!(path.distance, 2);
/// assert_eq!(path.points, vec![(0, 0), (2, 2), (3, 2), (3, 3)]);
/// ```
pub fn search(a: &Sequence, b: &Sequence) -> Path {
    if a.raw() == b.raw() {
        trace!("inputs are identical, skipping search");
        return Path::default();
    }

    let m = a.len();
    let n = b.len();
    let maxi = m + n;
    let mut k_lines: V<usize> = V::new(maxi);
    let mut breadcrumbs: V<Option<usize>> = V::new(maxi);
    let mut arena: Vec<Vertex> = Vec::new();

    for d in 0..=maxi as isize {
        for k in (-d..=d).step_by(2) {
            let (mut x, parent) = if d == 0 {
                (0, None)
            } else {
                // down from k + 1 is an insertion, right from k - 1 a deletion
                let down = k == -d || (k != d && k_lines.get(k - 1) < k_lines.get(k + 1));
                let prev_k = if down { k + 1 } else { k - 1 };
                let prev_x = k_lines.get(prev_k);
                let parent = checked_breadcrumb(&arena, breadcrumbs.get(prev_k), prev_k, prev_x);
                (if down { prev_x } else { prev_x + 1 }, Some(parent))
            };
            let mut y = (x as isize - k) as usize;

            arena.push(Vertex { x, y, parent });
            let mut cursor = arena.len() - 1;

            let start_x = x;
            while x < m && y < n && a.token(x) == b.token(y) {
                x += 1;
                y += 1;
            }
            if x != start_x {
                arena.push(Vertex {
                    x,
                    y,
                    parent: Some(cursor),
                });
                cursor = arena.len() - 1;
            }
            k_lines.set(k, x);
            breadcrumbs.set(k, Some(cursor));

            if x >= m && y >= n {
                debug!(
                    old_len = m,
                    new_len = n,
                    distance = d,
                    vertices = arena.len(),
                    "edit path found"
                );
                return Path {
                    points: backtrack(&arena, cursor),
                    distance: d as usize,
                };
            }
        }
    }
    unreachable!("deleting all of a and inserting all of b is always a path")
}

// The vertex recorded on `k` must be the furthest point reached on it.
fn checked_breadcrumb(arena: &[Vertex], crumb: Option<usize>, k: isize, x: usize) -> usize {
    let Some(idx) = crumb else {
        unreachable!("diagonal {k} was never reached");
    };
    let v = arena[idx];
    assert!(
        v.x == x && v.x as isize - v.y as isize == k,
        "breadcrumb ({}, {}) is not the end of diagonal {k} at x = {x}",
        v.x,
        v.y
    );
    idx
}

fn backtrack(arena: &[Vertex], end: usize) -> Vec<(usize, usize)> {
    let mut points = vec![];
    let mut cursor = Some(end);
    while let Some(i) = cursor {
        let v = arena[i];
        points.push((v.x, v.y));
        cursor = v.parent;
    }
    points.reverse();
    points
}

/// Folds a path into runs of insertions and deletions.
///
/// Steps of the same kind with no match in between are merged into one run.
/// A match always ends the current run.
///
/// # Examples
///
/// ```
/// use tokendiff::myers::{coalesce, Edit, EditKind};
///
/// let path = [(0, 0), (1, 0), (2, 0), (3, 1), (3, 2)];
/// assert_eq!(
///     coalesce(&path),
///     vec![Edit::new(EditKind::Delete, 0, 1), Edit::new(EditKind::Insert, 1, 1)]
/// );
/// ```
pub fn coalesce(path: &[(usize, usize)]) -> Vec<Edit> {
    let mut edits: Vec<Edit> = vec![];
    let (mut x, mut y) = (0, 0);
    let mut matched = false;

    for &(ai, bi) in path {
        if (ai, bi) == (x, y) {
            continue;
        }
        if ai > x && bi > y {
            x = ai;
            y = bi;
            matched = true;
            continue;
        }

        let step = if ai > x {
            Edit::new(EditKind::Delete, x, ai - 1)
        } else if bi > y {
            Edit::new(EditKind::Insert, y, bi - 1)
        } else {
            unreachable!("step from ({x}, {y}) to ({ai}, {bi}) advances neither side");
        };
        match edits.last_mut() {
            Some(last) if !matched && last.kind == step.kind => last.end = step.end,
            _ => edits.push(step),
        }
        matched = false;
        x = ai;
        y = bi;
    }

    debug!(runs = edits.len(), "path coalesced");
    edits
}
