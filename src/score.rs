use crate::diff::Diff;
use crate::myers::Edit;
use serde::{Deserialize, Serialize};

/// Ways of turning a `Diff` into a similarity score from 0 to 100, where 100
/// means identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scorer {
    /// share of the longer side left untouched by the edits
    #[default]
    SimpleRatio,
}

impl Scorer {
    pub fn score(self, diff: &Diff) -> f64 {
        match self {
            Scorer::SimpleRatio => simple_ratio(diff),
        }
    }
}

// Insertions and deletions both count against the longer side, so heavily
// rewritten texts can go below zero before clamping. Two empty texts are
// identical.
fn simple_ratio(diff: &Diff) -> f64 {
    let longest = diff.a().len().max(diff.b().len());
    if longest == 0 {
        return 100.0;
    }
    let changed: usize = diff.edits().iter().map(Edit::len).sum();
    let common = longest as f64 - changed as f64;
    (common * 100.0 / longest as f64).clamp(0.0, 100.0)
}
