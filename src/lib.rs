pub mod config;
pub mod diff;
pub mod myers;
pub mod score;
pub mod sequence;
pub mod unified;

pub use config::{ConfigError, DiffOptions};
pub use diff::{compute_diff, diff_chars, diff_lines, diff_words, Algorithm, Diff, Op};
pub use myers::{Edit, EditKind};
pub use score::Scorer;
pub use sequence::{Granularity, Sequence, SequenceError};
pub use unified::{render_unified, FormatError};
