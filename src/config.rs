use crate::diff::{Algorithm, Diff};
use crate::score::Scorer;
use crate::sequence::Granularity;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown granularity '{0}', expected char, word or line")]
    UnknownGranularity(String),

    #[error("unknown diff algorithm '{0}', expected myers")]
    UnknownAlgorithm(String),

    #[error("unknown scorer '{0}', expected simple_ratio")]
    UnknownScorer(String),
}

/// How two texts are compared and scored.
///
/// Every field is optional when deserializing, and each tag also parses from
/// its plain name.
///
/// # Examples
///
/// ```
/// use tokendiff::{Algorithm, DiffOptions, Granularity, Scorer};
///
/// let granularity: Granularity = "word".parse().unwrap();
/// let options = DiffOptions { granularity, ..DiffOptions::default() };
/// assert_eq!(options.algorithm, Algorithm::Myers);
/// assert_eq!(options.scorer, Scorer::SimpleRatio);
/// assert_eq!(options.diff("a b", "a c").edits().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    pub granularity: Granularity,
    pub algorithm: Algorithm,
    pub scorer: Scorer,
}

impl DiffOptions {
    pub fn new(granularity: Granularity) -> Self {
        DiffOptions {
            granularity,
            ..DiffOptions::default()
        }
    }

    pub fn diff<'a>(&self, a: &'a str, b: &'a str) -> Diff<'a> {
        Diff::with_options(a, b, self)
    }

    /// Diffs `a` against `b` and scores the result with the configured scorer.
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        self.scorer.score(&self.diff(a, b))
    }
}

impl FromStr for Granularity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "char" | "chars" => Ok(Granularity::Char),
            "word" | "words" => Ok(Granularity::Word),
            "line" | "lines" => Ok(Granularity::Line),
            _ => Err(ConfigError::UnknownGranularity(s.to_string())),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Granularity::Char => "char",
            Granularity::Word => "word",
            Granularity::Line => "line",
        })
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "myers" => Ok(Algorithm::Myers),
            _ => Err(ConfigError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Myers => f.write_str("myers"),
        }
    }
}

impl FromStr for Scorer {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple_ratio" | "simple" => Ok(Scorer::SimpleRatio),
            _ => Err(ConfigError::UnknownScorer(s.to_string())),
        }
    }
}

impl fmt::Display for Scorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scorer::SimpleRatio => f.write_str("simple_ratio"),
        }
    }
}
