use crate::{KeyValue, WordFrequencyMap};
use std::fmt::{self, Display};

/// How many entries each listing shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub top_k: usize,
    pub unique: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_k: 5,
            unique: 50,
        }
    }
}

/// The three read-only views over a finished [`WordFrequencyMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub config: Config,
    pub total: u64,
    pub top: Vec<KeyValue>,
    pub unique: Vec<String>,
}

impl Report {
    pub fn new(freq: &WordFrequencyMap, config: Config) -> Self {
        Self {
            config,
            total: freq.total(),
            top: freq.top_k(config.top_k),
            unique: freq
                .first_alphabetical(config.unique)
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total words (after filtering): {}", self.total)?;

        writeln!(f)?;
        writeln!(f, "Top {} most frequent words:", self.config.top_k)?;
        for KeyValue { key, value } in &self.top {
            writeln!(f, "{} -> {}", key, value)?;
        }

        writeln!(f)?;
        writeln!(f, "Top {} unique words (alphabetical):", self.config.unique)?;
        for word in &self.unique {
            writeln!(f, "{}", word)?;
        }
        Ok(())
    }
}
