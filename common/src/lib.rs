mod frequency;
mod report;
mod source;

pub use frequency::WordFrequencyMap;
pub use report::{Config, Report};
pub use source::{lines, open, Lines};

/// A word with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct KeyValue {
    pub key: String,
    pub value: u64,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: u64) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}
