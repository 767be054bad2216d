use crate::KeyValue;
use itertools::Itertools;
use std::{cmp::Reverse, collections::HashMap};

/// Occurrence count per word, built in a single pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordFrequencyMap {
    counts: HashMap<String, u64>,
}

impl WordFrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence of `word`.
    pub fn add(&mut self, word: impl Into<String>) {
        *self.counts.entry(word.into()).or_insert(0) += 1;
    }

    /// Folds the counts of `other` into `self`.
    ///
    /// Merging is commutative and associative, so partial maps built from
    /// disjoint slices of the input can be combined in any order.
    pub fn merge(&mut self, other: WordFrequencyMap) {
        for (word, count) in other.counts {
            *self.counts.entry(word).or_insert(0) += count;
        }
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(w, c)| (w.as_str(), *c))
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// The `k` most frequent words, highest count first. Equal counts are
    /// ordered alphabetically.
    pub fn top_k(&self, k: usize) -> Vec<KeyValue> {
        self.counts
            .iter()
            .map(|(word, count)| (Reverse(*count), word))
            .k_smallest(k)
            .map(|(Reverse(count), word)| KeyValue::new(word.as_str(), count))
            .collect()
    }

    /// The first `n` distinct words in byte-wise ascending order.
    pub fn first_alphabetical(&self, n: usize) -> Vec<&str> {
        self.counts
            .keys()
            .map(String::as_str)
            .k_smallest(n)
            .collect()
    }
}

impl<S: Into<String>> Extend<S> for WordFrequencyMap {
    fn extend<T: IntoIterator<Item = S>>(&mut self, words: T) {
        for word in words {
            self.add(word);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for WordFrequencyMap {
    fn from_iter<T: IntoIterator<Item = S>>(words: T) -> Self {
        let mut map = Self::new();
        map.extend(words);
        map
    }
}
