//! Word-count map side: turns one raw line into the case-folded words that
//! survive stop-word filtering.
mod normalize;
mod stop_words;

pub use normalize::normalize;
pub use stop_words::{is_stop_word, STOP_WORDS};

/// Splits `line` into maximal runs of ASCII letters. Case is preserved.
pub fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|w| !w.is_empty())
}

/// Lowercases a token and drops it if it is empty, the stray `s`, or a stop word.
pub fn fold(token: &str) -> Option<String> {
    let word = token.to_ascii_lowercase();
    if word.is_empty() || word == "s" || is_stop_word(&word) {
        return None;
    }
    Some(word)
}

/// Normalize, tokenize and filter a single line.
pub fn map(line: &str) -> Vec<String> {
    let line = normalize(line);
    tokenize(&line).filter_map(fold).collect()
}
