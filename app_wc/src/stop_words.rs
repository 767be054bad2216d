use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Words excluded from the frequency count. All lowercase.
pub static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "in", "on", "at", "by", "for", "with", "about", "against", "between",
        "into", "through", "during", "before", "after", "above", "below", "to", "from", "up",
        "down", "out", "over", "under", "again", "further", "then", "once",
        "and", "but", "or", "because", "as", "until", "while",
        "of", "off", "so", "if",
        "he", "she", "it", "we", "they", "you", "i", "me", "him", "her", "us", "them",
        "is", "am", "are", "was", "were", "be", "been", "being",
        "do", "does", "did", "doing", "would", "should", "could",
        "has", "have", "had", "that", "this", "all", "his",
    ]
    .into_iter()
    .collect()
});

/// `word` must already be lowercase.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_words_are_lowercase_letters() {
        assert!(!STOP_WORDS.is_empty());
        for word in STOP_WORDS.iter() {
            assert!(word.bytes().all(|b| b.is_ascii_lowercase()), "{word}");
        }
    }

    #[test]
    fn test_is_stop_word() {
        assert!(is_stop_word("the"));
        assert!(is_stop_word("his"));
        assert!(!is_stop_word("whale"));
        assert!(!is_stop_word("The"));
    }
}
