use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

// whale's -> whale
static SINGULAR_POSSESSIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([A-Za-z]+)'[sS]\b").unwrap());

// kings' -> kings
static PLURAL_POSSESSIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([A-Za-z]+[sS])'\b{end-half}").unwrap());

/// Canonicalizes possessive suffixes so that `whale's` counts as `whale` and
/// `kings'` counts as `kings`.
///
/// The singular rule runs first, so `James's` becomes `James`. Both rules are
/// reapplied until the line stops changing, so stacked suffixes such as
/// `whale's's` reduce all the way to `whale`. Letter case is left untouched.
/// Returns the input borrowed when neither rule matched.
pub fn normalize(line: &str) -> Cow<'_, str> {
    let mut line = Cow::Borrowed(line);
    loop {
        // every rewrite drops an apostrophe, so this terminates
        let stripped = match strip_once(&line) {
            Cow::Owned(stripped) => stripped,
            Cow::Borrowed(_) => break,
        };
        line = Cow::Owned(stripped);
    }
    line
}

fn strip_once(line: &str) -> Cow<'_, str> {
    match SINGULAR_POSSESSIVE.replace_all(line, "$1") {
        Cow::Borrowed(line) => PLURAL_POSSESSIVE.replace_all(line, "$1"),
        Cow::Owned(line) => Cow::Owned(PLURAL_POSSESSIVE.replace_all(&line, "$1").into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singular_possessive() {
        assert_eq!(normalize("the whale's tail"), "the whale tail");
        assert_eq!(normalize("Ahab's."), "Ahab.");
        assert_eq!(normalize("WHALE'S"), "WHALE");
    }

    #[test]
    fn test_plural_possessive() {
        assert_eq!(normalize("the kings' crowns"), "the kings crowns");
        assert_eq!(normalize("sailors'."), "sailors.");
        assert_eq!(normalize("KINGS'"), "KINGS");
    }

    #[test]
    fn test_singular_rule_wins_on_s_apostrophe_s() {
        assert_eq!(normalize("James's hat"), "James hat");
    }

    #[test]
    fn test_not_a_whole_word() {
        assert_eq!(normalize("whale'st"), "whale'st");
        assert_eq!(normalize("1whale's"), "1whale's");
        assert_eq!(normalize("kings'x"), "kings'x");
    }

    #[test]
    fn test_stacked_suffixes() {
        assert_eq!(normalize("whale's's"), "whale");
        assert_eq!(normalize("kings''s"), "kings");
        assert_eq!(normalize("James's's"), "James");
    }

    #[test]
    fn test_unchanged_line_is_borrowed() {
        assert!(matches!(normalize("no possessives here"), Cow::Borrowed(_)));
        assert!(matches!(normalize(""), Cow::Borrowed(_)));
    }

    #[test]
    fn test_scenario_line() {
        assert_eq!(
            normalize("The whale's tail and the kings' crowns."),
            "The whale tail and the kings crowns."
        );
    }

    #[test]
    fn test_idempotent() {
        for line in [
            "The whale's tail and the kings' crowns.",
            "James's boat, the brothers' nets, it's Ahab's ship",
            "plain text without any apostrophes",
            "O'Brien's sons' dogs'",
            "whale's's",
            "kings''s",
            "the dogs''s bowls' rims's",
        ] {
            let once = normalize(line).into_owned();
            assert_eq!(normalize(&once), once.as_str(), "{line}");
        }
    }
}
