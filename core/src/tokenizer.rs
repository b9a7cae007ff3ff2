use crate::soundex::soundex;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // letters, digits (any numeric category) and underscore; marks split words
    static ref WORD_RE: Regex = Regex::new(r"[\p{L}\p{N}_]+").expect("valid regex");
}

/// Tokenize text into index terms: lowercase the whole text, take maximal runs of
/// word characters, then pass each run through [`fold_token`].
///
/// Folding only fires for title-case tokens, and tokens cut from lowercased text are
/// never title-case, so in practice every term is a plain lowercase word.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_RE.find_iter(&lowered).map(|m| fold_token(m.as_str())).collect()
}

/// Replace a name-like token (longer than two chars, title-case, purely alphabetic)
/// with its Soundex code; every other token passes through unchanged.
pub fn fold_token(token: &str) -> String {
    if token.chars().count() > 2 && is_title_case(token) && token.chars().all(char::is_alphabetic) {
        soundex(token)
    } else {
        token.to_string()
    }
}

/// Uppercase first character followed only by lowercase characters.
pub fn is_title_case(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(c) if c.is_uppercase() => chars.all(char::is_lowercase),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_tokenize() {
        let t = tokenize("Running, runner's run!");
        assert_eq!(t, vec!["running", "runner", "s", "run"]);
    }

    #[test]
    fn word_chars_are_letters_digits_underscore() {
        // combining accent is not a word char; superscript two is
        assert_eq!(tokenize("cafe\u{301} x"), vec!["cafe", "x"]);
        assert_eq!(tokenize("x²y"), vec!["x²y"]);
        assert_eq!(tokenize("snake_case Ⅻ"), vec!["snake_case", "ⅻ"]);
    }

    #[test]
    fn fold_token_applies_to_names_only() {
        assert_eq!(fold_token("Robert"), "R163");
        assert_eq!(fold_token("robert"), "robert");
        assert_eq!(fold_token("Al"), "Al");
        assert_eq!(fold_token("R2d2"), "R2d2");
        assert_eq!(fold_token("McDonald"), "McDonald");
    }

    #[test]
    fn title_case_predicate() {
        assert!(is_title_case("Robert"));
        assert!(is_title_case("R"));
        assert!(!is_title_case("ROBERT"));
        assert!(!is_title_case("robert"));
        assert!(!is_title_case(""));
    }
}
